//! Activity records — the two fixture record kinds and the tagged feed
//! item that unifies them.
//!
//! RULE: the social/wallet discriminant is decided once, at
//! construction. Nothing downstream inspects record shape to guess.

use crate::types::{ActivityId, Address, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialKind {
    Like,
    Repost,
    Reply,
    Mention,
}

/// An interaction on the connected social account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialActivity {
    pub id: ActivityId,
    pub kind: SocialKind,
    pub display_name: String,
    pub handle: String,
    pub avatar_url: String,
    pub content: String,
    pub timestamp: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxKind {
    Send,
    Receive,
    Swap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxStatus {
    Completed,
    Pending,
    Failed,
}

/// An on-chain transaction touching one of the tracked wallets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletActivity {
    pub id: ActivityId,
    pub kind: TxKind,
    pub amount: f64,
    pub currency: String,
    pub timestamp: Timestamp,
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    pub status: TxStatus,
}

/// A single feed item, tagged with its origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Activity {
    Social(SocialActivity),
    Wallet(WalletActivity),
}

impl Activity {
    pub fn id(&self) -> &str {
        match self {
            Activity::Social(a) => &a.id,
            Activity::Wallet(a) => &a.id,
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        match self {
            Activity::Social(a) => a.timestamp,
            Activity::Wallet(a) => a.timestamp,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Activity::Social(_) => Category::Social,
            Activity::Wallet(_) => Category::Wallet,
        }
    }
}

/// Feed filter selected by the user. `All` passes everything through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    All,
    Social,
    Wallet,
}

impl Category {
    pub fn matches(&self, item: &Activity) -> bool {
        match self {
            Category::All => true,
            _ => item.category() == *self,
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Category::All),
            "social" => Ok(Category::Social),
            "wallet" => Ok(Category::Wallet),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}
