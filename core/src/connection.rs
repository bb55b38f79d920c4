//! Connection state — which social identity and wallet addresses the
//! user has linked.
//!
//! Both booleans are persisted alongside the fields they summarize, and
//! every mutator recomputes them:
//!   social_connected == social_handle.is_some()
//!   wallet_connected == !wallet_addresses.is_empty()

use crate::{
    error::{FeedError, FeedResult},
    types::Address,
};
use serde::{Deserialize, Serialize};

/// Disconnect target for [`ConnectionState::disconnect_wallet`].
/// Replaces the original UI's "all" string sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletTarget {
    All,
    Address(Address),
}

impl WalletTarget {
    /// Parse the user-facing form: the literal `all`, or an address.
    pub fn parse(s: &str) -> WalletTarget {
        if s == "all" {
            WalletTarget::All
        } else {
            WalletTarget::Address(s.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionState {
    pub social_connected: bool,
    pub social_handle: Option<String>,
    pub wallet_connected: bool,
    pub wallet_addresses: Vec<Address>,
}

impl ConnectionState {
    /// First-run state: everything disconnected, no addresses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Link the social account. Last write wins on repeated calls.
    pub fn connect_social(&mut self, handle: &str) -> FeedResult<()> {
        if handle.is_empty() {
            return Err(FeedError::EmptyHandle);
        }
        self.social_handle = Some(handle.to_string());
        self.social_connected = true;
        Ok(())
    }

    pub fn disconnect_social(&mut self) {
        self.social_handle = None;
        self.social_connected = false;
    }

    /// Track a wallet address. An address already tracked is not
    /// appended again.
    pub fn connect_wallet(&mut self, address: &str) -> FeedResult<()> {
        if address.is_empty() {
            return Err(FeedError::EmptyAddress);
        }
        if !self.wallet_addresses.iter().any(|a| a == address) {
            self.wallet_addresses.push(address.to_string());
        }
        self.wallet_connected = true;
        Ok(())
    }

    /// Remove one address (all occurrences) or every address.
    pub fn disconnect_wallet(&mut self, target: &WalletTarget) {
        match target {
            WalletTarget::All => self.wallet_addresses.clear(),
            WalletTarget::Address(addr) => self.wallet_addresses.retain(|a| a != addr),
        }
        self.wallet_connected = !self.wallet_addresses.is_empty();
    }

    pub fn anything_connected(&self) -> bool {
        self.social_connected || self.wallet_connected
    }
}
