//! Tracked wallet fixture records.

use crate::types::{Address, Timestamp, WalletId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub name: String,
    pub address: Address,
    pub balance: f64,
    pub currency: String,
    pub icon: String,
    pub last_activity: Timestamp,
}
