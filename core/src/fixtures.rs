//! Static seed data — the mock feed standing in for a live API.
//!
//! The JSON documents are embedded at compile time and parsed once per
//! call. A real deployment would replace this module with network
//! clients; nothing outside it knows the data is canned.

use crate::{
    activity::{SocialActivity, WalletActivity},
    error::FeedResult,
    wallet::Wallet,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ActivitiesFile {
    social: Vec<SocialActivity>,
    wallet: Vec<WalletActivity>,
}

#[derive(Debug, Deserialize)]
struct WalletsFile {
    wallets: Vec<Wallet>,
}

/// The full social-activity fixture set, in authored order.
pub fn social_activities() -> FeedResult<Vec<SocialActivity>> {
    let file: ActivitiesFile = serde_json::from_str(include_str!("../data/activities.json"))?;
    Ok(file.social)
}

/// The full wallet-activity fixture set, in authored order.
pub fn wallet_activities() -> FeedResult<Vec<WalletActivity>> {
    let file: ActivitiesFile = serde_json::from_str(include_str!("../data/activities.json"))?;
    Ok(file.wallet)
}

/// The tracked-wallet fixture set.
pub fn wallets() -> FeedResult<Vec<Wallet>> {
    let file: WalletsFile = serde_json::from_str(include_str!("../data/wallets.json"))?;
    Ok(file.wallets)
}
