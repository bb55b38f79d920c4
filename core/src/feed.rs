//! Activity aggregation — merge, sort, and filter the two fixture sets
//! into the unified feed.
//!
//! All queries here are pure: slices in, owned Vecs out.

use crate::{
    activity::{Activity, Category, SocialActivity, WalletActivity},
    types::Address,
};

/// Merge both record sets into one feed, most recent first.
///
/// Social items are concatenated before wallet items and the sort is
/// stable, so equal timestamps keep that order deterministically.
pub fn list_all(social: &[SocialActivity], wallet: &[WalletActivity]) -> Vec<Activity> {
    let mut items: Vec<Activity> = social
        .iter()
        .cloned()
        .map(Activity::Social)
        .chain(wallet.iter().cloned().map(Activity::Wallet))
        .collect();
    items.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    items
}

/// Keep only the items in `category`. `Category::All` is the identity.
pub fn filter_by_category(items: &[Activity], category: Category) -> Vec<Activity> {
    items
        .iter()
        .filter(|item| category.matches(item))
        .cloned()
        .collect()
}

/// All wallet activity for one address, most recent first.
pub fn activities_for_wallet(wallet: &[WalletActivity], address: &Address) -> Vec<WalletActivity> {
    let mut items: Vec<WalletActivity> = wallet
        .iter()
        .filter(|a| &a.address == address)
        .cloned()
        .collect();
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items
}
