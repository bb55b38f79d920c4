//! Activity aggregator tests — merge ordering, category filtering,
//! per-wallet history, and the detail-lookup failure mode.

use chainfeed_core::{
    activity::{
        Activity, Category, SocialActivity, SocialKind, TxKind, TxStatus, WalletActivity,
    },
    app::{App, EmptyState},
    error::FeedError,
    feed, fixtures,
    types::Timestamp,
};

const MAIN_WALLET: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

fn ts(s: &str) -> Timestamp {
    s.parse().expect("fixture timestamp")
}

fn social_at(id: &str, timestamp: &str) -> SocialActivity {
    SocialActivity {
        id: id.to_string(),
        kind: SocialKind::Like,
        display_name: "Someone".to_string(),
        handle: "someone".to_string(),
        avatar_url: String::new(),
        content: String::new(),
        timestamp: ts(timestamp),
    }
}

fn tx_at(id: &str, timestamp: &str) -> WalletActivity {
    WalletActivity {
        id: id.to_string(),
        kind: TxKind::Receive,
        amount: 1.0,
        currency: "ETH".to_string(),
        timestamp: ts(timestamp),
        address: MAIN_WALLET.to_string(),
        fee: None,
        status: TxStatus::Completed,
    }
}

/// The merged feed contains every record from both inputs.
#[test]
fn list_all_length_is_sum_of_inputs() {
    let social = fixtures::social_activities().unwrap();
    let wallet = fixtures::wallet_activities().unwrap();

    let all = feed::list_all(&social, &wallet);
    assert_eq!(all.len(), social.len() + wallet.len());
}

/// Every feed item's timestamp is <= its predecessor's.
#[test]
fn list_all_is_descending_by_timestamp() {
    let social = fixtures::social_activities().unwrap();
    let wallet = fixtures::wallet_activities().unwrap();

    let all = feed::list_all(&social, &wallet);
    for pair in all.windows(2) {
        assert!(
            pair[0].timestamp() >= pair[1].timestamp(),
            "feed out of order: {} before {}",
            pair[0].id(),
            pair[1].id()
        );
    }

    // The fixture's newest social post strictly precedes its oldest
    // transaction.
    let pos_of = |id: &str| all.iter().position(|a| a.id() == id).expect("fixture id");
    assert!(
        pos_of("x1") < pos_of("c4"),
        "2025-06-10T10:23:15Z must sort before 2025-06-07T16:30:45Z"
    );
}

/// Equal timestamps keep concatenation order: social first, then
/// wallet, fixture order within each.
#[test]
fn equal_timestamps_keep_concatenation_order() {
    let social = vec![social_at("s1", "2025-06-10T00:00:00Z")];
    let wallet = vec![
        tx_at("w1", "2025-06-10T00:00:00Z"),
        tx_at("w2", "2025-06-10T00:00:00Z"),
    ];

    let all = feed::list_all(&social, &wallet);
    let ids: Vec<&str> = all.iter().map(Activity::id).collect();
    assert_eq!(ids, vec!["s1", "w1", "w2"]);
}

/// Filtering by All returns an identical sequence.
#[test]
fn filter_all_is_identity() {
    let social = fixtures::social_activities().unwrap();
    let wallet = fixtures::wallet_activities().unwrap();

    let all = feed::list_all(&social, &wallet);
    let filtered = feed::filter_by_category(&all, Category::All);
    assert_eq!(filtered, all, "All filter must preserve items and order");
}

/// Category filters keep only their own items, in feed order.
#[test]
fn filter_by_category_partitions_the_feed() {
    let social = fixtures::social_activities().unwrap();
    let wallet = fixtures::wallet_activities().unwrap();
    let all = feed::list_all(&social, &wallet);

    let social_only = feed::filter_by_category(&all, Category::Social);
    let wallet_only = feed::filter_by_category(&all, Category::Wallet);

    assert_eq!(social_only.len(), social.len());
    assert_eq!(wallet_only.len(), wallet.len());
    assert!(social_only.iter().all(|a| matches!(a, Activity::Social(_))));
    assert!(wallet_only.iter().all(|a| matches!(a, Activity::Wallet(_))));
}

/// The sample fixture has exactly one transaction on the main wallet.
#[test]
fn activities_for_wallet_matches_address_exactly() {
    let wallet = fixtures::wallet_activities().unwrap();

    let history = feed::activities_for_wallet(&wallet, &MAIN_WALLET.to_string());
    let ids: Vec<&str> = history.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["c1"], "only c1 touches the main wallet");
}

/// Empty inputs yield empty outputs, never errors.
#[test]
fn empty_inputs_yield_empty_outputs() {
    assert!(feed::list_all(&[], &[]).is_empty());
    assert!(feed::filter_by_category(&[], Category::All).is_empty());
    assert!(feed::activities_for_wallet(&[], &MAIN_WALLET.to_string()).is_empty());
}

/// Unknown detail ids surface the terminal not-found state.
#[test]
fn detail_lookup_of_unknown_id_is_not_found() {
    let app = App::in_memory().expect("build app");

    assert!(matches!(
        app.activity("does-not-exist"),
        Err(FeedError::ActivityNotFound { .. })
    ));
    assert!(matches!(
        app.wallet("does-not-exist"),
        Err(FeedError::WalletNotFound { .. })
    ));

    let detail = app.wallet("1").expect("fixture wallet 1");
    assert_eq!(detail.wallet.address, MAIN_WALLET);
    assert_eq!(detail.activity.len(), 1, "wallet 1 has exactly c1");
}

/// Wallet/activity association is computed by address equality.
#[test]
fn wallet_for_address_association() {
    let app = App::in_memory().expect("build app");

    let wallet = app
        .wallet_for_address(&MAIN_WALLET.to_string())
        .expect("main wallet tracked");
    assert_eq!(wallet.id, "1");
    assert!(app.wallet_for_address(&"0xunknown".to_string()).is_none());
}

/// The feed screen shows the right empty-state panel.
#[test]
fn empty_state_follows_connections() {
    let mut app = App::in_memory().expect("build app");

    assert_eq!(
        app.empty_state(Category::All),
        Some(EmptyState::NothingConnected)
    );

    app.connect_social("vitalik").unwrap();
    assert_eq!(
        app.empty_state(Category::All),
        None,
        "fixture feed has items once something is connected"
    );
}
