//! Application root — owns the connection store and the loaded fixture
//! sets, and exposes every query the screens need.
//!
//! Screens receive a reference to `App`; there is no global singleton.

use crate::{
    activity::{Activity, Category, SocialActivity, WalletActivity},
    connection::{ConnectionState, WalletTarget},
    error::{FeedError, FeedResult},
    feed,
    fixtures,
    store::ConnectionStore,
    types::Address,
    wallet::Wallet,
};

/// Which empty-state panel the feed screen should show, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Neither a social account nor a wallet is connected.
    NothingConnected,
    /// Something is connected but the filtered feed has no items.
    NoActivities,
}

/// A wallet detail view: the wallet plus its own activity history.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletDetail {
    pub wallet: Wallet,
    pub activity: Vec<WalletActivity>,
}

pub struct App {
    connections: ConnectionStore,
    social: Vec<SocialActivity>,
    wallet_activity: Vec<WalletActivity>,
    wallets: Vec<Wallet>,
}

impl App {
    /// Build the app root against the state database at `path`.
    pub fn open(path: &str) -> FeedResult<Self> {
        Self::build(ConnectionStore::open(path)?)
    }

    /// App root over an in-memory database (used in tests).
    pub fn in_memory() -> FeedResult<Self> {
        Self::build(ConnectionStore::in_memory()?)
    }

    fn build(connections: ConnectionStore) -> FeedResult<Self> {
        Ok(Self {
            connections,
            social: fixtures::social_activities()?,
            wallet_activity: fixtures::wallet_activities()?,
            wallets: fixtures::wallets()?,
        })
    }

    // ── Connection store ───────────────────────────────────────

    pub fn connection_state(&self) -> &ConnectionState {
        self.connections.state()
    }

    pub fn connect_social(&mut self, handle: &str) -> FeedResult<()> {
        self.connections.connect_social(handle)?;
        log::info!("social account connected: @{handle}");
        Ok(())
    }

    pub fn disconnect_social(&mut self) {
        self.connections.disconnect_social();
        log::info!("social account disconnected");
    }

    pub fn connect_wallet(&mut self, address: &str) -> FeedResult<()> {
        self.connections.connect_wallet(address)?;
        log::info!("wallet connected: {address}");
        Ok(())
    }

    pub fn disconnect_wallet(&mut self, target: &WalletTarget) {
        self.connections.disconnect_wallet(target);
        log::info!("wallet disconnected");
    }

    // ── Feed queries ───────────────────────────────────────────

    /// The merged feed, filtered to `category`, most recent first.
    pub fn feed(&self, category: Category) -> Vec<Activity> {
        let all = feed::list_all(&self.social, &self.wallet_activity);
        feed::filter_by_category(&all, category)
    }

    /// Which empty-state panel the feed screen shows for `category`,
    /// or `None` when there are items to render.
    pub fn empty_state(&self, category: Category) -> Option<EmptyState> {
        if !self.connections.state().anything_connected() {
            return Some(EmptyState::NothingConnected);
        }
        if self.feed(category).is_empty() {
            return Some(EmptyState::NoActivities);
        }
        None
    }

    /// Detail lookup for the activity screen. An unknown id is a
    /// terminal, user-visible state, not a recoverable error.
    pub fn activity(&self, id: &str) -> FeedResult<Activity> {
        self.feed(Category::All)
            .into_iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| FeedError::ActivityNotFound { id: id.to_string() })
    }

    // ── Wallet queries ─────────────────────────────────────────

    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    /// Detail lookup for the wallet screen, including that wallet's
    /// own activity history.
    pub fn wallet(&self, id: &str) -> FeedResult<WalletDetail> {
        let wallet = self
            .wallets
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .ok_or_else(|| FeedError::WalletNotFound { id: id.to_string() })?;
        let activity = feed::activities_for_wallet(&self.wallet_activity, &wallet.address);
        Ok(WalletDetail { wallet, activity })
    }

    /// The zero-or-one tracked wallet sharing `address`.
    pub fn wallet_for_address(&self, address: &Address) -> Option<&Wallet> {
        self.wallets.iter().find(|w| &w.address == address)
    }
}
