//! Shared primitive types used across the crate.

use chrono::{DateTime, Utc};

/// A stable, unique identifier for an activity record.
pub type ActivityId = String;

/// A stable, unique identifier for a wallet.
pub type WalletId = String;

/// A wallet address. Matched by exact string equality.
pub type Address = String;

/// An ISO-8601 instant, as carried by every fixture record.
pub type Timestamp = DateTime<Utc>;
