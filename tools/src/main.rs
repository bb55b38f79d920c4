//! feed-cli: headless driver for the chainfeed core.
//!
//! Usage:
//!   feed-cli status
//!   feed-cli feed --filter wallet
//!   feed-cli connect-social vitalik --db feed.db
//!   feed-cli disconnect-wallet all

use anyhow::{bail, Result};
use chainfeed_core::{
    activity::{Activity, Category},
    app::{App, EmptyState},
    connection::WalletTarget,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let db = flag_value(&args, "--db").unwrap_or("feed.db");
    let filter: Category = flag_value(&args, "--filter")
        .unwrap_or("all")
        .parse()
        .map_err(anyhow::Error::msg)?;

    let mut app = App::open(db)?;

    let command = args.get(1).map(String::as_str).unwrap_or("status");
    match command {
        "status" => print_status(&app),
        "feed" => print_feed(&app, filter),
        "wallets" => print_wallets(&app),
        "wallet" => {
            let id = positional(&args, 2, "wallet <id>")?;
            let detail = app.wallet(id)?;
            println!("{} ({})", detail.wallet.name, detail.wallet.address);
            println!(
                "  balance:       {} {}",
                detail.wallet.balance, detail.wallet.currency
            );
            println!("  last activity: {}", detail.wallet.last_activity);
            println!("  transactions:  {}", detail.activity.len());
            for tx in &detail.activity {
                println!(
                    "    {} | {:?} {} {} | {:?}",
                    tx.timestamp, tx.kind, tx.amount, tx.currency, tx.status
                );
            }
        }
        "activity" => {
            let id = positional(&args, 2, "activity <id>")?;
            print_activity(&app.activity(id)?);
        }
        "connect-social" => {
            let handle = positional(&args, 2, "connect-social <handle>")?;
            app.connect_social(handle)?;
            print_status(&app);
        }
        "disconnect-social" => {
            app.disconnect_social();
            print_status(&app);
        }
        "connect-wallet" => {
            let address = positional(&args, 2, "connect-wallet <address>")?;
            app.connect_wallet(address)?;
            print_status(&app);
        }
        "disconnect-wallet" => {
            let target = positional(&args, 2, "disconnect-wallet <address|all>")?;
            app.disconnect_wallet(&WalletTarget::parse(target));
            print_status(&app);
        }
        other => bail!("unknown command '{other}'"),
    }

    Ok(())
}

fn print_status(app: &App) {
    let state = app.connection_state();
    println!("=== CONNECTION STATUS ===");
    println!(
        "  social:  {}",
        match &state.social_handle {
            Some(handle) => format!("connected (@{handle})"),
            None => "not connected".to_string(),
        }
    );
    if state.wallet_addresses.is_empty() {
        println!("  wallets: not connected");
    } else {
        println!("  wallets: {} connected", state.wallet_addresses.len());
        for addr in &state.wallet_addresses {
            println!("    {addr}");
        }
    }
}

fn print_feed(app: &App, filter: Category) {
    match app.empty_state(filter) {
        Some(EmptyState::NothingConnected) => {
            println!("No accounts connected. Connect a social account or wallet first.");
        }
        Some(EmptyState::NoActivities) => {
            println!("No activities yet.");
        }
        None => {
            let items = app.feed(filter);
            println!("=== ACTIVITY FEED ({} items) ===", items.len());
            for item in &items {
                print_activity(item);
            }
        }
    }
}

fn print_activity(item: &Activity) {
    match item {
        Activity::Social(a) => println!(
            "  {} | {:?} by @{} | {}",
            a.timestamp,
            a.kind,
            a.handle,
            truncate(&a.content, 48)
        ),
        Activity::Wallet(a) => println!(
            "  {} | {:?} {} {} | {:?} | {}",
            a.timestamp, a.kind, a.amount, a.currency, a.status, a.address
        ),
    }
}

fn print_wallets(app: &App) {
    println!("=== WALLETS ===");
    for w in app.wallets() {
        println!(
            "  [{}] {:<12} {:>10} {} | {}",
            w.id, w.name, w.balance, w.currency, w.address
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{head}…")
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn positional<'a>(args: &'a [String], index: usize, usage: &str) -> Result<&'a str> {
    match args.get(index) {
        // Flags can't stand in for the positional argument.
        Some(v) if !v.starts_with("--") => Ok(v),
        _ => bail!("usage: feed-cli {usage}"),
    }
}
