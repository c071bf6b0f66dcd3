//! UBI daemon — a single-process node running the accrual settlement loop.
//!
//! Owns the engine on one task, which supplies the single-writer guarantee
//! the engine's atomic operations rely on.

mod config;

use clap::Parser;
use config::NodeConfig;
use std::path::PathBuf;
use std::time::Duration;
use ubi_accrual::AccrualEngine;
use ubi_ledger::create_genesis_ledger;
use ubi_registry::AllowlistRegistry;
use ubi_types::{Identity, Timestamp};

#[derive(Parser)]
#[command(name = "ubi-daemon", about = "UBI ledger node daemon")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "UBI_CONFIG")]
    config: Option<PathBuf>,

    /// Accrual rate in raw units per second.
    #[arg(long, env = "UBI_RATE")]
    rate: Option<u128>,

    /// Seconds between settlement sweeps.
    #[arg(long, env = "UBI_SETTLE_INTERVAL")]
    settle_interval_secs: Option<u64>,

    /// Identities registered at boot (comma-separated `ubi_` addresses).
    #[arg(long, env = "UBI_IDENTITIES", value_delimiter = ',')]
    identities: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ubi_utils::init_tracing();

    let cli = Cli::parse();

    let mut config = if let Some(ref config_path) = cli.config {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str::<NodeConfig>(&contents) {
                Ok(cfg) => {
                    tracing::info!("Loaded config from {}", config_path.display());
                    cfg
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {e}, using defaults");
                    NodeConfig::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read config file {}: {e}, using defaults",
                    config_path.display()
                );
                NodeConfig::default()
            }
        }
    } else {
        NodeConfig::default()
    };

    if let Some(rate) = cli.rate {
        config.params.accrued_per_second = rate;
    }
    if let Some(interval) = cli.settle_interval_secs {
        config.settle_interval_secs = interval;
    }
    if !cli.identities.is_empty() {
        config.identities = cli.identities;
    }

    run(config).await
}

async fn run(config: NodeConfig) -> anyhow::Result<()> {
    let boot = Timestamp::now();

    let mut registry = AllowlistRegistry::new();
    for raw in &config.identities {
        registry.register(Identity::new(raw.clone()), boot);
    }

    let deployer = config.params.governor.clone();
    let mut ledger = create_genesis_ledger(&config.params, &deployer)?;
    let mut engine = AccrualEngine::new(&config.params);

    tracing::info!(
        "Starting {} ({}) node: rate {} raw/s, {} registered identities, settling every {}",
        config.params.token_name,
        config.params.token_symbol,
        engine.accrued_per_second(),
        registry.len(),
        ubi_utils::format_duration(config.settle_interval_secs),
    );

    for raw in &config.identities {
        let identity = Identity::new(raw.clone());
        match engine.start_accruing(&registry, &identity, boot) {
            Ok(()) => tracing::info!("{identity} started accruing"),
            Err(e) => tracing::warn!("{identity} could not start accruing: {e}"),
        }
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(config.settle_interval_secs));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    ticker.tick().await; // first tick fires immediately

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                settle_all(&mut engine, &registry, &mut ledger);
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    tracing::info!(
        "Shutdown after {}: total supply {}",
        ubi_utils::format_duration(boot.elapsed_since(Timestamp::now())),
        ledger.total_supply(),
    );
    Ok(())
}

/// One settlement sweep: mint for every accruing identity, then report the
/// emitted events.
fn settle_all(
    engine: &mut AccrualEngine,
    registry: &AllowlistRegistry,
    ledger: &mut ubi_ledger::BalanceLedger,
) {
    let now = Timestamp::now();
    let accruing: Vec<Identity> = engine.accruing_identities().cloned().collect();

    for identity in accruing {
        if let Err(e) = engine.mint_accrued(registry, ledger, &identity, now) {
            tracing::warn!("settlement failed for {identity}: {e}");
        }
    }

    for event in engine.drain_events() {
        tracing::info!(
            "Minted {} to {} (balance {})",
            event.amount,
            event.identity,
            ledger.balance_of(&event.identity),
        );
    }
}
