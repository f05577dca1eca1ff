//! Teleporter Bridge CLI
//!
//! Approve and bridge XSGD (or any configured ERC20 route) from C-Chain:
//!
//! 1. `teleporter-bridge approve --amount 1000000`
//! 2. wait for the approval to confirm on the explorer
//! 3. `teleporter-bridge bridge --amount 1000000 --recipient 0x...`
//!
//! Amounts are in base units (1 XSGD = 1000000). The private key is read from
//! `--private-key` or `TELEPORTER_PRIVATE_KEY`, hex without `0x`.

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result, WrapErr};
use std::sync::Arc;

use teleporter_bridge::{Config, RpcConnection, Teleporter};

#[derive(Parser)]
#[command(name = "teleporter-bridge")]
#[command(about = "Bridge ERC20 tokens over Avalanche Interchain Token Transfer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Source chain RPC URL (overrides TELEPORTER_RPC_URL)
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// EVM chain id to sign for (overrides TELEPORTER_CHAIN_ID)
    #[arg(long, global = true)]
    chain_id: Option<u64>,

    /// .env file to load before reading the environment
    #[arg(long, global = true, default_value = ".env")]
    env_file: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Approve the token home to spend tokens on the sender's behalf
    Approve {
        /// Private key hex without 0x (defaults to TELEPORTER_PRIVATE_KEY)
        #[arg(long)]
        private_key: Option<String>,

        /// Amount in base units
        #[arg(long)]
        amount: String,
    },

    /// Send tokens to a recipient on the destination chain
    ///
    /// The approval for at least this amount must already be confirmed.
    Bridge {
        /// Private key hex without 0x (defaults to TELEPORTER_PRIVATE_KEY)
        #[arg(long)]
        private_key: Option<String>,

        /// Amount in base units
        #[arg(long)]
        amount: String,

        /// Recipient address on the destination chain
        #[arg(long)]
        recipient: String,
    },

    /// Print the effective route parameters as JSON
    Params,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let mut config = Config::load_from_file(&cli.env_file)?;
    if let Some(rpc_url) = cli.rpc_url {
        config.rpc_url = Some(rpc_url);
    }
    if let Some(chain_id) = cli.chain_id {
        config.chain_id = chain_id;
    }

    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Params => {
            println!("{}", serde_json::to_string_pretty(&config.params)?);
        }
        Commands::Approve {
            private_key,
            amount,
        } => {
            let private_key = resolve_private_key(private_key)?;
            let teleporter = connect(&config)?;

            let tx_hash = teleporter
                .approve(&private_key, config.chain_id, &amount)
                .await
                .wrap_err("Approve failed")?;

            println!("Approve tx sent, tx: {}", config.explorer_link(tx_hash));
            println!(
                "Wait for this transaction to confirm before running `bridge` with the same amount."
            );
        }
        Commands::Bridge {
            private_key,
            amount,
            recipient,
        } => {
            let private_key = resolve_private_key(private_key)?;
            let teleporter = connect(&config)?;

            let tx_hash = teleporter
                .bridge(&private_key, config.chain_id, &amount, &recipient)
                .await
                .wrap_err("Bridge failed")?;

            println!("Bridge tx sent, tx: {}", config.explorer_link(tx_hash));
            println!("Check the explorer link above to confirm the transaction.");
        }
    }

    Ok(())
}

fn connect(config: &Config) -> Result<Teleporter<RpcConnection>> {
    let connection = RpcConnection::new(config.require_rpc_url()?)?;
    Ok(Teleporter::new(Arc::new(config.params.clone()), connection))
}

fn resolve_private_key(arg: Option<String>) -> Result<String> {
    arg.or_else(|| std::env::var("TELEPORTER_PRIVATE_KEY").ok())
        .filter(|k| !k.is_empty())
        .ok_or_else(|| eyre!("Pass --private-key or set TELEPORTER_PRIVATE_KEY"))
}

/// Initialize tracing/logging with structured output
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,teleporter_bridge=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
