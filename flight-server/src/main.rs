use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::{Parser, Subcommand, builder::PossibleValuesParser};
use tracing_subscriber::EnvFilter;

use flight_server::capacity::CapacityCeilings;
use flight_server::cli::process_file;
use flight_server::config::ServerConfig;
use flight_server::pipeline::Processor;
use flight_server::schedule::SeatRules;
use flight_server::web::{AppState, create_router};

/// Prepare next-day flight schedules from an airline's `.xls` export
#[derive(Parser)]
#[command(name = "flight-server", version)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Listen address, overriding FLIGHT_SERVER_ADDR
        #[arg(long)]
        addr: Option<SocketAddr>,
    },
    /// Process one `.xls` file into a JSON file
    Process {
        /// Path to the `.xls` export
        #[arg(long)]
        input: PathBuf,

        /// Path of the JSON output
        #[arg(long)]
        output: PathBuf,

        /// Which day to prepare: tomorrow or the day after
        #[arg(long, value_parser = PossibleValuesParser::new(["commandes", "precommandes"]))]
        mode: String,

        /// Accepted for compatibility; has no effect
        #[arg(long, default_value = "")]
        category: String,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Serve { addr } => serve(addr).await,
        Commands::Process {
            input,
            output,
            mode,
            category,
        } => {
            if !category.is_empty() {
                tracing::debug!(%category, "ignoring category");
            }
            let ceilings = CapacityCeilings::fleet();
            let rules = SeatRules::default();
            let processor = Processor::new(&ceilings, &rules);
            let today = Local::now().date_naive();
            process_file(&processor, &input, &output, &mode, today)
                .map(|_| ())
                .map_err(|e| e.to_string())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            tracing::error!("{message}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(addr: Option<SocketAddr>) -> Result<(), String> {
    let mut config = ServerConfig::from_env().map_err(|e| e.to_string())?;
    if let Some(addr) = addr {
        config = config.with_addr(addr);
    }

    let state = AppState::new(CapacityCeilings::fleet(), SeatRules::default());
    let app = create_router(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|e| format!("cannot bind {}: {e}", config.addr))?;
    tracing::info!(
        addr = %config.addr,
        max_upload_bytes = config.max_upload_bytes,
        "flight server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("server error: {e}"))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("cannot listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
