//! PharmaIntelligence Analyzer - CLI and single-page server.
//!
//! `analyze` sends one query to the analysis service and prints the result.
//! `serve` hosts the single-page interface backed by the same controller.

mod handler;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pharma_core::{
    render_text, sections, Analyzer, ClientConfig, HttpAnalysisClient, HtmlRenderer, TextOptions,
};
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "pharma-intel")]
#[command(about = "Drug development intelligence from the PharmaIntelligence analysis service")]
struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze comma-separated drug names and print the results
    Analyze {
        /// Drug names, comma-separated (e.g. "Adalimumab, Pembrolizumab")
        drugs: String,

        #[command(flatten)]
        service: ServiceArgs,

        /// Print the raw results as JSON
        #[arg(long)]
        json: bool,

        /// Print only the molecule headers
        #[arg(long)]
        collapsed: bool,
    },

    /// Serve the single-page interface
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on (0 = auto-assign)
        #[arg(short, long, default_value = "3000")]
        port: u16,

        #[command(flatten)]
        service: ServiceArgs,
    },
}

#[derive(clap::Args, Debug)]
struct ServiceArgs {
    /// Analysis service base URL (defaults to $PHARMA_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds (defaults to $PHARMA_API_TIMEOUT_SECS, else none)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl ServiceArgs {
    fn client_config(&self) -> pharma_core::Result<ClientConfig> {
        let mut config = match &self.api_url {
            Some(url) => ClientConfig::new(url)?,
            None => ClientConfig::from_env()?,
        };
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for results.
    // RUST_LOG overrides the --debug default.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(args.debug)));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match args.command {
        Command::Analyze {
            drugs,
            service,
            json,
            collapsed,
        } => run_analyze(&drugs, &service, json, collapsed).await,
        Command::Serve {
            host,
            port,
            service,
        } => run_serve(&host, port, &service).await,
    }
}

/// Filter used when `RUST_LOG` is unset.
fn default_log_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

async fn run_analyze(
    drugs: &str,
    service: &ServiceArgs,
    json: bool,
    collapsed: bool,
) -> Result<ExitCode> {
    let config = service.client_config()?;
    let analyzer = Analyzer::new(HttpAnalysisClient::new(&config)?);

    match analyzer.analyze(drugs).await {
        Ok(results) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                let options = TextOptions {
                    expand_all: !collapsed,
                };
                print!("{}", render_text(&sections(&results), options));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", err.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run_serve(host: &str, port: u16, service: &ServiceArgs) -> Result<ExitCode> {
    let config = service.client_config()?;
    info!("Analysis endpoint: {}", config.analyze_endpoint());

    let state = server::AppState {
        analyzer: Analyzer::new(HttpAnalysisClient::new(&config)?),
        renderer: HtmlRenderer::new()?,
    };
    let addr = server::start_server(state, host, port).await?;

    // Machine-readable port line for wrappers and tests
    println!("SERVER_PORT={}", addr.port());
    info!("Analyzer page available at http://{}", addr);

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(ExitCode::SUCCESS)
}
