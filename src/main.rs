use std::net::SocketAddr;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use priceboard::api::query_plan_database;
use priceboard::config::{self, DEFAULT_HOST};
use priceboard::models::AppState;
use priceboard::routes::build_router;

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);

    let client = reqwest::Client::builder()
        .user_agent(format!("Priceboard/{}", env!("CARGO_PKG_VERSION")))
        // A hung Notion call should fail the request, not hang it forever
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client");

    AppState {
        api_base_url: config::get_api_base_url(),
        api_token: config::get_api_key(),
        database_id: config::get_database_id(),
        client,
        expose_error_details: config::expose_error_details(),
    }
}

async fn start_server(state: AppState, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting Priceboard server");
    println!(
        "{} {}",
        yansi::Paint::new("Pricing API running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e
            );
            process::exit(1);
        }
    }
}

#[derive(Parser)]
#[command(
    name = "priceboard",
    author,
    version,
    about = "Pricing page API backed by a Notion database",
    long_about = "Priceboard serves the pricing plans kept in a Notion database as a JSON API, \
with each plan's long-form service details normalized from Notion's block tree.

Provide NOTION_API_KEY and NOTION_DATABASE_ID via the environment or an --env-file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to (defaults to the PORT env var, then 5173)
        #[arg(long)]
        port: Option<u16>,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Validate configuration (env vars / Notion credentials)
    #[command(
        about = "Validate configuration and ensure Notion connectivity.",
        long_about = "Check that the Notion credential and database id are configured, then run one live database query to confirm the token and id are accepted."
    )]
    CheckConfig { env_file: Option<String> },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // If no command is given, serve with defaults
    if cli.command.is_none() {
        let state = build_state_from_env(None);
        start_server(state, DEFAULT_HOST, config::get_port()).await;
        return;
    }
    match cli.command.unwrap() {
        Commands::Serve {
            host,
            port,
            env_file,
        } => {
            let state = build_state_from_env(env_file.as_deref());
            let port = port.unwrap_or_else(config::get_port);
            start_server(state, &host, port).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            let mut ok = true;
            if state.api_token.trim().is_empty() {
                eprintln!("{}", yansi::Paint::new("NOTION_API_KEY is not configured").red());
                ok = false;
            }
            if state.database_id.trim().is_empty() {
                eprintln!("{}", yansi::Paint::new("NOTION_DATABASE_ID is not configured").red());
                ok = false;
            }
            if !ok {
                process::exit(1);
            }
            match query_plan_database(
                &state.client,
                &state.api_base_url,
                &state.api_token,
                &state.database_id,
            )
            .await
            {
                Ok(_) => {
                    println!(
                        "{}",
                        yansi::Paint::new("Configuration looks valid (database query succeeded)")
                            .green()
                    );
                }
                Err(e) => {
                    eprintln!(
                        "{}: {}",
                        yansi::Paint::new("Configuration appears invalid").red(),
                        e
                    );
                    process::exit(1);
                }
            }
        }
    }
}
