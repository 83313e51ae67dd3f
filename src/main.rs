//! volunteer-cli - shell access to filter translation, session decoding,
//! and the events listing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use volunteer_core::filters::Role;
use volunteer_core::validation::parse_json_arg;
use volunteer_core::{resolve_session, translate, Config, EventsApi, Filters};

#[derive(Debug, Parser)]
#[command(name = "volunteer-cli", version, about)]
struct Cli {
    /// JSON config file (VOLUNTEER_* variables override it).
    #[arg(long, env = "VOLUNTEER_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the /api/events query string for a filter state.
    Translate {
        /// Filters as JSON, e.g. '{"scope":"myOrgs","availability":["Mornings"]}'.
        #[arg(long)]
        filters: String,

        /// Roles as a JSON array.
        #[arg(long, default_value = "[]")]
        roles: String,
    },
    /// Decode a session token without verifying it.
    Session {
        token: String,
    },
    /// Fetch events from the API using the caller's roles.
    Events {
        #[arg(long, default_value = "{}")]
        filters: String,

        /// Session token forwarded as the session cookie.
        #[arg(long, env = "VOLUNTEER_SESSION")]
        session: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    volunteer_core::observability::init_tracing_with(&config.observability);

    match cli.command {
        Command::Translate { filters, roles } => {
            let filters: Filters = parse_json_arg(&filters, "filters")?;
            let roles: Vec<Role> = parse_json_arg(&roles, "roles")?;
            println!("{}", translate(&filters, &roles));
        }
        Command::Session { token } => {
            let session = resolve_session(Some(&token));
            println!("{}", serde_json::to_string(&session)?);
        }
        Command::Events { filters, session } => {
            let filters: Filters = parse_json_arg(&filters, "filters")?;
            let mut api = EventsApi::from_config(&config)?;
            if let Some(token) = session {
                api = api.with_session(token);
            }

            let roles = api.fetch_roles().await;
            tracing::info!(roles = roles.len(), base_url = api.base_url(), "listing_events");
            let events = api.list_events(&filters, &roles).await?;
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
    }

    Ok(())
}
