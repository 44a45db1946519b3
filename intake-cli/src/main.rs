//! intake CLI: serve the HTTP API, list stored records, print stats.
//! Config comes from env (after `.env`) with optional CLI overrides.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;

use intake_api::ServerConfig;
use intake_core::init_tracing;
use storage::{KvStore, SqliteKvStore};

#[derive(Parser)]
#[command(name = "intake")]
#[command(about = "Intake backend CLI: serve, list, stats", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (config from env; --port overrides PORT).
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// List stored records of one kind, newest first, as JSON lines.
    List {
        #[arg(value_enum)]
        resource: Resource,
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },
    /// Print record counts per kind, plus the chat user/bot split.
    Stats,
}

#[derive(Copy, Clone, ValueEnum)]
enum Resource {
    Bookings,
    Contacts,
    Chat,
}

impl Resource {
    fn prefix(self) -> &'static str {
        match self {
            Resource::Bookings => "booking:",
            Resource::Contacts => "contact:",
            Resource::Chat => "chat:",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = ServerConfig::load(port);
            init_tracing(&config.log_file)?;
            intake_api::run_server(config).await
        }
        Commands::List { resource, limit } => handle_list(resource, limit).await,
        Commands::Stats => handle_stats().await,
    }
}

async fn open_store() -> Result<SqliteKvStore> {
    let config = ServerConfig::load(None);
    Ok(SqliteKvStore::new(&config.database_url).await?)
}

/// Scans one kind and returns its values newest first.
async fn scan_sorted(store: &SqliteKvStore, prefix: &str) -> Result<Vec<Value>> {
    let mut values = store.get_by_prefix(prefix).await?;
    sort_newest_first(&mut values);
    Ok(values)
}

/// `createdAt` is RFC 3339 but the fractional-second precision varies, so
/// the timestamps are compared parsed, not as strings. Values without a
/// parseable timestamp sort last.
fn sort_newest_first(values: &mut [Value]) {
    values.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
}

fn created_at(value: &Value) -> Option<DateTime<Utc>> {
    value["createdAt"]
        .as_str()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|t| t.with_timezone(&Utc))
}

async fn handle_list(resource: Resource, limit: usize) -> Result<()> {
    let store = open_store().await?;
    let values = scan_sorted(&store, resource.prefix()).await?;

    for value in values.iter().take(limit) {
        println!("{}", serde_json::to_string(value)?);
    }
    Ok(())
}

async fn handle_stats() -> Result<()> {
    let store = open_store().await?;

    let bookings = store.get_by_prefix("booking:").await?;
    let contacts = store.get_by_prefix("contact:").await?;
    let chat = store.get_by_prefix("chat:").await?;
    let bot_messages = chat
        .iter()
        .filter(|m| m["isBot"].as_bool().unwrap_or(false))
        .count();

    println!("bookings: {}", bookings.len());
    println!("contacts: {}", contacts.len());
    println!(
        "chat messages: {} ({} from users, {} from the bot)",
        chat.len(),
        chat.len() - bot_messages,
        bot_messages
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sort_handles_mixed_fraction_precision() {
        // Lexicographically "…11.5Z" < "…11Z", but 11.5s is the later
        // instant and must come first.
        let mut values = vec![
            json!({"id": "chat:1", "createdAt": "2026-08-30T10:00:11Z"}),
            json!({"id": "chat:2", "createdAt": "2026-08-30T10:00:11.5Z"}),
        ];
        sort_newest_first(&mut values);
        assert_eq!(values[0]["id"], "chat:2");
        assert_eq!(values[1]["id"], "chat:1");
    }

    #[test]
    fn sort_is_newest_first() {
        let mut values = vec![
            json!({"id": "booking:1", "createdAt": "2026-08-29T09:00:00Z"}),
            json!({"id": "booking:3", "createdAt": "2026-08-30T09:00:00Z"}),
            json!({"id": "booking:2", "createdAt": "2026-08-29T18:30:00Z"}),
        ];
        sort_newest_first(&mut values);
        let ids: Vec<_> = values.iter().map(|v| v["id"].as_str().unwrap()).collect();
        assert_eq!(ids, ["booking:3", "booking:2", "booking:1"]);
    }

    #[test]
    fn sort_puts_unparseable_timestamps_last() {
        let mut values = vec![
            json!({"id": "chat:1"}),
            json!({"id": "chat:2", "createdAt": "2026-08-30T10:00:00Z"}),
        ];
        sort_newest_first(&mut values);
        assert_eq!(values[0]["id"], "chat:2");
        assert_eq!(values[1]["id"], "chat:1");
    }
}
