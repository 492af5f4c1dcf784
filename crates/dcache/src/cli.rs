//! Command line interface
//!
//! One invocation runs one cache command. Values are JSON; an argument that
//! does not parse as JSON is stored as a JSON string.

use clap::{Parser, Subcommand};
use dcache_domain::error::Result;
use dcache_infrastructure::cache::{CacheProviderFactory, DistributedCache};
use dcache_infrastructure::config::{AppConfig, CacheBackend, ConfigLoader};
use dcache_infrastructure::health::check_cache;
use dcache_infrastructure::logging::init_logging;
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use tracing::debug;

/// Command line interface for dcache
#[derive(Parser, Debug)]
#[command(name = "dcache")]
#[command(about = "Typed distributed cache over Redis or memory")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the configured backend
    #[arg(long, value_enum)]
    pub backend: Option<BackendArg>,

    /// Override the configured Redis URL
    #[arg(long)]
    pub redis_url: Option<String>,

    /// Override the configured key namespace
    #[arg(long)]
    pub namespace: Option<String>,

    /// Override the configured log level
    #[arg(long)]
    pub log_level: Option<String>,

    /// Cache command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Backend choices accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BackendArg {
    /// In-process store, gone when the command exits
    Memory,
    /// Redis server
    Redis,
}

impl From<BackendArg> for CacheBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Memory => Self::Memory,
            BackendArg::Redis => Self::Redis,
        }
    }
}

/// Cache commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Measure backend round-trip latency
    Ping,
    /// Report backend health as JSON
    Health,
    /// Read a scalar value
    Get { key: String },
    /// Store a scalar value
    Set { key: String, value: String },
    /// Delete a key
    Delete { key: String },
    /// Delete every key starting with a prefix
    DeleteAll { prefix: String },
    /// Check whether a key exists
    Exists { key: String },
    /// List keys starting with a prefix
    Keys {
        #[arg(default_value = "")]
        prefix: String,
    },
    /// Length of a key: 0 absent, 1 scalar, row count for a collection
    Length { key: String },
    /// Store one row of a collection
    SetRow {
        collection: String,
        entry: String,
        value: String,
    },
    /// Store several `entry=value` rows of a collection
    SetRows {
        collection: String,
        #[arg(required = true, value_parser = parse_row)]
        rows: Vec<(String, String)>,
    },
    /// Read one row of a collection
    ReadRow { collection: String, entry: String },
    /// Read rows of a collection; every row when no entry is given
    ReadRows {
        collection: String,
        entries: Vec<String>,
    },
    /// Check whether a collection holds an entry
    ExistsRow { collection: String, entry: String },
    /// Delete one row of a collection
    DeleteRow { collection: String, entry: String },
    /// Delete several rows of a collection
    DeleteRows {
        collection: String,
        #[arg(required = true)]
        entries: Vec<String>,
    },
}

fn parse_row(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(entry, value)| (entry.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected entry=value, got '{raw}'"))
}

/// Parse a command line value as JSON, falling back to a JSON string
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Load configuration and apply command line overrides
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load()?;

    if let Some(backend) = cli.backend {
        config.cache.provider = backend.into();
    }
    if let Some(url) = &cli.redis_url {
        config.cache.redis_url = Some(url.clone());
    }
    if let Some(namespace) = &cli.namespace {
        config.cache.namespace.clone_from(namespace);
    }
    if let Some(level) = &cli.log_level {
        config.logging.level.clone_from(level);
    }
    dcache_infrastructure::config::loader::validate_app_config(&config)?;
    Ok(config)
}

/// Run one command end to end and return its JSON output
pub async fn run(cli: Cli) -> Result<Value> {
    let config = load_config(&cli)?;
    init_logging(&config.logging)?;
    let cache = CacheProviderFactory::create_from_config(&config.cache)?;
    execute(&cache, cli.command).await
}

/// Run a command against a cache
pub async fn execute(cache: &DistributedCache, command: Command) -> Result<Value> {
    debug!(?command, provider = cache.provider_name(), "Executing command");
    let output = match command {
        Command::Ping => {
            let latency = cache.ping().await?;
            json!({ "latency_us": u64::try_from(latency.as_micros()).unwrap_or(u64::MAX) })
        }
        Command::Health => serde_json::to_value(check_cache(cache).await)?,
        Command::Get { key } => cache.get::<Value>(&key).await?.unwrap_or(Value::Null),
        Command::Set { key, value } => {
            cache.set(&key, &parse_value(&value)).await?;
            Value::Bool(true)
        }
        Command::Delete { key } => Value::from(cache.delete(&key).await?),
        Command::DeleteAll { prefix } => Value::from(cache.delete_all(&prefix).await?),
        Command::Exists { key } => Value::from(cache.exists(&key).await?),
        Command::Keys { prefix } => Value::from(cache.get_keys(&prefix).await?),
        Command::Length { key } => Value::from(cache.get_length(&key).await?),
        Command::SetRow {
            collection,
            entry,
            value,
        } => Value::from(cache.set_row(&collection, &entry, &parse_value(&value)).await?),
        Command::SetRows { collection, rows } => {
            let rows: HashMap<String, Value> = rows
                .into_iter()
                .map(|(entry, value)| (entry, parse_value(&value)))
                .collect();
            cache.set_rows(&collection, &rows).await?;
            Value::from(rows.len())
        }
        Command::ReadRow { collection, entry } => cache
            .read_row::<Value>(&collection, &entry)
            .await?
            .unwrap_or(Value::Null),
        Command::ReadRows {
            collection,
            entries,
        } => {
            let rows: Vec<Value> = if entries.is_empty() {
                cache.read_all_rows(&collection).await?
            } else {
                cache.read_rows(&collection, entries).await?
            };
            Value::Array(rows)
        }
        Command::ExistsRow { collection, entry } => {
            Value::from(cache.exists_row(&collection, &entry).await?)
        }
        Command::DeleteRow { collection, entry } => {
            Value::from(cache.delete_row(&collection, &entry).await?)
        }
        Command::DeleteRows {
            collection,
            entries,
        } => {
            let entries: HashSet<String> = entries.into_iter().collect();
            Value::from(cache.delete_rows(&collection, &entries).await?)
        }
    };
    Ok(output)
}
