use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use logquery::output::{format_entries, OutputFormat};
use logquery::storage::DynamoDbLogStore;
use logquery::{Config, LogDao};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// logquery - Time-range queries over a DynamoDB log table
#[derive(Parser, Debug)]
#[command(name = "logquery")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log table name (default: LogEntries)
    #[arg(long, env = "LOG_TABLE_NAME")]
    table: Option<String>,

    /// AWS region (default: us-east-1)
    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,

    /// Custom DynamoDB endpoint, e.g. a local instance
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Records of a level with a timestamp in [START, END].
    Between {
        level: String,
        start: String,
        end: String,
    },
    /// Records of a level with a timestamp strictly before END.
    Before { level: String, end: String },
    /// Records of a level with a timestamp strictly after START.
    After { level: String, start: String },
}

impl Cli {
    /// Builds the storage configuration, with flags taking precedence over defaults.
    fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(table) = &self.table {
            config = config.with_table_name(table.clone());
        }
        if let Some(region) = &self.region {
            config = config.with_region(region.clone());
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            config = config.with_endpoint_url(endpoint_url.clone());
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for results.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logquery=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config();

    tracing::info!(
        target_env = %config.target_display(),
        table = %config.table_name,
        "Connecting to log table"
    );

    let store = DynamoDbLogStore::from_config(&config).await;
    let dao = LogDao::new(Arc::new(store));

    let entries = match cli.command {
        Commands::Between { level, start, end } => {
            dao.get_logs_between_times(&level, &start, &end).await?
        }
        Commands::Before { level, end } => dao.get_logs_before_time(&level, &end).await?,
        Commands::After { level, start } => dao.get_logs_after_time(&level, &start).await?,
    };

    println!("{}", format_entries(&entries, cli.format));
    Ok(())
}
