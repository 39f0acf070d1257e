//! crudgen CLI
//!
//! Connects to a MySQL database, introspects one table (or all of
//! them), and prints a Go struct plus CRUD stubs to stdout.

use clap::Parser;
use sqlx::mysql::MySqlPoolOptions;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crudgen_cli::{generate_database, generate_table, CliError, GenOptions};

/// Generates Go CRUD source from a live MySQL schema.
#[derive(Parser)]
#[command(name = "crudgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// User for login.
    #[arg(short, long, default_value = "root")]
    user: String,

    /// Password to use when connecting to the server.
    #[arg(short, long, default_value = "")]
    pass: String,

    /// Host to connect to.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to use for the connection.
    #[arg(long, default_value_t = 3306)]
    port: u16,

    /// Database name.
    #[arg(short, long)]
    name: String,

    /// Table to generate CRUD for (omit to generate for every table).
    #[arg(short, long)]
    table: Option<String>,

    /// Package supplying the null-wrapper types.
    #[arg(long, default_value = "sql")]
    null: String,

    /// Go type of the read database handle.
    #[arg(long, default_value = "*sqlx.DB")]
    dbread: String,

    /// Go type of the write database handle.
    #[arg(long, default_value = "*sqlx.DB")]
    dbwrite: String,

    /// Generate publicly accessible (exported) functions.
    #[arg(long)]
    public: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let url = format!(
        "mysql://{}:{}@{}:{}/{}",
        cli.user, cli.pass, cli.host, cli.port, cli.name
    );
    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await?;

    let opts = GenOptions {
        public: cli.public,
        null_package: cli.null,
        db_read: cli.dbread,
        db_write: cli.dbwrite,
    };

    match cli.table {
        Some(table) => {
            let code = generate_table(&pool, &cli.name, &table, &opts).await?;
            println!("{code}");
        }
        None => {
            info!("No table given; generating for every table in {}", cli.name);
            let report = generate_database(&pool, &cli.name, &opts).await?;
            print!("{}", report.code);
            if !report.failures.is_empty() {
                return Err(CliError::Partial(report.failures).into());
            }
        }
    }

    Ok(())
}
