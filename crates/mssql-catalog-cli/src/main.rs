//! mssql-catalog CLI - Browse SQL Server catalog views and DMVs.

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mssql_catalog::views::TypesReader;
use mssql_catalog::{registry, Catalog, CatalogError, Config, MssqlPool, RowSource};
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser)]
#[command(name = "mssql-catalog")]
#[command(about = "Typed access to SQL Server catalog views and DMVs")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog views this tool can read
    Views,

    /// Print the SQL text used for a view
    Sql {
        /// View name: sys.name, [sys].[name] or name
        view: String,
    },

    /// Query a view and print its rows
    Query {
        /// View name: sys.name, [sys].[name] or name
        view: String,

        /// Print at most this many rows
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List schemas
    Schemas,

    /// List user tables
    Tables {
        /// Only tables in this schema
        #[arg(long)]
        schema: Option<String>,
    },

    /// List the columns of a table
    Columns {
        /// Schema name
        schema: String,

        /// Table name
        table: String,
    },

    /// Test the database connection
    HealthCheck,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<(), CatalogError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format);

    // Registry commands need no database.
    match &cli.command {
        Commands::Views => return print_views(cli.output_json),
        Commands::Sql { view } => {
            println!("{}", registry::find(view)?.sql);
            return Ok(());
        }
        _ => {}
    }

    let config = Config::load(&cli.config)?;
    info!("Loaded configuration from {:?}", cli.config);

    let pool = MssqlPool::from_config(&config).await?;

    match cli.command {
        Commands::Views | Commands::Sql { .. } => unreachable!(), // Handled above

        Commands::Query { view, limit } => {
            let info = registry::find(&view)?;
            let mut reader = pool.fetch(info.sql, &[]).await?;
            let limit = limit.unwrap_or(usize::MAX);

            if cli.output_json {
                let mut rows = (info.read_json)(reader)?;
                rows.truncate(limit);
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{}", info.columns.join("\t"));
                let mut printed = 0;
                while printed < limit && reader.read() {
                    let values = (0..reader.field_count())
                        .map(|i| reader.get_value(i).map(|v| v.to_string()))
                        .collect::<Result<Vec<_>, _>>()?;
                    println!("{}", values.join("\t"));
                    printed += 1;
                }
                info!("{} rows from {}", printed, info.name);
            }
        }

        Commands::Schemas => {
            let schemas = Catalog::new(pool).schemas().await?;
            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&schemas)?);
            } else {
                for schema in schemas {
                    println!("{}\t{}", schema.schema_id, schema.name);
                }
            }
        }

        Commands::Tables { schema } => {
            let catalog = Catalog::new(pool);
            let schema_names: HashMap<i32, String> = catalog
                .schemas()
                .await?
                .into_iter()
                .map(|s| (s.schema_id, s.name))
                .collect();

            let mut tables = match schema {
                Some(name) => {
                    let schema_id = catalog
                        .schema_id(&name)
                        .await?
                        .ok_or_else(|| CatalogError::NotFound(format!("schema {}", name)))?;
                    catalog.tables_in_schema(schema_id).await?
                }
                None => catalog.tables().await?,
            };
            tables.sort_by(|a, b| (a.schema_id, &a.name).cmp(&(b.schema_id, &b.name)));

            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&tables)?);
            } else {
                for table in tables {
                    let schema = schema_names
                        .get(&table.schema_id)
                        .map(String::as_str)
                        .unwrap_or("?");
                    println!("{}\t{}.{}", table.object_id, schema, table.name);
                }
            }
        }

        Commands::Columns { schema, table } => {
            let catalog = Catalog::new(pool);
            let schema_id = catalog
                .schema_id(&schema)
                .await?
                .ok_or_else(|| CatalogError::NotFound(format!("schema {}", schema)))?;
            let found = catalog
                .table(schema_id, &table)
                .await?
                .ok_or_else(|| CatalogError::NotFound(format!("table {}.{}", schema, table)))?;
            let columns = catalog.columns(found.object_id).await?;

            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&columns)?);
            } else {
                let type_names: HashMap<i32, String> = catalog
                    .read_all::<TypesReader>()
                    .await?
                    .into_iter()
                    .map(|t| (t.user_type_id, t.name))
                    .collect();

                for column in columns {
                    println!(
                        "{}\t{}\t{}\t{}\t{}",
                        column.column_id,
                        column.name,
                        type_names
                            .get(&column.user_type_id)
                            .map(String::as_str)
                            .unwrap_or("?"),
                        if column.is_nullable.unwrap_or(true) { "NULL" } else { "NOT NULL" },
                        if column.is_identity { "IDENTITY" } else { "" }
                    );
                }
            }
        }

        Commands::HealthCheck => {
            let result = pool.health_check().await;

            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Health Check Results:");
                println!(
                    "  SQL Server: {} ({}ms)",
                    if result.healthy { "OK" } else { "FAILED" },
                    result.latency_ms
                );
                if let Some(ref version) = result.server_version {
                    println!("    Version: {}", version);
                }
                if let Some(ref err) = result.error {
                    println!("    Error: {}", err);
                }
            }

            if !result.healthy {
                return Err(CatalogError::pool(
                    result.error.unwrap_or_default(),
                    "health check",
                ));
            }
        }
    }

    Ok(())
}

fn print_views(output_json: bool) -> Result<(), CatalogError> {
    let views = registry::all();

    if output_json {
        let list: Vec<_> = views
            .iter()
            .map(|v| serde_json::json!({ "name": v.name, "columns": v.columns }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
    } else {
        for view in views {
            println!("{}\t{} columns", view.name, view.columns.len());
        }
    }

    Ok(())
}

fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Query output owns stdout.
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
