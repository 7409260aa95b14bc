use crate::{commands::Commands, dialect::DialectKind, error::CliError};
use catalog::{query::select_with_images, repository::MenuItemRepository, source::MemoryRowSource};
use clap::Parser;
use futures_util::StreamExt;
use mapper::mapper::RowMapper;
use std::str::FromStr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

mod commands;
mod dialect;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "menu",
    version = "0.1.0",
    about = "Maps joined menu item rows into nested menu items"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sql {
            organization,
            dialect,
        } => {
            let kind = DialectKind::from_str(&dialect).map_err(CliError::InvalidDialect)?;
            let (sql, params) = select_with_images(kind.dialect().as_ref(), organization);
            output::print_sql(&sql, &params);
        }
        Commands::Query {
            rows,
            organization,
            dialect,
            json,
        } => {
            let kind = DialectKind::from_str(&dialect).map_err(CliError::InvalidDialect)?;
            run_query(&rows, organization, kind, json).await?;
        }
    }

    Ok(())
}

async fn run_query(
    rows: &str,
    organization: Uuid,
    kind: DialectKind,
    as_json: bool,
) -> Result<(), CliError> {
    let fixture = tokio::fs::read_to_string(rows).await?;
    let source = MemoryRowSource::from_json(&fixture)?;
    info!(rows = source.rows().len(), path = rows, "Loaded rows");

    let repository = MenuItemRepository::new(source, kind.dialect(), RowMapper::default());
    let mut items = repository
        .find_all_by_organization_with_images(organization)
        .await?;

    let (mut found, mut failed) = (0usize, 0usize);
    while let Some(item) = items.next().await {
        match item {
            Ok(item) => {
                found += 1;
                output::print_item(&item, as_json)?;
            }
            Err(err) => {
                failed += 1;
                error!("{err}");
            }
        }
    }

    info!(%organization, found, failed, "Query finished");
    Ok(())
}
