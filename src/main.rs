use anyhow::Context;
use awesome_catalog::core::{engine, query, ConfigProvider};
use awesome_catalog::utils::{logger, validation::Validate};
use awesome_catalog::{CatalogBuilder, CliConfig};
use clap::Parser;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting awesome-catalog build");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let builder = CatalogBuilder::from_config(&config);

    let catalog = builder
        .build(Path::new(config.data_dir()))
        .await
        .context("catalog build failed")?;
    let written = builder
        .write(&catalog, Path::new(config.output_path()))
        .await
        .context("writing catalog artifact failed")?;
    tracing::info!(
        "Catalog with {} entries written to {}",
        catalog.entries.len(),
        written.display()
    );

    if let Some(raw_query) = config.query.as_deref() {
        let (filter, sort) = query::decode(raw_query);
        let filtered = engine::apply(&catalog.entries, &filter, &sort);
        let page = engine::paginate(filtered, config.limit);

        for entry in &page.entries {
            println!("{}", entry.github);
        }
        if page.more {
            println!(
                "(more available, rerun with --limit {})",
                config.limit + engine::PAGE_SIZE
            );
        }
    }

    Ok(())
}
