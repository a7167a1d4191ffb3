use case_archive::{browse, cli, config, error, logging, output, sources};
use case_archive_common::{CaseCatalog, Dimension};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;

async fn open_catalog(config: &Config, flag: Option<&str>) -> Result<CaseCatalog> {
    let source = config.resolve_source(flag);
    let source = sources::open_source(&source, config.timeout_seconds)?;
    sources::load_catalog(source.as_ref()).await
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;
    let config = Config::load()?;
    let source_flag = cli.source.as_deref();

    match cli.command {
        Commands::List { era, case_type, region, search, json } => {
            let mut catalog = open_catalog(&config, source_flag).await?;

            for (dimension, value) in [
                (Dimension::Era, era),
                (Dimension::Type, case_type),
                (Dimension::Region, region),
            ] {
                if let Some(value) = value {
                    catalog.set_filter(dimension, value);
                }
            }
            if let Some(term) = search {
                catalog.set_search(term);
            }

            if json {
                println!("{}", output::to_json(&output::list_view(&catalog))?);
            } else {
                println!("{}", output::render_view(&catalog));
            }
        }

        Commands::Facets { dimension, json } => {
            let catalog = open_catalog(&config, source_flag).await?;
            let facets: Vec<_> = match dimension {
                Some(dimension) => vec![catalog.facet(dimension)],
                None => Dimension::ORDER.iter().map(|&d| catalog.facet(d)).collect(),
            };

            if json {
                println!("{}", output::to_json(&facets)?);
            } else {
                println!("{}", output::render_facets(&facets));
            }
        }

        Commands::Featured { count, json } => {
            let catalog = open_catalog(&config, source_flag).await?;
            let featured = catalog.featured(count.unwrap_or(config.featured_count));

            if json {
                println!("{}", output::to_json(featured)?);
            } else {
                println!("🔎 注目事件\n");
                for case in featured {
                    println!("{}", output::case_line(case));
                }
            }
        }

        Commands::Stats { json } => {
            let catalog = open_catalog(&config, source_flag).await?;
            let stats = catalog.stats();

            if json {
                println!("{}", output::to_json(&stats)?);
            } else {
                println!("{}", output::render_stats(&stats));
            }
        }

        Commands::Browse => {
            let mut catalog = open_catalog(&config, source_flag).await?;
            browse::run_browse(&mut catalog)?;
        }

        Commands::Config { set_source, show } => {
            let mut config = config;

            if let Some(source) = set_source {
                config.set_source(source)?;
                println!("✔ 取得元を設定しました");
            }

            if show {
                println!("設定:");
                println!("  取得元: {}", config.resolve_source(source_flag));
                println!("  注目事件の件数: {}", config.featured_count);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
