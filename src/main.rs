use dotenv::dotenv;
use kaderwert::{export, LogProgress, ScrapingContext};
use log::{info, warn, LevelFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let context = ScrapingContext::new()?;
    let config = &context.scraping_config;
    info!(
        "Scraping {} ({}) for seasons {}",
        config.team.slug,
        config.team.code,
        config
            .seasons
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let table = context
        .season_scraper
        .scrape(&config.team, &config.seasons, &mut LogProgress)
        .await;
    if table.is_empty() {
        warn!("No player appears in both the market values and the stats of any season");
    } else {
        info!("{} rows across {} seasons", table.len(), table.seasons().len());
    }

    export(&table, config.output_format, config.output_path.as_deref())?;
    Ok(())
}
