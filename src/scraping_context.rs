use crate::{config::ScrapingConfig, requests::RequestClient, SeasonScraper};

pub struct ScrapingContext {
    pub scraping_config: ScrapingConfig,
    pub season_scraper: SeasonScraper<RequestClient>,
}

impl ScrapingContext {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_config = ScrapingConfig::new()?;
        let request_client = RequestClient::new()?;
        let season_scraper = SeasonScraper::new(request_client, scraping_config.urls.clone())?;
        Ok(ScrapingContext {
            scraping_config,
            season_scraper,
        })
    }
}
