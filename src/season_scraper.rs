use crate::{
    joiner::join,
    requests::{FetchOutcome, PageFetcher},
    CombinedTable, MarketValueRecord, MarketValueScraper, ProgressObserver, Season,
    StatsColumnLayout, StatsRecord, StatsScraper, Team, UrlBuilder,
};

/// Drives one scrape: for each season fetch and parse the market-value page,
/// then the stats page, then join everything once at the end.
///
/// Work is strictly sequential. A failed page is reported to the observer
/// and skipped; it never ends the run, and a failed market-value page does
/// not stop the stats page of the same season from being tried.
pub struct SeasonScraper<F> {
    fetcher: F,
    urls: UrlBuilder,
    market_value_scraper: MarketValueScraper,
    stats_scraper: StatsScraper,
}

impl<F: PageFetcher> SeasonScraper<F> {
    pub fn new(fetcher: F, urls: UrlBuilder) -> anyhow::Result<Self> {
        Ok(Self {
            fetcher,
            urls,
            market_value_scraper: MarketValueScraper::new()?,
            stats_scraper: StatsScraper::new()?,
        })
    }

    pub fn with_stats_layout(mut self, layout: StatsColumnLayout) -> anyhow::Result<Self> {
        self.stats_scraper = StatsScraper::with_layout(layout)?;
        Ok(self)
    }

    pub async fn scrape(
        &self,
        team: &Team,
        seasons: &[Season],
        progress: &mut impl ProgressObserver,
    ) -> CombinedTable {
        let mut market_values: Vec<MarketValueRecord> = vec![];
        let mut stats: Vec<StatsRecord> = vec![];
        let mut layout_checked = false;

        for &season in seasons {
            let url = self.urls.market_value_url(&team.slug, &team.code, season);
            match self.fetcher.fetch(&url).await {
                FetchOutcome::Page(body) => {
                    market_values.extend(self.market_value_scraper.extract(&body, season));
                    progress.notify(&format!("Market values for season {season} completed."));
                }
                FetchOutcome::Failed(failure) => {
                    progress.notify(&format!(
                        "Failed to download market values for season {season}: {failure}"
                    ));
                }
            }

            let url = self.urls.stats_url(&team.slug, &team.code, season);
            match self.fetcher.fetch(&url).await {
                FetchOutcome::Page(body) => {
                    // The first stats page fetched doubles as the layout sample.
                    if !layout_checked {
                        layout_checked = true;
                        if let Err(e) = self.stats_scraper.check_sample(&body) {
                            log::warn!("stats layout does not match season {season} page: {e}");
                        }
                    }
                    stats.extend(self.stats_scraper.extract(&body, season));
                    progress.notify(&format!("Stats for season {season} completed."));
                }
                FetchOutcome::Failed(failure) => {
                    progress.notify(&format!(
                        "Failed to download stats for season {season}: {failure}"
                    ));
                }
            }
        }

        log::info!(
            "{}: {} market value rows and {} stats rows over {} seasons",
            team.slug,
            market_values.len(),
            stats.len(),
            seasons.len()
        );
        join(&market_values, &stats)
    }
}
