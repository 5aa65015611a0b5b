mod config;
mod export;
mod joiner;
mod market_value_scraper;
mod normalize;
mod parse_error;
mod progress;
mod records;
mod requests;
mod scraping_context;
mod season;
mod season_scraper;
mod stats_scraper;
mod teams;
mod text_manipulators;
mod urls;
mod user_agent;

pub use config::{LoadFromEnv, ScrapingConfig, ScrapingEnv, FIRST_SEASON};
pub use export::{export, write_csv, write_json, write_table, OutputFormat};
pub use joiner::join;
pub use market_value_scraper::MarketValueScraper;
pub use normalize::{normalize, Normalize, NumericValue};
pub use parse_error::ParseError;
pub use progress::{LogProgress, ProgressObserver};
pub use records::{CombinedRecord, CombinedTable, MarketValueRecord, StatsRecord};
pub use requests::{FetchFailure, FetchOutcome, PageFetcher, RequestClient};
pub use scraping_context::ScrapingContext;
pub use season::Season;
pub use season_scraper::SeasonScraper;
pub use stats_scraper::{StatsColumnLayout, StatsScraper, SENTINEL_PHRASES};
pub use teams::Team;
pub use urls::{UrlBuilder, DEFAULT_MARKET_VALUE_HOST, DEFAULT_STATS_HOST};
