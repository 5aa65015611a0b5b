use crate::Season;

pub const DEFAULT_MARKET_VALUE_HOST: &str = "www.transfermarkt.co.uk";
pub const DEFAULT_STATS_HOST: &str = "www.transfermarkt.es";

/// Builds the two page URLs for a club and season. No validation happens
/// here; a bad slug or code shows up later as a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    market_value_host: String,
    stats_host: String,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MARKET_VALUE_HOST, DEFAULT_STATS_HOST)
    }
}

impl UrlBuilder {
    pub fn new(market_value_host: impl Into<String>, stats_host: impl Into<String>) -> Self {
        Self {
            market_value_host: market_value_host.into(),
            stats_host: stats_host.into(),
        }
    }

    pub fn market_value_url(&self, team: &str, code: &str, season: Season) -> String {
        format!(
            "https://{}/{}/kader/verein/{}/plus/0/galerie/0?saison_id={}",
            self.market_value_host, team, code, season
        )
    }

    pub fn stats_url(&self, team: &str, code: &str, season: Season) -> String {
        format!(
            "https://{}/{}/leistungsdaten/verein/{}/plus/1?reldata=%26{}",
            self.stats_host, team, code, season
        )
    }
}
