use std::path::PathBuf;

use anyhow::Context;
use chrono::{Datelike, Utc};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    OutputFormat, Season, Team, UrlBuilder,
    urls::{DEFAULT_MARKET_VALUE_HOST, DEFAULT_STATS_HOST},
};

/// The source has practically no squad data before this season.
pub const FIRST_SEASON: Season = Season::new(2005);

/// Seasons covered by default when only an end (or nothing) is given.
const DEFAULT_SPAN: u16 = 4;

/// The env vars read for a scrape.
#[derive(Debug, Deserialize)]
pub struct ScrapingEnv {
    team: String,
    team_code: Option<String>,
    /// Comma separated, e.g. `2010,2020`. Takes precedence over the range.
    seasons: Option<String>,
    season_start: Option<u16>,
    season_end: Option<u16>,
    #[serde(default = "default_market_value_host")]
    market_value_host: String,
    #[serde(default = "default_stats_host")]
    stats_host: String,
    #[serde(default)]
    output_format: OutputFormat,
    output_path: Option<PathBuf>,
}

fn default_market_value_host() -> String {
    DEFAULT_MARKET_VALUE_HOST.to_string()
}

fn default_stats_host() -> String {
    DEFAULT_STATS_HOST.to_string()
}

#[derive(Debug, Clone)]
pub struct ScrapingConfig {
    pub team: Team,
    pub seasons: Vec<Season>,
    pub urls: UrlBuilder,
    pub output_format: OutputFormat,
    pub output_path: Option<PathBuf>,
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_env = ScrapingEnv::load_from_env()?;
        Self::from_env(scraping_env, current_season()?)
    }

    pub fn from_env(scraping_env: ScrapingEnv, current: Season) -> anyhow::Result<Self> {
        let team = Team::resolve(&scraping_env.team, scraping_env.team_code.as_deref())?;

        let seasons = match &scraping_env.seasons {
            Some(list) => parse_season_list(list)?,
            None => {
                let end = scraping_env.season_end.map_or(current, Season::new);
                let start = scraping_env
                    .season_start
                    .map_or(Season::new(end.year().saturating_sub(DEFAULT_SPAN)), Season::new);
                Season::range(start, end)?
            }
        };
        if let Some(season) = seasons.iter().find(|s| **s < FIRST_SEASON || **s > current) {
            return Err(anyhow::anyhow!(
                "season {season} is outside {FIRST_SEASON}..={current}"
            ));
        }

        Ok(Self {
            team,
            seasons,
            urls: UrlBuilder::new(scraping_env.market_value_host, scraping_env.stats_host),
            output_format: scraping_env.output_format,
            output_path: scraping_env.output_path,
        })
    }
}

fn current_season() -> anyhow::Result<Season> {
    let year = u16::try_from(Utc::now().year()).context("current year out of range")?;
    Ok(Season::new(year))
}

/// Order is kept as given; it only matters for presentation.
fn parse_season_list(list: &str) -> anyhow::Result<Vec<Season>> {
    let seasons = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<anyhow::Result<Vec<Season>>>()?;
    if seasons.is_empty() {
        return Err(anyhow::anyhow!("SEASONS is set but lists no seasons"));
    }
    Ok(seasons)
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config =
            envy::from_env::<Self>().context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> ScrapingEnv {
        envy::from_iter(vars.iter().map(|(k, v)| (k.to_string(), v.to_string()))).unwrap()
    }

    const NOW: Season = Season::new(2024);

    #[test]
    fn preset_team_with_default_range() {
        let config = ScrapingConfig::from_env(env(&[("TEAM", "Real Madrid")]), NOW).unwrap();
        assert_eq!(config.team, Team::new("real-madrid", "418"));
        assert_eq!(
            config.seasons,
            Season::range(Season::new(2020), Season::new(2024)).unwrap()
        );
        assert_eq!(config.urls, UrlBuilder::default());
        assert_eq!(config.output_format, OutputFormat::Csv);
        assert_eq!(config.output_path, None);
    }

    #[test]
    fn explicit_range_and_output() {
        let config = ScrapingConfig::from_env(
            env(&[
                ("TEAM", "cd-leganes"),
                ("TEAM_CODE", "1244"),
                ("SEASON_START", "2018"),
                ("SEASON_END", "2019"),
                ("OUTPUT_FORMAT", "json"),
                ("OUTPUT_PATH", "out.json"),
                ("STATS_HOST", "stats.test"),
            ]),
            NOW,
        )
        .unwrap();
        assert_eq!(config.team, Team::new("cd-leganes", "1244"));
        assert_eq!(config.seasons, vec![Season::new(2018), Season::new(2019)]);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.output_path, Some(PathBuf::from("out.json")));
        assert_eq!(config.urls, UrlBuilder::new(DEFAULT_MARKET_VALUE_HOST, "stats.test"));
    }

    #[test]
    fn season_list_keeps_given_order() {
        let config = ScrapingConfig::from_env(
            env(&[("TEAM", "chelsea"), ("SEASONS", "2020, 2010")]),
            NOW,
        )
        .unwrap();
        assert_eq!(config.seasons, vec![Season::new(2020), Season::new(2010)]);
    }

    #[test]
    fn rejects_seasons_outside_coverage() {
        let too_early = env(&[("TEAM", "chelsea"), ("SEASONS", "2004")]);
        assert!(ScrapingConfig::from_env(too_early, NOW).is_err());
        let future = env(&[("TEAM", "chelsea"), ("SEASON_START", "2024"), ("SEASON_END", "2025")]);
        assert!(ScrapingConfig::from_env(future, NOW).is_err());
    }

    #[test]
    fn rejects_reversed_range_and_empty_list() {
        let reversed = env(&[("TEAM", "chelsea"), ("SEASON_START", "2022"), ("SEASON_END", "2020")]);
        assert!(ScrapingConfig::from_env(reversed, NOW).is_err());
        let empty = env(&[("TEAM", "chelsea"), ("SEASONS", " , ")]);
        assert!(ScrapingConfig::from_env(empty, NOW).is_err());
    }

    #[test]
    fn unknown_team_needs_code() {
        assert!(ScrapingConfig::from_env(env(&[("TEAM", "cd-leganes")]), NOW).is_err());
    }
}
