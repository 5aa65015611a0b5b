use std::collections::BTreeSet;

use serde::Serialize;

use crate::Season;

/// One roster row from the market-value page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketValueRecord {
    #[serde(rename = "Season")]
    pub season: Season,
    #[serde(rename = "Number")]
    pub squad_number: Option<i64>,
    #[serde(rename = "Player")]
    pub player_name: Option<String>,
    #[serde(rename = "Position")]
    pub position: Option<String>,
    #[serde(rename = "Age")]
    pub age: Option<i64>,
    #[serde(rename = "Nationality")]
    pub nationality: Option<String>,
    /// Absolute amount, suffixes already expanded.
    #[serde(rename = "Market Value")]
    pub market_value: Option<f64>,
}

/// One performance row from the statistics page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsRecord {
    #[serde(rename = "Season")]
    pub season: Season,
    #[serde(rename = "Player")]
    pub player_name: Option<String>,
    #[serde(rename = "Lineups")]
    pub lineups: Option<i64>,
    #[serde(rename = "Goals")]
    pub goals: Option<i64>,
    #[serde(rename = "Assists")]
    pub assists: Option<i64>,
    #[serde(rename = "Yellow Cards")]
    pub yellow_cards: Option<i64>,
    #[serde(rename = "Second Card")]
    pub second_yellow_cards: Option<i64>,
    #[serde(rename = "Red Cards")]
    pub red_cards: Option<i64>,
}

/// A market-value row and a stats row sharing player name and season.
///
/// Player names are not unique identifiers: two players with the same name
/// in the same season produce one row per matching pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedRecord {
    #[serde(rename = "Season")]
    pub season: Season,
    #[serde(rename = "Number")]
    pub squad_number: Option<i64>,
    #[serde(rename = "Player")]
    pub player_name: String,
    #[serde(rename = "Position")]
    pub position: Option<String>,
    #[serde(rename = "Age")]
    pub age: Option<i64>,
    #[serde(rename = "Nationality")]
    pub nationality: Option<String>,
    #[serde(rename = "Market Value")]
    pub market_value: Option<f64>,
    #[serde(rename = "Lineups")]
    pub lineups: Option<i64>,
    #[serde(rename = "Goals")]
    pub goals: Option<i64>,
    #[serde(rename = "Assists")]
    pub assists: Option<i64>,
    #[serde(rename = "Yellow Cards")]
    pub yellow_cards: Option<i64>,
    #[serde(rename = "Second Card")]
    pub second_yellow_cards: Option<i64>,
    #[serde(rename = "Red Cards")]
    pub red_cards: Option<i64>,
}

impl CombinedRecord {
    pub fn new(player_name: String, market_value: &MarketValueRecord, stats: &StatsRecord) -> Self {
        Self {
            season: market_value.season,
            squad_number: market_value.squad_number,
            player_name,
            position: market_value.position.clone(),
            age: market_value.age,
            nationality: market_value.nationality.clone(),
            market_value: market_value.market_value,
            lineups: stats.lineups,
            goals: stats.goals,
            assists: stats.assists,
            yellow_cards: stats.yellow_cards,
            second_yellow_cards: stats.second_yellow_cards,
            red_cards: stats.red_cards,
        }
    }
}

/// The combined per-player, per-season dataset handed to callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CombinedTable {
    rows: Vec<CombinedRecord>,
}

impl CombinedTable {
    pub const COLUMNS: [&'static str; 13] = [
        "Season",
        "Number",
        "Player",
        "Position",
        "Age",
        "Nationality",
        "Market Value",
        "Lineups",
        "Goals",
        "Assists",
        "Yellow Cards",
        "Second Card",
        "Red Cards",
    ];

    pub fn new(rows: Vec<CombinedRecord>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CombinedRecord> {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[CombinedRecord] {
        &self.rows
    }

    /// Distinct seasons present, chronologically.
    pub fn seasons(&self) -> Vec<Season> {
        self.rows
            .iter()
            .map(|row| row.season)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl IntoIterator for CombinedTable {
    type Item = CombinedRecord;
    type IntoIter = std::vec::IntoIter<CombinedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CombinedTable {
    type Item = &'a CombinedRecord;
    type IntoIter = std::slice::Iter<'a, CombinedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
