use scraper::{ElementRef, Html, Selector};

use crate::{
    normalize::{normalize, normalize_int_lenient},
    text_manipulators::{clean_text, selector},
    Season, StatsRecord,
};

/// Rows carrying one of these in a centered cell describe a player who took
/// no part in the season and are dropped, not read as zeroes.
pub const SENTINEL_PHRASES: [&str; 4] = [
    "No ha sido alineado esta temporada",
    "No ha estado en la plantilla esta temporada",
    "Not used during this season",
    "Not in squad during this season",
];

/// Where each statistic sits among a row's centered cells. The page does
/// not label these cells, so the offsets are the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsColumnLayout {
    pub lineups: usize,
    pub goals: usize,
    pub assists: usize,
    pub yellow_cards: usize,
    pub second_yellow_cards: usize,
    pub red_cards: usize,
}

impl Default for StatsColumnLayout {
    fn default() -> Self {
        Self {
            lineups: 4,
            goals: 5,
            assists: 6,
            yellow_cards: 7,
            second_yellow_cards: 8,
            red_cards: 9,
        }
    }
}

impl StatsColumnLayout {
    fn offsets(&self) -> [(&'static str, usize); 6] {
        [
            ("lineups", self.lineups),
            ("goals", self.goals),
            ("assists", self.assists),
            ("yellow cards", self.yellow_cards),
            ("second yellow cards", self.second_yellow_cards),
            ("red cards", self.red_cards),
        ]
    }

    /// Two fields may not read the same cell.
    pub fn validate(&self) -> anyhow::Result<()> {
        let offsets = self.offsets();
        for (i, (name, offset)) in offsets.iter().enumerate() {
            if let Some((other, _)) = offsets[i + 1..].iter().find(|(_, o)| o == offset) {
                return Err(anyhow::anyhow!(
                    "stats layout maps both {name} and {other} to centered cell {offset}"
                ));
            }
        }
        Ok(())
    }

    /// Number of centered cells a row needs for every field to be present.
    pub fn width(&self) -> usize {
        self.offsets()
            .iter()
            .map(|(_, offset)| offset + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Parses the performance ("leistungsdaten") page into stats records.
pub struct StatsScraper {
    layout: StatsColumnLayout,
    row_selector: Selector,
    centered_selector: Selector,
    player_selector: Selector,
}

impl StatsScraper {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_layout(StatsColumnLayout::default())
    }

    pub fn with_layout(layout: StatsColumnLayout) -> anyhow::Result<Self> {
        layout.validate()?;
        Ok(Self {
            layout,
            row_selector: selector("tr.odd, tr.even")?,
            centered_selector: selector("td.zentriert")?,
            player_selector: selector("td.hauptlink a[title]")?,
        })
    }

    pub fn layout(&self) -> &StatsColumnLayout {
        &self.layout
    }

    /// Checks the layout against a fetched page: it must hold at least one
    /// participating row, and every such row must be wide enough with a
    /// blank, dash or number at each mapped offset.
    pub fn check_sample(&self, body: &str) -> anyhow::Result<()> {
        let document = Html::parse_document(body);
        let mut participating = 0;

        for (index, row) in document.select(&self.row_selector).enumerate() {
            let centered: Vec<String> = row.select(&self.centered_selector).map(clean_text).collect();
            if centered.iter().any(|text| is_sentinel(text)) {
                continue;
            }
            participating += 1;
            if centered.len() < self.layout.width() {
                return Err(anyhow::anyhow!(
                    "row {index} has {} centered cells, layout needs {}",
                    centered.len(),
                    self.layout.width()
                ));
            }
            for (name, offset) in self.layout.offsets() {
                if let Err(e) = normalize(centered[offset].as_str()) {
                    return Err(anyhow::anyhow!("row {index}, {name} at cell {offset}: {e}"));
                }
            }
        }

        if participating == 0 {
            return Err(anyhow::anyhow!("no participating roster rows in sample page"));
        }
        Ok(())
    }

    pub fn extract(&self, body: &str, season: Season) -> Vec<StatsRecord> {
        let document = Html::parse_document(body);
        let mut records = vec![];
        let mut skipped = 0;
        let mut narrow = 0;

        for row in document.select(&self.row_selector) {
            let centered: Vec<String> = row.select(&self.centered_selector).map(clean_text).collect();
            if centered.iter().any(|text| is_sentinel(text)) {
                skipped += 1;
                continue;
            }
            if centered.len() < self.layout.width() {
                narrow += 1;
            }
            records.push(self.parse_row(row, &centered, season));
        }

        if narrow > 0 {
            log::warn!(
                "season {season}: {narrow} stats rows have fewer than {} centered cells, the page layout may have changed",
                self.layout.width()
            );
        }
        log::debug!(
            "season {season}: {} stats rows, {skipped} without participation",
            records.len()
        );
        records
    }

    fn parse_row(&self, row: ElementRef, centered: &[String], season: Season) -> StatsRecord {
        let player_name = row
            .select(&self.player_selector)
            .next()
            .map(clean_text)
            .filter(|name| !name.is_empty());
        let cell = |offset: usize| centered.get(offset).map(String::as_str);
        let layout = &self.layout;

        StatsRecord {
            season,
            player_name,
            lineups: normalize_int_lenient(cell(layout.lineups), "lineups"),
            goals: normalize_int_lenient(cell(layout.goals), "goals"),
            assists: normalize_int_lenient(cell(layout.assists), "assists"),
            yellow_cards: normalize_int_lenient(cell(layout.yellow_cards), "yellow cards"),
            second_yellow_cards: normalize_int_lenient(
                cell(layout.second_yellow_cards),
                "second yellow cards",
            ),
            red_cards: normalize_int_lenient(cell(layout.red_cards), "red cards"),
        }
    }
}

fn is_sentinel(text: &str) -> bool {
    SENTINEL_PHRASES.contains(&text)
}
