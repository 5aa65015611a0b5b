use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::{
    normalize::{normalize_int_lenient, normalize_lenient},
    text_manipulators::{clean_text, selector},
    MarketValueRecord, NumericValue, Season,
};

/// Parses the squad ("kader") page into roster records.
pub struct MarketValueScraper {
    row_selector: Selector,
    number_selector: Selector,
    player_selector: Selector,
    cell_selector: Selector,
    centered_selector: Selector,
    flag_selector: Selector,
    market_value_selector: Selector,
    // The age cell reads "May 11, 1992 (31)".
    age_regex: Regex,
}

impl MarketValueScraper {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            row_selector: selector("tr.odd, tr.even")?,
            number_selector: selector("div.rn_nummer")?,
            player_selector: selector("td.hauptlink")?,
            cell_selector: selector("td")?,
            centered_selector: selector("td.zentriert")?,
            flag_selector: selector("img.flaggenrahmen")?,
            market_value_selector: selector("td.rechts.hauptlink")?,
            age_regex: Regex::new(r"\((\d+)\)\s*$")?,
        })
    }

    /// Every roster row yields a record, even when none of its fields could
    /// be read.
    pub fn extract(&self, body: &str, season: Season) -> Vec<MarketValueRecord> {
        let document = Html::parse_document(body);
        let records: Vec<_> = document
            .select(&self.row_selector)
            .map(|row| self.parse_row(row, season))
            .collect();
        log::debug!("season {season}: {} market value rows", records.len());
        records
    }

    fn parse_row(&self, row: ElementRef, season: Season) -> MarketValueRecord {
        let number = row.select(&self.number_selector).next().map(clean_text);
        let squad_number = normalize_int_lenient(number.as_deref(), "squad number");

        let player_name = row
            .select(&self.player_selector)
            .next()
            .map(clean_text)
            .filter(|name| !name.is_empty());

        // Name and position share the second cell; the position is its last word.
        let position = row
            .select(&self.cell_selector)
            .nth(1)
            .and_then(|cell| clean_text(cell).split_whitespace().last().map(String::from));

        let age_cell = row.select(&self.centered_selector).nth(1).map(clean_text);
        let age = normalize_int_lenient(age_cell.as_deref().map(|text| self.age_text(text)), "age");

        let nationality = row
            .select(&self.flag_selector)
            .next()
            .and_then(|flag| flag.value().attr("title"))
            .map(String::from);

        let value = row.select(&self.market_value_selector).next().map(clean_text);
        let market_value = normalize_lenient(value.as_deref(), "market value").map(NumericValue::as_f64);

        MarketValueRecord {
            season,
            squad_number,
            player_name,
            position,
            age,
            nationality,
            market_value,
        }
    }

    fn age_text<'a>(&self, text: &'a str) -> &'a str {
        self.age_regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map_or(text, |m| m.as_str())
    }
}
