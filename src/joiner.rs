use std::collections::HashMap;

use crate::{CombinedRecord, CombinedTable, MarketValueRecord, Season, StatsRecord};

/// Inner join on (player name, season).
///
/// Rows come out in market-value order, then stats order within a key. A
/// key that repeats on either side yields one row per matching pair, and
/// rows without a player name never match.
pub fn join(market_values: &[MarketValueRecord], stats: &[StatsRecord]) -> CombinedTable {
    let mut stats_by_key: HashMap<(&str, Season), Vec<&StatsRecord>> = HashMap::new();
    for record in stats {
        if let Some(name) = record.player_name.as_deref() {
            stats_by_key
                .entry((name, record.season))
                .or_default()
                .push(record);
        }
    }

    let mut rows = vec![];
    for market_value in market_values {
        let Some(name) = market_value.player_name.as_deref() else {
            continue;
        };
        let Some(matches) = stats_by_key.get(&(name, market_value.season)) else {
            continue;
        };
        for stats_record in matches {
            rows.push(CombinedRecord::new(
                name.to_string(),
                market_value,
                stats_record,
            ));
        }
    }

    log::debug!(
        "joined {} market value rows with {} stats rows into {}",
        market_values.len(),
        stats.len(),
        rows.len()
    );
    CombinedTable::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market_value(name: &str, season: u16, number: i64) -> MarketValueRecord {
        MarketValueRecord {
            season: Season::new(season),
            squad_number: Some(number),
            player_name: Some(name.to_string()),
            position: Some("Midfield".to_string()),
            age: Some(25),
            nationality: Some("Spain".to_string()),
            market_value: Some(1_000_000.0),
        }
    }

    fn stats(name: &str, season: u16, goals: i64) -> StatsRecord {
        StatsRecord {
            season: Season::new(season),
            player_name: Some(name.to_string()),
            lineups: Some(10),
            goals: Some(goals),
            assists: None,
            yellow_cards: Some(2),
            second_yellow_cards: None,
            red_cards: None,
        }
    }

    #[test]
    fn keeps_only_players_in_both_sources() {
        let table = join(
            &[market_value("A", 2021, 1), market_value("B", 2021, 2)],
            &[stats("A", 2021, 5), stats("C", 2021, 3)],
        );
        assert_eq!(table.len(), 1);
        let row = &table.rows()[0];
        assert_eq!(row.player_name, "A");
        assert_eq!(row.squad_number, Some(1));
        assert_eq!(row.goals, Some(5));
        assert_eq!(row.market_value, Some(1_000_000.0));
    }

    #[test]
    fn season_is_part_of_the_key() {
        let table = join(&[market_value("A", 2021, 1)], &[stats("A", 2022, 5)]);
        assert!(table.is_empty());
    }

    #[test]
    fn duplicate_names_cross_join() {
        let table = join(
            &[market_value("Twin", 2021, 1), market_value("Twin", 2021, 2)],
            &[stats("Twin", 2021, 3), stats("Twin", 2021, 4)],
        );
        let pairs: Vec<_> = table.iter().map(|r| (r.squad_number, r.goals)).collect();
        assert_eq!(
            pairs,
            vec![
                (Some(1), Some(3)),
                (Some(1), Some(4)),
                (Some(2), Some(3)),
                (Some(2), Some(4)),
            ]
        );
    }

    #[test]
    fn nameless_rows_never_match() {
        let mut nameless_mv = market_value("x", 2021, 1);
        nameless_mv.player_name = None;
        let mut nameless_stats = stats("x", 2021, 1);
        nameless_stats.player_name = None;
        assert!(join(&[nameless_mv], &[nameless_stats]).is_empty());
    }

    #[test]
    fn preserves_market_value_order_across_seasons() {
        let table = join(
            &[
                market_value("B", 2022, 2),
                market_value("A", 2021, 1),
                market_value("A", 2022, 1),
            ],
            &[stats("A", 2021, 1), stats("A", 2022, 2), stats("B", 2022, 3)],
        );
        let keys: Vec<_> = table
            .iter()
            .map(|r| (r.player_name.as_str(), r.season.year()))
            .collect();
        assert_eq!(keys, vec![("B", 2022), ("A", 2021), ("A", 2022)]);
        assert_eq!(table.seasons(), vec![Season::new(2021), Season::new(2022)]);
    }

    #[test]
    fn empty_inputs_give_empty_table() {
        assert!(join(&[], &[]).is_empty());
    }
}
