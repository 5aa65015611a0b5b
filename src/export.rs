use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::CombinedTable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Writes to `path`, or stdout when there is none.
pub fn export(table: &CombinedTable, format: OutputFormat, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_table(table, format, BufWriter::new(file))?;
            log::info!("wrote {} rows to {}", table.len(), path.display());
        }
        None => write_table(table, format, io::stdout().lock())?,
    }
    Ok(())
}

pub fn write_table<W: Write>(table: &CombinedTable, format: OutputFormat, writer: W) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => write_csv(table, writer),
        OutputFormat::Json => write_json(table, writer),
    }
}

/// Absent values are written as empty fields.
pub fn write_csv<W: Write>(table: &CombinedTable, writer: W) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    // Serializing the first row emits the header; an empty table still gets one.
    if table.is_empty() {
        csv_writer.write_record(CombinedTable::COLUMNS)?;
    }
    for row in table {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// An array of objects; absent values are `null`.
pub fn write_json<W: Write>(table: &CombinedTable, mut writer: W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut writer, table)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CombinedRecord, Season};

    fn table() -> CombinedTable {
        CombinedTable::new(vec![CombinedRecord {
            season: Season::new(2021),
            squad_number: Some(7),
            player_name: "Player X".to_string(),
            position: Some("Winger".to_string()),
            age: None,
            nationality: Some("Brazil".to_string()),
            market_value: Some(45_500_000.0),
            lineups: Some(30),
            goals: Some(12),
            assists: Some(8),
            yellow_cards: None,
            second_yellow_cards: None,
            red_cards: Some(0),
        }])
    }

    #[test]
    fn csv_has_contract_columns_and_empty_absent_fields() {
        let mut out = vec![];
        write_csv(&table(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), CombinedTable::COLUMNS.join(","));
        assert_eq!(
            lines.next().unwrap(),
            "2021,7,Player X,Winger,,Brazil,45500000.0,30,12,8,,,0"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn csv_header_for_empty_table() {
        let mut out = vec![];
        write_csv(&CombinedTable::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.trim_end(), CombinedTable::COLUMNS.join(","));
    }

    #[test]
    fn json_uses_string_season_and_nulls() {
        let mut out = vec![];
        write_table(&table(), OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let row = &value[0];
        assert_eq!(row["Season"], "2021");
        assert_eq!(row["Player"], "Player X");
        assert_eq!(row["Market Value"], 45_500_000.0);
        assert!(row["Age"].is_null());
        assert!(row["Second Card"].is_null());
    }

    #[test]
    fn output_format_parses_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
        assert_eq!(OutputFormat::default(), OutputFormat::Csv);
    }
}
