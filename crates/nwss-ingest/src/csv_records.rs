use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord};

use nwss_model::{RawRecord, RawValue};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}

/// Read every data row of a CSV file as a raw record keyed by header.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    let file = std::fs::File::open(path).with_context(|| format!("open csv: {}", path.display()))?;
    let records =
        read_records_from_reader(file).with_context(|| format!("read csv: {}", path.display()))?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded csv");
    Ok(records)
}

/// Read CSV rows from any reader.
///
/// Cells are trimmed, so a blank cell becomes empty text and the validator
/// treats it as absent. Rows shorter than the header are padded with empty
/// text; rows with every cell blank are skipped. A row with non-blank cells
/// past the last header column is an error.
pub fn read_records_from_reader(reader: impl Read) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .context("read header row")?
        .iter()
        .map(normalize_header)
        .collect();
    check_headers(&headers)?;

    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = row.with_context(|| format!("read data row {}", line + 1))?;
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        if row.iter().skip(headers.len()).any(|cell| !cell.trim().is_empty()) {
            bail!(
                "data row {} has {} cells but the header has {} columns",
                line + 1,
                row.len(),
                headers.len()
            );
        }
        records.push(to_record(&headers, &row));
    }
    Ok(records)
}

fn check_headers(headers: &[String]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for header in headers {
        if header.is_empty() {
            bail!("header row has an empty column name");
        }
        if !seen.insert(header.as_str()) {
            bail!("duplicate column `{header}` in header row");
        }
    }
    Ok(())
}

fn to_record(headers: &[String], row: &StringRecord) -> RawRecord {
    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let cell = row.get(idx).map(normalize_cell).unwrap_or_default();
            (header.clone(), RawValue::Text(cell))
        })
        .collect()
}
