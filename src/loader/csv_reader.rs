//! CSV reader for the postings table.

use super::record::{ProjectType, RawRecord};
use crate::utils::config::{
    COL_BUDGET, COL_CATEGORY, COL_CLIENT_REGISTRATION, COL_COUNTRY, COL_CURRENCY,
    COL_DATE_POSTED, COL_EXPERIENCE, COL_SUB_CATEGORY, COL_TITLE, COL_TYPE, REQUIRED_COLUMNS,
};
use crate::utils::error::LoadError;
use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load all postings from a CSV file
///
/// **Public** - main entry point for input loading
///
/// # Errors
/// * `LoadError::Io` - file cannot be opened
/// * `LoadError::Csv` - the file is not valid CSV
/// * `LoadError::MissingColumn` - a required header is absent
/// * `LoadError::MalformedRecord` - budget, currency or type cannot be parsed
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, LoadError> {
    let path = path.as_ref();

    info!("Loading postings from: {}", path.display());

    let file = File::open(path)?;
    read_records(BufReader::new(file))
}

/// Read postings from any CSV source
///
/// Rows whose cells are all identical to an earlier row are dropped.
pub fn read_records<R: Read>(source: R) -> Result<Vec<RawRecord>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let columns = ColumnMap::new(&headers)?;

    let mut records = Vec::new();
    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut duplicates = 0usize;

    for (index, result) in reader.records().enumerate() {
        let row = index + 1;
        let cells = result?;

        let key: Vec<String> = cells.iter().map(str::to_string).collect();
        if !seen.insert(key) {
            duplicates += 1;
            debug!("Row {} duplicates an earlier row, dropping", row);
            continue;
        }

        records.push(columns.build_record(row, &headers, &cells)?);
    }

    info!("Loaded {} postings ({} duplicate rows dropped)", records.len(), duplicates);

    Ok(records)
}

/// Header name -> column index, with required columns checked up front
struct ColumnMap {
    index: HashMap<String, usize>,
}

impl ColumnMap {
    fn new(headers: &[String]) -> Result<Self, LoadError> {
        let index: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), i))
            .collect();

        for column in REQUIRED_COLUMNS {
            if !index.contains_key(*column) {
                return Err(LoadError::MissingColumn(column.to_string()));
            }
        }

        Ok(Self { index })
    }

    fn cell<'r>(&self, cells: &'r csv::StringRecord, column: &str) -> &'r str {
        self.index
            .get(column)
            .and_then(|&i| cells.get(i))
            .unwrap_or("")
    }

    fn build_record(
        &self,
        row: usize,
        headers: &[String],
        cells: &csv::StringRecord,
    ) -> Result<RawRecord, LoadError> {
        let budget_cell = self.cell(cells, COL_BUDGET);
        let budget = parse_budget(budget_cell).map_err(|reason| LoadError::MalformedRecord {
            row,
            field: COL_BUDGET.to_string(),
            value: budget_cell.to_string(),
            reason,
        })?;

        let type_cell = self.cell(cells, COL_TYPE);
        let project_type: ProjectType =
            type_cell.parse().map_err(|reason| LoadError::MalformedRecord {
                row,
                field: COL_TYPE.to_string(),
                value: type_cell.to_string(),
                reason,
            })?;

        let currency_cell = self.cell(cells, COL_CURRENCY);
        let currency = currency_cell.trim().to_ascii_uppercase();
        if currency.is_empty() {
            return Err(LoadError::MalformedRecord {
                row,
                field: COL_CURRENCY.to_string(),
                value: currency_cell.to_string(),
                reason: "currency code is empty".to_string(),
            });
        }

        let client_registration_date = self
            .index
            .get(COL_CLIENT_REGISTRATION)
            .and_then(|&i| cells.get(i))
            .map(str::to_string);

        let extra = headers
            .iter()
            .zip(cells.iter())
            .filter(|(header, _)| !is_known_column(header))
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();

        Ok(RawRecord {
            row,
            title: self.cell(cells, COL_TITLE).to_string(),
            category: self.cell(cells, COL_CATEGORY).to_string(),
            sub_category: self.cell(cells, COL_SUB_CATEGORY).to_string(),
            client_country: self.cell(cells, COL_COUNTRY).to_string(),
            experience: self.cell(cells, COL_EXPERIENCE).to_string(),
            budget,
            currency,
            project_type,
            date_posted: self.cell(cells, COL_DATE_POSTED).to_string(),
            client_registration_date,
            extra,
        })
    }
}

fn is_known_column(header: &str) -> bool {
    header == COL_CLIENT_REGISTRATION || REQUIRED_COLUMNS.contains(&header)
}

/// Parse a budget cell, tolerating whitespace and thousands separators
fn parse_budget(value: &str) -> Result<f64, String> {
    let cleaned: String = value.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err("budget is empty".to_string());
    }

    let budget: f64 = cleaned
        .parse()
        .map_err(|_| "budget is not a number".to_string())?;

    if !budget.is_finite() {
        return Err("budget is not finite".to_string());
    }

    Ok(budget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "Title,Category Name,Sub Category Name,Client Country,Experience,Budget,Currency,Type,Date Posted";

    fn csv_with(rows: &[&str]) -> String {
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content
    }

    #[test]
    fn test_read_basic_record() {
        let content = csv_with(&[
            "Logo design,Design,Logo,India,Entry (0-2 yrs),150,usd,fixed_price,2023-02-01 10:00:00",
        ]);

        let records = read_records(content.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.row, 1);
        assert_eq!(record.title, "Logo design");
        assert_eq!(record.category, "Design");
        assert_eq!(record.client_country, "India");
        assert_eq!(record.experience, "Entry (0-2 yrs)");
        assert_eq!(record.budget, 150.0);
        assert_eq!(record.currency, "USD");
        assert_eq!(record.project_type, ProjectType::FixedPrice);
        assert!(record.extra.is_empty());
    }

    #[test]
    fn test_passthrough_columns() {
        let content = "Title,Category Name,Sub Category Name,Client Country,Experience,Budget,Currency,Type,Date Posted,Description,Client Registration Date\n\
                       Site,Dev,Web,India,Expert,\"1,200\",EUR,hourly,2023-01-05 08:00,Build a site,2019-04-01\n";

        let records = read_records(content.as_bytes()).unwrap();
        let record = &records[0];

        assert_eq!(record.budget, 1200.0);
        assert_eq!(record.project_type, ProjectType::Hourly);
        assert_eq!(record.client_registration_date.as_deref(), Some("2019-04-01"));
        assert_eq!(record.extra_field("Description"), Some("Build a site"));
        assert_eq!(record.extra.len(), 1);
    }

    #[test]
    fn test_duplicate_rows_dropped() {
        let row = "Logo,Design,Logo,India,Entry,150,USD,fixed_price,2023-02-01 10:00:00";
        let content = csv_with(&[row, row, "Other,Design,Logo,India,Entry,90,USD,fixed_price,2023-02-02 10:00:00"]);

        let records = read_records(content.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].row, 1);
        assert_eq!(records[1].row, 3);
    }

    #[test]
    fn test_missing_column() {
        let content = "Title,Category Name\nLogo,Design\n";
        match read_records(content.as_bytes()) {
            Err(LoadError::MissingColumn(column)) => assert_eq!(column, "Sub Category Name"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_budget() {
        let content = csv_with(&["Logo,Design,Logo,India,Entry,lots,USD,fixed_price,2023-02-01 10:00:00"]);
        match read_records(content.as_bytes()) {
            Err(LoadError::MalformedRecord { row, field, value, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(field, "Budget");
                assert_eq!(value, "lots");
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_project_type() {
        let content = csv_with(&["Logo,Design,Logo,India,Entry,10,USD,retainer,2023-02-01 10:00:00"]);
        assert!(matches!(
            read_records(content.as_bytes()),
            Err(LoadError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget(" 42.5 "), Ok(42.5));
        assert_eq!(parse_budget("12,000"), Ok(12000.0));
        assert!(parse_budget("").is_err());
        assert!(parse_budget("inf").is_err());
    }
}
