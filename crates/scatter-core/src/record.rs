//! Survey records and the immutable dataset store

use crate::{DatasetError, Field, Result, ScatterError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::sync::Arc;

/// One dataset row (a US state)
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Long display name ("Alabama")
    pub state: String,
    /// Short label drawn inside the point ("AL")
    pub abbr: String,
    values: BTreeMap<Field, f64>,
}

impl Record {
    pub fn new(state: impl Into<String>, abbr: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            abbr: abbr.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, field: Field, value: f64) -> Self {
        self.values.insert(field, value);
        self
    }

    pub fn set_value(&mut self, field: Field, value: f64) {
        self.values.insert(field, value);
    }

    pub fn value(&self, field: Field) -> Option<f64> {
        self.values.get(&field).copied()
    }

}

/// Raw CSV row; extra columns in the file are ignored
#[derive(Debug, Deserialize)]
struct CsvRow {
    state: String,
    abbr: String,
    poverty: f64,
    age: f64,
    income: f64,
    obesity: f64,
    smokes: f64,
    healthcare: f64,
}

impl CsvRow {
    fn into_record(self, row: usize) -> Result<Record, DatasetError> {
        let values = [
            (Field::Poverty, self.poverty),
            (Field::Age, self.age),
            (Field::Income, self.income),
            (Field::Obesity, self.obesity),
            (Field::Smokes, self.smokes),
            (Field::Healthcare, self.healthcare),
        ];

        let mut record = Record::new(self.state, self.abbr);
        for (field, value) in values {
            if !value.is_finite() {
                return Err(DatasetError::InvalidValue {
                    row,
                    column: field,
                    value,
                });
            }
            record.set_value(field, value);
        }

        Ok(record)
    }
}

/// Ordered, immutable collection of records shared by every component
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Arc<Vec<Record>>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    /// Parse a comma-delimited file with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for (row, result) in rdr.deserialize::<CsvRow>().enumerate() {
            records.push(result?.into_record(row)?);
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        tracing::info!("Loaded dataset with {} records", records.len());
        Ok(Self::from_records(records))
    }

    pub fn from_csv_str(text: &str) -> Result<Self, DatasetError> {
        Self::from_csv_reader(text.as_bytes())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed (min, max) of a field. Fails if the dataset is empty or any
    /// record lacks the field.
    pub fn extent(&self, field: Field) -> Result<(f64, f64)> {
        if self.records.is_empty() {
            return Err(ScatterError::EmptyDataset);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for (row, record) in self.records.iter().enumerate() {
            let value = record
                .value(field)
                .ok_or(ScatterError::MissingField { field, row })?;
            min = min.min(value);
            max = max.max(value);
        }

        Ok((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,state,abbr,poverty,povertyMoe,age,income,healthcare,obesity,smokes
1,Alabama,AL,19.3,0.5,38.6,42830,13.9,33.5,21.1
2,Alaska,AK,11.2,0.9,33.3,71583,15,29.7,19.9
";

    #[test]
    fn test_parse_csv_ignores_extra_columns() {
        let dataset = Dataset::from_csv_str(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 2);

        let alabama = &dataset.records()[0];
        assert_eq!(alabama.state, "Alabama");
        assert_eq!(alabama.abbr, "AL");
        assert_eq!(alabama.value(Field::Poverty), Some(19.3));
        assert_eq!(alabama.value(Field::Income), Some(42830.0));
        assert_eq!(dataset.records()[1].value(Field::Healthcare), Some(15.0));
    }

    #[test]
    fn test_missing_column_fails() {
        let text = "state,abbr,poverty,age,income,obesity,smokes\nAlabama,AL,19.3,38.6,42830,33.5,21.1\n";
        let err = Dataset::from_csv_str(text).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }

    #[test]
    fn test_non_numeric_value_fails() {
        let text = "state,abbr,poverty,age,income,obesity,smokes,healthcare\nAlabama,AL,n/a,38.6,42830,33.5,21.1,13.9\n";
        assert!(matches!(
            Dataset::from_csv_str(text),
            Err(DatasetError::Csv(_))
        ));
    }

    #[test]
    fn test_non_finite_value_fails() {
        let text = "state,abbr,poverty,age,income,obesity,smokes,healthcare\nAlabama,AL,19.3,NaN,42830,33.5,21.1,13.9\n";
        let err = Dataset::from_csv_str(text).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidValue { row: 0, column: Field::Age, .. }
        ));
    }

    #[test]
    fn test_header_only_is_empty() {
        let text = "state,abbr,poverty,age,income,obesity,smokes,healthcare\n";
        assert!(matches!(Dataset::from_csv_str(text), Err(DatasetError::Empty)));
    }

    #[test]
    fn test_extent() {
        let dataset = Dataset::from_records(vec![
            Record::new("A", "A").with_value(Field::Poverty, 10.0),
            Record::new("B", "B").with_value(Field::Poverty, 30.0),
            Record::new("C", "C").with_value(Field::Poverty, 20.0),
        ]);
        assert_eq!(dataset.extent(Field::Poverty).unwrap(), (10.0, 30.0));
    }

    #[test]
    fn test_extent_missing_field() {
        let dataset = Dataset::from_records(vec![
            Record::new("A", "A").with_value(Field::Poverty, 10.0),
            Record::new("B", "B").with_value(Field::Obesity, 30.0),
        ]);
        let err = dataset.extent(Field::Poverty).unwrap_err();
        assert!(matches!(
            err,
            ScatterError::MissingField { field: Field::Poverty, row: 1 }
        ));
    }

    #[test]
    fn test_extent_empty() {
        let dataset = Dataset::default();
        assert!(matches!(
            dataset.extent(Field::Age),
            Err(ScatterError::EmptyDataset)
        ));
    }
}
