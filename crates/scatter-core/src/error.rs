//! Error types shared by the whole workspace

use crate::{AxisKind, Field};

/// Failure while loading or parsing the dataset file. Always fatal for startup.
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset contains no records")]
    Empty,

    #[error("row {row}: column `{column}` has non-finite value {value}")]
    InvalidValue {
        row: usize,
        column: Field,
        value: f64,
    },
}

/// Errors raised by the axis rebinding engine
#[derive(thiserror::Error, Debug)]
pub enum ScatterError {
    #[error("unknown field name `{0}`")]
    UnknownField(String),

    #[error("cannot compute a scale over an empty dataset")]
    EmptyDataset,

    #[error("record {row} has no value for `{field}`")]
    MissingField { field: Field, row: usize },

    #[error("`{field}` is not a {kind} axis label")]
    NotOnAxis { field: Field, kind: AxisKind },

    #[error("`{0}` is not a label on either axis")]
    UnknownLabel(Field),

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

pub type Result<T, E = ScatterError> = std::result::Result<T, E>;
