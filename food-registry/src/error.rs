use chrono::NaiveDate;
use thiserror::Error;

use crate::models::foods::FoodId;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing field: `{0}`")]
    MissingField(&'static str),

    #[error("invalid date range: expiration {expiration} must be after manufacturing {manufacturing}")]
    InvalidDateRange {
        manufacturing: NaiveDate,
        expiration: NaiveDate,
    },

    #[error("Unknown food category: {0}")]
    UnknownCategory(String),

    #[error("Unknown storage location: {0}")]
    UnknownStorage(String),

    #[error("Field `{field}` is not a YYYY-MM-DD date: {value}")]
    InvalidDate { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read key `{key}`")]
    Read {
        key: String,
        #[source]
        source: BoxError,
    },

    #[error("Failed to write key `{key}`")]
    Write {
        key: String,
        #[source]
        source: BoxError,
    },
}

impl StoreError {
    pub fn read(key: impl Into<String>, source: impl Into<BoxError>) -> Self {
        StoreError::Read {
            key: key.into(),
            source: source.into(),
        }
    }

    pub fn write(key: impl Into<String>, source: impl Into<BoxError>) -> Self {
        StoreError::Write {
            key: key.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Food (ID: {0}) not found")]
    NotFound(FoodId),

    #[error("No food ids left after {0}")]
    IdsExhausted(FoodId),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Persisted food list is malformed")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode food list")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}
