use chrono::NaiveDate;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::categories::FoodCategory;
use super::storage_locations::StorageLocation;
use crate::error::ValidationError;
use crate::expiration::{self, ExpirationStatus};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Field names as the form submits them, in the order they are checked.
const INPUT_FIELDS: [&str; 5] = [
    "name",
    "category",
    "storageLocation",
    "manufacturingDate",
    "expirationDate",
];

#[derive(
    Debug,
    Display,
    From,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct FoodId(u64);

impl FoodId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The following id, or `None` once `u64::MAX` is taken.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    pub id: FoodId,
    pub name: String,
    pub category: FoodCategory,
    #[serde(rename = "storage", alias = "storageLocation")]
    pub storage_location: StorageLocation,
    pub manufacturing_date: NaiveDate,
    pub expiration_date: NaiveDate,
}

impl FoodRecord {
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        expiration::days_remaining(self.expiration_date, today)
    }

    pub fn status(&self, today: NaiveDate) -> ExpirationStatus {
        expiration::status_of(self.days_remaining(today))
    }

    fn apply(&mut self, draft: FoodDraft) {
        self.name = draft.name;
        self.category = draft.category;
        self.storage_location = draft.storage_location;
        self.manufacturing_date = draft.manufacturing_date;
        self.expiration_date = draft.expiration_date;
    }
}

/// A food form submission, exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodInput {
    #[validate(length(min = 1, code = "name"))]
    pub name: String,
    #[validate(length(min = 1, code = "category"))]
    pub category: String,
    #[serde(alias = "storage")]
    #[validate(length(min = 1, code = "storageLocation"))]
    pub storage_location: String,
    #[validate(length(min = 1, code = "manufacturingDate"))]
    pub manufacturing_date: String,
    #[validate(length(min = 1, code = "expirationDate"))]
    pub expiration_date: String,
}

impl FoodInput {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        storage_location: impl Into<String>,
        manufacturing_date: impl Into<String>,
        expiration_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            storage_location: storage_location.into(),
            manufacturing_date: manufacturing_date.into(),
            expiration_date: expiration_date.into(),
        }
    }

    /// Checks every field and turns the submission into a typed draft.
    pub fn validate_into_draft(&self) -> Result<FoodDraft, ValidationError> {
        if let Err(errors) = self.validate() {
            let field_errors = errors.field_errors();
            let missing = INPUT_FIELDS
                .into_iter()
                .find(|field| {
                    field_errors
                        .values()
                        .flat_map(|errs| errs.iter())
                        .any(|err| err.code == *field)
                })
                .unwrap_or(INPUT_FIELDS[0]);
            return Err(ValidationError::MissingField(missing));
        }

        let category = self.category.parse::<FoodCategory>()?;
        let storage_location = self.storage_location.parse::<StorageLocation>()?;
        let manufacturing_date = parse_date("manufacturingDate", &self.manufacturing_date)?;
        let expiration_date = parse_date("expirationDate", &self.expiration_date)?;

        if expiration_date <= manufacturing_date {
            return Err(ValidationError::InvalidDateRange {
                manufacturing: manufacturing_date,
                expiration: expiration_date,
            });
        }

        Ok(FoodDraft {
            name: self.name.clone(),
            category,
            storage_location,
            manufacturing_date,
            expiration_date,
        })
    }
}

impl From<&FoodRecord> for FoodInput {
    fn from(food: &FoodRecord) -> Self {
        Self {
            name: food.name.clone(),
            category: food.category.slug().to_string(),
            storage_location: food.storage_location.slug().to_string(),
            manufacturing_date: food.manufacturing_date.format(DATE_FORMAT).to_string(),
            expiration_date: food.expiration_date.format(DATE_FORMAT).to_string(),
        }
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// A validated submission that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodDraft {
    pub name: String,
    pub category: FoodCategory,
    pub storage_location: StorageLocation,
    pub manufacturing_date: NaiveDate,
    pub expiration_date: NaiveDate,
}

impl FoodDraft {
    pub fn into_record(self, id: FoodId) -> FoodRecord {
        FoodRecord {
            id,
            name: self.name,
            category: self.category,
            storage_location: self.storage_location,
            manufacturing_date: self.manufacturing_date,
            expiration_date: self.expiration_date,
        }
    }

    pub(crate) fn apply_to(self, food: &mut FoodRecord) {
        food.apply(self);
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates must be valid calendar dates")
}

/// The records installed when the store holds no food list yet.
pub fn seed_records() -> Vec<FoodRecord> {
    vec![
        FoodRecord {
            id: FoodId::new(1),
            name: String::from("Leite"),
            category: FoodCategory::Dairy,
            storage_location: StorageLocation::Refrigerator,
            manufacturing_date: seed_date(2024, 11, 10),
            expiration_date: seed_date(2024, 11, 20),
        },
        FoodRecord {
            id: FoodId::new(2),
            name: String::from("Pão de Forma"),
            category: FoodCategory::Pasta,
            storage_location: StorageLocation::Pantry,
            manufacturing_date: seed_date(2024, 11, 15),
            expiration_date: seed_date(2024, 11, 25),
        },
    ]
}
