pub mod display;
pub mod error;
pub mod expiration;
pub mod models;
pub mod registry;
pub mod store;

use chrono::{Local, NaiveDate};

pub use error::{RegistryError, StoreError, ValidationError};
pub use expiration::{ExpirationStatus, days_remaining, status_of};
pub use models::categories::FoodCategory;
pub use models::foods::{FoodDraft, FoodId, FoodInput, FoodRecord, seed_records};
pub use models::storage_locations::StorageLocation;
pub use registry::{FoodRegistry, LoadOutcome, SharedFoodRegistry};
pub use store::{MemoryStore, PersistentStore};

/// Key the food list is stored under.
pub const STORAGE_KEY: &str = "@foods_database";

/// Today's date on the local clock, for feeding [`days_remaining`].
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
