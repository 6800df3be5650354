pub mod categories;
pub mod foods;
pub mod storage_locations;
