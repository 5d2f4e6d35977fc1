pub mod csv_sheet;
pub mod error;
pub mod memory_sheet;
pub mod store;
