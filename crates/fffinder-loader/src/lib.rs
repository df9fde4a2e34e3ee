pub mod client;
pub mod error;
pub mod normalize;
pub mod parse;

pub use client::{FacilityLoader, DATASET_PATH};
pub use error::LoadError;
pub use normalize::{normalize_row, parse_dataset};
pub use parse::{parse_rows, CellValue, RawRow};
