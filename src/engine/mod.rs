pub mod analyzer;
pub mod sort;

pub use analyzer::{Analysis, Analyzer};
pub use sort::{SortDirection, SortKey, SortSpec, sorted_view};
