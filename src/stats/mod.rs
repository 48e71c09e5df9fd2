pub mod aggregation;
pub mod table;

pub use aggregation::{aggregate, is_numeric};
pub use table::{format_stat, LookupError, StatsTable};
