//! Command implementations.

pub mod estimate;
pub mod table;

pub use self::estimate::{execute_estimate, run_estimate, saturation_warning};
pub use self::table::execute_table;
