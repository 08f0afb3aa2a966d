//! Roster configuration for restaurant payroll.
//!
//! The staff of each location is described in YAML. The default roster is
//! compiled into the crate so a run never reads files.
//!
//! # Example
//!
//! ```
//! use restaurant_payroll::config::RosterLoader;
//!
//! let loader = RosterLoader::builtin().unwrap();
//! println!("Locations: {}", loader.locations().len());
//! ```

mod loader;
mod types;

pub use loader::RosterLoader;
pub use types::{EmployeeEntry, LocationConfig, RosterConfig};
