pub mod config;
pub mod domain;
pub mod error;
pub mod report;
pub mod setup;
pub mod solver;

pub use domain::types::{DistrictStaffing, FleetReport, Parameters};
pub use error::{FleetError, FleetResult};
