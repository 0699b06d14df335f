pub mod run;
pub mod staffing;

pub use run::*;
pub use staffing::*;
