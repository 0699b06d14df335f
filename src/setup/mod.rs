pub mod init;
pub mod init_types;
pub mod validate;

pub use init::*;
pub use validate::*;
