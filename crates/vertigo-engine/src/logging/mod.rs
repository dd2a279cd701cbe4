//! Logger setup. The rest of the crate only uses the `log` macros.

mod init;

pub use init::{LoggingConfig, init_logging};
