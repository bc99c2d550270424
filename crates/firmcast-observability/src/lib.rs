//! Firmcast Observability
//!
//! Logging setup shared by the CLI and any future service front-end.

mod logging;

pub use logging::{init_default_logging, init_logging, LogFormat};
