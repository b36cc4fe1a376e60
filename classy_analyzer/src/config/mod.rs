//! Configuration for the classy analyzer
//!
//! Fixed resource limits live in [`constants`]; user preferences that may be
//! set from the environment or a TOML document live in [`runtime`].

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{
    AnalysisPreferences, ConfigError, LexicalPreferences, LoggingPreferences, RuntimeConfig,
};
