//! Engine configuration.
//!
//! The defaults mirror the fixed model setup the tool has always used; a
//! JSON file, environment variables and CLI flags can override them.

mod settings;

pub use settings::{
    BackendKind, ConfigError, ConfigOverrides, DEFAULT_MODEL_NAME, DEFAULT_SERVER_URL,
    EngineConfig,
};
