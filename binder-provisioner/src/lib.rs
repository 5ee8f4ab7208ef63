pub mod provision;
mod config;
mod error;

use std::sync::OnceLock;

pub use config::{BinderConfig, BindingConfig, BindingPlan, Role};
pub use error::LoadError;

/// Set by `main()` once after loading; read-only from then on.
pub static BINDER_CONFIG: OnceLock<BinderConfig> = OnceLock::new();

/// Convenience accessor for the process-wide binder configuration.
pub fn binder_config() -> &'static BinderConfig {
    BINDER_CONFIG.get_or_init(BinderConfig::default)
}
