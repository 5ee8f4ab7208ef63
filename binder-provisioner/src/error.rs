use std::io;
use std::path::PathBuf;
use thiserror::Error;
use binder_properties::PropertiesError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing binder config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("binding '{binding}' is invalid: {source}")]
    Invalid {
        binding: String,
        #[source]
        source: PropertiesError,
    },
}
