use std::path::PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rabbit-binder")]
pub struct Params {
    /// Binder config (TOML). Without it no bindings are configured.
    #[arg(long, env = "RABBIT_BINDER_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "RABBIT_BINDER_LOG", default_value_t = tracing::Level::INFO)]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the config and list its bindings.
    Check,

    /// Print the declarations each binding needs, as JSON.
    Plan {
        #[arg(long)]
        binding: Option<String>,
    },
}
