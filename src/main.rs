use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use binder_properties::Validate;
use binder_provisioner::{binder_config, BinderConfig, BindingPlan, BINDER_CONFIG};

use crate::params::{Command, Params};

mod params;

fn main() -> Result<()> {
    let params = Params::parse();

    tracing_subscriber::fmt()
        .with_max_level(params.log_level)
        .with_target(false)
        .compact()
        .init();

    let cfg = BinderConfig::load_or_default(params.config.as_ref())
        .with_context(|| format!("loading binder config {:?}", params.config))?;
    BINDER_CONFIG
        .set(cfg)
        .map_err(|_| anyhow::anyhow!("binder config already initialised"))?;

    match params.command {
        Command::Check => check(),
        Command::Plan { binding } => plan(binding.as_deref()),
    }
}

fn check() -> Result<()> {
    let cfg = binder_config();
    for (name, binding) in &cfg.bindings {
        let roles = [
            binding.consumer.as_ref().map(|c| (c.validate(), "consumer")),
            binding.producer.as_ref().map(|p| (p.validate(), "producer")),
        ];
        for (result, role) in roles.into_iter().flatten() {
            result.with_context(|| format!("binding '{name}' ({role})"))?;
            info!(binding = %name, role, destination = %binding.destination, "ok");
        }
    }
    println!("{} binding(s) valid", cfg.bindings.len());
    Ok(())
}

fn plan(only: Option<&str>) -> Result<()> {
    let cfg = binder_config();
    let plans: Vec<BindingPlan> = match only {
        Some(name) => cfg
            .bindings
            .get(name)
            .with_context(|| format!("no binding named '{name}'"))?
            .plan(name),
        None => cfg.plan(),
    };
    let json = serde_json::to_string_pretty(&plans).context("serialising plans")?;
    println!("{json}");
    Ok(())
}
