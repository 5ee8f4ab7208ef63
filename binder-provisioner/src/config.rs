use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use binder_properties::{ConsumerProperties, ProducerProperties, Validate};

use crate::error::LoadError;
use crate::provision::{plan_consumer, plan_producer, ConsumerRequest, ProducerRequest, ProvisionPlan};

/// Every binding the process provisions, keyed by binding name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    pub bindings: BTreeMap<String, BindingConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingConfig {
    /// Exchange the binding publishes to or consumes from (before prefixing).
    pub destination: String,

    /// Consumer group. `None` = anonymous, auto-deleted queue.
    pub group: Option<String>,

    /// Set for partitioned consumers.
    pub instance_index: Option<u32>,

    pub consumer: Option<ConsumerProperties>,

    pub producer: Option<ProducerProperties>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Consumer,
    Producer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingPlan {
    pub binding: String,
    pub role: Role,
    pub plan: ProvisionPlan,
}

impl BinderConfig {

    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self, LoadError> {
        match path {
            Some(p) => Self::read_from_file(p),
            None => Ok(Self::default()),
        }
    }

    fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let raw = fs::read_to_string(&path).map_err(|source| LoadError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml_str(&raw)?;
        info!(path = ?path.as_ref(), bindings = cfg.bindings.len(), "loaded binder config");
        Ok(cfg)
    }

    /// Parses and validates; a config that comes back is safe to provision from.
    pub fn from_toml_str(raw: &str) -> Result<Self, LoadError> {
        let cfg: BinderConfig = toml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), LoadError> {
        for (name, binding) in &self.bindings {
            binding.validate().map_err(|source| LoadError::Invalid {
                binding: name.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Declarations for every binding, in binding name order. A binding with
    /// both roles yields its consumer plan first.
    pub fn plan(&self) -> Vec<BindingPlan> {
        self.bindings
            .iter()
            .flat_map(|(name, binding)| binding.plan(name))
            .collect()
    }
}

impl BindingConfig {
    fn validate(&self) -> Result<(), binder_properties::PropertiesError> {
        if let Some(consumer) = &self.consumer {
            consumer.validate()?;
        }
        if let Some(producer) = &self.producer {
            producer.validate()?;
        }
        Ok(())
    }

    pub fn plan(&self, name: &str) -> Vec<BindingPlan> {
        let mut plans = Vec::new();

        if let Some(consumer) = &self.consumer {
            let request = ConsumerRequest {
                destination: &self.destination,
                group: self.group.as_deref(),
                instance_index: self.instance_index,
            };
            plans.push(BindingPlan {
                binding: name.to_string(),
                role: Role::Consumer,
                plan: plan_consumer(&request, consumer),
            });
        }

        if let Some(producer) = &self.producer {
            let request = ProducerRequest {
                destination: &self.destination,
            };
            plans.push(BindingPlan {
                binding: name.to_string(),
                role: Role::Producer,
                plan: plan_producer(&request, producer),
            });
        }

        if plans.is_empty() {
            warn!(binding = name, "binding has neither consumer nor producer properties, nothing to provision");
        }

        plans
    }
}
