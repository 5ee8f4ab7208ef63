use serde::{Deserialize, Serialize};

use crate::common::CommonProperties;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMode {
    #[default]
    Persistent,
    NonPersistent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProducerProperties {
    #[serde(flatten)]
    pub common: CommonProperties,

    pub delivery_mode: DeliveryMode,

    pub routing_key_expression: Option<String>,

    /// Groups whose queues are provisioned with the exchange, so messages
    /// are kept even before any consumer of that group shows up.
    pub required_groups: Vec<String>,
}
