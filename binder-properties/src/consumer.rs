use serde::{Deserialize, Serialize};

use crate::common::CommonProperties;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsumerProperties {
    #[serde(flatten)]
    pub common: CommonProperties,

    /// Grouped queues survive a broker restart.
    pub durable_subscription: bool,

    /// Only one consumer may attach to the queue.
    pub exclusive: bool,

    pub prefetch: u16,

    pub requeue_rejected: bool,
}

impl Default for ConsumerProperties {
    fn default() -> Self {
        Self {
            common: CommonProperties::default(),
            durable_subscription: true,
            exclusive: false,
            prefetch: 1,
            requeue_rejected: false,
        }
    }
}
