use serde::{Deserialize, Serialize};

/// Suffix of the dead letter exchange provisioning falls back to (`prefix + "DLX"`).
pub const DEAD_LETTER_EXCHANGE: &str = "DLX";

/// Exchange types the broker ships with. `exchange_type` is free text, these are
/// only the names most configs use.
pub mod exchange_types {
    pub const DIRECT: &str = "direct";
    pub const TOPIC: &str = "topic";
    pub const FANOUT: &str = "fanout";
    pub const HEADERS: &str = "headers";
    pub const SYSTEM: &str = "system";
}

/// Exchange and queue settings shared by consumer and producer bindings.
/// Values are stored as given; range checks live in [`crate::Validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CommonProperties {
    /// Type of exchange to declare (when `declare_exchange` is set).
    pub exchange_type: String,

    pub declare_exchange: bool,

    pub exchange_durable: bool,

    pub exchange_auto_delete: bool,

    /// Declare the exchange as a delayed message exchange.
    pub delayed_exchange: bool,

    /// Bind the queue (or queues when partitioned) to the exchange.
    pub bind_queue: bool,

    /// Routing key to bind with. Unset means `#`, or `destination-index` when partitioned.
    pub binding_routing_key: Option<String>,

    /// Default time to live for messages in the queue (ms).
    pub ttl: Option<u32>,

    /// How long an unused queue lives before it is deleted (ms).
    pub expires: Option<u32>,

    /// Maximum number of messages in the queue.
    pub max_length: Option<u32>,

    /// Maximum total bytes of all messages in the queue.
    pub max_length_bytes: Option<u32>,

    /// Maximum message priority in the queue, 0-255.
    pub max_priority: Option<i32>,

    /// Name of the DLQ. Unset means `<queue>.dlq`.
    pub dead_letter_queue_name: Option<String>,

    /// DLX assigned to the queue. With `auto_bind_dlq` it falls back to `prefix + DLX`.
    pub dead_letter_exchange: Option<String>,

    /// Dead letter routing key of the queue. With `auto_bind_dlq` it falls back to the queue name.
    pub dead_letter_routing_key: Option<String>,

    pub dlq_ttl: Option<u32>,

    pub dlq_expires: Option<u32>,

    pub dlq_max_length: Option<u32>,

    pub dlq_max_length_bytes: Option<u32>,

    /// Maximum message priority in the DLQ, 0-255.
    pub dlq_max_priority: Option<i32>,

    /// DLX assigned to the DLQ itself. Unset means none.
    pub dlq_dead_letter_exchange: Option<String>,

    pub dlq_dead_letter_routing_key: Option<String>,

    /// Provision a DLQ and bind it to the DLX.
    pub auto_bind_dlq: bool,

    /// Prepended to every exchange and queue name.
    pub prefix: String,

    /// Provision the queue in lazy mode.
    pub lazy: bool,

    pub dlq_lazy: bool,
}

impl Default for CommonProperties {
    fn default() -> Self {
        Self {
            exchange_type: exchange_types::TOPIC.to_string(),
            declare_exchange: true,
            exchange_durable: true,
            exchange_auto_delete: false,
            delayed_exchange: false,
            bind_queue: true,
            binding_routing_key: None,
            ttl: None,
            expires: None,
            max_length: None,
            max_length_bytes: None,
            max_priority: None,
            dead_letter_queue_name: None,
            dead_letter_exchange: None,
            dead_letter_routing_key: None,
            dlq_ttl: None,
            dlq_expires: None,
            dlq_max_length: None,
            dlq_max_length_bytes: None,
            dlq_max_priority: None,
            dlq_dead_letter_exchange: None,
            dlq_dead_letter_routing_key: None,
            auto_bind_dlq: false,
            prefix: String::new(),
            lazy: false,
            dlq_lazy: false,
        }
    }
}

impl CommonProperties {
    /// `prefix + name`, the way every declared exchange and queue is named.
    pub fn apply_prefix(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}
