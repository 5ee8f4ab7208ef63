use std::collections::BTreeMap;
use serde_json::Value;
use binder_properties::CommonProperties;

use crate::provision::naming;

/// `x-*` arguments attached to a declaration.
pub type Arguments = BTreeMap<String, Value>;

pub const DEAD_LETTER_EXCHANGE: &str = "x-dead-letter-exchange";
pub const DEAD_LETTER_ROUTING_KEY: &str = "x-dead-letter-routing-key";
pub const EXPIRES: &str = "x-expires";
pub const MAX_LENGTH: &str = "x-max-length";
pub const MAX_LENGTH_BYTES: &str = "x-max-length-bytes";
pub const MAX_PRIORITY: &str = "x-max-priority";
pub const MESSAGE_TTL: &str = "x-message-ttl";
pub const QUEUE_MODE: &str = "x-queue-mode";
pub const DELAYED_TYPE: &str = "x-delayed-type";

pub const DELAYED_EXCHANGE_TYPE: &str = "x-delayed-message";
pub const LAZY: &str = "lazy";

/// Limits shared by the primary queue and its DLQ.
struct Limits {
    expires: Option<u32>,
    max_length: Option<u32>,
    max_length_bytes: Option<u32>,
    max_priority: Option<i32>,
    ttl: Option<u32>,
    lazy: bool,
}

fn insert_limits(args: &mut Arguments, limits: Limits) {
    if let Some(v) = limits.expires {
        args.insert(EXPIRES.into(), v.into());
    }
    if let Some(v) = limits.max_length {
        args.insert(MAX_LENGTH.into(), v.into());
    }
    if let Some(v) = limits.max_length_bytes {
        args.insert(MAX_LENGTH_BYTES.into(), v.into());
    }
    if let Some(v) = limits.max_priority {
        args.insert(MAX_PRIORITY.into(), v.into());
    }
    if let Some(v) = limits.ttl {
        args.insert(MESSAGE_TTL.into(), v.into());
    }
    if limits.lazy {
        args.insert(QUEUE_MODE.into(), LAZY.into());
    }
}

/// Arguments for the primary queue named `queue` (already prefixed).
pub fn queue_arguments(props: &CommonProperties, queue: &str) -> Arguments {
    let mut args = Arguments::new();

    if props.auto_bind_dlq {
        args.insert(DEAD_LETTER_EXCHANGE.into(), naming::dlx_name(props).into());
        args.insert(
            DEAD_LETTER_ROUTING_KEY.into(),
            naming::dead_letter_routing_key(props, queue).into(),
        );
    } else if let Some(dlx) = &props.dead_letter_exchange {
        args.insert(DEAD_LETTER_EXCHANGE.into(), dlx.as_str().into());
        if let Some(key) = &props.dead_letter_routing_key {
            args.insert(DEAD_LETTER_ROUTING_KEY.into(), key.as_str().into());
        }
    }

    insert_limits(
        &mut args,
        Limits {
            expires: props.expires,
            max_length: props.max_length,
            max_length_bytes: props.max_length_bytes,
            max_priority: props.max_priority,
            ttl: props.ttl,
            lazy: props.lazy,
        },
    );
    args
}

pub fn dlq_arguments(props: &CommonProperties) -> Arguments {
    let mut args = Arguments::new();

    if let Some(dlx) = &props.dlq_dead_letter_exchange {
        args.insert(DEAD_LETTER_EXCHANGE.into(), dlx.as_str().into());
        if let Some(key) = &props.dlq_dead_letter_routing_key {
            args.insert(DEAD_LETTER_ROUTING_KEY.into(), key.as_str().into());
        }
    }

    insert_limits(
        &mut args,
        Limits {
            expires: props.dlq_expires,
            max_length: props.dlq_max_length,
            max_length_bytes: props.dlq_max_length_bytes,
            max_priority: props.dlq_max_priority,
            ttl: props.dlq_ttl,
            lazy: props.dlq_lazy,
        },
    );
    args
}

pub fn exchange_arguments(props: &CommonProperties) -> Arguments {
    let mut args = Arguments::new();
    if props.delayed_exchange {
        args.insert(DELAYED_TYPE.into(), props.exchange_type.as_str().into());
    }
    args
}
