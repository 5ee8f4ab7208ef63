use binder_properties::{CommonProperties, DEAD_LETTER_EXCHANGE};
use uuid::Uuid;

pub const DLQ_SUFFIX: &str = ".dlq";
pub const ANONYMOUS_INFIX: &str = ".anonymous.";

/// Routing key that matches everything on a topic exchange.
pub const MATCH_ALL: &str = "#";

pub fn exchange_name(props: &CommonProperties, destination: &str) -> String {
    props.apply_prefix(destination)
}

/// `prefix + destination.group`, with `-index` appended for partitioned consumers.
pub fn grouped_queue_name(
    props: &CommonProperties,
    destination: &str,
    group: &str,
    instance_index: Option<u32>,
) -> String {
    let base = format!("{destination}.{group}");
    match instance_index {
        Some(index) => props.apply_prefix(&format!("{base}-{index}")),
        None => props.apply_prefix(&base),
    }
}

pub fn anonymous_queue_name(props: &CommonProperties, destination: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    props.apply_prefix(&format!("{destination}{ANONYMOUS_INFIX}{suffix}"))
}

/// `queue` is already prefixed, so the default DLQ name is not prefixed again.
pub fn dlq_name(props: &CommonProperties, queue: &str) -> String {
    props
        .dead_letter_queue_name
        .clone()
        .unwrap_or_else(|| format!("{queue}{DLQ_SUFFIX}"))
}

pub fn dlx_name(props: &CommonProperties) -> String {
    props
        .dead_letter_exchange
        .clone()
        .unwrap_or_else(|| props.apply_prefix(DEAD_LETTER_EXCHANGE))
}

pub fn dead_letter_routing_key(props: &CommonProperties, queue: &str) -> String {
    props
        .dead_letter_routing_key
        .clone()
        .unwrap_or_else(|| queue.to_string())
}

pub fn binding_routing_key(
    props: &CommonProperties,
    destination: &str,
    instance_index: Option<u32>,
) -> String {
    if let Some(key) = &props.binding_routing_key {
        return key.clone();
    }
    match instance_index {
        Some(index) => format!("{destination}-{index}"),
        None => MATCH_ALL.to_string(),
    }
}
