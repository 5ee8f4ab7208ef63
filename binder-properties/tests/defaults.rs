use binder_properties::{
    exchange_types, CommonProperties, ConsumerProperties, DeliveryMode, ProducerProperties,
    DEAD_LETTER_EXCHANGE,
};

#[test]
fn default_common_properties_match_documented_defaults() {
    let props = CommonProperties::default();

    assert_eq!(props.exchange_type, "topic");
    assert_eq!(props.exchange_type, exchange_types::TOPIC);
    assert!(props.declare_exchange);
    assert!(props.exchange_durable);
    assert!(!props.exchange_auto_delete);
    assert!(!props.delayed_exchange);
    assert!(props.bind_queue);
    assert!(!props.auto_bind_dlq);
    assert_eq!(props.prefix, "");
    assert!(!props.lazy);
    assert!(!props.dlq_lazy);

    assert_eq!(props.binding_routing_key, None);
    assert_eq!(props.ttl, None);
    assert_eq!(props.expires, None);
    assert_eq!(props.max_length, None);
    assert_eq!(props.max_length_bytes, None);
    assert_eq!(props.max_priority, None);
    assert_eq!(props.dead_letter_queue_name, None);
    assert_eq!(props.dead_letter_exchange, None);
    assert_eq!(props.dead_letter_routing_key, None);
    assert_eq!(props.dlq_ttl, None);
    assert_eq!(props.dlq_expires, None);
    assert_eq!(props.dlq_max_length, None);
    assert_eq!(props.dlq_max_length_bytes, None);
    assert_eq!(props.dlq_max_priority, None);
    assert_eq!(props.dlq_dead_letter_exchange, None);
    assert_eq!(props.dlq_dead_letter_routing_key, None);
}

#[test]
fn dead_letter_exchange_suffix_is_dlx() {
    assert_eq!(DEAD_LETTER_EXCHANGE, "DLX");
}

#[test]
fn role_properties_embed_common_defaults() {
    let consumer = ConsumerProperties::default();
    assert_eq!(consumer.common, CommonProperties::default());
    assert!(consumer.durable_subscription);
    assert!(!consumer.exclusive);
    assert_eq!(consumer.prefetch, 1);
    assert!(!consumer.requeue_rejected);

    let producer = ProducerProperties::default();
    assert_eq!(producer.common, CommonProperties::default());
    assert_eq!(producer.delivery_mode, DeliveryMode::Persistent);
    assert!(producer.required_groups.is_empty());
}

#[test]
fn stored_values_read_back_verbatim() {
    let mut props = CommonProperties::default();

    props.exchange_type = "x-custom".to_string();
    props.binding_routing_key = Some("orders.*".to_string());
    props.ttl = Some(0);
    props.max_length_bytes = Some(u32::MAX);
    props.max_priority = Some(300);
    props.prefix = "dev.".to_string();
    props.dlq_lazy = true;

    assert_eq!(props.exchange_type, "x-custom");
    assert_eq!(props.binding_routing_key.as_deref(), Some("orders.*"));
    assert_eq!(props.ttl, Some(0));
    assert_eq!(props.max_length_bytes, Some(u32::MAX));
    // out of range values are kept; rejecting them is the validator's job
    assert_eq!(props.max_priority, Some(300));
    assert_eq!(props.prefix, "dev.");
    assert!(props.dlq_lazy);
}

#[test]
fn explicit_zero_is_not_unset() {
    let mut props = CommonProperties::default();
    props.expires = Some(0);

    assert_ne!(props.expires, None);
    assert_eq!(props.dlq_expires, None);
}

#[test]
fn mutating_one_field_leaves_the_rest_untouched() {
    let mut props = CommonProperties::default();
    props.dead_letter_exchange = Some("failures".to_string());

    let expected = CommonProperties {
        dead_letter_exchange: Some("failures".to_string()),
        ..CommonProperties::default()
    };
    assert_eq!(props, expected);

    props.auto_bind_dlq = true;
    assert_eq!(props.dead_letter_exchange.as_deref(), Some("failures"));
    assert!(props.declare_exchange);
}

#[test]
fn apply_prefix_prepends_verbatim() {
    let props = CommonProperties {
        prefix: "tenant-a.".to_string(),
        ..CommonProperties::default()
    };
    assert_eq!(props.apply_prefix("orders"), "tenant-a.orders");
    assert_eq!(CommonProperties::default().apply_prefix("orders"), "orders");
}

#[test]
fn consumer_properties_bind_from_camel_case_keys() {
    let raw = r#"
        exchangeType = "direct"
        autoBindDlq = true
        maxPriority = 10
        dlqTtl = 5000
        prefix = "dev."
        prefetch = 20
    "#;

    let consumer: ConsumerProperties = toml::from_str(raw).expect("valid consumer properties");

    assert_eq!(consumer.common.exchange_type, exchange_types::DIRECT);
    assert!(consumer.common.auto_bind_dlq);
    assert_eq!(consumer.common.max_priority, Some(10));
    assert_eq!(consumer.common.dlq_ttl, Some(5000));
    assert_eq!(consumer.common.prefix, "dev.");
    assert_eq!(consumer.prefetch, 20);
    // untouched keys keep their defaults
    assert!(consumer.common.declare_exchange);
    assert!(consumer.durable_subscription);
}

#[test]
fn producer_delivery_mode_binds_from_kebab_case() {
    let producer: ProducerProperties = toml::from_str(
        r#"
            deliveryMode = "non-persistent"
            requiredGroups = ["audit", "billing"]
        "#,
    )
    .expect("valid producer properties");

    assert_eq!(producer.delivery_mode, DeliveryMode::NonPersistent);
    assert_eq!(producer.required_groups, vec!["audit", "billing"]);
}
