use serde::Serialize;
use tracing::debug;
use binder_properties::{exchange_types, CommonProperties, ConsumerProperties, ProducerProperties};

use crate::provision::arguments::{self, Arguments};
use crate::provision::naming;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub durable: bool,
    pub auto_delete: bool,
    pub arguments: Arguments,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueDeclaration {
    pub name: String,
    pub durable: bool,
    pub exclusive: bool,
    pub auto_delete: bool,
    pub arguments: Arguments,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingDeclaration {
    pub exchange: String,
    pub queue: String,
    pub routing_key: String,
}

/// Declarations in the order a provisioner should issue them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProvisionPlan {
    pub exchanges: Vec<ExchangeDeclaration>,
    pub queues: Vec<QueueDeclaration>,
    pub bindings: Vec<BindingDeclaration>,
}

#[derive(Debug, Clone, Copy)]
pub struct ConsumerRequest<'a> {
    pub destination: &'a str,
    pub group: Option<&'a str>,
    pub instance_index: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
pub struct ProducerRequest<'a> {
    pub destination: &'a str,
}

impl ProvisionPlan {
    pub fn exchange(&self, name: &str) -> Option<&ExchangeDeclaration> {
        self.exchanges.iter().find(|e| e.name == name)
    }

    pub fn queue(&self, name: &str) -> Option<&QueueDeclaration> {
        self.queues.iter().find(|q| q.name == name)
    }

    pub fn bindings_to<'a>(&'a self, queue: &'a str) -> impl Iterator<Item = &'a BindingDeclaration> + 'a {
        self.bindings.iter().filter(move |b| b.queue == queue)
    }

    fn add_exchange(&mut self, exchange: ExchangeDeclaration) {
        // producers with several required groups share one DLX
        if self.exchange(&exchange.name).is_some() {
            return;
        }
        debug!(name = %exchange.name, kind = %exchange.kind, "planned exchange");
        self.exchanges.push(exchange);
    }

    fn add_queue(&mut self, queue: QueueDeclaration) {
        debug!(name = %queue.name, durable = queue.durable, args = queue.arguments.len(), "planned queue");
        self.queues.push(queue);
    }

    fn add_binding(&mut self, exchange: &str, queue: &str, routing_key: String) {
        debug!(exchange, queue, routing_key = %routing_key, "planned binding");
        self.bindings.push(BindingDeclaration {
            exchange: exchange.to_string(),
            queue: queue.to_string(),
            routing_key,
        });
    }

    fn declare_destination_exchange(&mut self, props: &CommonProperties, name: &str) {
        if !props.declare_exchange {
            debug!(name, "exchange declaration disabled");
            return;
        }
        let kind = if props.delayed_exchange {
            arguments::DELAYED_EXCHANGE_TYPE.to_string()
        } else {
            props.exchange_type.clone()
        };
        self.add_exchange(ExchangeDeclaration {
            name: name.to_string(),
            kind,
            durable: props.exchange_durable,
            auto_delete: props.exchange_auto_delete,
            arguments: arguments::exchange_arguments(props),
        });
    }

    /// Declares `queue`, binds it to `exchange` and, with `auto_bind_dlq`,
    /// provisions the DLX and DLQ behind it.
    fn provision_queue(
        &mut self,
        props: &CommonProperties,
        exchange: &str,
        queue: QueueDeclaration,
        destination: &str,
        instance_index: Option<u32>,
    ) {
        let queue_name = queue.name.clone();
        self.add_queue(queue);

        if props.bind_queue {
            let key = naming::binding_routing_key(props, destination, instance_index);
            self.add_binding(exchange, &queue_name, key);
        }

        if props.auto_bind_dlq {
            let dlx = naming::dlx_name(props);
            let dlq = naming::dlq_name(props, &queue_name);

            self.add_exchange(ExchangeDeclaration {
                name: dlx.clone(),
                kind: exchange_types::DIRECT.to_string(),
                durable: true,
                auto_delete: false,
                arguments: Arguments::new(),
            });
            self.add_queue(QueueDeclaration {
                name: dlq.clone(),
                durable: true,
                exclusive: false,
                auto_delete: false,
                arguments: arguments::dlq_arguments(props),
            });
            self.add_binding(&dlx, &dlq, naming::dead_letter_routing_key(props, &queue_name));
        }
    }
}

pub fn plan_consumer(request: &ConsumerRequest<'_>, props: &ConsumerProperties) -> ProvisionPlan {
    let common = &props.common;
    let mut plan = ProvisionPlan::default();

    let exchange = naming::exchange_name(common, request.destination);
    plan.declare_destination_exchange(common, &exchange);

    let queue = match request.group {
        Some(group) => {
            let name = naming::grouped_queue_name(common, request.destination, group, request.instance_index);
            QueueDeclaration {
                arguments: arguments::queue_arguments(common, &name),
                name,
                durable: props.durable_subscription,
                exclusive: props.exclusive,
                auto_delete: false,
            }
        }
        None => {
            let name = naming::anonymous_queue_name(common, request.destination);
            QueueDeclaration {
                arguments: arguments::queue_arguments(common, &name),
                name,
                durable: false,
                exclusive: true,
                auto_delete: true,
            }
        }
    };

    plan.provision_queue(common, &exchange, queue, request.destination, request.instance_index);
    plan
}

pub fn plan_producer(request: &ProducerRequest<'_>, props: &ProducerProperties) -> ProvisionPlan {
    let common = &props.common;
    let mut plan = ProvisionPlan::default();

    let exchange = naming::exchange_name(common, request.destination);
    plan.declare_destination_exchange(common, &exchange);

    for group in &props.required_groups {
        let name = naming::grouped_queue_name(common, request.destination, group, None);
        let queue = QueueDeclaration {
            arguments: arguments::queue_arguments(common, &name),
            name,
            durable: true,
            exclusive: false,
            auto_delete: false,
        };
        plan.provision_queue(common, &exchange, queue, request.destination, None);
    }

    plan
}
