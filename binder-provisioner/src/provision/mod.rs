//! Declarations a provisioner issues for a binding, computed from its
//! properties. Nothing here talks to a broker.

pub mod arguments;
pub mod naming;
mod plan;

pub use arguments::Arguments;
pub use plan::{
    plan_consumer, plan_producer, BindingDeclaration, ConsumerRequest, ExchangeDeclaration,
    ProducerRequest, ProvisionPlan, QueueDeclaration,
};
