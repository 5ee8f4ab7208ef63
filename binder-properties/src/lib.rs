pub mod common;
pub mod consumer;
pub mod producer;
pub mod errors;
pub mod validation;

// Public re-exports for easy access
pub use common::{exchange_types, CommonProperties, DEAD_LETTER_EXCHANGE};
pub use consumer::ConsumerProperties;
pub use producer::{DeliveryMode, ProducerProperties};
pub use errors::PropertiesError;
pub use validation::{Validate, PRIORITY_RANGE};
