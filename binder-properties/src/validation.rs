use std::ops::RangeInclusive;

use crate::common::CommonProperties;
use crate::consumer::ConsumerProperties;
use crate::errors::PropertiesError;
use crate::producer::ProducerProperties;

/// Priorities the broker accepts for `x-max-priority`.
pub const PRIORITY_RANGE: RangeInclusive<i32> = 0..=255;

/// Check run while binding configuration, before anything reads the values.
pub trait Validate {
    fn validate(&self) -> Result<(), PropertiesError>;
}

fn check_priority(field: &'static str, value: Option<i32>) -> Result<(), PropertiesError> {
    match value {
        Some(v) if !PRIORITY_RANGE.contains(&v) => Err(PropertiesError::RangeViolation {
            field,
            value: v.into(),
            min: (*PRIORITY_RANGE.start()).into(),
            max: (*PRIORITY_RANGE.end()).into(),
        }),
        _ => Ok(()),
    }
}

impl Validate for CommonProperties {
    fn validate(&self) -> Result<(), PropertiesError> {
        check_priority("maxPriority", self.max_priority)?;
        check_priority("dlqMaxPriority", self.dlq_max_priority)
    }
}

impl Validate for ConsumerProperties {
    fn validate(&self) -> Result<(), PropertiesError> {
        self.common.validate()
    }
}

impl Validate for ProducerProperties {
    fn validate(&self) -> Result<(), PropertiesError> {
        self.common.validate()
    }
}
