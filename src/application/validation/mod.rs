// src/application/validation/mod.rs
mod behavior;
mod rules;

pub use behavior::{VALIDATION_FAILED, ValidationBehavior};
pub use rules::{FieldRuleBuilder, RuleSet, RuleSetBuilder};

use async_trait::async_trait;
use std::fmt;

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: Option<String>,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    pub fn for_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Inspects a request and reports every rule it violates.
///
/// Validators for the same request run concurrently against a shared
/// borrow of the request and must not depend on each other.
#[async_trait]
pub trait Validator<R: Send + Sync>: Send + Sync {
    async fn validate(&self, request: &R) -> Vec<ValidationIssue>;
}
