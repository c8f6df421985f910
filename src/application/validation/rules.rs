// src/application/validation/rules.rs
//! Declarative field rules.
//!
//! ```ignore
//! let rules = RuleSet::<CreateAddressCommand>::builder()
//!     .rule_for("Street", |c| c.street.as_str())
//!     .not_empty("Street is required")
//!     .max_length(200, "Street must not exceed 200 characters")
//!     .build();
//! ```

use super::{ValidationIssue, Validator};
use async_trait::async_trait;
use regex::Regex;

type Accessor<R> = Box<dyn Fn(&R) -> &str + Send + Sync>;
type Guard<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

enum Check {
    NotEmpty,
    MaxLength(usize),
    Matches(Regex),
}

impl Check {
    fn passes(&self, value: &str) -> bool {
        match self {
            Self::NotEmpty => !value.trim().is_empty(),
            Self::MaxLength(max) => value.chars().count() <= *max,
            Self::Matches(pattern) => pattern.is_match(value),
        }
    }
}

struct Rule<R> {
    check: Check,
    message: String,
    guard: Option<Guard<R>>,
}

struct FieldRules<R> {
    field: &'static str,
    accessor: Accessor<R>,
    rules: Vec<Rule<R>>,
}

impl<R> FieldRules<R> {
    fn evaluate(&self, request: &R, issues: &mut Vec<ValidationIssue>) {
        let value = (self.accessor)(request);
        for rule in &self.rules {
            if rule.guard.as_ref().is_some_and(|guard| !guard(request)) {
                continue;
            }
            if !rule.check.passes(value) {
                issues.push(ValidationIssue::for_field(self.field, rule.message.clone()));
            }
        }
    }
}

/// Field rules for `R`. Every rule of every field is evaluated and issues
/// are reported in definition order.
pub struct RuleSet<R> {
    fields: Vec<FieldRules<R>>,
}

impl<R: 'static> RuleSet<R> {
    pub const fn builder() -> RuleSetBuilder<R> {
        RuleSetBuilder { fields: Vec::new() }
    }

    pub fn check(&self, request: &R) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for field in &self.fields {
            field.evaluate(request, &mut issues);
        }
        issues
    }
}

#[async_trait]
impl<R: Send + Sync + 'static> Validator<R> for RuleSet<R> {
    async fn validate(&self, request: &R) -> Vec<ValidationIssue> {
        self.check(request)
    }
}

pub struct RuleSetBuilder<R> {
    fields: Vec<FieldRules<R>>,
}

impl<R: 'static> RuleSetBuilder<R> {
    pub fn rule_for<F>(self, field: &'static str, accessor: F) -> FieldRuleBuilder<R>
    where
        F: Fn(&R) -> &str + Send + Sync + 'static,
    {
        FieldRuleBuilder {
            parent: self,
            current: FieldRules {
                field,
                accessor: Box::new(accessor),
                rules: Vec::new(),
            },
        }
    }

    pub fn build(self) -> RuleSet<R> {
        RuleSet {
            fields: self.fields,
        }
    }
}

/// Rules for the field named in the last `rule_for` call.
pub struct FieldRuleBuilder<R> {
    parent: RuleSetBuilder<R>,
    current: FieldRules<R>,
}

impl<R: 'static> FieldRuleBuilder<R> {
    /// Fails on empty or whitespace-only values.
    #[must_use]
    pub fn not_empty(self, message: impl Into<String>) -> Self {
        self.push(Check::NotEmpty, message)
    }

    /// Fails when the value has more than `max` characters.
    #[must_use]
    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.push(Check::MaxLength(max), message)
    }

    #[must_use]
    pub fn matches(self, pattern: Regex, message: impl Into<String>) -> Self {
        self.push(Check::Matches(pattern), message)
    }

    /// Applies the preceding rule only when `predicate` holds.
    #[must_use]
    pub fn when<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&R) -> bool + Send + Sync + 'static,
    {
        if let Some(rule) = self.current.rules.last_mut() {
            rule.guard = Some(Box::new(predicate));
        }
        self
    }

    pub fn rule_for<F>(self, field: &'static str, accessor: F) -> Self
    where
        F: Fn(&R) -> &str + Send + Sync + 'static,
    {
        self.finish().rule_for(field, accessor)
    }

    pub fn build(self) -> RuleSet<R> {
        self.finish().build()
    }

    fn push(mut self, check: Check, message: impl Into<String>) -> Self {
        self.current.rules.push(Rule {
            check,
            message: message.into(),
            guard: None,
        });
        self
    }

    fn finish(self) -> RuleSetBuilder<R> {
        let Self {
            mut parent,
            current,
        } = self;
        parent.fields.push(current);
        parent
    }
}
