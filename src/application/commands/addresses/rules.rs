// src/application/commands/addresses/rules.rs
use crate::application::validation::{FieldRuleBuilder, RuleSet};
use regex::Regex;
use std::sync::LazyLock;

static ZIP_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{5}(-\d{4})?$").unwrap_or_else(|err| unreachable!("zip code pattern: {err}"))
});

/// Field accessors shared by the create and update commands.
pub(super) trait AddressFields: Send + Sync + 'static {
    fn street(&self) -> &str;
    fn city(&self) -> &str;
    fn state(&self) -> &str;
    fn zip_code(&self) -> &str;
    fn country(&self) -> &str;
}

/// The structural rules every address payload must satisfy.
pub(super) fn address_rules<R: AddressFields>() -> RuleSet<R> {
    let rules = RuleSet::builder()
        .rule_for("Street", R::street)
        .not_empty("Street is required")
        .max_length(200, "Street must not exceed 200 characters")
        .rule_for("City", R::city)
        .not_empty("City is required")
        .max_length(100, "City must not exceed 100 characters")
        .rule_for("State", R::state)
        .not_empty("State is required")
        .max_length(50, "State must not exceed 50 characters");

    zip_code_rules(rules)
        .rule_for("Country", R::country)
        .not_empty("Country is required")
        .max_length(100, "Country must not exceed 100 characters")
        .build()
}

fn zip_code_rules<R: AddressFields>(rules: FieldRuleBuilder<R>) -> FieldRuleBuilder<R> {
    rules
        .rule_for("ZipCode", R::zip_code)
        .not_empty("Zip code is required")
        .max_length(20, "Zip code must not exceed 20 characters")
        .matches(
            ZIP_CODE.clone(),
            "Zip code must be in format 12345 or 12345-6789",
        )
        .when(|request: &R| !request.zip_code().trim().is_empty())
}
