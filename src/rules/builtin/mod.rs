mod code_execution;
mod connection_string;
mod default_credentials;
mod deserialization;
mod injection;
mod insecure_random;
mod secrets;
mod weak_crypto;
mod web;

use super::Rule;

/// All built-in detection rules, in stable registration order.
pub fn all_rules() -> Vec<Rule> {
    let mut rules = Vec::new();
    rules.extend(code_execution::rules());
    rules.extend(secrets::rules());
    rules.extend(injection::rules());
    rules.extend(deserialization::rules());
    rules.extend(weak_crypto::rules());
    rules.extend(insecure_random::rules());
    rules.extend(default_credentials::rules());
    rules.extend(connection_string::rules());
    rules.extend(web::rules());
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rule_ids_are_unique() {
        let rules = all_rules();
        let ids: HashSet<&str> = rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), rules.len());
    }

    #[test]
    fn every_rule_has_description_and_name() {
        for rule in all_rules() {
            assert!(!rule.description.is_empty(), "{} lacks description", rule.id);
            assert!(!rule.name.is_empty(), "{} lacks name", rule.id);
        }
    }
}
