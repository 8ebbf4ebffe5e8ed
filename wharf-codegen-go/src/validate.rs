//! Coverage validation: documented methods against the signature table.

use wharf_api::{Api, SignatureTable};

use crate::config::Config;
use crate::naming::go_member_name;

/// Result of a coverage pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    /// `Class.Method` signatures documented but not declared.
    pub missing: Vec<String>,
    /// Number of signatures checked.
    pub expected: usize,
}

impl Coverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Diff the description's expected method surface against the table.
///
/// Expected signatures are the description's methods, minus ignored
/// classes, minus members restricted to another language, minus the
/// allow-list; the name compared is the transformed target-facing one.
pub fn validate(config: &Config, api: &Api, table: &SignatureTable) -> Coverage {
    let mut missing = Vec::new();
    let mut expected = 0;
    for class in &api.classes {
        if !config.should_validate(&class.name) {
            continue;
        }
        for member in class.methods() {
            if !member.langs.applies_to(&config.target) {
                continue;
            }
            let go_name = go_member_name(member.name_for(&config.target));
            let signature = format!("{}.{}", class.name, go_name);
            if config.allowed_missing.contains(&signature) {
                continue;
            }
            expected += 1;
            if !table.contains(&class.name, &go_name) {
                missing.push(signature);
            }
        }
    }
    Coverage { missing, expected }
}
