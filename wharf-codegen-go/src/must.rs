//! Panic-on-error convenience wrappers.
//!
//! Every declared member whose output carries an `error` gets a
//! `Must`-prefixed wrapper on the class implementation type that panics
//! instead of returning the error.

use wharf_api::{SignatureEntry, SignatureTable};

use crate::config::Config;

/// The must-wrapper file body for a signature table.
pub fn generate_must(config: &Config, table: &SignatureTable) -> String {
    let mut out = format!("package {}\n", config.package);
    for (class_name, members) in &table.classes {
        let receiver = format!("{}Impl", class_name.to_lowercase());
        for (member_name, entry) in members {
            let SignatureEntry::Signature { input, output } = entry else {
                continue;
            };
            let Some(output) = output.as_deref() else {
                continue;
            };
            if !output.contains("error") {
                continue;
            }
            let input = input.as_deref().unwrap_or("");
            out.push('\n');
            out.push_str(&wrapper(&receiver, member_name, input, output));
        }
    }
    out
}

fn wrapper(receiver: &str, name: &str, input: &str, output: &str) -> String {
    let args = call_args(input);
    let ret = output.replace(", error", "").replace("error", "");
    let ret = ret.trim();
    if ret.is_empty() {
        return format!(
            "func (t *{receiver}) Must{name}({input}) {{\n\
             \terr := t.{name}({args})\n\
             \tif err != nil {{\n\
             \t\tpanic(err)\n\
             \t}}\n\
             }}\n"
        );
    }
    format!(
        "func (t *{receiver}) Must{name}({input}) {ret} {{\n\
         \tresult, err := t.{name}({args})\n\
         \tif err != nil {{\n\
         \t\tpanic(err)\n\
         \t}}\n\
         \treturn result\n\
         }}\n"
    )
}

/// Forwarded call arguments: the first token of each parameter, with
/// variadics spread.
fn call_args(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = input
        .split(", ")
        .map(|p| p.split(' ').next().unwrap_or(""))
        .collect();
    let spread = if input.contains("...") { "..." } else { "" };
    format!("{}{}", names.join(", "), spread)
}
