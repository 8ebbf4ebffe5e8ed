//! Interface emission from the signature table.
//!
//! The table drives everything: class order, member order, and the
//! declared signatures, emitted verbatim. The description tree only
//! contributes documentation, matched by transformed member name.

use wharf_api::{Api, Class, Member, SignatureEntry, SignatureTable};

use crate::comments::render_comment;
use crate::config::Config;
use crate::naming::go_member_name;

/// The interface file body for a description/table pair.
pub fn generate_interfaces(config: &Config, api: &Api, table: &SignatureTable) -> String {
    let mut out = format!("package {}\n", config.package);
    for (class_name, members) in &table.classes {
        out.push('\n');
        let class = api.class(class_name);
        if let Some(docs) = class.and_then(|c| c.docs.as_deref()) {
            out.push_str(&render_comment(docs, ""));
        }
        out.push_str(&format!("type {} interface {{\n", class_name));
        let mut first = true;
        for (member_name, entry) in members {
            if !first {
                out.push('\n');
            }
            first = false;
            match entry {
                SignatureEntry::Extends(parents) => {
                    for parent in parents {
                        out.push_str(&format!("\t{}\n", parent));
                    }
                }
                SignatureEntry::Signature { input, output } => {
                    if let Some(prose) =
                        find_documented(config, class, member_name).and_then(member_prose)
                    {
                        out.push_str(&render_comment(&prose, "\t"));
                    }
                    out.push_str(&member_line(member_name, input.as_deref(), output.as_deref()));
                }
            }
        }
        out.push_str("}\n");
    }
    out
}

fn member_line(name: &str, input: Option<&str>, output: Option<&str>) -> String {
    if input.is_none() && output.is_none() {
        // Entries without a signature are embedded names.
        return format!("\t{}\n", name);
    }
    let input = input.unwrap_or("");
    match output {
        Some(output) => format!("\t{}({}) {}\n", name, input, format_return(output)),
        None => format!("\t{}({})\n", name, input),
    }
}

/// Wrap multi-value returns in parentheses unless already wrapped.
fn format_return(output: &str) -> String {
    if output.starts_with('(') || !output.contains(',') {
        return output.to_string();
    }
    format!("({})", output)
}

/// The description member whose transformed name matches the declared
/// one.
fn find_documented<'a>(
    config: &Config,
    class: Option<&'a Class>,
    declared: &str,
) -> Option<&'a Member> {
    class?
        .members
        .iter()
        .find(|m| go_member_name(m.name_for(&config.target)) == declared)
}

/// Documentation plus any deprecation or discouragement notices.
fn member_prose(member: &Member) -> Option<String> {
    let mut prose = member.docs.clone().unwrap_or_default();
    for note in [&member.deprecated, &member.discouraged]
        .into_iter()
        .flatten()
    {
        if !prose.is_empty() {
            prose.push_str("\n\n");
        }
        prose.push_str("Deprecated: ");
        prose.push_str(note);
    }
    (!prose.is_empty()).then_some(prose)
}

#[cfg(test)]
mod tests {
    use wharf_api::Api;

    use super::*;

    fn generate(api_json: &str, table_json: &str) -> String {
        let config = Config::default();
        let api: Api = api_json.parse().unwrap();
        let table: SignatureTable = table_json.parse().unwrap();
        generate_interfaces(&config, &api, &table)
    }

    #[test]
    fn test_member_line_shapes() {
        assert_eq!(member_line("IsClosed", None, None), "\tIsClosed\n");
        assert_eq!(
            member_line("Close", None, Some("error")),
            "\tClose() error\n"
        );
        assert_eq!(
            member_line("Goto", Some("url string"), Some("Response, error")),
            "\tGoto(url string) (Response, error)\n"
        );
        assert_eq!(
            member_line("Title", None, Some("(string, error)")),
            "\tTitle() (string, error)\n"
        );
    }

    #[test]
    fn test_interface_with_docs_and_extends() {
        let api = r#"[ { "name": "Page", "comment": "A single tab.", "members": [
            { "kind": "method", "name": "goto", "comment": "Navigates.\n**Usage**\nhidden" }
        ] } ]"#;
        let table = r#"{ "Page": {
            "extends": ["EventEmitter"],
            "Goto": ["url string", "Response, error"]
        } }"#;
        let out = generate(api, table);
        assert_eq!(
            out,
            "package playwright\n\n\
             // A single tab.\n\
             type Page interface {\n\
             \tEventEmitter\n\n\
             \t// Navigates.\n\
             \tGoto(url string) (Response, error)\n\
             }\n"
        );
    }

    #[test]
    fn test_transformed_name_matches_documentation() {
        let api = r#"[ { "name": "Page", "members": [
            { "kind": "method", "name": "$eval", "comment": "Evaluates in page." }
        ] } ]"#;
        let table = r#"{ "Page": {
            "EvaluateOnSelector": ["selector string, script string", "interface{}, error"]
        } }"#;
        let out = generate(api, table);
        assert!(out.contains("\t// Evaluates in page.\n"));
        assert!(out.contains(
            "\tEvaluateOnSelector(selector string, script string) (interface{}, error)\n"
        ));
    }

    #[test]
    fn test_deprecation_notice_is_appended() {
        let api = r#"[ { "name": "Page", "members": [
            { "kind": "method", "name": "waitForTimeout",
              "comment": "Waits.", "deprecated": "Never wait in production." }
        ] } ]"#;
        let table = r#"{ "Page": { "WaitForTimeout": ["timeout float64", null] } }"#;
        let out = generate(api, table);
        assert!(out.contains("\t// Waits.\n\t// Deprecated: Never wait in production.\n"));
        assert!(out.contains("\tWaitForTimeout(timeout float64)\n"));
    }

    #[test]
    fn test_undocumented_classes_still_emit() {
        let out = generate(r#"[]"#, r#"{ "Page": { "Close": [null, "error"] } }"#);
        assert_eq!(
            out,
            "package playwright\n\ntype Page interface {\n\tClose() error\n}\n"
        );
    }
}
