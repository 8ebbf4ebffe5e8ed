//! Go naming rules for documented member names.

use wharf_core::capitalize;

/// Marker and acronym substitutions, applied in order, first occurrence
/// each. Selector markers expand before the acronym fixups so that the
/// expanded text is never re-matched.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("$$eval", "EvaluateOnSelectorAll"),
    ("$eval", "EvaluateOnSelector"),
    ("$$", "querySelectorAll"),
    ("$", "querySelector"),
    ("pdf", "PDF"),
    ("url", "URL"),
    ("json", "JSON"),
];

/// The exported Go name for a documented member.
///
/// Not idempotent: substituted text may re-match on a second pass, so
/// callers apply this exactly once per name.
pub fn go_member_name(name: &str) -> String {
    let mut out = name.to_string();
    for (from, to) in SUBSTITUTIONS {
        if let Some(idx) = out.find(from) {
            out.replace_range(idx..idx + from.len(), to);
        }
    }
    capitalize(&out)
}

/// Field/property variant: drops the first underscore before
/// transforming.
pub fn pascal(name: &str) -> String {
    go_member_name(&name.replacen('_', "", 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_markers() {
        assert_eq!(go_member_name("$eval"), "EvaluateOnSelector");
        assert_eq!(go_member_name("$$eval"), "EvaluateOnSelectorAll");
        assert_eq!(go_member_name("$"), "QuerySelector");
        assert_eq!(go_member_name("$$"), "QuerySelectorAll");
    }

    #[test]
    fn test_acronyms() {
        assert_eq!(go_member_name("pdf"), "PDF");
        assert_eq!(go_member_name("url"), "URL");
        assert_eq!(go_member_name("jsonValue"), "JSONValue");
    }

    #[test]
    fn test_plain_names_are_capitalized() {
        assert_eq!(go_member_name("goto"), "Goto");
        assert_eq!(go_member_name("addScriptTag"), "AddScriptTag");
        assert_eq!(go_member_name("waitForNavigation"), "WaitForNavigation");
    }

    #[test]
    fn test_first_occurrence_only() {
        // Only the first lowercase occurrence is expanded.
        assert_eq!(go_member_name("urlOrUrl"), "URLOrUrl");
    }

    #[test]
    fn test_pascal_strips_first_underscore() {
        assert_eq!(pascal("no_wait_after"), "Nowait_after");
        assert_eq!(pascal("timeout"), "Timeout");
    }
}
