//! Options-aggregate synthesis and Go struct rendering.
//!
//! Every method with optional parameters gets one named options struct;
//! nested object shapes (and object-carrying union branches) become
//! additional structs collected in an explicit accumulator, so the
//! recursion has no shared mutable state beyond what the caller threads
//! through.

use indexmap::IndexMap;
use wharf_api::{Api, Class, Member, Property, TypeExpr};

use crate::config::Config;
use crate::naming::{go_member_name, pascal};
use crate::type_mapper::map_property;

/// One field of a synthesized aggregate: Go name, Go type, wire tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    pub name: String,
    pub ty: String,
    pub tag: String,
}

/// A synthesized aggregate declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDecl {
    pub name: String,
    pub fields: Vec<StructField>,
}

impl StructDecl {
    /// Render as a Go struct declaration.
    pub fn render(&self) -> String {
        let mut out = format!("type {} struct {{\n", self.name);
        for field in &self.fields {
            out.push_str(&format!(
                "\t{} {} `json:\"{}\"`\n",
                field.name, field.ty, field.tag
            ));
        }
        out.push_str("}\n");
        out
    }
}

/// Nested aggregates in first-discovered order. Duplicate names coalesce
/// last-writer-wins; shapes for a given name are deterministic from the
/// same input, so nothing is lost.
#[derive(Debug, Default)]
pub struct Aggregates {
    decls: IndexMap<String, StructDecl>,
}

impl Aggregates {
    pub fn insert(&mut self, decl: StructDecl) {
        self.decls.insert(decl.name.clone(), decl);
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StructDecl> {
        self.decls.values()
    }
}

/// Synthesize a nested aggregate from an object shape. Returns the Go
/// type reference for the owning field; the declaration itself lands in
/// `acc`, after any aggregates discovered below it.
pub(crate) fn synthesize(
    config: &Config,
    prefix: &str,
    prop_name: &str,
    props: &[Property],
    acc: &mut Aggregates,
) -> String {
    let name = format!("{}{}", prefix, pascal(prop_name));
    let mut fields = Vec::new();
    for prop in props {
        if !prop.langs.applies_to(&config.target) {
            continue;
        }
        fields.push(field_for(config, prop, &name, acc));
    }
    acc.insert(StructDecl {
        name: name.clone(),
        fields,
    });
    format!("*{}", name)
}

fn field_for(config: &Config, prop: &Property, prefix: &str, acc: &mut Aggregates) -> StructField {
    StructField {
        name: pascal(&prop.name),
        ty: map_property(config, prop, prefix, acc),
        tag: prop.name.clone(),
    }
}

/// The options struct for one method, if it has any optional surface.
pub fn method_options(
    config: &Config,
    class: &Class,
    member: &Member,
    acc: &mut Aggregates,
) -> Option<StructDecl> {
    let spread = config.is_spread(&class.name, &member.name);
    let mut params: Vec<&Property> = member
        .args
        .iter()
        .filter(|a| !a.required || a.name.starts_with("option") || spread)
        .collect();

    // A lone object-shaped candidate is flattened one level: its own
    // properties become the field list.
    if params.len() == 1 {
        if let TypeExpr::Object(props) = &params[0].ty {
            params = props.iter().collect();
        }
    }
    if params.is_empty() {
        return None;
    }

    let base = format!("{}{}", class.name, go_member_name(&member.name));
    let mut fields = Vec::new();
    for param in params {
        if !param.langs.applies_to(&config.target) {
            continue;
        }
        // An `option…`-named object among several candidates is expanded
        // in place.
        if param.name.starts_with("option") {
            if let TypeExpr::Object(props) = &param.ty {
                for prop in props {
                    if !prop.langs.applies_to(&config.target) {
                        continue;
                    }
                    fields.push(field_for(config, prop, &base, acc));
                }
                continue;
            }
        }
        fields.push(field_for(config, param, &base, acc));
    }
    if fields.is_empty() {
        return None;
    }
    Some(StructDecl {
        name: format!("{}Options", base),
        fields,
    })
}

/// All options structs for one class, in member order.
pub fn class_options(config: &Config, class: &Class, acc: &mut Aggregates) -> Vec<StructDecl> {
    class
        .methods()
        .filter_map(|member| method_options(config, class, member, acc))
        .collect()
}

/// The options-struct file body for a whole description: one struct per
/// method in declaration order, then every nested aggregate in
/// first-discovered order.
pub fn generate_structs(config: &Config, api: &Api) -> String {
    let mut acc = Aggregates::default();
    let mut out = format!("package {}\n", config.package);
    for class in &api.classes {
        for decl in class_options(config, class, &mut acc) {
            out.push('\n');
            out.push_str(&decl.render());
        }
    }
    for decl in acc.iter() {
        out.push('\n');
        out.push_str(&decl.render());
    }
    out
}

#[cfg(test)]
mod tests {
    use wharf_api::{Langs, MemberKind, Primitive};

    use super::*;

    fn prop(name: &str, required: bool, ty: TypeExpr) -> Property {
        Property {
            name: name.to_string(),
            required,
            ty,
            langs: Langs::default(),
        }
    }

    fn method(name: &str, args: Vec<Property>) -> Member {
        Member {
            kind: MemberKind::Method,
            name: name.to_string(),
            docs: None,
            deprecated: None,
            discouraged: None,
            langs: Langs::default(),
            args,
            ty: None,
        }
    }

    fn class(name: &str, members: Vec<Member>) -> Class {
        Class {
            name: name.to_string(),
            docs: None,
            members,
        }
    }

    fn options_for(class: &Class, member_index: usize) -> (Option<StructDecl>, Aggregates) {
        let config = Config::default();
        let mut acc = Aggregates::default();
        let decl = method_options(&config, class, &class.members[member_index], &mut acc);
        (decl, acc)
    }

    #[test]
    fn test_mixed_optionals_with_option_object_expand_together() {
        // An optional scalar and an `options` object contribute fields
        // side by side, flattened.
        let c = class(
            "Page",
            vec![method(
                "goto",
                vec![
                    prop("url", true, TypeExpr::Primitive(Primitive::String)),
                    prop("timeout", false, TypeExpr::Primitive(Primitive::Int)),
                    prop(
                        "options",
                        false,
                        TypeExpr::Object(vec![prop(
                            "visible",
                            false,
                            TypeExpr::Primitive(Primitive::Bool),
                        )]),
                    ),
                ],
            )],
        );
        let (decl, acc) = options_for(&c, 0);
        let decl = decl.unwrap();
        assert_eq!(decl.name, "PageGotoOptions");
        assert_eq!(
            decl.fields,
            vec![
                StructField {
                    name: "Timeout".to_string(),
                    ty: "*int".to_string(),
                    tag: "timeout".to_string(),
                },
                StructField {
                    name: "Visible".to_string(),
                    ty: "*bool".to_string(),
                    tag: "visible".to_string(),
                },
            ]
        );
        assert!(acc.is_empty());
    }

    #[test]
    fn test_single_object_candidate_is_flattened() {
        // A lone object candidate and directly-declared optionals
        // produce the same field list.
        let direct = class(
            "Page",
            vec![method(
                "click",
                vec![
                    prop("force", false, TypeExpr::Primitive(Primitive::Bool)),
                    prop("timeout", false, TypeExpr::Primitive(Primitive::Int)),
                ],
            )],
        );
        let wrapped = class(
            "Page",
            vec![method(
                "click",
                vec![prop(
                    "params",
                    false,
                    TypeExpr::Object(vec![
                        prop("force", false, TypeExpr::Primitive(Primitive::Bool)),
                        prop("timeout", false, TypeExpr::Primitive(Primitive::Int)),
                    ]),
                )],
            )],
        );
        let (direct_decl, _) = options_for(&direct, 0);
        let (wrapped_decl, _) = options_for(&wrapped, 0);
        assert_eq!(direct_decl.unwrap().fields, wrapped_decl.unwrap().fields);
    }

    #[test]
    fn test_spread_method_includes_required_args() {
        let c = class(
            "Page",
            vec![method(
                "addScriptTag",
                vec![prop(
                    "params",
                    true,
                    TypeExpr::Object(vec![prop(
                        "path",
                        false,
                        TypeExpr::Primitive(Primitive::Path),
                    )]),
                )],
            )],
        );
        let (decl, _) = options_for(&c, 0);
        let decl = decl.unwrap();
        assert_eq!(decl.name, "PageAddScriptTagOptions");
        assert_eq!(decl.fields[0].name, "Path");
        assert_eq!(decl.fields[0].ty, "*string");
    }

    #[test]
    fn test_all_required_args_emit_nothing() {
        let c = class(
            "Page",
            vec![method(
                "goto",
                vec![prop("url", true, TypeExpr::Primitive(Primitive::String))],
            )],
        );
        let (decl, acc) = options_for(&c, 0);
        assert!(decl.is_none());
        assert!(acc.is_empty());
    }

    #[test]
    fn test_nested_aggregate_names_chain() {
        let position = TypeExpr::Object(vec![
            prop("x", false, TypeExpr::Primitive(Primitive::Int)),
            prop("y", false, TypeExpr::Primitive(Primitive::Int)),
        ]);
        let clip = TypeExpr::Object(vec![prop("position", false, position)]);
        let c = class(
            "Page",
            vec![method(
                "screenshot",
                vec![
                    prop("timeout", false, TypeExpr::Primitive(Primitive::Int)),
                    prop("clip", false, clip),
                ],
            )],
        );
        let (decl, acc) = options_for(&c, 0);
        let decl = decl.unwrap();
        assert_eq!(decl.name, "PageScreenshotOptions");
        assert_eq!(decl.fields[1].ty, "*PageScreenshotClip");

        let names: Vec<&str> = acc.iter().map(|d| d.name.as_str()).collect();
        // Deepest aggregates are discovered first; names extend the chain.
        assert_eq!(names, ["PageScreenshotClipPosition", "PageScreenshotClip"]);
    }

    #[test]
    fn test_restricted_properties_are_skipped() {
        let restricted = Property {
            name: "pythonOnly".to_string(),
            required: false,
            ty: TypeExpr::Primitive(Primitive::String),
            langs: Langs {
                only: Some(vec!["python".to_string()]),
                aliases: Default::default(),
            },
        };
        let c = class(
            "Page",
            vec![method(
                "goto",
                vec![
                    prop("timeout", false, TypeExpr::Primitive(Primitive::Int)),
                    restricted,
                ],
            )],
        );
        let (decl, _) = options_for(&c, 0);
        let decl = decl.unwrap();
        assert_eq!(decl.fields.len(), 1);
        assert_eq!(decl.fields[0].name, "Timeout");
    }

    #[test]
    fn test_duplicate_aggregate_names_coalesce_in_place() {
        let mut acc = Aggregates::default();
        acc.insert(StructDecl {
            name: "PageGotoClip".to_string(),
            fields: vec![],
        });
        acc.insert(StructDecl {
            name: "PageGotoOther".to_string(),
            fields: vec![],
        });
        acc.insert(StructDecl {
            name: "PageGotoClip".to_string(),
            fields: vec![StructField {
                name: "X".to_string(),
                ty: "*int".to_string(),
                tag: "x".to_string(),
            }],
        });
        let names: Vec<&str> = acc.iter().map(|d| d.name.as_str()).collect();
        // First-discovered order is kept; the later shape wins.
        assert_eq!(names, ["PageGotoClip", "PageGotoOther"]);
        assert_eq!(acc.iter().next().unwrap().fields.len(), 1);
    }

    #[test]
    fn test_render_struct() {
        let decl = StructDecl {
            name: "PageGotoOptions".to_string(),
            fields: vec![StructField {
                name: "Timeout".to_string(),
                ty: "*int".to_string(),
                tag: "timeout".to_string(),
            }],
        };
        assert_eq!(
            decl.render(),
            "type PageGotoOptions struct {\n\tTimeout *int `json:\"timeout\"`\n}\n"
        );
    }
}
