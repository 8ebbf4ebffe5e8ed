//! Lowering from the raw document into the unified model.
//!
//! Lowering is total: every raw type expression maps to a [`TypeExpr`]
//! variant, with unrecognized shapes kept verbatim in
//! [`TypeExpr::Other`].

use wharf_core::is_quoted;

use crate::model::{Api, Class, Langs, Member, MemberKind, Primitive, Property, TypeExpr};
use crate::raw::{RawClass, RawLangs, RawMember, RawProperty, RawType};

/// The expression form a generic string-to-string map takes in the wild.
const STRING_MAP_EXPRESSION: &str = "[Object]<[string], [string]>";

pub(crate) fn lower_api(raw: Vec<RawClass>) -> Api {
    Api {
        classes: raw.into_iter().map(lower_class).collect(),
    }
}

fn lower_class(raw: RawClass) -> Class {
    Class {
        name: raw.name,
        docs: raw.comment.filter(|c| !c.is_empty()),
        members: raw.members.into_iter().map(lower_member).collect(),
    }
}

fn lower_member(raw: RawMember) -> Member {
    let kind = match raw.kind.as_str() {
        "method" => MemberKind::Method,
        "property" => MemberKind::Property,
        _ => MemberKind::Event,
    };
    Member {
        kind,
        name: raw.name,
        docs: raw.comment.filter(|c| !c.is_empty()),
        deprecated: raw.deprecated,
        discouraged: raw.discouraged,
        langs: lower_langs(raw.langs),
        args: raw.args.into_iter().map(lower_property).collect(),
        ty: raw.ty.as_ref().map(lower_type),
    }
}

fn lower_property(raw: RawProperty) -> Property {
    Property {
        name: raw.name,
        required: raw.required,
        ty: lower_type(&raw.ty),
        langs: lower_langs(raw.langs),
    }
}

fn lower_langs(raw: RawLangs) -> Langs {
    Langs {
        only: raw.only,
        aliases: raw.aliases,
    }
}

pub(crate) fn lower_type(raw: &RawType) -> TypeExpr {
    let name = raw.name.as_str();
    if let Some(primitive) = lower_primitive(name) {
        return primitive;
    }
    if !raw.union.is_empty() {
        return lower_union(&raw.union);
    }
    if name.contains('|') {
        return lower_inline_union(name);
    }
    if name == "Array" || name == "Object" || name == "Map" {
        return lower_generic(raw);
    }
    if let Some(inner) = strip_generic(name, "Array") {
        return TypeExpr::Array(Box::new(lower_name(inner)));
    }
    if let Some(params) = strip_generic(name, "Object").or_else(|| strip_generic(name, "Map")) {
        if let Some((key, value)) = params.split_once(',') {
            return TypeExpr::Map {
                key: Box::new(lower_name(key.trim())),
                value: Box::new(lower_name(value.trim())),
            };
        }
    }
    lower_name(name)
}

fn lower_primitive(name: &str) -> Option<TypeExpr> {
    let primitive = match name {
        "string" => Primitive::String,
        "boolean" => Primitive::Bool,
        "int" => Primitive::Int,
        "float" => Primitive::Float,
        "path" => Primitive::Path,
        _ => return None,
    };
    Some(TypeExpr::Primitive(primitive))
}

/// Structured generics: `Array`/`Object`/`Map` with `templates`, or an
/// `Object` carrying its shape in `properties`/`expression`.
fn lower_generic(raw: &RawType) -> TypeExpr {
    match (raw.name.as_str(), raw.templates.as_slice()) {
        ("Array", [inner]) => TypeExpr::Array(Box::new(lower_type(inner))),
        ("Object" | "Map", [key, value]) => TypeExpr::Map {
            key: Box::new(lower_type(key)),
            value: Box::new(lower_type(value)),
        },
        ("Object" | "Map", _) if raw.expression.as_deref() == Some(STRING_MAP_EXPRESSION) => {
            TypeExpr::Map {
                key: Box::new(TypeExpr::Primitive(Primitive::String)),
                value: Box::new(TypeExpr::Primitive(Primitive::String)),
            }
        }
        ("Object", _) => TypeExpr::Object(
            raw.properties
                .iter()
                .map(|p| Property {
                    name: p.name.clone(),
                    required: p.required,
                    ty: lower_type(&p.ty),
                    langs: Langs {
                        only: p.langs.only.clone(),
                        aliases: p.langs.aliases.clone(),
                    },
                })
                .collect(),
        ),
        _ => TypeExpr::Other(raw.name.clone()),
    }
}

/// Union branches arriving as a structured list. `null` branches are
/// dropped; a union that collapses to one branch is that branch.
fn lower_union(branches: &[RawType]) -> TypeExpr {
    let significant: Vec<&RawType> = branches.iter().filter(|b| b.name != "null").collect();
    match significant.as_slice() {
        [] => TypeExpr::Other("null".to_string()),
        [only] => lower_type(only),
        _ => {
            if significant.iter().all(|b| is_quoted(&b.name)) {
                return TypeExpr::LiteralUnion(
                    significant
                        .iter()
                        .map(|b| b.name.trim_matches('"').to_string())
                        .collect(),
                );
            }
            TypeExpr::Union(significant.iter().map(|b| lower_type(b)).collect())
        }
    }
}

/// Union expressed inline in the name, e.g. `"small"|"large"`.
fn lower_inline_union(name: &str) -> TypeExpr {
    let parts: Vec<&str> = name.split('|').map(str::trim).collect();
    if parts.iter().all(|p| is_quoted(p)) {
        return TypeExpr::LiteralUnion(
            parts.iter().map(|p| p.trim_matches('"').to_string()).collect(),
        );
    }
    TypeExpr::Union(parts.into_iter().map(lower_name).collect())
}

/// A bare type name: primitive, quoted literal, class-like reference, or
/// anything else kept verbatim.
fn lower_name(name: &str) -> TypeExpr {
    if let Some(primitive) = lower_primitive(name) {
        return primitive;
    }
    if is_quoted(name) {
        return TypeExpr::LiteralUnion(vec![name.trim_matches('"').to_string()]);
    }
    let mut chars = name.chars();
    let class_like = chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && name.chars().all(|c| c.is_ascii_alphanumeric());
    if class_like {
        return TypeExpr::Reference(name.to_string());
    }
    TypeExpr::Other(name.to_string())
}

fn strip_generic<'a>(name: &'a str, head: &str) -> Option<&'a str> {
    name.strip_prefix(head)?
        .strip_prefix('<')?
        .strip_suffix('>')
}
