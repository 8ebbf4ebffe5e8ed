//! Documentation type expressions → Go types.
//!
//! An ordered, total mapping: domain overrides first, then the fixed
//! primitive table, then the structural rules, with an opaque
//! `interface{}` fallback so the mapper never fails. Object shapes and
//! object-carrying unions delegate to the struct synthesizer, threading
//! discovered aggregates through the caller's accumulator.

use wharf_api::{Primitive, Property, TypeExpr};

use crate::config::Config;
use crate::structs::{Aggregates, synthesize};

/// Map one property to its Go type, collecting any nested aggregates
/// into `acc`. `prefix` names the enclosing aggregate and seeds nested
/// aggregate names.
pub fn map_property(config: &Config, prop: &Property, prefix: &str, acc: &mut Aggregates) -> String {
    // Geo coordinates are nullable floats regardless of declared type.
    if prop.name == "latitude" || prop.name == "longitude" {
        return "*float64".to_string();
    }
    map_type(config, &prop.ty, &prop.name, prefix, acc)
}

pub(crate) fn map_type(
    config: &Config,
    ty: &TypeExpr,
    prop_name: &str,
    prefix: &str,
    acc: &mut Aggregates,
) -> String {
    match ty {
        TypeExpr::Primitive(p) => primitive_type(*p).to_string(),
        TypeExpr::Reference(name) if *name == config.handle_type => format!("*{}", name),
        TypeExpr::Array(inner) if **inner == TypeExpr::Primitive(Primitive::String) => {
            "[]string".to_string()
        }
        TypeExpr::Map { key, value } if is_string(key) && is_string(value) => {
            "map[string]string".to_string()
        }
        TypeExpr::LiteralUnion(_) => "*string".to_string(),
        TypeExpr::Union(branches) => match object_branch(branches) {
            Some(props) => synthesize(config, prefix, prop_name, props, acc),
            None => "interface{}".to_string(),
        },
        TypeExpr::Object(props) if !props.is_empty() => {
            synthesize(config, prefix, prop_name, props, acc)
        }
        TypeExpr::Map { .. } => "map[string]interface{}".to_string(),
        _ => "interface{}".to_string(),
    }
}

fn primitive_type(p: Primitive) -> &'static str {
    match p {
        Primitive::String | Primitive::Path => "*string",
        Primitive::Bool => "*bool",
        Primitive::Int => "*int",
        Primitive::Float => "*float64",
    }
}

fn is_string(ty: &TypeExpr) -> bool {
    *ty == TypeExpr::Primitive(Primitive::String)
}

/// The first union branch that carries an object shape with properties.
fn object_branch(branches: &[TypeExpr]) -> Option<&[Property]> {
    branches
        .iter()
        .find_map(|b| b.object_properties().filter(|props| !props.is_empty()))
}
