//! Loading entry points for the description document.

use std::{collections::HashSet, path::Path, str::FromStr};

use crate::error::{Error, Result};
use crate::lower::lower_api;
use crate::model::{Api, Property, TypeExpr};
use crate::raw::RawClass;

impl FromStr for Api {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_api(s, "api.json")
    }
}

impl Api {
    /// Parse a description document from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::io(path.to_path_buf(), e))?;
        parse_api(&content, &path.display().to_string())
    }

    /// Parse a description document with a custom filename for error
    /// reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_api(content, filename)
    }
}

/// Parse and validate a description document.
pub fn parse_api(content: &str, filename: &str) -> Result<Api> {
    let raw: Vec<RawClass> = serde_json::from_str(content)
        .map_err(|e| Error::parse("API description", e, content, filename))?;
    let api = lower_api(raw);
    validate_api(&api, content, filename)?;
    Ok(api)
}

/// Enforce the description invariants: class names unique in the tree,
/// member names unique per class, property names unique per object shape.
fn validate_api(api: &Api, src: &str, filename: &str) -> Result<()> {
    let mut class_names = HashSet::new();
    for class in &api.classes {
        if !class_names.insert(class.name.as_str()) {
            return Err(Error::validation(
                format!("duplicate class '{}' in description", class.name),
                src,
                filename,
            ));
        }
        let mut member_names = HashSet::new();
        for member in &class.members {
            if !member_names.insert(member.name.as_str()) {
                return Err(Error::validation(
                    format!(
                        "duplicate member '{}.{}' in description",
                        class.name, member.name
                    ),
                    src,
                    filename,
                ));
            }
            for arg in &member.args {
                validate_properties(&arg.ty, &class.name, &member.name, src, filename)?;
            }
        }
    }
    Ok(())
}

fn validate_properties(
    ty: &TypeExpr,
    class: &str,
    member: &str,
    src: &str,
    filename: &str,
) -> Result<()> {
    let check = |props: &[Property]| -> Result<()> {
        let mut names = HashSet::new();
        for prop in props {
            if !names.insert(prop.name.as_str()) {
                return Err(Error::validation(
                    format!(
                        "duplicate property '{}' in an object shape of {}.{}",
                        prop.name, class, member
                    ),
                    src,
                    filename,
                ));
            }
        }
        Ok(())
    };
    match ty {
        TypeExpr::Object(props) => {
            check(props)?;
            for prop in props {
                validate_properties(&prop.ty, class, member, src, filename)?;
            }
        }
        TypeExpr::Union(branches) => {
            for branch in branches {
                validate_properties(branch, class, member, src, filename)?;
            }
        }
        TypeExpr::Array(inner) => validate_properties(inner, class, member, src, filename)?,
        TypeExpr::Map { key, value } => {
            validate_properties(key, class, member, src, filename)?;
            validate_properties(value, class, member, src, filename)?;
        }
        _ => {}
    }
    Ok(())
}
