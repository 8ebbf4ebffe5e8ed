//! Serde mirror of the description document.
//!
//! These types track the wire shape exactly; [`crate::lower`] turns them
//! into the unified model.

use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct RawClass {
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub members: Vec<RawMember>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMember {
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub deprecated: Option<String>,
    #[serde(default)]
    pub discouraged: Option<String>,
    #[serde(default)]
    pub langs: RawLangs,
    #[serde(default)]
    pub args: Vec<RawProperty>,
    #[serde(rename = "type", default)]
    pub ty: Option<RawType>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawProperty {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type")]
    pub ty: RawType,
    #[serde(default)]
    pub langs: RawLangs,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawLangs {
    #[serde(default)]
    pub only: Option<Vec<String>>,
    #[serde(default)]
    pub aliases: IndexMap<String, String>,
}

/// A raw type expression. The `name` string carries most of the grammar
/// (`"string"`, `"Array<string>"`, `"\"a\"|\"b\""`); generics may also
/// arrive structured through `templates`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawType {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub expression: Option<String>,
    #[serde(default)]
    pub union: Vec<RawType>,
    #[serde(default)]
    pub properties: Vec<RawProperty>,
    #[serde(default)]
    pub templates: Vec<RawType>,
}
