//! The lowered description-tree model.
//!
//! These types are the unified representation a generation pass works
//! against, produced once per run by lowering the raw JSON document and
//! treated as immutable afterwards.

use indexmap::IndexMap;

/// A parsed API description: an ordered sequence of classes.
#[derive(Debug, Clone)]
pub struct Api {
    pub classes: Vec<Class>,
}

impl Api {
    /// Look up a class by name.
    pub fn class(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.name == name)
    }
}

/// A documented class with its member list.
#[derive(Debug, Clone)]
pub struct Class {
    pub name: String,
    pub docs: Option<String>,
    pub members: Vec<Member>,
}

impl Class {
    /// The class's method members, in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.kind == MemberKind::Method)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Method,
    Property,
    Event,
}

/// A documented class member.
#[derive(Debug, Clone)]
pub struct Member {
    pub kind: MemberKind,
    pub name: String,
    pub docs: Option<String>,
    /// Deprecation notice, verbatim from the description.
    pub deprecated: Option<String>,
    /// Discouragement notice, verbatim from the description.
    pub discouraged: Option<String>,
    pub langs: Langs,
    pub args: Vec<Property>,
    /// Declared return type, if any.
    pub ty: Option<TypeExpr>,
}

impl Member {
    /// The member name as the given target language knows it.
    pub fn name_for(&self, target: &str) -> &str {
        self.langs
            .aliases
            .get(target)
            .map(String::as_str)
            .unwrap_or(&self.name)
    }
}

/// A named, typed slot: a method argument or an object-shape property.
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub required: bool,
    pub ty: TypeExpr,
    pub langs: Langs,
}

/// Language restriction and aliasing tags.
#[derive(Debug, Clone, Default)]
pub struct Langs {
    /// When present, the item applies only to the listed languages.
    pub only: Option<Vec<String>>,
    /// Per-language name overrides.
    pub aliases: IndexMap<String, String>,
}

impl Langs {
    /// Whether the tagged item applies to the given target language.
    pub fn applies_to(&self, target: &str) -> bool {
        match &self.only {
            None => true,
            Some(only) => only.iter().any(|l| l == target),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Bool,
    Int,
    Float,
    Path,
}

/// A documentation-level type expression.
///
/// The grammar is closed: lowering maps every raw type into one of these
/// variants, with [`TypeExpr::Other`] carrying anything unrecognized so
/// that consumers stay total.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    Primitive(Primitive),
    /// A class-like handle reference (e.g. an element handle).
    Reference(String),
    Array(Box<TypeExpr>),
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// An enumerated union of quoted string literals.
    LiteralUnion(Vec<String>),
    /// An open union; one branch may itself be an object shape.
    Union(Vec<TypeExpr>),
    /// An object shape with named properties.
    Object(Vec<Property>),
    /// Unrecognized expression, kept verbatim.
    Other(String),
}

impl TypeExpr {
    /// The object-shape properties, when this expression is an object.
    pub fn object_properties(&self) -> Option<&[Property]> {
        match self {
            TypeExpr::Object(props) => Some(props),
            _ => None,
        }
    }
}

// Properties compare by shape; langs tags do not affect type equality.
impl PartialEq for Property {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.required == other.required && self.ty == other.ty
    }
}
