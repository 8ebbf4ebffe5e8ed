//! Description-tree and signature-table models for the wharf binding
//! generator.
//!
//! This crate owns the two input documents of a generation pass and the
//! unified representation the code generators consume.
//!
//! # Architecture
//!
//! ```text
//! api.json (JSON) → raw mirror (serde) → lowering → IR (Api/TypeExpr) → codegen
//! interfaces.json (JSON) → SignatureTable
//! ```
//!
//! The IR types are designed to be:
//! - A closed grammar: every documentation type expression lowers to one
//!   of the [`TypeExpr`] variants, with [`TypeExpr::Other`] as the total
//!   escape hatch
//! - Immutable once loaded: a generation pass never mutates them

mod error;
mod lower;
mod model;
mod parse;
mod raw;
mod signature;

pub use error::{Error, Result};
pub use model::{Api, Class, Langs, Member, MemberKind, Primitive, Property, TypeExpr};
pub use signature::{SignatureEntry, SignatureTable};
