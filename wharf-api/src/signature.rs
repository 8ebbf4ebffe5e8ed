//! The hand-maintained signature table.
//!
//! The table is the authority for what the emitted interfaces look like;
//! the description tree only layers documentation on top of it. Member
//! order is significant and preserved exactly.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Declared shape of one interface member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureEntry {
    /// Embedded parent interfaces (an `extends` entry).
    Extends(Vec<String>),
    /// Declared input/output; either side may be absent.
    Signature {
        input: Option<String>,
        output: Option<String>,
    },
}

impl SignatureEntry {
    pub fn input(&self) -> Option<&str> {
        match self {
            SignatureEntry::Signature { input, .. } => input.as_deref(),
            SignatureEntry::Extends(_) => None,
        }
    }

    pub fn output(&self) -> Option<&str> {
        match self {
            SignatureEntry::Signature { output, .. } => output.as_deref(),
            SignatureEntry::Extends(_) => None,
        }
    }
}

/// Class name → ordered member name → declared signature.
#[derive(Debug, Clone, Default)]
pub struct SignatureTable {
    pub classes: IndexMap<String, IndexMap<String, SignatureEntry>>,
}

impl SignatureTable {
    /// Parse a signature table from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::io(path.to_path_buf(), e))?;
        parse_table(&content, &path.display().to_string())
    }

    /// Parse a signature table with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_table(content, filename)
    }

    /// Whether the table declares the given member.
    pub fn contains(&self, class: &str, member: &str) -> bool {
        self.classes
            .get(class)
            .is_some_and(|members| members.contains_key(member))
    }
}

impl FromStr for SignatureTable {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_table(s, "interfaces.json")
    }
}

/// The wire shape: member entries are arrays of up to two nullable
/// strings, except `extends` entries, which list parent interface names.
type RawTable = IndexMap<String, IndexMap<String, Vec<Option<String>>>>;

fn parse_table(content: &str, filename: &str) -> Result<SignatureTable> {
    let raw: RawTable = serde_json::from_str(content)
        .map_err(|e| Error::parse("signature table", e, content, filename))?;

    let mut classes = IndexMap::new();
    for (class_name, members) in raw {
        let mut entries = IndexMap::new();
        for (member_name, values) in members {
            let entry = if member_name == "extends" {
                SignatureEntry::Extends(values.into_iter().flatten().collect())
            } else {
                if values.len() > 2 {
                    return Err(Error::validation(
                        format!(
                            "signature '{}.{}' has {} entries; expected [input, output] or []",
                            class_name,
                            member_name,
                            values.len()
                        ),
                        content,
                        filename,
                    ));
                }
                let mut values = values.into_iter();
                SignatureEntry::Signature {
                    input: values.next().flatten(),
                    output: values.next().flatten(),
                }
            };
            entries.insert(member_name, entry);
        }
        classes.insert(class_name, entries);
    }
    Ok(SignatureTable { classes })
}
