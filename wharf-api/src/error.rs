use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for wharf-api operations (boxed to reduce size on stack).
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("generate the description with 'wharf dump' or point at an existing file"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}")]
    #[diagnostic(code(wharf::parse_error))]
    Parse {
        what: &'static str,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(wharf::invalid_input))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        message: String,
    },
}

impl Error {
    /// Create a read error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a parse error from a serde_json error with source context.
    pub fn parse(
        what: &'static str,
        source: serde_json::Error,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        let span = (source.line() > 0).then(|| {
            let offset = SourceOffset::from_location(src, source.line(), source.column().max(1));
            SourceSpan::new(offset, 0)
        });
        Box::new(Error::Parse {
            what,
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context.
    pub fn validation(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            message: message.into(),
        })
    }
}
