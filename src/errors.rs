//! Error types with rich diagnostics using miette
//!
//! Format errors carry the input name, the full text and a span pointing at
//! the offending line or header field.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<stdin>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

/// Malformed CaboCha `-f1` input. Aborts the whole conversion.
#[derive(Error, Diagnostic, Debug)]
pub enum FormatError {
    #[error("illegal segment header: expected 5 fields, found {found}")]
    #[diagnostic(
        code(cabotikz::format::field_count),
        help("segment headers look like `* <id> <head>D <head>/<func> <score>`")
    )]
    FieldCount {
        found: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("this header")]
        span: SourceSpan,
    },

    #[error("illegal segment header: head field `{field}` does not end in `D`")]
    #[diagnostic(code(cabotikz::format::missing_head_marker))]
    MissingHeadMarker {
        field: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected something like `2D` or `-1D`")]
        span: SourceSpan,
    },

    #[error("illegal segment header: `{field}` is not a segment id")]
    #[diagnostic(
        code(cabotikz::format::invalid_segment_id),
        help("ids are non-negative integers; a head of -1 marks the root")
    )]
    InvalidSegmentId {
        field: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not an id")]
        span: SourceSpan,
    },

    #[error("token line outside of any segment")]
    #[diagnostic(
        code(cabotikz::format::orphan_token),
        help("every sentence must start with a `*` segment header")
    )]
    OrphanToken {
        #[source_code]
        src: NamedSource<String>,
        #[label("no segment header before this line")]
        span: SourceSpan,
    },

    #[error("segment {found} appears where segment {expected} was expected")]
    #[diagnostic(
        code(cabotikz::format::misplaced_segment),
        help("segment ids count up from 0 within each sentence")
    )]
    MisplacedSegment {
        expected: usize,
        found: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("out of sequence")]
        span: SourceSpan,
    },

    #[error("segment {segment} depends on segment {head}, which is not in the sentence")]
    #[diagnostic(code(cabotikz::format::dangling_head))]
    DanglingHead {
        segment: usize,
        head: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("declared here")]
        span: SourceSpan,
    },
}
