//! Line scanner for CaboCha `-f1` output
//!
//! Every line is one of three kinds, checked in this order:
//!
//! - `EOS...` closes the open segment and the sentence,
//! - `* <id> <head>D <head>/<func> <score>` closes the open segment and opens a new one,
//! - anything else is a token of the open segment.
//!
//! When a sentence closes, segment ids must count up from 0 and every head must
//! name one of them. A sentence that never sees its `EOS` is discarded.

use miette::SourceSpan;

use crate::ast::{FIELD_SEPARATOR, Segment, SegmentId, Sentence, Token};
use crate::errors::{FormatError, SourceContext};
use tracing::{debug, trace, warn};

/// Prefix of the end-of-sentence line.
pub const EOS_MARKER: &str = "EOS";
/// Prefix of a segment header line.
pub const HEADER_MARKER: char = '*';
/// Suffix of the head field in a segment header.
pub const HEAD_MARKER: char = 'D';
/// Head value of the root segment.
pub const ROOT_HEAD: &str = "-1";

const HEADER_FIELDS: usize = 5;

/// Classification of a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    EndOfSentence,
    SegmentHeader,
    Token,
}

impl LineKind {
    pub fn of(line: &str) -> Self {
        if line.starts_with(EOS_MARKER) {
            LineKind::EndOfSentence
        } else if line
            .strip_prefix(HEADER_MARKER)
            .is_some_and(|rest| !rest.starts_with(FIELD_SEPARATOR))
        {
            // `*\t記号,...` is the morpheme "*", not a header
            LineKind::SegmentHeader
        } else {
            LineKind::Token
        }
    }
}

/// Parse CaboCha output into sentences, naming the input `<input>` in diagnostics.
pub fn parse(source: &str) -> Result<Vec<Sentence>, FormatError> {
    parse_source(&SourceContext::new("<input>", source))
}

/// Parse an already line-split input.
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<Sentence>, FormatError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let source: String = lines
        .into_iter()
        .map(|line| format!("{}\n", line.as_ref().trim_end_matches(['\r', '\n'])))
        .collect();
    parse(&source)
}

/// Parse the text held by `ctx`; errors point into it.
pub fn parse_source(ctx: &SourceContext) -> Result<Vec<Sentence>, FormatError> {
    let mut scanner = Scanner::new(ctx);
    let mut offset = 0;
    for raw in ctx.source.split_inclusive('\n') {
        let text = raw.trim_end_matches(['\r', '\n']);
        scanner.feed(text, offset)?;
        offset += raw.len();
    }
    Ok(scanner.finish())
}

/// A segment whose header has been read but which has not been closed yet.
struct OpenSegment {
    segment: Segment,
    header: SourceSpan,
}

struct Scanner<'a> {
    ctx: &'a SourceContext,
    sentences: Vec<Sentence>,
    sentence: Sentence,
    /// Header spans of the closed segments of `sentence`, index-aligned.
    headers: Vec<SourceSpan>,
    segment: Option<OpenSegment>,
}

impl<'a> Scanner<'a> {
    fn new(ctx: &'a SourceContext) -> Self {
        Self {
            ctx,
            sentences: Vec::new(),
            sentence: Sentence::new(),
            headers: Vec::new(),
            segment: None,
        }
    }

    fn feed(&mut self, text: &str, offset: usize) -> Result<(), FormatError> {
        match LineKind::of(text) {
            LineKind::EndOfSentence => self.end_sentence(),
            LineKind::SegmentHeader => {
                self.flush_segment();
                let segment = self.parse_header(text, offset)?;
                self.segment = Some(OpenSegment {
                    segment,
                    header: (offset, text.len()).into(),
                });
                Ok(())
            }
            LineKind::Token => self.push_token(text, offset),
        }
    }

    fn flush_segment(&mut self) {
        if let Some(open) = self.segment.take() {
            trace!(
                id = open.segment.id,
                head = ?open.segment.head,
                tokens = open.segment.tokens.len(),
                "segment closed"
            );
            self.sentence.segments.push(open.segment);
            self.headers.push(open.header);
        }
    }

    fn end_sentence(&mut self) -> Result<(), FormatError> {
        self.flush_segment();
        self.check_sentence()?;
        let sentence = std::mem::take(&mut self.sentence);
        self.headers.clear();
        debug!(segments = sentence.len(), text = %sentence, "sentence complete");
        self.sentences.push(sentence);
        Ok(())
    }

    fn push_token(&mut self, text: &str, offset: usize) -> Result<(), FormatError> {
        let line = text.trim_end();
        match &mut self.segment {
            Some(open) => {
                open.segment.push(Token::new(line));
                Ok(())
            }
            None if line.trim_start().is_empty() => Ok(()),
            None => Err(FormatError::OrphanToken {
                src: self.ctx.named_source(),
                span: (offset, text.len()).into(),
            }),
        }
    }

    fn parse_header(&self, text: &str, offset: usize) -> Result<Segment, FormatError> {
        let text = text.trim_end();
        let fields: Vec<&str> = text.split(' ').collect();
        if fields.len() != HEADER_FIELDS {
            return Err(FormatError::FieldCount {
                found: fields.len(),
                src: self.ctx.named_source(),
                span: (offset, text.len()).into(),
            });
        }

        let id = self.parse_id(fields[1], field_span(&fields, offset, 1))?;

        let head_span = field_span(&fields, offset, 2);
        let Some(head) = fields[2].strip_suffix(HEAD_MARKER) else {
            return Err(FormatError::MissingHeadMarker {
                field: fields[2].to_string(),
                src: self.ctx.named_source(),
                span: head_span,
            });
        };
        let head = if head == ROOT_HEAD {
            None
        } else {
            Some(self.parse_id(head, head_span)?)
        };

        Ok(Segment::new(id, head))
    }

    fn parse_id(&self, field: &str, span: SourceSpan) -> Result<SegmentId, FormatError> {
        field
            .parse()
            .map_err(|_| FormatError::InvalidSegmentId {
                field: field.to_string(),
                src: self.ctx.named_source(),
                span,
            })
    }

    fn check_sentence(&self) -> Result<(), FormatError> {
        let count = self.sentence.len();
        for (position, (segment, header)) in
            self.sentence.segments.iter().zip(&self.headers).enumerate()
        {
            if segment.id != position {
                return Err(FormatError::MisplacedSegment {
                    expected: position,
                    found: segment.id,
                    src: self.ctx.named_source(),
                    span: *header,
                });
            }
        }
        for (segment, header) in self.sentence.segments.iter().zip(&self.headers) {
            if let Some(head) = segment.head {
                if head >= count {
                    return Err(FormatError::DanglingHead {
                        segment: segment.id,
                        head,
                        src: self.ctx.named_source(),
                        span: *header,
                    });
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> Vec<Sentence> {
        if self.segment.is_some() || !self.sentence.is_empty() {
            warn!(
                segments = self.sentence.len() + usize::from(self.segment.is_some()),
                "input ended without EOS, discarding the last sentence"
            );
        }
        self.sentences
    }
}

/// Span of `fields[index]` in a header line split on single spaces.
fn field_span(fields: &[&str], line_offset: usize, index: usize) -> SourceSpan {
    let start = line_offset
        + fields[..index]
            .iter()
            .map(|field| field.len() + 1)
            .sum::<usize>();
    (start, fields[index].len()).into()
}
