//! In-memory model of CaboCha `-f1` output
//!
//! Ownership is strictly tree-shaped: a [`Sentence`] owns its [`Segment`]s,
//! which own their [`Token`]s. Heads are plain ids resolved at render time.

use std::fmt;

/// Separator between the surface form and the feature columns of a token line.
pub const FIELD_SEPARATOR: char = '\t';

/// Position of a segment within its sentence (0-based).
pub type SegmentId = usize;

/// One morpheme line of parser output, stored as read (trailing whitespace stripped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub line: String,
}

impl Token {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    /// The text before the first field separator.
    pub fn surface(&self) -> &str {
        match self.line.split_once(FIELD_SEPARATOR) {
            Some((surface, _)) => surface,
            None => &self.line,
        }
    }
}

/// A node of the dependency tree (a bunsetsu in CaboCha terms)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub id: SegmentId,
    /// Id of the segment this one depends on; `None` for the root.
    pub head: Option<SegmentId>,
    pub tokens: Vec<Token>,
}

impl Segment {
    pub fn new(id: SegmentId, head: Option<SegmentId>) -> Self {
        Self {
            id,
            head,
            tokens: Vec::new(),
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn is_root(&self) -> bool {
        self.head.is_none()
    }

    /// Concatenated surface forms of all tokens, without separators.
    pub fn surface_text(&self) -> String {
        self.tokens.iter().map(Token::surface).collect()
    }
}

/// An `EOS`-terminated run of segments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    pub segments: Vec<Segment>,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// 1-based column of the segment with this id in the token row.
    pub fn column(&self, id: SegmentId) -> Option<usize> {
        self.segments
            .iter()
            .position(|seg| seg.id == id)
            .map(|idx| idx + 1)
    }

    /// `(head column, dependent column)` for every non-root segment, in segment order.
    ///
    /// Heads naming no segment of the sentence are skipped.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.segments
            .iter()
            .enumerate()
            .filter_map(|(idx, seg)| Some((self.column(seg.head?)?, idx + 1)))
    }
}

/// Surface texts joined by single spaces.
impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&seg.surface_text())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(id: SegmentId, head: Option<SegmentId>, lines: &[&str]) -> Segment {
        let mut seg = Segment::new(id, head);
        for line in lines {
            seg.push(Token::new(*line));
        }
        seg
    }

    #[test]
    fn surface_stops_at_first_tab() {
        let token = Token::new("太郎\t名詞,固有名詞,人名,名,*,*,太郎,タロウ,タロー\tB-PERSON");
        assert_eq!(token.surface(), "太郎");
    }

    #[test]
    fn surface_without_features_is_whole_line() {
        assert_eq!(Token::new("Token1").surface(), "Token1");
    }

    #[test]
    fn surface_text_concatenates_tokens() {
        let seg = segment(0, Some(1), &["太郎\t名詞", "は\t助詞"]);
        assert_eq!(seg.surface_text(), "太郎は");
        assert!(!seg.is_root());
    }

    #[test]
    fn tokenless_segment_has_empty_surface() {
        let seg = segment(3, None, &[]);
        assert_eq!(seg.surface_text(), "");
        assert!(seg.is_root());
    }

    #[test]
    fn edges_skip_root() {
        let sentence = Sentence {
            segments: vec![
                segment(0, Some(2), &["a"]),
                segment(1, Some(2), &["b"]),
                segment(2, None, &["c"]),
            ],
        };
        let edges: Vec<_> = sentence.edges().collect();
        assert_eq!(edges, vec![(3, 1), (3, 2)]);
        assert_eq!(sentence.column(2), Some(3));
        assert_eq!(sentence.column(7), None);
        assert_eq!(sentence.to_string(), "a b c");
    }

    #[test]
    fn edges_resolve_ids_to_columns() {
        let sentence = Sentence {
            segments: vec![
                segment(usize::MAX, Some(5), &["a"]),
                segment(5, None, &["b"]),
                segment(9, Some(42), &["c"]),
            ],
        };
        let edges: Vec<_> = sentence.edges().collect();
        assert_eq!(edges, vec![(2, 1)]);
    }
}
