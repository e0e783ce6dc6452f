//! cabotikz: turn CaboCha dependency parses into tikz-dependency diagrams
//!
//! Input is the lattice format printed by `cabocha -f1`; output is one
//! standalone LaTeX document per sentence, meant to be compiled with XeLaTeX.
//!
//! ```
//! use cabotikz::{StyleConfig, parse, render};
//!
//! let input = "\
//! * 0 1D 0/1 0.0
//! 太郎\t名詞,固有名詞,人名,名,*,*,太郎,タロウ,タロー
//! は\t助詞,係助詞,*,*,*,*,は,ハ,ワ
//! * 1 -1D 0/0 0.0
//! 走る\t動詞,自立,*,*,五段・ラ行,基本形,走る,ハシル,ハシル
//! EOS
//! ";
//!
//! let sentences = parse::parse(input).unwrap();
//! let latex = render::render(&sentences[0], &StyleConfig::default());
//! assert!(latex.contains(r"太郎は \& 走る \\"));
//! assert!(latex.contains(r"\depedge{2}{1}{}"));
//! ```

pub mod ast;
pub mod config;
pub mod errors;
pub mod parse;
pub mod render;

pub use ast::{Segment, SegmentId, Sentence, Token};
pub use config::{Platform, StyleConfig, default_font};
pub use errors::{FormatError, SourceContext};

/// Convert CaboCha output to LaTeX.
///
/// The whole input is parsed before anything is rendered, so a malformed line
/// anywhere yields an error and no documents at all.
pub fn convert(ctx: &SourceContext, config: &StyleConfig) -> Result<String, miette::Report> {
    let sentences = parse::parse_source(ctx)?;
    tracing::debug!(sentences = sentences.len(), source = %ctx.name, "parsed input");
    Ok(render::render_all(&sentences, config))
}
