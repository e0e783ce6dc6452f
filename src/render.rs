//! LaTeX generation for tikz-dependency
//!
//! One standalone document per sentence: a `deptext` row with the surface
//! text of every segment, followed by one `\depedge` per non-root segment.

use std::borrow::Cow;

use crate::ast::Sentence;
use crate::config::StyleConfig;

/// Column separator inside `deptext` (tikz-dependency's ampersand replacement).
pub const COLUMN_SEPARATOR: &str = r" \& ";
/// Row terminator inside `deptext`.
pub const ROW_END: &str = r" \\";

const FOOTER: &str = "\\end{document}\n";

/// Render one sentence as a complete LaTeX document.
pub fn render(sentence: &Sentence, config: &StyleConfig) -> String {
    let mut out = header(config);

    out.push_str(&format!("\\begin{{dependency}}[{}]\n", config.dep_opt));
    out.push_str(&format!("\\begin{{deptext}}[{}]\n", config.deptext_opt));
    out.push_str(&token_row(sentence));
    out.push('\n');
    out.push_str("\\end{deptext}\n");
    for edge in edge_directives(sentence) {
        out.push_str(&edge);
        out.push('\n');
    }
    out.push_str("\\end{dependency}\n");

    out.push_str(FOOTER);
    out
}

/// Render every sentence, each document followed by a blank line.
pub fn render_all(sentences: &[Sentence], config: &StyleConfig) -> String {
    let mut out = String::new();
    for sentence in sentences {
        out.push_str(&render(sentence, config));
        out.push('\n');
    }
    out
}

fn header(config: &StyleConfig) -> String {
    format!(
        "\\documentclass{{{}}}\n\
         \\usepackage{{tikz-dependency}}\n\
         \\usepackage{{zxjatype}}\n\
         \\setjamainfont[Scale=0.8]{{{}}}\n\
         \\begin{{document}}\n",
        config.doc_class, config.font
    )
}

/// The `deptext` row: escaped surface texts joined by `\&`, ended by `\\`.
pub fn token_row(sentence: &Sentence) -> String {
    let cells: Vec<String> = sentence
        .segments
        .iter()
        .map(|seg| escape_latex(&seg.surface_text()).into_owned())
        .collect();
    format!("{}{}", cells.join(COLUMN_SEPARATOR), ROW_END)
}

/// `\depedge{head}{dependent}{}` for each non-root segment, in segment order.
///
/// Endpoints are token-row columns, which tikz-dependency counts from 1.
pub fn edge_directives(sentence: &Sentence) -> impl Iterator<Item = String> + '_ {
    sentence
        .edges()
        .map(|(head, dependent)| format!("\\depedge{{{head}}}{{{dependent}}}{{}}"))
}

/// Escape the characters LaTeX treats specially in running text.
pub fn escape_latex(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '&', '%', '$', '#', '_', '{', '}', '~', '^']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            // a bare `\&` would start a new column
            '&' => out.push_str(r"\char38{}"),
            '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
