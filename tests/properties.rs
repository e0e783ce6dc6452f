//! Structural checks on rendered documents
//!
//! Runs over the well-formed fixtures and over generated trees, and reads the
//! result back with regexes rather than trusting the renderer's own helpers.

use cabotikz::parse::parse;
use cabotikz::render::render;
use cabotikz::{FormatError, Platform, Segment, Sentence, StyleConfig, Token};
use regex_lite::Regex;

const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data");

fn style() -> StyleConfig {
    StyleConfig::for_platform(Platform::Linux)
}

fn well_formed_inputs() -> Vec<(String, String)> {
    let mut inputs = Vec::new();
    for entry in std::fs::read_dir(DATA_DIR).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_some_and(|ext| ext == "cabocha")
            && path.with_extension("tex").exists()
        {
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            inputs.push((name, std::fs::read_to_string(&path).unwrap()));
        }
    }
    inputs.sort();
    assert!(!inputs.is_empty(), "no fixtures found in {DATA_DIR}");
    inputs
}

/// A sentence of `n` segments where segment `i` depends on `head_of(i)`.
fn generated(n: usize, head_of: impl Fn(usize) -> Option<usize>) -> String {
    relabelled(n, |i| i, head_of)
}

/// Like [`generated`], but the header of segment `i` carries `id_of(i)`
/// and heads are written through `id_of` too.
fn relabelled(
    n: usize,
    id_of: impl Fn(usize) -> usize,
    head_of: impl Fn(usize) -> Option<usize>,
) -> String {
    let mut input = String::new();
    for i in 0..n {
        let id = id_of(i);
        let head = head_of(i).map_or("-1".to_string(), |h| id_of(h).to_string());
        input.push_str(&format!("* {id} {head}D 0/1 0.0\nw{i}\t名詞,一般\n"));
    }
    input.push_str("EOS\n");
    input
}

fn generated_inputs() -> Vec<(String, String)> {
    let mut inputs = Vec::new();
    for n in 1..=12 {
        // every segment depends on the next, the last is the root
        inputs.push((
            format!("chain-{n}"),
            generated(n, |i| (i + 1 < n).then_some(i + 1)),
        ));
        // everything hangs off segment 0
        inputs.push((format!("star-{n}"), generated(n, |i| (i > 0).then_some(0))));
    }
    inputs
}

fn check_sentence(name: &str, sentence: &Sentence) {
    let edge_re = Regex::new(r"\\depedge\{(\d+)\}\{(\d+)\}\{\}").unwrap();
    let row_re = Regex::new(r"(?m)^\\begin\{deptext\}\[[^\]]*\]\n(.*) \\\\\n\\end\{deptext\}$").unwrap();

    let doc = render(sentence, &style());
    let n = sentence.len();

    let row = &row_re.captures(&doc).unwrap()[1];
    let fields = if n == 0 { 0 } else { row.split(r" \& ").count() };
    assert_eq!(fields, n, "{name}: token row {row:?} has wrong field count");

    let edges: Vec<(usize, usize)> = edge_re
        .captures_iter(&doc)
        .map(|caps| (caps[1].parse().unwrap(), caps[2].parse().unwrap()))
        .collect();
    let expected: Vec<(usize, usize)> = sentence
        .segments
        .iter()
        .filter_map(|seg| seg.head.map(|head| (head + 1, seg.id + 1)))
        .collect();
    assert_eq!(edges, expected, "{name}: edges do not follow heads");

    let roots = sentence.segments.iter().filter(|seg| seg.is_root()).count();
    assert_eq!(edges.len(), n - roots, "{name}: roots must not produce edges");

    for &(from, to) in &edges {
        assert!((1..=n).contains(&from), "{name}: edge start {from} out of range");
        assert!((1..=n).contains(&to), "{name}: edge end {to} out of range");
    }
}

#[test]
fn rendered_structure_matches_parse() {
    for (name, input) in well_formed_inputs().into_iter().chain(generated_inputs()) {
        let sentences = parse(&input).unwrap_or_else(|e| panic!("{name}: {e}"));
        for sentence in &sentences {
            check_sentence(&name, sentence);
        }
    }
}

#[test]
fn non_positional_ids_are_rejected() {
    let chain = |n: usize| move |i: usize| (i + 1 < n).then_some(i + 1);
    for n in 1..=8 {
        let cases = [
            ("shifted", relabelled(n, |i| i + 1, chain(n))),
            ("doubled", relabelled(n, |i| i * 2 + 1, chain(n))),
            ("reversed", relabelled(n, |i| n - 1 - i, chain(n))),
            ("repeated", relabelled(n + 1, |i| i.saturating_sub(1), chain(n + 1))),
            ("huge", relabelled(n, |i| usize::MAX - i, chain(n))),
        ];
        for (name, input) in cases {
            if name == "reversed" && n == 1 {
                continue;
            }
            let err = parse(&input).expect_err(name);
            assert!(
                matches!(err, FormatError::MisplacedSegment { .. }),
                "{name}-{n}: unexpected error {err:?}"
            );
        }
    }
}

#[test]
fn hand_built_sentences_render_in_range() {
    // ids that never went through the parser
    for n in 1..=8 {
        let segments = (0..n)
            .map(|i| {
                let mut seg = Segment::new(usize::MAX - 3 * i, (i + 1 < n).then(|| usize::MAX - 3 * (i + 1)));
                seg.push(Token::new(format!("w{i}")));
                seg
            })
            .collect();
        let sentence = Sentence { segments };
        let edge_re = Regex::new(r"\\depedge\{(\d+)\}\{(\d+)\}\{\}").unwrap();
        let doc = render(&sentence, &style());
        let edges: Vec<(usize, usize)> = edge_re
            .captures_iter(&doc)
            .map(|caps| (caps[1].parse().unwrap(), caps[2].parse().unwrap()))
            .collect();
        let expected: Vec<(usize, usize)> = (1..n).map(|col| (col + 1, col)).collect();
        assert_eq!(edges, expected, "n = {n}");
    }
}

#[test]
fn one_document_per_sentence() {
    let chain = generated(4, |i| (i + 1 < 4).then_some(i + 1));
    let input = chain.repeat(5);
    let sentences = parse(&input).unwrap();
    assert_eq!(sentences.len(), 5);
    let out = cabotikz::render::render_all(&sentences, &style());
    assert_eq!(out.matches("\\begin{document}").count(), 5);
    assert_eq!(out.matches("\\end{document}\n\n").count(), 5);
}
