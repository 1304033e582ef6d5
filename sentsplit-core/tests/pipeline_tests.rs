//! End-to-end tests for the line pipeline with the built-in English rules

use proptest::prelude::*;
use sentsplit_core::{RuleSegmenter, RunSummary, SentenceSplitter, SplitError};

fn english_splitter() -> SentenceSplitter<RuleSegmenter> {
    SentenceSplitter::new(RuleSegmenter::for_language("en").unwrap())
}

fn split(input: &str) -> String {
    let mut output = Vec::new();
    english_splitter()
        .run(input.as_bytes(), &mut output)
        .unwrap();
    String::from_utf8(output).unwrap()
}

fn non_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn test_single_document_two_sentences() {
    assert_eq!(
        split("Hello world. How are you?"),
        "Hello world.\nHow are you?\n\n"
    );
}

#[test]
fn test_two_documents() {
    assert_eq!(
        split("Doc one. Sentence two.\nSecond doc.\n"),
        "Doc one.\nSentence two.\n\nSecond doc.\n\n"
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(split(""), "");
}

#[test]
fn test_abbreviations_do_not_split() {
    assert_eq!(
        split("Dr. Smith went to the store. He bought milk.\n"),
        "Dr. Smith went to the store.\nHe bought milk.\n\n"
    );
}

#[test]
fn test_german_rules() {
    let splitter = SentenceSplitter::new(RuleSegmenter::for_language("de").unwrap());
    let mut output = Vec::new();
    let summary = splitter
        .run("Das ist z.B. ein Test. Prof. Müller kommt.\n".as_bytes(), &mut output)
        .unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Das ist z.B. ein Test.\nProf. Müller kommt.\n\n"
    );
    assert_eq!(summary, RunSummary { documents: 1, sentences: 2 });
}

#[test]
fn test_unknown_language() {
    let err = RuleSegmenter::for_language("xx-unknown").unwrap_err();
    assert!(matches!(err, SplitError::ModelUnavailable { .. }));
    assert!(err.to_string().contains("xx-unknown"));
}

#[test]
fn test_external_language_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        r#"
[metadata]
code = "en-x"
name = "English (custom)"

[abbreviations]
custom = ["Approx"]
"#,
    )
    .unwrap();

    let segmenter = RuleSegmenter::from_config_file(&path).unwrap();
    assert_eq!(segmenter.rules().code(), "en-x");
    let splitter = SentenceSplitter::new(segmenter);

    let sentences: Vec<&str> = splitter
        .split_document("Dr. Who is here. Approx. Ten people came.")
        .collect();
    assert_eq!(
        sentences,
        vec!["Dr.", "Who is here.", "Approx. Ten people came."]
    );
}

fn prose_document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            "[A-Za-z]{1,8}",
            prop::sample::select(vec![" ", " ", ". ", "? ", "! ", ", ", ".  "]),
        ),
        0..20,
    )
    .prop_map(|words| words.into_iter().map(|(w, sep)| w + sep).collect())
}

proptest! {
    #[test]
    fn prop_one_block_per_input_line(docs in prop::collection::vec(prose_document(), 0..8)) {
        let input: String = docs.iter().map(|d| format!("{d}\n")).collect();
        let output = split(&input);

        let separators = output.lines().filter(|line| line.is_empty()).count();
        prop_assert_eq!(separators, docs.len());
        prop_assert_eq!(output.is_empty(), docs.is_empty());
    }

    #[test]
    fn prop_sentences_reconstruct_document(doc in "[^\n\r]{0,80}") {
        let splitter = english_splitter();
        let joined: String = splitter.split_document(&doc).collect();
        prop_assert_eq!(non_whitespace(&joined), non_whitespace(&doc));
        for sentence in splitter.split_document(&doc) {
            prop_assert!(!sentence.is_empty());
            prop_assert_eq!(sentence, sentence.trim());
        }
    }

    #[test]
    fn prop_output_is_deterministic(docs in prop::collection::vec(prose_document(), 0..5)) {
        let input = docs.join("\n");
        prop_assert_eq!(split(&input), split(&input));
    }
}
