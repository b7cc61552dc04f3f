// Tests for lookup result formatting
//
// These tests cover the human rendering of successes and failures and the
// machine formats that wrap whole outcome batches.

use super::*;
use lingualeo_core::{FetchError, WordForm};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn accomodation() -> WordResult {
    WordResult {
        word: "accomodation".to_string(),
        translations: vec![
            "жильё".to_string(),
            "проживание".to_string(),
            "размещение".to_string(),
            "помещение".to_string(),
        ],
        transcription: Some("əkɒməˈdeɪʃn".to_string()),
        sound_url: Some("http://audiocdn.lingualeo.com/v2/0/26588-631152000.mp3".to_string()),
        ..WordResult::new("accomodation")
    }
}

#[test]
fn test_word_result_human() {
    let formatted = format_word_result_human(&accomodation(), false);
    assert_eq!(
        formatted,
        "accomodation [əkɒməˈdeɪʃn]\n  1. жильё\n  2. проживание\n  3. размещение\n  4. помещение\n"
    );
}

#[test]
fn test_word_result_human_without_translations() {
    let mut result = WordResult::new("qwzx");
    result.in_dictionary = true;
    let formatted = format_word_result_human(&result, false);
    assert_eq!(formatted, "qwzx (in dictionary)\n  no translations found\n");
}

#[test]
fn test_word_forms_listed() {
    let mut result = WordResult::new("went");
    result.translations = vec!["пошёл".to_string()];
    result.word_forms = vec![WordForm {
        word: "go".to_string(),
        kind: "past tense".to_string(),
    }];
    let formatted = format_word_result_human(&result, false);
    assert!(formatted.contains("  forms: go (past tense)\n"));
}

#[test]
fn test_failure_human() {
    let outcome = FetchOutcome::Failure {
        word: "tree".to_string(),
        error: FetchError::transport("connection refused"),
    };
    assert_eq!(
        format_outcome_human(&outcome, false),
        "tree: transport error: connection refused\n"
    );
}

#[test]
fn test_outcomes_json_is_tagged_array() {
    let outcomes = vec![
        FetchOutcome::Success(accomodation()),
        FetchOutcome::Failure {
            word: "tree".to_string(),
            error: FetchError::malformed("missing translate"),
        },
    ];
    let formatted = OutputFormat::Json.format_outcomes(&outcomes, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&formatted).unwrap();
    assert_eq!(value[0]["status"], "success");
    assert_eq!(value[0]["translations"][0], "жильё");
    assert_eq!(value[1]["status"], "failure");
    assert_eq!(value[1]["error"]["kind"], "malformed_response");
}

#[test]
fn test_outcomes_yaml() {
    let outcomes = vec![FetchOutcome::Success(accomodation())];
    let formatted = OutputFormat::Yaml.format_outcomes(&outcomes, false).unwrap();
    assert!(formatted.contains("word: accomodation"));
    assert!(formatted.contains("status: success"));
}

#[test]
fn test_writer_outcomes_human() {
    let buffer = SharedBuffer::default();
    let mut writer =
        OutputWriter::with_writer(OutputFormat::Human, false, false, Box::new(buffer.clone()));
    writer
        .outcomes(&[
            FetchOutcome::Success(accomodation()),
            FetchOutcome::Failure {
                word: "tree".to_string(),
                error: FetchError::transport("timed out"),
            },
        ])
        .unwrap();

    let contents = buffer.contents();
    assert!(contents.starts_with("accomodation [əkɒməˈdeɪʃn]\n"));
    assert!(contents.ends_with("tree: transport error: timed out\n"));
}

#[test]
fn test_writer_messages_suppressed_for_machine_formats() {
    let buffer = SharedBuffer::default();
    let mut writer =
        OutputWriter::with_writer(OutputFormat::Json, false, false, Box::new(buffer.clone()));
    writer.info("Logging in").unwrap();
    writer.warning("already in dictionary").unwrap();
    writer.section("Added").unwrap();
    assert_eq!(buffer.contents(), "");
}

#[test]
fn test_writer_quiet_keeps_warnings() {
    let buffer = SharedBuffer::default();
    let mut writer =
        OutputWriter::with_writer(OutputFormat::Human, false, true, Box::new(buffer.clone()));
    writer.info("Logging in").unwrap();
    writer.success("Added").unwrap();
    writer.warning("house is already in your dictionary").unwrap();
    assert_eq!(buffer.contents(), "WARNING: house is already in your dictionary\n");
}

#[test]
fn test_no_spinner_with_custom_writer() {
    let writer = OutputWriter::with_writer(OutputFormat::Human, false, false, Box::new(io::sink()));
    assert!(writer.spinner("Translating").is_none());
    assert!(writer.is_human());
}
