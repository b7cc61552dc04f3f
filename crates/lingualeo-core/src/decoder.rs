//! Decoding of `gettranslates` responses
//!
//! The wire schema is private to this module. Only the fields the rest of the
//! crate needs are read; everything else in the payload is ignored.

use serde::Deserialize;

use crate::error::FetchError;
use crate::ranking::rank_translations;
use crate::types::{TranslationCandidate, WordForm, WordResult};

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    error_msg: Option<String>,
    translate: Option<Vec<WireTranslation>>,
    #[serde(default)]
    transcription: Option<String>,
    #[serde(default)]
    sound_url: Option<String>,
    #[serde(default)]
    pic_url: Option<String>,
    #[serde(default)]
    is_user: Option<u8>,
    #[serde(default)]
    word_forms: Option<Vec<WordForm>>,
}

#[derive(Debug, Deserialize)]
struct WireTranslation {
    value: String,
    votes: u64,
}

/// A decoded but not yet ranked lookup result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedResponse {
    /// Metadata filled in, `translations` still empty
    pub result: WordResult,
    /// Candidates in payload order
    pub candidates: Vec<TranslationCandidate>,
}

impl DecodedResponse {
    /// Rank the candidates into the result's translation list
    pub fn into_ranked(self) -> WordResult {
        let mut result = self.result;
        result.translations = rank_translations(self.candidates);
        result
    }
}

/// Decode a raw response body for `word`
pub fn decode_response(word: &str, body: &[u8]) -> Result<DecodedResponse, FetchError> {
    let wire: WireResponse = serde_json::from_slice(body)
        .map_err(|e| FetchError::malformed(format!("cannot decode response: {}", e)))?;

    if let Some(message) = wire.error_msg.as_deref().filter(|m| !m.is_empty()) {
        return Err(FetchError::malformed(format!("service error: {}", message)));
    }

    let translate = wire
        .translate
        .ok_or_else(|| FetchError::malformed("cannot decode response: missing field `translate`"))?;

    let candidates = translate
        .into_iter()
        .map(|t| TranslationCandidate::new(t.value, t.votes))
        .collect();

    let result = WordResult {
        word: word.to_string(),
        translations: Vec::new(),
        transcription: wire.transcription,
        sound_url: wire.sound_url,
        picture_url: wire.pic_url,
        in_dictionary: wire.is_user.unwrap_or(0) != 0,
        word_forms: wire.word_forms.unwrap_or_default(),
    };

    Ok(DecodedResponse { result, candidates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;
    use pretty_assertions::assert_eq;

    const PAYLOAD: &str = r#"{"error_msg":"","translate_source":"base","is_user":0,
        "word_forms":[{"word":"accomodation","type":"прил."}],
        "pic_url":"http:\/\/contentcdn.lingualeo.com\/uploads\/picture\/3589594.png",
        "translate":[
            {"id":33404925,"value":"размещение; жильё","votes":6261,"is_user":0},
            {"id":2569250,"value":"жильё","votes":5703,"is_user":0},
            {"id":2718711,"value":"проживание","votes":1589,"is_user":0},
            {"id":185932,"value":"размещение","votes":880,"is_user":0},
            {"id":2735899,"value":"помещение","votes":268,"is_user":0}
        ],
        "transcription":"əkəədˈeɪːʃən","word_id":102085,"word_top":0,
        "sound_url":"http:\/\/audiocdn.lingualeo.com\/v2\/3\/102085-631152000.mp3"}"#;

    #[test]
    fn test_decode_keeps_payload_order() {
        let decoded = decode_response("accomodation", PAYLOAD.as_bytes()).unwrap();
        let values: Vec<&str> = decoded.candidates.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["размещение; жильё", "жильё", "проживание", "размещение", "помещение"]
        );
        assert_eq!(decoded.candidates[0].votes, 6261);
        assert!(decoded.result.translations.is_empty());
    }

    #[test]
    fn test_decode_metadata() {
        let decoded = decode_response("accomodation", PAYLOAD.as_bytes()).unwrap();
        let result = decoded.result;
        assert_eq!(result.word, "accomodation");
        assert_eq!(result.transcription.as_deref(), Some("əkəədˈeɪːʃən"));
        assert_eq!(
            result.sound_url.as_deref(),
            Some("http://audiocdn.lingualeo.com/v2/3/102085-631152000.mp3")
        );
        assert_eq!(
            result.picture_url.as_deref(),
            Some("http://contentcdn.lingualeo.com/uploads/picture/3589594.png")
        );
        assert!(!result.in_dictionary);
        assert_eq!(result.word_forms.len(), 1);
        assert_eq!(result.word_forms[0].kind, "прил.");
    }

    #[test]
    fn test_decode_then_rank() {
        let result = decode_response("accomodation", PAYLOAD.as_bytes())
            .unwrap()
            .into_ranked();
        assert_eq!(
            result.translations,
            vec!["жильё", "проживание", "размещение", "помещение"]
        );
    }

    #[test]
    fn test_empty_translate_list() {
        let result = decode_response("zzz", br#"{"error_msg":"","translate":[]}"#)
            .unwrap()
            .into_ranked();
        assert!(result.translations.is_empty());
        assert_eq!(result.transcription, None);
    }

    #[test]
    fn test_is_user_flag() {
        let decoded = decode_response("cat", br#"{"translate":[],"is_user":1}"#).unwrap();
        assert!(decoded.result.in_dictionary);
    }

    #[test]
    fn test_not_json() {
        let err = decode_response("cat", b"<html>502</html>").unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::MalformedResponse);
    }

    #[test]
    fn test_missing_translate_field() {
        let err = decode_response("cat", br#"{"error_msg":""}"#).unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::MalformedResponse);
        assert!(err.message.contains("translate"));
    }

    #[test]
    fn test_wrong_vote_type() {
        let err = decode_response(
            "cat",
            r#"{"translate":[{"value":"кот","votes":"many"}]}"#.as_bytes(),
        )
        .unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::MalformedResponse);
    }

    #[test]
    fn test_null_word_forms() {
        let decoded = decode_response(
            "cat",
            br#"{"translate":[{"value":"cat-ru","votes":1}],"word_forms":null}"#,
        )
        .unwrap();
        assert!(decoded.result.word_forms.is_empty());
        assert_eq!(decoded.candidates.len(), 1);
    }

    #[test]
    fn test_word_form_without_word() {
        let decoded = decode_response(
            "cat",
            br#"{"translate":[{"value":"cat-ru","votes":1}],"word_forms":[{"type":"noun"}]}"#,
        )
        .unwrap();
        assert_eq!(decoded.result.word_forms.len(), 1);
        assert_eq!(decoded.result.word_forms[0].word, "");
        assert_eq!(decoded.result.word_forms[0].kind, "noun");
    }

    #[test]
    fn test_service_error_message() {
        let err = decode_response("cat", br#"{"error_msg":"Word not found"}"#).unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::MalformedResponse);
        assert_eq!(err.message, "service error: Word not found");
    }
}
