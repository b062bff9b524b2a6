use serde::Serialize;
use utoipa::ToSchema;

use super::model::{NoteFields, NoteInput};

pub const TITLE_MAX_CHARS: usize = 200;

pub const REQUIRED_MESSAGE: &str = "This field is required.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if let Some(msg) = &self.title {
            parts.push(format!("title: {msg}"));
        }
        if let Some(msg) = &self.content {
            parts.push(format!("content: {msg}"));
        }
        f.write_str(&parts.join("; "))
    }
}

pub fn title_too_long_message(len: usize) -> String {
    format!("Ensure this value has at most {TITLE_MAX_CHARS} characters (it has {len}).")
}

pub fn validate_note(input: &NoteInput) -> Result<NoteFields, FieldErrors> {
    let title = input.title.as_deref().map(str::trim).unwrap_or_default();
    let content = input.content.as_deref().map(str::trim).unwrap_or_default();

    let mut errors = FieldErrors::default();

    if title.is_empty() {
        errors.title = Some(REQUIRED_MESSAGE.to_string());
    } else {
        let len = title.chars().count();
        if len > TITLE_MAX_CHARS {
            errors.title = Some(title_too_long_message(len));
        }
    }

    if content.is_empty() {
        errors.content = Some(REQUIRED_MESSAGE.to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NoteFields {
        title: title.to_string(),
        content: content.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_is_returned_trimmed() {
        let fields = validate_note(&NoteInput::new("  Hi  ", "\n  Body \t")).unwrap();
        assert_eq!(fields.title, "Hi");
        assert_eq!(fields.content, "Body");
    }

    #[test]
    fn inner_whitespace_is_kept() {
        let fields = validate_note(&NoteInput::new(" a  b ", "line one\n\nline two ")).unwrap();
        assert_eq!(fields.title, "a  b");
        assert_eq!(fields.content, "line one\n\nline two");
    }

    #[test]
    fn empty_and_blank_titles_are_required() {
        for title in ["", " ", "\t\n", "   \u{3000} "] {
            let errors = validate_note(&NoteInput::new(title, "content")).unwrap_err();
            assert_eq!(errors.title.as_deref(), Some(REQUIRED_MESSAGE), "{title:?}");
            assert_eq!(errors.content, None);
        }
    }

    #[test]
    fn empty_and_blank_contents_are_required() {
        for content in ["", "   ", "\n\n"] {
            let errors = validate_note(&NoteInput::new("title", content)).unwrap_err();
            assert_eq!(errors.content.as_deref(), Some(REQUIRED_MESSAGE));
            assert_eq!(errors.title, None);
        }
    }

    #[test]
    fn missing_fields_are_reported_together() {
        let errors = validate_note(&NoteInput::default()).unwrap_err();
        assert_eq!(errors.title.as_deref(), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.content.as_deref(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn title_length_limit_counts_trimmed_characters() {
        let at_limit = "x".repeat(TITLE_MAX_CHARS);
        assert!(validate_note(&NoteInput::new(format!("  {at_limit}  "), "c")).is_ok());

        let errors = validate_note(&NoteInput::new("x".repeat(201), "c")).unwrap_err();
        assert_eq!(
            errors.title.as_deref(),
            Some("Ensure this value has at most 200 characters (it has 201).")
        );

        let errors = validate_note(&NoteInput::new("x".repeat(250), "c")).unwrap_err();
        assert_eq!(errors.title, Some(title_too_long_message(250)));
    }

    #[test]
    fn title_length_counts_chars_not_bytes() {
        let title = "é".repeat(TITLE_MAX_CHARS);
        assert!(validate_note(&NoteInput::new(title, "c")).is_ok());
    }

    #[test]
    fn content_has_no_upper_bound() {
        let content = "y".repeat(100_000);
        let fields = validate_note(&NoteInput::new("t", content.clone())).unwrap();
        assert_eq!(fields.content, content);
    }

    #[test]
    fn field_errors_serialize_only_failing_fields() {
        let errors = validate_note(&NoteInput::new("ok", "")).unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "content": REQUIRED_MESSAGE }));
    }
}
