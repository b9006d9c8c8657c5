//! Question validation, alias generation, and lifecycle status.

use crate::error::CoreError;
use crate::tags;

/// Maximum length for a question title.
pub const MAX_TITLE_LEN: usize = 255;

/// Lifecycle status of a question. Stored as a SMALLINT column.
///
/// Every question is created as `Published`; draft support exists in the
/// schema but is not set by the creation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    Draft,
    Published,
}

impl QuestionStatus {
    pub fn as_i16(self) -> i16 {
        match self {
            QuestionStatus::Draft => 0,
            QuestionStatus::Published => 1,
        }
    }

    /// Unknown discriminants map to `Published`, the creation default.
    pub fn from_i16(value: i16) -> Self {
        match value {
            0 => QuestionStatus::Draft,
            _ => QuestionStatus::Published,
        }
    }
}

/// Generate a URL-safe alias from a question title.
///
/// Converts to lowercase, replaces non-alphanumeric characters with hyphens,
/// collapses consecutive hyphens, and trims leading/trailing hyphens. The
/// alias is derived exactly once at creation and never recomputed on update.
pub fn generate_alias(title: &str) -> String {
    let raw: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    let mut alias = String::with_capacity(raw.len());
    let mut prev_hyphen = false;
    for c in raw.chars() {
        if c == '-' {
            if !prev_hyphen {
                alias.push('-');
            }
            prev_hyphen = true;
        } else {
            alias.push(c);
            prev_hyphen = false;
        }
    }

    alias.trim_matches('-').to_string()
}

/// Validate the required fields of a new question.
///
/// Title, content and tags must all be non-empty after trimming; the tags
/// string must decode to at least one tag name.
pub fn validate_new_question(title: &str, content: &str, tags_str: &str) -> Result<(), CoreError> {
    validate_title(title)?;
    validate_content(content)?;
    validate_tags(tags_str)?;
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::validation("title", "Title must not be empty"));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::validation(
            "title",
            format!("Title must not exceed {MAX_TITLE_LEN} characters"),
        ));
    }
    Ok(())
}

pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::validation("content", "Content must not be empty"));
    }
    Ok(())
}

pub fn validate_tags(tags_str: &str) -> Result<(), CoreError> {
    if tags::string_to_list(tags_str).is_empty() {
        return Err(CoreError::validation(
            "tags",
            "At least one tag is required",
        ));
    }
    Ok(())
}
