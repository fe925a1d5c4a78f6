//! Data model: FAQ entries and the render input they belong to.

use serde::{Deserialize, Serialize};

/// A single question/answer pair.
///
/// Both fields are free text and default to empty. An entry only reaches
/// the generated HTML when [`is_complete`](FaqEntry::is_complete) holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Both question and answer are non-empty. Whitespace counts as content.
    pub fn is_complete(&self) -> bool {
        !self.question.is_empty() && !self.answer.is_empty()
    }
}

/// Which half of an [`FaqEntry`] an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqField {
    Question,
    Answer,
}

/// Everything the renderer consumes.
///
/// Every field is optional in serialized form, so a partial document
/// (say, only a description) deserializes cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderInput {
    /// Text shown in bold before the description. Empty means absent.
    #[serde(alias = "bold_text_start", skip_serializing_if = "Option::is_none")]
    pub lead_bold_text: Option<String>,
    /// Free text; `**bold**` and `[label](url)` markup is expanded.
    pub description: String,
    /// Entries in creation order. The renderer accepts any length.
    pub faqs: Vec<FaqEntry>,
}

impl RenderInput {
    /// Lead text, treating `Some("")` the same as `None`.
    pub fn lead(&self) -> Option<&str> {
        self.lead_bold_text.as_deref().filter(|s| !s.is_empty())
    }

    /// Entries that will appear in the output, in order.
    pub fn complete_faqs(&self) -> impl Iterator<Item = &FaqEntry> {
        self.faqs.iter().filter(|f| f.is_complete())
    }
}
