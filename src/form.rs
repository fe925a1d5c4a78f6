//! Form session: the editable state behind the FAQ generator.
//!
//! A [`FaqForm`] holds the field values, the FAQ list, the last generated
//! output and the copied acknowledgement. Each user action is one method
//! call. Output is only recomputed by [`FaqForm::render`]; editing a field
//! while output is shown leaves the output as it was.

use tracing::{debug, warn};

use crate::clipboard::{Acknowledgement, Clipboard};
use crate::error::{Error, Result};
use crate::render_html;
use crate::types::{FaqEntry, FaqField, RenderInput};

/// Number of empty entries a fresh form starts with.
pub const INITIAL_FAQS: usize = 4;

/// Editable state of one FAQ generator session.
///
/// # Example
///
/// ```
/// use faq_html::{FaqField, FaqForm};
///
/// let mut form = FaqForm::new();
/// form.set_description("Browse our **new range**.");
/// form.update_faq(0, FaqField::Question, "Do you ship abroad?").unwrap();
/// form.update_faq(0, FaqField::Answer, "Yes, worldwide.").unwrap();
///
/// let html = form.render();
/// assert!(html.contains("<strong>new range</strong>"));
/// assert!(html.contains(">Do you ship abroad?</h5>"));
/// ```
#[derive(Debug)]
pub struct FaqForm {
    lead_bold_text: String,
    description: String,
    faqs: Vec<FaqEntry>,
    generated: Option<String>,
    copied: Acknowledgement,
}

// A clone is a separate session: it gets its own acknowledgement flag.
impl Clone for FaqForm {
    fn clone(&self) -> Self {
        FaqForm {
            lead_bold_text: self.lead_bold_text.clone(),
            description: self.description.clone(),
            faqs: self.faqs.clone(),
            generated: self.generated.clone(),
            copied: Acknowledgement::new(),
        }
    }
}

impl Default for FaqForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FaqForm {
    /// A blank form with [`INITIAL_FAQS`] empty entries and no output.
    pub fn new() -> Self {
        FaqForm {
            lead_bold_text: String::new(),
            description: String::new(),
            faqs: vec![FaqEntry::default(); INITIAL_FAQS],
            generated: None,
            copied: Acknowledgement::new(),
        }
    }

    /// Seed a form from a render input. An empty FAQ list gets one blank
    /// entry so the list is never empty.
    pub fn from_input(input: RenderInput) -> Self {
        let mut faqs = input.faqs;
        if faqs.is_empty() {
            faqs.push(FaqEntry::default());
        }
        FaqForm {
            lead_bold_text: input.lead_bold_text.unwrap_or_default(),
            description: input.description,
            faqs,
            generated: None,
            copied: Acknowledgement::new(),
        }
    }

    /// Snapshot of the current inputs.
    pub fn input(&self) -> RenderInput {
        RenderInput {
            lead_bold_text: Some(self.lead_bold_text.clone()).filter(|s| !s.is_empty()),
            description: self.description.clone(),
            faqs: self.faqs.clone(),
        }
    }

    // -- Field edits ----------------------------------------------------

    pub fn lead_bold_text(&self) -> &str {
        &self.lead_bold_text
    }

    pub fn set_lead_bold_text(&mut self, text: impl Into<String>) {
        self.lead_bold_text = text.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    // -- FAQ list -------------------------------------------------------

    pub fn faqs(&self) -> &[FaqEntry] {
        &self.faqs
    }

    /// Append an empty entry and return its index.
    pub fn add_faq(&mut self) -> usize {
        self.faqs.push(FaqEntry::default());
        self.faqs.len() - 1
    }

    /// Whether an entry may be removed. False when only one is left.
    pub fn can_remove(&self) -> bool {
        self.faqs.len() > 1
    }

    /// Remove the entry at `index`.
    ///
    /// Returns `false` without changing anything when it is the last
    /// remaining entry or `index` is out of range.
    pub fn remove_faq(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.faqs.len() {
            return false;
        }
        self.faqs.remove(index);
        true
    }

    /// Replace one field of the entry at `index`.
    pub fn update_faq(&mut self, index: usize, field: FaqField, value: impl Into<String>) -> Result<()> {
        let len = self.faqs.len();
        let entry = self.faqs.get_mut(index).ok_or(Error::FaqIndex { index, len })?;
        match field {
            FaqField::Question => entry.question = value.into(),
            FaqField::Answer => entry.answer = value.into(),
        }
        Ok(())
    }

    // -- Render and copy ------------------------------------------------

    /// Recompute the output from the current inputs and return it.
    pub fn render(&mut self) -> &str {
        let html = render_html::to_html(&self.input());
        self.generated.insert(html).as_str()
    }

    /// Output of the last [`render`](Self::render), if any.
    pub fn generated(&self) -> Option<&str> {
        self.generated.as_deref()
    }

    /// Write the current output to `clipboard` and show the copied
    /// acknowledgement.
    ///
    /// Clipboard failures are logged and otherwise ignored; the
    /// acknowledgement is shown either way. Copying before any render
    /// writes an empty string.
    ///
    /// # Errors
    ///
    /// [`Error::NoRuntime`] when called outside a Tokio runtime. The
    /// clipboard is left untouched in that case.
    pub fn copy<C: Clipboard + ?Sized>(&self, clipboard: &mut C) -> Result<()> {
        // Nothing is written unless the reset can be scheduled.
        let handle = tokio::runtime::Handle::try_current().map_err(|_| Error::NoRuntime)?;
        let text = self.generated.as_deref().unwrap_or_default();
        if let Err(e) = clipboard.set_text(text) {
            warn!(error = %e, "clipboard write failed");
        }
        self.copied.trigger_on(&handle);
        debug!(bytes = text.len(), "copied generated HTML");
        Ok(())
    }

    /// Whether the copied acknowledgement is currently shown.
    pub fn is_copied(&self) -> bool {
        self.copied.is_set()
    }

    /// Shared handle to the acknowledgement flag.
    pub fn acknowledgement(&self) -> &Acknowledgement {
        &self.copied
    }
}
