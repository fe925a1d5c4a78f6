//! `faq-html` — FAQ section generator.
//!
//! Turns a short marketing description and a list of question/answer pairs
//! into a fixed, copy-paste-ready HTML block: a description paragraph, a
//! "Frequently Asked Questions" heading, and a responsive grid of cards.
//! The description supports `**bold**` and `[label](url)` markup.
//!
//! # Quick start
//!
//! ```
//! use faq_html::{FaqEntry, RenderInput};
//!
//! let input = RenderInput {
//!     lead_bold_text: Some("Shop Now".into()),
//!     description: "check our **sale**".into(),
//!     faqs: vec![FaqEntry::new("Do you ship abroad?", "Yes.")],
//! };
//! let html = input.to_html();
//! assert!(html.contains("Shop Now</strong> check our <strong>sale</strong>"));
//! assert!(html.contains(">Do you ship abroad?</h5>"));
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod clipboard;
pub mod error;
pub mod form;
pub mod input;
pub mod markup;
pub mod render_html;
#[cfg(feature = "terminal")]
pub mod render_term;
#[cfg(feature = "cli")]
pub mod repl;
pub mod types;

pub use clipboard::{ACKNOWLEDGEMENT_DURATION, Acknowledgement, Clipboard, MemoryClipboard};
#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
pub use error::*;
pub use form::FaqForm;
pub use types::*;

impl RenderInput {
    /// Render this input as the FAQ section HTML.
    pub fn to_html(&self) -> String {
        render_html::to_html(self)
    }

    /// Load an input document (YAML or JSON, by extension).
    pub fn load(path: &std::path::Path) -> Result<Self> {
        input::load(path)
    }
}
