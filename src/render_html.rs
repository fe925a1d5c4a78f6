//! HTML fragment renderer.
//!
//! Produces the fixed FAQ section template: a description paragraph, the
//! "Frequently Asked Questions" heading, and a responsive grid of cards.
//! The markup carries Tailwind classes plus inline styles so it survives
//! being pasted into content systems that strip stylesheets.
//!
//! Nothing is HTML-escaped. The description goes through
//! [`markup::process`]; lead text, questions and answers are interpolated
//! verbatim.

use tracing::debug;

use crate::markup;
use crate::types::{FaqEntry, RenderInput};

const PARAGRAPH_OPEN: &str = "<p class=\"mb-[27px]\" style=\"font-size : 18px;\">";

const HEADING: &str = "<!-- FAQ heading wrapper -->\n\
<div style=\"margin-bottom: 27px; margin-top: 27px;\" class=\"my-[27px]\">\n\
<p style=\"font-size: 42px;\" class=\"text-2xl md:text-3xl font-bold text-gray-900\">Frequently Asked Questions</p>\n\
</div>\n";

const GRID_OPEN: &str = "<div class=\"grid grid-cols-1 md:grid-cols-2 gap-6\">\n";

const GRID_CLOSE: &str = "</div>";

/// Render the full FAQ section for `input`.
///
/// Entries missing a question or an answer are skipped; the rest keep
/// their relative order. The same input always yields the same bytes.
pub fn to_html(input: &RenderInput) -> String {
    let description = markup::process(&input.description);

    let mut html = String::with_capacity(
        PARAGRAPH_OPEN.len() + description.len() + HEADING.len() + GRID_OPEN.len() + 256 * input.faqs.len(),
    );

    html.push_str(PARAGRAPH_OPEN);
    if let Some(lead) = input.lead() {
        html.push_str(&format!(
            "<strong class=\"text-xl md:text-2xl font-bold text-gray-900\">{}</strong> ",
            lead
        ));
    }
    html.push_str(&description);
    html.push_str("</p>\n");

    html.push_str(HEADING);

    html.push_str(GRID_OPEN);
    let mut cards = 0;
    for faq in input.complete_faqs() {
        html.push_str(&render_card(faq));
        cards += 1;
    }
    html.push_str(GRID_CLOSE);

    debug!(
        cards,
        skipped = input.faqs.len() - cards,
        bytes = html.len(),
        "rendered FAQ section"
    );
    html
}

fn render_card(faq: &FaqEntry) -> String {
    format!(
        "  <div class=\"bg-gray-50 p-6 rounded-lg\">\n\
         \x20   <h5 class=\"text-lg md:text-xl font-semibold text-gray-900 mb-3\" style=\"font-size: 18px; font-weight: 800;\">{}</h5>\n\
         \x20   <p class=\"text-base md:text-lg leading-snug text-gray-700\" style=\"font-size: 18px\">{}</p>\n\
         \x20 </div>\n",
        faq.question, faq.answer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input_with(lead: Option<&str>, description: &str, faqs: Vec<FaqEntry>) -> RenderInput {
        RenderInput {
            lead_bold_text: lead.map(str::to_string),
            description: description.into(),
            faqs,
        }
    }

    const EMPTY_SECTION: &str = "<p class=\"mb-[27px]\" style=\"font-size : 18px;\"></p>\n\
<!-- FAQ heading wrapper -->\n\
<div style=\"margin-bottom: 27px; margin-top: 27px;\" class=\"my-[27px]\">\n\
<p style=\"font-size: 42px;\" class=\"text-2xl md:text-3xl font-bold text-gray-900\">Frequently Asked Questions</p>\n\
</div>\n\
<div class=\"grid grid-cols-1 md:grid-cols-2 gap-6\">\n\
</div>";

    #[test]
    fn html_empty_input() {
        assert_eq!(to_html(&RenderInput::default()), EMPTY_SECTION);
    }

    #[test]
    fn html_zero_faqs_still_has_grid() {
        let html = to_html(&input_with(None, "desc", vec![]));
        assert!(html.contains("<div class=\"grid grid-cols-1 md:grid-cols-2 gap-6\">\n</div>"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn html_card_layout() {
        let html = to_html(&input_with(None, "", vec![FaqEntry::new("Q?", "A.")]));
        let expected_card = "  <div class=\"bg-gray-50 p-6 rounded-lg\">\n    \
<h5 class=\"text-lg md:text-xl font-semibold text-gray-900 mb-3\" style=\"font-size: 18px; font-weight: 800;\">Q?</h5>\n    \
<p class=\"text-base md:text-lg leading-snug text-gray-700\" style=\"font-size: 18px\">A.</p>\n  \
</div>\n";
        assert!(html.ends_with(&format!("{expected_card}</div>")), "got:\n{html}");
    }

    #[test]
    fn html_lead_and_description() {
        let html = to_html(&input_with(Some("Shop Now"), "check our **sale**", vec![]));
        assert!(html.starts_with(
            "<p class=\"mb-[27px]\" style=\"font-size : 18px;\">\
<strong class=\"text-xl md:text-2xl font-bold text-gray-900\">Shop Now</strong> \
check our <strong>sale</strong></p>\n"
        ));
        assert_eq!(html.matches("<strong>sale</strong>").count(), 1);
    }

    #[test]
    fn html_empty_lead_omitted() {
        let html = to_html(&input_with(Some(""), "text", vec![]));
        assert!(html.starts_with("<p class=\"mb-[27px]\" style=\"font-size : 18px;\">text</p>\n"));
    }

    #[test]
    fn html_lead_not_processed() {
        let html = to_html(&input_with(Some("**x**"), "", vec![]));
        assert!(html.contains(">**x**</strong> "));
    }

    #[test]
    fn html_link_in_description() {
        let html = to_html(&input_with(None, "[click](http://x)", vec![]));
        assert!(html.contains("<a href=\"http://x\" class=\"text-blue-600 underline\">click</a>"));
    }

    #[test]
    fn html_incomplete_entries_skipped() {
        let html = to_html(&input_with(
            None,
            "",
            vec![
                FaqEntry::new("only question", ""),
                FaqEntry::new("", "only answer"),
                FaqEntry::new("kept", "yes"),
            ],
        ));
        assert!(!html.contains("only question"));
        assert!(!html.contains("only answer"));
        assert!(html.contains(">kept</h5>"));
        assert_eq!(html.matches("<h5 ").count(), 1);
    }

    #[test]
    fn html_order_preserved() {
        let html = to_html(&input_with(
            None,
            "",
            vec![
                FaqEntry::new("first", "1"),
                FaqEntry::new("", "gap"),
                FaqEntry::new("second", "2"),
                FaqEntry::new("third", "3"),
            ],
        ));
        let a = html.find(">first<").unwrap();
        let b = html.find(">second<").unwrap();
        let c = html.find(">third<").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn html_faq_text_verbatim() {
        let html = to_html(&input_with(
            None,
            "",
            vec![FaqEntry::new("Is **this** bold?", "See [docs](http://d)")],
        ));
        assert!(html.contains(">Is **this** bold?</h5>"));
        assert!(html.contains(">See [docs](http://d)</p>"));
    }

    #[test]
    fn html_not_escaped() {
        let html = to_html(&input_with(
            Some("<i>x</i>"),
            "<script>1</script>",
            vec![FaqEntry::new("<b>q</b>", "a & b")],
        ));
        assert!(html.contains("<i>x</i>"));
        assert!(html.contains("<script>1</script>"));
        assert!(html.contains("<b>q</b>"));
        assert!(html.contains("a & b"));
    }

    #[test]
    fn html_idempotent() {
        let input = input_with(
            Some("Lead"),
            "**a** [b](c)",
            vec![FaqEntry::new("q", "a"), FaqEntry::new("", "")],
        );
        assert_eq!(to_html(&input), to_html(&input));
    }
}
