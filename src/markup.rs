//! Lightweight markup substitution for description text.
//!
//! Two conventions are recognised:
//!
//! - `**text**` becomes `<strong>text</strong>`
//! - `[label](url)` becomes an underlined, accent-colored anchor
//!
//! Bold runs first, then links, so a label or URL that contains `**` is
//! already bolded by the time links are expanded. Input is never
//! HTML-escaped. Anything that does not match (unbalanced `**`, broken
//! brackets, spans crossing a line break) passes through untouched.
//!
//! ```
//! use faq_html::markup;
//!
//! let html = markup::process("Visit our **premium collection** at [our store](https://example.com).");
//! assert_eq!(
//!     html,
//!     "Visit our <strong>premium collection</strong> at \
//!      <a href=\"https://example.com\" class=\"text-blue-600 underline\">our store</a>."
//! );
//! ```

use std::sync::LazyLock;

use regex::Regex;

// Captures stop at line terminators: \n, \r, U+2028, U+2029.
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^\r\n\x{2028}\x{2029}]*?)\*\*").expect("bold pattern is hardcoded and must be valid")
});

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\r\n\x{2028}\x{2029}]*?)\]\(([^\r\n\x{2028}\x{2029}]*?)\)")
        .expect("link pattern is hardcoded and must be valid")
});

/// Apply bold then link substitution.
pub fn process(text: &str) -> String {
    links(&bold(text))
}

/// Replace every non-greedy `**...**` span with a `<strong>` element.
pub fn bold(text: &str) -> String {
    BOLD_RE.replace_all(text, "<strong>${1}</strong>").into_owned()
}

/// Replace every `[label](url)` with an anchor.
pub fn links(text: &str) -> String {
    LINK_RE
        .replace_all(text, r#"<a href="${2}" class="text-blue-600 underline">${1}</a>"#)
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(process("Just some text."), "Just some text.");
    }

    #[test]
    fn empty_input() {
        assert_eq!(process(""), "");
    }

    #[test]
    fn bold_once() {
        let out = process("**bold**");
        assert_eq!(out, "<strong>bold</strong>");
        assert_eq!(out.matches("<strong>bold</strong>").count(), 1);
    }

    #[test]
    fn bold_all_occurrences() {
        assert_eq!(
            bold("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn bold_is_non_greedy() {
        assert_eq!(bold("**a**b**c**"), "<strong>a</strong>b<strong>c</strong>");
    }

    #[test]
    fn bold_empty_span() {
        assert_eq!(bold("****"), "<strong></strong>");
    }

    #[test]
    fn bold_leading_extra_asterisk() {
        assert_eq!(bold("***a**"), "<strong>*a</strong>");
    }

    #[test]
    fn unbalanced_bold_is_literal() {
        assert_eq!(process("**open only"), "**open only");
        assert_eq!(process("a ** b"), "a ** b");
    }

    #[test]
    fn bold_does_not_cross_newline() {
        assert_eq!(bold("**a\nb**"), "**a\nb**");
        assert_eq!(bold("**a\r\nb**"), "**a\r\nb**");
        assert_eq!(bold("**a\u{2028}b**"), "**a\u{2028}b**");
    }

    #[test]
    fn bold_resumes_after_newline() {
        assert_eq!(bold("**a\nb**c**"), "**a\nb<strong>c</strong>");
    }

    #[test]
    fn bold_per_line() {
        assert_eq!(
            bold("**one**\n**two**"),
            "<strong>one</strong>\n<strong>two</strong>"
        );
    }

    #[test]
    fn link_basic() {
        assert_eq!(
            process("[click](http://x)"),
            "<a href=\"http://x\" class=\"text-blue-600 underline\">click</a>"
        );
    }

    #[test]
    fn link_multiple() {
        assert_eq!(
            links("[a](1) then [b](2)"),
            "<a href=\"1\" class=\"text-blue-600 underline\">a</a> then \
             <a href=\"2\" class=\"text-blue-600 underline\">b</a>"
        );
    }

    #[test]
    fn link_empty_parts() {
        assert_eq!(
            links("[]()"),
            "<a href=\"\" class=\"text-blue-600 underline\"></a>"
        );
    }

    #[test]
    fn link_url_runs_to_first_close_paren() {
        assert_eq!(
            links("[a](b [c](d)"),
            "<a href=\"b [c](d\" class=\"text-blue-600 underline\">a</a>"
        );
    }

    #[test]
    fn malformed_link_is_literal() {
        assert_eq!(process("[label] (url)"), "[label] (url)");
        assert_eq!(process("[label](url"), "[label](url");
        assert_eq!(process("label](url)"), "label](url)");
    }

    #[test]
    fn link_does_not_cross_newline() {
        assert_eq!(links("[a\nb](c)"), "[a\nb](c)");
        assert_eq!(links("[a](b\nc)"), "[a](b\nc)");
    }

    #[test]
    fn bold_runs_before_link() {
        assert_eq!(
            process("[**sale**](http://x)"),
            "<a href=\"http://x\" class=\"text-blue-600 underline\"><strong>sale</strong></a>"
        );
    }

    #[test]
    fn bold_inside_url_is_bolded_first() {
        assert_eq!(
            process("[go](http://x/**y**)"),
            "<a href=\"http://x/<strong>y</strong>\" class=\"text-blue-600 underline\">go</a>"
        );
    }

    #[test]
    fn html_passes_through_unescaped() {
        assert_eq!(
            process("<em>hi</em> & **<b>**"),
            "<em>hi</em> & <strong><b></strong>"
        );
    }

    #[test]
    fn dollar_signs_in_captures_are_literal() {
        assert_eq!(bold("**$1**"), "<strong>$1</strong>");
        assert_eq!(
            links("[$2]($1)"),
            "<a href=\"$1\" class=\"text-blue-600 underline\">$2</a>"
        );
    }

    #[test]
    fn mixed_example() {
        assert_eq!(
            process("Check our **latest arrivals** at [our website](https://example.com)"),
            "Check our <strong>latest arrivals</strong> at \
             <a href=\"https://example.com\" class=\"text-blue-600 underline\">our website</a>"
        );
    }

    proptest! {
        #[test]
        fn text_without_markup_is_unchanged(text in "[^*\\[]*") {
            prop_assert_eq!(process(&text), text);
        }

        #[test]
        fn single_asterisks_are_unchanged(words in proptest::collection::vec("[a-z ]{1,8}", 0..6)) {
            let text = words.join("*");
            prop_assert_eq!(process(&text), text);
        }
    }
}
