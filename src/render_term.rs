//! ANSI-colored terminal view of a form session.
//!
//! Mirrors the generator's on-screen layout: the description section, the
//! FAQ list, and, once something has been rendered, the generated HTML
//! with its copy status.

use colored::Colorize;

use crate::form::FaqForm;

/// Render the whole session as colored terminal text.
pub fn to_terminal(form: &FaqForm) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Description Section".bold().underline()));
    out.push_str(&format!(
        "  {} {}\n",
        "Bold text at start:".dimmed(),
        field_or_placeholder(form.lead_bold_text())
    ));
    out.push_str(&format!(
        "  {} {}\n",
        "Description:".dimmed(),
        field_or_placeholder(form.description())
    ));
    out.push('\n');

    out.push_str(&format!("{}\n", "FAQs".bold().underline()));
    for (i, faq) in form.faqs().iter().enumerate() {
        let label = format!("FAQ {}", i + 1);
        if faq.is_complete() {
            out.push_str(&format!("  {}\n", label.as_str().cyan().bold()));
        } else {
            out.push_str(&format!("  {} {}\n", label.as_str().cyan().bold(), "(incomplete, skipped)".yellow()));
        }
        out.push_str(&format!("    {} {}\n", "Q:".dimmed(), field_or_placeholder(&faq.question)));
        out.push_str(&format!("    {} {}\n", "A:".dimmed(), field_or_placeholder(&faq.answer)));
    }

    if let Some(html) = form.generated() {
        out.push('\n');
        let status = if form.is_copied() {
            "Copied!".green().bold()
        } else {
            "Copy".normal()
        };
        out.push_str(&format!("{}  [{}]\n", "Generated HTML".bold().underline(), status));
        out.push_str(html);
        out.push('\n');
    }

    out
}

/// Usage help for the description markup.
pub fn formatting_guide() -> String {
    format!(
        "{}\n  • Use {} to make text bold\n  • Use {} to add links\n  • Example: {}\n",
        "Formatting Guide:".bold(),
        "**text**".cyan(),
        "[link text](url)".cyan(),
        "Check our **latest arrivals** at [our website](https://example.com)".cyan(),
    )
}

fn field_or_placeholder(text: &str) -> String {
    if text.is_empty() {
        "(empty)".dimmed().italic().to_string()
    } else {
        text.to_string()
    }
}
