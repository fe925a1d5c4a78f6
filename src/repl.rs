//! Interactive editing prompt over a [`FaqForm`].
//!
//! Each line is one form action. FAQ numbers are 1-based, matching the
//! `FAQ n` labels in the terminal view.

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::clipboard::Clipboard;
use crate::form::FaqForm;
use crate::render_term;
use crate::types::FaqField;

/// One parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Lead(String),
    Description(String),
    Add,
    Remove(usize),
    Question(usize, String),
    Answer(usize, String),
    Render,
    Copy,
    Show,
    Guide,
    Help,
    Quit,
}

/// Parse a prompt line. FAQ numbers in the result are 0-based indices.
pub fn parse_command(line: &str) -> std::result::Result<EditCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim_start()),
        None => (line, ""),
    };

    match word {
        "lead" => Ok(EditCommand::Lead(rest.to_string())),
        "desc" | "description" => Ok(EditCommand::Description(unescape_newlines(rest))),
        "add" => Ok(EditCommand::Add),
        "remove" | "rm" => Ok(EditCommand::Remove(parse_number(rest)?)),
        "q" | "question" => {
            let (n, text) = split_number(rest)?;
            Ok(EditCommand::Question(n, text.to_string()))
        }
        "a" | "answer" => {
            let (n, text) = split_number(rest)?;
            Ok(EditCommand::Answer(n, unescape_newlines(text)))
        }
        "render" | "generate" => Ok(EditCommand::Render),
        "copy" => Ok(EditCommand::Copy),
        "show" => Ok(EditCommand::Show),
        "guide" => Ok(EditCommand::Guide),
        "help" | "?" => Ok(EditCommand::Help),
        "quit" | "exit" => Ok(EditCommand::Quit),
        "" => Err("empty command".to_string()),
        other => Err(format!("unknown command '{other}' (try 'help')")),
    }
}

// Multi-line fields are typed on one line with a literal `\n`.
fn unescape_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

fn parse_number(text: &str) -> std::result::Result<usize, String> {
    let n: usize = text
        .trim()
        .parse()
        .map_err(|_| format!("expected an FAQ number, got '{}'", text.trim()))?;
    if n == 0 {
        return Err("FAQ numbers start at 1".to_string());
    }
    Ok(n - 1)
}

fn split_number(text: &str) -> std::result::Result<(usize, &str), String> {
    let (num, rest) = match text.split_once(char::is_whitespace) {
        Some((n, r)) => (n, r.trim_start()),
        None => (text, ""),
    };
    Ok((parse_number(num)?, rest))
}

/// Outcome of applying one command.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// Apply `command` to `form`, printing feedback to stdout.
pub fn apply(form: &mut FaqForm, clipboard: &mut dyn Clipboard, command: EditCommand) -> Result<Step> {
    debug!(?command, "apply: edit command");
    match command {
        EditCommand::Lead(text) => form.set_lead_bold_text(text),
        EditCommand::Description(text) => form.set_description(text),
        EditCommand::Add => {
            let idx = form.add_faq();
            println!("Added FAQ {}", idx + 1);
        }
        EditCommand::Remove(idx) => {
            if !form.can_remove() {
                println!("{}", "At least one FAQ is required".yellow());
            } else if form.remove_faq(idx) {
                println!("Removed FAQ {}", idx + 1);
            } else {
                println!("{}", format!("No FAQ {}", idx + 1).yellow());
            }
        }
        EditCommand::Question(idx, text) => {
            if let Err(e) = form.update_faq(idx, FaqField::Question, text) {
                println!("{}", e.to_string().yellow());
            }
        }
        EditCommand::Answer(idx, text) => {
            if let Err(e) = form.update_faq(idx, FaqField::Answer, text) {
                println!("{}", e.to_string().yellow());
            }
        }
        EditCommand::Render => {
            println!("{}", form.render());
        }
        EditCommand::Copy => {
            if form.generated().is_none() {
                println!("{}", "Nothing generated yet; run 'render' first".yellow());
            } else {
                form.copy(clipboard)?;
                println!("{}", "Copied!".green().bold());
            }
        }
        EditCommand::Show => print!("{}", render_term::to_terminal(form)),
        EditCommand::Guide => print!("{}", render_term::formatting_guide()),
        EditCommand::Help => print_help(),
        EditCommand::Quit => return Ok(Step::Quit),
    }
    Ok(Step::Continue)
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  lead TEXT       set the bold text at the start (empty clears it)");
    println!("  desc TEXT       set the description (\\n for a line break)");
    println!("  add             append an empty FAQ");
    println!("  remove N        remove FAQ N");
    println!("  q N TEXT        set the question of FAQ N");
    println!("  a N TEXT        set the answer of FAQ N");
    println!("  render          generate the HTML");
    println!("  copy            copy the generated HTML");
    println!("  show            show the whole form");
    println!("  guide           show the formatting guide");
    println!("  quit            leave");
}

/// Run the prompt until `quit` or end of input.
pub fn run(form: &mut FaqForm, clipboard: &mut dyn Clipboard) -> Result<()> {
    println!();
    println!("{}", "FAQ HTML Generator".bright_cyan().bold());
    println!("Type {} for commands, {} to leave", "help".yellow(), "quit".yellow());
    println!();

    let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

    loop {
        match rl.readline(&format!("{} ", ">".bright_green())) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                match parse_command(&line) {
                    Ok(command) => {
                        if apply(form, clipboard, command)? == Step::Quit {
                            break;
                        }
                    }
                    Err(msg) => println!("{}", msg.yellow()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => return Err(eyre::eyre!("Readline error: {}", err)),
        }
    }

    Ok(())
}
