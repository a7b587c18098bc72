//! User input utilities for interactive CLI prompts
//!
//! Numbered menus standing in for the dashboard's dropdowns. Every prompt
//! reads from any `BufRead` and writes to any `Write` so the menus can be
//! driven from tests; the `stdin` wrappers are what the commands call.

use crate::{Error, Result};
use std::io::{self, BufRead, Write};

/// What the user typed at a menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Selected(String),
    Quit,
}

/// Monthly or annual view, as picked at the mode prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Monthly,
    Annual,
}

/// Maximum number of invalid answers before a prompt gives up
const MAX_ATTEMPTS: usize = 5;

fn read_answer<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;
    if read == 0 {
        // End of input
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn flush<W: Write>(writer: &mut W) -> Result<()> {
    writer
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))
}

fn write_line<W: Write>(writer: &mut W, line: &str) -> Result<()> {
    writeln!(writer, "{}", line).map_err(|e| Error::io("Failed to write prompt".to_string(), e))
}

/// Show a numbered menu and return the chosen option
///
/// Accepts the option number or the exact option text. An empty answer picks
/// `default` when there is one; `q` or end of input quits.
pub fn prompt_choice_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
    options: &[String],
    default: Option<usize>,
) -> Result<MenuChoice> {
    if options.is_empty() {
        return Err(Error::data_validation(format!(
            "No options available for {}",
            label
        )));
    }

    write_line(writer, &format!("\n{}:", label))?;
    for (i, option) in options.iter().enumerate() {
        let marker = if default == Some(i) { " (default)" } else { "" };
        write_line(writer, &format!("  {}. {}{}", i + 1, option, marker))?;
    }

    for _ in 0..MAX_ATTEMPTS {
        let hint = match default {
            Some(i) => format!("{}, q to quit", i + 1),
            None => format!("1-{}, q to quit", options.len()),
        };
        write!(writer, "Select {} [{}]: ", label, hint)
            .map_err(|e| Error::io("Failed to write prompt".to_string(), e))?;
        flush(writer)?;

        let Some(input) = read_answer(reader)? else {
            return Ok(MenuChoice::Quit);
        };

        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            return Ok(MenuChoice::Quit);
        }
        if input.is_empty() {
            if let Some(i) = default {
                return Ok(MenuChoice::Selected(options[i].clone()));
            }
        }
        if let Ok(choice) = input.parse::<usize>() {
            if choice >= 1 && choice <= options.len() {
                return Ok(MenuChoice::Selected(options[choice - 1].clone()));
            }
        }
        if let Some(option) = options.iter().find(|option| **option == input) {
            return Ok(MenuChoice::Selected(option.clone()));
        }

        write_line(
            writer,
            &format!(
                "Invalid selection '{}'. Please choose 1-{} or 'q'",
                input,
                options.len()
            ),
        )?;
    }

    Err(Error::data_validation(format!(
        "Too many invalid selections for {}",
        label
    )))
}

/// Ask for monthly or annual granularity
pub fn prompt_view_mode_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<Option<ViewMode>> {
    let options = vec!["monthly".to_string(), "annual".to_string()];
    match prompt_choice_from(reader, writer, "view mode", &options, Some(0))? {
        MenuChoice::Selected(mode) if mode == "annual" => Ok(Some(ViewMode::Annual)),
        MenuChoice::Selected(_) => Ok(Some(ViewMode::Monthly)),
        MenuChoice::Quit => Ok(None),
    }
}

/// Yes/no question with a default
pub fn prompt_confirmation_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
    default_yes: bool,
) -> Result<bool> {
    let default_text = if default_yes { "Y/n" } else { "y/N" };

    for _ in 0..MAX_ATTEMPTS {
        write!(writer, "{} [{}]: ", message, default_text)
            .map_err(|e| Error::io("Failed to write prompt".to_string(), e))?;
        flush(writer)?;

        let Some(input) = read_answer(reader)? else {
            return Ok(false);
        };

        match input.to_lowercase().as_str() {
            "" => return Ok(default_yes),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => write_line(writer, "Please enter 'y' for yes or 'n' for no.")?,
        }
    }
    Ok(false)
}

/// Numbered menu on stdin/stdout
pub fn prompt_choice(label: &str, options: &[String], default: Option<usize>) -> Result<MenuChoice> {
    prompt_choice_from(
        &mut io::stdin().lock(),
        &mut io::stdout(),
        label,
        options,
        default,
    )
}

/// View mode menu on stdin/stdout
pub fn prompt_view_mode() -> Result<Option<ViewMode>> {
    prompt_view_mode_from(&mut io::stdin().lock(), &mut io::stdout())
}

/// Yes/no question on stdin/stdout
pub fn prompt_confirmation(message: &str, default_yes: bool) -> Result<bool> {
    prompt_confirmation_from(&mut io::stdin().lock(), &mut io::stdout(), message, default_yes)
}
