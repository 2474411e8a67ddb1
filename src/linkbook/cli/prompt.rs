//! # Prompts
//!
//! `linkbook add` asks for whatever was not given on the command line. For each
//! tree level it offers the existing keys by number, and anything that is not a
//! listed number is taken as a new name. A leading `+` always means a new name,
//! so `+1` creates a key called "1". Prompts read from any `BufRead`, so answers
//! can be piped in and tests can drive them with a `Cursor`.

use linkbook::error::{LinkbookError, Result};
use std::io::{BufRead, Write};

fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(LinkbookError::Io)?;
    if read == 0 {
        return Err(LinkbookError::Api("No input: prompt was cancelled".to_string()));
    }
    Ok(line.trim().to_string())
}

/// Asks for a free-text value.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{}: ", label).map_err(LinkbookError::Io)?;
    output.flush().map_err(LinkbookError::Io)?;
    read_answer(input)
}

/// Offers `options` by number, or accepts a new name (`+name` forces a new one).
pub fn choose_or_enter<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    options: &[String],
) -> Result<String> {
    if options.is_empty() {
        let answer = ask(input, output, &format!("New {}", label))?;
        return Ok(new_name(&answer).unwrap_or(answer));
    }

    writeln!(output, "{}:", label).map_err(LinkbookError::Io)?;
    for (i, option) in options.iter().enumerate() {
        writeln!(output, "  {}. {}", i + 1, option).map_err(LinkbookError::Io)?;
    }
    write!(
        output,
        "Pick a number or type a new {} (+name if it is a number): ",
        label.to_lowercase()
    )
    .map_err(LinkbookError::Io)?;
    output.flush().map_err(LinkbookError::Io)?;

    let answer = read_answer(input)?;
    if let Some(name) = new_name(&answer) {
        return Ok(name);
    }
    match answer.parse::<usize>() {
        Ok(n) if n >= 1 && n <= options.len() => Ok(options[n - 1].clone()),
        _ => Ok(answer),
    }
}

fn new_name(answer: &str) -> Option<String> {
    answer
        .strip_prefix('+')
        .map(|name| name.trim().to_string())
}

/// Asks a yes/no question. Anything but `y`/`yes` is a no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    write!(output, "{} [y/N] ", question).map_err(LinkbookError::Io)?;
    output.flush().map_err(LinkbookError::Io)?;
    let answer = read_answer(input)?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn options() -> Vec<String> {
        vec!["Courses".to_string(), "Videos".to_string()]
    }

    #[test]
    fn picks_existing_by_number() {
        let mut input = Cursor::new("2\n");
        let mut output = Vec::new();
        let choice = choose_or_enter(&mut input, &mut output, "Main category", &options()).unwrap();

        assert_eq!(choice, "Videos");
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("  1. Courses\n  2. Videos\n"));
    }

    #[test]
    fn out_of_range_number_is_a_new_name() {
        let mut input = Cursor::new("7\n");
        let mut output = Vec::new();
        let choice = choose_or_enter(&mut input, &mut output, "Main category", &options()).unwrap();
        assert_eq!(choice, "7");
    }

    #[test]
    fn text_is_a_new_name() {
        let mut input = Cursor::new("  Books \n");
        let mut output = Vec::new();
        let choice = choose_or_enter(&mut input, &mut output, "Main category", &options()).unwrap();
        assert_eq!(choice, "Books");
    }

    #[test]
    fn plus_prefix_forces_new_name() {
        let mut input = Cursor::new("+1\n");
        let mut output = Vec::new();
        let choice = choose_or_enter(&mut input, &mut output, "Main category", &options()).unwrap();
        assert_eq!(choice, "1");

        let mut input = Cursor::new("+ 2024\n");
        let choice = choose_or_enter(&mut input, &mut output, "Main category", &[]).unwrap();
        assert_eq!(choice, "2024");
    }

    #[test]
    fn no_options_asks_for_new_name() {
        let mut input = Cursor::new("Books\n");
        let mut output = Vec::new();
        let choice = choose_or_enter(&mut input, &mut output, "Main category", &[]).unwrap();

        assert_eq!(choice, "Books");
        assert_eq!(String::from_utf8(output).unwrap(), "New Main category: ");
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(ask(&mut input, &mut output, "Link").is_err());
    }

    #[test]
    fn confirm_defaults_to_no() {
        let mut output = Vec::new();
        assert!(confirm(&mut Cursor::new("y\n"), &mut output, "Delete?").unwrap());
        assert!(confirm(&mut Cursor::new("YES\n"), &mut output, "Delete?").unwrap());
        assert!(!confirm(&mut Cursor::new("\n"), &mut output, "Delete?").unwrap());
        assert!(!confirm(&mut Cursor::new("nope\n"), &mut output, "Delete?").unwrap());
    }
}
