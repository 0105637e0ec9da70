//! Prompt Reading
//!
//! Line-oriented prompt helpers. Every prompt accepts a quit word to back
//! out, re-asks on bad input and reports EOF so the caller can shut down.

use std::io::{self, Write};

/// What a single prompt produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    /// `q`, `quit` or `exit`
    Back,
    /// Closed stdin
    Eof,
}

/// True for the words that back out of a prompt.
pub fn is_quit_word(input: &str) -> bool {
    matches!(
        input.trim().to_lowercase().as_str(),
        "q" | "quit" | "exit"
    )
}

/// Parse a whole number in `min..=max`.
pub fn parse_number(input: &str, min: u64, max: u64) -> Option<u64> {
    let value: u64 = input.trim().parse().ok()?;
    (min..=max).contains(&value).then_some(value)
}

/// Parse a yes/no answer.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Print `prompt` without a newline and read one line. `None` means EOF.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ask until the answer is a number in `min..=max`, a quit word or EOF.
pub fn ask_number(prompt: &str, min: u64, max: u64) -> io::Result<Answer<u64>> {
    loop {
        let Some(line) = read_line(prompt)? else {
            return Ok(Answer::Eof);
        };
        if is_quit_word(&line) {
            return Ok(Answer::Back);
        }
        match parse_number(&line, min, max) {
            Some(value) => return Ok(Answer::Value(value)),
            None => println!("❌ Please enter a number between {min} and {max} (or 'q' to go back)"),
        }
    }
}

/// Ask a yes/no question until answered. A quit word counts as backing out.
pub fn ask_yes_no(prompt: &str) -> io::Result<Answer<bool>> {
    loop {
        let Some(line) = read_line(&format!("{prompt} (y/n): "))? else {
            return Ok(Answer::Eof);
        };
        if is_quit_word(&line) {
            return Ok(Answer::Back);
        }
        match parse_yes_no(&line) {
            Some(value) => return Ok(Answer::Value(value)),
            None => println!("❌ Please enter 'y' for yes or 'n' for no"),
        }
    }
}

/// Wait for Enter. Returns false on EOF.
pub fn pause(prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    Ok(io::stdin().read_line(&mut line)? != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_words() {
        assert!(is_quit_word("q"));
        assert!(is_quit_word("  QUIT \n"));
        assert!(is_quit_word("Exit"));
        assert!(!is_quit_word("qq"));
        assert!(!is_quit_word(""));
    }

    #[test]
    fn test_parse_number_in_range() {
        assert_eq!(parse_number("5", 1, 10), Some(5));
        assert_eq!(parse_number(" 10 \n", 1, 10), Some(10));
        assert_eq!(parse_number("1", 1, 10), Some(1));
    }

    #[test]
    fn test_parse_number_rejects_out_of_range() {
        assert_eq!(parse_number("0", 1, 10), None);
        assert_eq!(parse_number("11", 1, 10), None);
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert_eq!(parse_number("", 1, 10), None);
        assert_eq!(parse_number("five", 1, 10), None);
        assert_eq!(parse_number("-3", 1, 10), None);
        assert_eq!(parse_number("2.5", 1, 10), None);
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no(" YES \n"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("No"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
        assert_eq!(parse_yes_no(""), None);
    }
}
