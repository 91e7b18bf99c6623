//! Line-based input prompts

use std::io::{self, BufRead, Write};

/// Words that abort a prompt
const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Reads answers from `input`, writes prompts and complaints to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    /// Ask until an integer in `min..=max` is entered.
    ///
    /// `None` when the player quits (if allowed) or input ends.
    pub fn integer(&mut self, prompt: &str, min: u64, max: u64, allow_quit: bool) -> io::Result<Option<u64>> {
        loop {
            let Some(answer) = self.read_line(prompt)? else {
                return Ok(None);
            };

            if allow_quit && QUIT_WORDS.contains(&answer.as_str()) {
                return Ok(None);
            }

            match answer.parse::<u64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
                Ok(_) => writeln!(self.output, "❌ Please enter a number between {min} and {max}")?,
                Err(_) if allow_quit => writeln!(self.output, "❌ Please enter a valid number (or 'q' to quit)")?,
                Err(_) => writeln!(self.output, "❌ Please enter a valid number")?,
            }
        }
    }

    /// Ask a y/n question. End of input counts as "no".
    pub fn yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        let prompt = format!("{prompt} (y/n): ");
        loop {
            match self.read_line(&prompt)?.as_deref() {
                Some("y" | "yes") => return Ok(true),
                Some("n" | "no") | None => return Ok(false),
                Some(_) => writeln!(self.output, "❌ Please enter 'y' for yes or 'n' for no")?,
            }
        }
    }

    /// Wait for Enter
    pub fn pause(&mut self) -> io::Result<()> {
        self.read_line("\nPress Enter to continue...")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(p: &Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output.clone()).unwrap()
    }

    #[test]
    fn test_integer_retries_until_in_range() {
        let mut p = prompter("abc\n0\n7\n3\n");
        assert_eq!(p.integer("Lines: ", 1, 3, true).unwrap(), Some(3));

        let out = printed(&p);
        assert!(out.contains("valid number (or 'q' to quit)"));
        assert_eq!(out.matches("between 1 and 3").count(), 2);
    }

    #[test]
    fn test_integer_quit_words() {
        for word in ["q\n", "QUIT\n", " exit \n"] {
            assert_eq!(prompter(word).integer("> ", 1, 10, true).unwrap(), None);
        }
        // Quit words are just bad input when quitting is not allowed
        let mut p = prompter("q\n4\n");
        assert_eq!(p.integer("> ", 1, 6, false).unwrap(), Some(4));
    }

    #[test]
    fn test_integer_end_of_input() {
        assert_eq!(prompter("").integer("> ", 1, 10, false).unwrap(), None);
    }

    #[test]
    fn test_yes_no() {
        assert!(prompter("maybe\nY\n").yes_no("Spin?").unwrap());
        assert!(!prompter("no\n").yes_no("Spin?").unwrap());
        assert!(!prompter("").yes_no("Spin?").unwrap());

        let mut p = prompter("x\nn\n");
        p.yes_no("Spin?").unwrap();
        assert!(printed(&p).contains("Spin? (y/n): "));
        assert!(printed(&p).contains("'y' for yes"));
    }
}
