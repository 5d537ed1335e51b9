//! Console prompter for clarification questions.
//!
//! # User Interface
//!
//! ```text
//! What does 'fast' mean?
//! 1. <100ms
//! 2. <1s
//! Please choose an option number or provide your own answer: 1
//!
//! Do you want to continue with more clarifications? (yes/no): yes
//! ```
//!
//! A valid 1-based number selects that option; any other non-empty text is
//! taken verbatim; empty input asks again. End of input ends the session.

use async_trait::async_trait;
use clarifier_application::{InteractionError, InteractionPort};
use colored::Colorize;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::Mutex;

const OPTION_PROMPT: &str = "Please choose an option number or provide your own answer: ";
const OPEN_PROMPT: &str = "Please provide your answer: ";
const CONTINUE_PROMPT: &str = "Do you want to continue with more clarifications? (yes/no): ";
const INVALID_INPUT: &str = "Invalid input. Please try again.";

/// Map a raw input line to an answer.
///
/// Returns `None` for blank input. A number in `1..=options.len()` selects
/// that option; anything else is returned trimmed.
pub fn resolve_answer(input: &str, options: &[String]) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => Some(options[n - 1].clone()),
        _ => Some(input.to_string()),
    }
}

/// Only `yes` and `y` (any case) continue
pub fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "yes" | "y")
}

struct ConsoleIo<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleIo<R, W> {
    fn prompt(&mut self, text: &str) -> Result<Option<String>, InteractionError> {
        write!(self.output, "{}", text.magenta().bold()).map_err(io_error)?;
        self.output.flush().map_err(io_error)?;

        let mut line = String::new();
        match self.input.read_line(&mut line).map_err(io_error)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

fn io_error(e: io::Error) -> InteractionError {
    InteractionError::IoError(e.to_string())
}

/// Terminal implementation of [`InteractionPort`]
pub struct ConsoleInteraction<R, W> {
    io: Mutex<ConsoleIo<R, W>>,
}

impl ConsoleInteraction<BufReader<Stdin>, Stdout> {
    /// Prompter on the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> ConsoleInteraction<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            io: Mutex::new(ConsoleIo { input, output }),
        }
    }

    /// Give back the writer (used by tests to inspect the transcript)
    pub fn into_output(self) -> W {
        let io = self.io.into_inner().unwrap_or_else(|e| e.into_inner());
        io.output
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ConsoleIo<R, W>> {
        self.io.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl<R, W> InteractionPort for ConsoleInteraction<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    async fn ask(&self, question: &str, options: &[String]) -> Result<String, InteractionError> {
        let mut io = self.lock();
        writeln!(io.output).map_err(io_error)?;
        writeln!(io.output, "{}", question.cyan().bold()).map_err(io_error)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(io.output, "{}. {}", i + 1, option).map_err(io_error)?;
        }

        let prompt = if options.is_empty() {
            OPEN_PROMPT
        } else {
            OPTION_PROMPT
        };
        loop {
            let Some(line) = io.prompt(prompt)? else {
                writeln!(io.output).map_err(io_error)?;
                return Err(InteractionError::Closed);
            };
            match resolve_answer(&line, options) {
                Some(answer) => return Ok(answer),
                None => writeln!(io.output, "{}", INVALID_INPUT.yellow()).map_err(io_error)?,
            }
        }
    }

    async fn confirm_continue(&self, _completed_round: usize) -> Result<bool, InteractionError> {
        let mut io = self.lock();
        writeln!(io.output).map_err(io_error)?;
        match io.prompt(CONTINUE_PROMPT)? {
            Some(line) => Ok(is_affirmative(&line)),
            None => Err(InteractionError::Closed),
        }
    }
}
