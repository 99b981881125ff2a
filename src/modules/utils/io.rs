use std::io::{self, Write};

use crate::modules::error::FlowError;

/// Helper function to read a line from stdin
pub fn read_line() -> io::Result<String> {
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "standard input closed",
        ));
    }
    Ok(input.trim().to_string())
}

/// Source of interactive input and sink for messages shown to the user.
///
/// Flows never touch stdin/stdout directly, so they can be driven by a script in tests.
pub trait Prompter {
    /// Show `label` and read one line of input
    fn ask(&mut self, label: &str) -> io::Result<String>;

    /// Like `ask`, but for input that should not be echoed
    fn ask_secret(&mut self, label: &str) -> io::Result<String> {
        self.ask(label)
    }

    /// Print a line of output
    fn say(&mut self, message: &str);
}

/// Prompter bound to the process console
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for ConsolePrompter {
    fn ask(&mut self, label: &str) -> io::Result<String> {
        print!("{}", label);
        io::stdout().flush()?;
        read_line()
    }

    fn ask_secret(&mut self, label: &str) -> io::Result<String> {
        print!("{}", label);
        io::stdout().flush()?;
        rpassword::read_password()
    }

    fn say(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Ask for an integer field. Anything that does not parse is an error for the caller.
pub fn ask_number(
    prompter: &mut dyn Prompter,
    label: &str,
    field: &'static str,
) -> Result<i64, FlowError> {
    let input = prompter.ask(label)?;
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| FlowError::InvalidNumber {
            field,
            input: input.clone(),
        })
}
