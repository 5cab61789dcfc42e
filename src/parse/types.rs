//! Types produced by the tokenizer and consumed by the eval layer.

/// A tokenized command: the raw input plus its derived executable and
/// argument words. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The raw input string as received.
    pub raw: String,
    /// The executable token: the first word that is not a KEY=VALUE
    /// assignment, reduced to its basename. Empty for blank input.
    pub executable: String,
    /// The remaining words after the executable.
    pub args: Vec<String>,
}

impl Command {
    /// First argument word, if any (the subcommand for tools like git).
    pub fn subcommand(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Check if any argument matches a flag.
    pub fn has_arg(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }

    /// Check if any argument matches any of the given flags.
    pub fn has_any_arg(&self, flags: &[&str]) -> bool {
        self.args.iter().any(|a| flags.contains(&a.as_str()))
    }
}
