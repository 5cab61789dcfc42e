use crate::parse::Command;

/// Split a command string into words using shlex (POSIX word splitting).
/// Malformed quoting degrades to whitespace splitting rather than failing.
fn split_words(raw: &str) -> Vec<String> {
    shlex::split(raw)
        .unwrap_or_else(|| raw.split_whitespace().map(String::from).collect())
}

/// True for KEY=VALUE assignment words that may prefix a command.
fn is_assignment(word: &str) -> bool {
    let Some(eq_pos) = word.find('=') else {
        return false;
    };
    let key = &word[..eq_pos];
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        && key
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
}

/// Reduce a command word to its basename: /usr/bin/ls → ls, ./run.sh → run.sh.
fn basename(word: &str) -> &str {
    match word.rsplit_once('/') {
        Some((_, name)) if !name.is_empty() => name,
        _ => word,
    }
}

/// Tokenize a raw command string into a [`Command`].
///
/// The first word that is not a leading KEY=VALUE assignment becomes the
/// executable; everything after it becomes the args. Empty or
/// whitespace-only input yields an empty executable. Never fails.
pub fn tokenize(raw: &str) -> Command {
    let mut words = split_words(raw).into_iter().peekable();
    while words.peek().is_some_and(|w| is_assignment(w)) {
        words.next();
    }
    let executable = words
        .next()
        .map(|w| basename(&w).to_string())
        .unwrap_or_default();

    Command {
        raw: raw.to_string(),
        executable,
        args: words.collect(),
    }
}
