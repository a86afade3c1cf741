//! Re-quoting of raw argument fragments into logical tokens.
//!
//! The fragments are rejoined with single spaces and rescanned character by character.
//! Quoted regions (`'..'` or `".."`) become standalone tokens which keep their quote markers.
//! A backslash is kept verbatim, but an odd run of them disarms the following quote or space.
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The two quoting styles understood by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    /// `'`
    Single,
    /// `"`
    Double,
}

impl Quote {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Quote::Single),
            '"' => Some(Quote::Double),
            _ => None,
        }
    }

    /// The quote marker character.
    pub fn as_char(&self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quote::Single => write!(f, "single quote (')"),
            Quote::Double => write!(f, "double quote (\")"),
        }
    }
}

/// Quote balance failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// A quote of the other kind appeared inside an open quoted region.
    #[error("{found} overlaps with the open {open}.")]
    Overlap {
        /// The quote which opened the region.
        open: Quote,
        /// The quote found inside it.
        found: Quote,
    },

    /// A quoted region was still open at the end of the input.
    #[error("{0} is never closed.")]
    Unterminated(Quote),
}

#[derive(Debug, Default)]
struct Scanner {
    tokens: Vec<String>,
    current: String,
    // Length of the backslash run immediately before the scan position.
    escapes: usize,
    quote: Option<Quote>,
}

impl Scanner {
    fn escaped(&self) -> bool {
        self.escapes % 2 == 1
    }

    fn feed(&mut self, c: char) -> Result<(), QuoteError> {
        if c == '\\' {
            self.escapes += 1;
            self.current.push(c);
            return Ok(());
        }

        match (c, Quote::from_char(c)) {
            (' ', _) if self.quote.is_none() && !self.escaped() => self.flush(),
            (_, Some(quote)) if !self.escaped() => self.toggle(quote)?,
            _ => self.current.push(c),
        }

        self.escapes = 0;
        Ok(())
    }

    fn toggle(&mut self, quote: Quote) -> Result<(), QuoteError> {
        match self.quote {
            Some(open) if open == quote => {
                self.current.push(quote.as_char());
                self.flush();
                self.quote = None;
            }
            Some(open) => {
                return Err(QuoteError::Overlap { open, found: quote });
            }
            None => {
                self.flush();
                self.current.push(quote.as_char());
                self.quote = Some(quote);
            }
        }

        Ok(())
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            let token = std::mem::take(&mut self.current);
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Emitting token: {token}");
            }
            self.tokens.push(token);
        }
    }

    fn finish(mut self) -> Result<Vec<String>, QuoteError> {
        self.flush();

        match self.quote {
            Some(quote) => Err(QuoteError::Unterminated(quote)),
            None => Ok(self.tokens),
        }
    }
}

/// Reconstruct the logical tokens from a sequence of raw fragments.
///
/// Runs of spaces between fragments collapse: the fragments are rejoined with exactly one space before scanning.
/// Empty tokens are never produced.
///
/// ### Example
/// ```
/// # use optparse_builder as optparse;
/// use optparse::tokens::tokenize;
///
/// let tokens = tokenize(&["--name", "\"John", "Smith\"", "file.txt"]).unwrap();
/// assert_eq!(tokens, vec!["--name", "\"John Smith\"", "file.txt"]);
/// ```
pub fn tokenize<S: AsRef<str>>(fragments: &[S]) -> Result<Vec<String>, QuoteError> {
    let joined = fragments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");
    let mut scanner = Scanner::default();

    for c in joined.chars() {
        scanner.feed(c)?;
    }

    scanner.finish()
}

/// Split a raw argument line on spaces, dropping the empty pieces.
pub fn split_line(line: &str) -> Vec<&str> {
    line.split(' ').filter(|piece| !piece.is_empty()).collect()
}

/// Strip the outer quote markers from a token produced by [`tokenize`].
/// Unquoted tokens are returned unchanged.
pub fn unquote(token: &str) -> &str {
    let mut chars = token.chars();

    match (chars.next().and_then(Quote::from_char), chars.next_back()) {
        (Some(open), Some(close)) if open.as_char() == close => chars.as_str(),
        _ => token,
    }
}

/// Whether a token is shaped like an option reference (`-x` or `--xyz`).
pub(crate) fn is_option(token: &str) -> bool {
    token.starts_with('-')
}
