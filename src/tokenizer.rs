//! Splits definition text into word-runs and single separator characters.
//!
//! Tokenization is lossless: walking a string with [`next_word_or_separator`]
//! (or the [`Tokens`] iterator) and concatenating the pieces gives back the
//! input exactly.

/// Characters that end a word. Each one is always its own token.
pub const SEPARATORS: [char; 18] = [
    '\t', '\n', '\r', '.', ',', '?', '!', ' ', ':', ';', '"', '-', '[', ']', '(', ')', '/', '\'',
];

pub fn is_separator(ch: char) -> bool {
    SEPARATORS.contains(&ch)
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TokenKind {
    Word,
    Separator,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// Returns the word-run or separator starting at byte offset `position`.
///
/// A separator is returned alone even when more separators follow it; a word
/// extends up to (not including) the next separator or the end of `text`.
///
/// # Panics
///
/// Panics when `position` is not a char boundary inside `text`, which
/// includes every position on an empty string.
pub fn next_word_or_separator(text: &str, position: usize) -> &str {
    token_at(text, position).text
}

fn token_at(text: &str, position: usize) -> Token<'_> {
    assert!(
        position < text.len(),
        "position {position} out of range for text of length {}",
        text.len()
    );
    let rest = &text[position..];
    let mut chars = rest.char_indices();
    let (_, first) = chars.next().expect("non-empty remainder");
    if is_separator(first) {
        return Token {
            text: &rest[..first.len_utf8()],
            kind: TokenKind::Separator,
        };
    }
    let end = chars
        .find(|&(_, ch)| is_separator(ch))
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());
    Token {
        text: &rest[..end],
        kind: TokenKind::Word,
    }
}

/// Iterator tiling a string into consecutive tokens.
pub struct Tokens<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }
        let token = token_at(self.text, self.position);
        self.position += token.text.len();
        Some(token)
    }
}

pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { text, position: 0 }
}
