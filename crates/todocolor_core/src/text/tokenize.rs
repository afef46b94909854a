//! Delimiter-set tokenizer.
//!
//! # Invariants
//! - Tokens borrow from the input; no allocation per token.
//! - With `trim_empty == false`, joining tokens with the stripped delimiters
//!   reproduces the input exactly.
//! - Empty input yields `[]` when trimming and `[""]` otherwise.

/// Splits `text` at every character contained in `delimiters`.
///
/// Zero-length tokens (consecutive delimiters, or a delimiter at either end)
/// are dropped when `trim_empty` is set and kept as `""` otherwise.
///
/// An empty `delimiters` set never splits, so the whole text is one token.
pub fn tokenize<'a>(text: &'a str, delimiters: &str, trim_empty: bool) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (pos, ch) in text.char_indices() {
        if delimiters.contains(ch) {
            push_token(&mut tokens, &text[start..pos], trim_empty);
            start = pos + ch.len_utf8();
        }
    }
    push_token(&mut tokens, &text[start..], trim_empty);

    tokens
}

fn push_token<'a>(tokens: &mut Vec<&'a str>, token: &'a str, trim_empty: bool) {
    if token.is_empty() && trim_empty {
        return;
    }
    tokens.push(token);
}
