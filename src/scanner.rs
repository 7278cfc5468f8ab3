//! First pass over a line: split it into text runs, underscore markers,
//! raw backslashes and the header mark.

use crate::options::Options;
use crate::token::{MarkerKind, Token, TokenKind};

/// Tokenize one line (no embedded `\n`).
///
/// Underscore runs of width one or two become markers; longer runs are
/// plain text. Backslashes are emitted as `TokenKind::Backslash` and left
/// for [`crate::escape::resolve`]. Every byte of `line` ends up in exactly
/// one token.
pub fn scan(line: &str, options: Options) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut text_start = 0;
    let mut chars = line.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let token = match c {
            '#' if i == 0 && options.contains(Options::ENABLE_HEADINGS) => {
                Token::new(TokenKind::HeaderMark, &line[..1], 0)
            }
            '\\' if options.contains(Options::ENABLE_ESCAPES) => {
                Token::new(TokenKind::Backslash, &line[i..i + 1], i)
            }
            '_' => {
                let mut end = i + 1;
                while let Some(&(j, '_')) = chars.peek() {
                    end = j + 1;
                    chars.next();
                }
                Token::new(run_kind(end - i, options), &line[i..end], i)
            }
            _ => continue,
        };
        if text_start < i {
            push_token(line, &mut tokens, Token::new(TokenKind::Text, &line[text_start..i], text_start));
        }
        text_start = token.end();
        push_token(line, &mut tokens, token);
    }
    if text_start < line.len() {
        push_token(line, &mut tokens, Token::new(TokenKind::Text, &line[text_start..], text_start));
    }
    tokens
}

fn run_kind(width: usize, options: Options) -> TokenKind {
    match width {
        1 if options.contains(Options::ENABLE_EMPHASIS) => TokenKind::Marker(MarkerKind::Emphasis),
        2 if options.contains(Options::ENABLE_STRONG) => TokenKind::Marker(MarkerKind::Strong),
        _ => TokenKind::Text,
    }
}

/// Append `token`, folding it into the previous token when both are
/// contiguous text so text runs stay maximal.
pub(crate) fn push_token<'a>(line: &'a str, tokens: &mut Vec<Token<'a>>, token: Token<'a>) {
    if token.kind == TokenKind::Text {
        if let Some(prev) = tokens.last_mut() {
            if prev.kind == TokenKind::Text && prev.end() == token.start {
                prev.text = &line[prev.start..token.end()];
                return;
            }
        }
    }
    tokens.push(token);
}
