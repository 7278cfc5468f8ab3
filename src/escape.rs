//! Backslash handling between scanning and pairing.
//!
//! A backslash only has power over `\` and `_`:
//! - `\\` becomes one literal backslash, and the second backslash escapes
//!   nothing further;
//! - `\` before an underscore run shields the whole run, which then can
//!   never pair;
//! - anywhere else (including end of line) the backslash is plain text.

use crate::scanner::push_token;
use crate::token::{Token, TokenKind};

/// Replace every `TokenKind::Backslash` of `tokens` by its resolved form.
/// `line` must be the line the tokens were scanned from.
pub fn resolve<'a>(line: &'a str, tokens: Vec<Token<'a>>) -> Vec<Token<'a>> {
    let mut out: Vec<Token<'a>> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        if token.kind != TokenKind::Backslash {
            push_token(line, &mut out, token);
            continue;
        }
        match iter.peek().copied() {
            Some(next) if next.kind == TokenKind::Backslash => {
                iter.next();
                let text = &line[token.start..next.end()];
                out.push(Token::new(TokenKind::LiteralBackslash, text, token.start));
            }
            Some(next) if next.text.starts_with('_') => {
                iter.next();
                let run = next.text.len() - next.text.trim_start_matches('_').len();
                let shielded_end = next.start + run;
                let text = &line[token.start..shielded_end];
                out.push(Token::new(TokenKind::Escape, text, token.start));
                if shielded_end < next.end() {
                    let rest = Token::new(TokenKind::Text, &line[shielded_end..next.end()], shielded_end);
                    push_token(line, &mut out, rest);
                }
            }
            _ => {
                push_token(line, &mut out, Token::new(TokenKind::Text, token.text, token.start));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::scanner::scan;
    use crate::token::MarkerKind;

    fn resolved(line: &str) -> Vec<(TokenKind, &str)> {
        resolve(line, scan(line, Options::default()))
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn shields_underscore_runs() {
        assert_eq!(
            resolved("\\_abc\\_"),
            vec![
                (TokenKind::Escape, "\\_"),
                (TokenKind::Text, "abc"),
                (TokenKind::Escape, "\\_"),
            ]
        );
        assert_eq!(
            resolved("\\__abc"),
            vec![(TokenKind::Escape, "\\__"), (TokenKind::Text, "abc")]
        );
    }

    #[test]
    fn shields_long_runs_without_swallowing_text() {
        assert_eq!(
            resolved("\\___ab"),
            vec![(TokenKind::Escape, "\\___"), (TokenKind::Text, "ab")]
        );
    }

    #[test]
    fn double_backslash_is_consumed_whole() {
        assert_eq!(
            resolved("\\\\_abc_"),
            vec![
                (TokenKind::LiteralBackslash, "\\\\"),
                (TokenKind::Marker(MarkerKind::Emphasis), "_"),
                (TokenKind::Text, "abc"),
                (TokenKind::Marker(MarkerKind::Emphasis), "_"),
            ]
        );
    }

    #[test]
    fn inert_backslash_joins_text() {
        assert_eq!(resolved("\\abc"), vec![(TokenKind::Text, "\\abc")]);
        assert_eq!(resolved("ab\\"), vec![(TokenKind::Text, "ab\\")]);
    }

    #[test]
    fn three_backslashes() {
        assert_eq!(
            resolved("\\\\\\_"),
            vec![(TokenKind::LiteralBackslash, "\\\\"), (TokenKind::Escape, "\\_")]
        );
    }
}
