use crate::ast::block::Block;
use crate::ast::inline::Inline;
use crate::escape::resolve;
use crate::options::Options;
use crate::pairing::{Pair, find_pairs};
use crate::scanner::scan;
use crate::token::{MarkerKind, Token, TokenKind};
use log::debug;
use pulldown_cmark::HeadingLevel;

#[derive(Clone, Copy)]
enum Role {
    Open(MarkerKind),
    Close(MarkerKind),
}

/// Build the inline tree for a resolved token sequence and its pairs.
///
/// Paired markers become `Emphasis`/`Strong` nodes; every other token
/// contributes its literal text. `pairs` must be properly nested (as
/// returned by [`find_pairs`]); a pair that does not nest is rendered
/// literally rather than rejected.
pub fn tokens_to_inlines(tokens: &[Token<'_>], pairs: &[Pair]) -> Vec<Inline> {
    // A simple stack frame for an open tag collecting its children.
    struct Frame {
        kind: MarkerKind,
        inlines: Vec<Inline>,
    }

    fn current<'s>(stack: &'s mut [Frame], root: &'s mut Vec<Inline>) -> &'s mut Vec<Inline> {
        match stack.last_mut() {
            Some(frame) => &mut frame.inlines,
            None => root,
        }
    }

    let mut roles: Vec<Option<Role>> = vec![None; tokens.len()];
    for pair in pairs {
        if let Some(slot) = roles.get_mut(pair.open) {
            *slot = Some(Role::Open(pair.kind));
        }
        if let Some(slot) = roles.get_mut(pair.close) {
            *slot = Some(Role::Close(pair.kind));
        }
    }

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Vec<Inline> = Vec::new();

    for (token, role) in tokens.iter().zip(roles) {
        match role {
            Some(Role::Open(kind)) => stack.push(Frame {
                kind,
                inlines: Vec::new(),
            }),
            Some(Role::Close(kind)) if stack.last().is_some_and(|f| f.kind == kind) => {
                if let Some(frame) = stack.pop() {
                    let node = match kind {
                        MarkerKind::Emphasis => Inline::Emphasis(frame.inlines),
                        MarkerKind::Strong => Inline::Strong(frame.inlines),
                    };
                    current(&mut stack, &mut root).push(node);
                }
            }
            _ => push_text(current(&mut stack, &mut root), token.literal()),
        }
    }

    // unclosed frames fall back to their literal marker
    while let Some(frame) = stack.pop() {
        let parent = current(&mut stack, &mut root);
        push_text(parent, frame.kind.literal());
        for inl in frame.inlines {
            match inl {
                Inline::Text(s) => push_text(parent, &s),
                other => parent.push(other),
            }
        }
    }
    root
}

fn push_text(inlines: &mut Vec<Inline>, s: &str) {
    if s.is_empty() {
        return;
    }
    if let Some(Inline::Text(prev)) = inlines.last_mut() {
        prev.push_str(s);
    } else {
        inlines.push(Inline::Text(s.to_string()));
    }
}

/// Run one line (no `\n`) through scanning, escape resolution, pairing and
/// tree building. A line starting with an unescaped `#` becomes a level 1
/// heading whose content is the rest of the line.
pub fn parse_line(line: &str, options: Options) -> Block {
    let tokens = resolve(line, scan(line, options));
    let pairs = find_pairs(line, &tokens);
    let children = tokens_to_inlines(&tokens, &pairs);
    match tokens.first() {
        Some(first) if first.kind == TokenKind::HeaderMark => {
            debug!("heading line {line:?}");
            Block::Heading {
                level: HeadingLevel::H1,
                children,
            }
        }
        _ => Block::Paragraph(children),
    }
}

/// Split `markdown` on `\n` and parse every line on its own.
pub fn parse_document(markdown: &str, options: Options) -> Vec<Block> {
    if markdown.is_empty() {
        return Vec::new();
    }
    markdown
        .split('\n')
        .map(|line| parse_line(line, options))
        .collect()
}
