use crate::ast::inline::{Inline, inline_to_events};
use pulldown_cmark::{Event, HeadingLevel, Tag, TagEnd};

/// Block level AST nodes. Every input line becomes exactly one block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// An ordinary line.
    Paragraph(Vec<Inline>),
    /// A line that started with `#`; the mark itself is not kept.
    Heading {
        level: HeadingLevel,
        children: Vec<Inline>,
    },
}

impl Block {
    pub fn children(&self) -> &[Inline] {
        match self {
            Block::Paragraph(children) | Block::Heading { children, .. } => children,
        }
    }
}

/// Convert a `Block` into pulldown-cmark events (owned, 'static).
pub fn block_to_events(b: &Block) -> Vec<Event<'static>> {
    match b {
        Block::Paragraph(children) => {
            let mut out = vec![Event::Start(Tag::Paragraph)];
            for c in children {
                out.extend(inline_to_events(c));
            }
            out.push(Event::End(TagEnd::Paragraph));
            out
        }
        Block::Heading { level, children } => {
            let mut out = vec![Event::Start(Tag::Heading {
                level: *level,
                id: None,
                classes: vec![],
                attrs: vec![],
            })];
            for c in children {
                out.extend(inline_to_events(c));
            }
            out.push(Event::End(TagEnd::Heading(*level)));
            out
        }
    }
}
