use pulldown_cmark::{CowStr, Event, Tag, TagEnd};

/// Inline level AST nodes for one rendered line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    /// Literal text, including any markers that did not pair.
    Text(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
}

impl Inline {
    /// Concatenated text of this node with all tags removed.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Inline::Text(s) => out.push_str(s),
            Inline::Emphasis(children) | Inline::Strong(children) => {
                for c in children {
                    c.collect_text(out);
                }
            }
        }
    }
}

/// Convert `Inline` to a sequence of pulldown-cmark Events (owned, 'static).
pub fn inline_to_events(inl: &Inline) -> Vec<Event<'static>> {
    match inl {
        Inline::Text(s) => vec![Event::Text(CowStr::from(s.clone()))],
        Inline::Emphasis(children) => {
            let mut out = vec![Event::Start(Tag::Emphasis)];
            for c in children {
                out.extend(inline_to_events(c));
            }
            out.push(Event::End(TagEnd::Emphasis));
            out
        }
        Inline::Strong(children) => {
            let mut out = vec![Event::Start(Tag::Strong)];
            for c in children {
                out.extend(inline_to_events(c));
            }
            out.push(Event::End(TagEnd::Strong));
            out
        }
    }
}
