use crate::ast::{Block, Inline};
use crate::text::{Fragment, Line, Region};
use pulldown_cmark::HeadingLevel;

use super::inline::append_inline_to_line;

fn render_paragraph(p: &[Inline]) -> Line {
    let mut l = Line::new();
    for inl in p {
        append_inline_to_line(&mut l, inl);
    }
    l
}

fn render_heading(level: &HeadingLevel, content: &[Inline]) -> Line {
    let n = match level {
        HeadingLevel::H1 => 1usize,
        HeadingLevel::H2 => 2usize,
        HeadingLevel::H3 => 3usize,
        HeadingLevel::H4 => 4usize,
        HeadingLevel::H5 => 5usize,
        HeadingLevel::H6 => 6usize,
    };
    let tag = format!("h{n}");
    let mut l = render_paragraph(content);
    l.wrap(Fragment::open_tag(&tag), Fragment::close_tag(&tag));
    l
}

/// Render a single block as one HTML line.
pub fn block_to_line(b: &Block) -> Line {
    match b {
        Block::Paragraph(children) => render_paragraph(children),
        Block::Heading { level, children } => render_heading(level, children),
    }
}

pub fn block_to_html(b: &Block) -> String {
    block_to_line(b).apply()
}

/// Render blocks to a Region, one line per block.
pub fn blocks_to_region(blocks: &[Block]) -> Region {
    blocks.iter().map(block_to_line).collect()
}

/// Render blocks to HTML, joining lines with '\n'.
pub fn blocks_to_html(blocks: &[Block]) -> String {
    blocks_to_region(blocks).apply()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_levels() {
        let b = Block::Heading {
            level: HeadingLevel::H3,
            children: vec![Inline::Strong(vec![Inline::Text("x".into())])],
        };
        assert_eq!(block_to_html(&b), "<h3><strong>x</strong></h3>");
    }

    #[test]
    fn text_is_not_escaped() {
        let b = Block::Paragraph(vec![Inline::Text("a < b & c".into())]);
        assert_eq!(block_to_html(&b), "a < b & c");
    }

    #[test]
    fn blocks_join_with_newlines() {
        let blocks = [
            Block::Paragraph(vec![Inline::Text("a".into())]),
            Block::Paragraph(vec![]),
            Block::Heading {
                level: HeadingLevel::H1,
                children: vec![],
            },
        ];
        assert_eq!(blocks_to_html(&blocks), "a\n\n<h1></h1>");
    }
}
