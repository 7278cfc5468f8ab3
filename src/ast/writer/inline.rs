use crate::ast::Inline;
use crate::text::Line;

/// Append the HTML for `inl` to `line`. Text is written as-is.
pub fn append_inline_to_line(line: &mut Line, inl: &Inline) {
    match inl {
        Inline::Text(s) => {
            line.push(s.clone());
        }
        Inline::Emphasis(children) => {
            line.push("<em>");
            for c in children {
                append_inline_to_line(line, c);
            }
            line.push("</em>");
        }
        Inline::Strong(children) => {
            line.push("<strong>");
            for c in children {
                append_inline_to_line(line, c);
            }
            line.push("</strong>");
        }
    }
}
