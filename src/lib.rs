//! Render a small markdown subset to HTML.
//!
//! Supported constructs:
//! - `#` at the very start of a line wraps the line in `<h1>`;
//! - `_text_` becomes `<em>text</em>`;
//! - `__text__` becomes `<strong>text</strong>`;
//! - `\` shields a following underscore run or backslash.
//!
//! Lines are rendered independently and joined back with `\n`. Anything
//! that does not form a valid construct is kept as literal text, so every
//! input renders.
//!
//! ```
//! assert_eq!(mdlite::render("#a__b_c_d__e"), "<h1>a<strong>b<em>c</em>d</strong>e</h1>");
//! assert_eq!(mdlite::render("a_b c_d"), "a_b c_d");
//! ```

pub mod ast;
pub mod escape;
pub mod options;
pub mod pairing;
pub mod scanner;
pub mod text;
pub mod token;

pub use ast::{
    Block, Inline, block_to_events, block_to_html, blocks_to_html, inline_to_events,
    parse_document, parse_line,
};
pub use options::Options;
pub use text::{Fragment, Line, Region};
pub use token::{MarkerKind, Token, TokenKind};

/// Render `markdown` with every construct enabled.
pub fn render(markdown: &str) -> String {
    render_with_options(markdown, Options::default())
}

pub fn render_with_options(markdown: &str, options: Options) -> String {
    let mut out = String::with_capacity(markdown.len() + markdown.len() / 4);
    push_html(&mut out, markdown, options);
    out
}

/// Render `markdown` and append the HTML to `out`.
pub fn push_html(out: &mut String, markdown: &str, options: Options) {
    let blocks = parse_document(markdown, options);
    ast::writer::blocks_to_region(&blocks).write_to(out);
}
