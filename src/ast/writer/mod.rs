//! HTML output for the AST.

pub mod blocks;
pub mod inline;

pub use blocks::{block_to_html, block_to_line, blocks_to_html, blocks_to_region};
pub use inline::append_inline_to_line;
