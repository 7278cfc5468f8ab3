pub mod block;
pub mod inline;
pub mod parse;
pub mod writer;

pub use block::Block;
pub use block::block_to_events;
pub use inline::Inline;
pub use inline::inline_to_events;
pub use parse::{parse_document, parse_line, tokens_to_inlines};
pub use writer::{block_to_html, blocks_to_html};
