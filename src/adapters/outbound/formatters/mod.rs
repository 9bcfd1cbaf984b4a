/// Formatter adapters for rendering the review comment
mod markdown_formatter;

pub use markdown_formatter::{MarkdownFormatter, DEFAULT_TITLE};
