use crate::application::read_models::CommentReadModel;
use crate::shared::Result;

/// CommentFormatter port for rendering the review comment
pub trait CommentFormatter {
    /// Formats the comment body from the read model
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, model: &CommentReadModel) -> Result<String>;
}
