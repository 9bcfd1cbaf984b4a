use crate::application::dto::CommentResponse;
use crate::shared::Result;

/// OutputPresenter port for publishing the rendered comment
///
/// This port abstracts the output destination (stdout, CI output channel)
/// where the comment and its vulnerability count end up.
pub trait OutputPresenter {
    /// Presents the rendered comment
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination fails a security check (e.g. it is a symbolic link)
    fn present(&self, response: &CommentResponse) -> Result<()>;
}
