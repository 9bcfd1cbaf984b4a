/// Data Transfer Objects for the application layer
mod comment_request;
mod comment_response;
mod output_mode;

pub use comment_request::{CommentRequest, CommentRequestBuilder, DEFAULT_REPORT_PATH};
pub use comment_response::CommentResponse;
pub use output_mode::OutputMode;
