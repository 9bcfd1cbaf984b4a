/// Use cases - Application business logic orchestration
pub mod generate_comment;

pub use generate_comment::GenerateCommentUseCase;
