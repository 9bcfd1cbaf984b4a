//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that carry exactly what the
//! comment formatter renders, in rendering order.

pub mod comment_read_model;
pub mod comment_read_model_builder;

pub use comment_read_model::{CommentReadModel, FindingRowView, SummaryView};
pub use comment_read_model_builder::CommentReadModelBuilder;
