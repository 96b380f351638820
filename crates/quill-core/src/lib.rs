//! # Quill Core
//!
//! The domain layer of the Quill posts service.
//! This crate contains the post/comment business rules with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::PostCommentService;
