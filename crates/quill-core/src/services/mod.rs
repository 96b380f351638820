//! Application services - the business rules that sit on top of the ports.

mod post_comment;

pub use post_comment::PostCommentService;
