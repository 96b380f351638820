//! Domain entities - the core business objects.

mod comment;
mod input;
mod post;

pub use comment::Comment;
pub use input::{
    COMMENT_TEXT_MIN_CHARS, CONTENT_MIN_CHARS, CommentInput, PostInput, TITLE_MAX_CHARS,
    TITLE_MIN_CHARS,
};
pub use post::{Post, order_newest_first};
