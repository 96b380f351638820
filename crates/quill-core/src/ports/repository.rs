use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, Post};
use crate::error::RepoError;

/// Storage port for the post/comment aggregate.
///
/// Writes are guarded: updates and deletes match on the entity id *and* its
/// owner, and report [`RepoError::NotFound`] when no row matched. Each method
/// is one unit of work against the store.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a new post. Comments on the value are ignored.
    async fn create_post(&self, post: Post) -> Result<Post, RepoError>;

    /// Find a post by id with its comments populated.
    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Find every post owned by `user_id`, comments populated.
    async fn find_posts_by_user(&self, user_id: &str) -> Result<Vec<Post>, RepoError>;

    /// Persist title, content, edit flag and `updated_at` of an existing post
    /// owned by `post.user_id`.
    async fn update_post(&self, post: Post) -> Result<Post, RepoError>;

    /// Delete a post owned by `user_id` together with all of its comments,
    /// atomically.
    async fn delete_post(&self, id: Uuid, user_id: &str) -> Result<(), RepoError>;

    /// Insert a comment. Fails with [`RepoError::NotFound`] if the parent
    /// post no longer exists.
    async fn create_comment(&self, comment: Comment) -> Result<Comment, RepoError>;

    /// Find a comment by id, only if it belongs to `post_id`.
    async fn find_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<Comment>, RepoError>;

    /// Persist text, edit flag and `updated_at` of an existing comment
    /// authored by `comment.user_id` under `comment.post_id`.
    async fn update_comment(&self, comment: Comment) -> Result<Comment, RepoError>;
}
