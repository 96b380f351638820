//! The post/comment service - ownership, edit tracking, cascade and ordering.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Comment, CommentInput, Post, PostInput, order_newest_first};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// Business rules for posts and their comment threads.
///
/// Stateless: build one per process around a storage handle and clone it
/// freely. All durable state lives behind [`PostRepository`].
#[derive(Clone)]
pub struct PostCommentService {
    repo: Arc<dyn PostRepository>,
}

impl PostCommentService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// Create a post owned by `acting_user`.
    pub async fn create_post(&self, input: PostInput, acting_user: &str) -> Result<Post, DomainError> {
        input.validate()?;

        let post = Post::new(acting_user, input.title, input.content);
        Ok(self.repo.create_post(post).await?)
    }

    /// All posts owned by `acting_user`, newest first, each with its
    /// comments newest first.
    pub async fn list_posts(&self, acting_user: &str) -> Result<Vec<Post>, DomainError> {
        let mut posts = self.repo.find_posts_by_user(acting_user).await?;
        order_newest_first(&mut posts);
        Ok(posts)
    }

    /// Load a post the acting user owns.
    pub async fn get_post(&self, post_id: Uuid, acting_user: &str) -> Result<Post, DomainError> {
        let mut post = self
            .repo
            .find_post(post_id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(post_id))?;

        if !post.is_owned_by(acting_user) {
            return Err(DomainError::Forbidden);
        }

        post.sort_comments();
        Ok(post)
    }

    /// Replace a post's title and content and mark it edited.
    pub async fn update_post(
        &self,
        post_id: Uuid,
        acting_user: &str,
        input: PostInput,
    ) -> Result<Post, DomainError> {
        input.validate()?;

        let mut post = self.get_post(post_id, acting_user).await?;
        post.apply_edit(input.title, input.content);

        self.repo
            .update_post(post)
            .await
            .map_err(|e| guarded_write(e, DomainError::post_not_found(post_id)))
    }

    /// Delete a post and, with it, every comment on it.
    pub async fn delete_post(&self, post_id: Uuid, acting_user: &str) -> Result<(), DomainError> {
        let post = self.get_post(post_id, acting_user).await?;

        self.repo
            .delete_post(post.id, &post.user_id)
            .await
            .map_err(|e| guarded_write(e, DomainError::post_not_found(post_id)))
    }

    /// Comment on a post. Only the post's owner may comment.
    pub async fn add_comment(
        &self,
        post_id: Uuid,
        input: CommentInput,
        acting_user: &str,
    ) -> Result<Comment, DomainError> {
        input.validate()?;

        let post = self.get_post(post_id, acting_user).await?;
        let comment = Comment::new(post.id, acting_user, input.text);

        self.repo
            .create_comment(comment)
            .await
            .map_err(|e| guarded_write(e, DomainError::post_not_found(post_id)))
    }

    /// Edit a comment's text. Only the comment's author may edit it,
    /// whoever owns the post.
    pub async fn update_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
        acting_user: &str,
        input: CommentInput,
    ) -> Result<Comment, DomainError> {
        input.validate()?;

        let mut comment = self
            .repo
            .find_comment(post_id, comment_id)
            .await?
            .ok_or_else(|| DomainError::comment_not_found(comment_id))?;

        if !comment.is_authored_by(acting_user) {
            return Err(DomainError::Forbidden);
        }

        comment.apply_edit(input.text);

        self.repo
            .update_comment(comment)
            .await
            .map_err(|e| guarded_write(e, DomainError::comment_not_found(comment_id)))
    }
}

/// A guarded write that matched nothing means the entity vanished after it
/// was checked.
fn guarded_write(err: RepoError, not_found: DomainError) -> DomainError {
    match err {
        RepoError::NotFound => not_found,
        other => DomainError::Repository(other),
    }
}
