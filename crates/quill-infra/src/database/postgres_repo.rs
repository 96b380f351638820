//! PostgreSQL repository implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use quill_core::domain::{Comment, Post};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{ensure_affected, query_err, write_err};

/// PostgreSQL post/comment repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// Hand back the connection, e.g. to inspect a mock's transaction log.
    #[cfg(test)]
    pub(crate) fn into_connection(self) -> DbConn {
        self.db
    }

    /// Comments for the given posts, newest first, grouped by post.
    async fn comments_by_post(
        &self,
        post_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<Comment>>, RepoError> {
        let models = CommentEntity::find()
            .filter(comment::Column::PostId.is_in(post_ids))
            .order_by_desc(comment::Column::CreatedAt)
            .order_by_desc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        let mut grouped: HashMap<Uuid, Vec<Comment>> = HashMap::new();
        for model in models {
            grouped.entry(model.post_id).or_default().push(model.into());
        }
        Ok(grouped)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create_post(&self, post: Post) -> Result<Post, RepoError> {
        tracing::debug!(post_id = %post.id, user_id = %post.user_id, "Inserting post");

        let model = post::ActiveModel::from(&post)
            .insert(&self.db)
            .await
            .map_err(write_err)?;

        Ok(model.into())
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let Some(model) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?
        else {
            return Ok(None);
        };

        let mut post: Post = model.into();
        post.comments = self
            .comments_by_post(vec![id])
            .await?
            .remove(&id)
            .unwrap_or_default();

        Ok(Some(post))
    }

    async fn find_posts_by_user(&self, user_id: &str) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(user_id = %user_id, "Listing posts for user");

        let models = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let mut comments = self
            .comments_by_post(models.iter().map(|m| m.id).collect())
            .await?;

        Ok(models
            .into_iter()
            .map(|model| {
                let mut post: Post = model.into();
                post.comments = comments.remove(&post.id).unwrap_or_default();
                post
            })
            .collect())
    }

    async fn update_post(&self, post: Post) -> Result<Post, RepoError> {
        tracing::debug!(post_id = %post.id, "Updating post");

        let changes = post::ActiveModel {
            title: Set(post.title.clone()),
            content: Set(post.content.clone()),
            is_edited: Set(post.is_edited),
            updated_at: Set(post.updated_at.into()),
            ..Default::default()
        };

        let result = PostEntity::update_many()
            .set(changes)
            .filter(post::Column::Id.eq(post.id))
            .filter(post::Column::UserId.eq(post.user_id.as_str()))
            .exec(&self.db)
            .await
            .map_err(write_err)?;

        ensure_affected(result.rows_affected)?;
        Ok(post)
    }

    async fn delete_post(&self, id: Uuid, user_id: &str) -> Result<(), RepoError> {
        tracing::debug!(post_id = %id, "Deleting post with its comments");

        let txn = self.db.begin().await.map_err(query_err)?;

        let comments = CommentEntity::delete_many()
            .filter(comment::Column::PostId.eq(id))
            .exec(&txn)
            .await
            .map_err(write_err)?;

        let posts = PostEntity::delete_many()
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::UserId.eq(user_id))
            .exec(&txn)
            .await
            .map_err(write_err)?;

        if let Err(e) = ensure_affected(posts.rows_affected) {
            txn.rollback().await.map_err(query_err)?;
            return Err(e);
        }

        txn.commit().await.map_err(query_err)?;

        tracing::debug!(
            post_id = %id,
            comments_deleted = comments.rows_affected,
            "Post deleted"
        );
        Ok(())
    }

    async fn create_comment(&self, comment: Comment) -> Result<Comment, RepoError> {
        tracing::debug!(comment_id = %comment.id, post_id = %comment.post_id, "Inserting comment");

        let model = comment::ActiveModel::from(&comment)
            .insert(&self.db)
            .await
            .map_err(write_err)?;

        Ok(model.into())
    }

    async fn find_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<Comment>, RepoError> {
        let result = CommentEntity::find_by_id(comment_id)
            .filter(comment::Column::PostId.eq(post_id))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn update_comment(&self, comment: Comment) -> Result<Comment, RepoError> {
        tracing::debug!(comment_id = %comment.id, "Updating comment");

        let changes = comment::ActiveModel {
            text: Set(comment.text.clone()),
            is_edited: Set(comment.is_edited),
            updated_at: Set(comment.updated_at.into()),
            ..Default::default()
        };

        let result = CommentEntity::update_many()
            .set(changes)
            .filter(comment::Column::Id.eq(comment.id))
            .filter(comment::Column::PostId.eq(comment.post_id))
            .filter(comment::Column::UserId.eq(comment.user_id.as_str()))
            .exec(&self.db)
            .await
            .map_err(write_err)?;

        ensure_affected(result.rows_affected)?;
        Ok(comment)
    }
}
