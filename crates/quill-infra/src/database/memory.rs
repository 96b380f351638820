//! In-memory post repository - used as fallback when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Comment, Post};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// A stored row plus its insertion sequence, used as a tiebreaker so that
/// rows created within the same clock tick still list newest first.
struct Row<T> {
    seq: u64,
    value: T,
}

#[derive(Default)]
struct Store {
    posts: HashMap<Uuid, Row<Post>>,
    comments: HashMap<Uuid, Row<Comment>>,
    next_seq: u64,
}

impl Store {
    fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    fn comments_for(&self, post_id: Uuid) -> Vec<Comment> {
        let mut rows: Vec<&Row<Comment>> = self
            .comments
            .values()
            .filter(|row| row.value.post_id == post_id)
            .collect();
        rows.sort_by(|a, b| {
            (b.value.created_at, b.seq).cmp(&(a.value.created_at, a.seq))
        });
        rows.into_iter().map(|row| row.value.clone()).collect()
    }

    fn assemble(&self, row: &Row<Post>) -> Post {
        let mut post = row.value.clone();
        post.comments = self.comments_for(post.id);
        post
    }
}

/// In-memory repository using HashMaps behind a single async RwLock.
///
/// Every operation holds the lock for its whole duration, so each call is
/// atomic with respect to the others. Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of comments stored, across all posts.
    pub async fn comment_count(&self) -> usize {
        self.store.read().await.comments.len()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create_post(&self, mut post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        if store.posts.contains_key(&post.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        post.comments.clear();
        let seq = store.next_seq();
        store.posts.insert(
            post.id,
            Row {
                seq,
                value: post.clone(),
            },
        );
        Ok(post)
    }

    async fn find_post(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).map(|row| store.assemble(row)))
    }

    async fn find_posts_by_user(&self, user_id: &str) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut rows: Vec<&Row<Post>> = store
            .posts
            .values()
            .filter(|row| row.value.user_id == user_id)
            .collect();
        rows.sort_by(|a, b| {
            (b.value.created_at, b.seq).cmp(&(a.value.created_at, a.seq))
        });
        Ok(rows.into_iter().map(|row| store.assemble(row)).collect())
    }

    async fn update_post(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let row = store
            .posts
            .get_mut(&post.id)
            .filter(|row| row.value.user_id == post.user_id)
            .ok_or(RepoError::NotFound)?;

        row.value.title = post.title.clone();
        row.value.content = post.content.clone();
        row.value.is_edited = post.is_edited;
        row.value.updated_at = post.updated_at;
        Ok(post)
    }

    async fn delete_post(&self, id: Uuid, user_id: &str) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let owned = store
            .posts
            .get(&id)
            .is_some_and(|row| row.value.user_id == user_id);
        if !owned {
            return Err(RepoError::NotFound);
        }

        store.comments.retain(|_, row| row.value.post_id != id);
        store.posts.remove(&id);
        Ok(())
    }

    async fn create_comment(&self, comment: Comment) -> Result<Comment, RepoError> {
        let mut store = self.store.write().await;
        if !store.posts.contains_key(&comment.post_id) {
            return Err(RepoError::NotFound);
        }
        if store.comments.contains_key(&comment.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        let seq = store.next_seq();
        store.comments.insert(
            comment.id,
            Row {
                seq,
                value: comment.clone(),
            },
        );
        Ok(comment)
    }

    async fn find_comment(
        &self,
        post_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<Comment>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .comments
            .get(&comment_id)
            .filter(|row| row.value.post_id == post_id)
            .map(|row| row.value.clone()))
    }

    async fn update_comment(&self, comment: Comment) -> Result<Comment, RepoError> {
        let mut store = self.store.write().await;
        let row = store
            .comments
            .get_mut(&comment.id)
            .filter(|row| {
                row.value.post_id == comment.post_id && row.value.user_id == comment.user_id
            })
            .ok_or(RepoError::NotFound)?;

        row.value.text = comment.text.clone();
        row.value.is_edited = comment.is_edited;
        row.value.updated_at = comment.updated_at;
        Ok(comment)
    }
}
