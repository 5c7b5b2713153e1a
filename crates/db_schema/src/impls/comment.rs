use crate::{
  newtypes::{CommentId, PostId},
  source::comment::{Comment, CommentInsertForm, CommentUpdateForm},
  store::StoreClient,
  traits::Crud,
  utils::{now, refreshed},
};
use async_trait::async_trait;
use talkuvo_utils::error::StoreError;
use uuid::Uuid;

impl Comment {
  pub const AUTHOR_FKEY: &'static str = "comments_author_id_fkey";
  pub const POST_FKEY: &'static str = "comments_post_id_fkey";
  pub const PARENT_FKEY: &'static str = "comments_parent_id_fkey";

  /// Oldest first, the order threads render in.
  pub async fn list_for_post(
    store: &StoreClient,
    post_id: PostId,
  ) -> Result<Vec<Self>, StoreError> {
    let tables = store.tables()?;
    let mut comments: Vec<Comment> = tables
      .comments
      .iter()
      .filter(|c| c.post_id == post_id)
      .cloned()
      .collect();
    comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    Ok(comments)
  }
}

#[async_trait]
impl Crud for Comment {
  type InsertForm = CommentInsertForm;
  type UpdateForm = CommentUpdateForm;
  type IdType = CommentId;

  async fn create(store: &StoreClient, form: &Self::InsertForm) -> Result<Self, StoreError> {
    let mut tables = store.tables()?;
    if !tables.profiles.iter().any(|p| p.id == form.author_id) {
      return Err(StoreError::ForeignKeyViolation(Self::AUTHOR_FKEY));
    }
    if !tables.posts.iter().any(|p| p.id == form.post_id) {
      return Err(StoreError::ForeignKeyViolation(Self::POST_FKEY));
    }
    if let Some(parent_id) = form.parent_id {
      if !tables.comments.iter().any(|c| c.id == parent_id) {
        return Err(StoreError::ForeignKeyViolation(Self::PARENT_FKEY));
      }
    }

    let created = now();
    let comment = Comment {
      id: CommentId(Uuid::new_v4()),
      content: form.content.clone(),
      author_id: form.author_id,
      post_id: form.post_id,
      parent_id: form.parent_id,
      created_at: created,
      updated_at: created,
    };
    tables.comments.push(comment.clone());
    Ok(comment)
  }

  async fn read(store: &StoreClient, id: Self::IdType) -> Result<Self, StoreError> {
    store
      .tables()?
      .comments
      .iter()
      .find(|c| c.id == id)
      .cloned()
      .ok_or(StoreError::NotFound)
  }

  async fn update(
    store: &StoreClient,
    id: Self::IdType,
    form: &Self::UpdateForm,
  ) -> Result<Self, StoreError> {
    let mut tables = store.tables()?;
    let comment = tables
      .comments
      .iter_mut()
      .find(|c| c.id == id)
      .ok_or(StoreError::NotFound)?;
    if let Some(content) = form.content.clone() {
      comment.content = content;
    }
    comment.updated_at = refreshed(comment.updated_at);
    Ok(comment.clone())
  }
}
