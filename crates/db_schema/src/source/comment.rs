use crate::newtypes::{CommentId, PostId, ProfileId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Comment {
  pub id: CommentId,
  pub content: String,
  pub author_id: ProfileId,
  pub post_id: PostId,
  /// Set for replies; the parent must belong to the same post.
  pub parent_id: Option<CommentId>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct CommentInsertForm {
  pub content: String,
  pub author_id: ProfileId,
  pub post_id: PostId,
  pub parent_id: Option<CommentId>,
}

impl CommentInsertForm {
  pub fn new(content: String, author_id: ProfileId, post_id: PostId) -> Self {
    CommentInsertForm {
      content,
      author_id,
      post_id,
      parent_id: None,
    }
  }
}

#[derive(Clone, Debug, Default)]
pub struct CommentUpdateForm {
  pub content: Option<String>,
}
