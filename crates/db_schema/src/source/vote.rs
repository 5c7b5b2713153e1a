use crate::{
  enums::VoteType,
  newtypes::{CommentId, PostId, ProfileId, VoteId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a vote applies to. A vote row references exactly one of a post or a
/// comment, never both.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteTarget {
  Post(PostId),
  Comment(CommentId),
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Vote {
  pub id: VoteId,
  pub user_id: ProfileId,
  pub post_id: Option<PostId>,
  pub comment_id: Option<CommentId>,
  pub vote_type: VoteType,
  pub created_at: DateTime<Utc>,
}

impl Vote {
  pub fn target(&self) -> Option<VoteTarget> {
    match (self.post_id, self.comment_id) {
      (Some(post_id), None) => Some(VoteTarget::Post(post_id)),
      (None, Some(comment_id)) => Some(VoteTarget::Comment(comment_id)),
      _ => None,
    }
  }
}

#[derive(Clone, Debug)]
pub struct VoteForm {
  pub user_id: ProfileId,
  pub target: VoteTarget,
  pub vote_type: VoteType,
}
