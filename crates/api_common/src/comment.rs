use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use talkuvo_db_schema::{
  enums::VoteType,
  newtypes::{CommentId, PostId},
  source::comment::Comment,
};

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CreateComment {
  pub post_id: PostId,
  pub content: String,
  /// Set for replies. Must point at a comment under the same post.
  pub parent_id: Option<CommentId>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommentResponse {
  pub comment: Comment,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Fetch the comments under a post, oldest first.
pub struct GetComments {
  pub post_id: PostId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetCommentsResponse {
  pub comments: Vec<Comment>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CreateCommentVote {
  pub comment_id: CommentId,
  /// `None` removes an existing vote.
  pub vote_type: Option<VoteType>,
}
