use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use talkuvo_db_schema::{
  enums::{PostType, VoteType},
  newtypes::{CommunityId, PostId},
  source::post::Post,
};
use url::Url;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Create a post. Exactly one of `body`, `url` or `image_url` is set,
/// matching `post_type`.
pub struct CreatePost {
  pub title: String,
  pub community_id: CommunityId,
  pub post_type: PostType,
  pub body: Option<String>,
  pub url: Option<Url>,
  pub image_url: Option<Url>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PostResponse {
  pub post: Post,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GetPost {
  pub post_id: PostId,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Fetch posts, newest first. Scoped to one community when `community_id`
/// is set.
pub struct GetPosts {
  pub community_id: Option<CommunityId>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetPostsResponse {
  pub posts: Vec<Post>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EditPost {
  pub post_id: PostId,
  pub title: Option<String>,
  pub body: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CreatePostVote {
  pub post_id: PostId,
  /// `None` removes an existing vote.
  pub vote_type: Option<VoteType>,
}
