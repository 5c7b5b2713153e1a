use crate::{
  enums::PostType,
  newtypes::{CommunityId, PostId, ProfileId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Post {
  pub id: PostId,
  pub title: String,
  pub author_id: ProfileId,
  pub community_id: CommunityId,
  pub post_type: PostType,
  pub content: Option<String>,
  pub url: Option<String>,
  pub image_url: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct PostInsertForm {
  pub title: String,
  pub author_id: ProfileId,
  pub community_id: CommunityId,
  pub post_type: PostType,
  pub content: Option<String>,
  pub url: Option<String>,
  pub image_url: Option<String>,
}

impl PostInsertForm {
  pub fn new(title: String, author_id: ProfileId, community_id: CommunityId) -> Self {
    PostInsertForm {
      title,
      author_id,
      community_id,
      post_type: PostType::Text,
      content: None,
      url: None,
      image_url: None,
    }
  }
}

#[derive(Clone, Debug, Default)]
pub struct PostUpdateForm {
  pub title: Option<String>,
  pub content: Option<Option<String>>,
  pub url: Option<Option<String>>,
  pub image_url: Option<Option<String>>,
}
