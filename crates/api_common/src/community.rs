use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use talkuvo_db_schema::{
  newtypes::CommunityId,
  source::{community::Community, community_member::CommunityMember},
};

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CreateCommunity {
  pub name: String,
  pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommunityResponse {
  pub community: Community,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Fetch one community. Looked up by slug first, by name as a fallback for
/// links minted before slugs existed.
pub struct GetCommunity {
  pub slug: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetCommunityResponse {
  pub community: Community,
  pub member_count: usize,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ListCommunities {}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// The signed-in user's joined communities, for the sidebar.
pub struct ListJoinedCommunities {}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListCommunitiesResponse {
  pub communities: Vec<Community>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct JoinCommunity {
  pub community_id: CommunityId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JoinCommunityResponse {
  pub membership: CommunityMember,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LeaveCommunity {
  pub community_id: CommunityId,
}
