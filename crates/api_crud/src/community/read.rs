use crate::require_profile;
use talkuvo_api_common::{
  community::{
    GetCommunity,
    GetCommunityResponse,
    ListCommunities,
    ListCommunitiesResponse,
    ListJoinedCommunities,
  },
  context::TalkuvoContext,
};
use talkuvo_db_schema::source::{community::Community, community_member::CommunityMember};
use talkuvo_utils::error::{StoreError, TalkuvoResult};

/// `c/{slug}` page lookup. Falls back to a name lookup so links from before
/// slugs were introduced keep resolving.
pub async fn get_community(
  data: &GetCommunity,
  context: &TalkuvoContext,
) -> TalkuvoResult<GetCommunityResponse> {
  let community = match Community::read_by_slug(context.store(), &data.slug).await {
    Ok(community) => community,
    Err(StoreError::NotFound) => Community::read_by_name(context.store(), &data.slug).await?,
    Err(e) => return Err(e.into()),
  };
  let member_count = CommunityMember::count_for_community(context.store(), community.id).await?;
  Ok(GetCommunityResponse {
    community,
    member_count,
  })
}

/// All communities, alphabetical.
pub async fn list_communities(
  _data: &ListCommunities,
  context: &TalkuvoContext,
) -> TalkuvoResult<ListCommunitiesResponse> {
  let communities = Community::list(context.store()).await?;
  Ok(ListCommunitiesResponse { communities })
}

/// The signed-in user's communities, for the sidebar.
pub async fn list_joined_communities(
  _data: &ListJoinedCommunities,
  context: &TalkuvoContext,
) -> TalkuvoResult<ListCommunitiesResponse> {
  let profile = require_profile(context).await?;
  let communities = Community::list_for_member(context.store(), profile.id).await?;
  Ok(ListCommunitiesResponse { communities })
}
