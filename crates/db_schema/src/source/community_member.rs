use crate::{
  enums::MembershipRole,
  newtypes::{CommunityId, MembershipId, ProfileId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CommunityMember {
  pub id: MembershipId,
  pub user_id: ProfileId,
  pub community_id: CommunityId,
  pub role: MembershipRole,
  pub joined_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct CommunityMemberForm {
  pub user_id: ProfileId,
  pub community_id: CommunityId,
  pub role: MembershipRole,
}

impl CommunityMemberForm {
  pub fn new(user_id: ProfileId, community_id: CommunityId) -> Self {
    CommunityMemberForm {
      user_id,
      community_id,
      role: MembershipRole::Member,
    }
  }
}
