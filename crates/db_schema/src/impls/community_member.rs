use crate::{
  newtypes::{CommunityId, MembershipId, ProfileId},
  source::community_member::{CommunityMember, CommunityMemberForm},
  store::StoreClient,
  traits::Joinable,
  utils::now,
};
use async_trait::async_trait;
use talkuvo_utils::error::StoreError;
use uuid::Uuid;

impl CommunityMember {
  pub const USER_FKEY: &'static str = "community_members_user_id_fkey";
  pub const COMMUNITY_FKEY: &'static str = "community_members_community_id_fkey";

  pub async fn read_for_pair(
    store: &StoreClient,
    user_id: ProfileId,
    community_id: CommunityId,
  ) -> Result<Option<Self>, StoreError> {
    Ok(
      store
        .tables()?
        .community_members
        .iter()
        .find(|m| m.user_id == user_id && m.community_id == community_id)
        .cloned(),
    )
  }

  pub async fn count_for_community(
    store: &StoreClient,
    community_id: CommunityId,
  ) -> Result<usize, StoreError> {
    Ok(
      store
        .tables()?
        .community_members
        .iter()
        .filter(|m| m.community_id == community_id)
        .count(),
    )
  }
}

#[async_trait]
impl Joinable for CommunityMember {
  type Form = CommunityMemberForm;

  async fn join(store: &StoreClient, form: &Self::Form) -> Result<Self, StoreError> {
    let mut tables = store.tables()?;
    if !tables.profiles.iter().any(|p| p.id == form.user_id) {
      return Err(StoreError::ForeignKeyViolation(Self::USER_FKEY));
    }
    if !tables.communities.iter().any(|c| c.id == form.community_id) {
      return Err(StoreError::ForeignKeyViolation(Self::COMMUNITY_FKEY));
    }

    // Note: nothing deduplicates the (user, community) pair here, matching
    // the store schema. Callers are expected to check membership first.
    let member = CommunityMember {
      id: MembershipId(Uuid::new_v4()),
      user_id: form.user_id,
      community_id: form.community_id,
      role: form.role,
      joined_at: now(),
    };
    tables.community_members.push(member.clone());
    Ok(member)
  }

  async fn leave(store: &StoreClient, form: &Self::Form) -> Result<usize, StoreError> {
    let mut tables = store.tables()?;
    let before = tables.community_members.len();
    tables
      .community_members
      .retain(|m| !(m.user_id == form.user_id && m.community_id == form.community_id));
    Ok(before - tables.community_members.len())
  }
}
