use crate::require_profile;
use talkuvo_api_common::{
  community::{CommunityResponse, CreateCommunity},
  context::TalkuvoContext,
};
use talkuvo_db_schema::{
  enums::MembershipRole,
  source::{
    community::{Community, CommunityInsertForm},
    community_member::{CommunityMember, CommunityMemberForm},
  },
  traits::{Crud, Joinable},
};
use talkuvo_utils::{
  error::{StoreError, TalkuvoErrorType, TalkuvoResult},
  utils::{slug::slugify, validation::is_valid_community_name},
};

pub async fn create_community(
  data: &CreateCommunity,
  context: &TalkuvoContext,
) -> TalkuvoResult<CommunityResponse> {
  let creator = require_profile(context).await?;
  is_valid_community_name(&data.name)?;

  let mut form = CommunityInsertForm::new(data.name.clone(), slugify(&data.name), creator.id);
  form.description = data.description.clone();

  let community = match Community::create(context.store(), &form).await {
    Ok(community) => community,
    Err(StoreError::UniqueViolation(_)) => Err(TalkuvoErrorType::CommunityAlreadyExists)?,
    Err(e) => return Err(e.into()),
  };

  // The creator becomes the community admin. The community row stays even
  // when this insert fails, there is no transaction spanning both writes.
  let mut member_form = CommunityMemberForm::new(creator.id, community.id);
  member_form.role = MembershipRole::Admin;
  CommunityMember::join(context.store(), &member_form).await?;

  Ok(CommunityResponse { community })
}
