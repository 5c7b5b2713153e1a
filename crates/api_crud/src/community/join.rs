use crate::require_profile;
use talkuvo_api_common::{
  community::{JoinCommunity, JoinCommunityResponse, LeaveCommunity},
  context::TalkuvoContext,
  SuccessResponse,
};
use talkuvo_db_schema::{
  source::{
    community::Community,
    community_member::{CommunityMember, CommunityMemberForm},
  },
  traits::{Crud, Joinable},
};
use talkuvo_utils::error::{TalkuvoErrorType, TalkuvoResult};

pub async fn join_community(
  data: &JoinCommunity,
  context: &TalkuvoContext,
) -> TalkuvoResult<JoinCommunityResponse> {
  let profile = require_profile(context).await?;
  Community::read(context.store(), data.community_id).await?;

  // The membership table has no unique pair constraint, so the check lives
  // here.
  if CommunityMember::read_for_pair(context.store(), profile.id, data.community_id)
    .await?
    .is_some()
  {
    Err(TalkuvoErrorType::CouldntJoinCommunity)?
  }

  let form = CommunityMemberForm::new(profile.id, data.community_id);
  let membership = CommunityMember::join(context.store(), &form).await?;
  Ok(JoinCommunityResponse { membership })
}

/// Idempotent, leaving a community you never joined is a no-op.
pub async fn leave_community(
  data: &LeaveCommunity,
  context: &TalkuvoContext,
) -> TalkuvoResult<SuccessResponse> {
  let profile = require_profile(context).await?;
  let form = CommunityMemberForm::new(profile.id, data.community_id);
  CommunityMember::leave(context.store(), &form).await?;
  Ok(SuccessResponse::default())
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]

  use super::*;
  use crate::{community::create::create_community, user::create::register};
  use pretty_assertions::assert_eq;
  use talkuvo_api_common::{community::CreateCommunity, person::Register};
  use talkuvo_db_schema::{enums::MembershipRole, newtypes::CommunityId};
  use uuid::Uuid;

  async fn sign_up(context: &TalkuvoContext, username: &str) {
    register(
      &Register {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "hunter22".to_string(),
        password_verify: "hunter22".to_string(),
      },
      context,
    )
    .await
    .unwrap();
  }

  #[tokio::test]
  async fn join_once_then_leave() {
    let context = TalkuvoContext::init_test_context().unwrap();
    sign_up(&context, "alice").await;
    let community = create_community(
      &CreateCommunity {
        name: "Rust Meetup".to_string(),
        description: None,
      },
      &context,
    )
    .await
    .unwrap()
    .community;

    // A second account joins as a plain member.
    sign_up(&context, "bob").await;
    let response = join_community(
      &JoinCommunity {
        community_id: community.id,
      },
      &context,
    )
    .await
    .unwrap();
    assert_eq!(MembershipRole::Member, response.membership.role);

    let err = join_community(
      &JoinCommunity {
        community_id: community.id,
      },
      &context,
    )
    .await
    .unwrap_err();
    assert_eq!(TalkuvoErrorType::CouldntJoinCommunity, err.error_type);

    leave_community(
      &LeaveCommunity {
        community_id: community.id,
      },
      &context,
    )
    .await
    .unwrap();
    // Leaving again stays quiet.
    leave_community(
      &LeaveCommunity {
        community_id: community.id,
      },
      &context,
    )
    .await
    .unwrap();

    // The creator's admin membership is untouched.
    let count = CommunityMember::count_for_community(context.store(), community.id)
      .await
      .unwrap();
    assert_eq!(1, count);
  }

  #[tokio::test]
  async fn join_unknown_community_is_not_found() {
    let context = TalkuvoContext::init_test_context().unwrap();
    sign_up(&context, "alice").await;
    let err = join_community(
      &JoinCommunity {
        community_id: CommunityId(Uuid::new_v4()),
      },
      &context,
    )
    .await
    .unwrap_err();
    assert_eq!(TalkuvoErrorType::NotFound, err.error_type);
  }
}
