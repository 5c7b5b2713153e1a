use talkuvo_api_common::{
  context::TalkuvoContext,
  person::{GetProfileByUsername, ProfileResponse},
};
use talkuvo_db_schema::source::profile::Profile;
use talkuvo_utils::error::TalkuvoResult;

/// Public profile page lookup, `u/{username}`.
pub async fn get_profile_by_username(
  data: &GetProfileByUsername,
  context: &TalkuvoContext,
) -> TalkuvoResult<ProfileResponse> {
  let profile = Profile::read_by_username(context.store(), &data.username).await?;
  Ok(ProfileResponse { profile })
}
