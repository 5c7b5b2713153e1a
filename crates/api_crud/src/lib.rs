use talkuvo_api_common::context::TalkuvoContext;
use talkuvo_db_schema::{source::profile::Profile, traits::Crud};
use talkuvo_utils::error::{TalkuvoErrorType, TalkuvoResult};

pub mod comment;
pub mod community;
pub mod post;
pub mod user;

/// The profile of the signed-in user. Every mutating operation starts here.
pub(crate) async fn require_profile(context: &TalkuvoContext) -> TalkuvoResult<Profile> {
  let session = context
    .auth()
    .current_session()
    .await
    .ok_or(TalkuvoErrorType::NotLoggedIn)?;
  Ok(Profile::read(context.store(), session.user.id).await?)
}
