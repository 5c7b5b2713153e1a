use crate::user::create::get_or_create_profile;
use std::time::Duration;
use talkuvo_api_common::{
  auth::{AuthEvent, Session},
  context::TalkuvoContext,
  oauth::{OauthAuthorizationResponse, OauthCallbackQuery, OauthCallbackResponse},
  person::{Login, LoginResponse},
  SuccessResponse,
};
use talkuvo_db_schema::source::profile::Profile;
use talkuvo_utils::error::TalkuvoResult;
use tokio::time::timeout;
use url::Url;

pub async fn login(data: &Login, context: &TalkuvoContext) -> TalkuvoResult<LoginResponse> {
  let session = context.auth().sign_in(&data.email, &data.password).await?;
  let profile = get_or_create_profile(context, &session.user).await?;
  context
    .session_state()
    .set(Some(session.clone()), Some(profile.clone()));
  Ok(LoginResponse { session, profile })
}

/// Settles the session state at startup. The profile fetch is bounded so a
/// stuck store can never wedge the app in its loading state; on timeout the
/// session survives with no profile attached.
pub async fn bootstrap_session(context: &TalkuvoContext) -> TalkuvoResult<()> {
  match context.auth().current_session().await {
    Some(session) => {
      let profile = fetch_profile_bounded(context, &session).await;
      context.session_state().set(Some(session), profile);
    }
    None => context.session_state().clear(),
  }
  Ok(())
}

/// Feeds auth provider events into the observable session state. Run this
/// from the task draining the provider's event channel.
pub async fn apply_auth_event(event: AuthEvent, context: &TalkuvoContext) -> TalkuvoResult<()> {
  match event {
    AuthEvent::SignedIn(session) => {
      let profile = fetch_profile_bounded(context, &session).await;
      context.session_state().set(Some(session), profile);
    }
    AuthEvent::SignedOut => context.session_state().clear(),
  }
  Ok(())
}

async fn fetch_profile_bounded(context: &TalkuvoContext, session: &Session) -> Option<Profile> {
  let secs = context.settings().auth.profile_fetch_timeout;
  match timeout(
    Duration::from_secs(secs),
    get_or_create_profile(context, &session.user),
  )
  .await
  {
    Ok(Ok(profile)) => Some(profile),
    Ok(Err(e)) => {
      tracing::warn!("Couldnt load profile for session: {e}");
      None
    }
    Err(_) => {
      tracing::warn!("Profile fetch timed out after {secs}s");
      None
    }
  }
}

pub async fn sign_in_with_oauth(
  context: &TalkuvoContext,
) -> TalkuvoResult<OauthAuthorizationResponse> {
  let settings = context.settings();
  let redirect_to = Url::parse(&settings.app_url)?.join(&settings.auth.redirect_path)?;
  let authorize_url = context.auth().oauth_authorize_url(&redirect_to)?;
  Ok(OauthAuthorizationResponse { authorize_url })
}

/// Lands the browser coming back from the OAuth consent screen. A missing
/// code, a provider error or a failed exchange all fall back to the login
/// page instead of surfacing an error page.
pub async fn oauth_callback(
  data: &OauthCallbackQuery,
  context: &TalkuvoContext,
) -> TalkuvoResult<OauthCallbackResponse> {
  let code = match (&data.code, &data.error) {
    (Some(code), None) => code,
    _ => {
      return Ok(OauthCallbackResponse {
        redirect_to: "/login".to_string(),
      })
    }
  };

  let session = match context.auth().exchange_code_for_session(code).await {
    Ok(session) => session,
    Err(e) => {
      tracing::warn!("OAuth code exchange failed: {e}");
      return Ok(OauthCallbackResponse {
        redirect_to: "/login".to_string(),
      });
    }
  };

  let profile = fetch_profile_bounded(context, &session).await;
  context.session_state().set(Some(session), profile);
  Ok(OauthCallbackResponse {
    redirect_to: "/".to_string(),
  })
}

/// Signs out everywhere. Local state clears even when the provider call
/// fails, a dead backend must not leave the ui stuck signed in.
pub async fn logout(context: &TalkuvoContext) -> TalkuvoResult<SuccessResponse> {
  if let Err(e) = context.auth().sign_out().await {
    tracing::warn!("Sign out failed upstream: {e}");
  }
  context.session_state().clear();
  Ok(SuccessResponse::default())
}
