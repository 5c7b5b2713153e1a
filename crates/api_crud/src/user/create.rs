use serde_json::{Map, Value};
use talkuvo_api_common::{
  auth::AuthUser,
  context::TalkuvoContext,
  person::{LoginResponse, Register},
};
use talkuvo_db_schema::{
  source::profile::{Profile, ProfileInsertForm},
  traits::Crud,
};
use talkuvo_utils::{
  error::{StoreError, TalkuvoErrorType, TalkuvoResult},
  utils::validation::{is_valid_email, is_valid_username, password_length_check},
};

/// How many suffixed usernames to try after the preferred one collides.
const MAX_USERNAME_RETRIES: u32 = 10;

pub async fn register(data: &Register, context: &TalkuvoContext) -> TalkuvoResult<LoginResponse> {
  is_valid_username(&data.username)?;
  is_valid_email(&data.email)?;
  password_length_check(&data.password)?;
  if data.password != data.password_verify {
    Err(TalkuvoErrorType::PasswordsDoNotMatch)?
  }

  let mut metadata = Map::new();
  metadata.insert(
    "username".to_string(),
    Value::String(data.username.clone()),
  );
  let session = context
    .auth()
    .sign_up(&data.email, &data.password, metadata)
    .await?;

  // Signup chose the name deliberately, so a collision is an error here
  // rather than a reason to suffix.
  let form = ProfileInsertForm::new(session.user.id, data.username.clone(), data.email.clone());
  let profile = match Profile::create(context.store(), &form).await {
    Ok(profile) => profile,
    Err(StoreError::UniqueViolation(Profile::USERNAME_KEY)) => {
      Err(TalkuvoErrorType::UsernameAlreadyExists)?
    }
    Err(StoreError::UniqueViolation(Profile::EMAIL_KEY)) => {
      Err(TalkuvoErrorType::EmailAlreadyExists)?
    }
    Err(e) => return Err(e.into()),
  };
  context
    .session_state()
    .set(Some(session.clone()), Some(profile.clone()));
  Ok(LoginResponse { session, profile })
}

/// Returns the profile for an authenticated identity, creating it on first
/// login.
///
/// Creation never checks username availability up front. It writes the
/// preferred name and reacts to the store's unique constraint, trying
/// `{name}_1` through `{name}_{MAX_USERNAME_RETRIES}` before giving up. The
/// write itself is an upsert on the identity id, so concurrent calls for the
/// same identity converge on one row.
pub async fn get_or_create_profile(
  context: &TalkuvoContext,
  user: &AuthUser,
) -> TalkuvoResult<Profile> {
  match Profile::read(context.store(), user.id).await {
    Ok(profile) => return Ok(profile),
    Err(StoreError::NotFound) => {}
    Err(e) => return Err(e.into()),
  }

  let base = username_candidate(user);
  let email = user.email.clone().unwrap_or_default();
  let mut form = ProfileInsertForm::new(user.id, base.clone(), email);
  form.full_name = metadata_string(user, "full_name").or_else(|| metadata_string(user, "name"));
  form.avatar_url = metadata_string(user, "avatar_url");

  for suffix in 0..=MAX_USERNAME_RETRIES {
    form.username = if suffix == 0 {
      base.clone()
    } else {
      format!("{base}_{suffix}")
    };
    match Profile::upsert(context.store(), &form).await {
      Ok(profile) => {
        if suffix > 0 {
          tracing::info!(
            "Username {base} was taken, provisioned {} instead",
            profile.username
          );
        }
        return Ok(profile);
      }
      Err(StoreError::UniqueViolation(Profile::USERNAME_KEY)) => continue,
      Err(StoreError::UniqueViolation(Profile::EMAIL_KEY)) => {
        Err(TalkuvoErrorType::EmailAlreadyExists)?
      }
      Err(e) => return Err(e.into()),
    }
  }
  Err(TalkuvoErrorType::UsernameRetriesExhausted.into())
}

/// Preferred username for a fresh profile: whatever the identity provider
/// recorded at signup, then the email local part, then a bare placeholder.
fn username_candidate(user: &AuthUser) -> String {
  metadata_string(user, "username")
    .or_else(|| metadata_string(user, "user_name"))
    .or_else(|| metadata_string(user, "preferred_username"))
    .or_else(|| {
      user
        .email
        .as_deref()
        .and_then(|email| email.split('@').next())
        .filter(|local| !local.is_empty())
        .map(ToString::to_string)
    })
    .unwrap_or_else(|| "user".to_string())
}

fn metadata_string(user: &AuthUser, key: &str) -> Option<String> {
  user
    .user_metadata
    .get(key)
    .and_then(Value::as_str)
    .filter(|s| !s.is_empty())
    .map(ToString::to_string)
}
