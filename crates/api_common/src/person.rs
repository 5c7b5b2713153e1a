use crate::auth::Session;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use talkuvo_db_schema::source::profile::Profile;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Sign up with email and password.
pub struct Register {
  pub username: String,
  pub email: String,
  pub password: String,
  pub password_verify: String,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Login {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginResponse {
  pub session: Session,
  pub profile: Profile,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GetProfileByUsername {
  pub username: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProfileResponse {
  pub profile: Profile,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Saves settings for your profile. `None` leaves a field untouched, an
/// empty string clears it.
pub struct SaveProfileSettings {
  pub full_name: Option<String>,
  pub bio: Option<String>,
  pub avatar_url: Option<String>,
}
