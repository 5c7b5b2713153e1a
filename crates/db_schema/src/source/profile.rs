use crate::newtypes::ProfileId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The application-level user record, distinct from the identity provider's
/// own account record. Exactly one profile exists per identity id.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Profile {
  pub id: ProfileId,
  pub username: String,
  pub email: String,
  pub full_name: Option<String>,
  pub avatar_url: Option<String>,
  pub bio: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct ProfileInsertForm {
  pub id: ProfileId,
  pub username: String,
  pub email: String,
  pub full_name: Option<String>,
  pub avatar_url: Option<String>,
  pub bio: Option<String>,
}

impl ProfileInsertForm {
  pub fn new(id: ProfileId, username: String, email: String) -> Self {
    ProfileInsertForm {
      id,
      username,
      email,
      full_name: None,
      avatar_url: None,
      bio: None,
    }
  }
}

/// `None` leaves a column untouched; for nullable columns, `Some(None)`
/// nulls it out.
#[derive(Clone, Debug, Default)]
pub struct ProfileUpdateForm {
  pub username: Option<String>,
  pub email: Option<String>,
  pub full_name: Option<Option<String>>,
  pub avatar_url: Option<Option<String>>,
  pub bio: Option<Option<String>>,
}
