use crate::newtypes::{CommunityId, ProfileId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Community {
  pub id: CommunityId,
  /// Immutable after creation.
  pub name: String,
  /// Derived from the name at creation time, unique, used in `c/{slug}` urls.
  pub slug: String,
  pub description: Option<String>,
  pub created_by: ProfileId,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct CommunityInsertForm {
  pub name: String,
  pub slug: String,
  pub description: Option<String>,
  pub created_by: ProfileId,
}

impl CommunityInsertForm {
  pub fn new(name: String, slug: String, created_by: ProfileId) -> Self {
    CommunityInsertForm {
      name,
      slug,
      description: None,
      created_by,
    }
  }
}

#[derive(Clone, Debug, Default)]
pub struct CommunityUpdateForm {
  pub description: Option<Option<String>>,
}
