use crate::{
  newtypes::{CommunityId, ProfileId},
  source::community::{Community, CommunityInsertForm, CommunityUpdateForm},
  store::StoreClient,
  traits::Crud,
  utils::{now, refreshed},
};
use async_trait::async_trait;
use talkuvo_utils::error::StoreError;
use uuid::Uuid;

impl Community {
  pub const NAME_KEY: &'static str = "communities_name_key";
  pub const SLUG_KEY: &'static str = "communities_slug_key";

  pub async fn read_by_slug(store: &StoreClient, slug: &str) -> Result<Self, StoreError> {
    store
      .tables()?
      .communities
      .iter()
      .find(|c| c.slug == slug)
      .cloned()
      .ok_or(StoreError::NotFound)
  }

  pub async fn read_by_name(store: &StoreClient, name: &str) -> Result<Self, StoreError> {
    store
      .tables()?
      .communities
      .iter()
      .find(|c| c.name == name)
      .cloned()
      .ok_or(StoreError::NotFound)
  }

  /// All communities, alphabetical by name.
  pub async fn list(store: &StoreClient) -> Result<Vec<Self>, StoreError> {
    let mut communities = store.tables()?.communities.clone();
    communities.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(communities)
  }

  /// The communities a profile holds a membership row in, for the joined
  /// communities sidebar.
  pub async fn list_for_member(
    store: &StoreClient,
    user_id: ProfileId,
  ) -> Result<Vec<Self>, StoreError> {
    let tables = store.tables()?;
    let mut communities: Vec<Community> = tables
      .communities
      .iter()
      .filter(|c| {
        tables
          .community_members
          .iter()
          .any(|m| m.user_id == user_id && m.community_id == c.id)
      })
      .cloned()
      .collect();
    communities.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(communities)
  }
}

#[async_trait]
impl Crud for Community {
  type InsertForm = CommunityInsertForm;
  type UpdateForm = CommunityUpdateForm;
  type IdType = CommunityId;

  async fn create(store: &StoreClient, form: &Self::InsertForm) -> Result<Self, StoreError> {
    let mut tables = store.tables()?;
    if tables.communities.iter().any(|c| c.name == form.name) {
      return Err(StoreError::UniqueViolation(Self::NAME_KEY));
    }
    if tables.communities.iter().any(|c| c.slug == form.slug) {
      return Err(StoreError::UniqueViolation(Self::SLUG_KEY));
    }

    let created = now();
    let community = Community {
      id: CommunityId(Uuid::new_v4()),
      name: form.name.clone(),
      slug: form.slug.clone(),
      description: form.description.clone(),
      created_by: form.created_by,
      created_at: created,
      updated_at: created,
    };
    tables.communities.push(community.clone());
    Ok(community)
  }

  async fn read(store: &StoreClient, id: Self::IdType) -> Result<Self, StoreError> {
    store
      .tables()?
      .communities
      .iter()
      .find(|c| c.id == id)
      .cloned()
      .ok_or(StoreError::NotFound)
  }

  async fn update(
    store: &StoreClient,
    id: Self::IdType,
    form: &Self::UpdateForm,
  ) -> Result<Self, StoreError> {
    let mut tables = store.tables()?;
    let community = tables
      .communities
      .iter_mut()
      .find(|c| c.id == id)
      .ok_or(StoreError::NotFound)?;
    if let Some(description) = form.description.clone() {
      community.description = description;
    }
    community.updated_at = refreshed(community.updated_at);
    Ok(community.clone())
  }
}
