use crate::{
  newtypes::ProfileId,
  source::profile::{Profile, ProfileInsertForm, ProfileUpdateForm},
  store::{StoreClient, Tables},
  traits::Crud,
  utils::{now, refreshed},
};
use async_trait::async_trait;
use talkuvo_utils::error::StoreError;

impl Profile {
  pub const PRIMARY_KEY: &'static str = "profiles_pkey";
  pub const USERNAME_KEY: &'static str = "profiles_username_key";
  pub const EMAIL_KEY: &'static str = "profiles_email_key";

  fn check_unique(
    tables: &Tables,
    id: ProfileId,
    username: &str,
    email: &str,
  ) -> Result<(), StoreError> {
    if tables
      .profiles
      .iter()
      .any(|p| p.id != id && p.username == username)
    {
      return Err(StoreError::UniqueViolation(Self::USERNAME_KEY));
    }
    if tables.profiles.iter().any(|p| p.id != id && p.email == email) {
      return Err(StoreError::UniqueViolation(Self::EMAIL_KEY));
    }
    Ok(())
  }

  /// Insert-or-update keyed on the identity id, so two concurrent logins for
  /// the same identity converge on a single row instead of racing into a
  /// duplicate key failure.
  pub async fn upsert(store: &StoreClient, form: &ProfileInsertForm) -> Result<Self, StoreError> {
    let mut tables = store.tables()?;
    Self::check_unique(&tables, form.id, &form.username, &form.email)?;

    if let Some(existing) = tables.profiles.iter_mut().find(|p| p.id == form.id) {
      existing.username = form.username.clone();
      existing.email = form.email.clone();
      existing.full_name = form.full_name.clone();
      existing.avatar_url = form.avatar_url.clone();
      existing.bio = form.bio.clone();
      existing.updated_at = refreshed(existing.updated_at);
      return Ok(existing.clone());
    }

    let profile = from_insert_form(form);
    tables.profiles.push(profile.clone());
    Ok(profile)
  }

  pub async fn read_by_username(
    store: &StoreClient,
    username: &str,
  ) -> Result<Self, StoreError> {
    store
      .tables()?
      .profiles
      .iter()
      .find(|p| p.username == username)
      .cloned()
      .ok_or(StoreError::NotFound)
  }
}

fn from_insert_form(form: &ProfileInsertForm) -> Profile {
  let created = now();
  Profile {
    id: form.id,
    username: form.username.clone(),
    email: form.email.clone(),
    full_name: form.full_name.clone(),
    avatar_url: form.avatar_url.clone(),
    bio: form.bio.clone(),
    created_at: created,
    updated_at: created,
  }
}

#[async_trait]
impl Crud for Profile {
  type InsertForm = ProfileInsertForm;
  type UpdateForm = ProfileUpdateForm;
  type IdType = ProfileId;

  async fn create(store: &StoreClient, form: &Self::InsertForm) -> Result<Self, StoreError> {
    let mut tables = store.tables()?;
    if tables.profiles.iter().any(|p| p.id == form.id) {
      return Err(StoreError::UniqueViolation(Self::PRIMARY_KEY));
    }
    Self::check_unique(&tables, form.id, &form.username, &form.email)?;

    let profile = from_insert_form(form);
    tables.profiles.push(profile.clone());
    Ok(profile)
  }

  async fn read(store: &StoreClient, id: Self::IdType) -> Result<Self, StoreError> {
    store
      .tables()?
      .profiles
      .iter()
      .find(|p| p.id == id)
      .cloned()
      .ok_or(StoreError::NotFound)
  }

  async fn update(
    store: &StoreClient,
    id: Self::IdType,
    form: &Self::UpdateForm,
  ) -> Result<Self, StoreError> {
    let mut tables = store.tables()?;
    let current = tables
      .profiles
      .iter()
      .find(|p| p.id == id)
      .cloned()
      .ok_or(StoreError::NotFound)?;

    let username = form.username.clone().unwrap_or(current.username);
    let email = form.email.clone().unwrap_or(current.email);
    Self::check_unique(&tables, id, &username, &email)?;

    let profile = tables
      .profiles
      .iter_mut()
      .find(|p| p.id == id)
      .ok_or(StoreError::NotFound)?;
    profile.username = username;
    profile.email = email;
    if let Some(full_name) = form.full_name.clone() {
      profile.full_name = full_name;
    }
    if let Some(avatar_url) = form.avatar_url.clone() {
      profile.avatar_url = avatar_url;
    }
    if let Some(bio) = form.bio.clone() {
      profile.bio = bio;
    }
    profile.updated_at = refreshed(profile.updated_at);
    Ok(profile.clone())
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use super::*;
  use pretty_assertions::assert_eq;
  use uuid::Uuid;

  fn alice_form() -> ProfileInsertForm {
    ProfileInsertForm::new(
      ProfileId(Uuid::new_v4()),
      "alice".into(),
      "alice@example.com".into(),
    )
  }

  #[tokio::test]
  async fn crud() {
    let store = StoreClient::new();
    let form = alice_form();

    let inserted = Profile::create(&store, &form).await.unwrap();
    assert_eq!(form.id, inserted.id);
    assert_eq!(inserted.created_at, inserted.updated_at);

    let read = Profile::read(&store, inserted.id).await.unwrap();
    assert_eq!(inserted, read);

    let update_form = ProfileUpdateForm {
      bio: Some(Some("hello".into())),
      ..Default::default()
    };
    let updated = Profile::update(&store, inserted.id, &update_form)
      .await
      .unwrap();
    assert_eq!(Some("hello".to_string()), updated.bio);
    assert!(updated.updated_at > inserted.updated_at);
  }

  #[tokio::test]
  async fn duplicate_id_fails_duplicate_username_fails() {
    let store = StoreClient::new();
    let form = alice_form();
    Profile::create(&store, &form).await.unwrap();

    assert_eq!(
      Err(StoreError::UniqueViolation(Profile::PRIMARY_KEY)),
      Profile::create(&store, &form).await,
    );

    let mut other = alice_form();
    other.email = "other@example.com".into();
    assert_eq!(
      Err(StoreError::UniqueViolation(Profile::USERNAME_KEY)),
      Profile::create(&store, &other).await,
    );
  }

  #[tokio::test]
  async fn upsert_converges_on_one_row() {
    let store = StoreClient::new();
    let form = alice_form();

    let first = Profile::upsert(&store, &form).await.unwrap();
    let second = Profile::upsert(&store, &form).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(1, store.tables().unwrap().profiles.len());
  }

  #[tokio::test]
  async fn read_by_username_not_found() {
    let store = StoreClient::new();
    assert_eq!(
      Err(StoreError::NotFound),
      Profile::read_by_username(&store, "nobody").await,
    );
  }
}
