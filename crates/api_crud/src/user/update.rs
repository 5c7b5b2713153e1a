use crate::require_profile;
use talkuvo_api_common::{
  context::TalkuvoContext,
  person::{ProfileResponse, SaveProfileSettings},
  storage::remove_avatar_object,
};
use talkuvo_db_schema::{
  source::profile::{Profile, ProfileUpdateForm},
  traits::Crud,
};
use talkuvo_utils::{
  error::TalkuvoResult,
  utils::validation::{is_valid_bio_field, is_valid_display_name},
};

pub async fn save_profile_settings(
  data: &SaveProfileSettings,
  context: &TalkuvoContext,
) -> TalkuvoResult<ProfileResponse> {
  let profile = require_profile(context).await?;

  if let Some(full_name) = &data.full_name {
    is_valid_display_name(full_name)?;
  }
  if let Some(bio) = &data.bio {
    is_valid_bio_field(bio)?;
  }

  let form = ProfileUpdateForm {
    full_name: data.full_name.clone().map(empty_to_none),
    bio: data.bio.clone().map(empty_to_none),
    avatar_url: data.avatar_url.clone().map(empty_to_none),
    ..Default::default()
  };

  let old_avatar = profile.avatar_url;
  let updated = Profile::update(context.store(), profile.id, &form).await?;

  // The previous avatar object is orphaned once the row points elsewhere.
  if let Some(old) = old_avatar {
    if updated.avatar_url.as_deref() != Some(old.as_str()) {
      remove_avatar_object(
        context.storage(),
        &context.settings().storage.avatar_bucket,
        &old,
      )
      .await;
    }
  }

  context.session_state().set_profile(Some(updated.clone()));
  Ok(ProfileResponse { profile: updated })
}

/// Form fields come through as strings; an empty one clears the column.
fn empty_to_none(value: String) -> Option<String> {
  if value.is_empty() {
    None
  } else {
    Some(value)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]

  use super::*;
  use crate::user::create::register;
  use pretty_assertions::assert_eq;
  use std::sync::Arc;
  use talkuvo_api_common::{
    auth::LocalAuthProvider,
    person::Register,
    storage::{LocalStorage, StorageClient},
  };
  use talkuvo_db_schema::store::StoreClient;
  use talkuvo_utils::{error::TalkuvoErrorType, settings::structs::Settings};
  use url::Url;

  fn test_context() -> (TalkuvoContext, Arc<LocalStorage>) {
    let settings = Settings::default();
    let base = Url::parse(&settings.service_url).unwrap();
    let storage = Arc::new(LocalStorage::new(base.clone()));
    let context = TalkuvoContext::create(
      StoreClient::default(),
      Arc::new(LocalAuthProvider::new(base)),
      storage.clone(),
      settings,
    );
    (context, storage)
  }

  async fn sign_up_alice(context: &TalkuvoContext) {
    register(
      &Register {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "hunter22".to_string(),
        password_verify: "hunter22".to_string(),
      },
      context,
    )
    .await
    .unwrap();
  }

  #[tokio::test]
  async fn updates_fields_and_bumps_updated_at() {
    let (context, _) = test_context();
    sign_up_alice(&context).await;
    let before = require_profile(&context).await.unwrap();

    let response = save_profile_settings(
      &SaveProfileSettings {
        full_name: Some("Alice Liddell".to_string()),
        bio: Some("down the rabbit hole".to_string()),
        avatar_url: None,
      },
      &context,
    )
    .await
    .unwrap();

    assert_eq!(Some("Alice Liddell".to_string()), response.profile.full_name);
    assert!(response.profile.updated_at > before.updated_at);

    // Empty string clears the column, None leaves it alone.
    let cleared = save_profile_settings(
      &SaveProfileSettings {
        full_name: Some(String::new()),
        bio: None,
        avatar_url: None,
      },
      &context,
    )
    .await
    .unwrap();
    assert_eq!(None, cleared.profile.full_name);
    assert_eq!(
      Some("down the rabbit hole".to_string()),
      cleared.profile.bio
    );
  }

  #[tokio::test]
  async fn replacing_avatar_deletes_old_object() {
    let (context, storage) = test_context();
    sign_up_alice(&context).await;

    let bucket = context.settings().storage.avatar_bucket.clone();
    let old_url = storage
      .upload(&bucket, "alice/old.png", vec![1])
      .await
      .unwrap();
    save_profile_settings(
      &SaveProfileSettings {
        avatar_url: Some(old_url.to_string()),
        ..Default::default()
      },
      &context,
    )
    .await
    .unwrap();

    let new_url = storage
      .upload(&bucket, "alice/new.png", vec![2])
      .await
      .unwrap();
    let response = save_profile_settings(
      &SaveProfileSettings {
        avatar_url: Some(new_url.to_string()),
        ..Default::default()
      },
      &context,
    )
    .await
    .unwrap();

    assert_eq!(Some(new_url.to_string()), response.profile.avatar_url);
    assert!(!storage.contains(&bucket, "alice/old.png"));
    assert!(storage.contains(&bucket, "alice/new.png"));
  }

  #[tokio::test]
  async fn requires_login() {
    let (context, _) = test_context();
    let err = save_profile_settings(&SaveProfileSettings::default(), &context)
      .await
      .unwrap_err();
    assert_eq!(TalkuvoErrorType::NotLoggedIn, err.error_type);
  }

  #[tokio::test]
  async fn rejects_overlong_bio() {
    let (context, _) = test_context();
    sign_up_alice(&context).await;
    let err = save_profile_settings(
      &SaveProfileSettings {
        bio: Some("x".repeat(1001)),
        ..Default::default()
      },
      &context,
    )
    .await
    .unwrap_err();
    assert_eq!(TalkuvoErrorType::BioLengthOverflow, err.error_type);
  }
}
