use async_trait::async_trait;
use std::{
  collections::HashMap,
  sync::{Mutex, MutexGuard},
};
use talkuvo_utils::error::{TalkuvoErrorType, TalkuvoResult};
use url::Url;

/// Object storage as exposed to the rest of the app. Objects are addressed
/// by bucket and an opaque path within it, and every stored object has a
/// stable public url.
#[async_trait]
pub trait StorageClient: Send + Sync {
  async fn upload(&self, bucket: &str, path: &str, bytes: Vec<u8>) -> TalkuvoResult<Url>;
  fn public_url(&self, bucket: &str, path: &str) -> TalkuvoResult<Url>;
  async fn remove(&self, bucket: &str, path: &str) -> TalkuvoResult<()>;
}

/// Recovers the object path from a public url, given the bucket it lives in.
/// Returns `None` when the url does not reference that bucket.
pub fn object_path_from_public_url(url: &str, bucket: &str) -> Option<String> {
  let marker = format!("/{bucket}/");
  let start = url.find(&marker)? + marker.len();
  let path = url.get(start..)?;
  if path.is_empty() {
    None
  } else {
    Some(path.to_string())
  }
}

/// Deletes the object behind an avatar url. Failures are logged and
/// swallowed, an orphaned object must never block a profile update.
pub async fn remove_avatar_object(
  storage: &dyn StorageClient,
  bucket: &str,
  avatar_url: &str,
) {
  let Some(path) = object_path_from_public_url(avatar_url, bucket) else {
    return;
  };
  if let Err(e) = storage.remove(bucket, &path).await {
    tracing::warn!("Couldnt delete old avatar {avatar_url}: {e}");
  }
}

/// In-process [`StorageClient`] backing tests and single-node deployments.
pub struct LocalStorage {
  base_url: Url,
  objects: Mutex<HashMap<(String, String), Vec<u8>>>,
}

impl LocalStorage {
  pub fn new(base_url: Url) -> Self {
    LocalStorage {
      base_url,
      objects: Mutex::new(HashMap::new()),
    }
  }

  fn objects(&self) -> TalkuvoResult<MutexGuard<'_, HashMap<(String, String), Vec<u8>>>> {
    self
      .objects
      .lock()
      .map_err(|_| TalkuvoErrorType::Unknown("storage state poisoned".into()).into())
  }

  pub fn contains(&self, bucket: &str, path: &str) -> bool {
    self
      .objects()
      .map(|objects| objects.contains_key(&(bucket.to_string(), path.to_string())))
      .unwrap_or(false)
  }
}

#[async_trait]
impl StorageClient for LocalStorage {
  async fn upload(&self, bucket: &str, path: &str, bytes: Vec<u8>) -> TalkuvoResult<Url> {
    self
      .objects()?
      .insert((bucket.to_string(), path.to_string()), bytes);
    self.public_url(bucket, path)
  }

  fn public_url(&self, bucket: &str, path: &str) -> TalkuvoResult<Url> {
    Ok(
      self
        .base_url
        .join(&format!("storage/v1/object/public/{bucket}/{path}"))?,
    )
  }

  async fn remove(&self, bucket: &str, path: &str) -> TalkuvoResult<()> {
    self
      .objects()?
      .remove(&(bucket.to_string(), path.to_string()))
      .map(|_| ())
      .ok_or_else(|| TalkuvoErrorType::NotFound.into())
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]

  use super::*;
  use pretty_assertions::assert_eq;

  fn storage() -> LocalStorage {
    LocalStorage::new(Url::parse("http://localhost:54321").unwrap())
  }

  #[tokio::test]
  async fn upload_then_remove() {
    let storage = storage();
    let url = storage
      .upload("avatars", "abc/avatar.png", vec![1, 2, 3])
      .await
      .unwrap();
    assert!(url.path().ends_with("/avatars/abc/avatar.png"));
    assert!(storage.contains("avatars", "abc/avatar.png"));

    storage.remove("avatars", "abc/avatar.png").await.unwrap();
    assert!(!storage.contains("avatars", "abc/avatar.png"));
  }

  #[test]
  fn object_path_round_trips_through_public_url() {
    let url = "http://localhost:54321/storage/v1/object/public/avatars/abc/avatar.png";
    assert_eq!(
      Some("abc/avatar.png".to_string()),
      object_path_from_public_url(url, "avatars")
    );
    assert_eq!(None, object_path_from_public_url(url, "banners"));
    assert_eq!(
      None,
      object_path_from_public_url("http://localhost:54321/avatars/", "avatars")
    );
  }

  #[tokio::test]
  async fn remove_avatar_object_swallows_missing_objects() {
    let storage = storage();
    // Nothing uploaded, helper must not panic or error out.
    remove_avatar_object(
      &storage,
      "avatars",
      "http://localhost:54321/storage/v1/object/public/avatars/gone.png",
    )
    .await;
  }
}
