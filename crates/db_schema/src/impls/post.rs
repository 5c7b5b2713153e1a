use crate::{
  newtypes::{CommunityId, PostId},
  source::post::{Post, PostInsertForm, PostUpdateForm},
  store::StoreClient,
  traits::Crud,
  utils::{now, refreshed},
};
use async_trait::async_trait;
use talkuvo_utils::error::StoreError;
use uuid::Uuid;

impl Post {
  pub const AUTHOR_FKEY: &'static str = "posts_author_id_fkey";
  pub const COMMUNITY_FKEY: &'static str = "posts_community_id_fkey";

  /// Newest first, optionally limited to one community.
  pub async fn list(
    store: &StoreClient,
    community_id: Option<CommunityId>,
  ) -> Result<Vec<Self>, StoreError> {
    let tables = store.tables()?;
    let mut posts: Vec<Post> = tables
      .posts
      .iter()
      .filter(|p| community_id.is_none_or(|id| p.community_id == id))
      .cloned()
      .collect();
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(posts)
  }
}

#[async_trait]
impl Crud for Post {
  type InsertForm = PostInsertForm;
  type UpdateForm = PostUpdateForm;
  type IdType = PostId;

  async fn create(store: &StoreClient, form: &Self::InsertForm) -> Result<Self, StoreError> {
    let mut tables = store.tables()?;
    if !tables.profiles.iter().any(|p| p.id == form.author_id) {
      return Err(StoreError::ForeignKeyViolation(Self::AUTHOR_FKEY));
    }
    if !tables.communities.iter().any(|c| c.id == form.community_id) {
      return Err(StoreError::ForeignKeyViolation(Self::COMMUNITY_FKEY));
    }

    let created = now();
    let post = Post {
      id: PostId(Uuid::new_v4()),
      title: form.title.clone(),
      author_id: form.author_id,
      community_id: form.community_id,
      post_type: form.post_type,
      content: form.content.clone(),
      url: form.url.clone(),
      image_url: form.image_url.clone(),
      created_at: created,
      updated_at: created,
    };
    tables.posts.push(post.clone());
    Ok(post)
  }

  async fn read(store: &StoreClient, id: Self::IdType) -> Result<Self, StoreError> {
    store
      .tables()?
      .posts
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
    let post = tables
      .posts
      .iter_mut()
      .find(|p| p.id == id)
      .ok_or(StoreError::NotFound)?;
    if let Some(title) = form.title.clone() {
      post.title = title;
    }
    if let Some(content) = form.content.clone() {
      post.content = content;
    }
    if let Some(url) = form.url.clone() {
      post.url = url;
    }
    if let Some(image_url) = form.image_url.clone() {
      post.image_url = image_url;
    }
    post.updated_at = refreshed(post.updated_at);
    Ok(post.clone())
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use super::*;
  use crate::{
    newtypes::ProfileId,
    source::{
      community::{Community, CommunityInsertForm},
      profile::{Profile, ProfileInsertForm},
    },
  };
  use pretty_assertions::assert_eq;

  async fn seed(store: &StoreClient) -> (Profile, Community) {
    let profile = Profile::create(
      store,
      &ProfileInsertForm::new(
        ProfileId(Uuid::new_v4()),
        "alice".into(),
        "alice@example.com".into(),
      ),
    )
    .await
    .unwrap();
    let community = Community::create(
      store,
      &CommunityInsertForm::new("Rust".into(), "rust".into(), profile.id),
    )
    .await
    .unwrap();
    (profile, community)
  }

  #[tokio::test]
  async fn crud_and_list() {
    let store = StoreClient::new();
    let (profile, community) = seed(&store).await;

    let mut form = PostInsertForm::new("First post".into(), profile.id, community.id);
    form.content = Some("hello".into());
    let first = Post::create(&store, &form).await.unwrap();

    let mut form = PostInsertForm::new("Second post".into(), profile.id, community.id);
    form.content = Some("world".into());
    let second = Post::create(&store, &form).await.unwrap();

    let listed = Post::list(&store, Some(community.id)).await.unwrap();
    assert_eq!(vec![second.clone(), first.clone()], listed);

    let updated = Post::update(
      &store,
      first.id,
      &PostUpdateForm {
        title: Some("Edited post".into()),
        ..Default::default()
      },
    )
    .await
    .unwrap();
    assert_eq!("Edited post", updated.title);
    assert!(updated.updated_at > first.updated_at);
  }

  #[tokio::test]
  async fn create_requires_author_and_community() {
    let store = StoreClient::new();
    let (profile, community) = seed(&store).await;

    let form = PostInsertForm::new("Orphan".into(), ProfileId(Uuid::new_v4()), community.id);
    assert_eq!(
      Err(StoreError::ForeignKeyViolation(Post::AUTHOR_FKEY)),
      Post::create(&store, &form).await,
    );

    let form = PostInsertForm::new("Orphan".into(), profile.id, CommunityId(Uuid::new_v4()));
    assert_eq!(
      Err(StoreError::ForeignKeyViolation(Post::COMMUNITY_FKEY)),
      Post::create(&store, &form).await,
    );
  }
}
