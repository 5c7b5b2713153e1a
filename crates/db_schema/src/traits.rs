use crate::{
  newtypes::ProfileId,
  source::vote::VoteTarget,
  store::StoreClient,
};
use async_trait::async_trait;
use talkuvo_utils::error::StoreError;

#[async_trait]
pub trait Crud {
  type InsertForm;
  type UpdateForm;
  type IdType;

  async fn create(store: &StoreClient, form: &Self::InsertForm) -> Result<Self, StoreError>
  where
    Self: Sized;

  async fn read(store: &StoreClient, id: Self::IdType) -> Result<Self, StoreError>
  where
    Self: Sized;

  /// When you want to null out a column, you have to send `Some(None)`,
  /// since sending `None` means you just don't want to update that column.
  async fn update(
    store: &StoreClient,
    id: Self::IdType,
    form: &Self::UpdateForm,
  ) -> Result<Self, StoreError>
  where
    Self: Sized;

  async fn delete(_store: &StoreClient, _id: Self::IdType) -> Result<usize, StoreError>
  where
    Self: Sized,
    Self::IdType: Send,
  {
    Err(StoreError::NotFound)
  }
}

#[async_trait]
pub trait Joinable {
  type Form;

  async fn join(store: &StoreClient, form: &Self::Form) -> Result<Self, StoreError>
  where
    Self: Sized;

  async fn leave(store: &StoreClient, form: &Self::Form) -> Result<usize, StoreError>
  where
    Self: Sized;
}

#[async_trait]
pub trait Likeable {
  type Form;

  async fn like(store: &StoreClient, form: &Self::Form) -> Result<Self, StoreError>
  where
    Self: Sized;

  async fn remove(
    store: &StoreClient,
    user_id: ProfileId,
    target: VoteTarget,
  ) -> Result<usize, StoreError>
  where
    Self: Sized;
}
