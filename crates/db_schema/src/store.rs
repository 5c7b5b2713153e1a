use crate::source::{
  comment::Comment,
  community::Community,
  community_member::CommunityMember,
  post::Post,
  profile::Profile,
  vote::Vote,
};
use std::sync::{Mutex, MutexGuard};
use talkuvo_utils::error::StoreError;

/// Client handle for the hosted row store.
///
/// Rows live behind a single lock, which stands in for the store's
/// serialization of writes: unique and foreign key constraints are checked
/// while the lock is held, so a write either lands or reports the constraint
/// it hit. The storage layer, not the caller, is the source of truth for
/// uniqueness.
#[derive(Debug, Default)]
pub struct StoreClient {
  tables: Mutex<Tables>,
}

#[derive(Debug, Default)]
pub(crate) struct Tables {
  pub profiles: Vec<Profile>,
  pub communities: Vec<Community>,
  pub community_members: Vec<CommunityMember>,
  pub posts: Vec<Post>,
  pub comments: Vec<Comment>,
  pub votes: Vec<Vote>,
}

impl StoreClient {
  pub fn new() -> Self {
    Self::default()
  }

  pub(crate) fn tables(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
    self
      .tables
      .lock()
      .map_err(|e| StoreError::Connection(e.to_string()))
  }
}
