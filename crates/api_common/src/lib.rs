pub mod auth;
pub mod comment;
pub mod community;
pub mod context;
pub mod oauth;
pub mod person;
pub mod post;
pub mod session;
pub mod storage;

pub extern crate talkuvo_db_schema;
pub extern crate talkuvo_utils;

pub use talkuvo_utils::error::TalkuvoErrorType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SuccessResponse {
  pub success: bool,
}

impl Default for SuccessResponse {
  fn default() -> Self {
    SuccessResponse { success: true }
  }
}
