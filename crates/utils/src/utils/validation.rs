use crate::error::{TalkuvoErrorType, TalkuvoResult};
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static VALID_USERNAME_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("compile regex"));

// Same shape check the signup form applies; real validation happens in the
// identity provider's confirmation mail.
#[allow(clippy::expect_used)]
static VALID_EMAIL_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("compile regex"));

const USERNAME_MIN_LENGTH: usize = 3;
const USERNAME_MAX_LENGTH: usize = 20;
const PASSWORD_MIN_LENGTH: usize = 6;
const PASSWORD_MAX_LENGTH: usize = 60;
const DISPLAY_NAME_MAX_LENGTH: usize = 50;
const BIO_MAX_LENGTH: usize = 1000;
const POST_TITLE_MAX_LENGTH: usize = 200;
const COMMUNITY_NAME_MAX_LENGTH: usize = 50;

fn min_length_check(item: &str, min: usize, error_type: TalkuvoErrorType) -> TalkuvoResult<()> {
  if item.chars().count() < min {
    Err(error_type)?
  }
  Ok(())
}

fn max_length_check(item: &str, max: usize, error_type: TalkuvoErrorType) -> TalkuvoResult<()> {
  if item.chars().count() > max {
    Err(error_type)?
  }
  Ok(())
}

/// Usernames are ascii letters, digits and underscores only, to keep them
/// safe inside `u/{username}` page urls.
pub fn is_valid_username(name: &str) -> TalkuvoResult<()> {
  min_length_check(name, USERNAME_MIN_LENGTH, TalkuvoErrorType::InvalidName)?;
  max_length_check(name, USERNAME_MAX_LENGTH, TalkuvoErrorType::InvalidName)?;
  if VALID_USERNAME_REGEX.is_match(name) {
    Ok(())
  } else {
    Err(TalkuvoErrorType::InvalidName.into())
  }
}

pub fn is_valid_email(email: &str) -> TalkuvoResult<()> {
  if VALID_EMAIL_REGEX.is_match(email) {
    Ok(())
  } else {
    Err(TalkuvoErrorType::InvalidEmailAddress(email.to_string()).into())
  }
}

pub fn password_length_check(pass: &str) -> TalkuvoResult<()> {
  min_length_check(pass, PASSWORD_MIN_LENGTH, TalkuvoErrorType::InvalidPassword)?;
  max_length_check(pass, PASSWORD_MAX_LENGTH, TalkuvoErrorType::InvalidPassword)
}

pub fn is_valid_display_name(name: &str) -> TalkuvoResult<()> {
  if name.contains('\n') {
    Err(TalkuvoErrorType::InvalidDisplayName)?
  }
  max_length_check(
    name,
    DISPLAY_NAME_MAX_LENGTH,
    TalkuvoErrorType::InvalidDisplayName,
  )
}

pub fn is_valid_bio_field(bio: &str) -> TalkuvoResult<()> {
  max_length_check(bio, BIO_MAX_LENGTH, TalkuvoErrorType::BioLengthOverflow)
}

pub fn is_valid_post_title(title: &str) -> TalkuvoResult<()> {
  if title.trim().is_empty() || title.contains('\n') {
    Err(TalkuvoErrorType::InvalidPostTitle)?
  }
  max_length_check(title, POST_TITLE_MAX_LENGTH, TalkuvoErrorType::InvalidPostTitle)
}

pub fn is_valid_community_name(name: &str) -> TalkuvoResult<()> {
  if name.trim().is_empty() {
    Err(TalkuvoErrorType::InvalidCommunityName)?
  }
  max_length_check(
    name,
    COMMUNITY_NAME_MAX_LENGTH,
    TalkuvoErrorType::InvalidCommunityName,
  )
}
