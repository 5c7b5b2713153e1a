use serde::{Deserialize, Serialize};
use std::{backtrace::Backtrace, fmt, fmt::Debug};
use strum::Display;

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum TalkuvoErrorType {
  NotFound,
  NotLoggedIn,
  IncorrectLogin,
  OauthAuthorizationInvalid,
  UsernameAlreadyExists,
  EmailAlreadyExists,
  /// Every suffixed username candidate collided; the caller decides what to
  /// do, we never store a username we could not prove unique.
  UsernameRetriesExhausted,
  InvalidName,
  InvalidDisplayName,
  InvalidEmailAddress(String),
  /// Password must be between 6 and 60 characters
  InvalidPassword,
  PasswordsDoNotMatch,
  BioLengthOverflow,
  CommunityAlreadyExists,
  InvalidCommunityName,
  CouldntJoinCommunity,
  InvalidPostTitle,
  /// Exactly one of content/url/image_url must be set, matching the post type.
  InvalidBodyField,
  InvalidUrl,
  NoPostEditAllowed,
  CouldntCreateComment,
  CouldntVote,
  Unknown(String),
}

/// Errors surfaced by the hosted row store. The application layer depends on
/// being able to tell "no row found" apart from a constraint violation and
/// from a transport failure; the constraint name says which unique or foreign
/// key was hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
  NotFound,
  UniqueViolation(&'static str),
  ForeignKeyViolation(&'static str),
  Connection(String),
}

impl fmt::Display for StoreError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      StoreError::NotFound => write!(f, "no row found"),
      StoreError::UniqueViolation(constraint) => {
        write!(f, "unique constraint violated: {constraint}")
      }
      StoreError::ForeignKeyViolation(constraint) => {
        write!(f, "foreign key constraint violated: {constraint}")
      }
      StoreError::Connection(msg) => write!(f, "store connection failed: {msg}"),
    }
  }
}

impl std::error::Error for StoreError {}

pub type TalkuvoResult<T> = Result<T, TalkuvoError>;

pub struct TalkuvoError {
  pub error_type: TalkuvoErrorType,
  pub inner: anyhow::Error,
  pub context: Backtrace,
}

impl<T> From<T> for TalkuvoError
where
  T: Into<anyhow::Error>,
{
  fn from(t: T) -> Self {
    let cause = t.into();
    let error_type = match cause.downcast_ref::<StoreError>() {
      Some(&StoreError::NotFound) => TalkuvoErrorType::NotFound,
      _ => TalkuvoErrorType::Unknown(format!("{}", &cause)),
    };
    TalkuvoError {
      error_type,
      inner: cause,
      context: Backtrace::capture(),
    }
  }
}

impl Debug for TalkuvoError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TalkuvoError")
      .field("message", &self.error_type)
      .field("inner", &self.inner)
      .field("context", &self.context)
      .finish()
  }
}

impl fmt::Display for TalkuvoError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{}", self.inner)?;
    fmt::Display::fmt(&self.context, f)
  }
}

impl From<TalkuvoErrorType> for TalkuvoError {
  fn from(error_type: TalkuvoErrorType) -> Self {
    let inner = anyhow::anyhow!("{}", error_type);
    TalkuvoError {
      error_type,
      inner,
      context: Backtrace::capture(),
    }
  }
}

pub trait TalkuvoErrorExt<T, E: Into<anyhow::Error>> {
  fn with_talkuvo_type(self, error_type: TalkuvoErrorType) -> TalkuvoResult<T>;
}

impl<T, E: Into<anyhow::Error>> TalkuvoErrorExt<T, E> for Result<T, E> {
  fn with_talkuvo_type(self, error_type: TalkuvoErrorType) -> TalkuvoResult<T> {
    self.map_err(|error| TalkuvoError {
      error_type,
      inner: error.into(),
      context: Backtrace::capture(),
    })
  }
}

pub trait TalkuvoErrorExt2<T> {
  fn with_talkuvo_type(self, error_type: TalkuvoErrorType) -> TalkuvoResult<T>;
  fn into_anyhow(self) -> Result<T, anyhow::Error>;
}

impl<T> TalkuvoErrorExt2<T> for TalkuvoResult<T> {
  fn with_talkuvo_type(self, error_type: TalkuvoErrorType) -> TalkuvoResult<T> {
    self.map_err(|mut e| {
      e.error_type = error_type;
      e
    })
  }
  // this function can't be an impl From or similar because it would conflict
  // with one of the other broad Into<> implementations
  fn into_anyhow(self) -> Result<T, anyhow::Error> {
    self.map_err(|e| e.inner)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn serializes_no_message() -> TalkuvoResult<()> {
    let json = serde_json::to_string(&TalkuvoErrorType::NotFound)?;
    assert_eq!(&json, "{\"error\":\"not_found\"}");

    Ok(())
  }

  #[test]
  fn serializes_with_message() -> TalkuvoResult<()> {
    let err = TalkuvoErrorType::InvalidEmailAddress(String::from("reason"));
    let json = serde_json::to_string(&err)?;
    assert_eq!(
      &json,
      "{\"error\":\"invalid_email_address\",\"message\":\"reason\"}"
    );

    Ok(())
  }

  #[test]
  fn converts_store_errors() {
    let not_found_error = TalkuvoError::from(StoreError::NotFound);
    assert_eq!(TalkuvoErrorType::NotFound, not_found_error.error_type);

    let other_error = TalkuvoError::from(StoreError::UniqueViolation("profiles_username_key"));
    assert!(matches!(
      other_error.error_type,
      TalkuvoErrorType::Unknown { .. }
    ));
  }

  #[test]
  fn overrides_error_type() {
    let err: TalkuvoResult<()> = Err(StoreError::UniqueViolation("communities_name_key"))
      .with_talkuvo_type(TalkuvoErrorType::CommunityAlreadyExists);
    assert_eq!(
      TalkuvoErrorType::CommunityAlreadyExists,
      err.map_err(|e| e.error_type).unwrap_err()
    );
  }
}
