use crate::auth::Session;
use talkuvo_db_schema::source::profile::Profile;
use tokio::sync::watch;

/// What the rest of the app sees of the auth state at one point in time.
/// `loading` stays true from startup until the first session check and
/// profile fetch have settled, so consumers can tell "logged out" apart
/// from "don't know yet".
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
  pub session: Option<Session>,
  pub profile: Option<Profile>,
  pub loading: bool,
}

impl Default for SessionSnapshot {
  fn default() -> Self {
    SessionSnapshot {
      session: None,
      profile: None,
      loading: true,
    }
  }
}

/// Observable session state. Cheap to clone, every clone publishes into the
/// same channel.
#[derive(Clone)]
pub struct SessionState {
  tx: watch::Sender<SessionSnapshot>,
}

impl Default for SessionState {
  fn default() -> Self {
    let (tx, _) = watch::channel(SessionSnapshot::default());
    SessionState { tx }
  }
}

impl SessionState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
    self.tx.subscribe()
  }

  pub fn snapshot(&self) -> SessionSnapshot {
    self.tx.borrow().clone()
  }

  /// Publish a signed-in (or signed-out, with `None`) state. Always clears
  /// `loading`.
  pub fn set(&self, session: Option<Session>, profile: Option<Profile>) {
    self.tx.send_replace(SessionSnapshot {
      session,
      profile,
      loading: false,
    });
  }

  pub fn set_profile(&self, profile: Option<Profile>) {
    self.tx.send_modify(|snapshot| snapshot.profile = profile);
  }

  pub fn clear(&self) {
    self.set(None, None);
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]

  use super::*;
  use crate::auth::AuthUser;
  use pretty_assertions::assert_eq;
  use serde_json::Map;
  use talkuvo_db_schema::newtypes::ProfileId;
  use uuid::Uuid;

  fn session() -> Session {
    Session {
      user: AuthUser {
        id: ProfileId(Uuid::new_v4()),
        email: Some("alice@example.com".to_string()),
        user_metadata: Map::new(),
      },
      access_token: "token".to_string(),
    }
  }

  #[tokio::test]
  async fn starts_loading_then_settles() {
    let state = SessionState::new();
    let mut rx = state.subscribe();
    assert!(state.snapshot().loading);

    state.set(Some(session()), None);
    rx.changed().await.unwrap();
    let snapshot = rx.borrow().clone();
    assert!(!snapshot.loading);
    assert!(snapshot.session.is_some());

    state.clear();
    rx.changed().await.unwrap();
    assert_eq!(
      SessionSnapshot {
        session: None,
        profile: None,
        loading: false
      },
      rx.borrow().clone()
    );
  }
}
