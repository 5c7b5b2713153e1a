use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{
  collections::HashMap,
  sync::{Mutex, MutexGuard},
};
use talkuvo_db_schema::newtypes::ProfileId;
use talkuvo_utils::error::{TalkuvoErrorType, TalkuvoResult};
use tokio::sync::broadcast;
use url::Url;
use uuid::Uuid;

/// The authenticated identity as reported by the auth backend. Its id is the
/// canonical [`ProfileId`], and `user_metadata` carries whatever the identity
/// provider attached at signup (username, preferred_username, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
  pub id: ProfileId,
  pub email: Option<String>,
  pub user_metadata: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
  pub user: AuthUser,
  pub access_token: String,
}

/// Broadcast to every subscriber whenever the auth backend changes state.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
  SignedIn(Session),
  SignedOut,
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
  async fn sign_up(
    &self,
    email: &str,
    password: &str,
    metadata: Map<String, Value>,
  ) -> TalkuvoResult<Session>;
  async fn sign_in(&self, email: &str, password: &str) -> TalkuvoResult<Session>;
  /// Where to send the browser for the OAuth consent screen.
  fn oauth_authorize_url(&self, redirect_to: &Url) -> TalkuvoResult<Url>;
  async fn exchange_code_for_session(&self, code: &str) -> TalkuvoResult<Session>;
  async fn current_session(&self) -> Option<Session>;
  async fn sign_out(&self) -> TalkuvoResult<()>;
  fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}

struct Account {
  id: ProfileId,
  password: String,
  metadata: Map<String, Value>,
}

#[derive(Default)]
struct AuthState {
  accounts: HashMap<String, Account>,
  pending_codes: HashMap<String, String>,
  session: Option<Session>,
}

/// In-process [`AuthProvider`] backing tests and single-node deployments.
pub struct LocalAuthProvider {
  base_url: Url,
  state: Mutex<AuthState>,
  events: broadcast::Sender<AuthEvent>,
}

impl LocalAuthProvider {
  pub fn new(base_url: Url) -> Self {
    let (events, _) = broadcast::channel(16);
    LocalAuthProvider {
      base_url,
      state: Mutex::new(AuthState::default()),
      events,
    }
  }

  fn state(&self) -> TalkuvoResult<MutexGuard<'_, AuthState>> {
    self
      .state
      .lock()
      .map_err(|_| TalkuvoErrorType::Unknown("auth state poisoned".into()).into())
  }

  fn emit(&self, event: AuthEvent) {
    // Nobody listening is fine.
    let _ = self.events.send(event);
  }

  fn session_for(account: &Account, email: &str) -> Session {
    Session {
      user: AuthUser {
        id: account.id,
        email: Some(email.to_string()),
        user_metadata: account.metadata.clone(),
      },
      access_token: Uuid::new_v4().to_string(),
    }
  }

  /// Registers an account that signs in through the OAuth code exchange,
  /// returning the one-time code. Mirrors the provider redirecting back to us
  /// with `?code=`.
  pub fn issue_oauth_code(&self, email: &str, metadata: Map<String, Value>) -> TalkuvoResult<String> {
    let mut state = self.state()?;
    if !state.accounts.contains_key(email) {
      state.accounts.insert(
        email.to_string(),
        Account {
          id: ProfileId(Uuid::new_v4()),
          password: Uuid::new_v4().to_string(),
          metadata,
        },
      );
    }
    let code = Uuid::new_v4().to_string();
    state.pending_codes.insert(code.clone(), email.to_string());
    Ok(code)
  }
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
  async fn sign_up(
    &self,
    email: &str,
    password: &str,
    metadata: Map<String, Value>,
  ) -> TalkuvoResult<Session> {
    let mut state = self.state()?;
    if state.accounts.contains_key(email) {
      Err(TalkuvoErrorType::EmailAlreadyExists)?
    }
    let account = Account {
      id: ProfileId(Uuid::new_v4()),
      password: password.to_string(),
      metadata,
    };
    let session = Self::session_for(&account, email);
    state.accounts.insert(email.to_string(), account);
    state.session = Some(session.clone());
    drop(state);
    self.emit(AuthEvent::SignedIn(session.clone()));
    Ok(session)
  }

  async fn sign_in(&self, email: &str, password: &str) -> TalkuvoResult<Session> {
    let mut state = self.state()?;
    let session = match state.accounts.get(email) {
      Some(account) if account.password == password => Self::session_for(account, email),
      _ => Err(TalkuvoErrorType::IncorrectLogin)?,
    };
    state.session = Some(session.clone());
    drop(state);
    self.emit(AuthEvent::SignedIn(session.clone()));
    Ok(session)
  }

  fn oauth_authorize_url(&self, redirect_to: &Url) -> TalkuvoResult<Url> {
    let mut url = self.base_url.join("auth/v1/authorize")?;
    url
      .query_pairs_mut()
      .append_pair("provider", "google")
      .append_pair("redirect_to", redirect_to.as_str());
    Ok(url)
  }

  async fn exchange_code_for_session(&self, code: &str) -> TalkuvoResult<Session> {
    let mut state = self.state()?;
    let email = state
      .pending_codes
      .remove(code)
      .ok_or(TalkuvoErrorType::OauthAuthorizationInvalid)?;
    let session = state
      .accounts
      .get(&email)
      .map(|account| Self::session_for(account, &email))
      .ok_or(TalkuvoErrorType::OauthAuthorizationInvalid)?;
    state.session = Some(session.clone());
    drop(state);
    self.emit(AuthEvent::SignedIn(session.clone()));
    Ok(session)
  }

  async fn current_session(&self) -> Option<Session> {
    self.state().ok()?.session.clone()
  }

  async fn sign_out(&self) -> TalkuvoResult<()> {
    self.state()?.session = None;
    self.emit(AuthEvent::SignedOut);
    Ok(())
  }

  fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
    self.events.subscribe()
  }
}
