use crate::{
  auth::{AuthProvider, LocalAuthProvider},
  session::SessionState,
  storage::{LocalStorage, StorageClient},
};
use std::sync::Arc;
use talkuvo_db_schema::store::StoreClient;
use talkuvo_utils::{error::TalkuvoResult, settings::structs::Settings};
use url::Url;

#[derive(Clone)]
pub struct TalkuvoContext {
  store: Arc<StoreClient>,
  auth: Arc<dyn AuthProvider>,
  storage: Arc<dyn StorageClient>,
  settings: Arc<Settings>,
  session_state: SessionState,
}

impl TalkuvoContext {
  pub fn create(
    store: StoreClient,
    auth: Arc<dyn AuthProvider>,
    storage: Arc<dyn StorageClient>,
    settings: Settings,
  ) -> TalkuvoContext {
    TalkuvoContext {
      store: Arc::new(store),
      auth,
      storage,
      settings: Arc::new(settings),
      session_state: SessionState::new(),
    }
  }

  /// Fully local context for tests, nothing reaches the network.
  pub fn init_test_context() -> TalkuvoResult<TalkuvoContext> {
    let settings = Settings::default();
    let base_url = Url::parse(&settings.service_url)?;
    Ok(Self::create(
      StoreClient::default(),
      Arc::new(LocalAuthProvider::new(base_url.clone())),
      Arc::new(LocalStorage::new(base_url)),
      settings,
    ))
  }

  pub fn store(&self) -> &StoreClient {
    &self.store
  }
  pub fn auth(&self) -> &dyn AuthProvider {
    self.auth.as_ref()
  }
  pub fn storage(&self) -> &dyn StorageClient {
    self.storage.as_ref()
  }
  pub fn settings(&self) -> &Settings {
    &self.settings
  }
  pub fn session_state(&self) -> &SessionState {
    &self.session_state
  }
}
