use merge::Merge;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, Merge)]
pub struct SettingsOpt {
  pub service_url: Option<String>,
  pub anon_key: Option<String>,
  pub app_url: Option<String>,
  pub auth: Option<AuthConfigOpt>,
  pub storage: Option<StorageConfigOpt>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthConfigOpt {
  pub redirect_path: Option<String>,
  pub profile_fetch_timeout: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfigOpt {
  pub avatar_bucket: Option<String>,
}
