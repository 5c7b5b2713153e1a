use doku::Document;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, Document)]
#[serde(default)]
pub struct Settings {
  /// Base url of the hosted backend service (mandatory in production)
  #[default("http://localhost:54321")]
  #[doku(example = "https://backend.example.com")]
  pub service_url: String,
  /// Publishable api key sent along with every request
  #[default("")]
  pub anon_key: String,
  /// Public origin of this site, used to build OAuth redirect urls
  #[default("http://localhost:3000")]
  #[doku(example = "https://talkuvo.example")]
  pub app_url: String,
  /// Settings related to the hosted identity provider
  #[default(Default::default())]
  pub auth: AuthConfig,
  /// Settings related to the hosted object storage
  #[default(Default::default())]
  pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, Document)]
#[serde(default)]
pub struct AuthConfig {
  /// Path the identity provider redirects back to after an OAuth login
  #[default("/auth/callback")]
  pub redirect_path: String,
  /// Seconds to wait for a profile fetch before giving up on it for the
  /// current session (the session itself stays valid)
  #[default(10)]
  pub profile_fetch_timeout: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, Document)]
#[serde(default)]
pub struct StorageConfig {
  /// Bucket holding avatar images
  #[default("avatars")]
  pub avatar_bucket: String,
}
