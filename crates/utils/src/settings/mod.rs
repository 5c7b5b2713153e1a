use crate::error::TalkuvoResult;
use merge::Merge;
use std::{env, fs, io};

pub mod structs;
pub mod structs_opt;

use structs::Settings;
use structs_opt::SettingsOpt;

static CONFIG_FILE: &str = "config/config.hjson";

impl Settings {
  /// Reads config from an optional hjson file, with `TALKUVO_` prefixed
  /// environment variables taking precedence over it. Anything left unset
  /// falls back to the defaults.
  pub fn init() -> TalkuvoResult<Self> {
    let mut overrides = envy::prefixed("TALKUVO_").from_env::<SettingsOpt>()?;

    if let Ok(config) = Self::read_config_file() {
      overrides.merge(deser_hjson::from_str::<SettingsOpt>(&config)?);
    }

    let mut settings = Settings::default();
    settings.apply(overrides);
    Ok(settings)
  }

  pub fn get_config_location() -> String {
    env::var("TALKUVO_CONFIG_LOCATION").unwrap_or_else(|_| CONFIG_FILE.to_string())
  }

  pub fn read_config_file() -> Result<String, io::Error> {
    fs::read_to_string(Self::get_config_location())
  }

  fn apply(&mut self, opt: SettingsOpt) {
    if let Some(service_url) = opt.service_url {
      self.service_url = service_url;
    }
    if let Some(anon_key) = opt.anon_key {
      self.anon_key = anon_key;
    }
    if let Some(app_url) = opt.app_url {
      self.app_url = app_url;
    }
    if let Some(auth) = opt.auth {
      if let Some(redirect_path) = auth.redirect_path {
        self.auth.redirect_path = redirect_path;
      }
      if let Some(profile_fetch_timeout) = auth.profile_fetch_timeout {
        self.auth.profile_fetch_timeout = profile_fetch_timeout;
      }
    }
    if let Some(storage) = opt.storage {
      if let Some(avatar_bucket) = storage.avatar_bucket {
        self.storage.avatar_bucket = avatar_bucket;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn defaults() {
    let settings = Settings::default();
    assert_eq!("http://localhost:54321", settings.service_url);
    assert_eq!("avatars", settings.storage.avatar_bucket);
    assert_eq!(10, settings.auth.profile_fetch_timeout);
    assert_eq!("/auth/callback", settings.auth.redirect_path);
  }

  #[test]
  fn parses_hjson() -> TalkuvoResult<()> {
    let opt = deser_hjson::from_str::<SettingsOpt>(
      r#"{
        service_url: "https://backend.example.com"
        storage: {
          avatar_bucket: pictures
        }
      }"#,
    )?;

    let mut settings = Settings::default();
    settings.apply(opt);
    assert_eq!("https://backend.example.com", settings.service_url);
    assert_eq!("pictures", settings.storage.avatar_bucket);
    // untouched by the file
    assert_eq!(10, settings.auth.profile_fetch_timeout);

    Ok(())
  }

  #[test]
  fn env_wins_over_file() {
    let mut env_overrides = SettingsOpt {
      anon_key: Some("from-env".into()),
      ..Default::default()
    };
    let file_overrides = SettingsOpt {
      anon_key: Some("from-file".into()),
      service_url: Some("https://file.example.com".into()),
      ..Default::default()
    };

    env_overrides.merge(file_overrides);

    let mut settings = Settings::default();
    settings.apply(env_overrides);
    assert_eq!("from-env", settings.anon_key);
    assert_eq!("https://file.example.com", settings.service_url);
  }

  #[test]
  fn documents_itself() {
    let docs = doku::to_json::<Settings>();
    assert!(docs.contains("service_url"));
    assert!(docs.contains("avatar_bucket"));
  }
}
