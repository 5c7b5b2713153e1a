use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use url::Url;

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Where to send the browser to start an OAuth login.
pub struct OauthAuthorizationResponse {
  pub authorize_url: Url,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Query string the identity provider redirects back with. Either `code`
/// is present, or `error` explains why the login was abandoned.
pub struct OauthCallbackQuery {
  pub code: Option<String>,
  pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Where the callback handler sends the browser next.
pub struct OauthCallbackResponse {
  pub redirect_to: String,
}
