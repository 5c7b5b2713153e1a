use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
  EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
/// The role a profile holds inside a community.
pub enum MembershipRole {
  #[default]
  Member,
  Moderator,
  Admin,
}

#[derive(
  EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
/// The post type decides which single body field is populated: text posts
/// carry content, link posts a url, image posts an image url.
pub enum PostType {
  #[default]
  Text,
  Link,
  Image,
}

#[derive(
  EnumString, Display, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VoteType {
  #[default]
  Up,
  Down,
}
