pub mod comment;
pub mod community;
pub mod community_member;
pub mod post;
pub mod profile;
pub mod vote;
