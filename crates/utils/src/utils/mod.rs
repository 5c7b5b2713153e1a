pub mod slug;
pub mod validation;
