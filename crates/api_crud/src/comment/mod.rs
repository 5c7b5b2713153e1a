pub mod create;
pub mod like;
pub mod read;
