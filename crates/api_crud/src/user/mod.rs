pub mod create;
pub mod read;
pub mod session;
pub mod update;
