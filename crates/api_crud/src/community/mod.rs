pub mod create;
pub mod join;
pub mod read;
