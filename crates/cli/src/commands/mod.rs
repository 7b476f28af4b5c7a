pub mod banner;
pub mod config;
pub mod create;
pub mod json;
