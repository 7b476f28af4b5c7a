pub mod cli_config;
pub mod sources;
pub mod validation;

pub use cli_config::*;
pub use sources::*;
pub use validation::*;
