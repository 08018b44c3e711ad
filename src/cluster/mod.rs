mod config;
mod error;
mod frontier;
mod generator;
mod grow;
mod seeds;
mod summary;
mod validate;

pub use config::GeneratorConfig;
pub use error::AttemptError;
pub(self) use frontier::Frontier;
pub use generator::{AttemptResult, Generator};
pub(self) use grow::Grower;
pub(self) use seeds::choose_seeds;
pub use summary::RunSummary;
pub(self) use validate::validate;
