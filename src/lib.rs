use thiserror::Error;

pub use clone_state::{CloneState, ProgramId, BASIC};
pub use clones_query::{parse_query, CloneIndex, ParseError, Query, Verb};
pub use command::HistoryError;
pub use data_structure::{EmptyStackError, PersistentStack};
pub use system::{CloneError, IndexPolicy, VersionSystem};

mod clone_state;
pub mod command;
pub mod data_structure;
mod system;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Clone(#[from] CloneError),
    #[error(transparent)]
    History(#[from] HistoryError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
