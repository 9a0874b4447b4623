//! Commands that change the learning history of a single clone.
//!
//! The history is kept in the three stacks of [`CloneState`]:
//! learning pushes onto `programs` and `learn_history`, rolling back moves the
//! latest learn into `rollback_history`, and relearning replays it from there.

use crate::{clone_state::CloneState, data_structure::EmptyStackError, ProgramId};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum HistoryError {
    #[error(transparent)]
    EmptyStack(#[from] EmptyStackError),
    #[error("tried to replay a rollback that has never been executed")]
    RollbackNotExecuted,
}

pub type Result<T, E = HistoryError> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct LearnCommand {
    program: ProgramId,
}

impl LearnCommand {
    pub fn new(program: ProgramId) -> Self {
        Self { program }
    }

    pub fn program(&self) -> ProgramId {
        self.program
    }

    /// Learns the program on `clone`.
    ///
    /// `initial` is false when the learn is replayed by a relearn; only a
    /// fresh learn drops the pending redo chain.
    pub fn execute(self, clone: &mut CloneState, initial: bool) {
        log::trace!("learn {} (initial: {})", self.program, initial);
        clone.programs.push(self.program);
        clone.learn_history.push(self);
        if initial {
            clone.rollback_history.clear();
        }
    }

    /// Forgets the program this command learned and hands the command back.
    pub fn undo(self, clone: &mut CloneState) -> Result<Self> {
        log::trace!("unlearn {}", self.program);
        clone.programs.pop()?;
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum RollbackState {
    Pending,
    Holding(LearnCommand),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RollbackCommand {
    state: RollbackState,
}

impl Default for RollbackCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl RollbackCommand {
    pub fn new() -> Self {
        Self {
            state: RollbackState::Pending,
        }
    }

    /// The learn this rollback has undone, if it was executed.
    pub fn rolled_back(&self) -> Option<LearnCommand> {
        match self.state {
            RollbackState::Pending => None,
            RollbackState::Holding(learn) => Some(learn),
        }
    }

    /// Undoes the latest learn of `clone`. Does nothing if there is none.
    pub fn execute(mut self, clone: &mut CloneState) -> Result<()> {
        if clone.learn_history.is_empty() {
            log::trace!("nothing to roll back");
            return Ok(());
        }
        let learn = clone.learn_history.pop()?.undo(clone)?;
        self.state = RollbackState::Holding(learn);
        clone.rollback_history.push(self);
        Ok(())
    }

    /// Replays the learn this rollback has undone.
    pub fn undo(self, clone: &mut CloneState) -> Result<()> {
        match self.state {
            RollbackState::Holding(learn) => {
                learn.execute(clone, false);
                Ok(())
            }
            RollbackState::Pending => Err(HistoryError::RollbackNotExecuted),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct RelearnCommand;

impl RelearnCommand {
    /// Redoes the latest rollback of `clone`. Does nothing if there is none.
    pub fn execute(self, clone: &mut CloneState) -> Result<()> {
        if clone.rollback_history.is_empty() {
            log::trace!("nothing to relearn");
            return Ok(());
        }
        clone.rollback_history.pop()?.undo(clone)
    }
}
