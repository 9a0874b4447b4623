use crate::{
    command::{LearnCommand, RollbackCommand},
    data_structure::PersistentStack,
};
use derive_more::{Display, From};

/// What `check` reports for a clone that has no active program.
pub const BASIC: &str = "basic";

/// Opaque identifier of a learnable program.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Display, From)]
#[display(fmt = "{}", _0)]
pub struct ProgramId(pub i64);

/// Learning history of one clone.
///
/// Every field is a [`PersistentStack`], so copying a clone is three pointer
/// copies and the copy shares all the history it was created with.
/// `programs` and `learn_history` always have the same length.
#[derive(Debug, Clone, Default)]
pub struct CloneState {
    pub(crate) programs: PersistentStack<ProgramId>,
    pub(crate) learn_history: PersistentStack<LearnCommand>,
    pub(crate) rollback_history: PersistentStack<RollbackCommand>,
}

impl CloneState {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn copy(&self) -> Self {
        Self {
            programs: self.programs.copy(),
            learn_history: self.learn_history.copy(),
            rollback_history: self.rollback_history.copy(),
        }
    }

    /// The most recently learned program that is still active, or `"basic"`.
    pub fn last_program(&self) -> String {
        self.programs
            .peek()
            .map_or_else(|_| BASIC.to_string(), ToString::to_string)
    }

    /// Active programs, most recent first.
    pub fn programs(&self) -> impl Iterator<Item = ProgramId> + '_ {
        self.programs.iter().copied()
    }

    pub fn learned_count(&self) -> usize {
        self.programs.len()
    }

    /// How many learns can currently be rolled back.
    pub fn undo_depth(&self) -> usize {
        self.learn_history.len()
    }

    /// How many rollbacks can currently be relearned.
    pub fn redo_depth(&self) -> usize {
        self.rollback_history.len()
    }

    pub(crate) fn shares_history_with(&self, other: &Self) -> bool {
        self.programs.ptr_eq(&other.programs)
            && self.learn_history.ptr_eq(&other.learn_history)
            && self.rollback_history.ptr_eq(&other.rollback_history)
    }
}
