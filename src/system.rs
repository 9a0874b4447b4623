use crate::{
    clone_state::CloneState,
    command::{LearnCommand, RelearnCommand, RollbackCommand},
    CloneIndex, ProgramId, Query, Result,
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum CloneError {
    #[error("Clone index {index} is out of range, there are {count} clones")]
    InvalidIndex { index: CloneIndex, count: usize },
}

/// What to do with a query whose clone index does not name an existing clone.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum IndexPolicy {
    /// Skip the query; `check` produces no output.
    #[default]
    Ignore,
    /// Fail with [`CloneError::InvalidIndex`].
    Reject,
}

/// A population of clones, addressed by 1-based indices.
///
/// Starts with a single clone that knows nothing. Clones are only ever
/// appended.
#[derive(Debug)]
pub struct VersionSystem {
    clones: Vec<CloneState>,
    policy: IndexPolicy,
}

impl Default for VersionSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionSystem {
    pub fn new() -> Self {
        Self::with_policy(IndexPolicy::default())
    }

    pub fn with_policy(policy: IndexPolicy) -> Self {
        Self {
            clones: vec![CloneState::new()],
            policy,
        }
    }

    pub fn policy(&self) -> IndexPolicy {
        self.policy
    }

    pub fn clone_count(&self) -> usize {
        self.clones.len()
    }

    pub fn get(&self, index: CloneIndex) -> Option<&CloneState> {
        index.checked_sub(1).and_then(|i| self.clones.get(i))
    }

    pub fn learn(&mut self, index: CloneIndex, program: ProgramId) -> Result<()> {
        if let Some(clone) = self.resolve(index)? {
            log::debug!("clone {}: learn {}", index, program);
            LearnCommand::new(program).execute(clone, true);
        }
        Ok(())
    }

    pub fn rollback(&mut self, index: CloneIndex) -> Result<()> {
        if let Some(clone) = self.resolve(index)? {
            log::debug!("clone {}: rollback", index);
            RollbackCommand::new().execute(clone)?;
        }
        Ok(())
    }

    pub fn relearn(&mut self, index: CloneIndex) -> Result<()> {
        if let Some(clone) = self.resolve(index)? {
            log::debug!("clone {}: relearn", index);
            RelearnCommand.execute(clone)?;
        }
        Ok(())
    }

    /// Appends a copy of the clone at `index`. The copy gets the next index.
    pub fn clone_from_index(&mut self, index: CloneIndex) -> Result<()> {
        if let Some(position) = self.position(index)? {
            let copied = self.clones[position].copy();
            self.clones.push(copied);
            log::debug!("clone {}: copied into clone {}", index, self.clones.len());
        }
        Ok(())
    }

    /// The active program of the clone at `index`, or `None` if the index
    /// was ignored.
    pub fn check(&self, index: CloneIndex) -> Result<Option<String>> {
        let checked = self
            .position(index)?
            .map(|position| self.clones[position].last_program());
        Ok(checked)
    }

    /// Parses and runs a single textual query such as `learn 1 5`.
    pub fn execute(&mut self, query: &str) -> Result<Option<String>> {
        let query = clones_query::parse_query(query)?;
        self.run_query(query)
    }

    pub fn run_query(&mut self, query: Query) -> Result<Option<String>> {
        log::trace!("Running query `{}`", query);
        match query {
            Query::Learn { clone, program } => self.learn(clone, ProgramId(program))?,
            Query::Rollback { clone } => self.rollback(clone)?,
            Query::Relearn { clone } => self.relearn(clone)?,
            Query::Clone { clone } => self.clone_from_index(clone)?,
            Query::Check { clone } => return self.check(clone),
        }
        Ok(None)
    }

    fn resolve(&mut self, index: CloneIndex) -> Result<Option<&mut CloneState>, CloneError> {
        Ok(match self.position(index)? {
            Some(position) => Some(&mut self.clones[position]),
            None => None,
        })
    }

    fn position(&self, index: CloneIndex) -> Result<Option<usize>, CloneError> {
        let count = self.clones.len();
        if (1..=count).contains(&index) {
            return Ok(Some(index - 1));
        }
        match self.policy {
            IndexPolicy::Ignore => {
                log::info!("Ignoring clone index {}, there are {} clones", index, count);
                Ok(None)
            }
            IndexPolicy::Reject => Err(CloneError::InvalidIndex { index, count }),
        }
    }
}
