//! Move instructions and the two crane models that execute them

use super::stacks::{StackError, StackStore};
use std::fmt;

/// One rearrangement step: move `quantity` crates from `from` to `to`
///
/// Stack indices are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub quantity: usize,
    pub from: usize,
    pub to: usize,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move {} from {} to {}", self.quantity, self.from, self.to)
    }
}

/// Transfer policy of the crane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CraneModel {
    /// Lifts one crate at a time, so a moved group lands reversed
    CrateMover9000,
    /// Lifts the whole group at once, so its order is kept
    CrateMover9001,
}

impl CraneModel {
    /// Apply a single move to `store`
    ///
    /// Both stacks and the source height are checked before anything moves, so
    /// a failed move leaves the store unchanged.
    pub fn apply(self, store: &mut StackStore, step: Move) -> Result<(), StackError> {
        let available = store.stack(step.from)?.height();
        store.stack(step.to)?;
        if available < step.quantity {
            return Err(StackError::Underflow {
                stack: step.from,
                requested: step.quantity,
                available,
            });
        }
        if step.from == step.to {
            // Lifting crates and putting them back where they were is a no-op
            // for either model
            return Ok(());
        }

        match self {
            CraneModel::CrateMover9000 => {
                for _ in 0..step.quantity {
                    let item = store.pop(step.from)?;
                    store.push(step.to, item)?;
                }
            }
            CraneModel::CrateMover9001 => {
                let group = store
                    .stack_mut(step.from)?
                    .take_top(step.quantity)
                    .ok_or(StackError::Underflow {
                        stack: step.from,
                        requested: step.quantity,
                        available,
                    })?;
                store.stack_mut(step.to)?.put_on_top(group);
            }
        }
        Ok(())
    }

    /// Apply `steps` in order
    pub fn rearrange(self, store: &mut StackStore, steps: &[Move]) -> Result<(), StackError> {
        steps.iter().try_for_each(|step| self.apply(store, *step))
    }
}
