// Shared helpers for the integration tests.

use std::collections::VecDeque;

use sweep_core::keys::{KeyCommand, KeySource};
use sweep_core::SweepResult;

/// Plays back a fixed key sequence, then interrupts.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyCommand>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = char>) -> Self {
        Self { keys: keys.into_iter().map(KeyCommand::Char).collect() }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> SweepResult<KeyCommand> {
        Ok(self.keys.pop_front().unwrap_or(KeyCommand::Interrupt))
    }
}
