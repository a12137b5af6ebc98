// File: src/keys.rs
use crate::core::types::WordEntry;
use crate::error::{SweepError, SweepResult};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Stylize;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::Write;

/// Key that keeps the word under review as it is.
pub const KEEP_KEY: char = 'a';
const FIRST_CANDIDATE_KEY: char = 'b';
const LAST_CANDIDATE_KEY: char = 'z';

/// A single operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Char(char),
    Interrupt,
}

/// What a bound key does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Keep,
    Replace(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: char,
    pub label: String,
    pub choice: Choice,
}

/// Key bindings for exactly one prompt.
///
/// A new table is built for every prompt and dropped once it resolves, so a
/// key can only ever select an option that is on screen.
#[derive(Debug, Clone)]
pub struct Bindings {
    entries: Vec<Binding>,
}

impl Bindings {
    /// `a` keeps `word`; `b`, `c`, ... select the candidates in order.
    /// Candidates past `z` are not bound.
    pub fn for_prompt(word: &str, candidates: &[WordEntry]) -> Self {
        let keep = Binding {
            key: KEEP_KEY,
            label: word.to_string(),
            choice: Choice::Keep,
        };
        let entries = std::iter::once(keep)
            .chain(
                (FIRST_CANDIDATE_KEY..=LAST_CANDIDATE_KEY)
                    .zip(candidates)
                    .map(|(key, entry)| Binding {
                        key,
                        label: entry.word.clone(),
                        choice: Choice::Replace(entry.word.clone()),
                    }),
            )
            .collect();
        Self { entries }
    }

    pub fn resolve(&self, key: char) -> Option<&Choice> {
        self.entries.iter().find(|b| b.key == key).map(|b| &b.choice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Writes `word(a): cand(b) cand(c) ` on one line. Candidates for which
/// `is_confirmed` holds are shown in green.
pub fn render_prompt<W, F>(out: &mut W, bindings: &Bindings, is_confirmed: F) -> SweepResult<()>
where
    W: Write,
    F: Fn(&str) -> bool,
{
    let mut options = bindings.iter();
    if let Some(keep) = options.next() {
        write!(out, "{}({}):", keep.label, keep.key)?;
    }
    for binding in options {
        let text = format!("{}({}) ", binding.label, binding.key);
        if is_confirmed(&binding.label) {
            write!(out, "{}", text.green())?;
        } else {
            write!(out, "{}", text)?;
        }
    }
    // Raw mode does not translate \n.
    write!(out, "\r\n")?;
    out.flush()?;
    Ok(())
}

/// Source of operator input.
pub trait KeySource {
    /// Blocks until the next key.
    fn next_key(&mut self) -> SweepResult<KeyCommand>;
}

/// Reads single keypresses from the terminal in raw mode.
/// Raw mode lasts as long as this value.
pub struct TerminalKeys {
    _private: (),
}

impl TerminalKeys {
    pub fn new() -> SweepResult<Self> {
        enable_raw_mode().map_err(SweepError::Terminal)?;
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalKeys {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> SweepResult<KeyCommand> {
        loop {
            let event = event::read().map_err(SweepError::Terminal)?;
            if let Event::Key(key) = event {
                if let Some(command) = translate(key) {
                    return Ok(command);
                }
            }
        }
    }
}

/// Ctrl-C is the interrupt; other plain characters pass through.
fn translate(key: KeyEvent) -> Option<KeyCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyCommand::Interrupt)
        }
        KeyCode::Char(c) => Some(KeyCommand::Char(c)),
        _ => None,
    }
}

/// Plays back a fixed key sequence, then interrupts.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptedKeys {
    keys: std::collections::VecDeque<KeyCommand>,
}

#[cfg(test)]
impl ScriptedKeys {
    pub(crate) fn new(keys: impl IntoIterator<Item = char>) -> Self {
        Self { keys: keys.into_iter().map(KeyCommand::Char).collect() }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> SweepResult<KeyCommand> {
        Ok(self.keys.pop_front().unwrap_or(KeyCommand::Interrupt))
    }
}
