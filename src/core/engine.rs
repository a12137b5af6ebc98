use crate::core::index::WordIndex;
use crate::core::matcher::CandidateMatcher;
use crate::core::types::WordEntry;
use crate::corpus::{ingest, CorpusSource};
use crate::error::SweepResult;
use crate::keys::{render_prompt, Bindings, Choice, KeyCommand, KeySource};
use crate::learning::ConfirmationStore;
use crate::replace::Replacer;
use std::collections::{HashSet, VecDeque};
use std::io::Write;
use tracing::{debug, info, warn};

/// How a single queued word was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordOutcome {
    /// Confirmed before its turn came, usually as an earlier replacement target.
    SkippedAlreadyConfirmed,
    /// No suspicious neighbours; nothing was recorded.
    NoCandidates,
    /// The operator kept the word.
    Confirmed,
    /// The word was replaced everywhere by `with`.
    Replaced { with: String },
}

/// Result of advancing the session by one queue entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Resolved { word: String, outcome: WordOutcome },
    Interrupted,
    Exhausted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub skipped: usize,
    pub no_candidates: usize,
    pub confirmed: usize,
    pub replaced: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: &WordOutcome) {
        match outcome {
            WordOutcome::SkippedAlreadyConfirmed => self.skipped += 1,
            WordOutcome::NoCandidates => self.no_candidates += 1,
            WordOutcome::Confirmed => self.confirmed += 1,
            WordOutcome::Replaced { .. } => self.replaced += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.skipped + self.no_candidates + self.confirmed + self.replaced
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    Completed(SessionSummary),
    Interrupted,
}

/// One interactive review of a corpus.
///
/// Owns the word index, the confirmed and rejected sets and the pending
/// queue. Only one word is ever awaiting input.
pub struct ReviewSession<R: Replacer> {
    index: WordIndex,
    store: ConfirmationStore,
    rejected: HashSet<String>,
    matcher: CandidateMatcher,
    replacer: R,
    queue: VecDeque<WordEntry>,
}

impl<R: Replacer> ReviewSession<R> {
    /// Seeds the index with every confirmed word.
    pub fn new(store: ConfirmationStore, matcher: CandidateMatcher, replacer: R) -> Self {
        let mut index = WordIndex::new();
        store.seed(&mut index);
        Self {
            index,
            store,
            rejected: HashSet::new(),
            matcher,
            replacer,
            queue: VecDeque::new(),
        }
    }

    /// Adds the corpus words to the index and rebuilds the queue.
    pub fn ingest<C: CorpusSource + ?Sized>(&mut self, corpus: &C) -> SweepResult<usize> {
        let kept = ingest(&mut self.index, corpus.extract()?);
        let queued = self.build_queue();
        info!(kept, queued, "corpus ingested");
        Ok(queued)
    }

    /// Queues every unconfirmed word, rarest first.
    pub fn build_queue(&mut self) -> usize {
        self.queue = self.index.queue(self.store.words()).into();
        self.queue.len()
    }

    pub fn candidates_for(&self, word: &str) -> Vec<WordEntry> {
        self.matcher.match_candidates(&self.index, &self.rejected, word)
    }

    /// Resolves the next queued word, prompting through `keys` if needed.
    pub fn step<K, W>(&mut self, keys: &mut K, out: &mut W) -> SweepResult<Advance>
    where
        K: KeySource + ?Sized,
        W: Write,
    {
        let Some(entry) = self.queue.pop_front() else {
            return Ok(Advance::Exhausted);
        };
        let word = entry.word;

        if self.store.has(&word) {
            debug!(word = %word, "already confirmed");
            return Ok(Advance::Resolved { word, outcome: WordOutcome::SkippedAlreadyConfirmed });
        }

        let candidates = self.candidates_for(&word);
        if candidates.is_empty() {
            debug!(word = %word, "no candidates");
            return Ok(Advance::Resolved { word, outcome: WordOutcome::NoCandidates });
        }

        let bindings = Bindings::for_prompt(&word, &candidates);
        render_prompt(out, &bindings, |w| self.store.has(w))?;

        let choice = loop {
            match keys.next_key()? {
                KeyCommand::Interrupt => return Ok(Advance::Interrupted),
                KeyCommand::Char(key) => {
                    if let Some(choice) = bindings.resolve(key) {
                        break choice.clone();
                    }
                }
            }
        };
        let outcome = self.apply(&word, &choice, out)?;
        Ok(Advance::Resolved { word, outcome })
    }

    /// Commits an operator choice for `word`.
    ///
    /// On replacement the bookkeeping is updated whether or not the
    /// substitution succeeds; a failure is only reported.
    pub fn apply<W: Write>(&mut self, word: &str, choice: &Choice, out: &mut W) -> SweepResult<WordOutcome> {
        match choice {
            Choice::Keep => {
                self.store.add(word);
                debug!(word, "confirmed");
                Ok(WordOutcome::Confirmed)
            }
            Choice::Replace(with) => {
                self.store.add(with);
                if let Err(e) = self.replacer.replace(word, with) {
                    warn!(from = word, to = %with, error = %e, "replacement failed");
                    write!(out, "could not replace {} with {}: {}\r\n", word, with, e)?;
                }
                self.rejected.insert(word.to_string());
                debug!(from = word, to = %with, "replaced");
                Ok(WordOutcome::Replaced { with: with.clone() })
            }
        }
    }

    /// Steps until the queue is exhausted or the operator interrupts.
    pub fn run<K, W>(&mut self, keys: &mut K, out: &mut W) -> SweepResult<SessionEnd>
    where
        K: KeySource + ?Sized,
        W: Write,
    {
        let mut summary = SessionSummary::default();
        loop {
            match self.step(keys, out)? {
                Advance::Resolved { outcome, .. } => summary.record(&outcome),
                Advance::Interrupted => return Ok(SessionEnd::Interrupted),
                Advance::Exhausted => {
                    info!(?summary, "review complete");
                    return Ok(SessionEnd::Completed(summary));
                }
            }
        }
    }

    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    pub fn store(&self) -> &ConfirmationStore {
        &self.store
    }

    pub fn rejected(&self) -> &HashSet<String> {
        &self.rejected
    }

    pub fn replacer(&self) -> &R {
        &self.replacer
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}
