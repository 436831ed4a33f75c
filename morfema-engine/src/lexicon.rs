//! Lexicon repository and lookup cache
//!
//! The lexicon is an injected repository; connection handling and lifecycle
//! belong to the implementor. [`CachedLexicon`] wraps any repository with an
//! append-only memo keyed by exact surface form, since identical word forms
//! recur heavily across a document. Lookups query the exact form first and
//! fall back to (or merge in) the lowercased form.
//!
//! A failed lookup degrades to "no candidates" for that word only; it is
//! surfaced as [`LookupOutcome::Failed`] so tests can tell it apart from a
//! genuine miss, but it never aborts a sentence or batch.

use crate::candidate::{merge_candidates, Candidate};
use crate::error::LookupError;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::warn;

/// The dictionary repository contract. `Ok(None)` means the word is not in
/// the lexicon; `Err` means the backend itself failed.
pub trait Lexicon {
    fn lookup(&self, word: &str) -> Result<Option<Vec<Candidate>>, LookupError>;
}

/// Three-state result of a cached lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The word is not in the lexicon (or no lookup was attempted)
    NotLookedUp,
    /// Candidates were found; the list is never empty
    Found(Vec<Candidate>),
    /// The backend failed; the word degrades to "no candidates"
    Failed(String),
}

impl LookupOutcome {
    /// The candidates this outcome contributes to disambiguation
    pub fn candidates(&self) -> &[Candidate] {
        match self {
            LookupOutcome::Found(candidates) => candidates,
            LookupOutcome::NotLookedUp | LookupOutcome::Failed(_) => &[],
        }
    }
}

/// An append-only memoizing wrapper over a lexicon
pub struct CachedLexicon<L> {
    inner: L,
    cache: RwLock<HashMap<String, Option<Vec<Candidate>>>>,
}

impl<L: Lexicon> CachedLexicon<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Look a word up, consulting the memo first. Failures are not cached,
    /// so a transient backend error does not poison the word for the rest
    /// of the run.
    pub fn lookup_cached(&self, word: &str) -> LookupOutcome {
        if let Some(hit) = self.read_cache().get(word) {
            return match hit {
                Some(candidates) => LookupOutcome::Found(candidates.clone()),
                None => LookupOutcome::NotLookedUp,
            };
        }
        match self.fetch(word) {
            Ok(result) => {
                self.write_cache().insert(word.to_string(), result.clone());
                match result {
                    Some(candidates) => LookupOutcome::Found(candidates),
                    None => LookupOutcome::NotLookedUp,
                }
            }
            Err(err) => {
                warn!(%word, %err, "lexicon lookup failed, degrading to no candidates");
                LookupOutcome::Failed(err.message)
            }
        }
    }

    // the cache holds no invariants a panicking writer could break, so a
    // poisoned lock is recovered rather than propagated
    fn read_cache(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Option<Vec<Candidate>>>> {
        self.cache
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_cache(
        &self,
    ) -> std::sync::RwLockWriteGuard<'_, HashMap<String, Option<Vec<Candidate>>>> {
        self.cache
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Exact form first; the lowercased form either substitutes for a miss
    /// or merges into the exact hits under the (UPOS, UFeats) dedup rule
    fn fetch(&self, word: &str) -> Result<Option<Vec<Candidate>>, LookupError> {
        let exact = self.inner.lookup(word)?;
        let lower = word.to_lowercase();
        if lower == word {
            return Ok(exact.filter(|c| !c.is_empty()));
        }
        match exact {
            None => Ok(self.inner.lookup(&lower)?.filter(|c| !c.is_empty())),
            Some(mut candidates) => {
                if let Some(extra) = self.inner.lookup(&lower)? {
                    merge_candidates(&mut candidates, extra);
                }
                Ok(Some(candidates).filter(|c| !c.is_empty()))
            }
        }
    }
}
