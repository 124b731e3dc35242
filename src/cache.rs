use std::fmt;
use std::sync::Arc;

use crate::matcher::{Matcher, PatternCompiler};

/// What the cache remembers for a pattern: either the compiled matcher
/// or the error message we got when compiling it.
#[derive(Clone)]
pub enum CacheEntry {
    Compiled(Arc<dyn Matcher>),
    Failed(String),
}

impl CacheEntry {
    pub fn matcher(&self) -> Option<&Arc<dyn Matcher>> {
        match self {
            CacheEntry::Compiled(m) => Some(m),
            CacheEntry::Failed(_) => None,
        }
    }
}

impl fmt::Debug for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheEntry::Compiled(_) => f.write_str("Compiled"),
            CacheEntry::Failed(message) => write!(f, "Failed({message:?})"),
        }
    }
}

/// Compiled patterns keyed by their source string.
///
/// Cloning is cheap and the clones share the same storage, so the same cache can be given
/// to several engines. Entries are never evicted nor replaced: the first compilation result
/// stored for a pattern is the one everyone gets afterwards.
#[derive(Clone, Default)]
pub struct PatternCache {
    entries: Arc<papaya::HashMap<String, CacheEntry>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for that pattern, compiling it with `compiler` if it wasn't seen yet.
    ///
    /// If two threads race on the same unseen pattern, both may compile it but only
    /// one result is kept and returned to both.
    pub fn get_or_compile(&self, pattern: &str, compiler: &dyn PatternCompiler) -> CacheEntry {
        let entries = self.entries.pin();
        if let Some(entry) = entries.get(pattern) {
            #[cfg(feature = "debug")]
            log::debug!("[pattern_cache] hit for {pattern:?}");
            return entry.clone();
        }

        entries
            .get_or_insert_with(pattern.to_owned(), || {
                #[cfg(feature = "debug")]
                log::debug!("[pattern_cache] compiling {pattern:?}");
                match compiler.compile(pattern) {
                    Ok(matcher) => CacheEntry::Compiled(matcher),
                    Err(message) => CacheEntry::Failed(message),
                }
            })
            .clone()
    }

    pub fn get(&self, pattern: &str) -> Option<CacheEntry> {
        self.entries.pin().get(pattern).cloned()
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.entries.pin().contains_key(pattern)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for PatternCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatternCache({} patterns)", self.len())
    }
}
