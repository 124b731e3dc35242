use std::fmt;
use std::sync::Arc;

use crate::cache::PatternCache;
use crate::matcher::{OnigCompiler, PatternCompiler};

/// The options used to build an [`Engine`](crate::Engine)
#[derive(Clone)]
pub struct EngineOptions {
    /// Whether patterns failing to compile or to run are ignored instead of returning an error
    pub(crate) forgiving: bool,
    /// Shared with every scanner created by the engine
    pub(crate) cache: PatternCache,
    pub(crate) compiler: Arc<dyn PatternCompiler>,
}

impl EngineOptions {
    /// Broken patterns are skipped rather than failing scanner creation or scans.
    /// Defaults to `false`.
    pub fn forgiving(mut self, value: bool) -> Self {
        self.forgiving = value;
        self
    }

    /// Use an existing cache, eg to share compiled patterns between engines.
    pub fn cache(mut self, cache: PatternCache) -> Self {
        self.cache = cache;
        self
    }

    /// Replace the default Oniguruma compiler.
    ///
    /// If the cache given to [`EngineOptions::cache`] was populated by another compiler,
    /// its entries are used as-is.
    pub fn compiler(mut self, compiler: impl PatternCompiler + 'static) -> Self {
        self.compiler = Arc::new(compiler);
        self
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            forgiving: false,
            cache: PatternCache::new(),
            compiler: Arc::new(OnigCompiler),
        }
    }
}

impl fmt::Debug for EngineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineOptions")
            .field("forgiving", &self.forgiving)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
