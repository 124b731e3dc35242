use std::sync::Arc;

use crate::buffer::ScanBuffer;
use crate::cache::PatternCache;
use crate::error::ScanResult;
use crate::matcher::PatternCompiler;
use crate::options::EngineOptions;
use crate::scanner::Scanner;

/// Creates scanners sharing the same compiled patterns.
///
/// Meant to be created once and used for the whole highlighting session.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    /// Creates a scanner for the given patterns, in priority order.
    ///
    /// Fails on the first pattern that can't be compiled unless the engine is forgiving.
    pub fn create_scanner<I, S>(&self, patterns: I) -> ScanResult<Scanner>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Scanner::new(
            patterns.into_iter().map(Into::into).collect(),
            &self.options.cache,
            self.options.compiler.as_ref(),
            self.options.forgiving,
        )
    }

    pub fn create_buffer(&self, text: impl Into<Arc<str>>) -> ScanBuffer {
        ScanBuffer::new(text)
    }

    pub fn cache(&self) -> &PatternCache {
        &self.options.cache
    }

    pub fn compiler(&self) -> &dyn PatternCompiler {
        self.options.compiler.as_ref()
    }

    pub fn is_forgiving(&self) -> bool {
        self.options.forgiving
    }
}
