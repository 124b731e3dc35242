use std::sync::Arc;

use onig::{MatchParam, Regex, RegexOptions, Region, SearchOptions, Syntax};

/// Absolute byte positions of every capture group of a match, group 0 first.
/// `None` for groups that did not participate.
pub type CapturePositions = Vec<Option<(usize, usize)>>;

/// A compiled pattern.
///
/// Implementations are shared between every scanner of an engine, possibly across threads,
/// so they must not keep any per-search state.
pub trait Matcher: Send + Sync {
    /// Searches `text` for the leftmost match starting at or after `start`.
    ///
    /// Returned positions are relative to the beginning of `text`, not to `start`.
    fn search(&self, text: &str, start: usize) -> Result<Option<CapturePositions>, String>;
}

/// Turns a pattern string into a [`Matcher`].
pub trait PatternCompiler: Send + Sync {
    /// Compiles the pattern, returning a human readable message if the pattern
    /// is not supported.
    fn compile(&self, pattern: &str) -> Result<Arc<dyn Matcher>, String>;
}

impl<F> PatternCompiler for F
where
    F: Fn(&str) -> Result<Arc<dyn Matcher>, String> + Send + Sync,
{
    fn compile(&self, pattern: &str) -> Result<Arc<dyn Matcher>, String> {
        self(pattern)
    }
}

impl Matcher for Regex {
    fn search(&self, text: &str, start: usize) -> Result<Option<CapturePositions>, String> {
        let mut region = Region::new();
        // We need to give the full text and not a slice so lookbehinds can see before `start`
        let found = self
            .search_with_param(
                text,
                start,
                text.len(),
                SearchOptions::SEARCH_OPTION_NONE,
                Some(&mut region),
                MatchParam::default(),
            )
            .map_err(|e| e.to_string())?;

        if found.is_none() {
            return Ok(None);
        }

        Ok(Some((0..region.len()).map(|i| region.pos(i)).collect()))
    }
}

/// The default compiler: patterns are compiled with Oniguruma itself.
#[derive(Debug, Default, Copy, Clone)]
pub struct OnigCompiler;

impl PatternCompiler for OnigCompiler {
    fn compile(&self, pattern: &str) -> Result<Arc<dyn Matcher>, String> {
        let regex = Regex::with_options(
            pattern,
            RegexOptions::REGEX_OPTION_CAPTURE_GROUP,
            Syntax::default(),
        )
        .map_err(|e| e.to_string())?;
        Ok(Arc::new(regex))
    }
}
