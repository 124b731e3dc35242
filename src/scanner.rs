use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

use crate::anchors::is_contiguous_anchor;
use crate::buffer::{ScanBuffer, ensure_scannable};
use crate::cache::{CacheEntry, PatternCache};
use crate::error::{Error, ScanResult};
use crate::matcher::{CapturePositions, Matcher, PatternCompiler};

/// Value of `start` and `end` for a capture group that did not participate in the match
pub const UNMATCHED: u32 = u32::MAX;

/// A capture group of a match, in byte offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaptureSpan {
    pub start: u32,
    pub length: u32,
    pub end: u32,
}

impl CaptureSpan {
    pub const UNMATCHED: CaptureSpan = CaptureSpan {
        start: UNMATCHED,
        length: 0,
        end: UNMATCHED,
    };

    /// Positions must have been checked against `ScanBuffer::MAX_LEN`
    fn from_pos(pos: Option<(usize, usize)>, offset: usize) -> Self {
        match pos {
            Some((start, end)) => CaptureSpan {
                start: (start + offset) as u32,
                length: (end - start) as u32,
                end: (end + offset) as u32,
            },
            None => Self::UNMATCHED,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.start != UNMATCHED
    }
}

/// The winning match of a scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// Index of the pattern that matched, in the order given to the scanner
    pub pattern_index: usize,
    /// Group 0 is the whole match
    pub captures: Vec<CaptureSpan>,
}

impl MatchResult {
    fn new(pattern_index: usize, captures: &CapturePositions, offset: usize) -> Self {
        Self {
            pattern_index,
            captures: captures
                .iter()
                .map(|pos| CaptureSpan::from_pos(*pos, offset))
                .collect(),
        }
    }

    /// Byte offset where the whole match starts
    pub fn start(&self) -> u32 {
        self.captures[0].start
    }

    /// Byte offset where the whole match ends
    pub fn end(&self) -> u32 {
        self.captures[0].end
    }
}

/// A match that didn't start at the scan position. Lives only for the duration of a scan.
struct Candidate {
    pattern_index: usize,
    start: usize,
    captures: CapturePositions,
    /// Added to every capture position, non-zero when found by the anchor retry
    offset: usize,
}

/// Finds which pattern of a rule-set matches first in a buffer.
///
/// Patterns are compiled once, when the scanner is built, through the engine cache.
pub struct Scanner {
    patterns: Vec<String>,
    /// `None` for patterns that failed to compile in forgiving mode
    matchers: Vec<Option<Arc<dyn Matcher>>>,
    contiguous_anchors: Vec<bool>,
    /// Set when a matcher errored during a scan in forgiving mode
    disabled: Vec<AtomicBool>,
    forgiving: bool,
}

impl Scanner {
    pub(crate) fn new(
        patterns: Vec<String>,
        cache: &PatternCache,
        compiler: &dyn PatternCompiler,
        forgiving: bool,
    ) -> ScanResult<Self> {
        let mut matchers = Vec::with_capacity(patterns.len());
        let mut contiguous_anchors = Vec::with_capacity(patterns.len());

        for pattern in &patterns {
            contiguous_anchors.push(is_contiguous_anchor(pattern));

            match cache.get_or_compile(pattern, compiler) {
                CacheEntry::Compiled(matcher) => matchers.push(Some(matcher)),
                CacheEntry::Failed(message) => {
                    if !forgiving {
                        return Err(Error::PatternCompilation {
                            pattern: pattern.clone(),
                            message,
                        });
                    }
                    #[cfg(feature = "debug")]
                    log::warn!("[scanner] ignoring pattern {pattern:?}: {message}");
                    matchers.push(None);
                }
            }
        }

        let disabled = patterns.iter().map(|_| AtomicBool::new(false)).collect();

        Ok(Self {
            patterns,
            matchers,
            contiguous_anchors,
            disabled,
            forgiving,
        })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// How many patterns can still produce a match
    pub fn usable_patterns(&self) -> usize {
        self.matchers
            .iter()
            .zip(&self.disabled)
            .filter(|(m, d)| m.is_some() && !d.load(Ordering::Relaxed))
            .count()
    }

    /// Searches the buffer from `start` and returns the match starting the earliest.
    /// If several patterns match at the same position, the one given first wins.
    ///
    /// Fails with [`Error::BufferTooLarge`] for buffers over [`ScanBuffer::MAX_LEN`] bytes.
    pub fn find_next_match(
        &self,
        buffer: &ScanBuffer,
        start: usize,
    ) -> ScanResult<Option<MatchResult>> {
        let text = buffer.as_str();
        ensure_scannable(text.len())?;
        if start > text.len() {
            return Ok(None);
        }

        let mut best: Option<Candidate> = None;

        for (pattern_index, matcher) in self.matchers.iter().enumerate() {
            let Some(matcher) = matcher else {
                continue;
            };
            if self.disabled[pattern_index].load(Ordering::Relaxed) {
                continue;
            }

            let (captures, offset) = match self.search(pattern_index, matcher, text, start) {
                Ok(Some(found)) => found,
                Ok(None) => continue,
                Err(message) => {
                    if !self.forgiving {
                        return Err(Error::ScanExecution {
                            pattern: self.patterns[pattern_index].clone(),
                            message,
                        });
                    }
                    #[cfg(feature = "debug")]
                    log::warn!(
                        "[scanner] disabling pattern {:?}: {message}",
                        self.patterns[pattern_index]
                    );
                    self.disabled[pattern_index].store(true, Ordering::Relaxed);
                    continue;
                }
            };

            let Some((match_start, _)) = captures.first().copied().flatten() else {
                continue;
            };
            let match_start = match_start + offset;

            // Nothing can beat a match at the scan position
            if match_start == start {
                #[cfg(feature = "debug")]
                log::debug!("[scanner] pattern #{pattern_index} matched at {start}");
                return Ok(Some(MatchResult::new(pattern_index, &captures, offset)));
            }

            if best.as_ref().is_none_or(|b| match_start < b.start) {
                best = Some(Candidate {
                    pattern_index,
                    start: match_start,
                    captures,
                    offset,
                });
            }
        }

        #[cfg(feature = "debug")]
        if let Some(b) = &best {
            log::debug!(
                "[scanner] pattern #{} matched at {} (searching from {start})",
                b.pattern_index,
                b.start
            );
        }

        Ok(best.map(|b| MatchResult::new(b.pattern_index, &b.captures, b.offset)))
    }

    /// Runs a single pattern. Returns the captures and the offset to add to them.
    fn search(
        &self,
        pattern_index: usize,
        matcher: &Arc<dyn Matcher>,
        text: &str,
        start: usize,
    ) -> Result<Option<(CapturePositions, usize)>, String> {
        if let Some(captures) = matcher.search(text, start)? {
            return Ok(Some((captures, 0)));
        }

        // `(^|\G)` can only match where the previous match ended: retry with the text
        // starting at that position so `^` matches there
        if self.contiguous_anchors[pattern_index]
            && let Some(rest) = text.get(start..)
        {
            return Ok(matcher.search(rest, 0)?.map(|captures| (captures, start)));
        }

        Ok(None)
    }
}

impl fmt::Debug for Scanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scanner({} patterns, {} usable)",
            self.patterns.len(),
            self.usable_patterns()
        )
    }
}
