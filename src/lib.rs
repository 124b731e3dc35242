//! Finds which pattern of a TextMate rule-set matches first in a line, the way
//! vscode-textmate does with Oniguruma scanners.
//!
//! ```
//! use tmscan::Engine;
//!
//! let engine = Engine::default();
//! let scanner = engine.create_scanner(["c", "a"]).unwrap();
//! let buffer = engine.create_buffer("xaby");
//! let m = scanner.find_next_match(&buffer, 0).unwrap().unwrap();
//! assert_eq!(m.pattern_index, 1);
//! assert_eq!(m.start(), 1);
//! ```

mod anchors;
mod buffer;
mod cache;
mod engine;
mod error;
mod matcher;
mod options;
mod scanner;

pub use buffer::ScanBuffer;
pub use cache::{CacheEntry, PatternCache};
pub use engine::Engine;
pub use error::{Error, ScanResult};
pub use matcher::{CapturePositions, Matcher, OnigCompiler, PatternCompiler};
pub use options::EngineOptions;
pub use scanner::{CaptureSpan, MatchResult, Scanner, UNMATCHED};
