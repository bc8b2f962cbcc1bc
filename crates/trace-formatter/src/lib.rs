//! # Redirect Trace Formatter
//!
//! Compact, fixed-width call-stack traces for the moment a redirect happens.
//!
//! ## Layout
//!
//! Each reported frame becomes one line keyed by a zero-padded sequence
//! number:
//!
//! ```text
//! "01" => "<file, padded/truncated to 80>:<line, right-aligned in 5> Class->method(args)"
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! Host stack capture (StackCapture)
//!     │
//!     ├──> Skip the hook's own frames (default: 4, only if the stack is deeper)
//!     │
//!     ├──> Per frame
//!     │    ├─> Backfill file/line from the next frame that has one
//!     │    ├─> Summarize arguments (never for the first line)
//!     │    └─> Align columns
//!     │
//!     └──> Trace (ordered "01".."NN" → line)
//!          ├─> header_entries()  for response headers
//!          └─> comment_block()   for bodies whose headers are already sent
//! ```
//!
//! ## Example
//!
//! ```rust
//! use redirect_trace_formatter::{format_trace, CallType, StackFrame};
//!
//! let frames = vec![
//!     StackFrame::function("hook_a"),
//!     StackFrame::function("hook_b"),
//!     StackFrame::function("apply_filters"),
//!     StackFrame::function("wp_redirect"),
//!     StackFrame::method("App", CallType::Instance, "run").at("app.php", 10),
//! ];
//!
//! let trace = format_trace(&frames, 4);
//! assert_eq!(trace.len(), 1);
//! assert!(trace.get("01").unwrap().ends_with(":   10 App->run()"));
//! ```

mod args;
mod config;
mod error;
mod formatter;
mod hook;
mod trace;
mod types;

pub use args::{summarize_arg, summarize_args};
pub use config::{FormatterConfig, DEFAULT_SKIP_FRAMES};
pub use error::{FormatterError, Result};
pub use formatter::{format_trace, TraceFormatter};
pub use hook::{RedirectHook, StackCapture, TraceBuffer, TraceSink};
pub use trace::{Trace, TraceLine, DEFAULT_COMMENT_PREFIX, DEFAULT_HEADER_PREFIX};
pub use types::{ArgValue, CallType, Number, StackFrame};
