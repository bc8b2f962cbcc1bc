use crate::args::summarize_args;
use crate::config::FormatterConfig;
use crate::error::{FormatterError, Result};
use crate::trace::{Trace, TraceLine};
use crate::types::StackFrame;

/// Turns captured stack frames into fixed-width trace lines
#[derive(Debug, Clone, Default)]
pub struct TraceFormatter {
    config: FormatterConfig,
}

/// File/line pair resolved for one output line
struct Location<'a> {
    file: &'a str,
    line: Option<u32>,
}

impl TraceFormatter {
    /// Create a formatter with validated configuration
    pub fn new(config: FormatterConfig) -> Result<Self> {
        config.validate().map_err(FormatterError::invalid_config)?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Format using the configured skip count
    #[must_use]
    pub fn format(&self, frames: &[StackFrame]) -> Trace {
        self.format_with_skip(frames, self.config.skip_frames)
    }

    /// Format, dropping `skip` leading frames when there are more than `skip`.
    ///
    /// Shallow stacks are reported in full. The first emitted line never
    /// shows arguments.
    #[must_use]
    pub fn format_with_skip(&self, frames: &[StackFrame], skip: usize) -> Trace {
        let start = if frames.len() > skip { skip } else { 0 };
        let mut trace = Trace::with_capacity(frames.len() - start);

        for (offset, (index, frame)) in frames.iter().enumerate().skip(start).enumerate() {
            let location = resolve_location(frames, index);
            if location.line != frame.line_number() {
                log::trace!(
                    "frame {index} has no line, using {}:{:?}",
                    location.file,
                    location.line
                );
            }

            let args = if offset > 0 {
                summarize_args(&frame.args)
            } else {
                String::new()
            };

            let text = format!(
                "{}:{} {}({})",
                self.fit_file(location.file),
                self.fit_line(location.line),
                frame.call_site(),
                args
            );
            trace.push(TraceLine::new(self.key(offset + 1), text));
        }

        log::debug!(
            "formatted {} of {} frames (skipped {})",
            trace.len(),
            frames.len(),
            start
        );
        trace
    }

    /// Pad to the file column, or keep the tail behind the truncation marker
    fn fit_file(&self, file: &str) -> String {
        let width = self.config.file_width;
        let len = file.chars().count();
        if len <= width {
            return format!("{file:<width$}");
        }

        let marker = &self.config.truncation_marker;
        let keep = width.saturating_sub(marker.chars().count());
        let tail: String = file.chars().skip(len - keep).collect();
        format!("{marker}{tail}")
    }

    fn fit_line(&self, line: Option<u32>) -> String {
        let width = self.config.line_width;
        let line = line.map(|l| l.to_string()).unwrap_or_default();
        format!("{line:>width$}")
    }

    fn key(&self, number: usize) -> String {
        let width = self.config.key_width;
        format!("{number:0width$}")
    }
}

/// Format with default layout and an explicit skip count
#[must_use]
pub fn format_trace(frames: &[StackFrame], skip: usize) -> Trace {
    TraceFormatter::default().format_with_skip(frames, skip)
}

/// Location of the first frame at or after `index` that carries a line.
///
/// Call-site details always come from the frame at `index`; only the
/// file/line pair is borrowed. Nothing found means a blank location.
fn resolve_location(frames: &[StackFrame], index: usize) -> Location<'_> {
    frames[index..]
        .iter()
        .find_map(|frame| {
            frame.line_number().map(|line| Location {
                file: frame.file.as_deref().unwrap_or_default(),
                line: Some(line),
            })
        })
        .unwrap_or(Location {
            file: "",
            line: None,
        })
}
