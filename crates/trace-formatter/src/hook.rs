//! Wiring between a host's redirect event and the formatter.
//!
//! The host owns both ends: it supplies frames through [`StackCapture`] and
//! decides where the result goes through [`TraceSink`]. Nothing here is
//! global; a [`RedirectHook`] is built once during application setup and
//! called from the host's redirect handler.

use crate::formatter::TraceFormatter;
use crate::trace::Trace;
use crate::types::StackFrame;

/// Source of the raw call stack at the moment of the event
pub trait StackCapture {
    fn capture(&self) -> Vec<StackFrame>;
}

impl<F> StackCapture for F
where
    F: Fn() -> Vec<StackFrame>,
{
    fn capture(&self) -> Vec<StackFrame> {
        self()
    }
}

/// Receiver of a formatted trace (response headers, body comments, logs...)
pub trait TraceSink {
    fn emit(&mut self, trace: &Trace);
}

/// Sink that keeps every trace it receives
#[derive(Debug, Default)]
pub struct TraceBuffer {
    pub traces: Vec<Trace>,
}

impl TraceSink for TraceBuffer {
    fn emit(&mut self, trace: &Trace) {
        self.traces.push(trace.clone());
    }
}

impl<F> TraceSink for F
where
    F: FnMut(&Trace),
{
    fn emit(&mut self, trace: &Trace) {
        self(trace);
    }
}

/// Formats and forwards a trace whenever a redirect happens
pub struct RedirectHook<C> {
    formatter: TraceFormatter,
    capture: C,
}

impl<C: StackCapture> RedirectHook<C> {
    pub fn new(formatter: TraceFormatter, capture: C) -> Self {
        Self { formatter, capture }
    }

    pub fn formatter(&self) -> &TraceFormatter {
        &self.formatter
    }

    /// Handle a redirect to `location`.
    ///
    /// A blank location means no redirect is happening; nothing is captured
    /// or emitted and `false` is returned.
    pub fn on_redirect(&self, location: &str, sink: &mut dyn TraceSink) -> bool {
        if location.trim().is_empty() {
            return false;
        }

        let frames = self.capture.capture();
        let trace = self.formatter.format(&frames);
        log::debug!("redirect to {location}: {} trace lines", trace.len());
        sink.emit(&trace);
        true
    }
}
