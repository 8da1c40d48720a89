//! Caller-supplied progress reporting.

/// Receives one human-readable line per logical step of a generation run.
///
/// Any `FnMut(&str)` closure is a sink.
pub trait ProgressSink {
    fn line(&mut self, line: &str);
}

impl<F> ProgressSink for F
where
    F: FnMut(&str),
{
    fn line(&mut self, line: &str) {
        self(line)
    }
}

/// Sink that discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn line(&mut self, _line: &str) {}
}
