use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

/// One traced call, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine<'a> {
    ordinal: Option<u64>,
    function: &'a str,
    args: &'a str,
    result: String,
}

impl<'a> TraceLine<'a> {
    pub fn new(ordinal: Option<u64>, function: &'a str, args: &'a str, result: String) -> Self {
        Self { ordinal, function, args, result }
    }

    /// the call's ordinal, present only when the counter is shown
    pub fn ordinal(&self) -> Option<u64> {
        self.ordinal
    }

    pub fn function(&self) -> &str {
        self.function
    }

    pub fn args(&self) -> &str {
        self.args
    }

    pub fn result(&self) -> &str {
        &self.result
    }
}

impl fmt::Display for TraceLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ordinal) = self.ordinal {
            write!(f, "{ordinal} ")?;
        }
        write!(f, "{}({}) -> {}", self.function, self.args, self.result)
    }
}

/// Where trace lines go.
pub trait TraceSink {
    fn emit(&self, line: &TraceLine<'_>);
}

/// Prints each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn emit(&self, line: &TraceLine<'_>) {
        println!("{line}");
    }
}

/// Emits each line as an `INFO` event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn emit(&self, line: &TraceLine<'_>) {
        info!(function = line.function(), ordinal = ?line.ordinal(), "{line}");
    }
}

/// Keeps every line in memory; clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TraceSink for MemorySink {
    fn emit(&self, line: &TraceLine<'_>) {
        self.lock().push(line.to_string());
    }
}

#[derive(Clone, Copy)]
pub struct FnSink<F>(F);

impl<F> fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}

impl<F> TraceSink for FnSink<F>
where
    F: Fn(&TraceLine<'_>),
{
    fn emit(&self, line: &TraceLine<'_>) {
        (self.0)(line);
    }
}

pub fn fn_sink<F>(f: F) -> FnSink<F>
where
    F: Fn(&TraceLine<'_>),
{
    FnSink(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format() {
        let line = TraceLine::new(None, "add", "2, 3", "5".to_string());
        assert_eq!(line.to_string(), "add(2, 3) -> 5");

        let line = TraceLine::new(Some(7), "tick", "", "()".to_string());
        assert_eq!(line.to_string(), "7 tick() -> ()");
    }

    #[test]
    fn test_memory_sink_clones_share_buffer() {
        let sink = MemorySink::new();
        let clone = sink.clone();

        clone.emit(&TraceLine::new(Some(1), "f", "x", "y".to_string()));
        assert_eq!(sink.lines(), vec!["1 f(x) -> y"]);

        assert_eq!(sink.take().len(), 1);
        assert!(clone.lines().is_empty());
    }

    #[test]
    fn test_fn_sink() {
        let seen = std::cell::RefCell::new(Vec::new());
        let sink = fn_sink(|line: &TraceLine<'_>| seen.borrow_mut().push(line.result().to_string()));

        sink.emit(&TraceLine::new(None, "f", "", "ok".to_string()));
        assert_eq!(seen.into_inner(), vec!["ok"]);
    }
}
