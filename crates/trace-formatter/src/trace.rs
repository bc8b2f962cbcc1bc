use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Default name prefix for response header entries
pub const DEFAULT_HEADER_PREFIX: &str = "WPDev-Redirect-Trace-";

/// Default name prefix for inline comment entries
pub const DEFAULT_COMMENT_PREFIX: &str = "wdpu-redirect-trace-";

/// One formatted frame, keyed by its zero-padded sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine {
    pub key: String,
    pub text: String,
}

impl TraceLine {
    #[must_use]
    pub const fn new(key: String, text: String) -> Self {
        Self { key, text }
    }
}

/// Ordered key → line mapping produced for a single event
///
/// Serializes as a JSON object in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    lines: Vec<TraceLine>,
}

impl Trace {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, line: TraceLine) {
        self.lines.push(line);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.key == key)
            .map(|line| line.text.as_str())
    }

    #[must_use]
    pub fn lines(&self) -> &[TraceLine] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceLine> {
        self.lines.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.key.as_str())
    }

    /// `(name, value)` pairs for response headers, one per line
    #[must_use]
    pub fn header_entries(&self, prefix: &str) -> Vec<(String, String)> {
        self.lines
            .iter()
            .map(|line| (format!("{prefix}{}", line.key), line.text.clone()))
            .collect()
    }

    /// Inline comment block for a response body whose headers are already sent
    #[must_use]
    pub fn comment_block(&self, prefix: &str) -> String {
        let mut out = String::from("\n");
        for line in &self.lines {
            out.push_str(&format!("<!-- {prefix}{}: {} -->\n", line.key, line.text));
        }
        out
    }

    /// `key: text` per line, newline separated
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| format!("{}: {}", line.key, line.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Key-sorted copy; only matches emission order while keys fit the key width
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.lines
            .iter()
            .map(|line| (line.key.clone(), line.text.clone()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceLine;
    type IntoIter = std::slice::Iter<'a, TraceLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl IntoIterator for Trace {
    type Item = TraceLine;
    type IntoIter = std::vec::IntoIter<TraceLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl FromIterator<TraceLine> for Trace {
    fn from_iter<I: IntoIterator<Item = TraceLine>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Trace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.lines.iter().map(|line| (&line.key, &line.text)))
    }
}
