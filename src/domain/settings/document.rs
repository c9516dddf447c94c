//! In-memory line model of a generated settings file.

use std::fmt;

/// An ordered sequence of text lines read from a settings file.
///
/// Line order is meaningful: later assignments of the same name win when the
/// file is executed. The document is mutated in place and rendered back
/// wholesale; nothing is ever appended to the file on disk incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsDocument {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl SettingsDocument {
    /// Split `text` into lines, remembering whether it ended with a newline.
    pub fn parse(text: &str) -> Self {
        let lines = text.lines().map(str::to_string).collect();
        Self { lines, trailing_newline: text.ends_with('\n') }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { lines: lines.into_iter().map(Into::into).collect(), trailing_newline: true }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the first line matching `predicate`.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&str) -> bool,
    {
        self.lines.iter().position(|line| predicate(line.as_str()))
    }

    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&str) -> bool,
    {
        self.lines.iter().any(|line| predicate(line.as_str()))
    }

    pub(crate) fn replace(&mut self, index: usize, line: impl Into<String>) {
        self.lines[index] = line.into();
    }

    pub(crate) fn insert(&mut self, index: usize, line: impl Into<String>) {
        self.lines.insert(index, line.into());
    }

    pub(crate) fn lines_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.lines.iter_mut()
    }

    pub(crate) fn append<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        // Appended blocks always end the file with a newline.
        self.trailing_newline = true;
    }

    /// Render the document back to file text.
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for SettingsDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
