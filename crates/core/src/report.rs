//! Plain-text report rendering shared by the inventory and sales modules.

use core::fmt::Display;

/// Line-oriented text report: a `"<title> Report:"` header followed by one
/// line per entry. Every line, including the header, ends with `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    buf: String,
}

impl Report {
    pub fn new(title: &str) -> Self {
        Self {
            buf: format!("{title} Report:\n"),
        }
    }

    /// Append one entry line.
    pub fn line(&mut self, line: impl Display) -> &mut Self {
        use core::fmt::Write as _;
        // Writing into a String cannot fail.
        let _ = writeln!(self.buf, "{line}");
        self
    }

    /// Append one `"<key>: <value>"` entry line.
    pub fn entry(&mut self, key: impl Display, value: impl Display) -> &mut Self {
        self.line(format_args!("{key}: {value}"))
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

impl core::fmt::Display for Report {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.buf)
    }
}
