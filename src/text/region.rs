use super::Line;
use std::fmt::{self, Display, Formatter};

/// A Region is the rendered document: one `Line` per input line, joined
/// back with `\n` only when the output is materialized.
#[derive(Clone, Debug, Default)]
pub struct Region {
    lines: Vec<Line>,
}

impl Region {
    pub fn new() -> Self {
        Region { lines: Vec::new() }
    }

    /// Push a line to the back
    pub fn push_back_line(&mut self, line: Line) -> &mut Self {
        self.lines.push(line);
        self
    }

    /// Append the region to `out`, joining lines with '\n'.
    pub fn write_to(&self, out: &mut String) {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            line.write_to(out);
        }
    }

    /// Convert the region into a String, joining lines with '\n'. This is the
    /// only place we eagerly allocate the final result.
    pub fn apply(&self) -> String {
        let size = self.lines.iter().map(Line::len).sum::<usize>() + self.lines.len();
        let mut out = String::with_capacity(size);
        self.write_to(&mut out);
        out
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Convenience to check whether region is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the Region and return its lines as a Vec<Line>.
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }
}

impl FromIterator<Line> for Region {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Region {
            lines: iter.into_iter().collect(),
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
