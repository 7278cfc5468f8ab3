use super::Fragment;
use std::fmt::{self, Display, Formatter};

/// One rendered output line as a sequence of Fragments. Fragments are only
/// joined by `write_to`/`apply`.
#[derive(Clone, Debug, Default)]
pub struct Line {
    fragments: Vec<Fragment>,
}

impl Line {
    pub fn new() -> Self {
        Line {
            fragments: Vec::new(),
        }
    }

    /// Push fragment to the end
    pub fn push<F: Into<Fragment>>(&mut self, f: F) -> &mut Self {
        let f = f.into();
        if !f.is_empty() {
            self.fragments.push(f);
        }
        self
    }

    /// Prepend a fragment to the start of the line
    pub fn prepend<F: Into<Fragment>>(&mut self, f: F) -> &mut Self {
        self.fragments.insert(0, f.into());
        self
    }

    /// Surround the current content with `open` and `close`
    pub fn wrap<F: Into<Fragment>, G: Into<Fragment>>(&mut self, open: F, close: G) -> &mut Self {
        self.prepend(open).push(close)
    }

    /// Byte length of the joined line
    pub fn len(&self) -> usize {
        self.fragments.iter().map(Fragment::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Append the joined fragments to `out`
    pub fn write_to(&self, out: &mut String) {
        for frag in &self.fragments {
            out.push_str(frag.as_str());
        }
    }

    /// Join fragments into a single String
    pub fn apply(&self) -> String {
        let mut out = String::with_capacity(self.len());
        self.write_to(&mut out);
        out
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for frag in &self.fragments {
            f.write_str(frag.as_str())?;
        }
        Ok(())
    }
}
