use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// A Fragment is the smallest unit of output. Tags are static strings and
/// are borrowed; text taken from the AST is owned.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Fragment(Cow<'static, str>);

impl Fragment {
    /// Create a fragment from a String
    pub fn from_string(s: String) -> Self {
        Fragment(Cow::Owned(s))
    }

    /// Opening HTML tag, e.g. `<em>`
    pub fn open_tag(name: &str) -> Self {
        Fragment::from_string(format!("<{name}>"))
    }

    /// Closing HTML tag, e.g. `</em>`
    pub fn close_tag(name: &str) -> Self {
        Fragment::from_string(format!("</{name}>"))
    }

    /// Return the inner &str
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&'static str> for Fragment {
    fn from(s: &'static str) -> Self {
        Fragment(Cow::Borrowed(s))
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Fragment::from_string(s)
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
