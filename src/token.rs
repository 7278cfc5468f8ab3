/// Which tag a marker can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// A lone `_`, renders as `<em>`.
    Emphasis,
    /// Exactly `__`, renders as `<strong>`.
    Strong,
}

impl MarkerKind {
    /// Number of underscores making up the marker.
    pub fn width(self) -> usize {
        match self {
            MarkerKind::Emphasis => 1,
            MarkerKind::Strong => 2,
        }
    }

    /// The literal source text of the marker.
    pub fn literal(self) -> &'static str {
        match self {
            MarkerKind::Emphasis => "_",
            MarkerKind::Strong => "__",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Plain text, rendered as-is.
    Text,
    /// A candidate delimiter.
    Marker(MarkerKind),
    /// A backslash the escape resolver has not looked at yet. Never
    /// survives `escape::resolve`.
    Backslash,
    /// A backslash plus the underscore run it shields.
    Escape,
    /// `\\`, rendered as a single backslash.
    LiteralBackslash,
    /// The leading `#` of a header line.
    HeaderMark,
}

/// A classified slice of one line.
///
/// `text` is always the exact source slice starting at byte offset
/// `start`, so the concatenation of all token texts of a line gives back
/// the line itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        Token { kind, text, start }
    }

    /// Byte offset one past the end of the token.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn marker_kind(&self) -> Option<MarkerKind> {
        match self.kind {
            TokenKind::Marker(kind) => Some(kind),
            _ => None,
        }
    }

    /// The text this token contributes to the output when it is not
    /// replaced by a tag.
    pub fn literal(&self) -> &'a str {
        match self.kind {
            // drop the shielding backslash
            TokenKind::Escape | TokenKind::LiteralBackslash => &self.text[1..],
            TokenKind::HeaderMark => "",
            _ => self.text,
        }
    }
}
