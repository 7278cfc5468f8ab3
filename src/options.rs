use bitflags::bitflags;

bitflags! {
    /// Which constructs the renderer recognizes. A disabled construct is
    /// left in the output as plain text.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Options: u32 {
        /// A `#` at the very start of a line turns it into `<h1>`.
        const ENABLE_HEADINGS = 1 << 0;
        /// Single underscores pair into `<em>`.
        const ENABLE_EMPHASIS = 1 << 1;
        /// Double underscores pair into `<strong>`.
        const ENABLE_STRONG = 1 << 2;
        /// A backslash shields a following `_` run or `\`.
        const ENABLE_ESCAPES = 1 << 3;
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::all()
    }
}
