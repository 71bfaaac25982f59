/// What the parser does with empty segments (`a=1&&b=2`, leading or trailing `&`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySegments {
    /// Drop them, so `&a=1&` parses like `a=1`
    #[default]
    Skip,
    /// Keep each one as an empty key with no value; rebuilding writes the `&`s back
    Keep,
}

/// Parser settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub empty_segments: EmptySegments,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn empty_segments(mut self, policy: EmptySegments) -> Self {
        self.empty_segments = policy;
        self
    }
}
