/// One `/`-delimited component of a compiled pattern.
///
/// A literal must equal the corresponding path segment byte-for-byte; the
/// empty literal (produced by a trailing slash) only matches an empty path
/// segment. A param matches any non-empty segment text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param { name: String },
}

impl Segment {
    pub fn is_param(&self) -> bool {
        matches!(self, Self::Param { .. })
    }
}
