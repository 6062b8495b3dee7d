use smallvec::SmallVec;

use super::error::{PatternError, PatternResult};
use super::segment::Segment;

/// Byte range `(start, len)` of one captured segment within the request path.
pub type Capture = (usize, usize);

/// Captures for one matched path, in pattern order. Four inline slots cover
/// typical route arity without allocating.
pub type CaptureList = SmallVec<[Capture; 4]>;

/// A route pattern compiled into its matchable form: an ordered segment
/// sequence plus the ordered list of parameter names.
///
/// Immutable once built. Matching is whole-segment comparison: the candidate
/// path is split exactly the way the pattern was, so a capture can never span
/// a `/` and segment counts must agree (a trailing slash is a trailing empty
/// segment on both sides).
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    segments: Vec<Segment>,
    param_names: Vec<String>,
}

impl CompiledPattern {
    /// Compiles a pattern string: strip one leading `/`, split on `/`, and
    /// classify each word as a `:name` parameter or a literal.
    ///
    /// Only the empty pattern is rejected; anything else compiles to whatever
    /// segment splitting yields. Duplicate parameter names are permitted —
    /// the name list is positional and the router resolves duplicates at
    /// capture-zip time.
    #[tracing::instrument(level = "trace", fields(pattern = %pattern))]
    pub fn compile(pattern: &str) -> PatternResult<Self> {
        if pattern.is_empty() {
            return Err(PatternError::EmptyPattern);
        }

        let stripped = pattern.strip_prefix('/').unwrap_or(pattern);

        let mut segments = Vec::new();
        let mut param_names = Vec::new();

        for word in stripped.split('/') {
            if let Some(name) = word.strip_prefix(':') {
                param_names.push(name.to_string());
                segments.push(Segment::Param {
                    name: name.to_string(),
                });
            } else {
                segments.push(Segment::Literal(word.to_string()));
            }
        }

        Ok(Self {
            segments,
            param_names,
        })
    }

    /// Parameter names in pattern order (leading `:` removed).
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Tests a request path against this pattern.
    ///
    /// The path must carry a leading `/`; the remainder is split on `/` and
    /// compared segment-wise. Literal segments compare exactly, parameter
    /// segments capture any non-empty text. Returns the captures in
    /// left-to-right order, or `None` on any structural mismatch.
    #[tracing::instrument(level = "trace", skip(self), fields(path = %path))]
    pub fn match_path(&self, path: &str) -> Option<CaptureList> {
        let rest = path.strip_prefix('/')?;

        let mut captures = CaptureList::new();
        let mut offset = 1usize;
        let mut matched = 0usize;

        for word in rest.split('/') {
            let segment = self.segments.get(matched)?;

            match segment {
                Segment::Literal(lit) => {
                    if word != lit {
                        return None;
                    }
                }
                Segment::Param { .. } => {
                    if word.is_empty() {
                        return None;
                    }
                    captures.push((offset, word.len()));
                }
            }

            offset += word.len() + 1;
            matched += 1;
        }

        if matched == self.segments.len() {
            Some(captures)
        } else {
            None
        }
    }
}
