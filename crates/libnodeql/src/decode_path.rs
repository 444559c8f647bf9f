use smallvec::SmallVec;
use std::fmt;

/// One hop within a JSON document: an object key or an array index.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

/// The location within a response document that a decode step is currently
/// reading from.
///
/// Rendered as dotted keys with bracketed list indices, e.g.
/// `data.node.labels.nodes[2].name`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct DecodePath {
    segments: SmallVec<[PathSegment; 8]>,
}
impl DecodePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no key or index has been entered yet.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }

    pub(crate) fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    pub(crate) fn push_key(&mut self, key: &str) {
        self.segments.push(PathSegment::Key(key.to_string()));
    }
}
impl fmt::Display for DecodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("<root>");
        }

        for (idx, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Key(key) if idx == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
            }
        }
        Ok(())
    }
}
impl<S: AsRef<str>> FromIterator<S> for DecodePath {
    fn from_iter<I: IntoIterator<Item = S>>(keys: I) -> Self {
        Self {
            segments: keys.into_iter()
                .map(|key| PathSegment::Key(key.as_ref().to_string()))
                .collect(),
        }
    }
}
