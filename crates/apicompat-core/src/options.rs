//! Comparator configuration

/// Tunables shared by the comparators
///
/// Descriptors are owned trees, so comparison always terminates; the depth
/// bound only caps work on very deep inputs and is off by default.
///
/// ```
/// use apicompat_core::options::CompareOptions;
///
/// assert_eq!(CompareOptions::default().max_depth, None);
///
/// let opts = CompareOptions::default().with_max_depth(8);
/// assert_eq!(opts.max_depth, Some(8));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Nesting levels (struct fields) followed before a comparison stops
    /// descending and settles the pair by canonical identity alone
    pub max_depth: Option<usize>,
}

impl CompareOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Whether `depth` lies past the configured bound
    pub fn exceeds(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}
