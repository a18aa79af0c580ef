use crate::extended::ExtensionMatching;

/// Parser configuration.
///
/// The defaults reproduce the behaviour of makedeb's own reader: extended
/// variants are found by substring and `#` lines are not special.
///
/// # Examples
///
/// ```
/// use srcinfo::{ExtensionMatching, ParseOptions};
///
/// let options = ParseOptions::default()
///     .with_matching(ExtensionMatching::Segment)
///     .with_skip_comments(true);
/// assert_eq!(options.matching, ExtensionMatching::Segment);
/// assert!(options.skip_comments);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// How concrete keys are matched against extended base names.
    pub matching: ExtensionMatching,
    /// Ignore lines starting with `#` (after leading tabs), as found in
    /// Arch Linux `.SRCINFO` files.
    pub skip_comments: bool,
}

impl ParseOptions {
    /// Set the extension matching mode.
    pub fn with_matching(mut self, matching: ExtensionMatching) -> Self {
        self.matching = matching;
        self
    }

    /// Enable or disable comment skipping.
    pub fn with_skip_comments(mut self, skip_comments: bool) -> Self {
        self.skip_comments = skip_comments;
        self
    }
}
