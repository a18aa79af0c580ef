/// Error type for `.SRCINFO` parsing and variable lookups.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A non-blank line has no `" = "` separator.
    #[error("line {line}: couldn't find ' = ' delimiter")]
    MissingDelimiter {
        /// 0-based index of the offending line.
        line: usize,
    },

    /// A line has an empty key in front of the separator.
    #[error("line {line}: empty variable name")]
    EmptyKey {
        /// 0-based index of the offending line.
        line: usize,
    },

    /// A required variable is absent from the document.
    #[error("couldn't find required '{0}' variable")]
    MissingRequired(String),

    /// A single-valued variable appeared more than once.
    #[error("variable '{0}' appeared more than once when it is not allowed to")]
    Repeated(String),

    /// An extended-variable query was made for a variable that has no
    /// distro/architecture variants.
    #[error("variable '{0}' doesn't support extensions")]
    NotExtended(String),

    /// A string that is not one of the version comparison operators.
    #[error("invalid version operator: {0}")]
    InvalidOperator(String),
}

impl Error {
    /// The 0-based line index the error refers to, if it is tied to a line.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MissingDelimiter { line } | Error::EmptyKey { line } => Some(*line),
            _ => None,
        }
    }

    /// Whether this error was raised while parsing a `.SRCINFO` document.
    ///
    /// [`Error::NotExtended`] is API misuse and [`Error::InvalidOperator`]
    /// comes from parsing a single operator string, so neither counts.
    pub fn is_parsing(&self) -> bool {
        matches!(
            self,
            Error::MissingDelimiter { .. }
                | Error::EmptyKey { .. }
                | Error::MissingRequired(_)
                | Error::Repeated(_)
        )
    }
}

/// Result type for srcinfo operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_numbers() {
        assert_eq!(Error::MissingDelimiter { line: 3 }.line(), Some(3));
        assert_eq!(Error::EmptyKey { line: 0 }.line(), Some(0));
        assert_eq!(Error::Repeated("pkgver".to_string()).line(), None);
    }

    #[test]
    fn parsing_vs_contract() {
        assert!(Error::MissingRequired("arch".to_string()).is_parsing());
        assert!(Error::Repeated("pkgver".to_string()).is_parsing());
        assert!(Error::EmptyKey { line: 1 }.is_parsing());
        assert!(!Error::NotExtended("pkgver".to_string()).is_parsing());
        assert!(!Error::InvalidOperator("=>".to_string()).is_parsing());
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::MissingDelimiter { line: 4 }.to_string(),
            "line 4: couldn't find ' = ' delimiter"
        );
        assert_eq!(
            Error::MissingRequired("pkgbase".to_string()).to_string(),
            "couldn't find required 'pkgbase' variable"
        );
    }
}
