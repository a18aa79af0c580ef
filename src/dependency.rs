use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::token::split_once_on;

/// Version comparison operator in a dependency specifier such as `gimp>=2.10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `=`
    Equal,
    /// `<`
    Less,
    /// `>`
    Greater,
}

impl Operator {
    /// Operators in the order they are searched for. Two-character operators
    /// come first so `>=` is never read as `=`.
    pub const PRIORITY: [Operator; 5] = [
        Operator::LessEqual,
        Operator::GreaterEqual,
        Operator::Equal,
        Operator::Less,
        Operator::Greater,
    ];

    /// The operator as written in a specifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::LessEqual => "<=",
            Operator::GreaterEqual => ">=",
            Operator::Equal => "=",
            Operator::Less => "<",
            Operator::Greater => ">",
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| Error::InvalidOperator(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a dependency descriptor into its name and description.
///
/// The boundary is the first `": "`. Without one the description is empty.
///
/// # Examples
///
/// ```
/// use srcinfo::split_dep_description;
///
/// assert_eq!(split_dep_description("gimp: image editor"), ("gimp", "image editor"));
/// assert_eq!(split_dep_description("gimp"), ("gimp", ""));
/// ```
pub fn split_dep_description(dep: &str) -> (&str, &str) {
    split_once_on(dep, ": ").unwrap_or((dep, ""))
}

/// Split a dependency specifier into name, operator and version.
///
/// Operators are tried in [`Operator::PRIORITY`] order, not by position; the
/// first one present splits the string at its first occurrence.
///
/// # Examples
///
/// ```
/// use srcinfo::{split_dep_condition, Operator};
///
/// assert_eq!(
///     split_dep_condition("gimp>=2.10"),
///     ("gimp", Some(Operator::GreaterEqual), Some("2.10"))
/// );
/// assert_eq!(split_dep_condition("gimp"), ("gimp", None, None));
/// ```
pub fn split_dep_condition(dep: &str) -> (&str, Option<Operator>, Option<&str>) {
    Operator::PRIORITY
        .into_iter()
        .find_map(|op| {
            split_once_on(dep, op.as_str()).map(|(name, version)| (name, Some(op), Some(version)))
        })
        .unwrap_or((dep, None, None))
}
