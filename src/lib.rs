//! Parser and accessors for makedeb-style `.SRCINFO` files.
//!
//! A `.SRCINFO` file describes the contents of a PKGBUILD without having to
//! source (and therefore execute) it. Each line is a `key = value` pair; list
//! variables simply repeat their key.
//!
//! # Overview
//!
//! [`SrcInfo`] reads a document, checks that the required variables are
//! present and that single-valued variables are not repeated, and then
//! answers queries against it. Some variables are *extended*: they may also
//! appear with a distro prefix and/or an architecture suffix, such as
//! `focal_depends_amd64`. [`SrcInfo::get_extended_variable`] gathers all such
//! variants keyed by their [`Qualifier`].
//!
//! Dependency strings found in those variables can be taken apart with
//! [`split_dep_description`] and [`split_dep_condition`].
//!
//! # Examples
//!
//! ```
//! use srcinfo::{split_dep_condition, Operator, Qualifier, SrcInfo};
//!
//! let input = "\
//! pkgbase = hello
//! \tpkgver = 1.0.0
//! \tpkgrel = 1
//! \tarch = any
//! \tdepends = libc6>=2.31
//! \tfocal_depends = libc6>=2.30
//!
//! pkgname = hello
//! ";
//! let srcinfo = SrcInfo::parse(input).unwrap();
//! assert_eq!(srcinfo.pkgver(), "1.0.0");
//!
//! let depends = srcinfo.get_extended_variable("depends").unwrap();
//! let focal = depends[&Qualifier::new(Some("focal"), None)];
//! assert_eq!(
//!     split_dep_condition(&focal[0]),
//!     ("libc6", Some(Operator::GreaterEqual), Some("2.30"))
//! );
//! ```

mod dependency;
mod error;
mod extended;
mod options;
mod srcinfo;
mod token;
mod variable;

// Re-export public types
pub use dependency::{split_dep_condition, split_dep_description, Operator};
pub use error::{Error, Result};
pub use extended::{build_qualified_name, split_qualifier, ExtensionMatching, Qualifier};
pub use options::ParseOptions;
pub use srcinfo::SrcInfo;
pub use variable::{
    is_required, VariableKind, SRCINFO_ARRAYS, SRCINFO_EXTENDED_ARRAYS, SRCINFO_EXTENDED_STRINGS,
    SRCINFO_REQUIRED, SRCINFO_STRINGS,
};
