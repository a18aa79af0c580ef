use crate::extended;

/// How a `.SRCINFO` variable may be written and how often it may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// A single value, written only under its bare name (e.g. `pkgver`).
    String,
    /// Any number of values under the bare name (e.g. `pkgname`).
    Array,
    /// A single value per variant; may carry `distro_` / `_arch` affixes (e.g. `focal_postrm`).
    ExtendedString,
    /// Any number of values per variant; may carry affixes (e.g. `depends_amd64`).
    ExtendedArray,
}

/// Variables that must always be a single value.
pub const SRCINFO_STRINGS: &[&str] = &["pkgbase", "pkgdesc", "pkgver", "pkgrel", "epoch", "url"];

/// Variables that may hold any number of values.
pub const SRCINFO_ARRAYS: &[&str] = &["pkgname", "arch", "license"];

/// Single-valued variables that accept distro/architecture extensions.
pub const SRCINFO_EXTENDED_STRINGS: &[&str] = &["preinst", "postinst", "prerm", "postrm"];

/// Multi-valued variables that accept distro/architecture extensions.
pub const SRCINFO_EXTENDED_ARRAYS: &[&str] = &[
    "depends",
    "makedepends",
    "checkdepends",
    "optdepends",
    "conflicts",
    "provides",
    "replaces",
    "source",
    "control_fields",
    "md5sums",
    "sha1sums",
    "sha224sums",
    "sha256sums",
    "sha384sums",
    "sha512sums",
    "b2sums",
];

/// Variables that must be present in every `.SRCINFO` file.
pub const SRCINFO_REQUIRED: &[&str] = &["pkgbase", "pkgname", "pkgver", "pkgrel", "arch"];

impl VariableKind {
    /// Every kind, in the order the tables are consulted.
    pub const ALL: [VariableKind; 4] = [
        VariableKind::String,
        VariableKind::Array,
        VariableKind::ExtendedString,
        VariableKind::ExtendedArray,
    ];

    /// The base variable names belonging to this kind.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            VariableKind::String => SRCINFO_STRINGS,
            VariableKind::Array => SRCINFO_ARRAYS,
            VariableKind::ExtendedString => SRCINFO_EXTENDED_STRINGS,
            VariableKind::ExtendedArray => SRCINFO_EXTENDED_ARRAYS,
        }
    }

    /// Classify a bare variable name. Qualified names such as `focal_depends`
    /// are not recognised here; use [`VariableKind::resolve`] for those.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcinfo::VariableKind;
    ///
    /// assert_eq!(VariableKind::of("pkgver"), Some(VariableKind::String));
    /// assert_eq!(VariableKind::of("depends"), Some(VariableKind::ExtendedArray));
    /// assert_eq!(VariableKind::of("focal_depends"), None);
    /// ```
    pub fn of(name: &str) -> Option<VariableKind> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.names().contains(&name))
    }

    /// Map a concrete key back to its base name and kind.
    ///
    /// Only extended kinds may carry affixes, and an affix must be separated
    /// from the base name by `_`.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcinfo::VariableKind;
    ///
    /// assert_eq!(
    ///     VariableKind::resolve("focal_postrm_amd64"),
    ///     Some(("postrm", VariableKind::ExtendedString))
    /// );
    /// assert_eq!(VariableKind::resolve("focal_pkgver"), None);
    /// ```
    pub fn resolve(key: &str) -> Option<(&'static str, VariableKind)> {
        for kind in Self::ALL {
            if let Some(name) = kind.names().iter().find(|name| **name == key) {
                return Some((*name, kind));
            }
        }

        for kind in [VariableKind::ExtendedString, VariableKind::ExtendedArray] {
            if let Some(name) = kind
                .names()
                .iter()
                .find(|name| extended::anchored_qualifier(key, name).is_some())
            {
                return Some((*name, kind));
            }
        }

        None
    }

    /// Whether the kind accepts distro/architecture extensions.
    pub fn is_extended(self) -> bool {
        matches!(self, VariableKind::ExtendedString | VariableKind::ExtendedArray)
    }

    /// Whether each concrete key of this kind may appear at most once.
    pub fn is_single_valued(self) -> bool {
        matches!(self, VariableKind::String | VariableKind::ExtendedString)
    }
}

/// Whether `name` must be present in every document.
pub fn is_required(name: &str) -> bool {
    SRCINFO_REQUIRED.contains(&name)
}
