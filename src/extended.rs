/// The distro/architecture qualifiers of one concrete variant of an extended
/// variable.
///
/// `focal_depends_amd64` has distro `focal` and arch `amd64`; the bare
/// `depends` has neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Qualifier {
    /// Distribution prefix (e.g. `focal`), without the trailing `_`.
    pub distro: Option<String>,
    /// Architecture suffix (e.g. `amd64`), without the leading `_`.
    pub arch: Option<String>,
}

impl Qualifier {
    /// Build a qualifier pair from borrowed components.
    pub fn new(distro: Option<&str>, arch: Option<&str>) -> Self {
        Qualifier {
            distro: distro.map(str::to_string),
            arch: arch.map(str::to_string),
        }
    }

    /// Whether neither qualifier is set.
    pub fn is_bare(&self) -> bool {
        self.distro.is_none() && self.arch.is_none()
    }

    /// The concrete key this qualifier selects for `base`.
    pub fn qualified_name(&self, base: &str) -> String {
        build_qualified_name(self.distro.as_deref(), base, self.arch.as_deref())
    }
}

/// How concrete keys are matched against an extended base name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExtensionMatching {
    /// Any key containing the base name matches; qualifiers come from
    /// splitting the key on every occurrence of the base name.
    ///
    /// `makedepends` therefore also matches `depends`.
    #[default]
    Substring,
    /// A key matches only when it reads `[distro_]base[_arch]` with
    /// non-empty affixes.
    Segment,
}

impl ExtensionMatching {
    /// Whether `key` is a variant of `base` under this mode.
    pub fn matches(self, key: &str, base: &str) -> bool {
        match self {
            ExtensionMatching::Substring => key.contains(base),
            ExtensionMatching::Segment => anchored_qualifier(key, base).is_some(),
        }
    }

    /// Extract the qualifiers of a key that [`matches`](Self::matches) `base`.
    pub fn qualifier(self, key: &str, base: &str) -> Qualifier {
        match self {
            ExtensionMatching::Substring => split_qualifier(key, base),
            ExtensionMatching::Segment => anchored_qualifier(key, base).unwrap_or_default(),
        }
    }
}

/// Decompose `key` by splitting it on every occurrence of `base`.
///
/// A fragment ending in `_` names the distro, one starting with `_` names the
/// architecture; other fragments are ignored. Later fragments win.
///
/// # Examples
///
/// ```
/// use srcinfo::{split_qualifier, Qualifier};
///
/// assert_eq!(
///     split_qualifier("focal_depends_amd64", "depends"),
///     Qualifier::new(Some("focal"), Some("amd64"))
/// );
/// assert!(split_qualifier("makedepends", "depends").is_bare());
/// ```
pub fn split_qualifier(key: &str, base: &str) -> Qualifier {
    let mut qualifier = Qualifier::default();

    if base.is_empty() {
        return qualifier;
    }

    for part in key.split(base) {
        if part.ends_with('_') {
            qualifier.distro = Some(part.trim_end_matches('_').to_string());
        } else if part.starts_with('_') {
            qualifier.arch = Some(part.trim_start_matches('_').to_string());
        }
    }

    qualifier
}

/// Match `key` as `[distro_]base[_arch]`, returning its qualifiers.
///
/// Every occurrence of `base` is tried; the first one whose surroundings form
/// valid affixes wins.
pub(crate) fn anchored_qualifier(key: &str, base: &str) -> Option<Qualifier> {
    if base.is_empty() {
        return None;
    }

    key.match_indices(base).find_map(|(start, _)| {
        let prefix = &key[..start];
        let suffix = &key[start + base.len()..];

        let distro = if prefix.is_empty() {
            None
        } else {
            Some(prefix.strip_suffix('_').filter(|d| !d.is_empty())?)
        };
        let arch = if suffix.is_empty() {
            None
        } else {
            Some(suffix.strip_prefix('_').filter(|a| !a.is_empty())?)
        };

        Some(Qualifier::new(distro, arch))
    })
}

/// Build the concrete key for `base` with optional distro and architecture.
///
/// Empty components count as absent.
///
/// # Examples
///
/// ```
/// use srcinfo::build_qualified_name;
///
/// assert_eq!(
///     build_qualified_name(Some("focal"), "depends", Some("amd64")),
///     "focal_depends_amd64"
/// );
/// assert_eq!(build_qualified_name(None, "depends", None), "depends");
/// ```
pub fn build_qualified_name(distro: Option<&str>, base: &str, arch: Option<&str>) -> String {
    let distro = distro.filter(|d| !d.is_empty());
    let arch = arch.filter(|a| !a.is_empty());
    let affixes = distro.map_or(0, |d| d.len() + 1) + arch.map_or(0, |a| a.len() + 1);
    let mut name = String::with_capacity(base.len() + affixes);

    if let Some(distro) = distro {
        name.push_str(distro);
        name.push('_');
    }
    name.push_str(base);
    if let Some(arch) = arch {
        name.push('_');
        name.push_str(arch);
    }

    name
}
