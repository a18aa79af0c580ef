use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::extended::Qualifier;
use crate::options::ParseOptions;
use crate::token::split_once_on;
use crate::variable::{VariableKind, SRCINFO_EXTENDED_STRINGS, SRCINFO_REQUIRED, SRCINFO_STRINGS};

/// Separator between a key and its value.
const DELIMITER: &str = " = ";

type ParseMap = HashMap<String, Vec<String>>;

/// A parsed and validated `.SRCINFO` document.
///
/// Every key maps to its values in the order they appeared. Instances are
/// only handed out once all validation has passed and are never modified
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrcInfo {
    map: ParseMap,
    options: ParseOptions,
}

impl SrcInfo {
    /// Parse a `.SRCINFO` document with the default [`ParseOptions`].
    ///
    /// # Examples
    ///
    /// ```
    /// use srcinfo::SrcInfo;
    ///
    /// let input = "\
    /// pkgbase = gimp
    /// \tpkgver = 2.10.34
    /// \tpkgrel = 1
    /// \tarch = any
    /// \tdepends = gtk2
    /// \tdepends = babl
    ///
    /// pkgname = gimp
    /// ";
    /// let srcinfo = SrcInfo::parse(input).unwrap();
    /// assert_eq!(srcinfo.get_variable("depends"), ["gtk2", "babl"]);
    /// assert_eq!(srcinfo.get_string("pkgver"), Some("2.10.34"));
    /// ```
    pub fn parse(input: &str) -> Result<SrcInfo> {
        Self::parse_with(input, ParseOptions::default())
    }

    /// Parse a `.SRCINFO` document with explicit options.
    ///
    /// Lines have leading tabs stripped; blank lines are skipped. Every other
    /// line must read `key = value`, where only the first `" = "` separates
    /// the two.
    pub fn parse_with(input: &str, options: ParseOptions) -> Result<SrcInfo> {
        let mut map = ParseMap::new();

        for (index, line) in input.lines().enumerate() {
            let line = line.trim_start_matches('\t');

            if line.is_empty() || (options.skip_comments && line.starts_with('#')) {
                continue;
            }

            let (key, value) =
                split_once_on(line, DELIMITER).ok_or(Error::MissingDelimiter { line: index })?;

            if key.is_empty() {
                return Err(Error::EmptyKey { line: index });
            }

            trace!("line {index}: {key} = {value}");
            map.entry(key.to_string())
                .or_default()
                .push(value.to_string());
        }

        let srcinfo = SrcInfo { map, options };
        srcinfo.validate()?;

        debug!("parsed .SRCINFO with {} variables", srcinfo.map.len());
        Ok(srcinfo)
    }

    fn validate(&self) -> Result<()> {
        for key in SRCINFO_REQUIRED {
            if !self.map.contains_key(*key) {
                return Err(Error::MissingRequired(key.to_string()));
            }
        }

        for key in SRCINFO_STRINGS {
            if self.map.get(*key).is_some_and(|values| values.len() != 1) {
                return Err(Error::Repeated(key.to_string()));
            }
        }

        for base in SRCINFO_EXTENDED_STRINGS {
            for key in self.matching_keys(base) {
                if self.map[key].len() != 1 {
                    return Err(Error::Repeated(key.to_string()));
                }
            }
        }

        Ok(())
    }

    /// The parse options this document was read with.
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Iterate over every concrete key in the document, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// All values recorded for `key`, in document order. Empty when the key
    /// never appeared.
    pub fn get_variable(&self, key: &str) -> &[String] {
        self.map.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The value of a single-valued variable, including qualified variants of
    /// extended ones such as `focal_postrm`.
    ///
    /// Returns `None` for list variables, unknown variables and absent keys.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        match VariableKind::resolve(key) {
            Some((_, kind)) if kind.is_single_valued() => {
                self.get_variable(key).first().map(String::as_str)
            }
            _ => None,
        }
    }

    /// The values of a list variable, including qualified variants of
    /// extended ones such as `focal_depends`.
    ///
    /// Returns `None` for single-valued variables, unknown variables and
    /// absent keys.
    pub fn get_array(&self, key: &str) -> Option<&[String]> {
        match VariableKind::resolve(key) {
            Some((_, kind)) if !kind.is_single_valued() => self.map.get(key).map(Vec::as_slice),
            _ => None,
        }
    }

    /// Every concrete key that is a variant of the extended variable `base`,
    /// in no particular order.
    ///
    /// Fails with [`Error::NotExtended`] if `base` does not accept extensions.
    pub fn list_extended_keys(&self, base: &str) -> Result<Vec<&str>> {
        check_extended(base)?;

        let matching = self.options.matching;
        Ok(self
            .keys()
            .filter(|key| matching.matches(key, base))
            .collect())
    }

    /// All variants of the extended variable `base`, keyed by their
    /// distro/architecture qualifiers.
    ///
    /// If two keys decompose to the same qualifiers, whichever is visited
    /// last is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use srcinfo::{Qualifier, SrcInfo};
    ///
    /// let input = "\
    /// pkgbase = foo
    /// pkgname = foo
    /// pkgver = 1.0
    /// pkgrel = 1
    /// arch = any
    /// depends = bash
    /// focal_depends_amd64 = libc6
    /// ";
    /// let srcinfo = SrcInfo::parse(input).unwrap();
    /// let depends = srcinfo.get_extended_variable("depends").unwrap();
    /// assert_eq!(depends.len(), 2);
    /// assert_eq!(depends[&Qualifier::new(Some("focal"), Some("amd64"))], ["libc6"]);
    /// ```
    pub fn get_extended_variable(&self, base: &str) -> Result<HashMap<Qualifier, &[String]>> {
        check_extended(base)?;

        let matching = self.options.matching;
        Ok(self
            .matching_keys(base)
            .map(|key| (matching.qualifier(key, base), self.get_variable(key)))
            .collect())
    }

    /// `pkgbase` value.
    pub fn pkgbase(&self) -> &str {
        self.required_first("pkgbase")
    }

    /// `pkgname` values; there is one per split package.
    pub fn pkgnames(&self) -> &[String] {
        self.get_variable("pkgname")
    }

    /// `pkgver` value.
    pub fn pkgver(&self) -> &str {
        self.required_first("pkgver")
    }

    /// `pkgrel` value.
    pub fn pkgrel(&self) -> &str {
        self.required_first("pkgrel")
    }

    /// `epoch` value, if set.
    pub fn epoch(&self) -> Option<&str> {
        self.get_string("epoch")
    }

    fn required_first(&self, key: &str) -> &str {
        self.get_variable(key)
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn matching_keys<'a>(&'a self, base: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let matching = self.options.matching;
        self.keys().filter(move |key| matching.matches(key, base))
    }
}

fn check_extended(base: &str) -> Result<()> {
    match VariableKind::of(base) {
        Some(kind) if kind.is_extended() => Ok(()),
        _ => Err(Error::NotExtended(base.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extended::ExtensionMatching;

    const HEADER: &str = "\
pkgbase = gimp
pkgname = gimp
pkgver = 2.10.34
pkgrel = 1
arch = amd64
";

    fn doc(extra: &str) -> String {
        format!("{HEADER}{extra}")
    }

    #[test]
    fn parse_minimal() {
        let srcinfo = SrcInfo::parse(HEADER).unwrap();
        for key in SRCINFO_REQUIRED {
            assert!(!srcinfo.get_variable(key).is_empty(), "{key}");
        }
        assert_eq!(srcinfo.pkgbase(), "gimp");
        assert_eq!(srcinfo.pkgver(), "2.10.34");
        assert_eq!(srcinfo.pkgrel(), "1");
        assert_eq!(srcinfo.pkgnames(), ["gimp"]);
        assert_eq!(srcinfo.epoch(), None);
    }

    #[test]
    fn missing_required() {
        let input = "pkgbase = gimp\npkgname = gimp\npkgver = 1\narch = any\n";
        let err = SrcInfo::parse(input).unwrap_err();
        assert_eq!(err, Error::MissingRequired("pkgrel".to_string()));
    }

    #[test]
    fn missing_each_required() {
        for key in SRCINFO_REQUIRED {
            let input: String = HEADER
                .lines()
                .filter(|line| !line.starts_with(&format!("{key} = ")))
                .map(|line| format!("{line}\n"))
                .collect();
            let err = SrcInfo::parse(&input).unwrap_err();
            assert_eq!(err, Error::MissingRequired(key.to_string()));
        }
    }

    #[test]
    fn list_extended_keys_outlives_base() {
        let srcinfo = SrcInfo::parse(&doc("focal_source = a.tar.gz\n")).unwrap();
        let keys = {
            let base = String::from("source");
            srcinfo.list_extended_keys(&base).unwrap()
        };
        assert_eq!(keys, ["focal_source"]);
    }

    #[test]
    fn empty_document() {
        let err = SrcInfo::parse("").unwrap_err();
        assert_eq!(err, Error::MissingRequired("pkgbase".to_string()));
    }

    #[test]
    fn repeated_string() {
        let err = SrcInfo::parse(&doc("pkgver = 2.10.36\n")).unwrap_err();
        assert_eq!(err, Error::Repeated("pkgver".to_string()));
    }

    #[test]
    fn repeated_optional_string() {
        let err = SrcInfo::parse(&doc("url = a\nurl = b\n")).unwrap_err();
        assert_eq!(err, Error::Repeated("url".to_string()));
    }

    #[test]
    fn repeated_extended_string() {
        let err =
            SrcInfo::parse(&doc("focal_postrm = a.sh\nfocal_postrm = b.sh\n")).unwrap_err();
        assert_eq!(err, Error::Repeated("focal_postrm".to_string()));
    }

    #[test]
    fn extended_string_variants_once_each() {
        let srcinfo = SrcInfo::parse(&doc(
            "postrm = a\nfocal_postrm = b\npostrm_amd64 = c\nfocal_postrm_amd64 = d\n",
        ))
        .unwrap();
        assert_eq!(srcinfo.get_string("postrm"), Some("a"));
        assert_eq!(srcinfo.get_string("focal_postrm"), Some("b"));
        assert_eq!(srcinfo.get_string("postrm_amd64"), Some("c"));
        assert_eq!(srcinfo.get_string("focal_postrm_amd64"), Some("d"));
    }

    #[test]
    fn repeated_arrays_keep_order() {
        let srcinfo =
            SrcInfo::parse(&doc("depends = gtk2\ndepends = babl\ndepends = gegl\n")).unwrap();
        assert_eq!(srcinfo.get_variable("depends"), ["gtk2", "babl", "gegl"]);
        assert_eq!(
            srcinfo.get_array("depends"),
            Some(&["gtk2".to_string(), "babl".to_string(), "gegl".to_string()][..])
        );
    }

    #[test]
    fn missing_delimiter_line_index() {
        let err = SrcInfo::parse("pkgbase = gimp\n\npkgname=gimp\n").unwrap_err();
        assert_eq!(err, Error::MissingDelimiter { line: 2 });
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn empty_key() {
        let err = SrcInfo::parse(" = value\n").unwrap_err();
        assert_eq!(err, Error::EmptyKey { line: 0 });
    }

    #[test]
    fn value_keeps_embedded_delimiter() {
        let srcinfo = SrcInfo::parse(&doc("pkgdesc = a = b = c\n")).unwrap();
        assert_eq!(srcinfo.get_string("pkgdesc"), Some("a = b = c"));
    }

    #[test]
    fn empty_value() {
        let srcinfo = SrcInfo::parse(&doc("pkgdesc = \n")).unwrap();
        assert_eq!(srcinfo.get_variable("pkgdesc"), [""]);
    }

    #[test]
    fn blank_and_tab_lines_ignored() {
        let input = "\n\t\npkgbase = gimp\n\t\t\n\tpkgname = gimp\n\tpkgver = 1\n\tpkgrel = 1\n\tarch = any\n\n";
        let srcinfo = SrcInfo::parse(input).unwrap();
        assert_eq!(srcinfo.keys().count(), 5);
        assert_eq!(srcinfo.get_variable("pkgname"), ["gimp"]);
    }

    #[test]
    fn comments_are_lines_by_default() {
        let err = SrcInfo::parse(&doc("# generated by makedeb\n")).unwrap_err();
        assert_eq!(err, Error::MissingDelimiter { line: 5 });
    }

    #[test]
    fn comments_skipped_when_enabled() {
        let options = ParseOptions::default().with_skip_comments(true);
        let srcinfo = SrcInfo::parse_with(&doc("\t# generated by makepkg\n"), options).unwrap();
        assert_eq!(srcinfo.keys().count(), 5);
        assert_eq!(srcinfo.options(), options);
    }

    #[test]
    fn unknown_keys_kept() {
        let srcinfo = SrcInfo::parse(&doc("backup = etc/foo\nbackup = etc/bar\n")).unwrap();
        assert_eq!(srcinfo.get_variable("backup"), ["etc/foo", "etc/bar"]);
        assert_eq!(srcinfo.get_array("backup"), None);
        assert_eq!(srcinfo.get_string("backup"), None);
    }

    #[test]
    fn absent_variable_is_empty() {
        let srcinfo = SrcInfo::parse(HEADER).unwrap();
        assert!(srcinfo.get_variable("depends").is_empty());
        assert_eq!(srcinfo.get_array("depends"), None);
    }

    #[test]
    fn typed_accessors_respect_kind() {
        let srcinfo = SrcInfo::parse(&doc("focal_depends = libc6\n")).unwrap();
        assert_eq!(srcinfo.get_string("arch"), None);
        assert_eq!(srcinfo.get_array("pkgver"), None);
        assert_eq!(
            srcinfo.get_array("focal_depends"),
            Some(&["libc6".to_string()][..])
        );
    }

    #[test]
    fn extended_four_variants() {
        let srcinfo = SrcInfo::parse(&doc(
            "depends = a\nfocal_depends = b\ndepends_amd64 = c\nfocal_depends_amd64 = d\n",
        ))
        .unwrap();

        let mut keys = srcinfo.list_extended_keys("depends").unwrap();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["depends", "depends_amd64", "focal_depends", "focal_depends_amd64"]
        );

        let depends = srcinfo.get_extended_variable("depends").unwrap();
        assert_eq!(depends.len(), 4);
        assert_eq!(depends[&Qualifier::new(None, None)], ["a"]);
        assert_eq!(depends[&Qualifier::new(Some("focal"), None)], ["b"]);
        assert_eq!(depends[&Qualifier::new(None, Some("amd64"))], ["c"]);
        assert_eq!(depends[&Qualifier::new(Some("focal"), Some("amd64"))], ["d"]);
    }

    #[test]
    fn extended_absent_is_empty() {
        let srcinfo = SrcInfo::parse(HEADER).unwrap();
        assert!(srcinfo.list_extended_keys("source").unwrap().is_empty());
        assert!(srcinfo.get_extended_variable("source").unwrap().is_empty());
    }

    #[test]
    fn extended_rejects_plain_names() {
        let srcinfo = SrcInfo::parse(HEADER).unwrap();
        assert_eq!(
            srcinfo.list_extended_keys("pkgver"),
            Err(Error::NotExtended("pkgver".to_string()))
        );
        let err = srcinfo.get_extended_variable("focal_depends").unwrap_err();
        assert!(!err.is_parsing());
    }

    #[test]
    fn substring_matching_overlaps() {
        let srcinfo = SrcInfo::parse(&doc("makedepends = gcc\n")).unwrap();
        assert_eq!(srcinfo.list_extended_keys("depends").unwrap(), ["makedepends"]);
        let depends = srcinfo.get_extended_variable("depends").unwrap();
        assert_eq!(depends[&Qualifier::default()], ["gcc"]);
    }

    #[test]
    fn segment_matching_is_anchored() {
        let options = ParseOptions::default().with_matching(ExtensionMatching::Segment);
        let srcinfo = SrcInfo::parse_with(
            &doc("depends = bash\nmakedepends = gcc\nfocal_makedepends = clang\n"),
            options,
        )
        .unwrap();

        assert_eq!(srcinfo.list_extended_keys("depends").unwrap(), ["depends"]);
        let makedepends = srcinfo.get_extended_variable("makedepends").unwrap();
        assert_eq!(makedepends.len(), 2);
        assert_eq!(makedepends[&Qualifier::new(Some("focal"), None)], ["clang"]);
    }

    #[test]
    fn segment_matching_validation() {
        let options = ParseOptions::default().with_matching(ExtensionMatching::Segment);
        let err = SrcInfo::parse_with(&doc("postrm_i386 = a\npostrm_i386 = b\n"), options)
            .unwrap_err();
        assert_eq!(err, Error::Repeated("postrm_i386".to_string()));
    }

    #[test]
    fn crlf_lines() {
        let input = HEADER.replace('\n', "\r\n");
        let srcinfo = SrcInfo::parse(&input).unwrap();
        assert_eq!(srcinfo.pkgver(), "2.10.34");
    }
}
