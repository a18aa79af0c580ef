use srcinfo::{
    split_dep_condition, split_dep_description, ExtensionMatching, ParseOptions, SrcInfo,
    VariableKind,
};

const EXAMPLE: &str = "\
pkgbase = hello-world
\tpkgdesc = A small program that greets you
\tpkgver = 2.12.1
\tpkgrel = 3
\tarch = amd64
\tlicense = GPL3
\tdepends = libc6
\tfocal_depends = libc6>=2.31
\tdepends_amd64 = lib32gcc-s1
\toptdepends = bash-completion: shell completions
\tsource = https://ftp.gnu.org/gnu/hello/hello-2.12.1.tar.gz
\tpostrm = cleanup.sh

pkgname = hello-world
";

fn main() {
    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).expect("failed to read .SRCINFO file"),
        None => EXAMPLE.to_string(),
    };
    // Segment matching keeps optdepends out of depends
    let options = ParseOptions::default().with_matching(ExtensionMatching::Segment);
    let srcinfo = SrcInfo::parse_with(&input, options).expect("failed to parse .SRCINFO");

    println!("=== Parsed .SRCINFO ===");
    println!("pkgbase:      {}", srcinfo.pkgbase());
    println!("pkgname:      {}", srcinfo.pkgnames().join(" "));
    match srcinfo.epoch() {
        Some(epoch) => println!("version:      {}:{}-{}", epoch, srcinfo.pkgver(), srcinfo.pkgrel()),
        None => println!("version:      {}-{}", srcinfo.pkgver(), srcinfo.pkgrel()),
    }
    println!("arch:         {}", srcinfo.get_variable("arch").join(" "));

    for base in VariableKind::ExtendedArray
        .names()
        .iter()
        .chain(VariableKind::ExtendedString.names())
    {
        let Ok(variants) = srcinfo.get_extended_variable(base) else {
            continue;
        };
        let mut variants: Vec<_> = variants.into_iter().collect();
        variants.sort();

        for (qualifier, values) in variants {
            println!("{}:", qualifier.qualified_name(base));
            for value in values {
                let (dep, desc) = split_dep_description(value);
                let (name, op, version) = split_dep_condition(dep);
                match (op, version) {
                    (Some(op), Some(version)) => print!("  {name} {op} {version}"),
                    _ => print!("  {name}"),
                }
                if desc.is_empty() {
                    println!();
                } else {
                    println!("  ({desc})");
                }
            }
        }
    }
}
