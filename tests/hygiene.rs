//! Hygiene: source-level standards checked at test time.
//!
//! Scans the production sources under `src/` (sibling `*_test.rs` files are
//! skipped) for patterns that crash the page or swallow errors. Budgets only
//! ever go down.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Rule {
    pattern: &'static str,
    budget: usize,
    why: &'static str,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", budget: 0, why: "panics abort the page script" },
    Rule { pattern: ".expect(", budget: 0, why: "panics abort the page script" },
    Rule { pattern: "panic!(", budget: 0, why: "panics abort the page script" },
    Rule { pattern: "unreachable!(", budget: 0, why: "panics abort the page script" },
    Rule { pattern: "todo!(", budget: 0, why: "stubs must not ship" },
    Rule { pattern: "unimplemented!(", budget: 0, why: "stubs must not ship" },
    Rule { pattern: "let _ =", budget: 0, why: "discards an error without looking at it" },
    Rule { pattern: ".ok()", budget: 0, why: "discards an error without looking at it" },
    Rule { pattern: "#[allow(dead_code)]", budget: 0, why: "unused code is deleted, not silenced" },
];

/// Files allowed to assign markup. Everything else writes text.
const MARKUP_WRITERS: &[&str] = &["loader.rs"];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn describe(found: &[(String, usize)]) -> String {
    found.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n")
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for rule in RULES {
        let found = hits(&files, rule.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > rule.budget {
            failures.push(format!(
                "`{}` budget exceeded ({}): found {count}, max {}\n{}",
                rule.pattern,
                rule.why,
                rule.budget,
                describe(&found)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn markup_is_only_written_by_the_fragment_loader() {
    let files = source_files();
    let offenders: Vec<_> = hits(&files, "set_inner_html")
        .into_iter()
        .filter(|(path, _)| !MARKUP_WRITERS.iter().any(|allowed| path.ends_with(allowed)))
        .collect();
    assert!(offenders.is_empty(), "markup written outside the loader:\n{}", describe(&offenders));
}
