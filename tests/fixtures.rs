use mdlite::render;
use similar::{ChangeTag, TextDiff};
use std::fs;
use std::path::{Path, PathBuf};

fn collect_md_files(dir: &Path, out: &mut Vec<PathBuf>) {
    if dir.is_dir() {
        for entry in fs::read_dir(dir).unwrap() {
            let p = entry.unwrap().path();
            if p.is_dir() {
                collect_md_files(&p, out);
            } else if p.extension().is_some_and(|ext| ext == "md") {
                out.push(p);
            }
        }
    }
}

fn print_diff(expected: &str, actual: &str) {
    let diff = TextDiff::from_lines(expected, actual);
    for op in diff.ops() {
        for change in diff.iter_changes(op) {
            match change.tag() {
                ChangeTag::Delete => eprint!("- {}", change),
                ChangeTag::Insert => eprint!("+ {}", change),
                ChangeTag::Equal => eprint!("  {}", change),
            }
        }
    }
    eprintln!();
}

#[test]
fn fixtures_render_to_expected_html() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut files = Vec::new();
    collect_md_files(&Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"), &mut files);
    assert!(!files.is_empty(), "no fixture files found");
    files.sort();

    for f in files {
        let source = fs::read_to_string(&f).unwrap();
        let expected = fs::read_to_string(f.with_extension("html")).unwrap();
        let actual = render(&source);
        if actual != expected {
            eprintln!("HTML diff for {:?}:\n", f);
            print_diff(&expected, &actual);
        }
        assert_eq!(actual, expected, "render mismatch for {:?}", f);
    }
}
