use log::debug;
use opgen::config::ConfigV1;
use opgen::generator::{GenerationReport, GenerationRequest, Generator};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Relative paths of every file below `dir`.
fn files_below(dir: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Prints which files exist on one side only and which differ in content.
///
/// # Arguments
/// * `actual` - The generated directory.
/// * `expected` - The directory with the expected output.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = files_below(actual);
    let expected_files = files_below(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", actual);
    println!("Expected output: {:?}", expected);

    for file in actual_files.difference(&expected_files) {
        println!("  + {:?} (only in actual)", file);
    }
    for file in expected_files.difference(&actual_files) {
        println!("  - {:?} (only in expected)", file);
    }
    for file in actual_files.intersection(&expected_files) {
        let actual_content = fs::read(actual.join(file)).unwrap();
        let expected_content = fs::read(expected.join(file)).unwrap();
        if actual_content != expected_content {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&actual_content));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&expected_content));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Generates `category/name` from `template` into a temporary directory and
/// asserts that the result is identical to `expected_dir`.
///
/// # Arguments
/// * `template` - Path to the template directory.
/// * `category` - Operator category.
/// * `name` - Operator name.
/// * `expected_dir` - Path to the directory with expected output.
pub fn run_and_assert(
    template: &str,
    category: &str,
    name: &str,
    expected_dir: &str,
) -> GenerationReport {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config = ConfigV1::default();
    let request = GenerationRequest::new(category, name, tmp_dir.path());

    let report = Generator::new(&request, &config)
        .with_template_root(template)
        .run()
        .unwrap();

    let generated = tmp_dir.path().join(category).join(name);
    assert_eq!(report.dest_dir, generated);

    let different = dir_diff::is_different(&generated, expected_dir).unwrap_or_else(|e| {
        debug!("Error comparing directories: {e:?}");
        true
    });
    if different {
        print_dir_diff(&generated, expected_dir.as_ref());
        panic!("Directories differ. See above for details.");
    }
    report
}
