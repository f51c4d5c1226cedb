// tests/integration_tests/scanning_test.rs
use super::common::{create_test_file, setup_locale_tree};
use anyhow::Result;
use ftlcount::{Args, ScanOptions, WordCounter, run_with_output, scan};

#[test]
fn test_scan_locale_tree() -> Result<()> {
    let temp_dir = setup_locale_tree()?;
    let mut out = Vec::new();

    let total = scan(
        temp_dir.path(),
        &WordCounter::default(),
        ScanOptions::default(),
        &mut out,
    )?;

    assert_eq!(total.directories, 5);
    assert_eq!(total.all_files, 4);
    assert_eq!(total.ftl_files, 3);
    assert_eq!(total.strings, 8);
    assert_eq!(total.words, 17);
    Ok(())
}

#[test]
fn test_report_output() -> Result<()> {
    let temp_dir = setup_locale_tree()?;
    let root = temp_dir.path().display().to_string();
    let args = Args {
        path: temp_dir.path().to_path_buf(),
        verbose: false,
        config: None,
    };

    let mut out = Vec::new();
    run_with_output(&args, &mut out)?;

    let expected = format!(
        "{root}\t0\t0\t0\n\
         {root}/fr\t0\t0\t0\n\
         {root}/fr/browser\t1\t5\t11\n\
         {root}/fr/toolkit\t1\t2\t3\n\
         {root}/fr/toolkit/about\t1\t1\t3\n\
         \n\
         {root}:\n\
         Directories: 5, Files: 4, FTL files: 3, Strings: 8, Words: 17\n"
    );
    assert_eq!(String::from_utf8(out)?, expected);
    Ok(())
}

#[test]
fn test_verbose_report_lists_every_file() -> Result<()> {
    let temp_dir = setup_locale_tree()?;
    let root = temp_dir.path().display().to_string();
    let args = Args {
        path: temp_dir.path().join("fr").join("browser"),
        verbose: true,
        config: None,
    };

    let mut out = Vec::new();
    let total = run_with_output(&args, &mut out)?;
    let report = String::from_utf8(out)?;

    assert_eq!(total.directories, 1);
    assert!(report.starts_with(&format!(
        "{root}/fr/browser/browser.ftl\t5\t11\n\
         Skipping {root}/fr/browser/notes.txt, type: file\n\
         {root}/fr/browser\t1\t5\t11\n\n"
    )));
    Ok(())
}

#[test]
fn test_directory_total_is_sum_of_files() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(temp_dir.path(), "one.ftl", "a = One two\nb = Three four five\n")?;
    create_test_file(
        temp_dir.path(),
        "two.ftl",
        "c = One\nd = Two three\ne = Four five six seven\n",
    )?;
    create_test_file(temp_dir.path(), "image.png", "not text")?;

    let total = scan(
        temp_dir.path(),
        &WordCounter::default(),
        ScanOptions::default(),
        &mut Vec::<u8>::new(),
    )?;

    assert_eq!(
        (total.all_files, total.ftl_files, total.strings, total.words),
        (3, 2, 5, 12)
    );
    Ok(())
}
