// tests/integration_tests/config_test.rs
use super::common::{create_config_file, create_test_file};
use anyhow::Result;
use ftlcount::{Args, run_with_output};

const DIGITS_FTL: &str = "update = Version 2 is ready\n";

#[test]
fn test_discovered_config_changes_word_rules() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(temp_dir.path(), "locale/app.ftl", DIGITS_FTL)?;
    let args = Args {
        path: temp_dir.path().join("locale"),
        verbose: false,
        config: None,
    };

    let total = run_with_output(&args, &mut Vec::<u8>::new())?;
    assert_eq!(total.words, 3, "digits are not words by default");

    create_config_file(temp_dir.path(), "[words]\nextra_chars = \"0123456789\"\n")?;
    let total = run_with_output(&args, &mut Vec::<u8>::new())?;
    assert_eq!(total.words, 4, "config adds digits to the word characters");
    Ok(())
}

#[test]
fn test_explicit_config_file() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(temp_dir.path(), "app.ftl", "contraction = It's here\n")?;
    create_test_file(temp_dir.path(), "conf/rules.toml", "[words]\njoiners = \"\"\n")?;

    let args = Args {
        path: temp_dir.path().join("app.ftl"),
        verbose: false,
        config: Some(temp_dir.path().join("conf/rules.toml")),
    };
    let total = run_with_output(&args, &mut Vec::<u8>::new())?;
    assert_eq!(total.words, 3);
    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    create_test_file(temp_dir.path(), "app.ftl", DIGITS_FTL)?;
    create_config_file(temp_dir.path(), "[words]\nunknown = 1\n")?;

    let args = Args {
        path: temp_dir.path().to_path_buf(),
        verbose: false,
        config: None,
    };
    assert!(run_with_output(&args, &mut Vec::<u8>::new()).is_err());
    Ok(())
}
