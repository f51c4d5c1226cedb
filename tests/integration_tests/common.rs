// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_config_file(dir: &Path, content: &str) -> Result<()> {
    create_test_file(dir, ftlcount::CONFIG_FILE_NAME, content)
}

pub const BROWSER_FTL: &str = "\
### Browser strings

## Tabs

# Variables:
#   $count (Number) - Number of tabs
tabs-close-button =
    .label = Close tab
    .tooltiptext =
        { $count ->
            [one] Close { $count } tab
           *[other] Close { $count } tabs
        }

# Used in the toolbar.
reload-page = Reload this page
-brand-short-name = Firefox
about-brand = About { -brand-short-name }
";

/// A locale tree shaped like an l10n repository:
///
/// ```text
/// fr/browser/browser.ftl
/// fr/browser/notes.txt
/// fr/toolkit/main.ftl
/// fr/toolkit/about/about.ftl
/// ```
pub fn setup_locale_tree() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "fr/browser/browser.ftl", BROWSER_FTL)?;
    create_test_file(temp_dir.path(), "fr/browser/notes.txt", "Not counted")?;
    create_test_file(
        temp_dir.path(),
        "fr/toolkit/main.ftl",
        "ok-button = D'accord\ncancel-button = Annuler l'opération\n",
    )?;
    create_test_file(
        temp_dir.path(),
        "fr/toolkit/about/about.ftl",
        "about-title = À propos de { -brand-short-name }\n",
    )?;

    Ok(temp_dir)
}
