// tests/integration_tests/word_counting_test.rs
use super::common::BROWSER_FTL;
use ftlcount::{WordCountResult, WordCounter, count_resource};
use std::path::Path;

fn count(source: &str) -> WordCountResult {
    count_resource(source, &WordCounter::default(), Path::new("test.ftl"))
}

#[test]
fn test_single_line_message() {
    assert_eq!(count("greeting = Hello, World!\n"), WordCountResult::new(1, 2));
}

#[test]
fn test_attributes_without_value() {
    let source = "my-entry =\n    .tooltip = Click here\n    .label = Submit\n";
    assert_eq!(count(source), WordCountResult::new(2, 3));
}

#[test]
fn test_select_expression() {
    let source = "confirm = { $count ->\n    [one] Delete this item?\n   *[other] Delete these items?\n}\n";
    assert_eq!(count(source), WordCountResult::new(1, 6));
}

#[test]
fn test_comment_before_message() {
    let source = "# This is a string comment\nname = Value\n";
    assert_eq!(count(source), WordCountResult::new(1, 1));
}

#[test]
fn test_browser_resource() {
    // label 2, tooltip 2 + 2, reload 3, brand 1, about 1
    assert_eq!(count(BROWSER_FTL), WordCountResult::new(5, 11));
}

#[test]
fn test_message_with_value_and_attributes() {
    let source = "save = Save\n    .accesskey = S\n    .title = Save the current page\n";
    assert_eq!(count(source), WordCountResult::new(3, 6));
}
