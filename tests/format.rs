//! Tests for entry formatting with frozen time and user.

use loglet::config::{Config, Settings};
use loglet::fmt::{FormatSegment, timestamp};
use loglet::{EntryContext, FormatTemplate, FormatValues, LogType, Placeholder};

const DEFAULT_CONFIG: &str = "\
DateTime=true
LogType=true
UserName=true
Message=true
Format=[{DateTime}] {LogType} {UserName}: {Message}
";

fn settings(content: &str) -> Settings {
    Settings::from_config(&Config::parse(content)).unwrap()
}

fn frozen() -> EntryContext {
    EntryContext::new("2024-03-01 09:05:07", "alice")
}

#[test]
fn all_fields_enabled() {
    let line = settings(DEFAULT_CONFIG).format_entry(LogType::Info, "started", &frozen());
    assert_eq!(line, "[2024-03-01 09:05:07] [Info] alice: started");
}

#[test]
fn disabled_log_type_leaves_no_brackets_or_double_space() {
    let content = DEFAULT_CONFIG.replace("LogType=true", "LogType=false");
    let line = settings(&content).format_entry(LogType::Info, "started", &frozen());
    assert_eq!(line, "[2024-03-01 09:05:07] alice: started");
}

#[test]
fn empty_message_has_no_trailing_space() {
    let line = settings(DEFAULT_CONFIG).format_entry(LogType::Warning, "", &frozen());
    assert_eq!(line, "[2024-03-01 09:05:07] [Warning] alice:");
}

#[test]
fn disabled_date_time_keeps_literal_brackets() {
    let content = DEFAULT_CONFIG.replace("DateTime=true", "DateTime=false");
    let line = settings(&content).format_entry(LogType::Test, "x", &frozen());
    assert_eq!(line, "[] [Test] alice: x");
}

#[test]
fn repeated_token_is_replaced_everywhere() {
    let s = settings("Message=true\nFormat={Message}|{Message}\n");
    assert_eq!(s.format_entry(LogType::Info, "hi", &frozen()), "hi|hi");
}

#[test]
fn token_in_message_is_not_substituted() {
    let message = "see {DateTime} and {UserName}";
    let line = settings(DEFAULT_CONFIG).format_entry(LogType::Info, message, &frozen());
    let expected = format!("[2024-03-01 09:05:07] [Info] alice: {message}");
    assert_eq!(line, expected);
}

#[test]
fn double_space_collapse_is_single_pass() {
    let s = settings("Message=true\nFormat=a   {Message}\n");
    assert_eq!(s.format_entry(LogType::Info, "b", &frozen()), "a  b");
}

#[test]
fn double_spaces_in_message_collapse_too() {
    let s = settings("Message=true\nFormat={Message}\n");
    assert_eq!(s.format_entry(LogType::Info, "a  b", &frozen()), "a b");
}

#[test]
fn formatting_is_deterministic() {
    let s = settings(DEFAULT_CONFIG);
    let context = frozen();
    assert_eq!(
        s.format_entry(LogType::Error, "boom", &context),
        s.format_entry(LogType::Error, "boom", &context)
    );
}

#[test]
fn everything_disabled_leaves_only_literals() {
    let s = settings("Format=[{DateTime}] {LogType} {UserName}: {Message}\n");
    assert_eq!(s.format_entry(LogType::Info, "msg", &frozen()), "[] :");
}

#[test]
fn template_without_tokens_is_fixed_text() {
    let template = FormatTemplate::parse("no tokens here");
    assert_eq!(
        template.segments(),
        &[FormatSegment::Literal("no tokens here".to_string())]
    );
    assert_eq!(template.render(&FormatValues::new()), "no tokens here");
}

#[test]
fn render_fills_each_placeholder() {
    let template = FormatTemplate::parse("{DateTime}|{LogType}|{UserName}|{Message}");
    let values = FormatValues::new()
        .date_time("t")
        .log_type("[Info]")
        .user_name("u")
        .message("m");
    assert_eq!(template.render(&values), "t|[Info]|u|m");
    for ph in Placeholder::ALL {
        assert!(template.contains(*ph));
    }
}

#[test]
fn timestamp_shape() {
    use chrono::{Local, TimeZone};
    let time = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    assert_eq!(timestamp(&time), "2024-01-02 03:04:05");
}
