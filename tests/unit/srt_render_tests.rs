/*!
 * Tests for SRT serialization and timestamp formatting
 */

use anyhow::Result;
use std::fs;
use subcue::block_formatter::SubtitleBlock;
use subcue::srt_render::{self, TimedEntry};

use crate::common::create_temp_dir;

/// Test zero formats as all zeros
#[test]
fn test_format_timestamp_withZero_shouldFormatAllZeros() {
    assert_eq!(TimedEntry::format_timestamp(0.0), "00:00:00,000");
}

/// Test a value with hours, minutes, seconds and milliseconds
#[test]
fn test_format_timestamp_withMixedComponents_shouldFormatEachField() {
    // 1h 23m 45.678s
    assert_eq!(TimedEntry::format_timestamp(5025.678), "01:23:45,678");
}

/// Test that a nominal .999 value is not lost to floating-point rounding
#[test]
fn test_format_timestamp_withRepresentationBelowNominal_shouldKeepMilliseconds() {
    // f64 stores 3661.999 slightly below its nominal value
    assert_eq!(TimedEntry::format_timestamp(3661.999), "01:01:01,999");
}

/// Test that sub-millisecond precision is truncated, not rounded up
#[test]
fn test_format_timestamp_withSubMillisecondTail_shouldTruncate() {
    assert_eq!(TimedEntry::format_timestamp(1.9996), "00:00:01,999");
}

/// Test that a negative time clamps to zero instead of underflowing
#[test]
fn test_format_timestamp_withNegativeSeconds_shouldClampToZero() {
    assert_eq!(TimedEntry::format_timestamp(-0.5), "00:00:00,000");
}

/// Test entry display with two lines
#[test]
fn test_timed_entry_display_withTwoLines_shouldRenderFourLinesAndSeparator() {
    let entry = TimedEntry::new(1, 0.0, 1.5, SubtitleBlock::new("Hello world!", "second line"));

    assert_eq!(
        entry.to_string(),
        "1\n00:00:00,000 --> 00:00:01,500\nHello world!\nsecond line\n\n"
    );
}

/// Test entry display with an empty second line
#[test]
fn test_timed_entry_display_withOneLine_shouldOmitEmptySecondLine() {
    let entry = TimedEntry::new(2, 1.5, 30.0, SubtitleBlock::new("only line", ""));

    assert_eq!(
        entry.to_string(),
        "2\n00:00:01,500 --> 00:00:30,000\nonly line\n\n"
    );
}

/// Test rendering a small document end to end
#[test]
fn test_render_withTwoEntries_shouldMatchExpectedDocument() {
    let entries = vec![
        TimedEntry::new(1, 0.0, 1.5, SubtitleBlock::new("Hello world!", "")),
        TimedEntry::new(
            2,
            1.5,
            30.0,
            SubtitleBlock::new("This is a test", "of the professional SRT"),
        ),
    ];

    let expected = "\
1
00:00:00,000 --> 00:00:01,500
Hello world!

2
00:00:01,500 --> 00:00:30,000
This is a test
of the professional SRT

";

    assert_eq!(srt_render::render(&entries), expected);
}

/// Test that rendering is deterministic
#[test]
fn test_render_withSameEntries_shouldBeDeterministic() {
    let entries = vec![TimedEntry::new(
        1,
        0.0,
        2.25,
        SubtitleBlock::new("a b c d", "e f"),
    )];

    assert_eq!(srt_render::render(&entries), srt_render::render(&entries));
}

/// Test rendering no entries
#[test]
fn test_render_withNoEntries_shouldYieldEmptyString() {
    assert_eq!(srt_render::render(&[]), "");
}

/// Test writing to a file creates missing parent directories
#[test]
fn test_write_to_file_withNestedPath_shouldCreateParentsAndWrite() -> Result<()> {
    let temp_dir = create_temp_dir()?;
    let path = temp_dir.path().join("nested").join("out.srt");
    let entries = vec![TimedEntry::new(
        1,
        0.0,
        1.5,
        SubtitleBlock::new("Hello world!", ""),
    )];

    srt_render::write_to_file(&entries, &path)?;

    let written = fs::read_to_string(&path)?;
    assert_eq!(written, srt_render::render(&entries));
    Ok(())
}
