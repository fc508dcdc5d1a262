/*!
 * Tests for caption formatting functionality
 */

use ytsubs::subtitle_processor::{CaptionEntry, CaptionTrack};

use crate::common;

/// Test timestamp formatting at zero
#[test]
fn test_format_timestamp_withZero_shouldFormatAllZeros() {
    assert_eq!(CaptionEntry::format_timestamp(0.0), "00:00:00,000");
}

/// Test timestamp formatting across unit boundaries
#[test]
fn test_format_timestamp_withHoursMinutesSeconds_shouldFormatEachComponent() {
    assert_eq!(CaptionEntry::format_timestamp(3661.5), "01:01:01,500");
    assert_eq!(CaptionEntry::format_timestamp(59.0), "00:00:59,000");
    assert_eq!(CaptionEntry::format_timestamp(60.0), "00:01:00,000");
    assert_eq!(CaptionEntry::format_timestamp(3600.0), "01:00:00,000");
}

/// Test that milliseconds are truncated, never rounded up
#[test]
fn test_format_timestamp_withFractionNearNextSecond_shouldTruncate() {
    assert_eq!(CaptionEntry::format_timestamp(1.9999), "00:00:01,999");
    assert_eq!(CaptionEntry::format_timestamp(0.0009), "00:00:00,000");
}

/// Test that hours are unbounded rather than wrapped at 24
#[test]
fn test_format_timestamp_withLargeHours_shouldNotWrap() {
    assert_eq!(CaptionEntry::format_timestamp(360000.0), "100:00:00,000");
}

/// Test that formatting is pure and monotonic over increasing offsets
#[test]
fn test_format_timestamp_withIncreasingOffsets_shouldBeMonotonic() {
    let offsets = [0.0, 0.25, 1.0, 1.9999, 2.0, 59.999, 60.0, 3599.5, 3661.5];

    let mut previous = CaptionEntry::format_timestamp(offsets[0]);
    assert_eq!(previous, CaptionEntry::format_timestamp(offsets[0]));

    for &offset in &offsets[1..] {
        let formatted = CaptionEntry::format_timestamp(offset);
        assert!(
            formatted >= previous,
            "{} < {} for offset {}",
            formatted,
            previous,
            offset
        );
        previous = formatted;
    }
}

/// Test entry end time computation
#[test]
fn test_caption_entry_end_withDuration_shouldAddToStart() {
    let entry = CaptionEntry::new(2.0, 1.5, "Bye");
    assert_eq!(entry.format_start_time(), "00:00:02,000");
    assert_eq!(entry.format_end_time(), "00:00:03,500");
}

/// Test the exact SRT rendering of a two-entry track
#[test]
fn test_to_srt_withTwoEntries_shouldMatchCueFormat() {
    let track = CaptionTrack::with_entries("en", common::sample_entries());

    let expected = "1\n00:00:00,000 --> 00:00:02,000\nHi\n\n2\n00:00:02,000 --> 00:00:03,500\nBye\n\n";
    assert_eq!(track.to_srt(), expected);
}

/// Test the exact plain text rendering of a two-entry track
#[test]
fn test_to_plain_text_withTwoEntries_shouldJoinWithoutTrailingNewline() {
    let track = CaptionTrack::with_entries("en", common::sample_entries());
    assert_eq!(track.to_plain_text(), "Hi\nBye");
}

/// Test that both formats tolerate an empty track
#[test]
fn test_formatting_withEmptyTrack_shouldProduceEmptyStrings() {
    let track = CaptionTrack::new("en");

    assert!(track.is_empty());
    assert_eq!(track.to_srt(), "");
    assert_eq!(track.to_plain_text(), "");
}

/// Test that entries with empty text still produce a cue block
#[test]
fn test_to_srt_withEmptyText_shouldKeepCueBlock() {
    let entries = vec![
        CaptionEntry::new(0.0, 1.0, "First"),
        CaptionEntry::new(1.0, 1.0, ""),
        CaptionEntry::new(2.0, 1.0, "Third"),
    ];
    let track = CaptionTrack::with_entries("en", entries);

    let srt = track.to_srt();
    let index_lines = srt
        .lines()
        .filter(|line| !line.is_empty() && line.chars().all(|c| c.is_ascii_digit()))
        .count();
    assert_eq!(index_lines, 3);
    assert!(srt.contains("2\n00:00:01,000 --> 00:00:02,000\n\n"));
}

/// Test the newline count invariant of the plain format
#[test]
fn test_to_plain_text_withEmptyText_shouldKeepPosition() {
    let entries = vec![
        CaptionEntry::new(0.0, 1.0, "First"),
        CaptionEntry::new(1.0, 1.0, ""),
        CaptionEntry::new(2.0, 1.0, "Third"),
    ];
    let track = CaptionTrack::with_entries("en", entries);

    let plain = track.to_plain_text();
    assert_eq!(plain, "First\n\nThird");
    assert_eq!(plain.matches('\n').count(), track.entries.len() - 1);
}

/// Test that caption text is passed through uninterpreted
#[test]
fn test_formatting_withMarkupText_shouldPassThrough() {
    let entries = vec![CaptionEntry::new(0.0, 1.0, "<i>styled</i> & raw")];
    let track = CaptionTrack::with_entries("en", entries);

    assert!(track.to_srt().contains("<i>styled</i> & raw"));
    assert_eq!(track.to_plain_text(), "<i>styled</i> & raw");
}
