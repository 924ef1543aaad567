//! Window invariants, width accounting and overflow suppression

use super::helpers::{fixed_renderer, output, visible};
use termrender::{Color, Overflow, Position, Renderer, TextStyle, WriterSink};

#[test]
fn to_always_lands_inside_window() {
    let targets = [
        (-50, -50),
        (0, 0),
        (79, 19),
        (80, 20),
        (500, 3),
        (3, 500),
        (-1, 10),
        (i64::MAX, i64::MIN),
    ];
    for (x, y) in targets {
        let mut r = fixed_renderer(80, 20);
        r.to(x, Some(y)).unwrap();
        let pos = r.position();
        assert!((0..=80).contains(&pos.x), "x out of range for {:?}", (x, y));
        assert!((0..=19).contains(&pos.y), "y out of range for {:?}", (x, y));
        assert_eq!(r.overflow(), Overflow::None);
    }
}

#[test]
fn repeated_to_is_idempotent() {
    let mut r = fixed_renderer(80, 20);
    r.to(12, Some(7)).unwrap();
    let first = output(&r);
    assert_eq!(first, "\x1b[12C\x1b[7B");

    let pos = r.position();
    r.to(pos.x, Some(pos.y)).unwrap();
    assert_eq!(output(&r), first);
}

#[test]
fn short_write_advances_by_length() {
    let mut r = fixed_renderer(80, 20);
    r.to(10, None).unwrap();
    r.write("0123456789").unwrap();
    assert_eq!(r.position().x, 20);
}

#[test]
fn long_write_truncates_to_remaining_columns() {
    let mut r = fixed_renderer(30, 5);
    r.to(25, None).unwrap();
    r.write("abcdefghijk").unwrap();
    assert_eq!(visible(&r), "abcde");
    assert_eq!(r.position().x, 30);
}

#[test]
fn wide_characters_count_two_columns() {
    let mut r = fixed_renderer(5, 5);
    r.write("你好世界").unwrap();
    assert_eq!(output(&r), "你好");
    assert_eq!(r.position().x, 4);
}

#[test]
fn cropped_escape_sequence_stays_whole() {
    let mut r = fixed_renderer(4, 5);
    r.write("ab\x1b[38;2;10;20;30mcdefgh\x1b[0m").unwrap();
    let out = output(&r);
    assert_eq!(out, "ab\x1b[38;2;10;20;30mcd\x1b[0m");
    assert!(out.contains("\x1b[38;2;10;20;30m"));
    insta::assert_snapshot!(format!("{:?}", out), @r#""ab\u{1b}[38;2;10;20;30mcd\u{1b}[0m""#);
}

#[test]
fn escape_after_cut_still_emitted() {
    let mut r = fixed_renderer(3, 5);
    r.text("overflowing", &[TextStyle::Underline, TextStyle::Fg(Color::Blue)])
        .unwrap();
    assert_eq!(output(&r), "\x1b[4m\x1b[34move\x1b[0m");
    assert_eq!(r.position().x, 3);
}

#[test]
fn multi_line_write_crops_each_line() {
    let mut r = fixed_renderer(5, 10);
    r.to(3, None).unwrap();
    r.sink_mut().clear();
    r.write("abcdef\nghijklmn\nop").unwrap();
    assert_eq!(output(&r), "ab\nghijk\nop");
    assert_eq!(r.position(), Position::new(2, 2));
}

#[test]
fn overflow_drops_glyphs() {
    let mut r = fixed_renderer(80, 20);
    r.new_line(20).unwrap();
    assert_eq!(r.overflow(), Overflow::Below);
    r.sink_mut().clear();

    r.write("visible text").unwrap();
    assert!(output(&r).is_empty());
}

#[test]
fn overflow_still_beeps() {
    let mut r = fixed_renderer(80, 20);
    r.new_line(20).unwrap();
    r.sink_mut().clear();

    r.beep().unwrap();
    assert_eq!(output(&r), "\x07");
}

#[test]
fn move_inside_overflow_emits_sequence() {
    let mut r = fixed_renderer(80, 20);
    r.text("abc", &[]).unwrap();
    r.new_line(20).unwrap();
    r.sink_mut().clear();

    // Column moves keep the row below the window.
    r.move_by(5, 0).unwrap();
    assert_eq!(r.overflow(), Overflow::Below);
    assert_eq!(output(&r), "\x1b[5C");
}

#[test]
fn save_restore_across_overflow() {
    let mut r = fixed_renderer(80, 20);
    r.to(2, Some(18)).unwrap();
    r.save_position();
    r.new_line(5).unwrap();
    assert_eq!(r.overflow(), Overflow::Below);

    r.restore_position().unwrap();
    assert_eq!(r.overflow(), Overflow::None);
    assert_eq!(r.position(), Position::new(2, 18));
}

#[test]
fn live_window_tracks_sink_size() {
    let sink = WriterSink::new(Vec::new()).with_size(6, 2);
    let mut r = Renderer::new(sink);
    r.write("abcdefgh\nijklmnop\nqrst").unwrap();
    let written = String::from_utf8(r.into_inner().into_inner()).unwrap();
    assert_eq!(written, "abcdef\nijklmn");
}

#[test]
fn zero_height_window_overflows_immediately() {
    let mut r = fixed_renderer(10, 0);
    r.write("abc\x1b[1m").unwrap();
    assert_eq!(output(&r), "\x1b[1m");
    assert_eq!(r.overflow(), Overflow::Below);
}
