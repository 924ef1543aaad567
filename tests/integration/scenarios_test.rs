//! End-to-end cursor scenarios in an 80x20 window

use super::helpers::{fixed_renderer, output};
use termrender::{Overflow, Position};

#[test]
fn cannot_move_past_bottom_right() {
    let mut r = fixed_renderer(80, 20);
    r.move_by(100, 100).unwrap();
    assert_eq!(r.position(), Position::new(79, 19));
}

#[test]
fn cannot_move_past_top_left() {
    let mut r = fixed_renderer(80, 20);
    r.move_by(100, 100).unwrap();
    r.move_by(-100, -100).unwrap();
    assert_eq!(r.position(), Position::new(0, 0));
}

#[test]
fn cannot_write_past_right_edge() {
    let mut r = fixed_renderer(80, 20);
    r.text(&"a".repeat(100), &[]).unwrap();
    assert_eq!(r.position().x, 80);
    r.text("a", &[]).unwrap();
    assert_eq!(r.position().x, 80);
    assert_eq!(output(&r), "a".repeat(80));
}

#[test]
fn new_lines_past_bottom_overflow() {
    let mut r = fixed_renderer(80, 20);
    r.new_line(100).unwrap();
    assert_eq!(r.position(), Position::new(0, 20));
    assert_eq!(r.overflow(), Overflow::Below);
    assert_eq!(r.cursor_position(), Position::new(0, 19));
}

#[test]
fn moving_up_from_overflow_recovers() {
    let mut r = fixed_renderer(80, 20);
    r.new_line(100).unwrap();
    r.text("a", &[]).unwrap();
    assert_eq!(r.position(), Position::new(0, 20));

    r.move_by(0, -1).unwrap();
    assert_eq!(r.position(), Position::new(0, 19));
    assert_eq!(r.overflow(), Overflow::None);

    r.text("abc", &[]).unwrap();
    assert_eq!(r.position().x, 3);
}

#[test]
fn new_line_on_last_row_overflows_again() {
    let mut r = fixed_renderer(80, 20);
    r.to(0, Some(19)).unwrap();
    r.text("abc", &[]).unwrap();
    r.new_line(1).unwrap();
    // The separator itself is dropped; only the row is tracked past the edge.
    assert_eq!(r.position(), Position::new(3, 20));
    assert_eq!(r.overflow(), Overflow::Below);
}

#[test]
fn full_sequence_output() {
    let mut r = fixed_renderer(10, 3);
    r.text("hello world", &[]).unwrap();
    r.new_line(1).unwrap();
    r.text("next", &[]).unwrap();
    r.reset().unwrap();
    assert_eq!(output(&r), "hello worl\nnext\x1b[4D\x1b[1A\x1b[J");
    assert_eq!(r.position(), Position::ORIGIN);
}
