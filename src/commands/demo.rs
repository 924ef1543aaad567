//! Demo subcommand handler

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use humansize::{format_size, DECIMAL};

use termrender::ansi::codes;
use termrender::{Color, Renderer, RendererOptions, StdoutSink, TextStyle};

/// Room left on the progress line for the counters after the bar.
const LABEL_WIDTH: usize = 30;
const MAX_BAR_WIDTH: usize = 40;

/// Progress bar text for `done` of `total` in `width` cells.
fn bar(done: u64, total: u64, width: usize) -> String {
    let filled = if total == 0 {
        width
    } else {
        ((done as f64 / total as f64) * width as f64).round() as usize
    };
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Bytes done after `step` of `steps`, without overflowing for large totals.
fn progress(total: u64, step: u32, steps: u32) -> u64 {
    let done = u128::from(total) * u128::from(step) / u128::from(steps.max(1));
    u64::try_from(done).unwrap_or(total)
}

/// Draw a progress line that is redrawn in place on every step.
#[cfg(not(tarpaulin_include))]
pub fn handle(options: RendererOptions, steps: u32, delay_ms: u64, total_bytes: u64) -> Result<()> {
    ctrlc::set_handler(|| {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(codes::SHOW_CURSOR.as_bytes());
        let _ = stdout.write_all(b"\n");
        let _ = stdout.flush();
        std::process::exit(130);
    })
    .context("Failed to install Ctrl-C handler")?;

    let mut renderer = Renderer::with_options(StdoutSink::new(), options);
    let bar_width = renderer
        .width()
        .saturating_sub(LABEL_WIDTH)
        .clamp(1, MAX_BAR_WIDTH);

    renderer
        .hide_cursor()?
        .text("termrender demo", &[TextStyle::Bold])?
        .new_line(1)?
        .save_position();

    let steps = steps.max(1);
    for step in 0..=steps {
        let done = progress(total_bytes, step, steps);
        renderer
            .restore_position()?
            .clear_line()?
            .text(
                &bar(done, total_bytes, bar_width),
                &[TextStyle::Fg(Color::Green)],
            )?
            .write(&format!(
                " {} / {}",
                format_size(done, DECIMAL),
                format_size(total_bytes, DECIMAL)
            ))?;
        renderer.flush()?;
        thread::sleep(Duration::from_millis(delay_ms));
    }

    renderer.new_line(1)?.show_cursor()?;
    renderer.end(None)?;
    Ok(())
}
