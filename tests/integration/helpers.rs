//! Shared helpers for integration tests

use termrender::{Renderer, RendererOptions};

/// Renderer over an in-memory sink with a fixed window.
pub fn fixed_renderer(width: i32, height: i32) -> Renderer<Vec<u8>> {
    Renderer::with_options(Vec::new(), RendererOptions::fixed(width, height))
}

/// Everything the renderer has written so far.
pub fn output(renderer: &Renderer<Vec<u8>>) -> String {
    String::from_utf8_lossy(renderer.sink()).into_owned()
}

/// Output with escape sequences removed.
pub fn visible(renderer: &Renderer<Vec<u8>>) -> String {
    termrender::ansi::strip(&output(renderer)).into_owned()
}
