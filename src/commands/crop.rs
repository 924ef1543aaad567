//! Crop subcommand handler

use std::io::{self, Read};

use anyhow::{Context, Result};

use termrender::{Renderer, RendererOptions, StdoutSink};

/// Render all of stdin into stdout through a cropping renderer.
#[cfg(not(tarpaulin_include))]
pub fn handle(options: RendererOptions) -> Result<()> {
    let mut input = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut input)
        .context("Failed to read stdin")?;

    let mut renderer = Renderer::with_options(StdoutSink::new(), options);
    tracing::debug!(
        bytes = input.len(),
        width = renderer.width(),
        height = renderer.height(),
        "cropping stdin"
    );
    renderer.write_bytes(&input)?;
    renderer.end(None)?;
    Ok(())
}
