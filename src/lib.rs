//! termrender - position-aware terminal output
//!
//! Wraps a byte sink, tracks the cursor as text is written, crops output to
//! the visible window and keeps embedded escape sequences intact, so CLI
//! tools can redraw progress lines and status blocks in place.
//!
//! ```
//! use termrender::{Renderer, RendererOptions, TextStyle, Color};
//!
//! let mut renderer = Renderer::with_options(Vec::new(), RendererOptions::fixed(80, 20));
//! renderer.text("downloading", &[TextStyle::Fg(Color::Cyan)]).unwrap();
//! renderer.clear_line().unwrap();
//! assert_eq!(renderer.position().x, 0);
//! ```

pub mod ansi;
pub mod config;
pub mod error;
pub mod renderer;
pub mod sink;
pub mod style;
pub mod width;

pub use config::RendererOptions;
pub use error::{ConfigError, RenderError};
pub use renderer::{Overflow, Position, Renderer};
pub use sink::{Sink, StdoutSink, WriterSink};
pub use style::{Color, StyleParseError, TextStyle};
