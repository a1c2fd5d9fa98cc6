// ABOUTME: Render sink trait and a JSON sink that writes session views to any writer
// ABOUTME: Used by the command-line shell to emit the scene on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::scene::SessionView;
use crate::errors::{AppError, AppResult};
use std::io::Write;

/// Consumer of session views (a map widget, a terminal, a test recorder)
pub trait RenderSink {
    /// Display the view
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot present the view
    fn render(&mut self, view: &SessionView) -> AppResult<()>;
}

/// Writes each view as one pretty-printed JSON document
pub struct JsonRenderSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonRenderSink<W> {
    /// Sink writing to `writer`
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSink for JsonRenderSink<W> {
    fn render(&mut self, view: &SessionView) -> AppResult<()> {
        serde_json::to_writer_pretty(&mut self.writer, view)?;
        writeln!(self.writer)
            .and_then(|()| self.writer.flush())
            .map_err(|e| AppError::internal(format!("Failed to write view: {e}")).with_source(e))
    }
}
