pub mod fixtures;

use almanac::{DocumentSurface, GridRect, OutlineSink, RenderError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Everything a build asked the surface to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    NewPage,
    Background { pattern: String, bounds: GridRect },
    Text { bounds: GridRect, text: String },
    Frame { bounds: GridRect },
    Destination { key: String },
    Link { bounds: GridRect, destination: String },
}

/// An in-memory surface recording the draw stream instead of encoding it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::NewPage))
            .count()
    }

    /// Named destinations in registration order.
    pub fn destinations(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Destination { key } => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Link-annotation targets in draw order.
    pub fn links(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Link { destination, .. } => Some(destination.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn require_open_page(&self) -> Result<(), RenderError> {
        if self.page_count() == 0 {
            Err(RenderError::NoOpenPage)
        } else {
            Ok(())
        }
    }
}

impl DocumentSurface for RecordingSurface {
    fn start_new_page(&mut self) -> Result<(), RenderError> {
        self.ops.push(SurfaceOp::NewPage);
        Ok(())
    }

    fn stamp_background(&mut self, pattern: &str, bounds: GridRect) -> Result<(), RenderError> {
        self.require_open_page()?;
        self.ops.push(SurfaceOp::Background {
            pattern: pattern.to_string(),
            bounds,
        });
        Ok(())
    }

    fn draw_text(&mut self, bounds: GridRect, text: &str) -> Result<(), RenderError> {
        self.require_open_page()?;
        self.ops.push(SurfaceOp::Text {
            bounds,
            text: text.to_string(),
        });
        Ok(())
    }

    fn draw_frame(&mut self, bounds: GridRect) -> Result<(), RenderError> {
        self.require_open_page()?;
        self.ops.push(SurfaceOp::Frame { bounds });
        Ok(())
    }

    fn named_destination(&mut self, key: &str) -> Result<(), RenderError> {
        self.require_open_page()?;
        self.ops.push(SurfaceOp::Destination {
            key: key.to_string(),
        });
        Ok(())
    }

    fn link_annotation(
        &mut self,
        bounds: GridRect,
        destination: &str,
    ) -> Result<(), RenderError> {
        self.require_open_page()?;
        self.ops.push(SurfaceOp::Link {
            bounds,
            destination: destination.to_string(),
        });
        Ok(())
    }
}

/// Flattened bookmark events, nesting preserved by Begin/End pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineEvent {
    Begin {
        title: String,
        destination: Option<usize>,
    },
    End,
    Entry {
        title: String,
        destination: usize,
    },
}

#[derive(Debug, Default)]
pub struct RecordingOutline {
    pub events: Vec<OutlineEvent>,
}

impl RecordingOutline {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutlineSink for RecordingOutline {
    fn begin_section(&mut self, title: &str, destination: Option<usize>) {
        self.events.push(OutlineEvent::Begin {
            title: title.to_string(),
            destination,
        });
    }

    fn end_section(&mut self) {
        self.events.push(OutlineEvent::End);
    }

    fn entry(&mut self, title: &str, destination: usize) {
        self.events.push(OutlineEvent::Entry {
            title: title.to_string(),
            destination,
        });
    }
}
