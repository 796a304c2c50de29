use serde::Serialize;

/// Minimal 2D drawing surface.
pub trait Canvas {
    /// Resize the surface. Like an HTML canvas, this clears it.
    fn resize(&mut self, width: u32, height: u32);
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str, line_width: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: &str);
    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, line_width: f64);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawOp {
    #[serde(rename_all = "camelCase")]
    FillRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: String,
    },
    #[serde(rename_all = "camelCase")]
    StrokeRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: String,
        line_width: f64,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        color: String,
    },
    #[serde(rename_all = "camelCase")]
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        color: String,
        line_width: f64,
    },
}

/// Canvas that records draw operations so a thin client can replay them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }
}

impl Canvas for RecordingCanvas {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.clear();
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str, line_width: f64) {
        self.ops.push(DrawOp::StrokeRect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
            line_width,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: &str) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
            color: color.to_string(),
        });
    }

    fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, line_width: f64) {
        self.ops.push(DrawOp::Line {
            x0: from.0,
            y0: from.1,
            x1: to.0,
            y1: to.1,
            color: color.to_string(),
            line_width,
        });
    }
}
