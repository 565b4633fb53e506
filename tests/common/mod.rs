// Shared host-side harness. The main crate is wasm-only, so the pure engine
// modules are included directly under a mirrored `core` tree.

#![allow(dead_code)]

pub mod core {
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod harmonics {
        include!("../../src/core/harmonics.rs");
    }
    pub mod surface {
        include!("../../src/core/surface.rs");
    }
    pub mod wobble {
        include!("../../src/core/wobble.rs");
    }
    pub mod settings {
        include!("../../src/core/settings.rs");
    }
    pub mod compositor {
        include!("../../src/core/compositor.rs");
    }
    pub mod scheduler {
        include!("../../src/core/scheduler.rs");
    }
}

use self::core::surface::{DrawSurface, Rgba};
use glam::DVec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Resize(f64, f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    SetStroke(Rgba, f64),
    Stroke,
}

/// One stroked path reconstructed from the recorded commands.
#[derive(Clone, Debug)]
pub struct StrokedPath {
    pub points: Vec<DVec2>,
    pub closed: bool,
    pub color: Option<Rgba>,
    pub width: Option<f64>,
}

/// Test double that records every drawing command in order.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.ops.push(Op::Resize(width, height));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }
    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }
    fn set_stroke(&mut self, color: Rgba, width: f64) {
        self.ops.push(Op::SetStroke(color, width));
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
}

impl RecordingSurface {
    pub fn stroked_paths(&self) -> Vec<StrokedPath> {
        let mut out = Vec::new();
        let mut current: Option<StrokedPath> = None;
        for op in &self.ops {
            match op {
                Op::BeginPath => {
                    current = Some(StrokedPath {
                        points: Vec::new(),
                        closed: false,
                        color: None,
                        width: None,
                    })
                }
                Op::MoveTo(x, y) | Op::LineTo(x, y) => {
                    if let Some(p) = current.as_mut() {
                        p.points.push(DVec2::new(*x, *y));
                    }
                }
                Op::ClosePath => {
                    if let Some(p) = current.as_mut() {
                        p.closed = true;
                    }
                }
                Op::SetStroke(c, w) => {
                    if let Some(p) = current.as_mut() {
                        p.color = Some(*c);
                        p.width = Some(*w);
                    }
                }
                Op::Stroke => {
                    if let Some(p) = current.take() {
                        out.push(p);
                    }
                }
                Op::Resize(..) => {}
            }
        }
        out
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}
