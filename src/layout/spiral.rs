//! Spiral walks used to search for free space around a start position

use super::config::Spiral;
use super::types::{Point, Size};

/// Stateful walk over one spiral, producing integer offsets from the start
///
/// `next_offset` must be called with consecutive parameters (`0, ±1, ±2, ...`);
/// the rectangular spiral accumulates its position between calls.
#[derive(Debug, Clone)]
pub struct SpiralWalk {
    kind: Spiral,
    aspect: f64,
    step: Point,
    cursor: Point,
}

impl SpiralWalk {
    pub fn new(kind: Spiral, canvas: Size) -> Self {
        let aspect = canvas.width / canvas.height;
        Self {
            kind,
            aspect,
            step: Point::new(4.0 * aspect, 4.0),
            cursor: Point::new(0.0, 0.0),
        }
    }

    /// Offset at spiral parameter `t`
    pub fn next_offset(&mut self, t: f64) -> Point {
        let raw = match self.kind {
            Spiral::Archimedean => {
                let t = t * 0.1;
                Point::new(self.aspect * t * t.cos(), t * t.sin())
            }
            Spiral::Rectangular => {
                let sign = if t < 0.0 { -1.0 } else { 1.0 };
                let leg = ((1.0 + 4.0 * sign * t).sqrt() - sign) as i64 & 3;
                match leg {
                    0 => self.cursor.x += self.step.x,
                    1 => self.cursor.y += self.step.y,
                    2 => self.cursor.x -= self.step.x,
                    _ => self.cursor.y -= self.step.y,
                }
                self.cursor
            }
        };
        Point::new(raw.x.trunc(), raw.y.trunc())
    }
}
