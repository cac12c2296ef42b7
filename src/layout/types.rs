//! Core types for the layout engine

use crate::words::Word;

/// A 2D point, relative to the canvas center unless stated otherwise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The canvas as a box centered on the origin
    pub fn centered_bounds(&self) -> BoundingBox {
        BoundingBox::new(
            -self.width / 2.0,
            -self.height / 2.0,
            self.width,
            self.height,
        )
    }

    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }
}

/// An axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this bounding box intersects another (touching edges do not count)
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Check if `other` lies entirely inside this box
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.x >= self.x
            && other.right() <= self.right()
            && other.y >= self.y
            && other.bottom() <= self.bottom()
    }

    /// Grow the box by `amount` on every side
    pub fn inflate(&self, amount: f64) -> BoundingBox {
        BoundingBox::new(
            self.x - amount,
            self.y - amount,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
        )
    }

    /// Move the box by (dx, dy)
    pub fn translate(&self, dx: f64, dy: f64) -> BoundingBox {
        BoundingBox::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Axis-aligned box of this box rotated by `degrees` around the origin
    ///
    /// Rotation is clockwise in screen coordinates (y grows downward), matching
    /// SVG's `rotate()`.
    pub fn rotated(&self, degrees: f64) -> BoundingBox {
        if degrees % 360.0 == 0.0 {
            return *self;
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        let corners = [
            (self.x, self.y),
            (self.right(), self.y),
            (self.x, self.bottom()),
            (self.right(), self.bottom()),
        ];
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for (x, y) in corners {
            let rx = x * cos - y * sin;
            let ry = x * sin + y * cos;
            min.x = min.x.min(rx);
            min.y = min.y.min(ry);
            max.x = max.x.max(rx);
            max.y = max.y.max(ry);
        }
        BoundingBox::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

/// A word with its computed placement
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: Word,
    /// Text anchor position relative to the canvas center (x: horizontal middle, y: baseline)
    pub position: Point,
    /// Rotation in degrees
    pub rotate: f64,
    /// Extent of the drawn text relative to the canvas center
    pub bounds: BoundingBox,
    /// False when the canvas was full and the word was placed past its edge
    pub within_canvas: bool,
}

/// Output of a finished layout run
#[derive(Debug, Clone, PartialEq)]
pub struct CloudLayout {
    /// Placed words, largest first
    pub words: Vec<PlacedWord>,
    pub canvas: Size,
    /// Words omitted because they did not fit (only with `OverflowPolicy::Drop`)
    pub dropped: Vec<Word>,
    /// Ticket of the render call that started this layout
    pub ticket: u64,
}

impl CloudLayout {
    /// Number of words placed past the canvas edge
    pub fn overflow_count(&self) -> usize {
        self.words.iter().filter(|w| !w.within_canvas).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflate() {
        let b = BoundingBox::new(0.0, 0.0, 10.0, 4.0).inflate(5.0);
        assert_eq!(b, BoundingBox::new(-5.0, -5.0, 20.0, 14.0));
    }

    #[test]
    fn test_touching_boxes_do_not_intersect() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&b.translate(-1.0, 0.0)));
    }

    #[test]
    fn test_contains_box() {
        let canvas = Size::new(600.0, 400.0).centered_bounds();
        assert!(canvas.contains_box(&BoundingBox::new(-300.0, -200.0, 600.0, 400.0)));
        assert!(!canvas.contains_box(&BoundingBox::new(250.0, 0.0, 60.0, 10.0)));
    }

    #[test]
    fn test_rotated_quarter_turn_swaps_extent() {
        let b = BoundingBox::new(-20.0, -5.0, 40.0, 10.0).rotated(90.0);
        assert!((b.width - 10.0).abs() < 1e-9);
        assert!((b.height - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotated_zero_is_identity() {
        let b = BoundingBox::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(b.rotated(0.0), b);
    }

    #[test]
    fn test_overflow_count() {
        let word = |x: f64, within_canvas: bool| PlacedWord {
            word: Word::new("a", 20.0, "A"),
            position: Point::new(x, 0.0),
            rotate: 0.0,
            bounds: BoundingBox::new(x, 0.0, 10.0, 10.0),
            within_canvas,
        };
        let layout = CloudLayout {
            words: vec![word(0.0, true), word(400.0, false), word(-420.0, false)],
            canvas: Size::new(600.0, 400.0),
            dropped: vec![],
            ticket: 1,
        };
        assert_eq!(layout.overflow_count(), 2);
    }
}
