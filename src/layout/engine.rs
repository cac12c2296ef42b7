//! Spiral word placement
//!
//! Words are placed largest first. Each word starts at a random point in the
//! central half of the canvas and walks a spiral outward until its box,
//! grown by the configured padding, clears every word placed before it.
//!
//! Placement is resumable: [`SpiralLayout::start`] returns a [`LayoutJob`]
//! that places one word per [`LayoutJob::step`], and [`LayoutJob::finish`]
//! consumes the job to produce the completed [`CloudLayout`] exactly once.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use tracing::{debug, warn};

use crate::words::Word;

use super::config::{CloudConfig, OverflowPolicy, Rotation};
use super::error::LayoutError;
use super::measure::rotated_text_bounds;
use super::spiral::SpiralWalk;
use super::types::{BoundingBox, CloudLayout, PlacedWord, Point};

/// Hard limit on spiral steps when searching past the canvas edge
const MAX_SPIRAL_STEPS: u64 = 1_000_000;

/// A configured layout engine
#[derive(Debug, Clone)]
pub struct SpiralLayout {
    config: CloudConfig,
    seed: u64,
}

impl SpiralLayout {
    pub fn new(config: CloudConfig, seed: u64) -> Self {
        Self { config, seed }
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    /// Begin placing `words`
    ///
    /// Nothing is placed until the returned job is stepped or finished.
    pub fn start(&self, mut words: Vec<Word>) -> Result<LayoutJob, LayoutError> {
        self.config.validate()?;

        words.sort_by(|a, b| b.size.total_cmp(&a.size));
        let total = words.len();
        debug!(words = total, seed = self.seed, "starting layout");

        Ok(LayoutJob {
            config: self.config.clone(),
            rng: Pcg32::seed_from_u64(self.seed),
            pending: words.into_iter(),
            placed: Vec::with_capacity(total),
            dropped: Vec::new(),
            total,
            ticket: 0,
        })
    }

    /// Place every word in one call
    pub fn run(&self, words: Vec<Word>) -> Result<CloudLayout, LayoutError> {
        self.start(words)?.finish()
    }
}

/// An in-progress layout
#[derive(Debug)]
pub struct LayoutJob {
    config: CloudConfig,
    rng: Pcg32,
    pending: std::vec::IntoIter<Word>,
    placed: Vec<PlacedWord>,
    dropped: Vec<Word>,
    total: usize,
    ticket: u64,
}

impl LayoutJob {
    /// Tag the job with the render ticket that started it
    pub fn with_ticket(mut self, ticket: u64) -> Self {
        self.ticket = ticket;
        self
    }

    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn is_finished(&self) -> bool {
        self.pending.len() == 0
    }

    /// (words processed, total words)
    pub fn progress(&self) -> (usize, usize) {
        (self.total - self.pending.len(), self.total)
    }

    /// Words placed so far, largest first
    pub fn placed(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Place the next word. Returns `false` once every word has been handled.
    pub fn step(&mut self) -> Result<bool, LayoutError> {
        let Some(word) = self.pending.next() else {
            return Ok(false);
        };

        let rotate = self.pick_rotation();
        let extent = rotated_text_bounds(&word.text, word.size, rotate);
        let start = self.start_position();
        let direction = if self.rng.gen::<bool>() { 1.0 } else { -1.0 };

        if let Some(position) = self.search(start, direction, &extent, true) {
            self.place(word, position, rotate, &extent, true);
            return Ok(true);
        }

        match self.config.overflow {
            OverflowPolicy::Extend => {
                let position = self
                    .search(start, direction, &extent, false)
                    .ok_or_else(|| LayoutError::unplaceable(&word.text, MAX_SPIRAL_STEPS))?;
                warn!(text = %word.text, size = word.size, "canvas full, placing word past its edge");
                self.place(word, position, rotate, &extent, false);
            }
            OverflowPolicy::Drop => {
                warn!(text = %word.text, size = word.size, "canvas full, dropping word");
                self.dropped.push(word);
            }
        }
        Ok(true)
    }

    /// Place up to `count` words, returning how many were handled
    pub fn advance(&mut self, count: usize) -> Result<usize, LayoutError> {
        let mut handled = 0;
        while handled < count && self.step()? {
            handled += 1;
        }
        Ok(handled)
    }

    /// Place all remaining words and return the finished layout
    pub fn finish(mut self) -> Result<CloudLayout, LayoutError> {
        while self.step()? {}

        let layout = CloudLayout {
            words: self.placed,
            canvas: self.config.canvas(),
            dropped: self.dropped,
            ticket: self.ticket,
        };
        debug!(
            placed = layout.words.len(),
            overflowed = layout.overflow_count(),
            dropped = layout.dropped.len(),
            "layout finished"
        );
        Ok(layout)
    }

    fn place(
        &mut self,
        word: Word,
        position: Point,
        rotate: f64,
        extent: &BoundingBox,
        within_canvas: bool,
    ) {
        debug!(text = %word.text, x = position.x, y = position.y, rotate, "placed word");
        self.placed.push(PlacedWord {
            word,
            position,
            rotate,
            bounds: extent.translate(position.x, position.y),
            within_canvas,
        });
    }

    fn pick_rotation(&mut self) -> f64 {
        match self.config.rotation {
            Rotation::Fixed(angle) => angle,
            Rotation::Random {
                min,
                max,
                orientations,
            } => {
                if orientations <= 1 {
                    return min;
                }
                let index = self.rng.gen_range(0..orientations);
                min + f64::from(index) * (max - min) / f64::from(orientations - 1)
            }
        }
    }

    /// Random integral start point in the central half of the canvas
    fn start_position(&mut self) -> Point {
        let x = self.config.width * (self.rng.gen::<f64>() - 0.5) / 2.0;
        let y = self.config.height * (self.rng.gen::<f64>() - 0.5) / 2.0;
        Point::new(x.trunc(), y.trunc())
    }

    /// Walk the spiral from `start` until `extent` fits
    ///
    /// A bounded search keeps the word inside the canvas and gives up once the
    /// spiral has moved a canvas diagonal away on both axes. An unbounded search
    /// ignores the canvas and only gives up at `MAX_SPIRAL_STEPS`.
    fn search(
        &self,
        start: Point,
        direction: f64,
        extent: &BoundingBox,
        bounded: bool,
    ) -> Option<Point> {
        let canvas = self.config.canvas();
        let area = canvas.centered_bounds();
        let max_delta = canvas.diagonal();
        let mut spiral = SpiralWalk::new(self.config.spiral, canvas);

        let mut t = 0.0;
        for _ in 0..MAX_SPIRAL_STEPS {
            let offset = spiral.next_offset(t);
            t += direction;

            if bounded && offset.x.abs().min(offset.y.abs()) >= max_delta {
                return None;
            }

            let position = Point::new(start.x + offset.x, start.y + offset.y);
            let candidate = extent.translate(position.x, position.y);
            if bounded && !area.contains_box(&candidate) {
                continue;
            }
            if !self.collides(&candidate) {
                return Some(position);
            }
        }

        None
    }

    fn collides(&self, candidate: &BoundingBox) -> bool {
        let padded = candidate.inflate(self.config.padding);
        self.placed.iter().any(|p| padded.intersects(&p.bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::config::Spiral;

    fn words(texts: &[(&str, f64)]) -> Vec<Word> {
        texts
            .iter()
            .map(|(t, s)| Word::new(*t, *s, "CAT"))
            .collect()
    }

    fn assert_no_overlap(layout: &CloudLayout, padding: f64) {
        for (i, a) in layout.words.iter().enumerate() {
            for b in &layout.words[i + 1..] {
                assert!(
                    !a.bounds.inflate(padding).intersects(&b.bounds),
                    "'{}' overlaps '{}'",
                    a.word.text,
                    b.word.text
                );
            }
        }
    }

    #[test]
    fn test_places_every_word() {
        let layout = SpiralLayout::new(CloudConfig::default(), 3)
            .run(words(&[("Alice", 30.0), ("Bob", 45.0), ("Acme", 22.0)]))
            .unwrap();
        assert_eq!(layout.words.len(), 3);
        assert!(layout.dropped.is_empty());
    }

    #[test]
    fn test_largest_word_placed_first() {
        let layout = SpiralLayout::new(CloudConfig::default(), 3)
            .run(words(&[("small", 20.0), ("large", 48.0), ("mid", 30.0)]))
            .unwrap();
        let order: Vec<_> = layout.words.iter().map(|w| w.word.text.as_str()).collect();
        assert_eq!(order, vec!["large", "mid", "small"]);
    }

    #[test]
    fn test_words_do_not_overlap() {
        let texts: Vec<(String, f64)> = (0..40)
            .map(|i| (format!("entity{i}"), 20.0 + (i % 30) as f64))
            .collect();
        let input = texts
            .iter()
            .map(|(t, s)| Word::new(t.clone(), *s, "CAT"))
            .collect();
        let layout = SpiralLayout::new(CloudConfig::default(), 11)
            .run(input)
            .unwrap();
        assert_no_overlap(&layout, 5.0);
    }

    #[test]
    fn test_words_inside_canvas_are_contained() {
        let layout = SpiralLayout::new(CloudConfig::default(), 5)
            .run(words(&[("Alice", 30.0), ("Bob", 45.0)]))
            .unwrap();
        let area = layout.canvas.centered_bounds();
        for word in &layout.words {
            assert!(word.within_canvas);
            assert!(area.contains_box(&word.bounds));
        }
    }

    #[test]
    fn test_positions_are_integral() {
        let layout = SpiralLayout::new(CloudConfig::default(), 9)
            .run(words(&[("Alice", 31.7), ("Bob", 24.2)]))
            .unwrap();
        for word in &layout.words {
            assert_eq!(word.position.x.fract(), 0.0);
            assert_eq!(word.position.y.fract(), 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let input = words(&[("Alice", 30.0), ("Bob", 45.0), ("Acme", 22.0)]);
        let a = SpiralLayout::new(CloudConfig::default(), 99)
            .run(input.clone())
            .unwrap();
        let b = SpiralLayout::new(CloudConfig::default(), 99)
            .run(input)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_overflow_extends_past_canvas() {
        let config = CloudConfig::new().with_size(120.0, 60.0);
        let input = words(&[
            ("Alpha", 40.0),
            ("Bravo", 40.0),
            ("Charlie", 40.0),
            ("Delta", 40.0),
        ]);
        let layout = SpiralLayout::new(config, 1).run(input).unwrap();
        assert_eq!(layout.words.len(), 4);
        assert!(layout.overflow_count() > 0);
        assert_no_overlap(&layout, 5.0);
    }

    #[test]
    fn test_overflow_drop_omits_words() {
        let config = CloudConfig::new()
            .with_size(120.0, 60.0)
            .with_overflow(OverflowPolicy::Drop);
        let input = words(&[
            ("Alpha", 40.0),
            ("Bravo", 40.0),
            ("Charlie", 40.0),
            ("Delta", 40.0),
        ]);
        let layout = SpiralLayout::new(config, 1).run(input).unwrap();
        assert_eq!(layout.words.len() + layout.dropped.len(), 4);
        assert!(!layout.dropped.is_empty());
        assert!(layout.words.iter().all(|w| w.within_canvas));
    }

    #[test]
    fn test_step_by_step_matches_run() {
        let input = words(&[("Alice", 30.0), ("Bob", 45.0), ("Acme", 22.0)]);
        let engine = SpiralLayout::new(CloudConfig::default(), 4);

        let mut job = engine.start(input.clone()).unwrap();
        assert_eq!(job.progress(), (0, 3));
        assert!(job.step().unwrap());
        assert_eq!(job.placed().len(), 1);
        assert_eq!(job.advance(10).unwrap(), 2);
        assert!(job.is_finished());
        assert!(!job.step().unwrap());

        assert_eq!(job.finish().unwrap(), engine.run(input).unwrap());
    }

    #[test]
    fn test_rectangular_spiral_places_without_overlap() {
        let config = CloudConfig::new().with_spiral(Spiral::Rectangular);
        let input: Vec<_> = (0..25)
            .map(|i| Word::new(format!("w{i}"), 20.0 + i as f64, "CAT"))
            .collect();
        let layout = SpiralLayout::new(config, 2).run(input).unwrap();
        assert_eq!(layout.words.len(), 25);
        assert_no_overlap(&layout, 5.0);
    }

    #[test]
    fn test_random_rotation_uses_configured_angles() {
        let config = CloudConfig::new().with_rotation(Rotation::Random {
            min: -60.0,
            max: 60.0,
            orientations: 5,
        });
        let input: Vec<_> = (0..20)
            .map(|i| Word::new(format!("w{i}"), 20.0, "CAT"))
            .collect();
        let layout = SpiralLayout::new(config, 8).run(input).unwrap();
        for word in &layout.words {
            assert!([-60.0, -30.0, 0.0, 30.0, 60.0].contains(&word.rotate));
        }
    }

    #[test]
    fn test_invalid_config_is_rejected_at_start() {
        let config = CloudConfig::new().with_size(-1.0, 10.0);
        let result = SpiralLayout::new(config, 0).start(vec![]);
        assert!(matches!(result, Err(LayoutError::InvalidConfig { .. })));
    }

    #[test]
    fn test_ticket_carried_to_layout() {
        let job = SpiralLayout::new(CloudConfig::default(), 0)
            .start(words(&[("Alice", 20.0)]))
            .unwrap()
            .with_ticket(7);
        assert_eq!(job.ticket(), 7);
        assert_eq!(job.finish().unwrap().ticket, 7);
    }
}
