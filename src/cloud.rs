//! Word cloud rendering pipeline
//!
//! `WordCloudRenderer` turns categorized entities into drawn words on a
//! `CloudTarget`. Rendering runs in two halves that can be driven separately:
//!
//! - [`WordCloudRenderer::begin`] flattens the entities, handles the empty
//!   case, prepares the canvas and returns a [`LayoutJob`];
//! - [`WordCloudRenderer::draw`] turns the finished [`CloudLayout`] into styled
//!   text elements.
//!
//! Each `begin` issues a new ticket on the target. A layout can only be drawn
//! while its ticket is still the target's latest, so completing an older
//! layout after a newer render has started is rejected instead of mixing the
//! two clouds.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use tracing::{debug, warn};

use crate::entities::CategorizedEntities;
use crate::layout::{CloudLayout, LayoutJob, SpiralLayout};
use crate::renderer::{DrawnWord, Scene, WordGroup};
use crate::target::CloudTarget;
use crate::words::flatten;
use crate::{RenderConfig, RenderError};

/// What a render call left in its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// No entities: the container is hidden and the fallback message shown
    Empty,
    /// Words were laid out and drawn
    Drawn {
        words: usize,
        /// Words placed past the canvas edge
        overflowed: usize,
        /// Words left out because the canvas was full
        dropped: usize,
    },
}

/// Renders categorized entities as a word cloud
#[derive(Debug, Clone, Default)]
pub struct WordCloudRenderer {
    config: RenderConfig,
}

impl WordCloudRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `entities` into `target`, seeding randomness from the configured seed
    pub fn render(
        &self,
        target: &mut CloudTarget,
        entities: &CategorizedEntities,
    ) -> Result<RenderOutcome, RenderError> {
        let mut rng = Pcg32::seed_from_u64(self.config.seed);
        self.render_with_rng(target, entities, &mut rng)
    }

    /// Render `entities` into `target` using the given random source
    pub fn render_with_rng<R: Rng + ?Sized>(
        &self,
        target: &mut CloudTarget,
        entities: &CategorizedEntities,
        rng: &mut R,
    ) -> Result<RenderOutcome, RenderError> {
        let Some(job) = self.begin(target, entities, rng)? else {
            return Ok(RenderOutcome::Empty);
        };

        let layout = job.finish()?;
        let overflowed = layout.overflow_count();
        let dropped = layout.dropped.len();
        let words = self.draw(target, layout)?;

        Ok(RenderOutcome::Drawn {
            words,
            overflowed,
            dropped,
        })
    }

    /// Prepare `target` and start laying out `entities`
    ///
    /// Returns `None` when there is nothing to draw; the target then shows the
    /// fallback message and no layout is started. Otherwise the target holds an
    /// empty canvas until the returned job is finished and drawn.
    pub fn begin<R: Rng + ?Sized>(
        &self,
        target: &mut CloudTarget,
        entities: &CategorizedEntities,
        rng: &mut R,
    ) -> Result<Option<LayoutJob>, RenderError> {
        if entities.is_empty() {
            let ticket = target.issue_ticket();
            debug!(ticket, "no entities to render");
            target.show_message(&self.config.empty_message);
            return Ok(None);
        }

        let cloud = &self.config.cloud;
        cloud.validate()?;

        let ticket = target.issue_ticket();
        let words = flatten(entities, cloud.font_size_range.clone(), rng);
        target.reset(
            Scene::new(cloud.width, cloud.height)
                .with_font_family(self.config.stylesheet.font_family.clone()),
        );

        debug!(
            ticket,
            words = words.len(),
            categories = entities.category_count(),
            "rendering word cloud"
        );
        let job = SpiralLayout::new(cloud.clone(), rng.gen())
            .start(words)?
            .with_ticket(ticket);
        Ok(Some(job))
    }

    /// Draw a finished layout into `target`
    ///
    /// Words are grouped around the canvas center, colored by category, and
    /// carry a `"<text> (<category>)"` tooltip. Returns the number of words drawn.
    pub fn draw(
        &self,
        target: &mut CloudTarget,
        layout: CloudLayout,
    ) -> Result<usize, RenderError> {
        let current = target.ticket();
        if layout.ticket != current {
            warn!(
                layout = layout.ticket,
                current, "discarding layout from a superseded render"
            );
            return Err(RenderError::StaleLayout {
                expected: current,
                found: layout.ticket,
            });
        }

        let scene = target
            .scene_mut()
            .ok_or(RenderError::NotStarted { ticket: current })?;

        let mut scale = self.config.stylesheet.color_scale();
        let words: Vec<DrawnWord> = layout
            .words
            .into_iter()
            .map(|placed| {
                let fill = scale.color(&placed.word.category);
                let title = placed.word.tooltip();
                DrawnWord {
                    text: placed.word.text,
                    category: placed.word.category,
                    position: placed.position,
                    rotate: placed.rotate,
                    font_size: placed.word.size,
                    fill,
                    title,
                }
            })
            .collect();

        let count = words.len();
        let origin = scene.center();
        scene.groups.push(WordGroup { origin, words });
        debug!(ticket = current, words = count, "drew word cloud");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{CloudConfig, Point, Size};

    fn entities() -> CategorizedEntities {
        CategorizedEntities::new()
            .with_category("PERSON", ["Alice", "Bob"])
            .with_category("ORG", ["Acme Corp"])
    }

    #[test]
    fn test_render_draws_every_item() {
        let renderer = WordCloudRenderer::default();
        let mut target = CloudTarget::new();
        let outcome = renderer.render(&mut target, &entities()).unwrap();
        assert_eq!(
            outcome,
            RenderOutcome::Drawn {
                words: 3,
                overflowed: 0,
                dropped: 0
            }
        );
        assert_eq!(target.drawn_words().len(), 3);
        assert!(target.is_visible());
        assert!(target.message().is_none());
    }

    #[test]
    fn test_begin_empty_starts_no_layout() {
        let renderer = WordCloudRenderer::default();
        let mut target = CloudTarget::new();
        let mut rng = Pcg32::seed_from_u64(0);
        let job = renderer
            .begin(&mut target, &CategorizedEntities::new(), &mut rng)
            .unwrap();
        assert!(job.is_none());
        assert!(!target.is_visible());
        assert_eq!(target.message(), Some(crate::target::EMPTY_MESSAGE));
    }

    #[test]
    fn test_begin_prepares_empty_canvas() {
        let renderer = WordCloudRenderer::default();
        let mut target = CloudTarget::new();
        let mut rng = Pcg32::seed_from_u64(0);
        let job = renderer
            .begin(&mut target, &entities(), &mut rng)
            .unwrap()
            .unwrap();
        let scene = target.scene().unwrap();
        assert_eq!((scene.width, scene.height), (600.0, 400.0));
        assert_eq!(scene.word_count(), 0);
        assert_eq!(job.ticket(), target.ticket());
    }

    #[test]
    fn test_draw_handmade_layout() {
        let renderer = WordCloudRenderer::default();
        let mut target = CloudTarget::new();
        let mut rng = Pcg32::seed_from_u64(0);
        let job = renderer
            .begin(&mut target, &entities(), &mut rng)
            .unwrap()
            .unwrap();
        let ticket = job.ticket();

        let word = crate::words::Word::new("Alice", 25.0, "PERSON");
        let layout = CloudLayout {
            words: vec![crate::layout::PlacedWord {
                bounds: crate::layout::measure::text_bounds(&word.text, word.size),
                word,
                position: Point::new(-12.0, 7.0),
                rotate: 0.0,
                within_canvas: true,
            }],
            canvas: Size::new(600.0, 400.0),
            dropped: vec![],
            ticket,
        };

        assert_eq!(renderer.draw(&mut target, layout).unwrap(), 1);
        let drawn = target.drawn_words();
        assert_eq!(drawn[0].title, "Alice (PERSON)");
        assert_eq!(drawn[0].fill, "#1f77b4");
        assert_eq!(drawn[0].position, Point::new(-12.0, 7.0));
        assert_eq!(target.scene().unwrap().groups[0].origin, Point::new(300.0, 200.0));
    }

    #[test]
    fn test_draw_rejects_stale_layout() {
        let renderer = WordCloudRenderer::default();
        let mut target = CloudTarget::new();
        let mut rng = Pcg32::seed_from_u64(0);

        let old = renderer
            .begin(&mut target, &entities(), &mut rng)
            .unwrap()
            .unwrap();
        renderer.render(&mut target, &entities()).unwrap();
        let before = target.clone();

        let err = renderer.draw(&mut target, old.finish().unwrap()).unwrap_err();
        assert!(matches!(err, RenderError::StaleLayout { .. }));
        assert_eq!(target, before);
    }

    #[test]
    fn test_empty_input_ignores_invalid_config() {
        let config = RenderConfig::new().with_cloud(CloudConfig::new().with_padding(-1.0));
        let renderer = WordCloudRenderer::new(config);
        let mut target = CloudTarget::new();
        let outcome = renderer
            .render(&mut target, &CategorizedEntities::new())
            .unwrap();
        assert_eq!(outcome, RenderOutcome::Empty);
        assert!(!target.is_visible());
        assert_eq!(target.message(), Some(crate::target::EMPTY_MESSAGE));
    }

    #[test]
    fn test_invalid_config_leaves_target_untouched() {
        let config = RenderConfig::new().with_cloud(CloudConfig::new().with_size(0.0, 0.0));
        let renderer = WordCloudRenderer::new(config);
        let mut target = CloudTarget::new();
        let result = renderer.render(&mut target, &entities());
        assert!(matches!(result, Err(RenderError::Layout(_))));
        assert_eq!(target, CloudTarget::new());
    }
}
