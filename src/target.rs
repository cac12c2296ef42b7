//! Render target: the visualization container and its sibling message area
//!
//! A `CloudTarget` is passed explicitly to the renderer. It owns the drawn
//! scene, the visibility of the visualization container, the text of the
//! message container shown when there is nothing to draw, and the ticket of
//! the most recent render call.

use crate::renderer::scene::{DrawnWord, Scene};
use crate::renderer::svg::{escape_xml, render_scene};
use crate::renderer::SvgConfig;

/// Message shown in place of the cloud when no entities were found
pub const EMPTY_MESSAGE: &str = "No entities found in the document.";

#[derive(Debug, Clone, PartialEq)]
pub struct CloudTarget {
    scene: Option<Scene>,
    visible: bool,
    message: Option<String>,
    ticket: u64,
}

impl CloudTarget {
    /// A fresh target: visible, empty, no message
    pub fn new() -> Self {
        Self {
            scene: None,
            visible: true,
            message: None,
            ticket: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Ticket of the most recent render call
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Words currently drawn in the container
    pub fn drawn_words(&self) -> Vec<&DrawnWord> {
        self.scene
            .as_ref()
            .map(|s| s.words().collect())
            .unwrap_or_default()
    }

    pub(crate) fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.scene.as_mut()
    }

    /// Start a new render call and return its ticket
    pub(crate) fn issue_ticket(&mut self) -> u64 {
        self.ticket += 1;
        self.ticket
    }

    /// Clear and hide the container, and show `message` instead
    pub(crate) fn show_message(&mut self, message: &str) {
        if let Some(scene) = self.scene.as_mut() {
            scene.groups.clear();
        }
        self.visible = false;
        self.message = Some(message.to_string());
    }

    /// Replace any previous drawing with an empty canvas and show it
    pub(crate) fn reset(&mut self, scene: Scene) {
        self.scene = Some(scene);
        self.visible = true;
        self.message = None;
    }

    /// The container's SVG, if a canvas has been set up
    pub fn svg(&self, config: &SvgConfig) -> Option<String> {
        self.scene
            .as_ref()
            .map(|scene| render_scene(scene, config, !self.visible))
    }

    /// HTML fragment of the container pair
    ///
    /// The SVG is embedded inline, so the XML declaration is always omitted.
    pub fn to_html(&self, config: &SvgConfig) -> String {
        let inline = config.inline();
        let (nl, indent) = config.whitespace();

        let mut html = String::from(r#"<div class="word-cloud-container">"#);
        html.push_str(nl);
        if let Some(svg) = self.svg(&inline) {
            for line in svg.lines() {
                html.push_str(indent);
                html.push_str(line);
                html.push_str(nl);
            }
        }
        if let Some(message) = &self.message {
            html.push_str(&format!(
                r#"{}<p class="text-muted">{}</p>{}"#,
                indent,
                escape_xml(message),
                nl
            ));
        }
        html.push_str("</div>");
        html
    }
}

impl Default for CloudTarget {
    fn default() -> Self {
        Self::new()
    }
}
