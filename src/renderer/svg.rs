//! SVG generation from drawn scenes

use super::scene::{DrawnWord, Scene, WordGroup};
use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    width: f64,
    height: f64,
    hidden: bool,
    font_family: Option<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder for a canvas of the given size
    pub fn new(config: SvgConfig, width: f64, height: f64) -> Self {
        Self {
            config,
            width,
            height,
            hidden: false,
            font_family: None,
            elements: vec![],
            indent: 1,
        }
    }

    /// Render the root element with `display: none`
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn set_font_family(&mut self, font_family: Option<String>) {
        self.font_family = font_family;
    }

    fn indent_str(&self) -> String {
        self.config.whitespace().1.repeat(self.indent)
    }

    /// Open a group translated to `(x, y)`
    pub fn start_group(&mut self, x: f64, y: f64) {
        self.elements.push(format!(
            r#"{}<g class="{}" transform="translate({},{})">"#,
            self.indent_str(),
            self.config.class_name("words"),
            fmt_num(x),
            fmt_num(y)
        ));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Add a word as a centered text element with a tooltip
    pub fn add_word(&mut self, word: &DrawnWord) {
        self.elements.push(format!(
            r#"{}<text class="{}" data-category="{}" text-anchor="middle" transform="translate({},{})rotate({})" style="font-size: {}px; fill: {}">{}<title>{}</title></text>"#,
            self.indent_str(),
            self.config.class_name("word"),
            escape_xml(&word.category),
            fmt_num(word.position.x),
            fmt_num(word.position.y),
            fmt_num(word.rotate),
            fmt_num(word.font_size),
            escape_xml(&word.fill),
            escape_xml(&word.text),
            escape_xml(&word.title)
        ));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let (nl, _) = self.config.whitespace();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        let id_attr = self
            .config
            .element_id
            .as_ref()
            .map(|i| format!(r#" id="{}""#, escape_xml(i)))
            .unwrap_or_default();
        let font_attr = self
            .font_family
            .as_ref()
            .map(|f| format!(r#" font-family="{}""#, escape_xml(f)))
            .unwrap_or_default();
        let hidden_attr = if self.hidden {
            r#" style="display: none""#
        } else {
            ""
        };

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg"{} class="{}" width="{}" height="{}" viewBox="0 0 {} {}"{}{}>"#,
            id_attr,
            self.config.class_name("cloud"),
            fmt_num(self.width),
            fmt_num(self.height),
            fmt_num(self.width),
            fmt_num(self.height),
            font_attr,
            hidden_attr
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a scene to an SVG string
pub fn render_svg(scene: &Scene, config: &SvgConfig) -> String {
    render_scene(scene, config, false)
}

/// Render a scene, optionally marked hidden
pub(crate) fn render_scene(scene: &Scene, config: &SvgConfig, hidden: bool) -> String {
    let mut builder = SvgBuilder::new(config.clone(), scene.width, scene.height);
    builder.set_hidden(hidden);
    builder.set_font_family(scene.font_family.clone());

    for group in &scene.groups {
        render_group(group, &mut builder);
    }

    builder.build()
}

fn render_group(group: &WordGroup, builder: &mut SvgBuilder) {
    builder.start_group(group.origin.x, group.origin.y);
    for word in &group.words {
        builder.add_word(word);
    }
    builder.end_group();
}

/// Format a number for attribute output, rounded to two decimals
pub(crate) fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // avoid "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Escape special XML characters
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;

    fn word(text: &str, category: &str, x: f64, y: f64) -> DrawnWord {
        DrawnWord {
            text: text.to_string(),
            category: category.to_string(),
            position: Point::new(x, y),
            rotate: 0.0,
            font_size: 30.0,
            fill: "#1f77b4".to_string(),
            title: format!("{} ({})", text, category),
        }
    }

    fn scene(words: Vec<DrawnWord>) -> Scene {
        let mut scene = Scene::new(600.0, 400.0);
        scene.groups.push(WordGroup {
            origin: scene.center(),
            words,
        });
        scene
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(300.0), "300");
        assert_eq!(fmt_num(31.256), "31.26");
        assert_eq!(fmt_num(-12.0), "-12");
        assert_eq!(fmt_num(-0.0), "0");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("AT&T"), "AT&amp;T");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_render_single_word() {
        let svg = render_svg(
            &scene(vec![word("Alice", "PERSON", 10.0, -20.0)]),
            &SvgConfig::new().inline().compact(),
        );
        insta::assert_snapshot!(svg, @r##"<svg xmlns="http://www.w3.org/2000/svg" id="entityWordCloud" class="ec-cloud" width="600" height="400" viewBox="0 0 600 400"><g class="ec-words" transform="translate(300,200)"><text class="ec-word" data-category="PERSON" text-anchor="middle" transform="translate(10,-20)rotate(0)" style="font-size: 30px; fill: #1f77b4">Alice<title>Alice (PERSON)</title></text></g></svg>"##);
    }

    #[test]
    fn test_render_standalone_has_declaration() {
        let svg = render_svg(&scene(vec![]), &SvgConfig::default());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_render_escapes_text_and_title() {
        let svg = render_svg(
            &scene(vec![word("Smith & Sons", "ORG", 0.0, 0.0)]),
            &SvgConfig::default(),
        );
        assert!(svg.contains(">Smith &amp; Sons<title>Smith &amp; Sons (ORG)</title>"));
    }

    #[test]
    fn test_render_hidden() {
        let svg = render_scene(&Scene::new(600.0, 400.0), &SvgConfig::default(), true);
        assert!(svg.contains(r#"style="display: none""#));
        assert!(!svg.contains("<g"));
    }

    #[test]
    fn test_render_font_family() {
        let scene = Scene::new(600.0, 400.0).with_font_family(Some("serif".to_string()));
        let svg = render_svg(&scene, &SvgConfig::default());
        assert!(svg.contains(r#"font-family="serif""#));
    }

    #[test]
    fn test_without_prefix_and_id() {
        let config = SvgConfig::new().with_class_prefix("").with_element_id(None);
        let svg = render_svg(&scene(vec![word("Bob", "PERSON", 0.0, 0.0)]), &config);
        assert!(svg.contains(r#"class="word""#));
        assert!(!svg.contains("id="));
    }
}
