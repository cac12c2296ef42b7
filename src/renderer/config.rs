//! SVG output options

/// Controls how a scene is written out as SVG markup
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Prepend an XML declaration so the output can be saved as a `.svg` file
    pub standalone: bool,

    /// One element per line, nested elements indented by two spaces
    pub pretty_print: bool,

    /// Prepended to the `cloud`, `words` and `word` class names
    pub class_prefix: String,

    /// `id` of the root `<svg>` element
    pub element_id: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            class_prefix: "ec-".to_string(),
            element_id: Some("entityWordCloud".to_string()),
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The same options for an SVG embedded in an HTML page
    pub fn inline(&self) -> Self {
        Self {
            standalone: false,
            ..self.clone()
        }
    }

    /// Write everything on a single line
    pub fn compact(mut self) -> Self {
        self.pretty_print = false;
        self
    }

    /// Use `prefix` for class names; an empty prefix leaves them bare
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn with_element_id(mut self, id: Option<&str>) -> Self {
        self.element_id = id.map(str::to_string);
        self
    }

    /// Class attribute value for one kind of cloud element
    pub fn class_name(&self, kind: &str) -> String {
        format!("{}{}", self.class_prefix, kind)
    }

    /// Line break and indentation unit, both empty in compact output
    pub(crate) fn whitespace(&self) -> (&'static str, &'static str) {
        if self.pretty_print {
            ("\n", "  ")
        } else {
            ("", "")
        }
    }
}
