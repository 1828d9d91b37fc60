//! Rendering options configuration.

/// JSON output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Indented, one value per line
    #[default]
    Pretty,
}

/// Options for writing the content document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output format
    pub format: JsonFormat,

    /// Spaces per indentation level in pretty output
    pub indent: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: JsonFormat::Pretty,
            indent: 2,
        }
    }
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the indentation width for pretty output.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
