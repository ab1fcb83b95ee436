//! Paging state and formatter options.

use serde::Deserialize;

/// Paging state of the list being navigated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingState {
    current: u32,
    total: u32,
    /// URL pattern; `%_%` is replaced by `format` (empty for page 1).
    pub base: String,
    /// Page segment; `%#%` is replaced by the page number.
    pub format: String,
    /// Appended verbatim to every generated URL.
    pub add_fragment: String,
}

impl PagingState {
    pub const DEFAULT_BASE: &'static str = "%_%";
    pub const DEFAULT_FORMAT: &'static str = "?paged=%#%";

    /// Create a paging state, clamping `current` into `1..=max(total, 1)`.
    pub fn new(current: u32, total: u32) -> Self {
        Self {
            current: current.clamp(1, total.max(1)),
            total,
            base: Self::DEFAULT_BASE.to_string(),
            format: Self::DEFAULT_FORMAT.to_string(),
            add_fragment: String::new(),
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.add_fragment = fragment.into();
        self
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// URL for page `n`.
    pub fn page_url(&self, n: u32) -> String {
        let segment = if n == 1 { "" } else { self.format.as_str() };
        let mut url = self
            .base
            .replace("%_%", segment)
            .replace("%#%", &n.to_string());
        url.push_str(&self.add_fragment);
        url
    }
}

/// How the formatted link body is shaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputShape {
    /// Fragments joined with newlines.
    #[default]
    Plain,
    /// An unordered list with one item per fragment.
    List,
    /// The raw fragment sequence. Formats as `Plain` when rendered to markup.
    Array,
}

/// Options for building and assembling pagination markup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaginationOptions {
    pub mid_size: u32,
    pub end_size: u32,
    pub show_all: bool,
    pub prev_next: bool,
    pub prev_text: String,
    pub next_text: String,
    pub screen_reader_text: String,
    #[serde(rename = "type")]
    pub shape: OutputShape,
    pub before_page_number: String,
    pub after_page_number: String,
    pub aria_current: String,
}

pub const DEFAULT_PREV_TEXT: &str = "<span class=\"fa fa-angle-double-left\" aria-hidden=\"true\"></span><span class=\"sr-only\">Previous</span>";
pub const DEFAULT_NEXT_TEXT: &str = "<span class=\"fa fa-angle-double-right\" aria-hidden=\"true\"></span><span class=\"sr-only\">Next</span>";

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            mid_size: 1,
            end_size: 1,
            show_all: false,
            prev_next: true,
            prev_text: DEFAULT_PREV_TEXT.to_string(),
            next_text: DEFAULT_NEXT_TEXT.to_string(),
            screen_reader_text: "Posts navigation".to_string(),
            shape: OutputShape::Plain,
            before_page_number: String::new(),
            after_page_number: String::new(),
            aria_current: "page".to_string(),
        }
    }
}

impl PaginationOptions {
    /// Options handed to the link builder: no prev/next, raw fragments.
    pub fn for_generation(&self) -> Self {
        Self {
            prev_next: false,
            shape: OutputShape::Array,
            ..self.clone()
        }
    }
}
