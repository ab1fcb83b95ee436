//! Outer navigation wrapper templates.
//!
//! A template is a string with three positional slots: `%1$s` is the wrapper
//! class, `%2$s` the accessible label and `%3$s` the formatted link body.
//! Callers can override the template by registering filters; each filter
//! receives the template produced so far plus the wrapper class and returns
//! the template to use.

use std::fmt;

/// Template used when no filter is registered.
pub const BUILTIN_TEMPLATE: &str = "<nav class=\"navigation %1$s\" role=\"navigation\"><h2 class=\"screen-reader-text\">%2$s</h2><div class=\"nav-links\">%3$s</div></nav>";

/// Priority the built-in loop wrapper is registered at.
pub const DEFAULT_PRIORITY: i32 = 10;

type Filter = Box<dyn Fn(&str, &str) -> String + Send + Sync>;

/// Ordered registry of wrapper-template filters.
pub struct WrapperTemplates {
    filters: Vec<(i32, Filter)>,
}

impl WrapperTemplates {
    /// A registry with no filters; resolves to [`BUILTIN_TEMPLATE`].
    pub fn empty() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Register a filter. Lower priorities run first; equal priorities run in
    /// registration order.
    pub fn add_filter<F>(&mut self, priority: i32, filter: F) -> &mut Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        let at = self
            .filters
            .iter()
            .position(|(p, _)| *p > priority)
            .unwrap_or(self.filters.len());
        self.filters.insert(at, (priority, Box::new(filter)));
        self
    }

    /// Register a filter that always yields `template`.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        let template = template.into();
        self.add_filter(DEFAULT_PRIORITY + 1, move |_, _| template.clone());
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every filter over the built-in template for `class`.
    pub fn resolve(&self, class: &str) -> String {
        self.filters
            .iter()
            .fold(BUILTIN_TEMPLATE.to_string(), |template, (_, filter)| {
                filter(&template, class)
            })
    }
}

impl Default for WrapperTemplates {
    /// Registry with the loop navigation wrapper installed.
    fn default() -> Self {
        let mut templates = Self::empty();
        templates.add_filter(DEFAULT_PRIORITY, loop_navigation_wrapper);
        templates
    }
}

impl fmt::Debug for WrapperTemplates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapperTemplates")
            .field("filters", &self.filters.len())
            .finish()
    }
}

/// Loop navigation wrapper with an accessible `aria-label`.
///
/// The generic `pagination` class is rewritten to `posts-pagination` so the
/// nav does not pick up unrelated framework pagination styles.
pub fn loop_navigation_wrapper(_template: &str, class: &str) -> String {
    let wrapper_class = if class == "pagination" {
        "posts-pagination"
    } else {
        "%1$s"
    };
    format!(
        "<nav class=\"loop-navigation {wrapper_class}\" role=\"navigation\" aria-label=\"%2$s\">\n\t<div class=\"nav-links\">%3$s</div>\n</nav>\n"
    )
}

/// Fill `%N$s`, `%s` and `%%` placeholders in `template`.
///
/// Placeholders without a matching argument expand to nothing.
pub fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next_arg = 0;
    let mut rest = template;

    while let Some(at) = rest.find('%') {
        out.push_str(&rest[..at]);
        let spec = &rest[at + 1..];

        if let Some(after) = spec.strip_prefix('%') {
            out.push('%');
            rest = after;
        } else if let Some(after) = spec.strip_prefix('s') {
            out.push_str(args.get(next_arg).copied().unwrap_or_default());
            next_arg += 1;
            rest = after;
        } else {
            let digits = spec.bytes().take_while(u8::is_ascii_digit).count();
            match spec[digits..].strip_prefix("$s") {
                Some(after) if digits > 0 => {
                    let index: usize = spec[..digits].parse().unwrap_or(0);
                    let arg = index.checked_sub(1).and_then(|i| args.get(i));
                    out.push_str(arg.copied().unwrap_or_default());
                    rest = after;
                }
                _ => {
                    out.push('%');
                    rest = spec;
                }
            }
        }
    }
    out.push_str(rest);
    out
}
