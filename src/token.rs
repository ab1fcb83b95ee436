/// Class marker carried by every ellipsis fragment.
pub const DOTS_MARKER: &str = "class=\"page-numbers dots\"";

/// A single entry in a rendered page-link sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkToken {
    Number {
        page: u32,
        url: String,
        is_current: bool,
    },
    Dots,
    Previous {
        url: String,
        text: String,
    },
    Next {
        url: String,
        text: String,
    },
}

/// Labels wrapped around the page number inside a numbered link.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberLabel<'a> {
    pub before: &'a str,
    pub after: &'a str,
    pub aria_current: &'a str,
}

impl LinkToken {
    /// Render the token to its markup fragment.
    pub fn render(&self, label: NumberLabel<'_>) -> String {
        let mut out = String::new();
        match self {
            LinkToken::Number {
                page,
                url,
                is_current,
            } => {
                if *is_current {
                    out.push_str("<span aria-current=\"");
                    push_escaped_attr(label.aria_current, &mut out);
                    out.push_str("\" class=\"page-numbers current\">");
                } else {
                    out.push_str("<a class=\"page-numbers\" href=\"");
                    push_escaped_attr(url, &mut out);
                    out.push_str("\">");
                }
                out.push_str(label.before);
                out.push_str(&page.to_string());
                out.push_str(label.after);
                out.push_str(if *is_current { "</span>" } else { "</a>" });
            }
            LinkToken::Dots => {
                out.push_str("<span ");
                out.push_str(DOTS_MARKER);
                out.push_str(">&hellip;</span>");
            }
            LinkToken::Previous { url, text } => {
                push_anchor("page-numbers prev", url, text, &mut out);
            }
            LinkToken::Next { url, text } => {
                push_anchor("page-numbers next", url, text, &mut out);
            }
        }
        out
    }
}

/// Whether a rendered fragment is an ellipsis marker.
pub fn is_dots(fragment: &str) -> bool {
    fragment.contains(DOTS_MARKER)
}

fn push_anchor(class: &str, url: &str, text: &str, out: &mut String) {
    out.push_str("<a class=\"");
    out.push_str(class);
    out.push_str("\" href=\"");
    push_escaped_attr(url, out);
    out.push_str("\">");
    // Link text is trusted markup (icon spans)
    out.push_str(text);
    out.push_str("</a>");
}

/// Escape a value for use inside a double-quoted HTML attribute.
pub(crate) fn push_escaped_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&#038;"),
            '"' => out.push_str("&#034;"),
            '\'' => out.push_str("&#039;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> NumberLabel<'static> {
        NumberLabel {
            aria_current: "page",
            ..Default::default()
        }
    }

    #[test]
    fn current_number() {
        let token = LinkToken::Number {
            page: 5,
            url: "/page/5/".to_string(),
            is_current: true,
        };
        assert_eq!(
            token.render(plain()),
            "<span aria-current=\"page\" class=\"page-numbers current\">5</span>"
        );
    }

    #[test]
    fn linked_number_with_labels() {
        let token = LinkToken::Number {
            page: 2,
            url: "/?paged=2&cat=4".to_string(),
            is_current: false,
        };
        let label = NumberLabel {
            before: "<span class=\"sr-only\">Page </span>",
            after: "",
            aria_current: "page",
        };
        assert_eq!(
            token.render(label),
            "<a class=\"page-numbers\" href=\"/?paged=2&#038;cat=4\"><span class=\"sr-only\">Page </span>2</a>"
        );
    }

    #[test]
    fn dots_are_detectable() {
        let dots = LinkToken::Dots.render(plain());
        assert_eq!(dots, "<span class=\"page-numbers dots\">&hellip;</span>");
        assert!(is_dots(&dots));
        assert!(!is_dots("<a class=\"page-numbers\" href=\"/\">1</a>"));
    }

    #[test]
    fn previous_and_next_anchors() {
        let prev = LinkToken::Previous {
            url: "/page/4/".to_string(),
            text: "Prev".to_string(),
        };
        let next = LinkToken::Next {
            url: "/page/6/".to_string(),
            text: "Next".to_string(),
        };
        assert_eq!(
            prev.render(plain()),
            "<a class=\"page-numbers prev\" href=\"/page/4/\">Prev</a>"
        );
        assert_eq!(
            next.render(plain()),
            "<a class=\"page-numbers next\" href=\"/page/6/\">Next</a>"
        );
    }
}
