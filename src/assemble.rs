use tracing::debug;

use crate::navigation::Navigation;
use crate::options::{OutputShape, PaginationOptions};
use crate::template::{WrapperTemplates, substitute};
use crate::token::{LinkToken, NumberLabel, is_dots};

/// Class passed to the wrapper templates.
pub const PAGINATION_CLASS: &str = "posts-pagination";

/// Reinsert the previous/next controls next to the ellipses.
///
/// The left ellipsis, when present, always sits at index 1 right after the
/// first-page link; the previous link goes directly after it. The right
/// ellipsis always sits at `len - 2`; the next link goes directly before it.
/// A side without an ellipsis gets no control.
pub fn assemble_links(
    mut links: Vec<String>,
    options: &PaginationOptions,
    navigation: &impl Navigation,
) -> Vec<String> {
    if !options.prev_next || links.is_empty() {
        return links;
    }

    let label = NumberLabel::default();

    if links.get(1).is_some_and(|link| is_dots(link)) {
        if let Some(url) = navigation.previous_page_url() {
            let text = options.prev_text.clone();
            links.insert(2, LinkToken::Previous { url, text }.render(label));
        }
    }

    // Computed after the left insertion
    if let Some(next_to_last) = links.len().checked_sub(2) {
        if is_dots(&links[next_to_last]) {
            if let Some(url) = navigation.next_page_url() {
                let text = options.next_text.clone();
                links.insert(next_to_last, LinkToken::Next { url, text }.render(label));
            }
        }
    }

    links
}

/// Join the fragments in the requested shape.
pub fn format_links(links: &[String], shape: OutputShape) -> String {
    match shape {
        OutputShape::List => {
            let mut out = String::from("<ul class='page-numbers'>\n\t<li>");
            out.push_str(&links.join("</li>\n\t<li>"));
            out.push_str("</li>\n</ul>\n");
            out
        }
        OutputShape::Plain | OutputShape::Array => links.join("\n"),
    }
}

/// Assemble raw page links into the final wrapped markup.
///
/// Returns an empty string when there is nothing to paginate.
pub fn assemble(
    links: Vec<String>,
    options: &PaginationOptions,
    navigation: &impl Navigation,
    templates: &WrapperTemplates,
) -> String {
    if links.is_empty() {
        debug!("no page links; skipping pagination wrapper");
        return String::new();
    }

    let raw_len = links.len();
    let links = assemble_links(links, options, navigation);
    debug!(
        raw = raw_len,
        assembled = links.len(),
        shape = ?options.shape,
        "assembled page links"
    );

    let body = format_links(&links, options.shape);
    if body.is_empty() {
        return String::new();
    }

    let template = templates.resolve(PAGINATION_CLASS);
    if template.is_empty() {
        debug!("wrapper template resolved empty; returning bare links");
        return body;
    }

    substitute(
        &template,
        &[
            PAGINATION_CLASS,
            options.screen_reader_text.as_str(),
            body.as_str(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::navigation::FnNavigation;

    const DOTS: &str = "<span class=\"page-numbers dots\">&hellip;</span>";

    fn options() -> PaginationOptions {
        PaginationOptions {
            prev_text: "Prev".to_string(),
            next_text: "Next".to_string(),
            ..Default::default()
        }
    }

    fn both() -> FnNavigation<impl Fn() -> Option<String>, impl Fn() -> Option<String>> {
        FnNavigation::new(|| Some("/p/4/".to_string()), || Some("/p/6/".to_string()))
    }

    fn links(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn inserts_both_controls_next_to_ellipses() {
        let raw = links(&["1", DOTS, "4", "5", "6", DOTS, "10"]);
        let out = assemble_links(raw, &options(), &both());
        assert_eq!(
            out,
            [
                "1",
                DOTS,
                "<a class=\"page-numbers prev\" href=\"/p/4/\">Prev</a>",
                "4",
                "5",
                "6",
                "<a class=\"page-numbers next\" href=\"/p/6/\">Next</a>",
                DOTS,
                "10",
            ]
        );
    }

    #[test]
    fn no_left_ellipsis_means_no_previous() {
        let raw = links(&["1", "2", "3", DOTS, "10"]);
        let out = assemble_links(raw, &options(), &both());
        assert_eq!(out.len(), 6);
        assert_eq!(out[3], "<a class=\"page-numbers next\" href=\"/p/6/\">Next</a>");
        assert_eq!(out[4], DOTS);
    }

    #[test]
    fn no_right_ellipsis_means_no_next() {
        let raw = links(&["1", DOTS, "8", "9", "10"]);
        let out = assemble_links(raw, &options(), &both());
        assert_eq!(out.len(), 6);
        assert_eq!(out[2], "<a class=\"page-numbers prev\" href=\"/p/4/\">Prev</a>");
        assert_eq!(out[5], "10");
    }

    #[test]
    fn missing_urls_omit_controls() {
        let nav = FnNavigation::new(|| None, || None);
        let raw = links(&["1", DOTS, "5", DOTS, "10"]);
        assert_eq!(assemble_links(raw.clone(), &options(), &nav), raw);
    }

    #[test]
    fn prev_next_off_leaves_links_untouched() {
        let calls = Cell::new(0);
        let nav = FnNavigation::new(
            || {
                calls.set(calls.get() + 1);
                Some("/prev".to_string())
            },
            || {
                calls.set(calls.get() + 1);
                Some("/next".to_string())
            },
        );
        let raw = links(&["1", DOTS, "5", DOTS, "10"]);
        let opts = PaginationOptions {
            prev_next: false,
            ..options()
        };
        assert_eq!(assemble_links(raw.clone(), &opts, &nav), raw);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn lookups_only_run_when_an_ellipsis_qualifies() {
        let calls = Cell::new(0);
        let nav = FnNavigation::new(
            || {
                calls.set(calls.get() + 1);
                Some("/prev".to_string())
            },
            || {
                calls.set(calls.get() + 1);
                Some("/next".to_string())
            },
        );
        let raw = links(&["1", "2", "3"]);
        assemble_links(raw, &options(), &nav);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn single_link_is_left_alone() {
        let out = assemble_links(links(&[DOTS]), &options(), &both());
        assert_eq!(out, [DOTS]);
    }

    #[test]
    fn plain_shape_joins_with_newlines() {
        let raw = links(&["a", "b", "c"]);
        assert_eq!(format_links(&raw, OutputShape::Plain), "a\nb\nc");
        assert_eq!(format_links(&raw, OutputShape::Array), "a\nb\nc");
    }

    #[test]
    fn list_shape_wraps_each_fragment() {
        let raw = links(&["a", "b"]);
        assert_eq!(
            format_links(&raw, OutputShape::List),
            "<ul class='page-numbers'>\n\t<li>a</li>\n\t<li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn empty_links_render_nothing() {
        let templates = WrapperTemplates::default();
        assert_eq!(assemble(Vec::new(), &options(), &both(), &templates), "");
    }

    #[test]
    fn wraps_body_with_resolved_template() {
        let templates = WrapperTemplates::empty()
            .with_template("<nav class=\"%1$s\" aria-label=\"%2$s\">%3$s</nav>");
        let opts = PaginationOptions {
            screen_reader_text: "Results".to_string(),
            ..options()
        };
        assert_eq!(
            assemble(links(&["a", "b"]), &opts, &both(), &templates),
            "<nav class=\"posts-pagination\" aria-label=\"Results\">a\nb</nav>"
        );
    }

    #[test]
    fn empty_template_returns_bare_body() {
        let templates = WrapperTemplates::empty().with_template("");
        assert_eq!(assemble(links(&["a", "b"]), &options(), &both(), &templates), "a\nb");
    }

    #[test]
    fn formatting_is_repeatable() {
        let raw = links(&["1", DOTS, "4", "5", "6", DOTS, "10"]);
        let templates = WrapperTemplates::default();
        let first = assemble(raw.clone(), &options(), &both(), &templates);
        let second = assemble(raw, &options(), &both(), &templates);
        assert_eq!(first, second);
    }
}
