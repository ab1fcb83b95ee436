//! Page-link range generation.

use crate::options::{PaginationOptions, PagingState};
use crate::token::{LinkToken, NumberLabel, push_escaped_attr};

/// Produces the ordered page-link fragments for a paging state.
///
/// Implementations must keep the first-page link at index 0 and emit at most
/// one ellipsis on each side of the current page; the assembler anchors the
/// previous/next controls on those fixed positions.
pub trait LinkBuilder {
    fn build(&self, state: &PagingState, options: &PaginationOptions) -> Vec<String>;
}

impl<F> LinkBuilder for F
where
    F: Fn(&PagingState, &PaginationOptions) -> Vec<String>,
{
    fn build(&self, state: &PagingState, options: &PaginationOptions) -> Vec<String> {
        self(state, options)
    }
}

/// Built-in range generator: first/last pages, a window around the current
/// page, and an ellipsis for every hidden run in between.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginateLinks;

impl LinkBuilder for PaginateLinks {
    fn build(&self, state: &PagingState, options: &PaginationOptions) -> Vec<String> {
        let label = NumberLabel {
            before: &options.before_page_number,
            after: &options.after_page_number,
            aria_current: &options.aria_current,
        };
        let mut links: Vec<String> = tokens(state, options)
            .iter()
            .map(|token| token.render(label))
            .collect();

        if links.is_empty() || !options.prev_next {
            return links;
        }

        let current = state.current();
        if current > 1 {
            let url = state.page_url(current - 1);
            links.insert(0, host_anchor("prev page-numbers", &url, &options.prev_text));
        }
        if current < state.total() {
            let url = state.page_url(current + 1);
            links.push(host_anchor("next page-numbers", &url, &options.next_text));
        }
        links
    }
}

/// Numbered and ellipsis tokens for a paging state, left to right.
pub fn tokens(state: &PagingState, options: &PaginationOptions) -> Vec<LinkToken> {
    let total = state.total();
    if total < 2 {
        return Vec::new();
    }

    let current = state.current();
    let end_size = options.end_size.max(1);
    let mid_size = options.mid_size;

    let mut out = Vec::new();
    let mut dots = false;
    for n in 1..=total {
        if n == current {
            out.push(LinkToken::Number {
                page: n,
                url: state.page_url(n),
                is_current: true,
            });
            dots = true;
        } else if options.show_all
            || n <= end_size
            || (n.saturating_add(mid_size) >= current && n <= current.saturating_add(mid_size))
            || n.saturating_add(end_size) > total
        {
            out.push(LinkToken::Number {
                page: n,
                url: state.page_url(n),
                is_current: false,
            });
            dots = true;
        } else if dots {
            out.push(LinkToken::Dots);
            dots = false;
        }
    }
    out
}

fn host_anchor(class: &str, url: &str, text: &str) -> String {
    let mut out = String::from("<a class=\"");
    out.push_str(class);
    out.push_str("\" href=\"");
    push_escaped_attr(url, &mut out);
    out.push_str("\">");
    out.push_str(text);
    out.push_str("</a>");
    out
}
