//! Previous/next page URL lookups for the list being paginated.

use crate::options::PagingState;

/// Source of the adjacent-page URLs.
pub trait Navigation {
    fn previous_page_url(&self) -> Option<String>;
    fn next_page_url(&self) -> Option<String>;
}

/// Navigation derived from a paging state.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    state: &'a PagingState,
}

impl<'a> PageContext<'a> {
    pub fn new(state: &'a PagingState) -> Self {
        Self { state }
    }
}

impl Navigation for PageContext<'_> {
    fn previous_page_url(&self) -> Option<String> {
        let current = self.state.current();
        (current > 1).then(|| self.state.page_url(current - 1))
    }

    fn next_page_url(&self) -> Option<String> {
        let current = self.state.current();
        (current < self.state.total()).then(|| self.state.page_url(current + 1))
    }
}

/// Navigation backed by a pair of closures.
pub struct FnNavigation<P, N> {
    previous: P,
    next: N,
}

impl<P, N> FnNavigation<P, N>
where
    P: Fn() -> Option<String>,
    N: Fn() -> Option<String>,
{
    pub fn new(previous: P, next: N) -> Self {
        Self { previous, next }
    }
}

impl<P, N> Navigation for FnNavigation<P, N>
where
    P: Fn() -> Option<String>,
    N: Fn() -> Option<String>,
{
    fn previous_page_url(&self) -> Option<String> {
        (self.previous)()
    }

    fn next_page_url(&self) -> Option<String> {
        (self.next)()
    }
}
