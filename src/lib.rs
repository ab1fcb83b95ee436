mod assemble;
mod config;
mod links;
mod navigation;
mod options;
mod template;
mod token;

pub use assemble::{PAGINATION_CLASS, assemble, assemble_links, format_links};
pub use config::{Config, ConfigError, WrapperConfig};
pub use links::{LinkBuilder, PaginateLinks, tokens};
pub use navigation::{FnNavigation, Navigation, PageContext};
pub use options::{
    DEFAULT_NEXT_TEXT, DEFAULT_PREV_TEXT, OutputShape, PaginationOptions, PagingState,
};
pub use template::{BUILTIN_TEMPLATE, WrapperTemplates, loop_navigation_wrapper, substitute};
pub use token::{DOTS_MARKER, LinkToken, NumberLabel, is_dots};

use std::io::{self, Write};

/// Render pagination markup for a paging state using the built-in link
/// builder and wrapper.
///
/// Returns an empty string when there is at most one page.
pub fn render_pagination(state: &PagingState, options: &PaginationOptions) -> String {
    render_pagination_with(
        state,
        options,
        &PaginateLinks,
        &PageContext::new(state),
        &WrapperTemplates::default(),
    )
}

/// Render pagination markup with options and wrapper from a config.
pub fn render_pagination_with_config(state: &PagingState, config: &Config) -> String {
    render_pagination_with(
        state,
        &config.pagination,
        &PaginateLinks,
        &PageContext::new(state),
        &config.wrapper.templates(),
    )
}

/// Render pagination markup with every collaborator supplied by the caller.
pub fn render_pagination_with(
    state: &PagingState,
    options: &PaginationOptions,
    builder: &impl LinkBuilder,
    navigation: &impl Navigation,
    templates: &WrapperTemplates,
) -> String {
    let links = builder.build(state, &options.for_generation());
    assemble(links, options, navigation, templates)
}

/// Page-link fragments with previous/next controls placed, unformatted.
pub fn pagination_links(state: &PagingState, options: &PaginationOptions) -> Vec<String> {
    let links = PaginateLinks.build(state, &options.for_generation());
    assemble_links(links, options, &PageContext::new(state))
}

/// Write pagination markup straight to `out`.
pub fn the_pagination(
    state: &PagingState,
    options: &PaginationOptions,
    out: &mut impl Write,
) -> io::Result<()> {
    out.write_all(render_pagination(state, options).as_bytes())
}
