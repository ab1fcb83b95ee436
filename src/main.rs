use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use loop_pagination::{Config, OutputShape, PagingState};

#[derive(Clone, Copy, ValueEnum)]
enum Shape {
    Plain,
    List,
    Array,
}

impl From<Shape> for OutputShape {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Plain => OutputShape::Plain,
            Shape::List => OutputShape::List,
            Shape::Array => OutputShape::Array,
        }
    }
}

#[derive(Parser)]
#[command(name = "paginate")]
#[command(about = "Render pagination links for a paged list")]
struct Cli {
    /// Current page (1-based)
    #[arg(short, long, default_value_t = 1)]
    current: u32,

    /// Total number of pages
    #[arg(short, long)]
    total: u32,

    /// URL pattern; `%_%` is replaced by the page segment
    #[arg(long, default_value = PagingState::DEFAULT_BASE)]
    base: String,

    /// Page segment; `%#%` is replaced by the page number
    #[arg(long, default_value = PagingState::DEFAULT_FORMAT)]
    format: String,

    /// Fragment appended to every link
    #[arg(long, default_value = "")]
    fragment: String,

    /// Pages shown on each side of the current page
    #[arg(long)]
    mid_size: Option<u32>,

    /// Pages pinned at each end of the range
    #[arg(long)]
    end_size: Option<u32>,

    /// Show every page instead of collapsing ranges
    #[arg(long)]
    show_all: bool,

    /// Omit previous/next controls
    #[arg(long)]
    no_prev_next: bool,

    /// Output shape
    #[arg(short, long, value_enum)]
    shape: Option<Shape>,

    /// Accessible label for the navigation wrapper
    #[arg(long)]
    label: Option<String>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write markup to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::try_load(path)?,
        None => Config::compiled_default(),
    };

    let options = &mut config.pagination;
    if let Some(mid_size) = cli.mid_size {
        options.mid_size = mid_size;
    }
    if let Some(end_size) = cli.end_size {
        options.end_size = end_size;
    }
    if cli.show_all {
        options.show_all = true;
    }
    if cli.no_prev_next {
        options.prev_next = false;
    }
    if let Some(shape) = cli.shape {
        options.shape = shape.into();
    }
    if let Some(label) = cli.label {
        options.screen_reader_text = label;
    }

    let state = PagingState::new(cli.current, cli.total)
        .with_base(cli.base)
        .with_format(cli.format)
        .with_fragment(cli.fragment);

    let rendered = if config.pagination.shape == OutputShape::Array {
        let mut links = loop_pagination::pagination_links(&state, &config.pagination).join("\n");
        if !links.is_empty() {
            links.push('\n');
        }
        links
    } else {
        loop_pagination::render_pagination_with_config(&state, &config)
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, &rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Created {}", path.display());
        }
        None => {
            io::stdout()
                .write_all(rendered.as_bytes())
                .context("writing to stdout")?;
        }
    }

    Ok(())
}
