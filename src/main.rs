//! scrollnav: scroll-synced section navigation over a markdown document.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use scrollnav::config::{Config, IdStyle, NavConfig};
use scrollnav::document::MarkdownDocument;
use scrollnav::formats::markdown::MarkdownFormat;
use scrollnav::navbar::ScrollingNav;
use scrollnav::tui_host::{TuiHost, TITLE_HEIGHT};
use scrollnav::ui;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "scrollnav")]
#[command(about = "Scroll-synced section navigation with a sticky nav strip", long_about = None)]
struct Args {
    /// Markdown file to navigate
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Selector for tracked headings, e.g. "h2" or "h2,h3"
    #[arg(long, value_name = "SELECTOR")]
    heading_selector: Option<String>,

    /// Disable pinning the strip once scrolled past it
    #[arg(long)]
    no_sticky: bool,

    /// Minimum milliseconds between scroll recomputations
    #[arg(long, value_name = "MS")]
    throttle_ms: Option<u64>,

    /// Synthesize slugged identifiers instead of index-based ones
    #[arg(long)]
    slug_ids: bool,

    /// Start at the section with this identifier
    #[arg(long, value_name = "ID")]
    fragment: Option<String>,

    /// Print the section registry as JSON and exit
    #[arg(long)]
    dump_sections: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let cfg = Config::load();

    let nav_config = NavConfig {
        heading_selector: args
            .heading_selector
            .clone()
            .unwrap_or_else(|| cfg.heading_selector.clone()),
        container_selector: None,
        sticky: cfg.sticky && !args.no_sticky,
        id_style: if args.slug_ids || cfg.slug_ids {
            IdStyle::Slug
        } else {
            IdStyle::Indexed
        },
        throttle: Duration::from_millis(args.throttle_ms.unwrap_or(cfg.throttle_ms)),
        render_container: None,
    };

    let format = MarkdownFormat;
    let document = MarkdownDocument::load(&args.path, &format)?;
    let mut host = TuiHost::new(document);
    host.fragment = args.fragment;
    let mut nav = ScrollingNav::new(nav_config);

    if args.dump_sections {
        // Fixed viewport so the dumped trigger offsets are deterministic.
        host.viewport_height = 24;
        nav.attach(&mut host);
        let json = serde_json::to_string_pretty(nav.sections()).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    run_tui(host, nav)
}

fn run_tui(host: TuiHost, nav: ScrollingNav) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, host, nav);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

/// Rows available to the document pane for a given terminal height.
fn doc_height(total_rows: u16, fixed: bool) -> i64 {
    let chrome = 2 + if fixed { 0 } else { TITLE_HEIGHT };
    (i64::from(total_rows) - chrome).max(0)
}

#[allow(clippy::too_many_lines)]
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut host: TuiHost,
    mut nav: ScrollingNav,
) -> io::Result<()> {
    let format = MarkdownFormat;
    let mut selected: usize = 0;

    host.viewport_height = doc_height(terminal.size()?.height, host.fixed);
    nav.attach(&mut host);

    loop {
        if selected >= host.nav_items.len() {
            selected = host.nav_items.len().saturating_sub(1);
        }
        terminal.draw(|f| ui::draw(f, &mut host, selected))?;

        if !event::poll(Duration::from_millis(50))? {
            // Quiet frame: let the throttle's trailing edge fire.
            nav.on_tick(&mut host, Instant::now());
            continue;
        }

        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') => {
                    nav.detach();
                    return Ok(());
                }
                KeyCode::Up => {
                    host.scroll_by(-1);
                    nav.on_scroll(&mut host, Instant::now());
                }
                KeyCode::Down => {
                    host.scroll_by(1);
                    nav.on_scroll(&mut host, Instant::now());
                }
                KeyCode::PageUp => {
                    host.scroll_by(-host.viewport_height);
                    nav.on_scroll(&mut host, Instant::now());
                }
                KeyCode::PageDown => {
                    host.scroll_by(host.viewport_height);
                    nav.on_scroll(&mut host, Instant::now());
                }
                KeyCode::Home => {
                    host.scroll_offset = 0;
                    nav.on_scroll(&mut host, Instant::now());
                }
                KeyCode::End => {
                    host.scroll_offset = host.max_scroll();
                    nav.on_scroll(&mut host, Instant::now());
                }
                KeyCode::Left => {
                    selected = selected.saturating_sub(1);
                }
                KeyCode::Right => {
                    if selected + 1 < host.nav_items.len() {
                        selected += 1;
                    }
                }
                KeyCode::Enter => {
                    if let Some(item) = host.nav_items.get(selected) {
                        let id = item.identifier.clone();
                        nav.activate_item(&mut host, &id);
                    }
                }
                KeyCode::Char('r') => {
                    if host.document.reload(&format).is_ok() {
                        nav.on_mutation(&mut host);
                    }
                }
                _ => {}
            },
            Event::Resize(_, rows) => {
                host.viewport_height = doc_height(rows, host.fixed);
                nav.on_resize(&mut host);
            }
            _ => {}
        }
    }
}
