use {
  anyhow::Context,
  app::App,
  arguments::Arguments,
  axum::{
    Router,
    extract::Path as AxumPath,
    http::header,
    response::IntoResponse,
    routing::get,
  },
  chrono::{DateTime, Datelike, Timelike, Utc},
  clap::Parser,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  fetch::Fetch,
  help_view::HelpView,
  list_view::ListView,
  mode::Mode,
  overlay::draw_overlay,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  route::Route,
  serde::{
    Deserialize, Deserializer,
    de::{self, DeserializeOwned, Unexpected},
  },
  serde_json::Value,
  state::State,
  stats::Stats,
  stats_view::StatsView,
  std::{
    backtrace::BacktraceStatus,
    fmt::{self, Display, Formatter},
    fs,
    io::{self, IsTerminal, Stdout},
    net::SocketAddr,
    path::{Path, PathBuf},
    process,
    sync::Mutex,
    time::{Duration, Instant},
  },
  story::Story,
  story_row::StoryRow,
  thread::{NodeBody, Thread},
  thread_entry::ThreadEntry,
  thread_view::ThreadView,
  tokio::{
    net::TcpListener,
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tower_http::{cors::CorsLayer, trace::TraceLayer},
  tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
  },
  transient_message::TransientMessage,
  utils::{
    decode_entities, deserialize_id, deserialize_optional_string,
    format_comments, format_points, parse_json, relative_time, render_html,
    truncate, wrap_paragraphs,
  },
};

#[cfg(test)]
use {ratatui::buffer::Buffer, story::StoryKind};

mod app;
mod arguments;
mod client;
mod command;
mod command_dispatch;
mod config;
mod effect;
mod event;
mod fetch;
mod help_view;
mod list_view;
mod logging;
mod mock;
mod mode;
mod overlay;
mod route;
mod state;
mod stats;
mod stats_view;
mod story;
mod story_row;
mod thread;
mod thread_entry;
mod thread_view;
mod transient_message;
mod utils;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_MOCK_PORT: u16 = 8080;

const HEADER_TITLE: &str = "EXTRABLATT";

const LIST_STATUS: &str = "↑/k up • ↓/j down • enter thread • o open link • r refresh • s stats • q quit • ? help";

const THREAD_STATUS: &str = "↑/k up • ↓/j down • ←/h collapse • →/l expand • enter toggle • o open link • esc back • ? help";

const UNMATCHED_STATUS: &str = "Nothing here • g home • esc back • q quit";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const STATS_TITLE: &str = "Stats";

const ERROR_PLACEHOLDER: &str = "Error...";
const LOADING_PLACEHOLDER: &str = "Loading...";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Stories:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first story
  end     jump to last story
  enter   open the thread for the selected story
  o       open the selected story's link in your browser
  esc     quit

Thread:
  ↑ / k   move selection up
  ↓ / j   move selection down
  ← / h   collapse replies or go to parent
  → / l   expand replies or go to first reply
  enter   toggle replies
  o       open the selected link in your browser
  esc     go back

Anywhere:
  g       go to the story list
  r       reload the current view
  s       toggle crawler stats
  q       quit
  ?       toggle this help
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

#[cfg(test)]
fn buffer_text(buffer: &Buffer) -> String {
  let width = usize::from(buffer.area.width);

  buffer
    .content
    .chunks(width.max(1))
    .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
    .collect::<Vec<_>>()
    .join("\n")
}

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  Arguments::parse().run().await
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    tracing::error!("{error:#}");

    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
