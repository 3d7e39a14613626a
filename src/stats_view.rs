use super::*;

/// Overlay with the API's crawl statistics, fetched each time it opens.
#[derive(Default)]
pub(crate) struct StatsView {
  fetch: Option<Fetch<Stats>>,
  request_id: Option<u64>,
}

impl StatsView {
  pub(crate) fn draw(&self, frame: &mut Frame, now: DateTime<Utc>) {
    let Some(fetch) = &self.fetch else {
      return;
    };

    let lines = match fetch {
      Fetch::Failed => vec![ERROR_PLACEHOLDER.to_string()],
      Fetch::Loaded(stats) => stats.lines(now),
      Fetch::Loading => vec![LOADING_PLACEHOLDER.to_string()],
    };

    draw_overlay(frame, STATS_TITLE, &lines);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('s') | KeyCode::Esc => Command::HideStats,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    }
  }

  pub(crate) fn hide(&mut self) {
    self.fetch = None;
    self.request_id = None;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.fetch.is_some()
  }

  /// Applies a response if it answers the request made when the overlay was
  /// last opened. Returns false for stale responses.
  pub(crate) fn resolve(&mut self, request_id: u64, result: Result<Stats>) -> bool {
    if self.request_id != Some(request_id) {
      return false;
    }

    self.request_id = None;

    if let Some(fetch) = &mut self.fetch {
      fetch.resolve(result);
    }

    true
  }

  pub(crate) fn show(&mut self, request_id: u64) {
    self.fetch = Some(Fetch::Loading);
    self.request_id = Some(request_id);
  }

  pub(crate) fn stats(&self) -> Option<&Stats> {
    self.fetch.as_ref().and_then(Fetch::loaded)
  }
}
