use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let now = Utc::now();

    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(usize::from(layout[1].height));

    let header = Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        HEADER_TITLE,
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
      Span::raw("  "),
      Span::styled(
        self.state.mode().path(),
        Style::default().fg(Color::DarkGray),
      ),
    ]);

    frame.render_widget(Paragraph::new(header), layout[0]);

    self.state.mode_mut().draw(frame, layout[1], now);

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.stats().draw(frame, now);
    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchStats { request_id } => {
        let client = self.client.clone();

        self.spawn(async move {
          Event::Stats {
            request_id,
            result: client.fetch_stats().await,
          }
        });
      }
      Effect::FetchStories { request_id } => {
        let client = self.client.clone();

        self.spawn(async move {
          Event::Stories {
            request_id,
            result: client.fetch_stories().await,
          }
        });
      }
      Effect::FetchThread { id, request_id } => {
        let client = self.client.clone();

        self.spawn(async move {
          Event::Thread {
            request_id,
            result: client.fetch_thread(&id).await,
          }
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          tracing::warn!(%url, %error, "could not open link");

          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  pub(crate) fn new(client: Client, path: &str) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let mut app = Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state: State::new(path),
    };

    for effect in app.state.take_effects() {
      app.execute_effect(effect);
    }

    app
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        self.process_pending_events();
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        self.process_pending_events();
        continue;
      };

      if key.kind != KeyEventKind::Press {
        self.process_pending_events();
        continue;
      }

      let command = if self.state.help().is_visible() {
        HelpView::handle_key(key)
      } else if self.state.stats().is_visible() {
        StatsView::handle_key(key)
      } else {
        let page = self.state.list_height().max(1);
        self.state.mode_mut().handle_key(key, page)
      };

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }

          self.process_pending_events();
        }
        Err(error) => {
          self.state.clear_pending_effects();
          self.state.set_transient_message(format!("error: {error}"));
          self.process_pending_events();
        }
      }
    }

    Ok(())
  }

  /// Runs a fetch on the runtime and posts its event back to the loop.
  fn spawn<F>(&self, task: F)
  where
    F: Future<Output = Event> + Send + 'static,
  {
    let sender = self.event_tx.clone();

    self.handle.spawn(async move {
      let _ = sender.send(task.await);
    });
  }
}

#[cfg(test)]
mod tests {
  use {super::*, ratatui::backend::TestBackend};

  fn app(path: &str) -> App {
    App::new(Client::new(Config::new("http://127.0.0.1:9")), path)
  }

  fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();

    terminal.draw(|frame| app.draw(frame)).unwrap();

    buffer_text(terminal.backend().buffer())
  }

  #[tokio::test]
  async fn header_shows_title_and_current_path() {
    let mut app = app("/thread/42");

    let rendered = render(&mut app);

    assert!(rendered.contains(HEADER_TITLE));
    assert!(rendered.contains("/thread/42"));
    assert!(rendered.contains(LOADING_PLACEHOLDER));
  }

  #[tokio::test]
  async fn unmatched_path_keeps_header_only() {
    let mut app = app("/story/42");

    let rendered = render(&mut app);

    assert!(rendered.contains(HEADER_TITLE));
    assert!(!rendered.contains(LOADING_PLACEHOLDER));
    assert!(!rendered.contains(ERROR_PLACEHOLDER));
  }

  #[tokio::test]
  async fn unreachable_api_resolves_to_error_state() {
    let mut app = app("/");

    let event = app.event_rx.recv().await.unwrap();

    app.state.handle_event(event);

    assert!(app.state.mode().is_error());
    assert!(render(&mut app).contains(ERROR_PLACEHOLDER));
  }
}
