use super::*;

pub(crate) struct State {
  help: HelpView,
  history: Vec<Route>,
  list_height: usize,
  message: String,
  mode: Mode,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  pending_view: Option<u64>,
  stats: StatsView,
  transient_message: Option<TransientMessage>,
}

impl State {
  /// Consumes the response for the mounted view's request. Anything else was
  /// requested by a view that has since been left or re-mounted.
  fn accept(&mut self, request_id: u64) -> bool {
    if self.pending_view == Some(request_id) {
      self.pending_view = None;
      true
    } else {
      tracing::debug!(request_id, "discarding stale response");
      false
    }
  }

  fn allocate_request_id(&mut self) -> u64 {
    let request_id = self.next_request_id;
    self.next_request_id = self.next_request_id.wrapping_add(1);
    request_id
  }

  fn back(&mut self) {
    if let Some(route) = self.history.pop() {
      self.mount(route);
    }
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Back => self.back(),
      Command::HideHelp => {
        self.help.hide(&mut self.message, self.mode.status());
      }
      Command::HideStats => self.stats.hide(),
      Command::Home => self.home(),
      Command::None => {}
      Command::OpenLink => self.open_link(),
      Command::OpenThread => self.open_thread(),
      Command::Quit => should_exit = true,
      Command::Refresh => self.refresh(),
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::ShowStats => self.show_stats(),
    }

    Ok(CommandDispatch {
      effects: self.take_effects(),
      should_exit,
    })
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Stats { request_id, result } => {
        if !self.stats.resolve(request_id, result) {
          tracing::debug!(request_id, "discarding stale stats response");
        }
      }
      Event::Stories { request_id, result } => {
        if !self.accept(request_id) {
          return;
        }

        if let Mode::List(fetch) = &mut self.mode {
          fetch.resolve(result.map(ListView::new));
        }
      }
      Event::Thread { request_id, result } => {
        if !self.accept(request_id) {
          return;
        }

        if let Mode::Thread { fetch, .. } = &mut self.mode {
          fetch.resolve(result.map(|thread| ThreadView::new(&thread)));
        }
      }
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  fn home(&mut self) {
    if self.mode.route() != Some(Route::Home) {
      self.navigate(Route::Home);
    }
  }

  pub(crate) fn list_height(&self) -> usize {
    self.list_height
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn mode(&self) -> &Mode {
    &self.mode
  }

  pub(crate) fn mode_mut(&mut self) -> &mut Mode {
    &mut self.mode
  }

  /// Activates the view for `route` and issues its one fetch. Any response
  /// still in flight for the previous view becomes stale.
  fn mount(&mut self, route: Route) {
    let request_id = self.allocate_request_id();

    tracing::info!(route = %route, request_id, "mounting view");

    self.pending_view = Some(request_id);
    self.mode = Mode::mount(&route);

    self.pending_effects.push(match route {
      Route::Home => Effect::FetchStories { request_id },
      Route::Thread { id } => Effect::FetchThread { id, request_id },
    });

    if !self.help.is_visible() {
      self.message = self.mode.status().into();
    }
  }

  fn navigate(&mut self, route: Route) {
    if let Some(current) = self.mode.route() {
      self.history.push(current);
    }

    self.mount(route);
  }

  pub(crate) fn new(path: &str) -> Self {
    let mut state = Self {
      help: HelpView::new(),
      history: Vec::new(),
      list_height: 0,
      message: String::new(),
      mode: Mode::Unmatched {
        path: path.to_string(),
      },
      next_request_id: 0,
      pending_effects: Vec::new(),
      pending_view: None,
      stats: StatsView::default(),
      transient_message: None,
    };

    match Route::parse(path) {
      Some(route) => state.mount(route),
      None => {
        tracing::warn!(path, "no view for path");
        state.message = UNMATCHED_STATUS.into();
      }
    }

    state
  }

  fn open_link(&mut self) {
    let link = match &self.mode {
      Mode::List(fetch) => fetch
        .loaded()
        .and_then(ListView::selected_story)
        .map(|story| story.link().map(str::to_string)),
      Mode::Thread { fetch, .. } => fetch
        .loaded()
        .map(|view| view.link().map(str::to_string)),
      Mode::Unmatched { .. } => None,
    };

    match link {
      Some(Some(url)) => self.pending_effects.push(Effect::OpenUrl { url }),
      Some(None) => {
        self.set_transient_message("No link for this story".into());
      }
      None => {}
    }
  }

  fn open_thread(&mut self) {
    let Mode::List(fetch) = &self.mode else {
      return;
    };

    let Some(story) = fetch.loaded().and_then(ListView::selected_story) else {
      return;
    };

    let route = Route::Thread {
      id: story.id.clone(),
    };

    self.navigate(route);
  }

  fn refresh(&mut self) {
    if let Some(route) = self.mode.route() {
      self.mount(route);
    }
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  fn show_stats(&mut self) {
    let request_id = self.allocate_request_id();

    self.stats.show(request_id);

    self.pending_effects.push(Effect::FetchStats { request_id });
  }

  pub(crate) fn stats(&self) -> &StatsView {
    &self.stats
  }

  pub(crate) fn take_effects(&mut self) -> Vec<Effect> {
    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn update_transient_message(&mut self) {
    let Some(transient) = self.transient_message.clone() else {
      return;
    };

    if self.message != transient.current() {
      self.transient_message = None;
    } else if transient.is_expired_at(Instant::now()) {
      self.message = transient.original().to_string();
      self.transient_message = None;
    }
  }
}
