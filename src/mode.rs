use super::*;

pub(crate) enum Mode {
  List(Fetch<ListView>),
  Thread { fetch: Fetch<ThreadView>, id: String },
  Unmatched { path: String },
}

impl Mode {
  pub(crate) fn draw(&mut self, frame: &mut Frame, area: Rect, now: DateTime<Utc>) {
    let placeholder = match self {
      Mode::List(Fetch::Loaded(view)) => {
        view.draw(frame, area, now);
        None
      }
      Mode::Thread {
        fetch: Fetch::Loaded(view),
        ..
      } => {
        view.draw(frame, area, now);
        None
      }
      Mode::List(Fetch::Loading) | Mode::Thread { fetch: Fetch::Loading, .. } => {
        Some(LOADING_PLACEHOLDER)
      }
      Mode::List(Fetch::Failed) | Mode::Thread { fetch: Fetch::Failed, .. } => {
        Some(ERROR_PLACEHOLDER)
      }
      Mode::Unmatched { .. } => None,
    };

    if let Some(text) = placeholder {
      frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw(BASE_INDENT), Span::raw(text)]))
          .style(Style::default().fg(Color::DarkGray)),
        area,
      );
    }
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent, page: usize) -> Command {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') => return Command::Quit,
      KeyCode::Char('?') => return Command::ShowHelp,
      KeyCode::Char('s') => return Command::ShowStats,
      KeyCode::Char('g') => return Command::Home,
      KeyCode::Char('r') => return Command::Refresh,
      _ => {}
    }

    match self {
      Mode::List(fetch) => match key.code {
        KeyCode::Esc => Command::Quit,
        KeyCode::Enter => Command::OpenThread,
        KeyCode::Char('o' | 'O') => Command::OpenLink,
        code => {
          if let Some(view) = fetch.loaded_mut() {
            match code {
              KeyCode::Down | KeyCode::Char('j') => view.select_next(),
              KeyCode::Up | KeyCode::Char('k') => view.select_previous(),
              KeyCode::PageDown => view.page_down(page),
              KeyCode::PageUp => view.page_up(page),
              KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
                view.page_down(page);
              }
              KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                view.page_up(page);
              }
              KeyCode::Home => view.select_first(),
              KeyCode::End => view.select_last(),
              _ => {}
            }
          }

          Command::None
        }
      },
      Mode::Thread { fetch, .. } => match key.code {
        KeyCode::Esc | KeyCode::Backspace => Command::Back,
        KeyCode::Char('o' | 'O') => Command::OpenLink,
        code => {
          if let Some(view) = fetch.loaded_mut() {
            match code {
              KeyCode::Down | KeyCode::Char('j') => view.select_next(),
              KeyCode::Up | KeyCode::Char('k') => view.select_previous(),
              KeyCode::PageDown => view.page_down(page),
              KeyCode::PageUp => view.page_up(page),
              KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
                view.page_down(page);
              }
              KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                view.page_up(page);
              }
              KeyCode::Left | KeyCode::Char('h') => view.collapse_selected(),
              KeyCode::Right | KeyCode::Char('l') => view.expand_selected(),
              KeyCode::Enter | KeyCode::Char(' ') => view.toggle_selected(),
              KeyCode::Home => view.select_first(),
              KeyCode::End => view.select_last(),
              _ => {}
            }
          }

          Command::None
        }
      },
      Mode::Unmatched { .. } => match key.code {
        KeyCode::Esc | KeyCode::Backspace => Command::Back,
        _ => Command::None,
      },
    }
  }

  pub(crate) fn is_error(&self) -> bool {
    match self {
      Mode::List(fetch) => fetch.is_error(),
      Mode::Thread { fetch, .. } => fetch.is_error(),
      Mode::Unmatched { .. } => false,
    }
  }

  pub(crate) fn is_loading(&self) -> bool {
    match self {
      Mode::List(fetch) => fetch.is_loading(),
      Mode::Thread { fetch, .. } => fetch.is_loading(),
      Mode::Unmatched { .. } => false,
    }
  }

  pub(crate) fn mount(route: &Route) -> Self {
    match route {
      Route::Home => Mode::List(Fetch::Loading),
      Route::Thread { id } => Mode::Thread {
        fetch: Fetch::Loading,
        id: id.clone(),
      },
    }
  }

  pub(crate) fn path(&self) -> String {
    match self {
      Mode::List(_) => Route::Home.to_string(),
      Mode::Thread { id, .. } => Route::Thread { id: id.clone() }.to_string(),
      Mode::Unmatched { path } => path.clone(),
    }
  }

  pub(crate) fn route(&self) -> Option<Route> {
    match self {
      Mode::List(_) => Some(Route::Home),
      Mode::Thread { id, .. } => Some(Route::Thread { id: id.clone() }),
      Mode::Unmatched { .. } => None,
    }
  }

  pub(crate) fn status(&self) -> &'static str {
    match self {
      Mode::List(_) => LIST_STATUS,
      Mode::Thread { .. } => THREAD_STATUS,
      Mode::Unmatched { .. } => UNMATCHED_STATUS,
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, ratatui::backend::TestBackend};

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  fn render(mode: &mut Mode) -> String {
    let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();

    terminal
      .draw(|frame| mode.draw(frame, frame.area(), Utc::now()))
      .unwrap();

    buffer_text(terminal.backend().buffer())
  }

  fn thread() -> Thread {
    serde_json::from_str(
      r#"{"id": "1", "title": "Root", "comments": [
        {"id": "2", "text": "first", "comments": [{"id": "3", "text": "reply"}]}
      ]}"#,
    )
    .unwrap()
  }

  #[test]
  fn failed_fetch_replaces_content_with_placeholder() {
    for mut mode in [
      Mode::List(Fetch::Failed),
      Mode::Thread {
        fetch: Fetch::Failed,
        id: "42".to_string(),
      },
    ] {
      assert!(mode.is_error());
      assert!(!mode.is_loading());

      let rendered = render(&mut mode);

      assert!(rendered.contains(ERROR_PLACEHOLDER));
      assert!(!rendered.contains(LOADING_PLACEHOLDER));
    }
  }

  #[test]
  fn loading_fetch_shows_loading_placeholder() {
    let mut mode = Mode::mount(&Route::Thread {
      id: "42".to_string(),
    });

    assert!(mode.is_loading());
    assert!(render(&mut mode).contains(LOADING_PLACEHOLDER));
  }

  #[test]
  fn unmatched_route_renders_nothing() {
    let mut mode = Mode::Unmatched {
      path: "/nowhere".to_string(),
    };

    assert_eq!(mode.route(), None);
    assert_eq!(mode.path(), "/nowhere");
    assert!(render(&mut mode).trim().is_empty());
  }

  #[test]
  fn list_keys_map_to_single_commands() {
    let mut mode = Mode::List(Fetch::Loaded(ListView::new(Vec::new())));

    assert_eq!(mode.handle_key(key(KeyCode::Enter), 10), Command::OpenThread);
    assert_eq!(
      mode.handle_key(key(KeyCode::Char('o')), 10),
      Command::OpenLink
    );
    assert_eq!(mode.handle_key(key(KeyCode::Esc), 10), Command::Quit);
    assert_eq!(mode.handle_key(key(KeyCode::Char('j')), 10), Command::None);
  }

  #[test]
  fn thread_enter_toggles_selected_reply() {
    let mut mode = Mode::Thread {
      fetch: Fetch::Loaded(ThreadView::new(&thread())),
      id: "1".to_string(),
    };

    assert_eq!(mode.handle_key(key(KeyCode::Down), 10), Command::None);
    assert_eq!(mode.handle_key(key(KeyCode::Enter), 10), Command::None);

    let Mode::Thread {
      fetch: Fetch::Loaded(view),
      ..
    } = &mode
    else {
      panic!("thread view should stay loaded");
    };

    assert_eq!(view.visible_indexes(), [0, 1]);

    assert_eq!(mode.handle_key(key(KeyCode::Esc), 10), Command::Back);
  }

  #[test]
  fn global_keys_apply_in_every_mode() {
    let mut mode = Mode::Unmatched {
      path: "/x".to_string(),
    };

    assert_eq!(mode.handle_key(key(KeyCode::Char('g')), 10), Command::Home);
    assert_eq!(mode.handle_key(key(KeyCode::Char('?')), 10), Command::ShowHelp);
    assert_eq!(mode.handle_key(key(KeyCode::Char('s')), 10), Command::ShowStats);
    assert_eq!(mode.handle_key(key(KeyCode::Char('q')), 10), Command::Quit);
  }
}
