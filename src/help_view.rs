use super::*;

pub(crate) struct HelpView {
  message_backup: Option<String>,
  visible: bool,
}

impl HelpView {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.visible {
      return;
    }

    let lines = HELP_TEXT.lines().map(str::to_string).collect::<Vec<_>>();

    draw_overlay(frame, HELP_TITLE, &lines);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Command::HideHelp,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    }
  }

  pub(crate) fn hide(&mut self, message: &mut String, fallback: &str) {
    if !self.visible {
      return;
    }

    *message = self
      .message_backup
      .take()
      .unwrap_or_else(|| fallback.into());

    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  pub(crate) fn new() -> Self {
    Self {
      message_backup: None,
      visible: false,
    }
  }

  pub(crate) fn show(&mut self, message: &mut String) {
    if self.visible {
      return;
    }

    self.message_backup = Some(message.clone());

    *message = HELP_STATUS.into();

    self.visible = true;
  }
}

#[cfg(test)]
mod tests {
  use {super::*, ratatui::backend::TestBackend};

  #[test]
  fn show_and_hide_restore_status_message() {
    let mut help = HelpView::new();
    let mut message = LIST_STATUS.to_string();

    help.show(&mut message);
    assert!(help.is_visible());
    assert_eq!(message, HELP_STATUS);

    help.hide(&mut message, THREAD_STATUS);
    assert!(!help.is_visible());
    assert_eq!(message, LIST_STATUS);
  }

  #[test]
  fn overlay_fits_inside_small_terminals() {
    let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();

    let mut help = HelpView::new();
    help.show(&mut String::new());

    terminal.draw(|frame| help.draw(frame)).unwrap();

    assert!(buffer_text(terminal.backend().buffer()).contains("Help"));
  }
}
