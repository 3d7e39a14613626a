use super::*;

pub(crate) struct ListView {
  offset: usize,
  selected: usize,
  stories: Vec<Story>,
}

impl ListView {
  pub(crate) fn draw(&mut self, frame: &mut Frame, area: Rect, now: DateTime<Utc>) {
    let items: Vec<ListItem> = if self.stories.is_empty() {
      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw("No stories yet."),
      ]))]
    } else {
      self
        .stories
        .iter()
        .map(|story| ListItem::new(StoryRow::new(story, now).lines()))
        .collect()
    };

    let mut list_state = ListState::default()
      .with_selected(self.selected_index())
      .with_offset(self.offset());

    let list = List::new(items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, area, &mut list_state);

    self.set_offset(list_state.offset());
  }

  pub(crate) fn len(&self) -> usize {
    self.stories.len()
  }

  pub(crate) fn new(stories: Vec<Story>) -> Self {
    Self {
      offset: 0,
      selected: 0,
      stories,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    let selected = self.selected_index().unwrap_or(0);

    if self.stories.is_empty() {
      0
    } else {
      self.offset.min(selected)
    }
  }

  pub(crate) fn page_down(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.set_selected(self.selected.saturating_add(step));
  }

  pub(crate) fn page_up(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.set_selected(self.selected.saturating_sub(step));
  }

  pub(crate) fn select_first(&mut self) {
    self.set_selected(0);
  }

  pub(crate) fn select_last(&mut self) {
    self.set_selected(self.stories.len().saturating_sub(1));
  }

  pub(crate) fn select_next(&mut self) {
    self.set_selected(self.selected.saturating_add(1));
  }

  pub(crate) fn select_previous(&mut self) {
    self.set_selected(self.selected.saturating_sub(1));
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.stories.is_empty() {
      None
    } else {
      Some(self.selected.min(self.stories.len().saturating_sub(1)))
    }
  }

  pub(crate) fn selected_story(&self) -> Option<&Story> {
    self
      .selected_index()
      .and_then(|index| self.stories.get(index))
  }

  fn set_offset(&mut self, offset: usize) {
    if self.stories.is_empty() {
      self.offset = 0;
    } else {
      let max_offset = self.stories.len().saturating_sub(1);
      self.offset = offset.min(max_offset);
    }
  }

  fn set_selected(&mut self, index: usize) {
    if self.stories.is_empty() {
      self.selected = 0;
    } else {
      self.selected = index.min(self.stories.len().saturating_sub(1));
    }
  }

  pub(crate) fn stories(&self) -> &[Story] {
    &self.stories
  }
}

#[cfg(test)]
mod tests {
  use {super::*, ratatui::backend::TestBackend};

  fn story(id: &str) -> Story {
    Story {
      author: format!("user{id}"),
      descendants: 0,
      id: id.to_string(),
      is_hot: false,
      kind: StoryKind::Story,
      preview_image: None,
      score: 1,
      time: Some(1_700_000_000),
      title: format!("Story {id}"),
      url: None,
    }
  }

  fn view(count: usize) -> ListView {
    ListView::new((0..count).map(|i| story(&i.to_string())).collect())
  }

  #[test]
  fn selected_story_is_none_when_empty() {
    let view = ListView::new(Vec::new());
    assert_eq!(view.selected_index(), None);
    assert!(view.selected_story().is_none());
  }

  #[test]
  fn selection_is_clamped_to_bounds() {
    let mut view = view(3);

    view.select_previous();
    assert_eq!(view.selected_index(), Some(0));

    view.select_last();
    view.select_next();
    assert_eq!(view.selected_index(), Some(2));
    assert_eq!(view.selected_story().map(|s| s.id.as_str()), Some("2"));

    view.select_first();
    assert_eq!(view.selected_index(), Some(0));
  }

  #[test]
  fn paging_moves_by_page_minus_one() {
    let mut view = view(20);

    view.page_down(5);
    assert_eq!(view.selected_index(), Some(4));

    view.page_up(3);
    assert_eq!(view.selected_index(), Some(2));

    view.page_down(100);
    assert_eq!(view.selected_index(), Some(19));
  }

  #[test]
  fn offset_never_passes_selection() {
    let mut view = view(3);

    view.set_offset(10);
    assert_eq!(view.offset(), 0);

    view.select_last();
    view.set_offset(10);
    assert_eq!(view.offset(), 2);
  }

  #[test]
  fn draw_renders_rows_in_api_order() {
    let mut view = view(3);

    let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();

    terminal
      .draw(|frame| view.draw(frame, frame.area(), Utc::now()))
      .unwrap();

    let rendered = buffer_text(terminal.backend().buffer());

    let first = rendered.find("Story 0").unwrap();
    let second = rendered.find("Story 1").unwrap();
    let third = rendered.find("Story 2").unwrap();

    assert!(first < second && second < third);
    assert!(rendered.contains("@user1"));
  }
}
