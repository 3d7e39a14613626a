use super::*;

/// A thread flattened depth-first into entries that point at their parent
/// and children by index. Entry 0 is the root.
pub(crate) struct ThreadView {
  entries: Vec<ThreadEntry>,
  offset: usize,
  selected: Option<usize>,
}

impl ThreadView {
  pub(crate) fn collapse_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(entry) = self.entries.get_mut(selected)
    {
      if !entry.is_root() && entry.expanded && entry.has_children() {
        entry.expanded = false;
      } else if let Some(parent) = entry.parent {
        self.selected = Some(parent);
      }
    }

    self.ensure_selection_visible();
  }

  pub(crate) fn draw(&mut self, frame: &mut Frame, area: Rect, now: DateTime<Utc>) {
    let (visible, selected_pos) = self.visible_with_selection();

    let items: Vec<ListItem> = visible
      .iter()
      .map(|&idx| ListItem::new(self.entries[idx].lines(area.width, now)))
      .collect();

    let mut list_state = ListState::default()
      .with_selected(selected_pos)
      .with_offset(self.offset.min(selected_pos.unwrap_or(0)));

    let list = List::new(items)
      .highlight_style(Style::default().add_modifier(Modifier::BOLD))
      .highlight_symbol("");

    frame.render_stateful_widget(list, area, &mut list_state);

    self.offset = list_state.offset();
  }

  fn ensure_selection_visible(&mut self) {
    let mut current = self.selected;

    while let Some(idx) = current {
      if self.is_visible(idx) {
        self.selected = Some(idx);
        return;
      }

      current = self.entries.get(idx).and_then(|entry| entry.parent);
    }

    self.selected = self.visible_indexes().first().copied();
  }

  pub(crate) fn entries(&self) -> &[ThreadEntry] {
    &self.entries
  }

  pub(crate) fn expand_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(entry) = self.entries.get_mut(selected)
    {
      if !entry.has_children() {
        return;
      }

      if entry.expanded {
        if let Some(child) = entry.children.first().copied() {
          self.selected = Some(child);
        }
      } else {
        entry.expanded = true;
      }
    }

    self.ensure_selection_visible();
  }

  fn is_visible(&self, idx: usize) -> bool {
    let mut current = Some(idx);

    while let Some(i) = current {
      let Some(parent) = self.entries.get(i).and_then(|entry| entry.parent)
      else {
        break;
      };

      if self
        .entries
        .get(parent)
        .is_some_and(|parent_entry| !parent_entry.expanded)
      {
        return false;
      }

      current = Some(parent);
    }

    true
  }

  /// The URL to open for the selection: a link node's own URL, otherwise
  /// the root story's.
  pub(crate) fn link(&self) -> Option<&str> {
    self
      .selected_entry()
      .and_then(|entry| entry.url.as_deref())
      .or_else(|| self.root().and_then(|root| root.url.as_deref()))
  }

  fn move_by(&mut self, delta: isize) {
    let (visible, selected_pos) = self.visible_with_selection();

    if visible.is_empty() {
      self.selected = None;
      return;
    }

    let current = selected_pos.unwrap_or(0);
    let max_index = visible.len().saturating_sub(1);

    let target = if delta >= 0 {
      current.saturating_add(delta.unsigned_abs()).min(max_index)
    } else {
      current.saturating_sub(delta.unsigned_abs())
    };

    self.selected = Some(visible[target]);
  }

  pub(crate) fn new(thread: &Thread) -> Self {
    let mut entries: Vec<ThreadEntry> = Vec::new();

    let mut pending: Vec<(&Thread, Option<usize>, usize)> =
      vec![(thread, None, 0)];

    while let Some((node, parent, depth)) = pending.pop() {
      let idx = entries.len();

      entries.push(ThreadEntry::new(node, depth, parent));

      if let Some(parent) = parent {
        entries[parent].children.push(idx);
      }

      pending.extend(
        node
          .comments
          .iter()
          .rev()
          .map(|child| (child, Some(idx), depth.saturating_add(1))),
      );
    }

    Self {
      entries,
      offset: 0,
      selected: Some(0),
    }
  }

  pub(crate) fn page_down(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.move_by(isize::try_from(step).unwrap_or(isize::MAX));
  }

  pub(crate) fn page_up(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    self.move_by(-isize::try_from(step).unwrap_or(isize::MAX));
  }

  pub(crate) fn root(&self) -> Option<&ThreadEntry> {
    self.entries.first()
  }

  pub(crate) fn select_first(&mut self) {
    self.select_index_at(0);
  }

  fn select_index_at(&mut self, pos: usize) {
    let visible = self.visible_indexes();

    if visible.is_empty() {
      self.selected = None;
      return;
    }

    self.selected = Some(visible[pos.min(visible.len().saturating_sub(1))]);
  }

  pub(crate) fn select_last(&mut self) {
    self.select_index_at(usize::MAX);
  }

  pub(crate) fn select_next(&mut self) {
    self.move_by(1);
  }

  pub(crate) fn select_previous(&mut self) {
    self.move_by(-1);
  }

  pub(crate) fn selected_entry(&self) -> Option<&ThreadEntry> {
    self.selected.and_then(|idx| self.entries.get(idx))
  }

  pub(crate) fn toggle_selected(&mut self) {
    if let Some(selected) = self.selected
      && let Some(entry) = self.entries.get_mut(selected)
    {
      if entry.is_root() || !entry.has_children() {
        return;
      }

      entry.expanded = !entry.expanded;
    }

    self.ensure_selection_visible();
  }

  pub(crate) fn visible_indexes(&self) -> Vec<usize> {
    (0..self.entries.len())
      .filter(|&idx| self.is_visible(idx))
      .collect()
  }

  fn visible_with_selection(&self) -> (Vec<usize>, Option<usize>) {
    let visible = self.visible_indexes();

    let selected_pos = self
      .selected
      .and_then(|selected| visible.iter().position(|&idx| idx == selected));

    (visible, selected_pos)
  }
}
