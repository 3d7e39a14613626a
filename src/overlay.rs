use super::*;

fn centered(area: Rect, text_width: usize, text_height: usize) -> Rect {
  let desired_width =
    u16::try_from(text_width.saturating_add(2)).unwrap_or(u16::MAX);

  let desired_height =
    u16::try_from(text_height.saturating_add(2)).unwrap_or(u16::MAX);

  let width = desired_width.clamp(1, area.width.saturating_sub(2).max(1));
  let height = desired_height.clamp(1, area.height.saturating_sub(2).max(1));

  let x = area.x + area.width.saturating_sub(width) / 2;
  let y = area.y + area.height.saturating_sub(height) / 2;

  Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Draws `lines` in a bordered box centered over the whole frame.
pub(crate) fn draw_overlay(frame: &mut Frame, title: &str, lines: &[String]) {
  let width = lines
    .iter()
    .map(|line| line.chars().count())
    .chain([title.chars().count()])
    .max()
    .unwrap_or(0);

  let area = centered(frame.area(), width, lines.len());

  frame.render_widget(Clear, area);

  let text = lines
    .iter()
    .map(|line| Line::from(line.clone()))
    .collect::<Vec<_>>();

  frame.render_widget(
    Paragraph::new(text)
      .block(Block::default().title(title.to_string()).borders(Borders::ALL))
      .wrap(Wrap { trim: false }),
    area,
  );
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn centered_box_includes_borders() {
    assert_eq!(
      centered(Rect::new(0, 0, 80, 24), 10, 4),
      Rect::new(34, 9, 12, 6)
    );
  }

  #[test]
  fn centered_box_is_clamped_to_area() {
    let area = Rect::new(0, 0, 20, 5);

    let rect = centered(area, 100, 100);

    assert_eq!((rect.width, rect.height), (18, 3));
    assert_eq!((rect.x, rect.y), (1, 1));
  }
}
