use super::*;

const EXPAND_AFFORDANCE: &str = "expand to view replies";

#[derive(Debug)]
pub(crate) struct ThreadEntry {
  pub(crate) author: String,
  pub(crate) children: Vec<usize>,
  pub(crate) content: String,
  pub(crate) depth: usize,
  pub(crate) descendants: u64,
  pub(crate) expanded: bool,
  pub(crate) has_text: bool,
  pub(crate) id: String,
  pub(crate) parent: Option<usize>,
  pub(crate) score: u64,
  pub(crate) time: Option<i64>,
  pub(crate) title: String,
  pub(crate) url: Option<String>,
}

impl ThreadEntry {
  fn comment_lines(&self, width: u16, now: DateTime<Utc>) -> Vec<Line<'static>> {
    let depth_indent = "  ".repeat(self.depth.saturating_sub(1));
    let indent = format!("{BASE_INDENT}{depth_indent}");

    let mut header = vec![Span::raw(indent.clone())];

    if self.has_children() {
      header.push(Span::raw(if self.expanded { "[-] " } else { "[+] " }));
    }

    header.push(Span::styled(
      format!("@{}", self.author),
      Style::default().fg(Color::White),
    ));

    if let Some(time) = self.time {
      header.push(Span::styled(
        format!(" · {}", relative_time(time, now)),
        Style::default().fg(Color::DarkGray),
      ));
    }

    let mut lines = vec![Line::from(header)];

    lines.extend(Self::content_lines(&self.content, &indent, width));

    if let Some(url) = self.url.as_deref().filter(|_| self.depth > 0) {
      lines.push(Line::from(vec![
        Span::raw(indent.clone()),
        Span::styled(url.to_string(), Style::default().fg(Color::Blue)),
      ]));
    }

    if self.shows_expand_affordance() {
      lines.push(Line::from(vec![
        Span::raw(indent.clone()),
        Span::styled(
          EXPAND_AFFORDANCE,
          Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        ),
      ]));
    }

    lines.push(Line::from(Span::raw(indent)));

    lines
  }

  fn content_lines(
    content: &str,
    indent: &str,
    width: u16,
  ) -> Vec<Line<'static>> {
    let wrap_width = usize::from(width)
      .saturating_sub(indent.chars().count())
      .max(1);

    wrap_paragraphs(content, wrap_width)
      .into_iter()
      .map(|line| {
        Line::from(vec![
          Span::raw(indent.to_string()),
          Span::styled(line, Style::default().fg(Color::Gray)),
        ])
      })
      .collect()
  }

  pub(crate) fn has_children(&self) -> bool {
    !self.children.is_empty()
  }

  fn header_lines(&self, width: u16, now: DateTime<Utc>) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(
        self.title.clone(),
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      ),
    ])];

    if let Some(url) = &self.url {
      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(url.clone(), Style::default().fg(Color::Blue)),
      ]));
    }

    let meta = [
      Some(format_comments(self.descendants)),
      Some(format!("@{}", self.author)),
      Some(format_points(self.score)),
      self.time.map(|time| relative_time(time, now)),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    lines.push(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(meta, Style::default().fg(Color::DarkGray)),
    ]));

    if self.has_text && !self.content.is_empty() {
      lines.push(Line::from(Span::raw(BASE_INDENT)));
      lines.extend(Self::content_lines(&self.content, BASE_INDENT, width));
    }

    lines.push(Line::from(Span::raw(BASE_INDENT)));

    lines
  }

  pub(crate) fn is_root(&self) -> bool {
    self.depth == 0
  }

  pub(crate) fn lines(&self, width: u16, now: DateTime<Utc>) -> Vec<Line<'static>> {
    if self.is_root() {
      self.header_lines(width, now)
    } else {
      self.comment_lines(width, now)
    }
  }

  pub(crate) fn new(node: &Thread, depth: usize, parent: Option<usize>) -> Self {
    let (content, has_text) = match node.body() {
      NodeBody::Link { title, .. } => (decode_entities(title), false),
      NodeBody::Text(html) => (render_html(html), true),
    };

    Self {
      author: node.story.author.clone(),
      children: Vec::new(),
      content,
      depth,
      descendants: node.story.descendants,
      expanded: true,
      has_text,
      id: node.story.id.clone(),
      parent,
      score: node.story.score,
      time: node.story.time,
      title: decode_entities(&node.story.title),
      url: node.story.link().map(str::to_string),
    }
  }

  pub(crate) fn shows_expand_affordance(&self) -> bool {
    !self.is_root() && !self.expanded && self.has_children()
  }
}
