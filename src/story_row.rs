use super::*;

const AUTHOR_LIMIT: usize = 15;
const HOT_MARKER: &str = "🔥";
const PLACEHOLDER_MARKER: &str = "[ ]";
const PREVIEW_MARKER: &str = "[▣]";
const TITLE_LIMIT: usize = 50;

/// Display text for one story in the list.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct StoryRow {
  pub(crate) comments: String,
  pub(crate) handle: String,
  pub(crate) hot: bool,
  pub(crate) preview: bool,
  pub(crate) timestamp: String,
  pub(crate) title: String,
}

impl StoryRow {
  pub(crate) fn lines(&self) -> Vec<Line<'static>> {
    let preview = if self.preview {
      PREVIEW_MARKER
    } else {
      PLACEHOLDER_MARKER
    };

    let mut title = vec![
      Span::raw(BASE_INDENT),
      Span::styled(preview, Style::default().fg(Color::DarkGray)),
      Span::raw(" "),
    ];

    if self.hot {
      title.push(Span::raw(HOT_MARKER));
      title.push(Span::raw(" "));
    }

    title.push(Span::styled(
      self.title.clone(),
      Style::default().fg(Color::White),
    ));

    let detail = [&self.handle, &self.timestamp, &self.comments]
      .into_iter()
      .filter(|part| !part.is_empty())
      .map(String::as_str)
      .collect::<Vec<_>>()
      .join(" · ");

    vec![
      Line::from(title),
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(" ".repeat(PREVIEW_MARKER.chars().count() + 1)),
        Span::styled(detail, Style::default().fg(Color::DarkGray)),
      ]),
      Line::from(Span::raw(BASE_INDENT)),
    ]
  }

  pub(crate) fn new(story: &Story, now: DateTime<Utc>) -> Self {
    Self {
      comments: format_comments(story.descendants),
      handle: format!("@{}", truncate(&story.author, AUTHOR_LIMIT)),
      hot: story.is_hot,
      preview: story
        .preview_image
        .as_deref()
        .is_some_and(|image| !image.trim().is_empty()),
      timestamp: story.posted(now),
      title: truncate(&decode_entities(&story.title), TITLE_LIMIT),
    }
  }
}
