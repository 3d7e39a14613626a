use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub(crate) struct Thread {
  #[serde(default)]
  pub(crate) comments: Vec<Thread>,
  #[serde(flatten)]
  pub(crate) story: Story,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) text: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeBody<'a> {
  Link { title: &'a str, url: &'a str },
  Text(&'a str),
}

impl Thread {
  /// A node with non-blank `text` is a text node even when it also carries a
  /// `url`. Otherwise a `url` makes it a link node, and anything else is an
  /// empty text node.
  pub(crate) fn body(&self) -> NodeBody<'_> {
    let text = self.text.as_deref().filter(|text| !text.trim().is_empty());

    match (text, self.story.link()) {
      (Some(text), _) => NodeBody::Text(text),
      (None, Some(url)) => NodeBody::Link {
        title: &self.story.title,
        url,
      },
      (None, None) => NodeBody::Text(""),
    }
  }

  pub(crate) fn has_comments(&self) -> bool {
    !self.comments.is_empty()
  }
}
