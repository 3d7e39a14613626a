use super::*;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum StoryKind {
  Comment,
  #[default]
  Story,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Story {
  #[serde(default)]
  pub(crate) author: String,
  #[serde(default)]
  pub(crate) descendants: u64,
  #[serde(deserialize_with = "deserialize_id")]
  pub(crate) id: String,
  #[serde(default)]
  pub(crate) is_hot: bool,
  #[serde(default, rename = "type")]
  pub(crate) kind: StoryKind,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) preview_image: Option<String>,
  #[serde(default)]
  pub(crate) score: u64,
  #[serde(default)]
  pub(crate) time: Option<i64>,
  #[serde(default)]
  pub(crate) title: String,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) url: Option<String>,
}

impl Story {
  pub(crate) fn link(&self) -> Option<&str> {
    self.url.as_deref().filter(|url| !url.trim().is_empty())
  }

  /// Relative post time, or nothing when the API omitted `time`.
  pub(crate) fn posted(&self, now: DateTime<Utc>) -> String {
    self
      .time
      .map(|time| relative_time(time, now))
      .unwrap_or_default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_camel_case_fields() {
    let story = serde_json::from_str::<Story>(
      r#"{
        "id": "42",
        "author": "alice",
        "title": "Short",
        "url": "https://x.test",
        "previewImage": "https://x.test/a.png",
        "score": 12,
        "time": 1700000000,
        "descendants": 3,
        "isHot": true,
        "type": "story"
      }"#,
    )
    .unwrap();

    assert_eq!(story.id, "42");
    assert_eq!(story.preview_image.as_deref(), Some("https://x.test/a.png"));
    assert_eq!(story.descendants, 3);
    assert!(story.is_hot);
    assert_eq!(story.kind, StoryKind::Story);
    assert_eq!(story.link(), Some("https://x.test"));
  }

  #[test]
  fn missing_fields_fall_back_to_defaults() {
    let story =
      serde_json::from_str::<Story>(r#"{"id": 7, "type": "comment"}"#)
        .unwrap();

    assert_eq!(story.id, "7");
    assert_eq!(story.title, "");
    assert_eq!(story.descendants, 0);
    assert_eq!(story.time, None);
    assert_eq!(story.posted(Utc::now()), "");
    assert!(!story.is_hot);
    assert_eq!(story.kind, StoryKind::Comment);
    assert_eq!(story.link(), None);
  }

  #[test]
  fn blank_url_is_not_a_link() {
    let story =
      serde_json::from_str::<Story>(r#"{"id": "1", "url": "  "}"#).unwrap();

    assert_eq!(story.link(), None);
  }
}
