use super::*;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Stats {
  pub(crate) images_crawled: u64,
  pub(crate) images_found: u64,
  pub(crate) items_cached: u64,
  pub(crate) items_to_fetch: u64,
  pub(crate) last_startpage_update: Option<i64>,
}

impl Stats {
  pub(crate) fn lines(&self, now: DateTime<Utc>) -> Vec<String> {
    let last_update = self
      .last_startpage_update
      .map(|time| relative_time(time, now))
      .unwrap_or_default();

    vec![
      format!("items cached: {}", self.items_cached),
      format!("items to fetch: {}", self.items_to_fetch),
      format!("images crawled: {}", self.images_crawled),
      format!("images found: {}", self.images_found),
      format!("last startpage update: {last_update}"),
    ]
  }
}
