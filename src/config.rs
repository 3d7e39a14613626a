use super::*;

/// Where the reader fetches its data from.
///
/// The base URL is not validated here: a missing scheme or unreachable
/// host surfaces as a failed fetch in the view that tried to use it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Config {
  base_url: String,
}

impl Config {
  pub(crate) fn base_url(&self) -> &str {
    &self.base_url
  }

  pub(crate) fn endpoint(&self, path: &str) -> String {
    format!("{}/{}", self.base_url, path.trim_start_matches('/'))
  }

  pub(crate) fn new(base_url: &str) -> Self {
    Self {
      base_url: base_url.trim().trim_end_matches('/').to_string(),
    }
  }
}
