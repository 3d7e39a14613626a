use super::*;

/// Lifecycle of the data a view requested on mount.
#[derive(Debug, Default)]
pub(crate) enum Fetch<T> {
  Failed,
  Loaded(T),
  #[default]
  Loading,
}

impl<T> Fetch<T> {
  pub(crate) fn is_error(&self) -> bool {
    matches!(self, Self::Failed)
  }

  pub(crate) fn is_loading(&self) -> bool {
    matches!(self, Self::Loading)
  }

  pub(crate) fn loaded(&self) -> Option<&T> {
    match self {
      Self::Loaded(value) => Some(value),
      _ => None,
    }
  }

  pub(crate) fn loaded_mut(&mut self) -> Option<&mut T> {
    match self {
      Self::Loaded(value) => Some(value),
      _ => None,
    }
  }

  pub(crate) fn resolve(&mut self, result: Result<T>) {
    *self = match result {
      Ok(value) => Self::Loaded(value),
      Err(error) => {
        tracing::warn!("fetch failed: {error:#}");
        Self::Failed
      }
    };
  }
}

#[cfg(test)]
mod tests {
  use {super::*, anyhow::anyhow};

  #[test]
  fn starts_loading() {
    let fetch = Fetch::<u8>::default();

    assert!(fetch.is_loading());
    assert!(!fetch.is_error());
    assert!(fetch.loaded().is_none());
  }

  #[test]
  fn resolve_success_clears_loading() {
    let mut fetch = Fetch::default();

    fetch.resolve(Ok(vec![1, 2]));

    assert!(!fetch.is_loading());
    assert!(!fetch.is_error());
    assert_eq!(fetch.loaded(), Some(&vec![1, 2]));
  }

  #[test]
  fn resolve_failure_sets_error_without_content() {
    let mut fetch = Fetch::<Vec<u8>>::default();

    fetch.resolve(Err(anyhow!("connection refused")));

    assert!(fetch.is_error());
    assert!(!fetch.is_loading());
    assert!(fetch.loaded().is_none());
    assert!(fetch.loaded_mut().is_none());
  }
}
