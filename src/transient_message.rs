use super::*;

/// A status-line message that reverts to `original` after a few seconds.
#[derive(Clone)]
pub(crate) struct TransientMessage {
  current: String,
  expires_at: Instant,
  original: String,
}

impl TransientMessage {
  const LIFETIME: Duration = Duration::from_secs(3);

  pub(crate) fn current(&self) -> &str {
    &self.current
  }

  pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
    now >= self.expires_at
  }

  pub(crate) fn new(current: String, original: String) -> Self {
    Self {
      current,
      expires_at: Instant::now() + Self::LIFETIME,
      original,
    }
  }

  pub(crate) fn original(&self) -> &str {
    &self.original
  }
}
