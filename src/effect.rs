#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  FetchStats { request_id: u64 },
  FetchStories { request_id: u64 },
  FetchThread { id: String, request_id: u64 },
  OpenUrl { url: String },
}
