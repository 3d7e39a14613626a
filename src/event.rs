use super::*;

pub(crate) enum Event {
  Stats {
    request_id: u64,
    result: Result<Stats>,
  },
  Stories {
    request_id: u64,
    result: Result<Vec<Story>>,
  },
  Thread {
    request_id: u64,
    result: Result<Thread>,
  },
}
