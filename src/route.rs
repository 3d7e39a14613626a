use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route {
  Home,
  Thread { id: String },
}

impl Route {
  /// Matches `/` and `/thread/:id`. The id is a single non-empty path
  /// segment and is kept verbatim.
  pub(crate) fn parse(path: &str) -> Option<Self> {
    let trimmed = if path.len() > 1 {
      path.strip_suffix('/').unwrap_or(path)
    } else {
      path
    };

    if trimmed == "/" {
      return Some(Self::Home);
    }

    let id = trimmed.strip_prefix("/thread/")?;

    if id.is_empty() || id.contains('/') {
      return None;
    }

    Some(Self::Thread { id: id.to_string() })
  }
}

impl Display for Route {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Home => write!(f, "/"),
      Self::Thread { id } => write!(f, "/thread/{id}"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn thread(id: &str) -> Route {
    Route::Thread { id: id.to_string() }
  }

  #[test]
  fn parses_home() {
    assert_eq!(Route::parse("/"), Some(Route::Home));
  }

  #[test]
  fn parses_thread_id_verbatim() {
    assert_eq!(Route::parse("/thread/42"), Some(thread("42")));
    assert_eq!(Route::parse("/thread/a%20b"), Some(thread("a%20b")));
    assert_eq!(Route::parse("/thread/42/"), Some(thread("42")));
  }

  #[test]
  fn rejects_unknown_paths() {
    assert_eq!(Route::parse(""), None);
    assert_eq!(Route::parse("/story/42"), None);
    assert_eq!(Route::parse("/thread/"), None);
    assert_eq!(Route::parse("/thread/42/extra"), None);
  }

  #[test]
  fn display_round_trips_through_parse() {
    for route in [Route::Home, thread("42")] {
      assert_eq!(Route::parse(&route.to_string()), Some(route));
    }
  }
}
