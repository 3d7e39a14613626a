use super::*;

const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

const RENDER_WIDTH: usize = 10_000;

pub(crate) fn decode_entities(text: &str) -> String {
  html_escape::decode_html_entities(text).into_owned()
}

pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  deserialize_optional_string(deserializer)?.ok_or_else(|| {
    de::Error::invalid_value(Unexpected::Option, &"string or number")
  })
}

pub(crate) fn deserialize_optional_string<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) => Ok(Some(s)),
    Some(Value::Number(n)) => Ok(Some(n.to_string())),
    Some(Value::Bool(b)) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"string or number",
    )),
    Some(Value::Array(_)) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"string or number",
    )),
    Some(Value::Object(_)) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"string or number",
    )),
  }
}

pub(crate) fn format_comments(count: u64) -> String {
  match count {
    0 => "No comments".to_string(),
    1 => "1 comment".to_string(),
    _ => format!("{count} comments"),
  }
}

pub(crate) fn format_points(score: u64) -> String {
  match score {
    1 => "1 point".to_string(),
    _ => format!("{score} points"),
  }
}

fn months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
  let months = (i64::from(later.year()) - i64::from(earlier.year())) * 12
    + i64::from(later.month())
    - i64::from(earlier.month());

  let incomplete = (later.day(), later.num_seconds_from_midnight())
    < (earlier.day(), earlier.num_seconds_from_midnight());

  months - i64::from(incomplete)
}

/// Deserializes JSON without serde_json's nesting limit. Deeply nested
/// comment threads would otherwise fail at 64 levels, and the stack grows on
/// demand instead of overflowing.
pub(crate) fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
  let mut deserializer = serde_json::Deserializer::from_slice(bytes);

  deserializer.disable_recursion_limit();

  let value =
    T::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;

  deserializer.end()?;

  Ok(value)
}

fn plural(count: i64, unit: &str) -> String {
  if count == 1 {
    format!("1 {unit}")
  } else {
    format!("{count} {unit}s")
  }
}

/// Elapsed time between `time` (unix seconds) and `now`, phrased like
/// "about 3 hours ago" or "in 5 minutes".
pub(crate) fn relative_time(time: i64, now: DateTime<Utc>) -> String {
  let Some(then) = DateTime::from_timestamp(time, 0) else {
    return String::new();
  };

  let (earlier, later) = if then <= now { (then, now) } else { (now, then) };

  let minutes = rounded_div((later - earlier).num_seconds(), 60);

  let distance = if minutes < 2 {
    if minutes == 0 {
      "less than a minute".to_string()
    } else {
      "1 minute".to_string()
    }
  } else if minutes < 45 {
    plural(minutes, "minute")
  } else if minutes < 90 {
    "about 1 hour".to_string()
  } else if minutes < MINUTES_IN_DAY {
    format!("about {}", plural(rounded_div(minutes, 60), "hour"))
  } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
    "1 day".to_string()
  } else if minutes < MINUTES_IN_MONTH {
    plural(rounded_div(minutes, MINUTES_IN_DAY), "day")
  } else if minutes < MINUTES_IN_TWO_MONTHS {
    format!(
      "about {}",
      plural(rounded_div(minutes, MINUTES_IN_MONTH), "month")
    )
  } else {
    let months = months_between(earlier, later);

    if months < 12 {
      plural(rounded_div(minutes, MINUTES_IN_MONTH), "month")
    } else {
      let (years, remainder) = (months / 12, months % 12);

      if remainder < 3 {
        format!("about {}", plural(years, "year"))
      } else if remainder < 9 {
        format!("over {}", plural(years, "year"))
      } else {
        format!("almost {}", plural(years + 1, "year"))
      }
    }
  };

  if then <= now {
    format!("{distance} ago")
  } else {
    format!("in {distance}")
  }
}

/// Interprets comment markup into plain terminal text.
pub(crate) fn render_html(html: &str) -> String {
  html2text::from_read(html.as_bytes(), RENDER_WIDTH)
    .map(|text| text.trim_end().to_owned())
    .unwrap_or_else(|_| decode_entities(html))
}

fn rounded_div(value: i64, divisor: i64) -> i64 {
  (value + divisor / 2) / divisor
}

/// Cuts `text` longer than `max_chars` down to its first `max_chars - 4`
/// characters followed by `...`.
pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = text
    .chars()
    .take(max_chars.saturating_sub(4))
    .collect::<String>();

  result.push_str("...");

  result
}

pub(crate) fn wrap_paragraphs(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();

  for line in text.lines() {
    if line.trim().is_empty() {
      lines.push(String::new());
    } else {
      lines.extend(wrap_text(line, width));
    }
  }

  lines
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  if text.is_empty() {
    return Vec::new();
  }

  let mut lines = Vec::new();
  let mut current = String::new();
  let mut current_width = 0;

  for word in text.split_whitespace() {
    let word_width = word.chars().count();

    if current.is_empty() {
      current.push_str(word);
      current_width = word_width;
    } else if current_width + 1 + word_width <= width {
      current.push(' ');
      current.push_str(word);
      current_width += 1 + word_width;
    } else {
      lines.push(current);
      current = word.to_string();
      current_width = word_width;
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }

  if lines.is_empty() {
    vec![text.to_string()]
  } else {
    lines
  }
}
