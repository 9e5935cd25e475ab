use super::*;

pub(crate) fn format_timestamp(epoch_seconds: i64) -> Option<String> {
  Local
    .timestamp_opt(epoch_seconds, 0)
    .single()
    .map(|time| time.format("%Y-%m-%dT%H:%M:%S").to_string())
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

#[cfg(test)]
mod tests {
  use {super::*, chrono::NaiveDateTime};

  #[test]
  fn format_timestamp_round_trips_through_local_time() {
    let formatted = format_timestamp(1_700_000_000).unwrap();

    let parsed =
      NaiveDateTime::parse_from_str(&formatted, "%Y-%m-%dT%H:%M:%S").unwrap();

    let expected = Local
      .timestamp_opt(1_700_000_000, 0)
      .unwrap()
      .naive_local();

    assert_eq!(parsed, expected);
  }

  #[test]
  fn format_timestamp_handles_the_epoch() {
    let formatted = format_timestamp(0).unwrap();

    assert!(
      NaiveDateTime::parse_from_str(&formatted, "%Y-%m-%dT%H:%M:%S").is_ok()
    );
  }

  #[test]
  fn format_timestamp_rejects_out_of_range_values() {
    assert_eq!(format_timestamp(i64::MAX), None);
  }

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }

  #[test]
  fn truncate_preserves_exact_length_strings() {
    assert_eq!(truncate("exact", 5), "exact");
  }
}
