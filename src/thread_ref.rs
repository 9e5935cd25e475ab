use super::*;

#[derive(Debug)]
pub(crate) struct ThreadRef {
  pub(crate) id: String,
  pub(crate) title: String,
}

impl From<SearchHit> for ThreadRef {
  fn from(hit: SearchHit) -> Self {
    Self {
      id: hit.object_id,
      title: hit.title.unwrap_or_else(|| "(untitled)".to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_hit_copies_id_and_title() {
    let thread = ThreadRef::from(SearchHit {
      object_id: "41425910".to_string(),
      title: Some("Ask HN: Who is hiring? (September 2024)".to_string()),
    });

    assert_eq!(thread.id, "41425910");
    assert_eq!(thread.title, "Ask HN: Who is hiring? (September 2024)");
  }

  #[test]
  fn from_hit_defaults_a_missing_title() {
    let thread = ThreadRef::from(SearchHit {
      object_id: "1".to_string(),
      title: None,
    });

    assert_eq!(thread.title, "(untitled)");
  }
}
