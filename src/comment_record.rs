use super::*;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct CommentRecord {
  pub(crate) content: String,
  pub(crate) id: u64,
  pub(crate) time: String,
  pub(crate) user: String,
}

impl CommentRecord {
  pub(crate) fn from_item(item: Item) -> Option<Self> {
    if item.deleted.unwrap_or(false) || item.dead.unwrap_or(false) {
      return None;
    }

    let content = item.text.filter(|text| !text.is_empty())?;

    let time = format_timestamp(item.time?)?;

    Some(Self {
      content,
      id: item.id,
      time,
      user: item.by.unwrap_or_else(|| "unknown".to_string()),
    })
  }
}
