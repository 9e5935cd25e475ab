use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
  #[serde(rename = "objectID")]
  pub(crate) object_id: String,
  pub(crate) title: Option<String>,
}
