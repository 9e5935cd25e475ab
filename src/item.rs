use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Item {
  pub(crate) by: Option<String>,
  pub(crate) dead: Option<bool>,
  pub(crate) deleted: Option<bool>,
  pub(crate) id: u64,
  pub(crate) kids: Option<Vec<u64>>,
  pub(crate) text: Option<String>,
  pub(crate) time: Option<i64>,
}
