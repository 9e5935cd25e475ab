use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self {
      client: reqwest::Client::new(),
    }
  }
}

impl Client {
  const ITEM_URL: &str = "https://hacker-news.firebaseio.com/v0/item";

  const SEARCH_URL: &str = "https://hn.algolia.com/api/v1/search_by_date";

  pub(crate) async fn fetch_comments(
    &self,
    thread_id: &str,
    limit: usize,
  ) -> Vec<CommentRecord> {
    let thread = match self.item(thread_id).await {
      Ok(Some(thread)) => thread,
      Ok(None) => {
        console::warn(&format!("thread {thread_id} does not exist"));
        return Vec::new();
      }
      Err(error) => {
        console::warn(&format!(
          "could not fetch thread {thread_id}: {error:#}"
        ));
        return Vec::new();
      }
    };

    let kids = thread.kids.unwrap_or_default();

    console::status(&format!(
      "found {} comments, fetching the first {}",
      kids.len(),
      limit.min(kids.len())
    ));

    let mut records = Vec::new();

    for (index, id) in kids.into_iter().take(limit).enumerate() {
      let position = index + 1;

      match self.item(&id.to_string()).await {
        Ok(Some(item)) => {
          if let Some(record) = CommentRecord::from_item(item) {
            console::status(&format!(
              "  [{position}/{limit}] fetched comment {}",
              record.id
            ));

            records.push(record);
          }
        }
        Ok(None) => {}
        Err(error) => {
          console::warn(&format!(
            "  [{position}/{limit}] skipped {id}: {error:#}"
          ));
        }
      }
    }

    records
  }

  pub(crate) async fn item(&self, id: &str) -> Result<Option<Item>> {
    Ok(
      self
        .client
        .get(format!("{}/{id}.json", Self::ITEM_URL))
        .send()
        .await?
        .json::<Option<Item>>()
        .await?,
    )
  }

  pub(crate) async fn locate_hiring_thread(
    &self,
  ) -> Result<Option<ThreadRef>> {
    let response = self
      .client
      .get(Self::SEARCH_URL)
      .query(&[
        ("query", HIRING_QUERY),
        ("tags", HIRING_TAGS),
        ("hitsPerPage", "1"),
      ])
      .send()
      .await?
      .json::<SearchResponse>()
      .await?;

    Ok(response.hits.into_iter().next().map(ThreadRef::from))
  }
}
