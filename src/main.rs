use {
  anyhow::Context,
  archive::Archive,
  chrono::{Local, TimeZone},
  client::Client,
  comment_record::CommentRecord,
  crossterm::style::Stylize,
  item::Item,
  outcome::Outcome,
  search_hit::SearchHit,
  search_response::SearchResponse,
  serde::{Deserialize, Serialize},
  std::{
    env, fs,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process,
  },
  thread_ref::ThreadRef,
  utils::{format_timestamp, truncate},
};

mod archive;
mod client;
mod comment_record;
mod console;
mod item;
mod outcome;
mod search_hit;
mod search_response;
mod thread_ref;
mod utils;

const COMMENT_LIMIT: usize = 20;

const HIRING_QUERY: &str = "Ask HN: Who is hiring?";

const HIRING_TAGS: &str = "story,author_whoishiring";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn comment_limit() -> usize {
  env::var("HIRING_COMMENT_LIMIT")
    .ok()
    .and_then(|value| value.parse().ok())
    .unwrap_or(COMMENT_LIMIT)
}

async fn run() -> Result<Outcome> {
  let client = Client::default();

  console::status("searching for the latest hiring thread...");

  let thread = match client.locate_hiring_thread().await {
    Ok(Some(thread)) => thread,
    Ok(None) => {
      console::warn("no hiring thread found");
      return Ok(Outcome::NoThread);
    }
    Err(error) => {
      console::warn(&format!("search failed: {error:#}"));
      return Ok(Outcome::NoThread);
    }
  };

  console::status(&format!(
    "target thread: {} (id {})",
    truncate(&thread.title, 60),
    thread.id
  ));

  let records = client.fetch_comments(&thread.id, comment_limit()).await;

  if records.is_empty() {
    console::warn("no valid comments fetched");
    return Ok(Outcome::NoComments);
  }

  let archive = Archive::new(Archive::output_path()?);

  archive
    .write(&records)
    .with_context(|| format!("could not write {}", archive.path().display()))?;

  console::status(&format!(
    "saved {} comments to {}",
    records.len(),
    archive.path().display()
  ));

  Ok(Outcome::Saved(records.len()))
}

#[tokio::main]
async fn main() {
  match run().await {
    Ok(outcome) => process::exit(outcome.code()),
    Err(error) => {
      console::error(&format!("{error:#}"));
      process::exit(3);
    }
  }
}
