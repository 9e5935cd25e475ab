use super::*;

#[derive(Debug)]
pub(crate) struct Archive {
  path: PathBuf,
}

impl Archive {
  fn ensure_parent_dir(path: &Path) -> Result {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    Ok(())
  }

  pub(crate) fn new(path: PathBuf) -> Self {
    Self { path }
  }

  pub(crate) fn output_path() -> Result<PathBuf> {
    if let Ok(path) = env::var("HIRING_OUTPUT_FILE") {
      return Ok(PathBuf::from(path));
    }

    Ok(env::current_dir()?.join("data").join("raw_jobs.json"))
  }

  pub(crate) fn path(&self) -> &Path {
    &self.path
  }

  pub(crate) fn write(&self, records: &[CommentRecord]) -> Result {
    Self::ensure_parent_dir(&self.path)?;

    let serialized = serde_json::to_vec_pretty(records)?;

    fs::write(&self.path, serialized)?;

    Ok(())
  }
}
