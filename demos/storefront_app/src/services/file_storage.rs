// demos/storefront_app/src/services/file_storage.rs

use anyhow::Context;
use async_trait::async_trait;
use cart_store::CartStorage;
use std::io::ErrorKind;
use std::path::PathBuf;

/// `CartStorage` keeping one file per key inside a data directory.
///
/// Writes go to a temporary file first and are renamed into place, so a
/// crash mid-write never leaves a truncated snapshot behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
  dir: PathBuf,
}

impl FileStorage {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into() }
  }

  /// Maps a storage key such as `@RocketShoes:cart` to `_RocketShoes_cart.json`.
  pub fn path_for(&self, key: &str) -> PathBuf {
    let file_name: String = key
      .chars()
      .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
      .collect();
    self.dir.join(format!("{}.json", file_name))
  }
}

#[async_trait]
impl CartStorage for FileStorage {
  async fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
    let path = self.path_for(key);
    match tokio::fs::read_to_string(&path).await {
      Ok(raw) => Ok(Some(raw)),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
      Err(e) => Err(e).with_context(|| format!("failed to read cart snapshot at {:?}", path)),
    }
  }

  async fn save(&self, key: &str, value: String) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(&self.dir)
      .await
      .with_context(|| format!("failed to create data directory at {:?}", self.dir))?;

    let path = self.path_for(key);
    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, value)
      .await
      .with_context(|| format!("failed to write cart snapshot to {:?}", tmp_path))?;
    tokio::fs::rename(&tmp_path, &path)
      .await
      .with_context(|| format!("failed to move cart snapshot into {:?}", path))?;
    Ok(())
  }
}
