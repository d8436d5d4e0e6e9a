//! 文件存储处理器
//!
//! 每个集合对应 `<data_dir>/<collection>.json`。写入先落到临时文件再重命名。

use async_trait::async_trait;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, info};

use super::{Record, RecordHandler, codec};
use crate::errors::{GradebookError, Result};

pub struct FileHandler<T> {
    path: PathBuf,
    pretty: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> FileHandler<T> {
    /// 打开集合文件，首次使用时创建目录并初始化为空集合
    pub async fn open(data_dir: impl AsRef<Path>, pretty: bool) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir).await.map_err(|e| {
            error!("Failed to create data directory {}: {}", data_dir.display(), e);
            GradebookError::file_operation(format!(
                "create data directory {}: {e}",
                data_dir.display()
            ))
        })?;

        let handler = Self {
            path: data_dir.join(format!("{}.json", T::COLLECTION)),
            pretty,
            _marker: PhantomData,
        };

        match fs::metadata(&handler.path).await {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("Initializing empty collection at {}", handler.path.display());
                handler.replace_all(Vec::new()).await?;
            }
            Err(e) => {
                error!("Failed to inspect {}: {}", handler.path.display(), e);
                return Err(GradebookError::file_operation(format!(
                    "inspect {}: {e}",
                    handler.path.display()
                )));
            }
        }

        Ok(handler)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait]
impl<T: Record> RecordHandler<T> for FileHandler<T> {
    async fn read_all(&self) -> Result<Vec<T>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} missing, reading as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                error!("Failed to read {}: {}", self.path.display(), e);
                return Err(GradebookError::file_operation(format!(
                    "read {}: {e}",
                    self.path.display()
                )));
            }
        };

        let records: Vec<T> = codec::decode(&bytes, T::COLLECTION);
        debug!("Read {} record(s) from '{}'", records.len(), T::COLLECTION);
        Ok(records)
    }

    async fn replace_all(&self, records: Vec<T>) -> Result<()> {
        let bytes = codec::encode(&records, self.pretty)?;
        let temp = self.temp_path();

        fs::write(&temp, &bytes).await.map_err(|e| {
            error!("Failed to write {}: {}", temp.display(), e);
            GradebookError::file_operation(format!("write {}: {e}", temp.display()))
        })?;
        fs::rename(&temp, &self.path).await.map_err(|e| {
            error!("Failed to replace {}: {}", self.path.display(), e);
            GradebookError::file_operation(format!("replace {}: {e}", self.path.display()))
        })?;

        debug!("Wrote {} record(s) to '{}'", records.len(), T::COLLECTION);
        Ok(())
    }
}
