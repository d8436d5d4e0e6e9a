//! 持久化处理器
//!
//! 每次操作都读取完整集合，在内存中修改后整体写回。

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use super::Record;
use crate::errors::{GradebookError, Result};

/// 找不到目标记录时处理器返回的消息键
pub const RECORD_NOT_FOUND: &str = "record.notFound";

#[async_trait]
pub trait RecordHandler<T: Record>: Send + Sync {
    /// 读取完整集合
    async fn read_all(&self) -> Result<Vec<T>>;

    /// 以给定列表整体替换集合
    async fn replace_all(&self, records: Vec<T>) -> Result<()>;

    /// 追加一条记录
    async fn write(&self, record: T) -> Result<()> {
        let mut records = self.read_all().await?;
        debug!("Appending record {} to '{}'", record.id(), T::COLLECTION);
        records.push(record);
        self.replace_all(records).await
    }

    /// 按 ID 替换记录，不存在时返回 NotFound
    async fn update(&self, record: T) -> Result<()> {
        let mut records = self.read_all().await?;
        let id = record.id();
        match records.iter_mut().find(|r| r.id() == id) {
            Some(slot) => *slot = record,
            None => return Err(GradebookError::not_found(RECORD_NOT_FOUND)),
        }
        debug!("Updating record {} in '{}'", id, T::COLLECTION);
        self.replace_all(records).await
    }

    /// 按 ID 删除记录，不存在时返回 NotFound
    async fn delete_by_id(&self, id: Uuid) -> Result<()> {
        let mut records = self.read_all().await?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(GradebookError::not_found(RECORD_NOT_FOUND));
        }
        debug!("Deleting record {} from '{}'", id, T::COLLECTION);
        self.replace_all(records).await
    }
}
