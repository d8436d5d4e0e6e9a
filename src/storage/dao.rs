//! 通用 DAO
//!
//! 把增删改查意图翻译为对处理器的整集合读取 / 过滤 / 替换 / 写回。
//! 返回约定：
//! - `Ok(false)`：没有该 ID 的记录（或保存时 ID 已存在）
//! - `Err(Validation)`：记录未通过字段校验
//! - 其它 `Err`：存储故障

use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::{Record, RecordHandler};
use crate::errors::{GradebookError, Result};

pub struct Dao<T: Record> {
    handler: Arc<dyn RecordHandler<T>>,
}

impl<T: Record> Clone for Dao<T> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
        }
    }
}

impl<T: Record> Dao<T> {
    pub fn new(handler: Arc<dyn RecordHandler<T>>) -> Self {
        Self { handler }
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<T>> {
        let records = self.handler.read_all().await?;
        Ok(records.into_iter().find(|r| r.id() == id))
    }

    pub async fn get_all(&self) -> Result<Vec<T>> {
        self.handler.read_all().await
    }

    /// 全表扫描过滤
    pub async fn find<P>(&self, predicate: P) -> Result<Vec<T>>
    where
        P: Fn(&T) -> bool,
    {
        let records = self.handler.read_all().await?;
        Ok(records.into_iter().filter(|r| predicate(r)).collect())
    }

    pub async fn exists<P>(&self, predicate: P) -> Result<bool>
    where
        P: Fn(&T) -> bool,
    {
        let records = self.handler.read_all().await?;
        Ok(records.iter().any(predicate))
    }

    pub async fn count<P>(&self, predicate: P) -> Result<usize>
    where
        P: Fn(&T) -> bool,
    {
        let records = self.handler.read_all().await?;
        Ok(records.iter().filter(|r| predicate(r)).count())
    }

    /// 保存新记录；ID 已存在时返回 false
    pub async fn save(&self, record: T) -> Result<bool> {
        record.validate()?;

        let id = record.id();
        if self.get(id).await?.is_some() {
            debug!("Record {} already exists in '{}'", id, T::COLLECTION);
            return Ok(false);
        }

        self.handler.write(record).await?;
        Ok(true)
    }

    /// 更新已有记录；不存在时返回 false
    pub async fn update(&self, record: T) -> Result<bool> {
        record.validate()?;
        Self::found(self.handler.update(record).await)
    }

    /// 按 ID 删除；不存在时返回 false
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        Self::found(self.handler.delete_by_id(id).await)
    }

    /// 删除所有满足条件的记录，一次写回，返回删除条数
    pub async fn delete_where<P>(&self, predicate: P) -> Result<usize>
    where
        P: Fn(&T) -> bool,
    {
        let records = self.handler.read_all().await?;
        let before = records.len();
        let kept: Vec<T> = records.into_iter().filter(|r| !predicate(r)).collect();
        let removed = before - kept.len();
        if removed > 0 {
            self.handler.replace_all(kept).await?;
            debug!("Removed {} record(s) from '{}'", removed, T::COLLECTION);
        }
        Ok(removed)
    }

    fn found(result: Result<()>) -> Result<bool> {
        match result {
            Ok(()) => Ok(true),
            Err(GradebookError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
