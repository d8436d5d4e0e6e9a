//! 系统维护：数据完整性检查

pub mod integrity;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::system::responses::IntegrityReport;
use crate::storage::Storage;

pub struct IntegrityService {
    storage: Arc<Storage>,
    system_name: String,
}

impl IntegrityService {
    pub fn new(storage: Arc<Storage>, system_name: impl Into<String>) -> Self {
        Self {
            storage,
            system_name: system_name.into(),
        }
    }

    pub(crate) fn storage(&self) -> &Storage {
        &self.storage
    }

    pub(crate) fn system_name(&self) -> &str {
        &self.system_name
    }

    /// 统计各集合记录数，并列出校验失败的记录与悬空引用
    pub async fn check(&self) -> Result<IntegrityReport> {
        integrity::check(self).await
    }
}
