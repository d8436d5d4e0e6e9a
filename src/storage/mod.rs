//! 数据存储层
//!
//! 处理器（文件 / 内存）→ DAO → [`Storage`]，每个实体集合各一套。

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::config::{StorageBackend, StorageConfig};
use crate::errors::Result;
use crate::models::{
    assignments::entities::StudentGroupSubjectAssignment,
    grade_criteria::entities::GradeCriterion, grades::entities::Grade,
    student_groups::entities::StudentGroup, students::entities::Student,
    subjects::entities::Subject,
};

pub mod codec;
mod dao;
mod file_handler;
mod handler;
mod memory_handler;

pub use dao::Dao;
pub use file_handler::FileHandler;
pub use handler::{RECORD_NOT_FOUND, RecordHandler};
pub use memory_handler::MemoryHandler;

/// 可持久化记录
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// 集合名，同时用作文件名
    const COLLECTION: &'static str;

    fn id(&self) -> Uuid;

    fn validate(&self) -> Result<()>;
}

/// 全部实体集合的 DAO，每个进程构建一次
#[derive(Clone)]
pub struct Storage {
    pub students: Dao<Student>,
    pub student_groups: Dao<StudentGroup>,
    pub subjects: Dao<Subject>,
    pub grade_criteria: Dao<GradeCriterion>,
    pub grades: Dao<Grade>,
    pub assignments: Dao<StudentGroupSubjectAssignment>,
}

impl Storage {
    /// 基于数据目录的文件存储
    pub async fn open_dir(data_dir: impl AsRef<Path>, pretty: bool) -> Result<Self> {
        let dir = data_dir.as_ref();
        let storage = Self {
            students: file_dao(dir, pretty).await?,
            student_groups: file_dao(dir, pretty).await?,
            subjects: file_dao(dir, pretty).await?,
            grade_criteria: file_dao(dir, pretty).await?,
            grades: file_dao(dir, pretty).await?,
            assignments: file_dao(dir, pretty).await?,
        };
        info!("File storage ready at {}", dir.display());
        Ok(storage)
    }

    /// 纯内存存储
    pub fn in_memory() -> Self {
        Self {
            students: memory_dao(),
            student_groups: memory_dao(),
            subjects: memory_dao(),
            grade_criteria: memory_dao(),
            grades: memory_dao(),
            assignments: memory_dao(),
        }
    }
}

async fn file_dao<T: Record>(dir: &Path, pretty: bool) -> Result<Dao<T>> {
    let handler: Arc<dyn RecordHandler<T>> = Arc::new(FileHandler::<T>::open(dir, pretty).await?);
    Ok(Dao::new(handler))
}

fn memory_dao<T: Record>() -> Dao<T> {
    Dao::new(Arc::new(MemoryHandler::<T>::new()))
}

pub async fn create_storage(config: &StorageConfig) -> Result<Arc<Storage>> {
    let storage = match config.backend {
        StorageBackend::File => Storage::open_dir(&config.data_dir, config.pretty).await?,
        StorageBackend::Memory => {
            info!("Using in-memory storage, data will not outlive the process");
            Storage::in_memory()
        }
    };
    Ok(Arc::new(storage))
}
