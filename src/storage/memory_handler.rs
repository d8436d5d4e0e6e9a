//! 内存存储处理器
//!
//! 保存与文件后端相同的编码字节流，便于测试损坏数据场景。

use async_trait::async_trait;
use std::marker::PhantomData;
use tokio::sync::Mutex;
use tracing::debug;

use super::{Record, RecordHandler, codec};
use crate::errors::Result;

pub struct MemoryHandler<T> {
    buffer: Mutex<Vec<u8>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> MemoryHandler<T> {
    pub fn new() -> Self {
        Self::from_bytes(b"[]".to_vec())
    }

    /// 以已有字节流初始化
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            buffer: Mutex::new(bytes),
            _marker: PhantomData,
        }
    }

    /// 当前缓冲区内容副本
    pub async fn snapshot(&self) -> Vec<u8> {
        self.buffer.lock().await.clone()
    }
}

impl<T: Record> Default for MemoryHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordHandler<T> for MemoryHandler<T> {
    async fn read_all(&self) -> Result<Vec<T>> {
        let buffer = self.buffer.lock().await;
        Ok(codec::decode(&buffer, T::COLLECTION))
    }

    async fn replace_all(&self, records: Vec<T>) -> Result<()> {
        let bytes = codec::encode(&records, false)?;
        *self.buffer.lock().await = bytes;
        debug!("Buffered {} record(s) for '{}'", records.len(), T::COLLECTION);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GradebookError;
    use crate::models::students::entities::Student;
    use crate::storage::RECORD_NOT_FOUND;

    #[tokio::test]
    async fn test_round_trip() {
        for n in [0usize, 1, 2, 50] {
            let handler = MemoryHandler::<Student>::new();
            let written: Vec<Student> = (0..n)
                .map(|i| Student::new(format!("F{i}"), format!("L{i}"), format!("A{i}"), None))
                .collect();
            for s in &written {
                handler.write(s.clone()).await.unwrap();
            }
            let read = handler.read_all().await.unwrap();
            assert_eq!(read.len(), n);
            assert_eq!(read, written);
        }
    }

    #[tokio::test]
    async fn test_update_is_visible_on_next_read() {
        let handler = MemoryHandler::<Student>::new();
        let mut s = Student::new("Jan", "Kowalski", "s1", None);
        handler.write(s.clone()).await.unwrap();

        s.last_name = "Nowak".into();
        handler.update(s.clone()).await.unwrap();
        assert_eq!(handler.read_all().await.unwrap(), vec![s]);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let handler = MemoryHandler::<Student>::new();
        let a = Student::new("A", "A", "1", None);
        let b = Student::new("B", "B", "2", None);
        let c = Student::new("C", "C", "3", None);
        for s in [&a, &b, &c] {
            handler.write(s.clone()).await.unwrap();
        }

        handler.delete_by_id(b.id).await.unwrap();
        assert_eq!(handler.read_all().await.unwrap(), vec![a, c]);
        assert_eq!(
            handler.delete_by_id(b.id).await,
            Err(GradebookError::not_found(RECORD_NOT_FOUND))
        );
    }

    #[tokio::test]
    async fn test_garbage_buffer_reads_as_empty() {
        let handler = MemoryHandler::<Student>::from_bytes(b"{not json".to_vec());
        assert!(handler.read_all().await.unwrap().is_empty());
        assert_eq!(handler.snapshot().await, b"{not json".to_vec());
    }
}
