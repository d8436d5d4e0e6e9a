//! 数据模型定义
//!
//! 每个实体目录包含：
//! - `entities`: 持久化记录及其字段校验
//! - `requests`: 界面层传入的创建 / 部分更新 DTO
//! - `responses`: 返回给界面层的组合视图

pub mod assignments;
pub mod common;
pub mod grade_criteria;
pub mod grade_matrix;
pub mod grades;
pub mod student_groups;
pub mod students;
pub mod subjects;
pub mod system;

pub use common::{PaginatedResponse, PaginationInfo};
