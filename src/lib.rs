//! Gradebook - 学生成绩管理核心库
//!
//! 管理学生、学生组、课程、评分标准与成绩，并按课程和学生组生成成绩矩阵。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（JSON 文件 / 内存）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
