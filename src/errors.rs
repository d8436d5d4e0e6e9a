//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 业务类错误（校验、未找到、依赖冲突）的负载是本地化消息键，
//! 由界面层通过查找函数转换为可读文本。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_gradebook_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum GradebookError {
            $($variant(String),)*
        }

        impl GradebookError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(GradebookError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(GradebookError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(GradebookError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl GradebookError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        GradebookError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_gradebook_errors! {
    Validation("E001", "Validation Error"),
    NotFound("E002", "Resource Not Found"),
    DependencyConflict("E003", "Dependency Conflict"),
    StorageOperation("E004", "Storage Operation Error"),
    FileOperation("E005", "File Operation Error"),
    Serialization("E006", "Serialization Error"),
    Configuration("E007", "Configuration Error"),
    Export("E008", "Export Error"),
}

impl GradebookError {
    /// 是否为预期内的业务规则错误（校验 / 未找到 / 依赖冲突）
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            GradebookError::Validation(_)
                | GradebookError::NotFound(_)
                | GradebookError::DependencyConflict(_)
        )
    }

    /// 业务错误对应的消息键；存储类错误返回 None
    pub fn message_key(&self) -> Option<&str> {
        if self.is_business_rule() {
            Some(self.message())
        } else {
            None
        }
    }

    /// 通过外部查找函数本地化错误信息
    ///
    /// 查找失败时回退为消息键本身；存储类错误返回简洁格式。
    pub fn localize<F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        match self.message_key() {
            Some(key) => lookup(key).unwrap_or_else(|| key.to_string()),
            None => self.format_simple(),
        }
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GradebookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GradebookError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for GradebookError {
    fn from(err: std::io::Error) -> Self {
        GradebookError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for GradebookError {
    fn from(err: serde_json::Error) -> Self {
        GradebookError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for GradebookError {
    fn from(err: config::ConfigError) -> Self {
        GradebookError::Configuration(err.to_string())
    }
}

impl From<csv::Error> for GradebookError {
    fn from(err: csv::Error) -> Self {
        GradebookError::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GradebookError>;
