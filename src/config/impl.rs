use config::{Config, ConfigError, Environment, File};
use std::path::PathBuf;

use super::{AppConfig, AppSettings, StorageBackend, StorageConfig};

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 代码内默认值，保证没有配置文件时也能启动
            .set_default("app.system_name", "Gradebook")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("storage.backend", "file")?
            .set_default("storage.data_dir", "data")?
            .set_default("storage.pretty", true)?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("GRADEBOOK")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option(
                "storage.data_dir",
                std::env::var("GRADEBOOK_DATA_DIR").ok(),
            )?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 内存存储配置（测试及临时会话使用）
    pub fn for_memory() -> Self {
        Self {
            app: AppSettings {
                system_name: "Gradebook".to_string(),
                environment: "development".to_string(),
                log_level: "debug".to_string(),
            },
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                data_dir: String::new(),
                pretty: false,
            },
        }
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 数据目录路径
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.storage.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_config() {
        let config = AppConfig::for_memory();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.is_development());
        assert!(!config.is_production());
    }

    #[test]
    fn test_backend_deserializes_from_snake_case() {
        let backend: StorageBackend = serde_json::from_str("\"file\"").unwrap();
        assert_eq!(backend, StorageBackend::File);
        let backend: StorageBackend = serde_json::from_str("\"memory\"").unwrap();
        assert_eq!(backend, StorageBackend::Memory);
    }
}
