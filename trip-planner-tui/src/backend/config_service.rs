//! 配置服务

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::trip_repository::default_data_file;
use crate::component::SHAKE_ANIMATION_TIMEOUT;
use crate::i18n::Language;
use crate::view::theme::Theme;

/// 获取配置文件路径
fn default_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trip-planner-tui")
        .join("config.json")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    /// BCP 47 语言代码
    pub language: String,
    /// 数据文件路径，未设置时使用平台数据目录
    pub data_file: Option<PathBuf>,
    /// 失败抖动动画时长（毫秒）
    pub shake_duration_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: Language::EnUs.code().to_string(),
            data_file: None,
            shake_duration_ms: u64::try_from(SHAKE_ANIMATION_TIMEOUT.as_millis()).unwrap_or(600),
        }
    }
}

impl AppConfig {
    /// 无法识别的语言代码回退到默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_default()
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(default_data_file)
    }

    pub fn shake_duration(&self) -> Duration {
        Duration::from_millis(self.shake_duration_ms)
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(default_config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(config)?)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("config.json"));

        let config = service.load().unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.shake_duration(), SHAKE_ANIMATION_TIMEOUT);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("sub").join("config.json"));
        let config = AppConfig {
            theme: Theme::Light,
            language: "zh-CN".to_string(),
            data_file: Some(dir.path().join("trips.json")),
            shake_duration_ms: 250,
        };

        service.save(&config).unwrap();

        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "theme": "light", "language": "xx" }"#).unwrap();

        let config = LocalConfigService::with_path(&path).load().unwrap();

        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.language(), Language::EnUs);
        assert_eq!(config.shake_duration_ms, 600);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "theme = light").unwrap();

        assert!(LocalConfigService::with_path(&path).load().is_err());
    }
}
