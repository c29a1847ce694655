use crate::error::{AlbumError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// クロップ確認画面の表示ボックス幅（px）
    pub preview_width: f32,
    /// クロップ確認画面の表示ボックス高さ（px）
    pub preview_height: f32,
    /// ページプランのデフォルトタイトル
    pub default_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preview_width: 800.0,
            preview_height: 600.0,
            default_title: "アルバム".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AlbumError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("album-ai").join("config.json"))
    }

    /// "800x600" 形式の文字列でプレビューサイズを設定
    pub fn set_preview_size(&mut self, spec: &str) -> Result<()> {
        let (width, height) = parse_size(spec)?;
        self.preview_width = width;
        self.preview_height = height;
        self.save()
    }
}

/// "幅x高さ" 形式のサイズ指定をパースする
pub fn parse_size(spec: &str) -> Result<(f32, f32)> {
    let parts: Vec<&str> = spec.split(['x', 'X']).collect();
    if parts.len() != 2 {
        return Err(AlbumError::Config(format!(
            "サイズ指定が不正です: {} (例: 800x600)",
            spec
        )));
    }

    let width: f32 = parts[0]
        .trim()
        .parse()
        .map_err(|_| AlbumError::Config(format!("幅が数値ではありません: {}", parts[0])))?;
    let height: f32 = parts[1]
        .trim()
        .parse()
        .map_err(|_| AlbumError::Config(format!("高さが数値ではありません: {}", parts[1])))?;

    if width <= 0.0 || height <= 0.0 {
        return Err(AlbumError::Config(format!("サイズは正の値を指定してください: {}", spec)));
    }

    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.preview_width, 800.0);
        assert_eq!(config.preview_height, 600.0);
        assert_eq!(config.default_title, "アルバム");
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("800x600").unwrap(), (800.0, 600.0));
        assert_eq!(parse_size("1024X768").unwrap(), (1024.0, 768.0));
        assert_eq!(parse_size(" 640 x 480 ").unwrap(), (640.0, 480.0));
    }

    #[test]
    fn test_parse_size_invalid() {
        assert!(parse_size("800").is_err());
        assert!(parse_size("axb").is_err());
        assert!(parse_size("800x0").is_err());
        assert!(parse_size("-800x600").is_err());
    }

    #[test]
    fn test_config_deserialize_partial() {
        // 欠けたフィールドはデフォルト値
        let config: Config = serde_json::from_str(r#"{"previewWidth": 1200.0}"#).unwrap();
        assert_eq!(config.preview_width, 1200.0);
        assert_eq!(config.preview_height, 600.0);
    }
}
