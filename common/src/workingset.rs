//! 作業セットモジュール
//!
//! 取り込み済み写真の一覧（作業セット）とページ割付結果（ページプラン）の
//! JSON入出力。編集は新しい作業セットを返し、元の値は変更しない。

use crate::assemble;
use crate::editor::{apply_edit, CropEdit};
use crate::error::{Error, Result};
use crate::types::{Page, Photo};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 作業セット（取り込み済み写真の順序付き一覧）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkingSet {
    pub photos: Vec<Photo>,
}

impl WorkingSet {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self { photos }
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSONファイルへ保存
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// IDで写真を探す
    pub fn find(&self, id: &str) -> Option<&Photo> {
        self.photos.iter().find(|photo| photo.id == id)
    }

    /// 指定写真にクロップ編集を適用した新しい作業セットを返す
    pub fn with_edit(&self, id: &str, edit: &CropEdit) -> Result<Self> {
        self.with_photo(id, |photo| apply_edit(photo, edit))
    }

    /// 指定写真の分類ラベルを差し替えた新しい作業セットを返す
    pub fn with_hint(&self, id: &str, label: &str) -> Result<Self> {
        self.with_photo(id, |photo| Photo {
            layout_hint: Some(label.to_string()),
            ..photo.clone()
        })
    }

    fn with_photo<F>(&self, id: &str, replace: F) -> Result<Self>
    where
        F: Fn(&Photo) -> Photo,
    {
        if self.find(id).is_none() {
            return Err(Error::PhotoNotFound(id.to_string()));
        }

        let photos = self
            .photos
            .iter()
            .map(|photo| if photo.id == id { replace(photo) } else { photo.clone() })
            .collect();

        Ok(Self { photos })
    }

    /// 現在の写真一覧からページプランを生成する
    pub fn build_plan(&self, title: &str) -> PagePlan {
        let pages = assemble::assemble(&self.photos);
        let dropped = assemble::dropped_ids(&self.photos, &pages);
        PagePlan {
            title: title.to_string(),
            pages,
            dropped,
        }
    }
}

/// ページプラン（描画レイヤーに渡す順序付きページ列）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagePlan {
    pub title: String,
    pub pages: Vec<Page>,
    /// どのページにも載らなかった写真のID
    pub dropped: Vec<String>,
}

impl PagePlan {
    /// JSONファイルへ保存
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
