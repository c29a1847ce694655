//! アルバム構成の型定義
//!
//! CLIと描画レイヤーで共有される型:
//! - Photo: 作業セットに取り込まれた1枚の写真
//! - LayoutTag: 4種類のページテンプレート
//! - CropRect: ピクセル座標系のクロップ指定
//! - Page: 1ページ分の割付結果

use serde::{Deserialize, Serialize};

/// 可視領域の最小サイズ（px）
///
/// クロップ後も `width - left - right >= MIN_VISIBLE_PX` を保証する。
pub const MIN_VISIBLE_PX: f32 = 10.0;

/// ページテンプレート
///
/// それぞれ必要枚数が固定（1/2/2/4枚）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutTag {
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "twoColumns")]
    TwoColumns,
    #[serde(rename = "twoRows")]
    TwoRows,
    #[serde(rename = "grid2x2")]
    Grid2x2,
}

impl LayoutTag {
    /// テンプレートの必要枚数
    pub fn required_count(&self) -> usize {
        match self {
            LayoutTag::Single => 1,
            LayoutTag::TwoColumns | LayoutTag::TwoRows => 2,
            LayoutTag::Grid2x2 => 4,
        }
    }

    /// JSON上の表記
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutTag::Single => "single",
            LayoutTag::TwoColumns => "twoColumns",
            LayoutTag::TwoRows => "twoRows",
            LayoutTag::Grid2x2 => "grid2x2",
        }
    }
}

impl std::fmt::Display for LayoutTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// クロップ指定（元画像のピクセル座標系、各辺の切り落とし量）
///
/// 全辺0は「クロップなし」。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CropRect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl CropRect {
    /// クロップなしかどうか
    pub fn is_empty(&self) -> bool {
        self.left == 0.0 && self.right == 0.0 && self.top == 0.0 && self.bottom == 0.0
    }

    /// 可視領域の最小保証を満たすか
    pub fn satisfies_min_visible(&self, width: u32, height: u32) -> bool {
        self.left + self.right <= width as f32 - MIN_VISIBLE_PX
            && self.top + self.bottom <= height as f32 - MIN_VISIBLE_PX
    }
}

/// 作業セット内の1枚の写真
///
/// 分類ラベルとクロップ候補は外部のAI解析が後から付与する。
/// 編集は新しい値を生成し、既存の値は変更しない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Photo {
    /// 安定ID（フォルダ内相対パス）
    pub id: String,

    pub file_name: String,

    /// 画像ファイルの絶対パス
    pub file_path: String,

    /// ピクセル幅
    pub width: u32,

    /// ピクセル高さ
    pub height: u32,

    /// 撮影日時（EXIF DateTimeOriginal）
    pub date: String,

    /// AI解析が返した生の分類ラベル（未解析/不明ならNone）
    pub layout_hint: Option<String>,

    /// AI解析が提案したクロップ
    pub suggested_crop: Option<CropRect>,

    /// ユーザーが上書きしたクロップ
    pub user_crop: Option<CropRect>,
}

impl Photo {
    /// 横長（正方形含む）かどうか
    pub fn is_landscape(&self) -> bool {
        self.width >= self.height
    }

    /// 現在有効なクロップ
    ///
    /// 優先順: ユーザー上書き → AI候補 → クロップなし
    pub fn effective_crop(&self) -> CropRect {
        self.user_crop.or(self.suggested_crop).unwrap_or_default()
    }
}

/// 1ページ分の割付結果
///
/// 割付のたびに全体を再計算する派生データで、永続的な同一性は持たない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub layout: LayoutTag,
    pub photos: Vec<Photo>,
}
