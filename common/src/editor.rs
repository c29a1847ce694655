//! クロップ編集モジュール
//!
//! クロップ確認画面からの編集イベント（1辺の変更・リセット・解除）を
//! 写真に適用する。写真は不変値として扱い、適用結果は新しい値で返す。

use crate::overlay::clamp_edge;
use crate::types::{CropRect, Photo};
use serde::{Deserialize, Serialize};

/// クロップの編集対象辺
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl std::str::FromStr for CropEdge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Ok(CropEdge::Left),
            "right" | "r" => Ok(CropEdge::Right),
            "top" | "t" => Ok(CropEdge::Top),
            "bottom" | "b" => Ok(CropEdge::Bottom),
            _ => Err(format!("Unknown edge: {}. Use left, right, top, or bottom", s)),
        }
    }
}

impl std::fmt::Display for CropEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CropEdge::Left => "left",
            CropEdge::Right => "right",
            CropEdge::Top => "top",
            CropEdge::Bottom => "bottom",
        };
        write!(f, "{}", name)
    }
}

/// クロップ編集イベント
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum CropEdit {
    /// 1辺の値を変更（クランプして受理）
    Set { edge: CropEdge, value: f32 },
    /// 上書きをAI候補の写し（候補が無ければ全辺0）に戻す
    Reset,
    /// 上書きを取り除き、有効クロップをAI候補に戻す
    Clear,
}

/// 編集イベントを写真に適用し、新しい写真を返す
pub fn apply_edit(photo: &Photo, edit: &CropEdit) -> Photo {
    match edit {
        CropEdit::Set { edge, value } => set_edge(photo, *edge, *value),
        CropEdit::Reset => Photo {
            user_crop: Some(photo.suggested_crop.unwrap_or_default()),
            ..photo.clone()
        },
        CropEdit::Clear => Photo {
            user_crop: None,
            ..photo.clone()
        },
    }
}

/// 1辺の値を変更する
///
/// 現在の有効クロップを起点に、対辺を固定したまま
/// `[0, 軸サイズ - 最小可視 - 対辺]` へクランプした値を書き込む。
fn set_edge(photo: &Photo, edge: CropEdge, value: f32) -> Photo {
    let mut crop = photo.effective_crop();
    let width = photo.width as f32;
    let height = photo.height as f32;

    match edge {
        CropEdge::Left => crop.left = clamp_edge(width, crop.right, value),
        CropEdge::Right => crop.right = clamp_edge(width, crop.left, value),
        CropEdge::Top => crop.top = clamp_edge(height, crop.bottom, value),
        CropEdge::Bottom => crop.bottom = clamp_edge(height, crop.top, value),
    }

    Photo {
        user_crop: Some(crop),
        ..photo.clone()
    }
}
