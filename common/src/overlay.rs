//! クロップオーバーレイ座標変換モジュール
//!
//! 元画像ピクセル座標系のクロップ量を、表示ボックス座標系の
//! マスク量に変換する。軸ごとに独立した倍率で変換し、
//! 編集値は常にクランプして受け付ける（拒否しない）。

use crate::types::{CropRect, MIN_VISIBLE_PX};
use serde::{Deserialize, Serialize};

/// 表示ボックス座標系のマスク量（px）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayGeometry {
    pub left_px: f32,
    pub right_px: f32,
    pub top_px: f32,
    pub bottom_px: f32,
}

/// 軸ごとの倍率
///
/// ボックスまたは元画像のサイズが0以下なら1.0（無変換）に退避する。
#[inline]
fn axis_scale(box_size: f32, photo_size: f32) -> f32 {
    if box_size <= 0.0 || photo_size <= 0.0 {
        1.0
    } else {
        box_size / photo_size
    }
}

/// クロップ量を表示ボックス座標系に変換する
pub fn map_overlay(
    photo_width: u32,
    photo_height: u32,
    crop: &CropRect,
    box_width: f32,
    box_height: f32,
) -> OverlayGeometry {
    let scale_x = axis_scale(box_width, photo_width as f32);
    let scale_y = axis_scale(box_height, photo_height as f32);

    OverlayGeometry {
        left_px: crop.left * scale_x,
        right_px: crop.right * scale_x,
        top_px: crop.top * scale_y,
        bottom_px: crop.bottom * scale_y,
    }
}

/// 1辺の編集値をクランプする
///
/// 受理範囲は `[0, axis_size - MIN_VISIBLE_PX - opposite]`。
/// 対辺が既に大きく上限が負になる場合は0に落とす。
pub fn clamp_edge(axis_size: f32, opposite: f32, value: f32) -> f32 {
    let max = (axis_size - MIN_VISIBLE_PX - opposite).max(0.0);
    value.clamp(0.0, max)
}
