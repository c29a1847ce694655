//! テンプレート分類モジュール
//!
//! AI解析が返す生のレイアウトラベルの表記ゆれを正規化し、
//! 4種類のページテンプレートに対応付ける。
//! ラベルが無い・不明な場合は縦横比から推定する。

use crate::types::{LayoutTag, Photo};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// 区切り文字（空白・ハイフン・アンダースコア）
    static ref SEPARATORS: Regex = Regex::new(r"[\s_\-]+").unwrap();

    /// 正規化済みラベル → テンプレートの対応表
    static ref SYNONYMS: HashMap<&'static str, LayoutTag> = {
        let mut table = HashMap::new();
        table.insert("single", LayoutTag::Single);

        table.insert("twocolumns", LayoutTag::TwoColumns);
        table.insert("col", LayoutTag::TwoColumns);
        table.insert("column", LayoutTag::TwoColumns);
        table.insert("columns", LayoutTag::TwoColumns);

        table.insert("tworows", LayoutTag::TwoRows);
        table.insert("row", LayoutTag::TwoRows);
        table.insert("rows", LayoutTag::TwoRows);

        table.insert("grid2x2", LayoutTag::Grid2x2);
        table.insert("grid", LayoutTag::Grid2x2);
        table.insert("2x2", LayoutTag::Grid2x2);
        table
    };
}

/// ラベルを正規化する（小文字化＋区切り文字除去）
pub fn normalize_label(label: &str) -> String {
    SEPARATORS.replace_all(&label.to_lowercase(), "").to_string()
}

/// 正規化済みラベルをテンプレートに対応付ける
///
/// 対応表に無いラベルはNone。
pub fn classify_label(label: &str) -> Option<LayoutTag> {
    SYNONYMS.get(normalize_label(label).as_str()).copied()
}

/// ラベルと画素サイズからテンプレートを決定する（全域関数）
///
/// ラベルが無い・不明な場合は縦横比で推定する:
/// 横長（正方形含む）→ twoRows、縦長 → twoColumns。
/// 推定でsingle/grid2x2になることはない（明示ラベル経由のみ）。
pub fn classify(label: Option<&str>, width: u32, height: u32) -> LayoutTag {
    if let Some(tag) = label.and_then(classify_label) {
        return tag;
    }

    if width >= height {
        LayoutTag::TwoRows
    } else {
        LayoutTag::TwoColumns
    }
}

/// 写真1枚を分類する
pub fn classify_photo(photo: &Photo) -> LayoutTag {
    classify(photo.layout_hint.as_deref(), photo.width, photo.height)
}
