//! ページ割付モジュール
//!
//! 分類済みの写真列をテンプレート別のバケットに分配し、
//! ページ記述子の列に変換する。純粋関数で、呼び出しごとに
//! 全体を再計算する。

use crate::classify::classify_photo;
use crate::types::{LayoutTag, Page, Photo};
use std::collections::HashSet;

/// 写真列をページ列に割り付ける
///
/// 1. 入力順を保ったまま全写真を分類し、テンプレート別に分配
/// 2. バケットごとに所定の枚数で区切ってページ化
/// 3. 出力順は single → twoColumns → twoRows → grid2x2 のバケット順
///
/// 空入力は空のページ列を返す。
pub fn assemble(photos: &[Photo]) -> Vec<Page> {
    let mut singles = Vec::new();
    let mut two_columns = Vec::new();
    let mut two_rows = Vec::new();
    let mut grids = Vec::new();

    for photo in photos {
        match classify_photo(photo) {
            LayoutTag::Single => singles.push(photo.clone()),
            LayoutTag::TwoColumns => two_columns.push(photo.clone()),
            LayoutTag::TwoRows => two_rows.push(photo.clone()),
            LayoutTag::Grid2x2 => grids.push(photo.clone()),
        }
    }

    let mut pages = Vec::new();

    // single: 1枚1ページ
    pages.extend(singles.into_iter().map(|photo| Page {
        layout: LayoutTag::Single,
        photos: vec![photo],
    }));

    pages.extend(chunk_pairs(&two_columns, LayoutTag::TwoColumns));
    pages.extend(chunk_pairs(&two_rows, LayoutTag::TwoRows));
    pages.extend(chunk_grid(&grids));

    pages
}

/// 2枚組テンプレートの区切り
///
/// 端数1枚はsingleページに格下げする（落とさない）。
fn chunk_pairs(bucket: &[Photo], layout: LayoutTag) -> Vec<Page> {
    bucket
        .chunks(2)
        .map(|group| {
            if group.len() == 2 {
                Page { layout, photos: group.to_vec() }
            } else {
                Page {
                    layout: LayoutTag::Single,
                    photos: group.to_vec(),
                }
            }
        })
        .collect()
}

/// grid2x2テンプレートの区切り
///
/// 端数は 3枚→twoRows（先頭2枚のみ、3枚目はどのページにも載らない）、
/// 2枚→twoColumns、1枚→single。
// TODO: 端数3枚の3枚目をsingleページに載せるか検討（現挙動は2枚組系と非対称）
fn chunk_grid(bucket: &[Photo]) -> Vec<Page> {
    let mut pages = Vec::new();

    for group in bucket.chunks(4) {
        let page = match group.len() {
            4 => Page {
                layout: LayoutTag::Grid2x2,
                photos: group.to_vec(),
            },
            3 => Page {
                layout: LayoutTag::TwoRows,
                photos: group[..2].to_vec(),
            },
            2 => Page {
                layout: LayoutTag::TwoColumns,
                photos: group.to_vec(),
            },
            _ => Page {
                layout: LayoutTag::Single,
                photos: group.to_vec(),
            },
        };
        pages.push(page);
    }

    pages
}

/// どのページにも載らなかった写真のIDを返す
///
/// grid2x2バケットの端数3枚目だけが該当しうる。CLIの警告表示用。
pub fn dropped_ids(photos: &[Photo], pages: &[Page]) -> Vec<String> {
    let placed: HashSet<&str> = pages
        .iter()
        .flat_map(|page| page.photos.iter())
        .map(|photo| photo.id.as_str())
        .collect();

    photos
        .iter()
        .filter(|photo| !placed.contains(photo.id.as_str()))
        .map(|photo| photo.id.clone())
        .collect()
}
