mod exif;

use crate::error::{AlbumError, Result};
use album_ai_common::Photo;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "JPG", "JPEG", "PNG"];

/// フォルダを走査して作業セット用の写真一覧を作る
///
/// 画素サイズとEXIF日時を読み、IDはフォルダ内相対パスで安定化する。
/// 読み込めないファイルはスキップして続行する。
pub fn scan_folder(folder: &Path, recursive: bool, verbose: bool) -> Result<Vec<Photo>> {
    if !folder.exists() {
        return Err(AlbumError::FolderNotFound(folder.display().to_string()));
    }

    let paths = collect_image_paths(folder, recursive);

    let progress = ProgressBar::new(paths.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut photos: Vec<Photo> = paths
        .par_iter()
        .filter_map(|path| {
            let loaded = load_photo(folder, path);
            progress.inc(1);
            match loaded {
                Ok(photo) => Some(photo),
                Err(e) => {
                    if verbose {
                        progress.println(format!("警告: スキップ {}", e));
                    }
                    None
                }
            }
        })
        .collect();
    progress.finish_and_clear();

    // IDでソート（相対パス順）
    photos.sort_by(|a, b| a.id.cmp(&b.id));

    Ok(photos)
}

fn collect_image_paths(folder: &Path, recursive: bool) -> Vec<PathBuf> {
    let max_depth = if recursive { usize::MAX } else { 1 };

    WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map(|ext| {
                    let ext_str = ext.to_string_lossy();
                    IMAGE_EXTENSIONS.iter().any(|&e| e == ext_str)
                })
                .unwrap_or(false)
        })
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

fn load_photo(folder: &Path, path: &Path) -> Result<Photo> {
    let (width, height) = image::image_dimensions(path)
        .map_err(|e| AlbumError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    let id = path
        .strip_prefix(folder)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/");

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let file_path = path
        .canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .to_string();

    let date = exif::extract_date(path).unwrap_or_default();

    Ok(Photo {
        id,
        file_name,
        file_path,
        width,
        height,
        date,
        layout_hint: None,
        suggested_crop: None,
        user_crop: None,
    })
}
