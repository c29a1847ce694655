use album_ai_common::{classify_photo, map_overlay, CropEdit, WorkingSet};
use album_ai_rust::{cli, config, error, scanner};
use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands, CropAction};
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Scan { folder, output, recursive } => {
            println!("📸 album-ai - 写真取り込み\n");

            // 1. 画像スキャン
            println!("[1/2] 写真をスキャン中...");
            let photos = scanner::scan_folder(&folder, recursive, cli.verbose)?;
            println!("✔ {}枚の写真を検出\n", photos.len());

            if photos.is_empty() {
                return Err(error::AlbumError::NoImagesFound(
                    folder.display().to_string(),
                )
                .into());
            }

            // 2. 作業セット保存
            println!("[2/2] 作業セットを保存中...");
            let output = output.unwrap_or_else(|| folder.join("workingset.json"));
            WorkingSet::new(photos).save(&output)?;
            println!("✔ 作業セットを保存: {}", output.display());

            println!("\n✅ 取り込み完了");
        }

        Commands::Pages { input, output, title } => {
            println!("📄 album-ai - ページ割付\n");

            let set = WorkingSet::from_file(&input)?;
            let title = title.unwrap_or_else(|| config.default_title.clone());

            let plan = set.build_plan(&title);
            println!("✔ {}枚の写真から{}ページを生成", set.photos.len(), plan.pages.len());

            if !plan.dropped.is_empty() {
                println!(
                    "⚠ {}枚の写真がどのページにも載りません: {}",
                    plan.dropped.len(),
                    plan.dropped.join(", ")
                );
            }

            let output = output.unwrap_or_else(|| input.with_file_name("pages.json"));
            plan.save(&output)?;
            println!("✔ ページプランを保存: {}", output.display());

            println!("\n✅ 割付完了");
        }

        Commands::Hint { input, id, label } => {
            let set = WorkingSet::from_file(&input)?;
            let updated = set.with_hint(&id, &label)?;
            updated.save(&input)?;

            if let Some(photo) = updated.find(&id) {
                println!("✔ {} のラベルを設定: {} → {}", id, label, classify_photo(photo));
            }
        }

        Commands::Crop { action } => {
            let (input, id, edit, output) = match action {
                CropAction::Set { input, id, edge, value, output } => {
                    (input, id, CropEdit::Set { edge, value }, output)
                }
                CropAction::Reset { input, id, output } => (input, id, CropEdit::Reset, output),
                CropAction::Clear { input, id, output } => (input, id, CropEdit::Clear, output),
            };

            let set = WorkingSet::from_file(&input)?;
            let updated = set.with_edit(&id, &edit)?;
            let output = output.unwrap_or(input);
            updated.save(&output)?;

            if let Some(photo) = updated.find(&id) {
                let crop = photo.effective_crop();
                println!(
                    "✔ {} の有効クロップ: left={} right={} top={} bottom={}",
                    id, crop.left, crop.right, crop.top, crop.bottom
                );
            }
        }

        Commands::Overlay { input, id, box_width, box_height } => {
            let set = WorkingSet::from_file(&input)?;
            let photo = set
                .find(&id)
                .ok_or_else(|| album_ai_common::Error::PhotoNotFound(id.clone()))?;

            let box_width = box_width.unwrap_or(config.preview_width);
            let box_height = box_height.unwrap_or(config.preview_height);

            let geometry = map_overlay(
                photo.width,
                photo.height,
                &photo.effective_crop(),
                box_width,
                box_height,
            );

            if cli.verbose {
                println!(
                    "表示ボックス: {}x{}px / 元画像: {}x{}px",
                    box_width, box_height, photo.width, photo.height
                );
            }
            println!("{}", serde_json::to_string_pretty(&geometry)?);
        }

        Commands::Config { set_preview_size, show } => {
            let mut config = config;

            if let Some(spec) = set_preview_size {
                config
                    .set_preview_size(&spec)
                    .context("プレビューサイズの設定に失敗しました")?;
                println!("✔ プレビューサイズを設定しました");
            }

            if show {
                println!("設定:");
                println!("  プレビュー幅: {}px", config.preview_width);
                println!("  プレビュー高さ: {}px", config.preview_height);
                println!("  デフォルトタイトル: {}", config.default_title);
            }
        }
    }

    Ok(())
}
