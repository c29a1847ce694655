use album_ai_common::CropEdge;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "album-ai")]
#[command(about = "AI分類写真のアルバムページ割付・クロップ調整ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真フォルダを取り込んで作業セットJSONを出力
    Scan {
        /// 写真フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 出力JSONファイル（デフォルト: 入力フォルダ/workingset.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 作業セットからページプランJSONを生成
    Pages {
        /// 作業セットJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ファイル（デフォルト: 入力と同じ場所のpages.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// アルバムタイトル（省略時は設定値）
        #[arg(short, long)]
        title: Option<String>,
    },

    /// 写真に分類ラベルを設定（AI解析結果の手動差し替え）
    Hint {
        /// 作業セットJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 写真ID
        #[arg(required = true)]
        id: String,

        /// レイアウトラベル (single/twoColumns/twoRows/grid2x2 と同義語)
        #[arg(required = true)]
        label: String,
    },

    /// クロップを編集
    Crop {
        #[command(subcommand)]
        action: CropAction,
    },

    /// 写真のオーバーレイ座標を表示
    Overlay {
        /// 作業セットJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 写真ID
        #[arg(required = true)]
        id: String,

        /// 表示ボックス幅px（省略時は設定値）
        #[arg(long)]
        box_width: Option<f32>,

        /// 表示ボックス高さpx（省略時は設定値）
        #[arg(long)]
        box_height: Option<f32>,
    },

    /// 設定を表示/編集
    Config {
        /// プレビューボックスサイズを設定（例: 800x600）
        #[arg(long)]
        set_preview_size: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
pub enum CropAction {
    /// 1辺の値を設定（範囲外はクランプして受理）
    Set {
        /// 作業セットJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 写真ID
        #[arg(required = true)]
        id: String,

        /// 対象辺 (left/right/top/bottom)
        #[arg(required = true)]
        edge: CropEdge,

        /// 切り落とし量（元画像px）
        #[arg(required = true)]
        value: f32,

        /// 出力先（省略時は上書き）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 上書きをAI候補の写しに戻す
    Reset {
        /// 作業セットJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 写真ID
        #[arg(required = true)]
        id: String,

        /// 出力先（省略時は上書き）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 上書きを解除してAI候補に戻す
    Clear {
        /// 作業セットJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 写真ID
        #[arg(required = true)]
        id: String,

        /// 出力先（省略時は上書き）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
