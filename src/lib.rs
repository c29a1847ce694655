//! Album AI CLI
//!
//! 取り込み（scan）・割付（pages）・クロップ編集（crop）の
//! サブコマンド実装。ページ構成コアは album-ai-common 側にある。

pub mod cli;
pub mod config;
pub mod error;
pub mod scanner;
