//! Album AI Common Library
//!
//! CLIと描画レイヤーで共有される型とページ構成コア

pub mod types;
pub mod classify;
pub mod assemble;
pub mod overlay;
pub mod editor;
pub mod workingset;
pub mod error;

pub use types::{CropRect, LayoutTag, Page, Photo, MIN_VISIBLE_PX};
pub use classify::{classify, classify_label, classify_photo};
pub use assemble::{assemble, dropped_ids};
pub use overlay::{clamp_edge, map_overlay, OverlayGeometry};
pub use editor::{apply_edit, CropEdge, CropEdit};
pub use workingset::{PagePlan, WorkingSet};
pub use error::{Error, Result};
