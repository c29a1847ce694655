//! クロップ編集とオーバーレイ変換の統合テスト
//!
//! ## 変更履歴
//! - 2026-08-26: 初期作成

use album_ai_common::{
    apply_edit, map_overlay, CropEdge, CropEdit, CropRect, Photo, MIN_VISIBLE_PX,
};

fn photo(width: u32, height: u32) -> Photo {
    Photo {
        id: "test.jpg".to_string(),
        file_name: "test.jpg".to_string(),
        width,
        height,
        ..Default::default()
    }
}

#[test]
fn test_clamp_law_from_opposite_edge() {
    // 幅1000、right=400: leftの上限は 1000 - 10 - 400 = 590
    let base = Photo {
        user_crop: Some(CropRect { right: 400.0, ..Default::default() }),
        ..photo(1000, 800)
    };

    for value in [591.0, 600.0, 1e6] {
        let edited = apply_edit(&base, &CropEdit::Set { edge: CropEdge::Left, value });
        assert_eq!(edited.user_crop.unwrap().left, 590.0, "value={}", value);
    }

    let edited = apply_edit(&base, &CropEdit::Set { edge: CropEdge::Left, value: -1.0 });
    assert_eq!(edited.user_crop.unwrap().left, 0.0);
}

#[test]
fn test_edits_never_violate_min_visible() {
    let mut current = photo(1000, 800);
    let edits = [
        CropEdit::Set { edge: CropEdge::Left, value: 700.0 },
        CropEdit::Set { edge: CropEdge::Right, value: 700.0 },
        CropEdit::Set { edge: CropEdge::Top, value: 500.0 },
        CropEdit::Set { edge: CropEdge::Bottom, value: 500.0 },
        CropEdit::Set { edge: CropEdge::Left, value: 100.0 },
        CropEdit::Set { edge: CropEdge::Right, value: 1e9 },
    ];

    for edit in &edits {
        current = apply_edit(&current, edit);
        let crop = current.effective_crop();
        assert!(
            crop.satisfies_min_visible(1000, 800),
            "編集後に最小可視領域を割った: {:?}",
            crop
        );
        assert!(1000.0 - crop.left - crop.right >= MIN_VISIBLE_PX);
        assert!(800.0 - crop.top - crop.bottom >= MIN_VISIBLE_PX);
    }
}

#[test]
fn test_clear_restores_suggested_crop() {
    let suggested = CropRect { left: 20.0, right: 30.0, top: 10.0, bottom: 5.0 };
    let base = Photo {
        suggested_crop: Some(suggested),
        ..photo(1000, 800)
    };

    let edited = apply_edit(&base, &CropEdit::Set { edge: CropEdge::Left, value: 250.0 });
    assert_eq!(edited.effective_crop().left, 250.0);

    let cleared = apply_edit(&edited, &CropEdit::Clear);
    assert!(cleared.user_crop.is_none());
    assert_eq!(cleared.effective_crop(), suggested, "解除後はAI候補に戻る");
}

#[test]
fn test_clear_without_suggestion_is_empty_crop() {
    let edited = apply_edit(
        &photo(1000, 800),
        &CropEdit::Set { edge: CropEdge::Top, value: 100.0 },
    );
    let cleared = apply_edit(&edited, &CropEdit::Clear);
    assert!(cleared.effective_crop().is_empty());
}

#[test]
fn test_reset_detaches_from_future_suggestion_changes() {
    let suggested = CropRect { left: 40.0, ..Default::default() };
    let base = Photo {
        suggested_crop: Some(suggested),
        user_crop: Some(CropRect { left: 300.0, ..Default::default() }),
        ..photo(1000, 800)
    };

    let reset = apply_edit(&base, &CropEdit::Reset);
    assert_eq!(reset.user_crop, Some(suggested), "リセットは候補の写しを上書きに置く");

    // 候補が後から変わっても、リセット済みの上書きは追従しない
    let resuggested = Photo {
        suggested_crop: Some(CropRect { left: 99.0, ..Default::default() }),
        ..reset
    };
    assert_eq!(resuggested.effective_crop().left, 40.0);
}

#[test]
fn test_overlay_scales_with_display_box() {
    let crop = CropRect { left: 200.0, right: 100.0, top: 80.0, bottom: 40.0 };

    // 2000x800 の写真を 500x400 のボックスに表示: 横1/4、縦1/2
    let geometry = map_overlay(2000, 800, &crop, 500.0, 400.0);
    assert_eq!(geometry.left_px, 50.0);
    assert_eq!(geometry.right_px, 25.0);
    assert_eq!(geometry.top_px, 40.0);
    assert_eq!(geometry.bottom_px, 20.0);
}

#[test]
fn test_overlay_of_effective_crop_after_edits() {
    // 編集 → 有効クロップ → オーバーレイの一連の流れ
    let base = photo(1000, 800);
    let edited = apply_edit(&base, &CropEdit::Set { edge: CropEdge::Left, value: 100.0 });
    let edited = apply_edit(&edited, &CropEdit::Set { edge: CropEdge::Bottom, value: 80.0 });

    let geometry = map_overlay(
        edited.width,
        edited.height,
        &edited.effective_crop(),
        500.0,
        400.0,
    );
    assert_eq!(geometry.left_px, 50.0);
    assert_eq!(geometry.bottom_px, 40.0);
    assert_eq!(geometry.right_px, 0.0);
}

#[test]
fn test_overlay_zero_box_degenerates_to_identity() {
    let crop = CropRect { left: 120.0, top: 60.0, ..Default::default() };
    let geometry = map_overlay(1000, 800, &crop, 0.0, 0.0);
    assert_eq!(geometry.left_px, 120.0);
    assert_eq!(geometry.top_px, 60.0);
}

#[test]
fn test_rapid_edits_last_write_wins() {
    let mut current = photo(1000, 800);
    for value in [50.0, 200.0, 120.0, 75.0] {
        current = apply_edit(&current, &CropEdit::Set { edge: CropEdge::Right, value });
    }
    assert_eq!(current.effective_crop().right, 75.0);
}
