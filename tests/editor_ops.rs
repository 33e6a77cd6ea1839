use rand::Rng;
use rusty_sprite::{Cel, Editor, Image, Layer, Mask, Rgba, Sprite};

const BG: Rgba = Rgba {
    r: 10,
    g: 20,
    b: 30,
    a: 255,
};

/// Editor over a single-layer sprite whose image is filled with random
/// pixels, so undo comparisons catch any byte that goes astray.
fn editor_with_noise(width: i32, height: i32) -> Editor {
    let mut rng = rand::rng();
    let mut image = Image::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            image.put_pixel(
                x,
                y,
                Rgba::rgba(
                    rng.random_range(0..=255),
                    rng.random_range(0..=255),
                    rng.random_range(0..=255),
                    255,
                ),
            );
        }
    }

    let mut sprite = Sprite::new(width, height);
    let mut layer = Layer::new("art");
    let index = layer.stock.add(image);
    layer.add_cel(Cel::new(0, index));
    sprite.add_layer(layer);

    let mut editor = Editor::new(sprite);
    editor.background = BG;
    editor
}

fn current_image(editor: &Editor) -> Image {
    editor.image().expect("image resolves").clone()
}

#[test]
fn empty_mask_clears_the_whole_image_and_undoes_exactly() {
    let mut editor = editor_with_noise(32, 32);
    let before = current_image(&editor);

    editor.clear_masked_region();
    let cleared = current_image(&editor);
    assert!(cleared.pixels().iter().all(|&px| px == BG));

    assert!(editor.undo());
    assert_eq!(current_image(&editor), before);

    assert!(editor.redo());
    assert!(current_image(&editor).pixels().iter().all(|&px| px == BG));
}

#[test]
fn mask_outside_the_image_is_a_no_op_without_recording() {
    let mut editor = editor_with_noise(16, 16);
    let before = current_image(&editor);

    editor.sprite.mask.replace(100, 100, 8, 8);
    editor.clear_masked_region();

    assert_eq!(current_image(&editor), before);
    assert!(!editor.history.can_undo());
}

#[test]
fn masked_clear_touches_only_selected_pixels() {
    let mut editor = editor_with_noise(32, 32);
    let before = current_image(&editor);

    // select a 4x4 box but keep only its top row of bits set
    editor.sprite.mask.replace(10, 10, 4, 4);
    for v in 1..4 {
        for u in 0..4 {
            editor.sprite.mask.set(u, v, false);
        }
    }
    editor.clear_masked_region();

    let after = current_image(&editor);
    for y in 0..32 {
        for x in 0..32 {
            let expected = if y == 10 && (10..14).contains(&x) {
                BG
            } else {
                before.get_pixel(x, y).unwrap()
            };
            assert_eq!(after.get_pixel(x, y), Some(expected), "pixel {x},{y}");
        }
    }

    assert!(editor.undo());
    assert_eq!(current_image(&editor), before);
}

#[test]
fn masked_clear_translates_by_the_cel_offset() {
    let mut editor = editor_with_noise(16, 16);
    editor
        .sprite
        .layer_mut()
        .unwrap()
        .cel_mut(0)
        .unwrap()
        .set_position(4, 0);
    let before = current_image(&editor);

    editor.sprite.mask.replace(6, 0, 2, 1);
    editor.clear_masked_region();

    // mask coords map to image coords through the resolved offset
    let after = current_image(&editor);
    assert_eq!(after.get_pixel(2, 0), Some(BG));
    assert_eq!(after.get_pixel(3, 0), Some(BG));
    assert_eq!(after.get_pixel(6, 0), before.get_pixel(6, 0));
}

#[test]
fn clear_without_a_resolvable_image_does_nothing() {
    let mut editor = editor_with_noise(16, 16);
    editor.sprite.frame = 2;
    editor.clear_masked_region();
    assert!(!editor.history.can_undo());
}

#[test]
fn extract_copies_only_the_selected_square() {
    let mut editor = editor_with_noise(16, 16);
    let source = current_image(&editor);

    // 4x4 mask with a 2x2 selection at mask-local (1,1)-(2,2)
    let mut mask = Mask::rect(5, 5, 4, 4);
    for v in 0..4 {
        for u in 0..4 {
            mask.set(u, v, (1..=2).contains(&u) && (1..=2).contains(&v));
        }
    }
    editor.sprite.mask = mask;

    let layer = editor.extract_mask_to_layer().expect("extraction succeeds");
    assert_eq!(layer.cels().len(), 1);

    let cel = layer.cel(0).expect("cel at the current frame");
    assert_eq!((cel.x(), cel.y()), (5, 5));

    let extracted = layer.stock.get(cel.image()).expect("image in new stock");
    assert_eq!((extracted.width(), extracted.height()), (4, 4));
    for v in 0..4 {
        for u in 0..4 {
            let expected = if (1..=2).contains(&u) && (1..=2).contains(&v) {
                source.get_pixel(5 + u, 5 + v).unwrap()
            } else {
                Rgba::TRANSPARENT
            };
            assert_eq!(extracted.get_pixel(u, v), Some(expected), "pixel {u},{v}");
        }
    }

    // the sprite itself is untouched
    assert_eq!(editor.sprite.layers.len(), 1);
}

#[test]
fn extract_skips_source_reads_outside_the_image() {
    let mut editor = editor_with_noise(8, 8);
    let source = current_image(&editor);

    // mask straddles the image's right edge
    editor.sprite.mask.replace(6, 0, 4, 1);
    let layer = editor.extract_mask_to_layer().unwrap();
    let extracted = layer.stock.get(layer.cel(0).unwrap().image()).unwrap();

    assert_eq!(extracted.get_pixel(0, 0), source.get_pixel(6, 0));
    assert_eq!(extracted.get_pixel(1, 0), source.get_pixel(7, 0));
    assert!(extracted.get_pixel(2, 0).unwrap().is_transparent());
    assert!(extracted.get_pixel(3, 0).unwrap().is_transparent());
}

#[test]
fn extract_requires_a_mask_and_a_source_image() {
    let mut editor = editor_with_noise(8, 8);
    assert!(editor.extract_mask_to_layer().is_none(), "no mask");

    editor.sprite.mask.replace(0, 0, 4, 4);
    editor.sprite.frame = 3;
    assert!(editor.extract_mask_to_layer().is_none(), "no source image");
}

#[test]
fn disabled_history_makes_clears_irreversible() {
    let mut editor = editor_with_noise(8, 8);
    editor.history.set_enabled(false);

    editor.clear_masked_region();
    assert!(current_image(&editor).pixels().iter().all(|&px| px == BG));
    assert!(!editor.undo());
}
