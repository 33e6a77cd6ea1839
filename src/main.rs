use rusty_sprite::export::{self, ExportFormat};
use rusty_sprite::{Cel, Editor, Image, Layer, MoveTool, Rgba, Sprite};

/// Sprite size for the demo timeline, overridable with `--size WxH`.
fn parse_size_arg() -> (i32, i32) {
    let mut size = (64, 64);
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--size" {
            if let Some(next) = args.next() {
                if let Some((w, h)) = next.split_once('x') {
                    if let (Ok(w), Ok(h)) = (w.parse(), h.parse()) {
                        size = (w, h);
                    }
                }
            }
        }
    }
    size
}

fn checkerboard(width: i32, height: i32, a: Rgba, b: Rgba) -> Image {
    let mut image = Image::new(width, height).expect("demo size is positive");
    for y in 0..height {
        for x in 0..width {
            image.put_pixel(x, y, if (x / 8 + y / 8) % 2 == 0 { a } else { b });
        }
    }
    image
}

fn main() {
    env_logger::init();

    let (width, height) = parse_size_arg();
    let mut sprite = Sprite::new(width, height);
    sprite.frames = 3;

    let mut layer = Layer::new("Background");
    let art = layer
        .stock
        .add(checkerboard(width, height, Rgba::WHITE, Rgba::rgb(180, 40, 40)));
    layer.add_cel(Cel::new(0, art));
    layer.add_cel(Cel::new(2, art)); // frame 2 repeats frame 0's image
    sprite.add_layer(layer);

    let mut editor = Editor::new(sprite);

    // Linked frames share one stock image instead of duplicating pixels.
    let layer = editor.sprite.layer().expect("demo layer is active");
    if let Some(cel) = layer.cel(2) {
        match cel.find_link(layer) {
            Some(link) => println!("frame 2 links to frame {}", link.frame()),
            None => println!("frame 2 has unique pixels"),
        }
    }

    // Select a square, clear it, then take the edit back.
    editor.sprite.mask.replace(8, 8, 16, 16);
    editor.clear_masked_region();
    println!(
        "cleared 16x16 selection, can_undo = {}",
        editor.history.can_undo()
    );
    editor.undo();
    println!("undone, can_redo = {}", editor.history.can_redo());

    // Lift the selection into its own (unattached) layer.
    if let Some(selection) = editor.extract_mask_to_layer() {
        println!(
            "extracted layer '{}' with {} cel(s)",
            selection.name,
            selection.cels().len()
        );
    }

    // Drag the cel four pixels right, commit, then undo the move.
    if let Some(mut tool) = MoveTool::begin(&editor, 0, 0) {
        tool.drag(&mut editor, 4, 0);
        println!("{}", tool.status(&editor));
        tool.commit(&mut editor);
    }
    editor.undo();

    // Dump the resolved current frame.
    if let Some(image) = editor.image() {
        let path = std::env::temp_dir().join("rusty-sprite-frame0.png");
        match export::save_image(image, &path, ExportFormat::Png) {
            Ok(()) => println!("wrote {}", path.display()),
            Err(err) => eprintln!("export failed: {err}"),
        }
    }
}
