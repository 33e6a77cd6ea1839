use crate::color::Rgba;
use crate::raster::{Cel, CelRef, Image, ImageRef, Sprite};

/// Scalar cel field tracked by the undo log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CelField {
    X,
    Y,
    Opacity,
}

/// One reversible mutation recorded inside a transaction.
#[derive(Clone, Debug)]
enum UndoItem {
    /// Restore a scalar field of a cel to `value`.
    Scalar {
        cel: CelRef,
        field: CelField,
        value: i32,
    },
    /// Restore a rectangle of a stock image.
    Region {
        image: ImageRef,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        data: Vec<Rgba>,
    },
    /// Presence toggle: `detached` holds the cel while it is out of the
    /// layer, `None` while it is attached.
    Cel {
        layer: usize,
        frame: i32,
        detached: Option<Cel>,
    },
}

/// Group of mutations recorded between `open` and `close`.
#[derive(Clone, Debug, Default)]
struct Transaction {
    items: Vec<UndoItem>,
}

/// Transactional undo/redo journal over sprite mutations.
///
/// Call sites check `is_enabled` before opening a transaction; a disabled
/// history records nothing and those mutations stay irreversible. Replay
/// swaps the sprite's current state into each item in place, so an undone
/// transaction is immediately redoable.
#[derive(Clone, Debug)]
pub struct History {
    enabled: bool,
    open: Option<Transaction>,
    undo_stack: Vec<Transaction>,
    redo_stack: Vec<Transaction>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self {
            enabled: true,
            open: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Whether call sites should record at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Start a transaction. Opening while another is open is a caller bug.
    pub fn open(&mut self) {
        debug_assert!(self.open.is_none(), "undo transaction already open");
        self.open = Some(Transaction::default());
    }

    /// Seal the open transaction. Empty transactions are dropped; anything
    /// else lands on the undo stack and invalidates the redo stack.
    pub fn close(&mut self) {
        debug_assert!(self.open.is_some(), "no undo transaction to close");
        if let Some(tx) = self.open.take() {
            if !tx.items.is_empty() {
                self.undo_stack.push(tx);
                self.redo_stack.clear();
            }
        }
    }

    fn record(&mut self, item: UndoItem) {
        debug_assert!(self.open.is_some(), "recording outside an undo transaction");
        if let Some(tx) = &mut self.open {
            tx.items.push(item);
        }
    }

    /// Record the pre-mutation value of one scalar cel field.
    pub fn record_cel_field(&mut self, cel: CelRef, field: CelField, value: i32) {
        self.record(UndoItem::Scalar { cel, field, value });
    }

    /// Snapshot a rectangle of `image` before it is mutated. The rectangle
    /// must lie inside the image.
    pub fn record_image(
        &mut self,
        image: &Image,
        at: ImageRef,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) {
        let data = image.read_region(x, y, width, height);
        self.record(UndoItem::Region {
            image: at,
            x,
            y,
            width,
            height,
            data,
        });
    }

    /// Record that a cel was just attached at `at`; undoing detaches it.
    pub fn record_cel_added(&mut self, at: CelRef) {
        self.record(UndoItem::Cel {
            layer: at.layer,
            frame: at.frame,
            detached: None,
        });
    }

    /// Record a cel taken out of `layer`; undoing re-attaches it.
    pub fn record_cel_removed(&mut self, layer: usize, cel: Cel) {
        self.record(UndoItem::Cel {
            layer,
            frame: cel.frame(),
            detached: Some(cel),
        });
    }

    /// Revert the most recent closed transaction, replaying its items in
    /// reverse call order.
    pub fn undo(&mut self, sprite: &mut Sprite) -> bool {
        let Some(mut tx) = self.undo_stack.pop() else {
            return false;
        };
        log::debug!("undo: {} item(s)", tx.items.len());
        for item in tx.items.iter_mut().rev() {
            swap_item(sprite, item);
        }
        self.redo_stack.push(tx);
        true
    }

    /// Reapply the most recently undone transaction, forward order.
    pub fn redo(&mut self, sprite: &mut Sprite) -> bool {
        let Some(mut tx) = self.redo_stack.pop() else {
            return false;
        };
        log::debug!("redo: {} item(s)", tx.items.len());
        for item in tx.items.iter_mut() {
            swap_item(sprite, item);
        }
        self.undo_stack.push(tx);
        true
    }
}

/// Apply one item and store the replaced state back into it, so the next
/// replay reverses this one. Targets that no longer resolve are skipped.
fn swap_item(sprite: &mut Sprite, item: &mut UndoItem) {
    match item {
        UndoItem::Scalar { cel, field, value } => {
            if let Some(cel) = sprite.cel_at_mut(*cel) {
                let current = read_field(cel, *field);
                write_field(cel, *field, *value);
                *value = current;
            }
        }
        UndoItem::Region {
            image,
            x,
            y,
            width,
            height,
            data,
        } => {
            if let Some(image) = sprite.stock_image_mut(*image) {
                let current = image.read_region(*x, *y, *width, *height);
                image.write_region(*x, *y, *width, *height, data);
                *data = current;
            }
        }
        UndoItem::Cel {
            layer,
            frame,
            detached,
        } => {
            if let Some(layer) = sprite.layers.get_mut(*layer) {
                match detached.take() {
                    Some(cel) => layer.add_cel(cel),
                    None => *detached = layer.remove_cel(*frame),
                }
            }
        }
    }
}

fn read_field(cel: &Cel, field: CelField) -> i32 {
    match field {
        CelField::X => cel.x(),
        CelField::Y => cel.y(),
        CelField::Opacity => cel.opacity(),
    }
}

fn write_field(cel: &mut Cel, field: CelField, value: i32) {
    match field {
        CelField::X => cel.set_position(value, cel.y()),
        CelField::Y => cel.set_position(cel.x(), value),
        CelField::Opacity => cel.set_opacity(value),
    }
}
