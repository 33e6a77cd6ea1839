use super::Editor;
use crate::history::CelField;
use crate::raster::CelRef;

/// Phase of an interactive cel drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveState {
    Dragging,
    Committed,
    Cancelled,
}

/// Drag of the current cel, driven by discrete pointer events.
///
/// `begin` on press, `drag` on every motion, then exactly one of `commit`
/// or `cancel`. Cancelling restores the starting position directly and
/// never opens a transaction; committing records the old position as a
/// single reversible step.
#[derive(Clone, Copy, Debug)]
pub struct MoveTool {
    cel: CelRef,
    begin_x: i32,
    begin_y: i32,
    grab_x: i32,
    grab_y: i32,
    state: MoveState,
}

impl MoveTool {
    /// Grab the active cel at the pointer position; `None` when the current
    /// frame has no cel to move.
    pub fn begin(editor: &Editor, grab_x: i32, grab_y: i32) -> Option<Self> {
        let layer = editor.sprite.active_layer?;
        let cel = editor.sprite.layer()?.cel(editor.sprite.frame)?;
        Some(Self {
            cel: CelRef {
                layer,
                frame: editor.sprite.frame,
            },
            begin_x: cel.x(),
            begin_y: cel.y(),
            grab_x,
            grab_y,
            state: MoveState::Dragging,
        })
    }

    pub fn state(&self) -> MoveState {
        self.state
    }

    /// Follow the pointer: cel position = begin + (pointer - grab).
    pub fn drag(&mut self, editor: &mut Editor, x: i32, y: i32) {
        if self.state != MoveState::Dragging {
            return;
        }
        if let Some(cel) = editor.sprite.cel_at_mut(self.cel) {
            cel.set_position(self.begin_x - self.grab_x + x, self.begin_y - self.grab_y + y);
        }
    }

    /// Status-bar readout for the drag in progress.
    pub fn status(&self, editor: &Editor) -> String {
        let (x, y) = editor
            .sprite
            .cel_at(self.cel)
            .map_or((self.begin_x, self.begin_y), |c| (c.x(), c.y()));
        format!(
            "Pos {:3} {:3} Offset {:3} {:3}",
            x,
            y,
            x - self.begin_x,
            y - self.begin_y
        )
    }

    /// Keep the new position, recording one transaction that restores both
    /// axes. Returns whether the cel actually moved.
    pub fn commit(&mut self, editor: &mut Editor) -> bool {
        if self.state != MoveState::Dragging {
            return false;
        }
        self.state = MoveState::Committed;
        let Some(cel) = editor.sprite.cel_at(self.cel) else {
            return false;
        };
        if (cel.x(), cel.y()) == (self.begin_x, self.begin_y) {
            return false;
        }
        if editor.history.is_enabled() {
            editor.history.open();
            editor
                .history
                .record_cel_field(self.cel, CelField::X, self.begin_x);
            editor
                .history
                .record_cel_field(self.cel, CelField::Y, self.begin_y);
            editor.history.close();
        }
        true
    }

    /// Abandon the drag and put the cel back where it started.
    pub fn cancel(&mut self, editor: &mut Editor) {
        if self.state != MoveState::Dragging {
            return;
        }
        self.state = MoveState::Cancelled;
        if let Some(cel) = editor.sprite.cel_at_mut(self.cel) {
            cel.set_position(self.begin_x, self.begin_y);
        }
    }
}
