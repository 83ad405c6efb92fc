use crate::grid::{Paint, Row};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub row: Row,
    pub position: usize,
}

/// One persistent display cell. Created once, then only mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    key: CellKey,
    epoch: u64,
    text: String,
    fg: Paint,
    bg: Paint,
    visible: bool,
    dirty: bool,
}

impl Cell {
    fn blank(key: CellKey, epoch: u64) -> Self {
        Self {
            key,
            epoch,
            text: String::new(),
            fg: Paint::Default,
            bg: Paint::Default,
            visible: false,
            dirty: true,
        }
    }

    pub fn key(&self) -> CellKey {
        self.key
    }

    /// Value of the list's epoch counter when this cell was allocated.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fg(&self) -> Paint {
        self.fg
    }

    pub fn bg(&self) -> Paint {
        self.bg
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Updated,
    Shown,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub key: CellKey,
    pub kind: ChangeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellListError {
    #[error("no {row} cell at position {position} (capacity {capacity})")]
    OutOfRange {
        row: Row,
        position: usize,
        capacity: usize,
    },
}

/// Reuse cache for the cells of one row.
///
/// The backing store only grows. Shorter values hide the tail instead of
/// dropping it, so a cell keeps its identity for as long as the list lives.
/// Every observable mutation is queued as a [`CellChange`] until
/// [`IncrementalCellList::take_changes`] is called.
#[derive(Debug, Clone)]
pub struct IncrementalCellList {
    row: Row,
    cells: Vec<Cell>,
    len: usize,
    epoch: u64,
    allocations: usize,
    visible: usize,
    changes: Vec<CellChange>,
}

impl IncrementalCellList {
    pub fn new(row: Row) -> Self {
        Self {
            row,
            cells: Vec::new(),
            len: 0,
            epoch: 0,
            allocations: 0,
            visible: 0,
            changes: Vec::new(),
        }
    }

    pub fn row(&self) -> Row {
        self.row
    }

    /// Length requested by the last [`set_length`](Self::set_length).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of cells ever materialised.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn allocations(&self) -> usize {
        self.allocations
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    pub fn cell(&self, position: usize) -> Option<&Cell> {
        self.cells.get(position)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn visible_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.visible)
    }

    /// Makes room for `len` cells, allocating only positions never seen before.
    pub fn set_length(&mut self, len: usize) {
        self.epoch += 1;
        self.len = len;
        for position in self.cells.len()..len {
            let key = CellKey {
                row: self.row,
                position,
            };
            self.cells.push(Cell::blank(key, self.epoch));
            self.allocations += 1;
            self.changes.push(CellChange {
                key,
                kind: ChangeKind::Created,
            });
        }
    }

    /// Mutates the cell at `position` in place. `None` colours are left as is.
    pub fn update(
        &mut self,
        position: usize,
        text: &str,
        fg: Option<Paint>,
        bg: Option<Paint>,
    ) -> Result<(), CellListError> {
        let capacity = self.cells.len();
        let cell = self
            .cells
            .get_mut(position)
            .ok_or(CellListError::OutOfRange {
                row: self.row,
                position,
                capacity,
            })?;

        let mut changed = false;
        if cell.text != text {
            cell.text.clear();
            cell.text.push_str(text);
            changed = true;
        }
        if let Some(fg) = fg
            && cell.fg != fg
        {
            cell.fg = fg;
            changed = true;
        }
        if let Some(bg) = bg
            && cell.bg != bg
        {
            cell.bg = bg;
            changed = true;
        }

        if changed && !cell.dirty {
            cell.dirty = true;
            self.changes.push(CellChange {
                key: cell.key,
                kind: ChangeKind::Updated,
            });
        }
        Ok(())
    }

    /// Shows positions up to and including `last_active` and hides the rest.
    pub fn commit(&mut self, last_active: usize) {
        self.apply_visibility(|position| position <= last_active);
    }

    pub fn clear(&mut self) {
        self.apply_visibility(|_| false);
    }

    fn apply_visibility(&mut self, visible: impl Fn(usize) -> bool) {
        let mut count = 0;
        for (position, cell) in self.cells.iter_mut().enumerate() {
            let show = visible(position);
            if show {
                count += 1;
            }
            if cell.visible != show {
                cell.visible = show;
                self.changes.push(CellChange {
                    key: cell.key,
                    kind: if show {
                        ChangeKind::Shown
                    } else {
                        ChangeKind::Hidden
                    },
                });
            }
        }
        self.visible = count;
    }

    /// Drains the queued changes.
    pub fn take_changes(&mut self) -> Vec<CellChange> {
        for cell in &mut self.cells {
            cell.dirty = false;
        }
        std::mem::take(&mut self.changes)
    }
}
