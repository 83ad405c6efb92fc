use crate::cell_list::{Cell, CellChange, IncrementalCellList};
use crate::conversion::{Conversion, Mode, convert};
use crate::error::Warning;
use crate::grid::{CellSpec, Row, build};
use crate::range::{BitRange, normalize};

/// Everything one recompute cycle looks at. Built fresh for every edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecomputeRequest {
    pub mode: Mode,
    pub hex: String,
    pub dec: String,
    pub bin: String,
    pub mark_start: String,
    pub mark_end: String,
}

impl RecomputeRequest {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn hex(mut self, text: impl Into<String>) -> Self {
        self.hex = text.into();
        self
    }

    pub fn dec(mut self, text: impl Into<String>) -> Self {
        self.dec = text.into();
        self
    }

    pub fn bin(mut self, text: impl Into<String>) -> Self {
        self.bin = text.into();
        self
    }

    pub fn marks(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.mark_start = start.into();
        self.mark_end = end.into();
        self
    }
}

/// State of one row after a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub row: Row,
    /// Visible cells, leftmost first.
    pub cells: Vec<Cell>,
    pub visible_count: usize,
    /// Mutations made to this row during the cycle.
    pub changes: Vec<CellChange>,
}

impl RowView {
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.text()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInstruction {
    pub warnings: Vec<Warning>,
    pub conversion: Option<Conversion>,
    pub range: Option<BitRange>,
    /// Hex, bin and index rows, in that order.
    pub rows: [RowView; 3],
}

impl RenderInstruction {
    pub fn success(&self) -> bool {
        self.conversion.is_some()
    }

    pub fn row(&self, row: Row) -> &RowView {
        match row {
            Row::Hex => &self.rows[0],
            Row::Bin => &self.rows[1],
            Row::Idx => &self.rows[2],
        }
    }

    /// Text of every warning meant for the user.
    pub fn messages(&self) -> Vec<String> {
        self.warnings
            .iter()
            .filter(|w| !w.is_silent())
            .map(|w| w.to_string())
            .collect()
    }
}

/// Owns the three row caches and runs recompute cycles against them.
#[derive(Debug, Clone)]
pub struct Session {
    hex: IncrementalCellList,
    bin: IncrementalCellList,
    idx: IncrementalCellList,
    cycles: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            hex: IncrementalCellList::new(Row::Hex),
            bin: IncrementalCellList::new(Row::Bin),
            idx: IncrementalCellList::new(Row::Idx),
            cycles: 0,
        }
    }

    pub fn list(&self, row: Row) -> &IncrementalCellList {
        match row {
            Row::Hex => &self.hex,
            Row::Bin => &self.bin,
            Row::Idx => &self.idx,
        }
    }

    fn list_mut(&mut self, row: Row) -> &mut IncrementalCellList {
        match row {
            Row::Hex => &mut self.hex,
            Row::Bin => &mut self.bin,
            Row::Idx => &mut self.idx,
        }
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Runs one full cycle: convert, validate the marks, rebuild the rows.
    ///
    /// Never fails. Conversion problems clear all rows; mark problems only
    /// drop the highlight.
    pub fn recompute(&mut self, request: &RecomputeRequest) -> RenderInstruction {
        self.cycles += 1;
        let mut warnings = Vec::new();

        let conversion = match convert(request.mode, &request.hex, &request.dec, &request.bin) {
            Ok(conversion) => Some(conversion),
            Err(failure) => {
                warnings.push(Warning::from(failure));
                None
            }
        };

        let outcome = normalize(&request.mark_start, &request.mark_end);
        warnings.extend(outcome.warnings);

        match &conversion {
            Some(conversion) => {
                let grid = build(&conversion.padded, outcome.range);
                for row in Row::all() {
                    self.apply(row, grid.row(row));
                }
            }
            None => {
                for row in Row::all() {
                    self.list_mut(row).clear();
                }
            }
        }

        log::debug!(
            "cycle {}: mode {} warnings {:?} range {:?}",
            self.cycles,
            request.mode,
            warnings,
            outcome.range
        );

        RenderInstruction {
            warnings,
            conversion,
            range: outcome.range,
            rows: Row::all().map(|row| self.snapshot(row)),
        }
    }

    fn apply(&mut self, row: Row, specs: &[CellSpec]) {
        let list = self.list_mut(row);
        list.set_length(specs.len());
        for (position, spec) in specs.iter().enumerate() {
            if let Err(e) = list.update(position, &spec.text, spec.fg, spec.bg) {
                log::warn!("{}", e);
            }
        }
        match specs.len().checked_sub(1) {
            Some(last) => list.commit(last),
            None => list.clear(),
        }
    }

    fn snapshot(&mut self, row: Row) -> RowView {
        let list = self.list_mut(row);
        RowView {
            row,
            cells: list.visible_cells().cloned().collect(),
            visible_count: list.visible_count(),
            changes: list.take_changes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell_list::ChangeKind;
    use crate::error::ConversionFailure;

    #[test]
    fn test_recompute_a3() {
        let mut session = Session::new();
        let result = session.recompute(&RecomputeRequest::new(Mode::Hex).hex("A3"));
        assert!(result.success());
        assert!(result.warnings.is_empty());
        assert_eq!(result.row(Row::Bin).text(), "10100011");
        assert_eq!(result.row(Row::Idx).text(), "76543210");
        assert_eq!(result.row(Row::Hex).text(), "   A   3");
        for row in Row::all() {
            assert_eq!(result.row(row).visible_count, 8);
        }
    }

    #[test]
    fn test_recompute_missing_input_clears_rows() {
        let mut session = Session::new();
        session.recompute(&RecomputeRequest::new(Mode::Hex).hex("FF"));

        let result = session.recompute(&RecomputeRequest::new(Mode::Hex));
        assert!(!result.success());
        assert_eq!(
            result.warnings,
            vec![Warning::Conversion(ConversionFailure::MissingInput)]
        );
        assert!(result.messages().is_empty());
        for row in Row::all() {
            assert_eq!(result.row(row).visible_count, 0);
            assert!(result.row(row).cells.is_empty());
            assert!(
                result
                    .row(row)
                    .changes
                    .iter()
                    .all(|c| c.kind == ChangeKind::Hidden)
            );
        }
        // Cells are hidden, not dropped.
        assert_eq!(session.list(Row::Bin).capacity(), 8);
    }

    #[test]
    fn test_recompute_collects_every_warning() {
        let mut session = Session::new();
        let result =
            session.recompute(&RecomputeRequest::new(Mode::Dec).dec("12z").marks("x", "-1"));
        assert_eq!(
            result.messages(),
            ["Invalid DEC number", "Invalid start index", "Invalid end index"]
        );
    }

    #[test]
    fn test_bad_marks_still_render() {
        let mut session = Session::new();
        let result = session.recompute(&RecomputeRequest::new(Mode::Hex).hex("A3").marks("1", ""));
        assert!(result.success());
        assert_eq!(result.range, None);
        assert_eq!(result.messages(), ["Invalid end index"]);
        assert_eq!(result.row(Row::Bin).visible_count, 8);
    }

    #[test]
    fn test_shrinking_reuses_cells() {
        let mut session = Session::new();
        session.recompute(&RecomputeRequest::new(Mode::Hex).hex("ABCD"));
        let result = session.recompute(&RecomputeRequest::new(Mode::Hex).hex("F"));
        assert_eq!(result.row(Row::Bin).visible_count, 4);
        assert_eq!(session.list(Row::Bin).capacity(), 16);
        assert!(
            result
                .row(Row::Bin)
                .changes
                .iter()
                .all(|c| c.kind != ChangeKind::Created)
        );

        session.recompute(&RecomputeRequest::new(Mode::Hex).hex("ABCD"));
        assert_eq!(session.list(Row::Bin).allocations(), 16);
        assert_eq!(session.cycles(), 3);
    }
}
