use crate::conversion::PaddedBinary;
use crate::range::BitRange;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Row {
    Hex,
    Bin,
    Idx,
}

impl Row {
    /// Rows in the order they are stacked and updated.
    pub fn all() -> [Row; 3] {
        [Row::Hex, Row::Bin, Row::Idx]
    }

    pub fn label(self) -> &'static str {
        match self {
            Row::Hex => " HEX: ",
            Row::Bin => " BIN: ",
            Row::Idx => " IDX: ",
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim().trim_end_matches(':'))
    }
}

/// Semantic colour of a cell; the render surface decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Paint {
    #[default]
    Default,
    /// Background of a hex digit whose whole nibble is marked.
    NibbleMark,
    /// Foreground of a marked bit.
    BitMark,
    /// Foreground of the index under a marked bit.
    IndexMark,
}

/// Desired state of one cell. `None` colours leave the cell's colour alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSpec {
    pub text: String,
    pub fg: Option<Paint>,
    pub bg: Option<Paint>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    /// Width every cell text is right aligned to.
    pub column_width: usize,
    pub hex: Vec<CellSpec>,
    pub bin: Vec<CellSpec>,
    pub idx: Vec<CellSpec>,
}

impl Grid {
    pub fn row(&self, row: Row) -> &[CellSpec] {
        match row {
            Row::Hex => &self.hex,
            Row::Bin => &self.bin,
            Row::Idx => &self.idx,
        }
    }

    pub fn len(&self) -> usize {
        self.bin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bin.is_empty()
    }
}

pub fn column_width(bits: usize) -> usize {
    match bits {
        0..=10 => 1,
        11..=100 => 2,
        101..=1000 => 3,
        _ => 4,
    }
}

/// Mark bounds in position coordinates (0 = leftmost bit).
///
/// `start` comes from the low bit index and `end` from the high one, so
/// `start >= end`. Either may fall outside `0..len`, hence the signed type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Marks {
    start: i128,
    end: i128,
}

impl Marks {
    fn translate(range: Option<BitRange>, len: usize) -> Option<Self> {
        let range = range?;
        let len = len as i128;
        Some(Self {
            start: len - range.low as i128 - 1,
            end: len - range.high as i128 - 1,
        })
    }

    fn covers_bit(&self, position: usize) -> bool {
        let i = position as i128;
        self.start >= i && self.end <= i
    }

    fn encloses(&self, first: usize, last: usize) -> bool {
        self.end <= first as i128 && last as i128 <= self.start
    }
}

/// Builds the hex, bin and index rows for `padded`, highlighting `range`.
pub fn build(padded: &PaddedBinary, range: Option<BitRange>) -> Grid {
    let len = padded.len();
    if len == 0 {
        return Grid::default();
    }

    let width = column_width(len);
    let marks = Marks::translate(range, len);
    log::debug!("marks for {} bits: {:?}", len, marks);

    let mut hex = Vec::with_capacity(len);
    let mut nibbles = padded.nibbles();
    for i in 0..len {
        if (i + 1) % 4 == 0 {
            let first = i + 1 - 4;
            let marked = marks.is_some_and(|m| m.encloses(first, i));
            let digit = nibbles.next().unwrap_or(' ');
            hex.push(CellSpec {
                text: format!("{:>width$}", digit),
                fg: None,
                bg: Some(if marked {
                    Paint::NibbleMark
                } else {
                    Paint::Default
                }),
            });
        } else {
            hex.push(CellSpec {
                text: " ".repeat(width),
                fg: None,
                bg: None,
            });
        }
    }

    let mut bin = Vec::with_capacity(len);
    let mut idx = Vec::with_capacity(len);
    for (i, bit) in padded.bits().enumerate() {
        let marked = marks.is_some_and(|m| m.covers_bit(i));
        bin.push(CellSpec {
            text: format!("{:>width$}", bit),
            fg: Some(if marked { Paint::BitMark } else { Paint::Default }),
            bg: None,
        });
        idx.push(CellSpec {
            text: format!("{:>width$}", len - i - 1),
            fg: Some(if marked {
                Paint::IndexMark
            } else {
                Paint::Default
            }),
            bg: None,
        });
    }

    Grid {
        column_width: width,
        hex,
        bin,
        idx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::{Mode, convert};

    fn padded(hex: &str) -> PaddedBinary {
        convert(Mode::Hex, hex, "", "").unwrap().padded
    }

    fn texts(cells: &[CellSpec]) -> Vec<&str> {
        cells.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_build_a3_without_marks() {
        let grid = build(&padded("A3"), None);
        assert_eq!(grid.column_width, 1);
        assert_eq!(texts(&grid.bin), ["1", "0", "1", "0", "0", "0", "1", "1"]);
        assert_eq!(texts(&grid.idx), ["7", "6", "5", "4", "3", "2", "1", "0"]);
        assert_eq!(texts(&grid.hex), [" ", " ", " ", "A", " ", " ", " ", "3"]);
        assert!(grid.bin.iter().all(|c| c.fg == Some(Paint::Default)));
        assert_eq!(grid.hex[3].bg, Some(Paint::Default));
        assert_eq!(grid.hex[0].bg, None);
    }

    #[test]
    fn test_build_a3_marks_low_nibble() {
        let grid = build(&padded("A3"), Some(BitRange::new(0, 3)));

        assert_eq!(grid.hex[3].bg, Some(Paint::Default));
        assert_eq!(grid.hex[7].bg, Some(Paint::NibbleMark));

        for i in 0..4 {
            assert_eq!(grid.bin[i].fg, Some(Paint::Default), "bit at {}", i);
            assert_eq!(grid.idx[i].fg, Some(Paint::Default), "index at {}", i);
        }
        for i in 4..8 {
            assert_eq!(grid.bin[i].fg, Some(Paint::BitMark), "bit at {}", i);
            assert_eq!(grid.idx[i].fg, Some(Paint::IndexMark), "index at {}", i);
        }
    }

    #[test]
    fn test_partial_nibble_is_not_highlighted() {
        // Bits 2..=5 straddle both nibbles of 0xA3.
        let grid = build(&padded("A3"), Some(BitRange::new(5, 2)));
        assert_eq!(grid.hex[3].bg, Some(Paint::Default));
        assert_eq!(grid.hex[7].bg, Some(Paint::Default));

        let marked: Vec<usize> = grid
            .bin
            .iter()
            .enumerate()
            .filter(|(_, c)| c.fg == Some(Paint::BitMark))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(marked, [2, 3, 4, 5]);
    }

    #[test]
    fn test_range_past_the_top_bit() {
        // High index beyond the grid marks everything from the low index up.
        let grid = build(&padded("A3"), Some(BitRange::new(4, 100)));
        assert_eq!(grid.hex[3].bg, Some(Paint::NibbleMark));
        assert_eq!(grid.hex[7].bg, Some(Paint::Default));
        assert_eq!(grid.idx[0].fg, Some(Paint::IndexMark));
        assert_eq!(grid.idx[4].fg, Some(Paint::Default));
    }

    #[test]
    fn test_range_entirely_outside() {
        let grid = build(&padded("A3"), Some(BitRange::new(8, 20)));
        assert!(grid.bin.iter().all(|c| c.fg == Some(Paint::Default)));
        assert!(grid.hex.iter().all(|c| c.bg != Some(Paint::NibbleMark)));
    }

    #[test]
    fn test_index_direction() {
        let p = padded("1234");
        let grid = build(&p, None);
        assert_eq!(grid.idx[0].text.trim(), (p.len() - 1).to_string());
        assert_eq!(grid.idx[p.len() - 1].text.trim(), "0");
    }

    #[test]
    fn test_column_width_grows_with_bits() {
        assert_eq!(column_width(8), 1);
        assert_eq!(column_width(12), 2);
        assert_eq!(column_width(100), 2);
        assert_eq!(column_width(104), 3);
        assert_eq!(column_width(1004), 4);

        let grid = build(&padded("ABC"), None);
        assert_eq!(grid.column_width, 2);
        assert_eq!(grid.idx[0].text, "11");
        assert_eq!(grid.bin[0].text, " 1");
        assert_eq!(grid.hex[0].text, "  ");
        assert_eq!(grid.hex[3].text, " A");
    }

    #[test]
    fn test_empty_binary_builds_empty_grid() {
        let grid = build(&PaddedBinary::default(), None);
        assert!(grid.is_empty());
        assert!(grid.hex.is_empty() && grid.idx.is_empty());
    }
}
