#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod cell_list;
pub mod conversion;
pub mod error;
pub mod grid;
pub mod parser;
pub mod range;
pub mod session;

pub use cell_list::{Cell, CellChange, CellKey, ChangeKind, IncrementalCellList};
pub use conversion::{Conversion, Mode, PaddedBinary, convert};
pub use error::{ConversionFailure, Warning};
pub use grid::{CellSpec, Grid, Paint, Row, build};
pub use parser::{ParseError, Radix, parse};
pub use range::{BitRange, RangeOutcome, normalize};
pub use session::{RecomputeRequest, RenderInstruction, RowView, Session};
