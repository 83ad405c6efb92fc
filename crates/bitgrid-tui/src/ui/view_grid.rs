use crate::state::AppState;
use crate::ui::widget::Widget;
use crate::ui_state::UIState;
use bitgrid_core::grid::column_width;
use bitgrid_core::{Paint, Row};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Hex, bin and index rows, split into bands of whole nibbles.
pub struct GridView;

/// How many bit positions fit on one band line.
pub fn band_size(area_width: u16, bits: usize) -> usize {
    let label = Row::Hex.label().len();
    let available = (area_width as usize).saturating_sub(label);
    let columns = available / column_width(bits);
    (columns / 4 * 4).max(4)
}

impl Widget for GridView {
    fn render(&self, f: &mut Frame, area: Rect, app_state: &AppState, ui_state: &mut UIState) {
        let theme = &ui_state.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_inactive))
            .title(" Bits ");
        let inner = block.inner(area);

        let instruction = &app_state.last;
        let bits = instruction.row(Row::Bin).cells.len();
        let per_band = band_size(inner.width, bits);

        let mut lines: Vec<Line> = Vec::new();
        for start in (0..bits).step_by(per_band) {
            let end = (start + per_band).min(bits);
            for row in Row::all() {
                let cells = instruction.row(row).cells.get(start..end).unwrap_or_default();
                let mut spans = Vec::with_capacity(cells.len() + 1);
                spans.push(Span::styled(
                    row.label(),
                    Style::default().fg(theme.row_label_fg),
                ));
                for cell in cells {
                    let fg = if cell.bg() == Paint::NibbleMark {
                        theme.nibble_mark_fg
                    } else {
                        theme.paint_fg(cell.fg())
                    };
                    spans.push(Span::styled(
                        cell.text().to_string(),
                        Style::default().fg(fg).bg(theme.paint_bg(cell.bg())),
                    ));
                }
                lines.push(Line::from(spans));
            }
            lines.push(Line::default());
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
