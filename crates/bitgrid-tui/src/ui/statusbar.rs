use crate::state::AppState;
use crate::ui::widget::Widget;
use crate::ui_state::UIState;
use bitgrid_core::Row;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
};

pub struct StatusBar;

pub fn info_text(app_state: &AppState) -> String {
    let bits = app_state.last.row(Row::Bin).visible_count;
    let mark = match app_state.last.range {
        Some(range) => format!("{}-{}", range.low, range.high),
        None => "none".to_string(),
    };
    format!(
        "Mode: {} | Bits: {} | Mark: {} | Theme: {} ",
        app_state.mode, bits, mark, app_state.system_config.theme
    )
}

impl Widget for StatusBar {
    fn render(&self, f: &mut Frame, area: Rect, app_state: &AppState, ui_state: &mut UIState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50), // Message
                Constraint::Percentage(50), // Info
            ])
            .split(area);

        let status_msg = Paragraph::new(Span::styled(
            format!(" {}", ui_state.status_bar.message),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .style(
            Style::default()
                .bg(ui_state.theme.status_bar_bg)
                .fg(ui_state.theme.status_bar_fg),
        );
        f.render_widget(status_msg, chunks[0]);

        let info_widget = Paragraph::new(info_text(app_state))
            .alignment(Alignment::Right)
            .style(
                Style::default()
                    .bg(ui_state.theme.status_bar_bg)
                    .fg(ui_state.theme.status_bar_fg),
            );
        f.render_widget(info_widget, chunks[1]);
    }
}
