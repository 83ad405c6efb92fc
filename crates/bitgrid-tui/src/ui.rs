pub mod input_form;
pub mod statusbar;
pub mod view_grid;
pub mod widget;

use crate::state::{AppState, Field};
use crate::ui_state::UIState;
use input_form::InputForm;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};
use statusbar::StatusBar;
use view_grid::GridView;
use widget::Widget;

pub fn ui(f: &mut Frame, app_state: &AppState, ui_state: &mut UIState) {
    let messages = app_state.last.messages();
    let warning_height = messages.len().max(1) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                           // Title
            Constraint::Length(Field::all().len() as u16 + 2), // Inputs
            Constraint::Length(warning_height),              // Warnings
            Constraint::Min(0),                              // Grid
            Constraint::Length(1),                           // Status bar
        ])
        .split(f.area());

    f.render_widget(
        Block::default().style(
            Style::default()
                .bg(ui_state.theme.background)
                .fg(ui_state.theme.foreground),
        ),
        f.area(),
    );

    let title = Paragraph::new(format!(
        " HEX, DEC to BIN and IDX v{}",
        env!("CARGO_PKG_VERSION")
    ))
    .style(
        Style::default()
            .fg(ui_state.theme.title_fg)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, chunks[0]);

    InputForm.render(f, chunks[1], app_state, ui_state);

    let warnings: Vec<Line> = messages
        .into_iter()
        .map(|m| Line::from(format!("  {}", m)))
        .collect();
    f.render_widget(
        Paragraph::new(warnings).style(Style::default().fg(ui_state.theme.error_fg)),
        chunks[2],
    );

    GridView.render(f, chunks[3], app_state, ui_state);
    StatusBar.render(f, chunks[4], app_state, ui_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Edit;
    use crate::theme::Theme;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn screen_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_render_grid_rows() {
        let mut app = AppState::default();
        for c in "A3".chars() {
            app.edit(Field::Hex, Edit::Insert(c));
        }
        app.edit(Field::MarkStart, Edit::Insert('0'));
        app.edit(Field::MarkEnd, Edit::Insert('3'));
        let mut ui_state = UIState::new(Theme::dark());

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| ui(f, &app, &mut ui_state)).unwrap();

        let lines = screen_lines(terminal.backend().buffer());
        assert!(lines.iter().any(|l| l.contains("HEX, DEC to BIN and IDX")));
        assert!(lines.iter().any(|l| l.contains("Enter DEC Number: 163")));
        assert!(lines.iter().any(|l| l.contains(" HEX:    A   3")));
        assert!(lines.iter().any(|l| l.contains(" BIN: 10100011")));
        assert!(lines.iter().any(|l| l.contains(" IDX: 76543210")));
    }

    #[test]
    fn test_render_warnings() {
        let mut app = AppState::default();
        app.edit(Field::Dec, Edit::Insert('x'));
        let mut ui_state = UIState::new(Theme::dark());

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| ui(f, &app, &mut ui_state)).unwrap();

        let lines = screen_lines(terminal.backend().buffer());
        assert!(lines.iter().any(|l| l.contains("Invalid DEC number")));
        assert!(!lines.iter().any(|l| l.contains(" BIN: ")));
    }
}
