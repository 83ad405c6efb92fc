use crate::state::{AppState, Edit, Field};
use crate::ui::widget::{Widget, WidgetResult};
use crate::ui_state::UIState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const LABEL_WIDTH: usize = 17;

/// The five text inputs. Editing happens in the field that has focus.
pub struct InputForm;

fn prefix(field: Field) -> String {
    format!(
        "  {:<width$} ",
        format!("{}:", field.label()),
        width = LABEL_WIDTH
    )
}

impl Widget for InputForm {
    fn render(&self, f: &mut Frame, area: Rect, app_state: &AppState, ui_state: &mut UIState) {
        let theme = &ui_state.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_active))
            .title(" Input ");
        let inner = block.inner(area);

        let authoritative = Field::all()
            .into_iter()
            .find(|field| field.mode() == Some(app_state.mode));

        let lines: Vec<Line> = Field::all()
            .into_iter()
            .map(|field| {
                let label_style = if Some(field) == authoritative {
                    Style::default()
                        .fg(theme.authoritative_fg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.label_fg)
                };
                let value_style = if field == ui_state.focus {
                    Style::default()
                        .bg(theme.selection_bg)
                        .fg(theme.selection_fg)
                } else {
                    Style::default().fg(theme.foreground)
                };
                Line::from(vec![
                    Span::styled(prefix(field), label_style),
                    Span::styled(app_state.inputs.get(field).to_string(), value_style),
                ])
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);

        if let Some(row) = Field::all().iter().position(|field| *field == ui_state.focus) {
            let column = prefix(ui_state.focus).chars().count()
                + app_state.inputs.get(ui_state.focus).chars().count();
            let x = (inner.x as usize + column).min(inner.right().saturating_sub(1) as usize);
            f.set_cursor_position(Position::new(x as u16, inner.y + row as u16));
        }
    }

    fn handle_input(
        &mut self,
        key: KeyEvent,
        app_state: &mut AppState,
        ui_state: &mut UIState,
    ) -> WidgetResult {
        let edit = match key.code {
            KeyCode::Char('u') if key.modifiers == KeyModifiers::CONTROL => Edit::Clear,
            KeyCode::Char(c)
                if !key.modifiers.intersects(
                    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                ) =>
            {
                Edit::Insert(c)
            }
            KeyCode::Backspace => Edit::Backspace,
            _ => return WidgetResult::Ignored,
        };

        let success = app_state.edit(ui_state.focus, edit).success();
        let message = if success {
            format!("Converted from {}", app_state.mode)
        } else {
            "Ready".to_string()
        };
        ui_state.set_status_message(message);
        WidgetResult::Handled
    }
}
