use crate::state::AppState;
use crate::theme::Theme;
use crate::ui::input_form::InputForm;
use crate::ui::ui;
use crate::ui::widget::{Widget, WidgetResult};
use crate::ui_state::{Action, UIState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Stdout;

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app_state: AppState,
    mut ui_state: UIState,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui(f, &app_state, &mut ui_state))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key(key, &mut app_state, &mut ui_state);
        }

        if ui_state.should_quit {
            log::info!("quit after {} cycles", app_state.session.cycles());
            return Ok(());
        }
    }
}

/// Routes one key press: global shortcuts first, then the input form.
pub fn handle_key(key: KeyEvent, app_state: &mut AppState, ui_state: &mut UIState) {
    if let Some(action) = global_action(key) {
        handle_action(app_state, ui_state, action);
        return;
    }

    let mut form = InputForm;
    match form.handle_input(key, app_state, ui_state) {
        WidgetResult::Action(action) => handle_action(app_state, ui_state, action),
        WidgetResult::Handled | WidgetResult::Ignored => {}
    }
}

fn global_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') if key.modifiers == KeyModifiers::CONTROL => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::F(2) => Some(Action::ToggleTheme),
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrevious),
        _ => None,
    }
}

pub fn handle_action(app_state: &mut AppState, ui_state: &mut UIState, action: Action) {
    match action {
        Action::Quit => ui_state.should_quit = true,
        Action::FocusNext => ui_state.focus = ui_state.focus.next(),
        Action::FocusPrevious => ui_state.focus = ui_state.focus.previous(),
        Action::ToggleTheme => {
            let theme: Theme = ui_state.theme.next();
            ui_state.theme = theme;
            app_state.system_config.theme = theme.name.to_string();
            match app_state.system_config.save() {
                Ok(()) => ui_state.set_status_message(format!("Theme: {}", theme.name)),
                Err(e) => {
                    log::error!("failed to save config: {:#}", e);
                    ui_state.set_status_message(format!("Theme: {} (not saved: {})", theme.name, e));
                }
            }
        }
    }
}
