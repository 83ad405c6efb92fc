use crate::config::SystemConfig;
use bitgrid_core::{Mode, Radix, RecomputeRequest, RenderInstruction, Session};

/// One of the five text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Hex,
    Dec,
    Bin,
    MarkStart,
    MarkEnd,
}

impl Field {
    pub fn all() -> [Field; 5] {
        [
            Field::Hex,
            Field::Dec,
            Field::Bin,
            Field::MarkStart,
            Field::MarkEnd,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Hex => "Enter HEX Number",
            Field::Dec => "Enter DEC Number",
            Field::Bin => "Enter BIN Number",
            Field::MarkStart => "Mark Start Index",
            Field::MarkEnd => "Mark End Index",
        }
    }

    /// The conversion mode editing this field selects, if it is a number field.
    pub fn mode(self) -> Option<Mode> {
        match self {
            Field::Hex => Some(Mode::Hex),
            Field::Dec => Some(Mode::Dec),
            Field::Bin => Some(Mode::Bin),
            Field::MarkStart | Field::MarkEnd => None,
        }
    }

    fn from_radix(radix: Radix) -> Self {
        match radix {
            Radix::Hex => Field::Hex,
            Radix::Dec => Field::Dec,
            Radix::Bin => Field::Bin,
        }
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        let pos = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all = Self::all();
        let pos = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(pos + all.len() - 1) % all.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Backspace,
    Clear,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub hex: String,
    pub dec: String,
    pub bin: String,
    pub mark_start: String,
    pub mark_end: String,
}

impl Inputs {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Hex => &self.hex,
            Field::Dec => &self.dec,
            Field::Bin => &self.bin,
            Field::MarkStart => &self.mark_start,
            Field::MarkEnd => &self.mark_end,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Hex => &mut self.hex,
            Field::Dec => &mut self.dec,
            Field::Bin => &mut self.bin,
            Field::MarkStart => &mut self.mark_start,
            Field::MarkEnd => &mut self.mark_end,
        }
    }
}

pub struct AppState {
    pub inputs: Inputs,
    pub mode: Mode,
    pub session: Session,
    pub last: RenderInstruction,
    pub system_config: SystemConfig,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(SystemConfig::load())
    }

    pub fn with_config(system_config: SystemConfig) -> Self {
        let mut session = Session::new();
        let last = session.recompute(&RecomputeRequest::default());
        Self {
            inputs: Inputs::default(),
            mode: Mode::default(),
            session,
            last,
            system_config,
        }
    }

    pub fn request(&self) -> RecomputeRequest {
        RecomputeRequest {
            mode: self.mode,
            hex: self.inputs.hex.clone(),
            dec: self.inputs.dec.clone(),
            bin: self.inputs.bin.clone(),
            mark_start: self.inputs.mark_start.clone(),
            mark_end: self.inputs.mark_end.clone(),
        }
    }

    /// Runs a cycle and, on success, rewrites the two derived number fields.
    pub fn recompute(&mut self) -> &RenderInstruction {
        let request = self.request();
        self.last = self.session.recompute(&request);

        if let Some(conversion) = &self.last.conversion {
            for radix in Radix::all() {
                if radix != self.mode.radix() {
                    *self.inputs.get_mut(Field::from_radix(radix)) = conversion.text(radix);
                }
            }
        }
        &self.last
    }

    /// Applies `edit` to `field` and recomputes.
    ///
    /// Editing a number field makes it authoritative; mark fields keep the
    /// current mode.
    pub fn edit(&mut self, field: Field, edit: Edit) -> &RenderInstruction {
        let text = self.inputs.get_mut(field);
        match edit {
            Edit::Insert(c) => text.push(c),
            Edit::Backspace => {
                text.pop();
            }
            Edit::Clear => text.clear(),
        }
        if let Some(mode) = field.mode() {
            self.mode = mode;
        }
        self.recompute()
    }

    /// Replaces a field's text without changing the mode. Used for startup values.
    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        *self.inputs.get_mut(field) = text.into();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(SystemConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitgrid_core::Row;

    fn type_into(app: &mut AppState, field: Field, text: &str) {
        for c in text.chars() {
            app.edit(field, Edit::Insert(c));
        }
    }

    #[test]
    fn test_typing_dec_fills_hex_and_bin() {
        let mut app = AppState::default();
        type_into(&mut app, Field::Dec, "163");
        assert_eq!(app.mode, Mode::Dec);
        assert_eq!(app.inputs.dec, "163");
        assert_eq!(app.inputs.hex, "0xA3");
        assert_eq!(app.inputs.bin, "10100011");
        assert_eq!(app.last.row(Row::Bin).visible_count, 8);
    }

    #[test]
    fn test_typing_hex_keeps_what_was_typed() {
        let mut app = AppState::default();
        type_into(&mut app, Field::Hex, "a3");
        assert_eq!(app.inputs.hex, "a3");
        assert_eq!(app.inputs.dec, "163");
    }

    #[test]
    fn test_mark_edit_keeps_mode() {
        let mut app = AppState::default();
        type_into(&mut app, Field::Bin, "101");
        type_into(&mut app, Field::MarkStart, "0");
        type_into(&mut app, Field::MarkEnd, "3");
        assert_eq!(app.mode, Mode::Bin);
        assert_eq!(app.inputs.bin, "101");
        assert!(app.last.range.is_some());
        assert!(app.last.messages().is_empty());
    }

    #[test]
    fn test_half_typed_mark_warns() {
        let mut app = AppState::default();
        type_into(&mut app, Field::Hex, "ff");
        type_into(&mut app, Field::MarkStart, "2");
        assert_eq!(app.last.messages(), ["Invalid end index"]);
        assert!(app.last.success());
    }

    #[test]
    fn test_invalid_input_leaves_other_fields_alone() {
        let mut app = AppState::default();
        type_into(&mut app, Field::Hex, "ff");
        type_into(&mut app, Field::Hex, "g");
        assert_eq!(app.inputs.dec, "255");
        assert_eq!(app.last.messages(), ["Invalid HEX number"]);
        assert_eq!(app.last.row(Row::Hex).visible_count, 0);

        app.edit(Field::Hex, Edit::Backspace);
        assert!(app.last.success());
    }

    #[test]
    fn test_clearing_the_field_hides_the_grid() {
        let mut app = AppState::default();
        type_into(&mut app, Field::Dec, "12");
        app.edit(Field::Dec, Edit::Clear);
        assert!(!app.last.success());
        assert!(app.last.messages().is_empty());
        for row in Row::all() {
            assert_eq!(app.last.row(row).visible_count, 0);
        }
    }

    #[test]
    fn test_field_focus_order_wraps() {
        assert_eq!(Field::MarkEnd.next(), Field::Hex);
        assert_eq!(Field::Hex.previous(), Field::MarkEnd);
        assert_eq!(Field::Dec.next(), Field::Bin);
    }
}
