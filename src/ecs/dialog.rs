//! Headless modal dialog model.
//!
//! The host UI renders whatever sits in `DialogStack` and reports typing and
//! button presses back as `DialogInputChanged` / `DialogButtonPressed` messages.
//! Dialogs never hold entity handles: what happens on confirmation is described
//! by a `DialogContinuation` carrying only stable uids.

use bevy_ecs::resource::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DialogId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogButtonKind {
    Cancel,
    Ok,
}

string_enum!(DialogButtonKind {
    Cancel => "cancel",
    Ok => "ok",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonStyle {
    Plain,
    Good,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogButton {
    pub kind: DialogButtonKind,
    pub style: ButtonStyle,
}

impl DialogButton {
    /// `[cancel, ok:good]`
    pub fn cancel_ok() -> Vec<DialogButton> {
        vec![
            DialogButton {
                kind: DialogButtonKind::Cancel,
                style: ButtonStyle::Plain,
            },
            DialogButton {
                kind: DialogButtonKind::Ok,
                style: ButtonStyle::Good,
            },
        ]
    }
}

/// Single-line text field with a live validator.
#[derive(Debug, Clone)]
pub struct FormInput {
    pub id: String,
    pub placeholder: String,
    value: String,
    validator: fn(&str) -> bool,
}

impl FormInput {
    pub fn new(id: impl Into<String>, validator: fn(&str) -> bool) -> Self {
        Self {
            id: id.into(),
            placeholder: String::new(),
            value: String::new(),
            validator,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn is_valid(&self) -> bool {
        (self.validator)(&self.value)
    }
}

/// What confirming a dialog resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogContinuation {
    AssignConstantSignal { uid: u64 },
}

#[derive(Debug, Clone)]
pub struct ModalDialog {
    pub id: DialogId,
    pub title: String,
    pub description: String,
    pub input: FormInput,
    pub buttons: Vec<DialogButton>,
    pub on_confirm: DialogContinuation,
}

impl ModalDialog {
    /// A `[cancel, ok]` dialog. The id is assigned by `DialogStack::show`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        input: FormInput,
        on_confirm: DialogContinuation,
    ) -> Self {
        Self {
            id: DialogId(0),
            title: title.into(),
            description: description.into(),
            input,
            buttons: DialogButton::cancel_ok(),
            on_confirm,
        }
    }

    /// Confirmation is only enabled while the input validates.
    pub fn is_button_enabled(&self, kind: DialogButtonKind) -> bool {
        match kind {
            DialogButtonKind::Cancel => true,
            DialogButtonKind::Ok => self.input.is_valid(),
        }
    }
}

/// Dialogs currently shown, bottom to top.
#[derive(Resource, Debug, Default)]
pub struct DialogStack {
    next_id: u64,
    dialogs: Vec<ModalDialog>,
}

impl DialogStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, mut dialog: ModalDialog) -> DialogId {
        self.next_id += 1;
        dialog.id = DialogId(self.next_id);
        self.dialogs.push(dialog);
        DialogId(self.next_id)
    }

    pub fn get(&self, id: DialogId) -> Option<&ModalDialog> {
        self.dialogs.iter().find(|d| d.id == id)
    }

    pub fn get_mut(&mut self, id: DialogId) -> Option<&mut ModalDialog> {
        self.dialogs.iter_mut().find(|d| d.id == id)
    }

    pub fn close(&mut self, id: DialogId) -> Option<ModalDialog> {
        let idx = self.dialogs.iter().position(|d| d.id == id)?;
        Some(self.dialogs.remove(idx))
    }

    pub fn top(&self) -> Option<&ModalDialog> {
        self.dialogs.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModalDialog> {
        self.dialogs.iter()
    }

    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }
}
