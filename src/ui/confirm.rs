// SPDX-License-Identifier: MPL-2.0
//! Yes/no gate for destructive actions.
//!
//! [`confirm_delete`] asks the user before something irreversible happens and
//! returns their answer; performing (or skipping) the action is up to the
//! caller. The question is delegated to a [`Prompt`], normally the native
//! blocking dialog of the platform.

use crate::i18n::fluent::I18n;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// A blocking yes/no question answered by the user.
pub trait Prompt {
    /// Shows `message` and blocks until the user answers. Returns `true`
    /// only when the user accepts; declining or dismissing returns `false`.
    fn ask(&mut self, message: &str) -> bool;
}

/// Native message dialog with Yes/No buttons.
#[derive(Debug, Clone)]
pub struct NativePrompt {
    title: String,
}

impl NativePrompt {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Creates a prompt titled in the current locale.
    #[must_use]
    pub fn localized(i18n: &I18n) -> Self {
        Self::new(i18n.tr("confirm-title"))
    }
}

impl Prompt for NativePrompt {
    fn ask(&mut self, message: &str) -> bool {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(self.title.as_str())
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show();
        result == MessageDialogResult::Yes
    }
}

/// Asks the user to confirm a deletion.
///
/// Shows `message` verbatim, or the localized default ("Confirm deletion?")
/// when it is absent or empty. Returns exactly what the prompt answered.
pub fn confirm_delete(prompt: &mut dyn Prompt, i18n: &I18n, message: Option<&str>) -> bool {
    let text = match message {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => i18n.tr("confirm-delete"),
    };

    let accepted = prompt.ask(&text);
    log::debug!("confirmation for {text:?} answered {accepted}");
    accepted
}
