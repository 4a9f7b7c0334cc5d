mod checkbox;
mod variables;

use std::collections::BTreeSet;
use std::io::Read;

use crate::documents::Checkbox;
use crate::TemplateError;

use checkbox::{replace_range, resolve};
use variables::collect_variables;

/// Toggles `w14:checkbox` content controls in a WordprocessingML main
/// document part by bookmark name.
///
/// The part is held as an immutable value: every successful state change
/// replaces it with a freshly spliced string, and setting a checkbox to the
/// state it already holds leaves the stored bytes untouched. Extracting the
/// part from the package container (and writing it back) is the caller's
/// concern.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckboxTemplateProcessor {
    main_part: String,
}

impl CheckboxTemplateProcessor {
    pub fn new(main_part: impl Into<String>) -> Self {
        Self {
            main_part: main_part.into(),
        }
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, TemplateError> {
        let mut main_part = String::new();
        reader.read_to_string(&mut main_part)?;
        Ok(Self { main_part })
    }

    pub fn main_part(&self) -> &str {
        &self.main_part
    }

    pub fn into_main_part(self) -> String {
        self.main_part
    }

    /// Names of the `${...}` placeholders still present in the part.
    pub fn variables(&self) -> BTreeSet<String> {
        collect_variables(&self.main_part)
    }

    /// The full property block of the checkbox resolved from `name`,
    /// including the glyph codes the toggle never rewrites.
    pub fn checkbox(&self, name: &str) -> Result<Checkbox, TemplateError> {
        Ok(resolve(&self.main_part, name)?.checkbox)
    }

    pub fn is_checked(&self, name: &str) -> Result<bool, TemplateError> {
        Ok(resolve(&self.main_part, name)?.checked)
    }

    /// Sets the resolved checkbox to `checked`. A no-op when the control is
    /// already in that state; otherwise only the one `w:val` attribute value
    /// changes.
    pub fn set_checkbox(&mut self, name: &str, checked: bool) -> Result<(), TemplateError> {
        let resolved = resolve(&self.main_part, name)?;
        if resolved.checked == checked {
            return Ok(());
        }
        let val = if checked { "1" } else { "0" };
        self.main_part = replace_range(&self.main_part, &resolved.val, val);
        Ok(())
    }

    pub fn set_checkbox_on(&mut self, name: &str) -> Result<(), TemplateError> {
        self.set_checkbox(name, true)
    }

    pub fn set_checkbox_off(&mut self, name: &str) -> Result<(), TemplateError> {
        self.set_checkbox(name, false)
    }
}
