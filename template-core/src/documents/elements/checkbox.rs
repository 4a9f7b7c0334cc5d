use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// XML Deserialization Helper Structures (for quick-xml serde)
// ============================================================================

#[derive(Debug, Deserialize, Default)]
struct XmlValNode {
    #[serde(rename = "@val", alias = "@w:val", default)]
    val: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct CheckboxXml {
    #[serde(rename = "checked", alias = "w14:checked", default)]
    checked: Option<XmlValNode>,
    #[serde(rename = "checkedState", alias = "w14:checkedState", default)]
    checked_state: Option<XmlValNode>,
    #[serde(rename = "uncheckedState", alias = "w14:uncheckedState", default)]
    unchecked_state: Option<XmlValNode>,
}

/// `w14:checkbox` property block of a checkbox content control.
///
/// `checked_state`/`unchecked_state` carry the glyph codes Word renders for
/// each state (e.g. `2612`/`2610`); toggling the control never touches them.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Checkbox {
    pub checked: bool,
    pub checked_state: Option<String>,
    pub unchecked_state: Option<String>,
}

// ST_OnOff lexical space.
pub(crate) fn parse_on_off(v: &str) -> Option<bool> {
    match v {
        "1" | "true" | "on" => Some(true),
        "0" | "false" | "off" => Some(false),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Checkbox {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let xml = CheckboxXml::deserialize(deserializer)?;
        Ok(Checkbox {
            checked: xml
                .checked
                .and_then(|v| v.val)
                .and_then(|v| parse_on_off(&v))
                .unwrap_or(false),
            checked_state: xml.checked_state.and_then(|v| v.val),
            unchecked_state: xml.unchecked_state.and_then(|v| v.val),
        })
    }
}

impl Checkbox {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn checked(mut self, v: bool) -> Self {
        self.checked = v;
        self
    }

    pub fn checked_state(mut self, v: impl Into<String>) -> Self {
        self.checked_state = Some(v.into());
        self
    }

    pub fn unchecked_state(mut self, v: impl Into<String>) -> Self {
        self.unchecked_state = Some(v.into());
        self
    }
}
