use crate::error::{js_message, ToggleError};
use serde::{Deserialize, Serialize};

/// Optional global read at startup: `window.__FORMSWITCH_CONFIG = { login_form_id: "..." }`.
pub const CONFIG_GLOBAL: &str = "__FORMSWITCH_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    pub toggle_link_id: String,
    pub login_form_id: String,
    pub signup_form_id: String,
    pub form_title_id: String,
    /// Element whose text follows the visible form. Defaults to the toggle link itself.
    pub toggle_label_id: Option<String>,
    /// Render the default markup into `<body>` before binding.
    pub mount_page: bool,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            toggle_link_id: "toggle-link".to_string(),
            login_form_id: "login-form".to_string(),
            signup_form_id: "signup-form".to_string(),
            form_title_id: "form-title".to_string(),
            toggle_label_id: None,
            mount_page: false,
        }
    }
}

impl FormsConfig {
    pub fn from_json(raw: &str) -> Result<Self, ToggleError> {
        serde_json::from_str(raw).map_err(|err| ToggleError::InvalidConfig(err.to_string()))
    }

    pub fn toggle_label_id(&self) -> &str {
        self.toggle_label_id
            .as_deref()
            .unwrap_or(&self.toggle_link_id)
    }
}

/// Reads the runtime config from the page globals, falling back to defaults
/// when the host page does not define one.
pub fn load() -> Result<FormsConfig, ToggleError> {
    let window = crate::utils::dom::window()?;
    let any = js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into())
        .map_err(|err| ToggleError::InvalidConfig(js_message(&err)))?;
    if any.is_undefined() || any.is_null() {
        return Ok(FormsConfig::default());
    }
    let raw = js_sys::JSON::stringify(&any)
        .map_err(|err| ToggleError::InvalidConfig(js_message(&err)))?;
    FormsConfig::from_json(&String::from(raw))
}
