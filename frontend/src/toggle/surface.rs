//! The page elements a toggle touches, behind a trait so the state machine can
//! run against the live DOM or an in-memory copy.

use super::mode::FormMode;
use crate::{config::FormsConfig, error::ToggleError, utils::dom};
use web_sys::{Document, HtmlElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// Parses an inline CSS `display` value. Anything but `none` is visible,
    /// including an unset value.
    pub fn from_display(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("none") {
            Visibility::Hidden
        } else {
            Visibility::Shown
        }
    }

    pub fn as_display(self) -> &'static str {
        match self {
            Visibility::Shown => "block",
            Visibility::Hidden => "none",
        }
    }

    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

/// Handles to host-owned elements. Implementations never own the page.
pub trait ToggleSurface {
    fn login_visibility(&self) -> Visibility;
    fn set_login_visibility(&mut self, visibility: Visibility);
    fn set_signup_visibility(&mut self, visibility: Visibility);
    fn set_title(&mut self, text: &str);
    fn set_link_label(&mut self, text: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    pub login: Visibility,
    pub signup: Visibility,
    pub title: String,
    pub link_label: String,
}

impl MemorySurface {
    pub fn new(mode: FormMode) -> Self {
        Self {
            login: mode.login_visibility(),
            signup: mode.signup_visibility(),
            title: mode.title().to_string(),
            link_label: mode.link_label().to_string(),
        }
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new(FormMode::default())
    }
}

impl ToggleSurface for MemorySurface {
    fn login_visibility(&self) -> Visibility {
        self.login
    }

    fn set_login_visibility(&mut self, visibility: Visibility) {
        self.login = visibility;
    }

    fn set_signup_visibility(&mut self, visibility: Visibility) {
        self.signup = visibility;
    }

    fn set_title(&mut self, text: &str) {
        self.title = text.to_string();
    }

    fn set_link_label(&mut self, text: &str) {
        self.link_label = text.to_string();
    }
}

/// Live elements, resolved once. Visibility goes through the inline
/// `style.display` property, labels through `textContent`.
#[derive(Debug, Clone)]
pub struct DomSurface {
    login: HtmlElement,
    signup: HtmlElement,
    title: HtmlElement,
    link_label: HtmlElement,
}

impl DomSurface {
    pub fn resolve(document: &Document, config: &FormsConfig) -> Result<Self, ToggleError> {
        Ok(Self {
            login: dom::html_element_by_id(document, &config.login_form_id)?,
            signup: dom::html_element_by_id(document, &config.signup_form_id)?,
            title: dom::html_element_by_id(document, &config.form_title_id)?,
            link_label: dom::html_element_by_id(document, config.toggle_label_id())?,
        })
    }
}

fn set_display(element: &HtmlElement, visibility: Visibility) {
    if let Err(err) = element
        .style()
        .set_property("display", visibility.as_display())
    {
        log::warn!(
            "could not set display on #{}: {}",
            element.id(),
            crate::error::js_message(&err)
        );
    }
}

impl ToggleSurface for DomSurface {
    fn login_visibility(&self) -> Visibility {
        let display = self
            .login
            .style()
            .get_property_value("display")
            .unwrap_or_default();
        Visibility::from_display(&display)
    }

    fn set_login_visibility(&mut self, visibility: Visibility) {
        set_display(&self.login, visibility);
    }

    fn set_signup_visibility(&mut self, visibility: Visibility) {
        set_display(&self.signup, visibility);
    }

    fn set_title(&mut self, text: &str) {
        self.title.set_text_content(Some(text));
    }

    fn set_link_label(&mut self, text: &str) {
        self.link_label.set_text_content(Some(text));
    }
}
