use leptos::*;
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};

pub mod config;
pub mod error;
mod pages;
pub mod toggle;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::FormsConfig;
pub use error::ToggleError;
pub use toggle::{FormMode, FormToggler};

use pages::auth::AuthPage;

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging();

    let config = config::load().map_err(report)?;
    log::debug!(
        "runtime config: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );
    bootstrap(&config).map_err(report)?;
    Ok(())
}

/// Mounts the default markup when asked to, then binds the toggle.
fn bootstrap(config: &FormsConfig) -> Result<(), ToggleError> {
    if config.mount_page {
        let page_config = config.clone();
        mount_to_body(move || view! { <AuthPage config=page_config /> });
    }
    toggle::install(config)
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails when a logger is already set.
    let _ = console_log::init_with_level(level);
}

fn report(err: ToggleError) -> JsValue {
    log::error!("form toggle initialization failed: {}", err);
    err.into()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn element(id: &str) -> HtmlElement {
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id(id)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn bootstrap_mounts_page_before_binding() {
        let config = FormsConfig {
            toggle_link_id: "boot-toggle-link".into(),
            login_form_id: "boot-login-form".into(),
            signup_form_id: "boot-signup-form".into(),
            form_title_id: "boot-form-title".into(),
            toggle_label_id: None,
            mount_page: true,
        };
        bootstrap(&config).unwrap();

        element("boot-toggle-link").click();
        let signup = element("boot-signup-form").style();
        assert_eq!(signup.get_property_value("display").unwrap(), "block");
        let login = element("boot-login-form").style();
        assert_eq!(login.get_property_value("display").unwrap(), "none");
        assert_eq!(
            element("boot-form-title").text_content().unwrap(),
            "Créer un compte"
        );
        assert_eq!(
            element("boot-toggle-link").text_content().unwrap(),
            "Retour à la connexion"
        );
    }

    #[wasm_bindgen_test]
    fn bootstrap_without_markup_reports_missing_control() {
        let config = FormsConfig {
            toggle_link_id: "absent-toggle-link".into(),
            ..FormsConfig::default()
        };
        assert_eq!(
            bootstrap(&config).unwrap_err(),
            ToggleError::not_found("absent-toggle-link")
        );
    }
}
