use crate::{
    config::FormsConfig,
    pages::auth::components::{login_form::LoginForm, signup_form::SignupForm},
    toggle::FormMode,
};
use leptos::*;

/// Default markup for the toggle: heading, both forms and the switch link.
/// Starts on the login form; the click handler is bound separately.
#[component]
pub fn AuthPanel(config: FormsConfig) -> impl IntoView {
    let initial = FormMode::default();

    let link_content = match config.toggle_label_id.clone() {
        Some(label_id) => view! { <span id=label_id>{initial.link_label()}</span> }.into_view(),
        None => initial.link_label().into_view(),
    };

    view! {
        <div class="auth-container">
            <h2 id=config.form_title_id.clone() class="form-title">
                {initial.title()}
            </h2>
            <LoginForm id=config.login_form_id.clone() visibility=initial.login_visibility() />
            <SignupForm id=config.signup_form_id.clone() visibility=initial.signup_visibility() />
            <p class="toggle-text">
                <a id=config.toggle_link_id.clone() href="#">
                    {link_content}
                </a>
            </p>
        </div>
    }
}
