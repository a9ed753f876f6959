use crate::config::FormsConfig;
use leptos::*;

pub mod components;

mod panel;

pub use panel::AuthPanel;

#[component]
pub fn AuthPage(config: FormsConfig) -> impl IntoView {
    view! { <AuthPanel config=config /> }
}
