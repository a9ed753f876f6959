use crate::toggle::Visibility;
use leptos::*;

#[component]
pub fn SignupForm(#[prop(into)] id: String, visibility: Visibility) -> impl IntoView {
    view! {
        <form
            id=id
            class="auth-form"
            style=format!("display: {}", visibility.as_display())
            on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()
        >
            <input type="text" name="username" placeholder="Nom d'utilisateur" required />
            <input type="email" name="email" placeholder="Adresse e-mail" required />
            <input type="password" name="password" placeholder="Mot de passe" required />
            <button type="submit">"S'inscrire"</button>
        </form>
    }
}
