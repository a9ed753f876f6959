use super::surface::Visibility;
use std::fmt;

/// Which of the two forms is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Login,
    Signup,
}

impl FormMode {
    /// Only an explicitly hidden login panel means the signup form is up.
    pub fn from_login_visibility(login: Visibility) -> Self {
        match login {
            Visibility::Hidden => FormMode::Signup,
            Visibility::Shown => FormMode::Login,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            FormMode::Login => FormMode::Signup,
            FormMode::Signup => FormMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormMode::Login => "Connexion",
            FormMode::Signup => "Créer un compte",
        }
    }

    pub fn link_label(self) -> &'static str {
        match self {
            FormMode::Login => "Créer un nouveau compte",
            FormMode::Signup => "Retour à la connexion",
        }
    }

    pub fn login_visibility(self) -> Visibility {
        match self {
            FormMode::Login => Visibility::Shown,
            FormMode::Signup => Visibility::Hidden,
        }
    }

    pub fn signup_visibility(self) -> Visibility {
        self.toggled().login_visibility()
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormMode::Login => f.write_str("login"),
            FormMode::Signup => f.write_str("signup"),
        }
    }
}
