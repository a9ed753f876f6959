use super::{mode::FormMode, surface::ToggleSurface};

/// Flips between the login and signup forms. All page mutation goes through
/// [`FormToggler::handle_toggle`].
#[derive(Debug)]
pub struct FormToggler<S> {
    surface: S,
}

impl<S: ToggleSurface> FormToggler<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Read from the page each time; the host markup owns the initial state.
    pub fn current_mode(&self) -> FormMode {
        FormMode::from_login_visibility(self.surface.login_visibility())
    }

    pub fn handle_toggle(&mut self) -> FormMode {
        let next = self.current_mode().toggled();
        self.surface.set_login_visibility(next.login_visibility());
        self.surface.set_signup_visibility(next.signup_visibility());
        self.surface.set_title(next.title());
        self.surface.set_link_label(next.link_label());
        log::debug!("switched to {} form", next);
        next
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
