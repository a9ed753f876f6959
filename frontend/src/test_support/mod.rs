#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::toggle::{FormMode, MemorySurface};

    /// Exactly one panel shown, and both labels match it.
    pub fn assert_consistent(surface: &MemorySurface) {
        assert_ne!(
            surface.login.is_shown(),
            surface.signup.is_shown(),
            "exactly one panel must be shown: {surface:?}"
        );
        let mode = FormMode::from_login_visibility(surface.login);
        assert_eq!(surface.title, mode.title());
        assert_eq!(surface.link_label, mode.link_label());
    }
}
