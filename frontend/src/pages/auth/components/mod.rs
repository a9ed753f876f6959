pub mod login_form;
pub mod signup_form;
