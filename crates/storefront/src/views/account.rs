//! Account page views: sign-in form and signed-in overview.

use askama::Template;

use crate::filters;

use super::NavView;

/// Sign-in form template.
#[derive(Template)]
#[template(path = "account/sign_in.html")]
pub struct SignInTemplate {
    pub nav: NavView,
    /// Controlled-input echo of the email field.
    pub email: String,
    /// Set when the last sign-in attempt was rejected.
    pub error: Option<String>,
}

/// Signed-in account overview template.
#[derive(Template)]
#[template(path = "account/show.html")]
pub struct AccountTemplate {
    pub nav: NavView,
    pub email: String,
}
