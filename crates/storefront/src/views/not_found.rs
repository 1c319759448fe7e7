//! Fallback page for paths no route recognizes.

use askama::Template;

use crate::filters;

use super::NavView;

/// Page-not-found template.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub nav: NavView,
    pub path: String,
}
