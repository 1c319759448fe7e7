//! Client-side path routing.
//!
//! The URL fragment is the sole navigation surface: `#/shop` is the
//! logical path `/shop`, and an empty fragment is the root path `/`.
//! [`RouterState`] tracks the current path and transitions only on
//! navigation events; [`RouteTable`] matches that path against a
//! statically declared table to select exactly one page.
//!
//! # Recognized paths
//!
//! ```text
//! /               - Home page
//! /shop           - Product listing with search and category filters
//! /product/{id}   - Product detail
//! /cart           - Cart page
//! /checkout       - Checkout form and order summary
//! /account        - Sign-in form / account overview
//! ```

mod pattern;
mod table;

pub use pattern::{PathParams, PatternError, RoutePattern};
pub use table::{NoMatch, RouteMatch, RouteTable};

use url::Url;

/// Current navigation path, derived from the URL fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterState {
    current_path: String,
}

impl RouterState {
    /// Initial state from the fragment present at load time.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        Self {
            current_path: path_from_fragment(fragment),
        }
    }

    /// Initial state from a full browser URL, reading its fragment.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        Self::from_fragment(url.fragment().unwrap_or(""))
    }

    /// The current logical path.
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Re-derive the path after the fragment changed (back/forward
    /// navigation or an external link).
    pub fn on_fragment_change(&mut self, fragment: &str) {
        self.current_path = path_from_fragment(fragment);
    }

    /// Navigate directly to a logical path (an internal link click).
    pub fn navigate(&mut self, path: &str) {
        self.current_path = path_from_fragment(path);
    }
}

impl Default for RouterState {
    fn default() -> Self {
        Self::from_fragment("")
    }
}

/// Map a URL fragment to a logical path; an empty fragment is the root.
fn path_from_fragment(fragment: &str) -> String {
    if fragment.is_empty() {
        "/".to_owned()
    } else {
        fragment.to_owned()
    }
}
