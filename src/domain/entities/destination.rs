//! Navigation targets reachable from the login form.

use std::fmt;

/// Where the form sends the user after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Product catalogue; the path comes from `CATALOGUE_PATH`.
    Catalogue(String),
}

impl Destination {
    pub fn path(&self) -> &str {
        match self {
            Destination::Catalogue(path) => path,
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
