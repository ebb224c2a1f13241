/// An employee on the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// The employee's display name.
    pub name: String,
    /// Roster id. Intended to be unique, but uniqueness is not enforced.
    pub id: String,
    password: String,
}

impl Employee {
    /// Creates a new employee record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            password: password.into(),
        }
    }

    /// Checks the stored credential against `input`.
    ///
    /// This is the single place credentials are compared, so the plaintext
    /// scheme can later be replaced without touching call sites.
    #[must_use]
    pub fn verify_password(&self, input: &str) -> bool {
        self.password == input
    }

    /// The stored password, as shown on the admin roster listing.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}
