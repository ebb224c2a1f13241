/// A customer attached to a complaint.
///
/// Immutable after creation. Each complaint embeds its own copy; customers
/// are never shared between records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// The customer's display name.
    pub name: String,
    /// Contact phone number (free text, not validated).
    pub phone: String,
    /// Contact email address.
    pub email: String,
}

impl Customer {
    /// Creates a new customer record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}
