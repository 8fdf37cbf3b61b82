use serde::{Deserialize, Serialize};

/// The single signed-in student.
///
/// The password is kept in plain text; it only exists to drive the mock
/// change-password flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub handle: String,
    pub avatar: String,
    pub password: String,
}

impl User {
    /// First word of the display name, used by the Home greeting.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
