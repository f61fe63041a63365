// src/domain/profile.rs

pub const ROLE_HOST: &str = "HOST";
pub const ROLE_RENTER: &str = "RENTER";

/// The signed-in user as reported by `/api/perfil`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub roles: Vec<String>,
}

impl Profile {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_host(&self) -> bool {
        self.has_role(ROLE_HOST)
    }

    pub fn is_renter(&self) -> bool {
        self.has_role(ROLE_RENTER)
    }
}
