//! Developer role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Job category a user registers with.
///
/// This is a profile attribute, not a permission level: admin access is
/// decided by the configured email allow-list.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "developer_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DeveloperRole {
    /// Frontend developer.
    #[default]
    Frontend,
    /// Backend developer.
    Backend,
    /// Fullstack developer.
    Fullstack,
    /// Mobile developer.
    Mobile,
    /// DevOps engineer.
    Devops,
    /// UI/UX designer.
    #[sqlx(rename = "ui-ux")]
    #[serde(rename = "ui-ux")]
    UiUx,
    /// Data engineer or scientist.
    Data,
    /// Quality assurance.
    Qa,
}

impl DeveloperRole {
    /// All roles in declaration order.
    pub const ALL: [DeveloperRole; 8] = [
        Self::Frontend,
        Self::Backend,
        Self::Fullstack,
        Self::Mobile,
        Self::Devops,
        Self::UiUx,
        Self::Data,
        Self::Qa,
    ];

    /// Return the role as its wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Fullstack => "fullstack",
            Self::Mobile => "mobile",
            Self::Devops => "devops",
            Self::UiUx => "ui-ux",
            Self::Data => "data",
            Self::Qa => "qa",
        }
    }
}

impl fmt::Display for DeveloperRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeveloperRole {
    type Err = devboard_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == lower)
            .ok_or_else(|| {
                devboard_core::AppError::validation(format!(
                    "Invalid role: '{s}'. Expected one of: frontend, backend, fullstack, mobile, devops, ui-ux, data, qa"
                ))
            })
    }
}
