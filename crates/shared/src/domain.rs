use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(CaseId);

/// Access class of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Doctor,
    Student,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Doctor, Role::Student];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Doctor => "doctor",
            Role::Student => "student",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Doctor => "Doctor / Healthcare Professional",
            Role::Student => "Medical Student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "doctor" => Ok(Role::Doctor),
            "student" => Ok(Role::Student),
            other => Err(ParseError::UnknownRole(other.to_string())),
        }
    }
}

/// One of the four mutually exclusive top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    Feed,
    Upload,
    Profile,
    Auth,
}

impl ViewId {
    /// Navigation order.
    pub const ALL: [ViewId; 4] = [ViewId::Feed, ViewId::Upload, ViewId::Profile, ViewId::Auth];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::Feed => "feed",
            ViewId::Upload => "upload",
            ViewId::Profile => "profile",
            ViewId::Auth => "auth",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feed" => Ok(ViewId::Feed),
            "upload" => Ok(ViewId::Upload),
            "profile" => Ok(ViewId::Profile),
            "auth" => Ok(ViewId::Auth),
            other => Err(ParseError::UnknownView(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::NonBinary];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "non-binary" | "non_binary" | "nonbinary" => Ok(Gender::NonBinary),
            other => Err(ParseError::UnknownGender(other.to_string())),
        }
    }
}
