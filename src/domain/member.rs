//! Member - Admin-Manageable Member Record

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Stable unique identifier of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MemberId(pub u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MemberId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for MemberId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The members endpoint serves ids as strings ("1"), so accept both forms.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(u64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(MemberId(n)),
            RawId::Text(s) => s.trim().parse::<u64>().map(MemberId).map_err(|_| {
                serde::de::Error::custom(format!("member id is not a non-negative integer: {s:?}"))
            }),
        }
    }
}

/// A member record as served by the members endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Member {
    pub fn new(
        id: impl Into<MemberId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Current value of an editable field
    pub fn field(&self, field: MemberField) -> &str {
        match field {
            MemberField::Name => &self.name,
            MemberField::Email => &self.email,
            MemberField::Role => &self.role,
        }
    }

    /// Snapshot the editable fields into a draft
    pub fn draft(&self) -> MemberDraft {
        MemberDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }

    /// Overwrite the editable fields from a draft
    pub fn apply(&mut self, draft: MemberDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.role = draft.role;
    }
}

/// Editable text fields of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberField {
    Name,
    Email,
    Role,
}

impl MemberField {
    /// Short key used in element ids
    pub fn key(&self) -> &'static str {
        match self {
            MemberField::Name => "name",
            MemberField::Email => "email",
            MemberField::Role => "role",
        }
    }
}

/// Pending, unsaved values for a member being edited
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl MemberDraft {
    pub fn field(&self, field: MemberField) -> &str {
        match field {
            MemberField::Name => &self.name,
            MemberField::Email => &self.email,
            MemberField::Role => &self.role,
        }
    }

    pub fn set_field(&mut self, field: MemberField, value: String) {
        match field {
            MemberField::Name => self.name = value,
            MemberField::Email => self.email = value,
            MemberField::Role => self.role = value,
        }
    }
}
