use crate::ProfileRecord;

/// Partial profile write with merge semantics
///
/// Only `Some` fields are written; every other stored field is left as is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileUpdate {
    pub is_opted_in: Option<bool>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub username: Option<String>,
}

impl ProfileUpdate {
    pub fn opt_in(opted_in: bool) -> Self {
        Self {
            is_opted_in: Some(opted_in),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.is_opted_in.is_none()
            && self.email.is_none()
            && self.display_name.is_none()
            && self.username.is_none()
    }

    /// Apply the present fields onto an existing record
    pub fn apply_to(&self, record: &mut ProfileRecord) {
        if let Some(opted_in) = self.is_opted_in {
            record.is_opted_in = opted_in;
        }
        if let Some(ref email) = self.email {
            record.email = Some(email.clone());
        }
        if let Some(ref display_name) = self.display_name {
            record.display_name = Some(display_name.clone());
        }
        if let Some(ref username) = self.username {
            record.username = Some(username.clone());
        }
    }
}

impl From<&ProfileRecord> for ProfileUpdate {
    fn from(record: &ProfileRecord) -> Self {
        Self {
            is_opted_in: Some(record.is_opted_in),
            email: record.email.clone(),
            display_name: record.display_name.clone(),
            username: record.username.clone(),
        }
    }
}
