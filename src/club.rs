use std::fmt::{self, Display};

use crate::error::{ErrorKind, Result};

/// Identifier of a club in the pro clubs system.
///
/// The value is opaque; the only check is that it is not empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClubId(String);

impl ClubId {
    pub fn new(id: impl Into<String>) -> Result<ClubId> {
        let id = id.into();
        if id.is_empty() {
            return Err(ErrorKind::InvalidClubId.into());
        }
        Ok(ClubId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ClubId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
