//! # Customer Module
//!
//! Account holder identity. Names are fixed once the customer exists; minors
//! carry the name of the guardian who opened the account with them.

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// Age below which a guardian is required
pub const ADULT_AGE: u32 = 18;

/// Account holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    given_names: String,
    family_names: String,
    age: u32,
    guardian: Option<String>,
}

impl Customer {
    /// Create a customer.
    ///
    /// Minors must name a non-empty guardian. For adults the guardian is
    /// ignored.
    pub fn new(
        given_names: impl Into<String>,
        family_names: impl Into<String>,
        age: u32,
        guardian: Option<String>,
    ) -> CoreResult<Self> {
        let guardian = if age < ADULT_AGE {
            match guardian.map(|g| g.trim().to_string()) {
                Some(g) if !g.is_empty() => Some(g),
                _ => return Err(CoreError::GuardianRequired),
            }
        } else {
            None
        };

        Ok(Self {
            given_names: given_names.into().trim().to_string(),
            family_names: family_names.into().trim().to_string(),
            age,
            guardian,
        })
    }

    /// Create an adult customer (no guardian)
    pub fn adult(given_names: &str, family_names: &str, age: u32) -> CoreResult<Self> {
        Self::new(given_names, family_names, age, None)
    }

    /// Given and family names joined by a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_names, self.family_names)
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Guardian name, present only for minors
    pub fn guardian(&self) -> Option<&str> {
        self.guardian.as_deref()
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer: {}", self.full_name())?;
        write!(f, "Age: {}", self.age)?;
        if let Some(guardian) = self.guardian() {
            write!(f, "\nGuardian: {}", guardian)?;
        }
        Ok(())
    }
}
