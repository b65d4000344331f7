use std::fmt;

use jarvis_history::{JarvisError, Result};
use serde::{Deserialize, Serialize};

/// Amount of money in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Parse a non-negative decimal amount with at most two decimal places
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for anything else, e.g. `"-1"`, `"1.234"`, `"abc"`.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || JarvisError::InvalidInput {
            reason: format!(
                "'{}' is not a valid amount (use a non-negative number with up to 2 decimals)",
                input
            ),
        };

        let trimmed = input.trim();
        let (whole, fraction) = match trimmed.split_once('.') {
            Some((_, "")) => return Err(invalid()),
            Some(parts) => parts,
            None => (trimmed, ""),
        };

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || fraction.len() > 2 || !all_digits(fraction) {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let fraction: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .map(Money)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A paid purchase tracked by the finance tracker
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Purchase {
    description: String,
    money_spent: Money,
}

impl Purchase {
    /// Create a purchase from user-supplied text
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the description is blank or the amount
    /// does not parse.
    pub fn new(description: impl Into<String>, money_spent: &str) -> Result<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(JarvisError::InvalidInput {
                reason: "Purchase description cannot be empty or whitespace-only".to_string(),
            });
        }
        Ok(Self {
            description: description.trim().to_string(),
            money_spent: Money::parse(money_spent)?,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn money_spent(&self) -> Money {
        self.money_spent
    }
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.money_spent)
    }
}
