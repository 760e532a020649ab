//! Saved form values and preference flags.
//!
//! The salary is stored as the raw form text, the currency as its 3-letter
//! code, and dark mode as a "true"/"false" flag, each under its own storage
//! key. Values are written whenever the user saves or changes them and read
//! back on launch.

use anyhow::Result;
use log::warn;
use shared::Currency;

use crate::storage::traits::{Connection, KeyValueStore};

/// Storage key for the saved monthly salary (raw form text)
pub const SALARY_KEY: &str = "monthlySalary";
/// Storage key for the saved currency code
pub const CURRENCY_KEY: &str = "currency";
/// Storage key for the dark-mode preference flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Service for reading and writing user settings
#[derive(Clone)]
pub struct SettingsService<C: Connection> {
    repository: C::KeyValueRepository,
}

impl<C: Connection> SettingsService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            repository: connection.create_key_value_repository(),
        }
    }

    /// Saved monthly salary text, if any
    pub fn monthly_salary(&self) -> Result<Option<String>> {
        self.repository.get(SALARY_KEY)
    }

    pub fn set_monthly_salary(&self, salary: &str) -> Result<()> {
        self.repository.set(SALARY_KEY, salary)
    }

    /// Saved currency, defaulting to NGN. An unknown stored code falls back
    /// to the default instead of failing.
    pub fn currency(&self) -> Result<Currency> {
        let Some(code) = self.repository.get(CURRENCY_KEY)? else {
            return Ok(Currency::default());
        };

        match Currency::from_code(code.trim()) {
            Some(currency) => Ok(currency),
            None => {
                warn!(
                    "Unknown stored currency code {:?}, falling back to {}",
                    code,
                    Currency::default()
                );
                Ok(Currency::default())
            }
        }
    }

    pub fn set_currency(&self, currency: Currency) -> Result<()> {
        self.repository.set(CURRENCY_KEY, currency.code())
    }

    /// Whether the dark-mode preference is set
    pub fn dark_mode(&self) -> Result<bool> {
        Ok(self
            .repository
            .get(DARK_MODE_KEY)?
            .map(|value| value == "true")
            .unwrap_or(false))
    }

    pub fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        self.repository
            .set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryConnection;

    fn service() -> (MemoryConnection, SettingsService<MemoryConnection>) {
        let connection = MemoryConnection::new();
        let service = SettingsService::new(&connection);
        (connection, service)
    }

    #[test]
    fn salary_round_trips() -> Result<()> {
        let (_conn, service) = service();
        assert_eq!(service.monthly_salary()?, None);

        service.set_monthly_salary("350000")?;
        assert_eq!(service.monthly_salary()?, Some("350000".to_string()));
        Ok(())
    }

    #[test]
    fn currency_defaults_to_ngn() -> Result<()> {
        let (_conn, service) = service();
        assert_eq!(service.currency()?, Currency::Ngn);
        Ok(())
    }

    #[test]
    fn currency_round_trips() -> Result<()> {
        let (_conn, service) = service();
        service.set_currency(Currency::Gbp)?;
        assert_eq!(service.currency()?, Currency::Gbp);
        Ok(())
    }

    #[test]
    fn unknown_stored_currency_falls_back_to_default() -> Result<()> {
        let (connection, service) = service();
        connection
            .create_key_value_repository()
            .set(CURRENCY_KEY, "DOGE")?;

        assert_eq!(service.currency()?, Currency::Ngn);
        Ok(())
    }

    #[test]
    fn dark_mode_defaults_off_and_round_trips() -> Result<()> {
        let (_conn, service) = service();
        assert!(!service.dark_mode()?);

        service.set_dark_mode(true)?;
        assert!(service.dark_mode()?);

        service.set_dark_mode(false)?;
        assert!(!service.dark_mode()?);
        Ok(())
    }
}
