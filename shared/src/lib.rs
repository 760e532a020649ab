use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Currencies accepted by the salary form and the analysis service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Ngn,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    /// All supported currencies, in dropdown display order
    pub const ALL: [Currency; 4] = [Currency::Ngn, Currency::Usd, Currency::Eur, Currency::Gbp];

    /// The 3-letter ISO code used on the wire and in storage
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Ngn => "NGN",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    /// Display symbol shown next to amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Ngn => "₦",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }

    /// Defensive lookup for codes read back from storage or old payloads.
    /// Unknown codes return `None`; callers fall back to showing the raw code.
    pub fn from_code(code: &str) -> Option<Currency> {
        match code {
            "NGN" => Some(Currency::Ngn),
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            _ => None,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Ngn
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The single largest expense found in a statement
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpenseHighlight {
    #[serde(default)]
    pub description: String,
    /// Absolute amount, always >= 0
    #[serde(default)]
    pub amount: f64,
}

/// One category slice of the spending breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingCategory {
    pub category: String,
    pub amount: f64,
}

/// Spending per category. Serialized as a JSON object whose key order is the
/// display order, so entries are kept as an ordered list rather than a map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpendingBreakdown(pub Vec<SpendingCategory>);

impl SpendingBreakdown {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpendingCategory> {
        self.0.iter()
    }

    /// Insert an entry, keeping category names unique. A repeated category
    /// keeps its original position and takes the latest amount.
    pub fn insert(&mut self, category: String, amount: f64) {
        match self.0.iter_mut().find(|entry| entry.category == category) {
            Some(existing) => existing.amount = amount,
            None => self.0.push(SpendingCategory { category, amount }),
        }
    }
}

impl Serialize for SpendingBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.category, &entry.amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SpendingBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = SpendingBreakdown;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category names to amounts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut breakdown = SpendingBreakdown::default();
                while let Some((category, amount)) = access.next_entry::<String, f64>()? {
                    breakdown.insert(category, amount);
                }
                Ok(breakdown)
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}

/// A charge that repeats on a fixed schedule (subscriptions, rent, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringTransaction {
    pub description: String,
    /// Absolute charge amount per occurrence
    pub amount: f64,
    /// Human-readable schedule label, e.g. "Monthly"
    pub frequency: String,
}

/// One statement line item. Field names match the analysis service payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementTransaction {
    /// Transaction date as reported by the statement (YYYY-MM-DD)
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Description")]
    pub description: String,
    /// Signed amount: negative = expense, positive = income
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Category")]
    pub category: String,
}

impl StatementTransaction {
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }
}

/// The aggregate figures and itemized lists derived from one bank statement.
///
/// Every field defaults: the analysis service payload is passed through as-is
/// and a missing field renders as a gap rather than failing deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialSummary {
    #[serde(default)]
    pub total_income: f64,
    #[serde(default)]
    pub total_expenses: f64,
    /// May be negative when expenses exceed income
    #[serde(default)]
    pub net_savings: f64,
    #[serde(default)]
    pub highest_expense: ExpenseHighlight,
    #[serde(default)]
    pub spending_breakdown: SpendingBreakdown,
    #[serde(default)]
    pub recurring_transactions: Vec<RecurringTransaction>,
    #[serde(default)]
    pub transactions: Vec<StatementTransaction>,
}

/// One persisted snapshot of a financial summary with its metadata.
///
/// Record ID in format: "analysis::<epoch_millis>" (monotonic within a store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: String,
    /// Creation instant (RFC 3339)
    pub timestamp: String,
    /// 3-letter currency code. Stored as the raw string so an unknown code in
    /// an old blob degrades at render time instead of failing to parse.
    pub currency: String,
    pub summary: FinancialSummary,
}

impl AnalysisRecord {
    /// Parsed currency, when the stored code is one we know
    pub fn currency(&self) -> Option<Currency> {
        Currency::from_code(&self.currency)
    }
}
