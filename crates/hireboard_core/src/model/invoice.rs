//! Billing invoice model.

use crate::model::format::{format_amount, format_date};
use crate::query::{Queryable, SortValue};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Failed,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Paid,
        InvoiceStatus::Pending,
        InvoiceStatus::Failed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(value))
    }
}

/// One billing history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Human-facing invoice number (`INV-001`).
    pub id: String,
    pub date: NaiveDate,
    pub amount_cents: u64,
    pub status: InvoiceStatus,
}

impl Invoice {
    pub fn display_amount(&self) -> String {
        format_amount(self.amount_cents)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InvoiceField {
    Id,
    Date,
    Amount,
    Status,
}

const INVOICE_SEARCH_FIELDS: [InvoiceField; 1] = [InvoiceField::Id];

impl Queryable for Invoice {
    type Field = InvoiceField;

    fn search_fields() -> &'static [InvoiceField] {
        &INVOICE_SEARCH_FIELDS
    }

    fn field_text(&self, field: InvoiceField) -> Cow<'_, str> {
        match field {
            InvoiceField::Id => Cow::Borrowed(self.id.as_str()),
            InvoiceField::Date => Cow::Owned(format_date(self.date)),
            InvoiceField::Amount => Cow::Owned(self.display_amount()),
            InvoiceField::Status => Cow::Borrowed(self.status.label()),
        }
    }

    fn sort_value(&self, field: InvoiceField) -> SortValue {
        match field {
            InvoiceField::Date => SortValue::Date(self.date),
            InvoiceField::Amount => {
                SortValue::Number(i64::try_from(self.amount_cents).unwrap_or(i64::MAX))
            }
            other => SortValue::Text(self.field_text(other).to_lowercase()),
        }
    }
}

/// Subscription plan shown next to the invoice history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    /// Cap on simultaneously active job listings.
    pub max_active_listings: u32,
    pub price_cents: u64,
    pub interval: BillingInterval,
}

impl Plan {
    /// Short marketing line (`Up to 25 active job listings`).
    pub fn summary(&self) -> String {
        format!("Up to {} active job listings", self.max_active_listings)
    }
}

/// Card on file, stored without the full number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub last4: String,
    pub exp_month: u8,
    /// Two-digit expiry year.
    pub exp_year: u8,
}

impl PaymentMethod {
    pub fn masked_number(&self) -> String {
        format!("•••• •••• •••• {}", self.last4)
    }

    /// `Expires 12/26`.
    pub fn expiry_label(&self) -> String {
        format!("Expires {:02}/{:02}", self.exp_month, self.exp_year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingInterval {
    Month,
    Year,
}

impl BillingInterval {
    pub fn label(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}
