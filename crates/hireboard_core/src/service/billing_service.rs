//! Billing page use-case service.
//!
//! # Responsibility
//! - Page through invoice history with search by invoice number and a
//!   status filter.
//! - Report plan usage against the active listing cap.

use crate::model::invoice::{Invoice, InvoiceField, InvoiceStatus, PaymentMethod, Plan};
use crate::query::{enum_filter, run_query, ListQuery, Page, QueryResult};
use crate::repo::catalog_repo::Catalog;
use crate::settings::INVOICES_PAGE_SIZE;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoicesRequest {
    pub search: String,
    /// `all` or a status label (`paid`).
    pub status: String,
    pub page: u32,
}

impl Default for InvoicesRequest {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: "all".to_string(),
            page: 1,
        }
    }
}

/// Active listings measured against the plan cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListingCapacity {
    pub active: u32,
    pub limit: u32,
    /// `limit - active`, saturating at zero.
    pub remaining: u32,
}

pub struct BillingService<C: Catalog> {
    catalog: C,
    page_size: u32,
}

impl<C: Catalog> BillingService<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_page_size(catalog, INVOICES_PAGE_SIZE)
    }

    pub fn with_page_size(catalog: C, page_size: u32) -> Self {
        Self { catalog, page_size }
    }

    /// Returns one billing history page, newest invoice first.
    pub fn invoices(&self, request: &InvoicesRequest) -> QueryResult<Page<Invoice>> {
        let status = enum_filter("status", &request.status, |value| {
            InvoiceStatus::parse(value).is_some()
        })?;

        let query = ListQuery::new(self.page_size)
            .with_search(request.search.as_str())
            .with_filter(InvoiceField::Status, status)
            .with_page(request.page);
        run_query(self.catalog.invoices(), &query)
    }

    pub fn plan(&self) -> Plan {
        self.catalog.plan()
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.catalog.payment_method()
    }

    pub fn listing_capacity(&self) -> ListingCapacity {
        let limit = self.catalog.plan().max_active_listings;
        let active = self
            .catalog
            .jobs()
            .iter()
            .filter(|job| job.is_active())
            .count();
        let active = u32::try_from(active).unwrap_or(u32::MAX);
        ListingCapacity {
            active,
            limit,
            remaining: limit.saturating_sub(active),
        }
    }

    /// Sum of paid invoice amounts in cents.
    pub fn total_paid_cents(&self) -> u64 {
        self.catalog
            .invoices()
            .iter()
            .filter(|invoice| invoice.status == InvoiceStatus::Paid)
            .map(|invoice| invoice.amount_cents)
            .sum()
    }
}
