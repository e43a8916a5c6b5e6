//! Invoice create, update and delete.

use chrono::Utc;
use tracing::info;

use tally_core::forms::InvoiceForm;
use tally_core::validation::FormInput;
use tally_core::{registry, rules, InvoiceChanges, NewInvoice, SubmissionResult};

use super::validated;
use crate::ports::{views, FormStore, Signals};

pub const DELETED_INVOICE: &str = "Deleted Invoice.";

/// Creates an invoice dated today.
///
/// Returns `None` after navigating to the invoices listing, or the form
/// state to re-render.
pub async fn create_invoice(
    store: &dyn FormStore,
    signals: &dyn Signals,
    form: &FormInput,
) -> Option<SubmissionResult> {
    let data: InvoiceForm = match validated(registry::invoice_create(), form) {
        Ok(data) => data,
        Err(result) => return Some(result),
    };

    let amount = rules::invoice_amount(&data);
    let invoice = NewInvoice {
        customer_id: data.customer_id,
        amount,
        status: data.status,
        date: Utc::now().date_naive(),
    };

    if let Err(failure) = store.insert_invoice(invoice).await {
        return Some(failure.into());
    }

    info!(amount = amount.cents(), status = %data.status, "Invoice created");
    signals.revalidate(views::INVOICES);
    signals.navigate(views::INVOICES);
    None
}

/// Overwrites customer, amount and status of invoice `id`.
pub async fn update_invoice(
    store: &dyn FormStore,
    signals: &dyn Signals,
    id: &str,
    form: &FormInput,
) -> Option<SubmissionResult> {
    let data: InvoiceForm = match validated(registry::invoice_update(), form) {
        Ok(data) => data,
        Err(result) => return Some(result),
    };

    let changes = InvoiceChanges {
        amount: rules::invoice_amount(&data),
        customer_id: data.customer_id,
        status: data.status,
    };

    if let Err(failure) = store.update_invoice(id, changes).await {
        return Some(failure.into());
    }

    info!(id = %id, "Invoice updated");
    signals.revalidate(views::INVOICES);
    signals.navigate(views::INVOICES);
    None
}

/// Deletes invoice `id`. Always returns a message; never navigates.
pub async fn delete_invoice(
    store: &dyn FormStore,
    signals: &dyn Signals,
    id: &str,
) -> SubmissionResult {
    if let Err(failure) = store.delete_invoice(id).await {
        return failure.into();
    }

    info!(id = %id, "Invoice deleted");
    signals.revalidate(views::INVOICES);
    SubmissionResult::message(DELETED_INVOICE)
}
