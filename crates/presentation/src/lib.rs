//! Display surface for invoices.
//!
//! Turns an [`InvoiceSnapshot`](quickbill_invoicing::InvoiceSnapshot) into a
//! formatted [`InvoiceView`] and renders it as text. Whether fields read as
//! editable or frozen is decided per render via [`RenderMode`]; nothing here
//! feeds back into the ledger.

pub mod format;
pub mod issuer;
pub mod text;
pub mod view;

pub use format::format_currency;
pub use issuer::Issuer;
pub use text::render_text;
pub use view::{InvoiceView, LineView, RenderMode};
