//! Document exporter: turns a frozen invoice view into a one-page A4 PDF.
//!
//! The exporter only ever sees an [`InvoiceView`](quickbill_presentation::InvoiceView)
//! built in presentation mode. It is a snapshot consumer: later edits to the
//! invoice cannot reach a document that is already being written.

pub mod error;
pub mod pdf;

pub use error::ExportError;
pub use pdf::{ExportOptions, PdfExporter};
