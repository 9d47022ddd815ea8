//! Plain-text invoice preview.

use std::fmt::Write as _;

use crate::view::{InvoiceView, RenderMode};

const WIDTH: usize = 64;
const QTY_COL: usize = 10;
const PRICE_COL: usize = 12;
const AMOUNT_COL: usize = 12;
const POS_COL: usize = 4;

/// Truncate to `width` characters, marking the cut with `…`.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Render the view as a fixed-width text block.
pub fn render_text(view: &InvoiceView) -> String {
    let mut out = String::new();
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);
    let half = WIDTH / 2;

    let _ = writeln!(out, "{heavy}");
    let date = format!("Date: {}", view.date);
    let title_width = WIDTH.saturating_sub(date.chars().count() + 1);
    let _ = writeln!(
        out,
        "{:<title_width$} {date}",
        fit(&view.issuer.name.to_uppercase(), title_width)
    );
    let _ = writeln!(out, "{light}");

    let _ = writeln!(out, "{:<half$}{}", "Billed to:", "From:");
    let mut from = vec![view.issuer.name.clone()];
    from.extend(view.issuer.address_lines.iter().cloned());
    for (i, from_line) in from.iter().enumerate() {
        let left = if i == 0 { fit(&view.billed_to, half - 1) } else { String::new() };
        let _ = writeln!(out, "{left:<half$}{}", fit(from_line, WIDTH - half));
    }
    let _ = writeln!(out, "{light}");

    let editable = view.mode == RenderMode::Editable;
    let pos_col = if editable { POS_COL } else { 0 };
    let item_col = WIDTH - pos_col - QTY_COL - PRICE_COL - AMOUNT_COL;

    let _ = writeln!(
        out,
        "{:<pos_col$}{:<item_col$}{:>QTY_COL$}{:>PRICE_COL$}{:>AMOUNT_COL$}",
        if editable { "#" } else { "" },
        "Item",
        "Quantity",
        "Price",
        "Amount"
    );
    if view.lines.is_empty() {
        let _ = writeln!(out, "(no items)");
    }
    for line in &view.lines {
        let pos = line.position.map(|p| p.to_string()).unwrap_or_default();
        let _ = writeln!(
            out,
            "{pos:<pos_col$}{:<item_col$}{:>QTY_COL$}{:>PRICE_COL$}{:>AMOUNT_COL$}",
            fit(&line.description, item_col - 1),
            fit(&line.quantity, QTY_COL - 1),
            fit(&line.price, PRICE_COL - 1),
            fit(&line.amount, AMOUNT_COL - 1)
        );
    }
    let _ = writeln!(out, "{light}");

    for (label, value) in [
        ("Total", &view.total),
        ("Received Amount", &view.received),
        ("Remaining Amount", &view.remaining),
    ] {
        let row = fit(&format!("{label}: {value}"), WIDTH);
        let _ = writeln!(out, "{row:>WIDTH$}");
    }
    let _ = writeln!(out, "{heavy}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issuer::Issuer;
    use quickbill_invoicing::{Invoice, ItemField};

    fn scenario_a() -> Invoice {
        let mut invoice = Invoice::new();
        invoice.set_client_name("Hamza");
        invoice.set_date_input("2024-11-02");
        invoice.update_item(0, ItemField::Description, "Shirt");
        invoice.update_item(0, ItemField::UnitPrice, "20.00");
        invoice.update_item(0, ItemField::Quantity, "2");
        let i = invoice.add_item();
        invoice.update_item(i, ItemField::Description, "Trousers");
        invoice.update_item(i, ItemField::UnitPrice, "35.50");
        invoice.set_received_amount_input("50");
        invoice
    }

    fn render(mode: RenderMode) -> String {
        let issuer = Issuer::new("Stitch & Co").with_address_line("Market Road, Karachi");
        render_text(&InvoiceView::build(&scenario_a().snapshot(), &issuer, mode))
    }

    #[test]
    fn preview_contains_blocks_rows_and_totals() {
        let text = render(RenderMode::Presentation);
        assert!(text.contains("STITCH & CO"));
        assert!(text.contains("Date: 2024-11-02"));
        assert!(text.contains("Billed to:"));
        assert!(text.contains("Hamza"));
        assert!(text.contains("Market Road, Karachi"));
        assert!(text.contains("Trousers"));
        assert!(text.contains("$35.50"));
        assert!(text.contains("Total: $75.50"));
        assert!(text.contains("Received Amount: $50.00"));
        assert!(text.contains("Remaining Amount: $25.50"));
    }

    #[test]
    fn editable_preview_numbers_rows() {
        let text = render(RenderMode::Editable);
        let row = text.lines().find(|l| l.contains("Trousers")).unwrap();
        assert!(row.starts_with('2'));
    }

    #[test]
    fn lines_never_exceed_width() {
        let mut invoice = scenario_a();
        invoice.update_item(0, ItemField::Description, &"very long description ".repeat(10));
        let text = render_text(&InvoiceView::build(
            &invoice.snapshot(),
            &Issuer::default(),
            RenderMode::Presentation,
        ));
        assert!(text.lines().all(|l| l.chars().count() <= WIDTH));
        assert!(text.contains('…'));
    }

    #[test]
    fn large_amounts_stay_within_width() {
        let mut invoice = scenario_a();
        invoice.update_item(0, ItemField::UnitPrice, "999999999999999.99");
        invoice.update_item(0, ItemField::Quantity, "4000000000");
        let text = render_text(&InvoiceView::build(
            &invoice.snapshot(),
            &Issuer::default(),
            RenderMode::Editable,
        ));
        assert!(text.lines().all(|l| l.chars().count() <= WIDTH));
        let row = text.lines().find(|l| l.contains("Shirt")).unwrap();
        assert!(row.contains('…'));
    }

    #[test]
    fn empty_invoice_says_so() {
        let mut invoice = Invoice::new();
        invoice.remove_item(0);
        let text = render_text(&InvoiceView::build(
            &invoice.snapshot(),
            &Issuer::default(),
            RenderMode::Presentation,
        ));
        assert!(text.contains("(no items)"));
        assert!(text.contains("Total: $0.00"));
    }
}
