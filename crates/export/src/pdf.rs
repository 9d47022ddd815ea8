use std::path::{Path, PathBuf};

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use quickbill_presentation::InvoiceView;

use crate::error::ExportError;

// A4 portrait, millimetres.
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;

const ROW_HEIGHT: f32 = 6.0;
const LINE_HEIGHT: f32 = 5.0;
/// Lowest baseline an item row may use; below it sit the totals and the bottom bar.
const LAST_ROW_Y: f32 = 50.0;

const COL_QTY: f32 = 115.0;
const COL_PRICE: f32 = 150.0;

const ACCENT: (f32, f32, f32) = (0.23, 0.51, 0.96);
const RULE: (f32, f32, f32) = (0.85, 0.85, 0.85);

/// Rough Helvetica advance width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;
const PT_TO_MM: f32 = 0.3528;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Where `export_to_path` writes when the caller does not name a file.
    pub output: PathBuf,
    pub title: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("invoice.pdf"),
            title: "Invoice".to_string(),
        }
    }
}

/// Single-page PDF renderer for presentation-mode invoice views.
#[derive(Debug, Clone, Default)]
pub struct PdfExporter {
    options: ExportOptions,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn text(layer: &PdfLayerReference, font: &IndirectFontRef, s: &str, size: f32, x: f32, y: f32) {
    layer.use_text(s, size, Mm(x), Mm(y), font);
}

fn text_width(s: &str, size: f32) -> f32 {
    s.chars().count() as f32 * size * AVG_GLYPH_WIDTH * PT_TO_MM
}

/// Truncate `s` with `...` so its estimated width stays within `max_width` mm.
fn clip(s: &str, size: f32, max_width: f32) -> String {
    if text_width(s, size) <= max_width {
        return s.to_string();
    }
    let glyph = size * AVG_GLYPH_WIDTH * PT_TO_MM;
    let keep = ((max_width / glyph).floor() as usize).saturating_sub(3);
    let mut cut: String = s.chars().take(keep).collect();
    cut.push_str("...");
    cut
}

/// Right-align `s` so it ends at `right`, using an estimated glyph width.
fn text_right(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    s: &str,
    size: f32,
    right: f32,
    y: f32,
) {
    text(layer, font, s, size, (right - text_width(s, size)).max(MARGIN), y);
}

fn rule(layer: &PdfLayerReference, y: f32, colour: (f32, f32, f32), thickness: f32) {
    layer.set_outline_color(rgb(colour));
    layer.set_outline_thickness(thickness);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN), Mm(y)), false),
            (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(y)), false),
        ],
        is_closed: false,
    });
}

impl PdfExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Baseline of the table header for a given issuer block height.
    fn table_top(view: &InvoiceView) -> f32 {
        let block_lines = 1 + view.issuer.address_lines.len();
        250.0 - block_lines as f32 * LINE_HEIGHT - 10.0
    }

    /// Baseline of the first item row.
    fn first_row(view: &InvoiceView) -> f32 {
        Self::table_top(view) - ROW_HEIGHT - 2.0
    }

    /// How many item rows fit on the page for this view.
    pub fn row_capacity(view: &InvoiceView) -> usize {
        let first_row = Self::first_row(view);
        if first_row < LAST_ROW_Y {
            return 0;
        }
        ((first_row - LAST_ROW_Y) / ROW_HEIGHT).floor() as usize + 1
    }

    /// Render `view` into PDF bytes.
    pub fn export(&self, view: &InvoiceView) -> Result<Vec<u8>, ExportError> {
        if !view.is_presentation() {
            return Err(ExportError::NotPresentation);
        }
        let capacity = Self::row_capacity(view);
        // The issuer block alone can push the table header past the totals.
        if Self::first_row(view) < LAST_ROW_Y || view.lines.len() > capacity {
            return Err(ExportError::PageOverflow {
                rows: view.lines.len(),
                capacity,
            });
        }

        tracing::debug!(
            invoice_id = %view.invoice_id,
            version = view.version,
            rows = view.lines.len(),
            "rendering invoice pdf"
        );

        let (doc, page, layer) = PdfDocument::new(
            self.options.title.as_str(),
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Invoice",
        );
        let layer = doc.get_page(page).get_layer(layer);
        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| ExportError::Pdf(e.to_string()))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| ExportError::Pdf(e.to_string()))?,
        };

        Self::draw(&layer, &fonts, view);

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        Ok(bytes)
    }

    /// Render `view` and write it to `path` (or the configured output).
    pub fn export_to_path(
        &self,
        view: &InvoiceView,
        path: Option<&Path>,
    ) -> Result<PathBuf, ExportError> {
        let path = path.unwrap_or(self.options.output.as_path()).to_path_buf();
        let bytes = self.export(view)?;
        std::fs::write(&path, &bytes).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(
            invoice_id = %view.invoice_id,
            path = %path.display(),
            bytes = bytes.len(),
            "invoice exported"
        );
        Ok(path)
    }

    fn draw(layer: &PdfLayerReference, fonts: &Fonts, view: &InvoiceView) {
        let right = PAGE_WIDTH - MARGIN;
        let black = rgb((0.12, 0.12, 0.12));

        rule(layer, PAGE_HEIGHT - MARGIN + 5.0, ACCENT, 4.0);

        layer.set_fill_color(black.clone());
        text(layer, &fonts.bold, &view.issuer.name.to_uppercase(), 20.0, MARGIN, 272.0);
        text(layer, &fonts.regular, &format!("Date: {}", view.date), 9.0, MARGIN, 265.0);

        // Billing blocks.
        let mid = PAGE_WIDTH / 2.0;
        let mut y = 250.0;
        text(layer, &fonts.bold, "Billed to:", 12.0, MARGIN, y);
        text(layer, &fonts.bold, "From:", 12.0, mid, y);
        y -= LINE_HEIGHT + 1.0;
        let block_width = mid - MARGIN - 3.0;
        text(layer, &fonts.regular, &clip(&view.billed_to, 10.0, block_width), 10.0, MARGIN, y);
        text(layer, &fonts.regular, &clip(&view.issuer.name, 10.0, block_width), 10.0, mid, y);
        for line in &view.issuer.address_lines {
            y -= LINE_HEIGHT;
            text(layer, &fonts.regular, &clip(line, 10.0, block_width), 10.0, mid, y);
        }

        // Item table.
        let mut y = Self::table_top(view);
        rule(layer, y + 5.0, RULE, 0.5);
        layer.set_fill_color(black.clone());
        text(layer, &fonts.bold, "Item", 10.0, MARGIN, y);
        text(layer, &fonts.bold, "Quantity", 10.0, COL_QTY, y);
        text(layer, &fonts.bold, "Price", 10.0, COL_PRICE, y);
        text_right(layer, &fonts.bold, "Amount", 10.0, right, y);
        y -= 2.0;
        rule(layer, y, RULE, 0.5);
        layer.set_fill_color(black.clone());

        for row in &view.lines {
            y -= ROW_HEIGHT;
            let description = clip(&row.description, 10.0, COL_QTY - MARGIN - 3.0);
            text(layer, &fonts.regular, &description, 10.0, MARGIN, y);
            text(layer, &fonts.regular, &row.quantity, 10.0, COL_QTY, y);
            text(layer, &fonts.regular, &row.price, 10.0, COL_PRICE, y);
            text_right(layer, &fonts.regular, &row.amount, 10.0, right, y);
        }
        y -= 3.0;
        rule(layer, y, RULE, 0.5);
        layer.set_fill_color(black);

        // Totals.
        let mut y = 38.0;
        for (label, value) in [
            ("Total", &view.total),
            ("Received Amount", &view.received),
            ("Remaining Amount", &view.remaining),
        ] {
            text_right(layer, &fonts.bold, &format!("{label}: {value}"), 11.0, right, y);
            y -= ROW_HEIGHT;
        }

        rule(layer, MARGIN - 5.0, ACCENT, 4.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickbill_invoicing::{Invoice, ItemField};
    use quickbill_presentation::{Issuer, RenderMode};

    fn view_with_items(count: usize, mode: RenderMode) -> InvoiceView {
        let mut invoice = Invoice::new();
        invoice.set_client_name("Sana");
        invoice.set_date_input("2024-06-30");
        for i in 0..count {
            let index = if i == 0 { 0 } else { invoice.add_item() };
            invoice.update_item(index, ItemField::Description, &format!("Alteration {i}"));
            invoice.update_item(index, ItemField::UnitPrice, "12.50");
        }
        InvoiceView::build(&invoice.snapshot(), &Issuer::default(), mode)
    }

    #[test]
    fn exports_pdf_bytes() {
        let bytes = PdfExporter::default()
            .export(&view_with_items(3, RenderMode::Presentation))
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn editable_views_are_rejected() {
        let err = PdfExporter::default()
            .export(&view_with_items(1, RenderMode::Editable))
            .unwrap_err();
        assert!(matches!(err, ExportError::NotPresentation));
    }

    #[test]
    fn capacity_shrinks_with_longer_address() {
        let short = view_with_items(1, RenderMode::Presentation);
        let mut long = short.clone();
        long.issuer = Issuer::default().with_address("a|b|c|d");
        assert!(PdfExporter::row_capacity(&long) < PdfExporter::row_capacity(&short));
        assert!(PdfExporter::row_capacity(&short) >= 20);
    }

    #[test]
    fn too_many_rows_overflow_the_page() {
        let view = view_with_items(80, RenderMode::Presentation);
        let capacity = PdfExporter::row_capacity(&view);
        match PdfExporter::default().export(&view).unwrap_err() {
            ExportError::PageOverflow { rows, capacity: c } => {
                assert_eq!(rows, 80);
                assert_eq!(c, capacity);
            }
            other => panic!("expected PageOverflow, got {other:?}"),
        }
    }

    #[test]
    fn tall_issuer_block_overflows_even_without_items() {
        let mut invoice = Invoice::new();
        invoice.remove_item(0);
        let issuer = Issuer::default().with_address(&"x|".repeat(60));
        let view = InvoiceView::build(&invoice.snapshot(), &issuer, RenderMode::Presentation);

        assert_eq!(PdfExporter::row_capacity(&view), 0);
        assert!(matches!(
            PdfExporter::default().export(&view),
            Err(ExportError::PageOverflow { rows: 0, capacity: 0 })
        ));
    }

    #[test]
    fn empty_invoice_with_short_issuer_exports() {
        let mut invoice = Invoice::new();
        invoice.remove_item(0);
        let view =
            InvoiceView::build(&invoice.snapshot(), &Issuer::default(), RenderMode::Presentation);
        assert!(PdfExporter::default().export(&view).is_ok());
    }

    #[test]
    fn clip_keeps_descriptions_inside_the_item_column() {
        let max = COL_QTY - MARGIN - 3.0;
        let long = "Hand-stitched wool overcoat with silk lining ".repeat(4);
        let clipped = clip(&long, 10.0, max);
        assert!(clipped.ends_with("..."));
        assert!(text_width(&clipped, 10.0) <= max);
        assert_eq!(clip("Shirt", 10.0, max), "Shirt");
    }

    #[test]
    fn exactly_full_page_still_exports() {
        let probe = view_with_items(1, RenderMode::Presentation);
        let capacity = PdfExporter::row_capacity(&probe);
        let view = view_with_items(capacity, RenderMode::Presentation);
        assert!(PdfExporter::default().export(&view).is_ok());
    }
}
