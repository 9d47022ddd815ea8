//! Building an invoice from command-line fields.

use quickbill_invoicing::{Invoice, ItemField};

use crate::args::InvoiceArgs;

/// Raw parts of one `--item` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec<'a> {
    pub description: &'a str,
    pub price: Option<&'a str>,
    pub quantity: Option<&'a str>,
}

/// Split `description:price:quantity`. The description may itself contain
/// colons; price and quantity are taken from the right.
pub fn parse_item_spec(raw: &str) -> ItemSpec<'_> {
    let mut parts: Vec<&str> = raw.rsplitn(3, ':').collect();
    parts.reverse();
    match parts.as_slice() {
        &[description, price, quantity] => ItemSpec {
            description,
            price: Some(price),
            quantity: Some(quantity),
        },
        &[description, price] => ItemSpec {
            description,
            price: Some(price),
            quantity: None,
        },
        _ => ItemSpec {
            description: raw,
            price: None,
            quantity: None,
        },
    }
}

/// Fill a fresh invoice the way the form would: the first item reuses the
/// blank row every invoice starts with, later items are added.
pub fn build_invoice(args: &InvoiceArgs) -> Invoice {
    let mut invoice = Invoice::new();
    invoice.set_client_name(args.client.trim());
    invoice.set_date_input(&args.date);
    invoice.set_received_amount_input(&args.received);

    for (i, raw) in args.items.iter().enumerate() {
        let index = if i < invoice.item_count() { i } else { invoice.add_item() };
        let spec = parse_item_spec(raw);
        invoice.update_item(index, ItemField::Description, spec.description.trim());
        if let Some(price) = spec.price {
            invoice.update_item(index, ItemField::UnitPrice, price);
        }
        if let Some(quantity) = spec.quantity {
            invoice.update_item(index, ItemField::Quantity, quantity);
        }
    }

    invoice
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickbill_core::Money;

    #[test]
    fn item_spec_takes_price_and_quantity_from_the_right() {
        assert_eq!(
            parse_item_spec("Fitting: 10:30 slot:15:2"),
            ItemSpec {
                description: "Fitting: 10:30 slot",
                price: Some("15"),
                quantity: Some("2"),
            }
        );
        assert_eq!(
            parse_item_spec("Shirt:20"),
            ItemSpec {
                description: "Shirt",
                price: Some("20"),
                quantity: None,
            }
        );
        assert_eq!(parse_item_spec("Shirt").price, None);
    }

    #[test]
    fn builds_scenario_a() {
        let invoice = build_invoice(&InvoiceArgs {
            client: "Hamza".into(),
            date: "2024-11-02".into(),
            received: "50".into(),
            items: vec!["Shirt:20.00:2".into(), "Trousers:35.50:1".into()],
        });
        assert_eq!(invoice.item_count(), 2);
        assert_eq!(invoice.compute_total(), Money::from_minor(7550));
        assert_eq!(invoice.compute_remaining(), Money::from_minor(2550));
    }

    #[test]
    fn item_without_quantity_keeps_default_of_one() {
        let invoice = build_invoice(&InvoiceArgs {
            items: vec!["Hem:8".into()],
            ..InvoiceArgs::default()
        });
        assert_eq!(invoice.items()[0].quantity(), 1);
        assert_eq!(invoice.compute_total(), Money::from_minor(800));
    }

    #[test]
    fn no_items_keeps_the_blank_row() {
        let invoice = build_invoice(&InvoiceArgs::default());
        assert_eq!(invoice.item_count(), 1);
        assert_eq!(invoice.compute_total(), Money::ZERO);
    }
}
