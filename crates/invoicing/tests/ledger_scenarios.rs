use quickbill_core::{AggregateRoot, Entity, Money};
use quickbill_invoicing::{Invoice, ItemField};

fn fill(invoice: &mut Invoice, index: usize, description: &str, price: &str, quantity: &str) {
    assert!(invoice.update_item(index, ItemField::Description, description));
    assert!(invoice.update_item(index, ItemField::UnitPrice, price));
    assert!(invoice.update_item(index, ItemField::Quantity, quantity));
}

#[test]
fn shirt_and_trousers_with_partial_payment() {
    let mut invoice = Invoice::new();
    invoice.set_client_name("Hamza");
    invoice.set_date_input("2024-11-02");
    fill(&mut invoice, 0, "Shirt", "20.00", "2");
    let second = invoice.add_item();
    fill(&mut invoice, second, "Trousers", "35.50", "1");
    invoice.set_received_amount_input("50");

    assert_eq!(invoice.compute_total(), Money::from_minor(7550));
    assert_eq!(invoice.compute_remaining(), Money::from_minor(2550));
    assert_eq!(invoice.compute_total().to_string(), "75.50");
    assert_eq!(invoice.compute_remaining().to_string(), "25.50");
}

#[test]
fn all_items_removed_leaves_only_the_payment() {
    let mut invoice = Invoice::new();
    fill(&mut invoice, 0, "Shirt", "20.00", "2");
    invoice.add_item();
    invoice.set_received_amount_input("30");

    while invoice.remove_item(0).is_some() {}

    assert!(invoice.items().is_empty());
    assert_eq!(invoice.compute_total(), Money::ZERO);
    assert_eq!(invoice.compute_remaining(), Money::from_minor(-3000));
}

#[test]
fn removing_middle_item_preserves_first_and_third() {
    let mut invoice = Invoice::new();
    invoice.remove_item(0);
    for (description, price) in [("Waistcoat", "60"), ("Collar fix", "5"), ("Sherwani", "120")] {
        let index = invoice.add_item();
        fill(&mut invoice, index, description, price, "1");
    }
    let first = invoice.items()[0].clone();
    let third = invoice.items()[2].clone();

    let removed = invoice.remove_item(1).unwrap();

    assert_eq!(removed.description(), "Collar fix");
    assert_eq!(invoice.items(), &[first.clone(), third.clone()]);
    assert!(invoice.items()[0].same_identity_as(&first));
    assert!(invoice.items()[1].same_identity_as(&third));
    assert_eq!(invoice.position_of(*third.id()), Some(1));
    assert_eq!(invoice.compute_total(), Money::from_minor(18000));
}

#[test]
fn snapshot_serializes_for_collaborators() {
    let mut invoice = Invoice::new();
    fill(&mut invoice, 0, "Shirt", "20", "2");
    let snapshot = invoice.snapshot();

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["client_name"], "");
    assert_eq!(json["lines"].as_array().unwrap().len(), 1);
    assert_eq!(json["version"], invoice.version());
    assert!(json["issue_date"].is_null());
}
