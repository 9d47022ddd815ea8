use quickbill_cli::{Outcome, Session};
use quickbill_export::{ExportOptions, PdfExporter};
use quickbill_presentation::Issuer;

#[test]
fn session_exports_a_snapshot_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let default_output = dir.path().join("invoice.pdf");
    let exporter = PdfExporter::new(ExportOptions {
        output: default_output.clone(),
        ..ExportOptions::default()
    });
    let mut session = Session::new(Issuer::new("Needle Works"), exporter);

    for line in [
        "client Hamza",
        "date 2024-11-02",
        "set 1 description Shirt",
        "set 1 price 20",
        "set 1 quantity 2",
        "received 15",
    ] {
        session.execute(line).unwrap();
    }

    let Outcome::Continue(message) = session.execute("export").unwrap() else {
        panic!("export must not end the session");
    };
    assert!(message.contains("invoice.pdf"));
    assert!(std::fs::read(&default_output).unwrap().starts_with(b"%PDF"));

    let named = dir.path().join("hamza.pdf");
    session
        .execute(&format!("export {}", named.display()))
        .unwrap();
    assert!(named.exists());
}

#[test]
fn export_failure_leaves_the_invoice_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::new(Issuer::default(), PdfExporter::default());
    session.execute("set 1 price 9.99").unwrap();
    let before = session.invoice().clone();

    let bad = dir.path().join("missing").join("x.pdf");
    assert!(session.execute(&format!("export {}", bad.display())).is_err());

    assert_eq!(session.invoice(), &before);
}
