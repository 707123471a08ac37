use docs_a11y::{AuditConfig, BrowserSession, LaunchOptions, MemorySink, Normalizer, NormalizerConfig};

const PAGE: &str = include_str!("fixtures/material_page.html");

fn launch() -> BrowserSession {
    let options = LaunchOptions::from_chrome_flags(&AuditConfig::default().chrome_flags());
    BrowserSession::launch(&options).expect("Failed to launch browser")
}

#[test]
#[ignore] // Requires Chrome to be installed
fn test_snapshot_of_rendered_page() {
    let session = launch();

    session
        .navigate("data:text/html,<html><body><main><h1>Docs</h1><h3>Deep</h3></main></body></html>")
        .expect("Failed to navigate");

    let tree = session.extract_element_tree().expect("Failed to extract DOM");
    assert_eq!(tree.tag_name, "html");
    assert!(tree.count_elements() >= 4);

    let mut doc = session.extract_document().expect("Failed to extract document");
    let report = Normalizer::new(&NormalizerConfig::default())
        .unwrap()
        .run(&mut doc, &mut MemorySink::new());

    assert_eq!(report.warnings().count(), 1);
    assert!(doc.element_by_id("main-content").is_some());
}

#[test]
#[ignore]
fn test_snapshot_of_site_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("index.html");
    std::fs::write(&path, PAGE).unwrap();

    let session = launch();
    session.navigate(path.to_str().unwrap()).expect("Failed to navigate");

    let mut doc = session.extract_document().expect("Failed to extract document");
    let report = Normalizer::new(&NormalizerConfig::default())
        .unwrap()
        .run(&mut doc, &mut MemorySink::new());

    assert!(!report.is_structurally_clean());
    assert!(doc.query(".md-search__form").unwrap().is_some());
}
