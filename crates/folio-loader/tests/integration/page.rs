//! Whole-page scenarios: concurrent section loads stay independent.

use folio_loader::PortfolioPage;
use folio_loader::fallback;
use folio_store::MemoryBackend;

use crate::common::{GatedBackend, TestHarness, education_doc, experience_doc};

#[tokio::test]
async fn load_all_mixes_fetched_and_fallback_sections() {
    let harness = TestHarness::new(
        MemoryBackend::new()
            .with_collection("data/education", vec![education_doc("Fetched Degree", 1)])
            .with_failure("data/experiences"),
    );
    let page = PortfolioPage::new();
    assert!(page.is_loading());

    page.load_all(&harness.client).await;
    assert!(!page.is_loading());

    let snapshot = page.snapshot();
    // Education came from the store.
    assert_eq!(snapshot.education.len(), 1);
    assert_eq!(snapshot.education[0].degree, "Fetched Degree");
    // Experiences failed and fell back; nothing leaked across sections.
    assert_eq!(snapshot.experiences, *fallback::EXPERIENCES);
    // Everything else was empty upstream and fell back too.
    assert_eq!(snapshot.skills, *fallback::SKILLS);
    assert_eq!(snapshot.contact.as_ref(), Some(&*fallback::CONTACT));

    let failures = harness.sink.failures();
    assert_eq!(failures.len(), 1);
}

#[tokio::test]
async fn load_all_over_an_empty_store_settles_on_all_fallbacks() {
    let harness = TestHarness::empty();
    let page = PortfolioPage::new();

    page.load_all(&harness.client).await;

    assert!(!page.is_loading());
    let snapshot = page.snapshot();
    assert_eq!(snapshot.experiences, *fallback::EXPERIENCES);
    assert_eq!(snapshot.projects, *fallback::PROJECTS);
    assert_eq!(snapshot.education, *fallback::EDUCATION);
    assert_eq!(snapshot.achievements, *fallback::ACHIEVEMENTS);
    assert_eq!(snapshot.profile.as_ref(), Some(&*fallback::PROFILE));
    assert!(harness.sink.failures().is_empty());
}

#[tokio::test]
async fn teardown_mid_flight_discards_every_late_response() {
    let (gate, backend) = GatedBackend::new(
        MemoryBackend::new()
            .with_collection("data/experiences", vec![experience_doc("Fetched", 1)]),
    );
    let harness = TestHarness::with_backend(std::sync::Arc::new(backend));
    let page = PortfolioPage::new();

    let in_flight = tokio::spawn({
        let page = page.clone();
        let client = harness.client.clone();
        async move { page.load_all(&client).await }
    });
    // Let every section capture its token and block on the gate, then tear
    // the page down before any response can arrive.
    tokio::task::yield_now().await;
    page.invalidate();
    gate.send(true).expect("gate receiver dropped");
    in_flight.await.expect("load_all panicked");

    // All responses carried stale tokens: nothing applied, nothing settled.
    assert!(page.is_loading());
    assert_eq!(page.snapshot().experiences, *fallback::EXPERIENCES);
}
