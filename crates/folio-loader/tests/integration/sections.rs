//! Per-section loader scenarios: fetched, empty, absent, and failing reads.

use folio_core::Category;
use folio_loader::{LoadPhase, SectionLoader, fallback};
use folio_store::MemoryBackend;

use crate::common::{TestHarness, achievement_doc, contact_doc, education_doc, experience_doc};

#[tokio::test]
async fn education_rows_display_in_ascending_order() {
    let harness = TestHarness::new(MemoryBackend::new().with_collection(
        "data/education",
        vec![
            education_doc("second", 2),
            education_doc("first", 1),
        ],
    ));
    let loader = SectionLoader::new(Category::Education, fallback::EDUCATION.clone());

    loader.load_with(|| harness.client.education()).await;

    let rows = loader.data();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].degree, "first");
    assert_eq!(rows[1].degree, "second");
}

#[tokio::test]
async fn failing_achievements_read_keeps_the_four_fallback_entries() {
    let harness = TestHarness::new(MemoryBackend::new().with_failure("data/achievements"));
    let loader = SectionLoader::new(Category::Achievements, fallback::ACHIEVEMENTS.clone());
    assert!(loader.is_loading());

    loader.load_with(|| harness.client.achievements()).await;

    assert_eq!(loader.data(), *fallback::ACHIEVEMENTS);
    assert_eq!(loader.data().len(), 4);
    assert!(!loader.is_loading());

    // The absorbed failure is still visible to operators.
    let failures = harness.sink.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].category, Category::Achievements);
}

#[tokio::test]
async fn empty_collection_keeps_the_fallback() {
    let harness = TestHarness::empty();
    let loader = SectionLoader::new(Category::Experiences, fallback::EXPERIENCES.clone());

    loader.load_with(|| harness.client.experiences()).await;

    assert_eq!(loader.data(), *fallback::EXPERIENCES);
    assert!(!loader.is_loading());
    // Empty is a legitimate answer, not a failure.
    assert!(harness.sink.failures().is_empty());
}

#[tokio::test]
async fn absent_contact_document_keeps_fallback_contact_and_socials() {
    let harness = TestHarness::empty();
    let loader = SectionLoader::new(Category::Contact, Some(fallback::CONTACT.clone()));

    loader.load_with(|| harness.client.contact()).await;

    let contact = loader.data().unwrap();
    assert_eq!(contact.contact_info, fallback::CONTACT.contact_info);
    assert_eq!(contact.social_links, fallback::CONTACT.social_links);
    assert!(!loader.is_loading());
}

#[tokio::test]
async fn fetched_data_replaces_the_fallback_wholesale() {
    let harness = TestHarness::new(
        MemoryBackend::new()
            .with_collection("data/experiences", vec![experience_doc("Staff Engineer", 1)]),
    );
    let loader = SectionLoader::new(Category::Experiences, fallback::EXPERIENCES.clone());

    loader.load_with(|| harness.client.experiences()).await;

    let rows = loader.data();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Staff Engineer");
    // Nothing of the fallback survives the replacement.
    assert!(rows.iter().all(|e| e.title != fallback::EXPERIENCES[0].title));
}

#[tokio::test]
async fn fetched_contact_document_replaces_the_fallback() {
    let harness =
        TestHarness::new(MemoryBackend::new().with_document("contact", contact_doc()));
    let loader = SectionLoader::new(Category::Contact, Some(fallback::CONTACT.clone()));

    loader.load_with(|| harness.client.contact()).await;

    let contact = loader.data().unwrap();
    assert_eq!(contact.contact_info[0].value, "someone@example.com");
}

#[tokio::test]
async fn loading_placeholder_gates_off_after_failure_too() {
    let harness = TestHarness::new(MemoryBackend::new().with_failure("data/achievements"));
    let loader = SectionLoader::new(Category::Achievements, fallback::ACHIEVEMENTS.clone());
    let mut states = loader.subscribe();
    assert_eq!(states.borrow().phase, LoadPhase::Loading);

    loader.load_with(|| harness.client.achievements()).await;

    states.changed().await.expect("loader dropped");
    assert_eq!(states.borrow().phase, LoadPhase::Settled);
}

#[tokio::test]
async fn late_response_after_teardown_is_discarded() {
    let harness = TestHarness::new(
        MemoryBackend::new().with_collection("data/achievements", vec![achievement_doc("Late", 1)]),
    );
    let loader = SectionLoader::new(Category::Achievements, fallback::ACHIEVEMENTS.clone());

    let token = loader.token();
    let fetched = harness.client.achievements().await;
    loader.invalidate();

    assert!(!loader.apply(token, fetched));
    assert_eq!(loader.data(), *fallback::ACHIEVEMENTS);
}
