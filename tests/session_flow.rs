use chrono::NaiveDate;

use kallkoll::certificate;
use kallkoll::challenge;
use kallkoll::content::{self, ChallengeItem, ContentError, ContentSource, MIN_ITEMS};
use kallkoll::session::stage::ALL_STAGES;
use kallkoll::session::{Session, Stage};
use kallkoll::store::NameStore;

struct FailingSource;

impl ContentSource for FailingSource {
    fn fetch(&self) -> Result<Vec<ChallengeItem>, ContentError> {
        Err(ContentError::Request("connection refused".to_string()))
    }
}

struct EmptySource;

impl ContentSource for EmptySource {
    fn fetch(&self) -> Result<Vec<ChallengeItem>, ContentError> {
        Ok(Vec::new())
    }
}

fn session_items(source: Option<&dyn ContentSource>) -> Vec<ChallengeItem> {
    let fallback = content::fallback::items().unwrap();
    content::resolve(source, fallback).items
}

/// Play one full session, choosing with `pick` at every challenge stage.
/// Returns the finished session.
fn play_session(items: &[ChallengeItem], pick: impl Fn(&challenge::ChallengeCard) -> usize) -> Session {
    let mut session = Session::new();
    session.start().unwrap();

    let mut visited = vec![Stage::Welcome, session.stage()];
    while session.stage() != Stage::Results {
        let card = challenge::card_for(session.stage(), items, true, false)
            .expect("challenge stage must have a card");
        let choice = &card.choices[pick(&card)];
        assert!(!choice.locked, "picked choice must be selectable");
        session.award(choice.outcome.clone()).unwrap();
        // Invariant holds in every reachable state
        assert_eq!(session.progress.score, session.progress.category_sum());
        let next = session.acknowledge().unwrap();
        visited.push(next);
    }

    // Strictly increasing, no repeats, no skips, ends at Results
    assert_eq!(visited, ALL_STAGES);
    session
}

#[test]
fn perfect_playthrough_scores_fifty_and_reads_expert() {
    let items = session_items(None);
    let session = play_session(&items, |card| {
        card.choices
            .iter()
            .position(|c| c.outcome.correct)
            .expect("every card has a correct choice")
    });

    assert_eq!(session.progress.score, 50);
    assert_eq!(session.progress.total_challenges, 5);
    assert_eq!(certificate::verdict_label(session.progress.score), "Expert");
}

#[test]
fn all_wrong_playthrough_scores_zero_and_reads_analyst() {
    let items = session_items(None);
    let session = play_session(&items, |card| {
        card.choices
            .iter()
            .position(|c| !c.outcome.correct && !c.locked)
            .expect("every card has a selectable incorrect choice")
    });

    assert_eq!(session.progress.score, 0);
    assert_eq!(session.progress.total_challenges, 5);
    assert_eq!(certificate::verdict_label(session.progress.score), "Analyst");
}

#[test]
fn failing_provider_still_yields_a_playable_session() {
    for source in [&FailingSource as &dyn ContentSource, &EmptySource] {
        let items = session_items(Some(source));
        assert!(items.len() >= MIN_ITEMS);

        // The two content-dependent stages must be playable
        let ai = challenge::card_for(Stage::AiDetection, &items, true, false).unwrap();
        assert_eq!(ai.choices.len(), 2);
        let lateral = challenge::card_for(Stage::LateralReading, &items, true, false).unwrap();
        assert_eq!(lateral.choices.len(), 2);

        play_session(&items, |card| {
            card.choices.iter().position(|c| !c.locked).unwrap()
        });
    }
}

#[test]
fn clue_disclosure_is_free_and_idempotent() {
    let items = session_items(None);
    let mut session = Session::new();
    session.start().unwrap();
    let before = session.progress.clone();

    // Toggling disclosure any number of times only changes the card view
    for shown in [true, false, true, true, false] {
        let card = challenge::card_for(Stage::LateralReading, &items, true, shown).unwrap();
        let search = card.clue_search.unwrap();
        assert_eq!(search.clues.is_some(), shown);
    }
    assert_eq!(session.progress, before);
}

#[test]
fn exported_name_survives_a_new_session() {
    let dir = tempfile::TempDir::new().unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();

    let items = session_items(None);
    let session = play_session(&items, |card| {
        card.choices.iter().position(|c| c.outcome.correct).unwrap()
    });

    // Export: persist the name, then write the certificate
    let store = NameStore::with_base_dir(dir.path().to_path_buf()).unwrap();
    store.save("Robin Chen").unwrap();
    let path = certificate::export(dir.path(), &session.progress, "Robin Chen", date).unwrap();

    // A later session reads the same name back and renders the same document
    let store2 = NameStore::with_base_dir(dir.path().to_path_buf()).unwrap();
    let name = store2.load();
    assert_eq!(name, "Robin Chen");

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, certificate::compose(&session.progress, &name, date));
    assert!(written.contains("Robin Chen"));
    assert!(written.contains("Expert"));
}
