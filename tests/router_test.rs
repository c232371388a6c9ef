//! Router mounting and identifier fallback

use cardiorehab::core::Section;
use cardiorehab::router::{Router, SectionView};

#[test]
fn test_every_section_mounts_its_own_view() {
    let mut router = Router::default();
    for section in Section::ALL {
        router.select(section);
        assert_eq!(router.active(), section);
        assert_eq!(router.view().section(), section);
    }
}

#[test]
fn test_default_is_dashboard() {
    let router = Router::default();
    assert_eq!(router.active(), Section::Dashboard);
    assert!(matches!(router.mounted(), SectionView::Dashboard(_)));
}

#[test]
fn test_unknown_identifiers_fall_back_to_dashboard() {
    for id in ["", "billing", "settings", "vitals2"] {
        let mut router = Router::new(Section::Messages);
        assert_eq!(router.select_id(id), Section::Dashboard, "id {id:?}");
        assert!(matches!(router.mounted(), SectionView::Dashboard(_)));
    }
}

#[test]
fn test_reselect_keeps_view_state() {
    let mut router = Router::new(Section::Exercise);
    if let SectionView::Exercise(tracker) = router.mounted_mut() {
        tracker.toggle_timer(3);
    }
    router.select(Section::Exercise);
    match router.mounted() {
        SectionView::Exercise(tracker) => assert!(tracker.timer().is_running(3)),
        _ => panic!("exercise view should stay mounted"),
    }
}

#[test]
fn test_switching_away_resets_view_state() {
    let mut router = Router::new(Section::Exercise);
    if let SectionView::Exercise(tracker) = router.mounted_mut() {
        tracker.toggle_timer(3);
    }
    router.select(Section::Vitals);
    router.select(Section::Exercise);
    match router.mounted() {
        SectionView::Exercise(tracker) => assert!(!tracker.timer().is_running(3)),
        _ => panic!("exercise view should be mounted"),
    }
}
