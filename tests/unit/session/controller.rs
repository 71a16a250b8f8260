use super::*;

use std::cell::RefCell;
use std::rc::Rc;

struct CaptureSink {
    frames: Rc<RefCell<Vec<SceneFrame>>>,
}

impl RenderSink for CaptureSink {
    fn present(&mut self, frame: &SceneFrame) {
        self.frames.borrow_mut().push(frame.clone());
    }
}

type Frames = Rc<RefCell<Vec<SceneFrame>>>;

fn session_with(initial_folds: Vec<Fold>, crease_overlay: bool) -> (FoldSession, Frames) {
    let frames: Frames = Rc::default();
    let sink = CaptureSink {
        frames: Rc::clone(&frames),
    };
    let session = FoldSession::new(
        SessionOptions {
            paper: Paper::default(),
            initial_folds,
            crease_overlay,
        },
        Box::new(sink),
    )
    .unwrap();
    (session, frames)
}

fn two_folds() -> Vec<Fold> {
    vec![
        Fold::at_rest(FoldKind::Horizontal, 90.0, 50.0, FoldDirection::Mountain),
        Fold::at_rest(FoldKind::Vertical, 160.0, 25.0, FoldDirection::Valley),
    ]
}

#[test]
fn construction_renders_the_config_view() {
    let (session, frames) = session_with(two_folds(), false);
    assert_eq!(session.mode(), Mode::Config);
    assert_eq!(frames.borrow().len(), 1);
    // Config shows every fold at its target angle.
    for fold in session.folds() {
        assert_eq!(fold.current_angle, fold.target_angle);
    }
}

#[test]
fn construction_rejects_invalid_folds() {
    let mut bad = Fold::new(FoldKind::Horizontal);
    bad.target_angle = 200.0;
    let result = FoldSession::new(
        SessionOptions {
            initial_folds: vec![bad],
            ..SessionOptions::default()
        },
        Box::new(crate::render::sink::LastFrameSink::default()),
    );
    assert!(matches!(result, Err(PleatError::Validation(_))));
}

#[test]
fn crease_overlay_toggles_frame_segments() {
    let (_, frames) = session_with(two_folds(), true);
    assert_eq!(frames.borrow()[0].creases.len(), 2);

    let (_, frames) = session_with(two_folds(), false);
    assert!(frames.borrow()[0].creases.is_empty());
}

#[test]
fn entering_play_mode_flattens_the_sheet() {
    let (mut session, frames) = session_with(two_folds(), false);
    session.switch_mode(Mode::Play);

    assert_eq!(session.mode(), Mode::Play);
    assert_eq!(session.progress(), 0.0);
    for fold in session.folds() {
        assert_eq!(fold.current_angle, 0.0);
    }
    assert_eq!(frames.borrow().len(), 2);
}

#[test]
fn full_progress_reaches_every_target() {
    let (mut session, _) = session_with(two_folds(), false);
    session.switch_mode(Mode::Play);
    session.apply_play_state(200.0);
    for fold in session.folds() {
        assert_eq!(fold.current_angle, fold.target_angle);
    }
    assert_eq!(session.playback_percent(), 100.0);
}

#[test]
fn folds_animate_one_after_another() {
    let mut folds = two_folds();
    apply_sequential_progress(&mut folds, 150.0);
    // First window finished, second half-way (in-out cubic at 0.5 is 0.5).
    assert_eq!(folds[0].current_angle, 90.0);
    assert_eq!(folds[1].current_angle, 80.0);

    apply_sequential_progress(&mut folds, 50.0);
    assert_eq!(folds[0].current_angle, 45.0);
    assert_eq!(folds[1].current_angle, 0.0);
}

#[test]
fn playback_percent_floors_and_handles_empty() {
    let (mut session, _) = session_with(two_folds(), false);
    session.switch_mode(Mode::Play);
    session.apply_play_state(100.0);
    assert_eq!(session.playback_percent(), 50.0);

    let (session, _) = session_with(Vec::new(), false);
    assert_eq!(session.playback_percent(), 0.0);
}

#[test]
fn angle_updates_clamp_and_check_bounds() {
    let (mut session, _) = session_with(two_folds(), false);

    session.update_fold_angle(0, 500.0).unwrap();
    assert_eq!(session.folds()[0].target_angle, MAX_FOLD_ANGLE);
    assert_eq!(session.folds()[0].current_angle, MAX_FOLD_ANGLE);

    assert!(session.update_fold_angle(0, f64::NAN).is_err());
    assert!(session.update_fold_angle(5, 90.0).is_err());
}

#[test]
fn position_updates_clamp_and_check_bounds() {
    let (mut session, _) = session_with(two_folds(), false);
    session.update_fold_position(1, -10.0).unwrap();
    assert_eq!(session.folds()[1].position, 0.0);
    assert!(session.update_fold_position(9, 50.0).is_err());
}

#[test]
fn add_and_remove_reshape_the_sequence() {
    let (mut session, frames) = session_with(Vec::new(), false);
    session.add_fold(FoldKind::Diag2);
    assert_eq!(session.folds().len(), 1);
    assert_eq!(session.folds()[0].kind, FoldKind::Diag2);

    session.remove_fold(0).unwrap();
    assert!(session.folds().is_empty());
    assert!(session.remove_fold(0).is_err());

    // Initial render plus one per successful mutation.
    assert_eq!(frames.borrow().len(), 3);
}

#[test]
fn mutations_notify_the_change_callback() {
    let (mut session, _) = session_with(Vec::new(), false);
    let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
    let seen_inner = Rc::clone(&seen);
    session.set_on_change(Box::new(move |folds| {
        seen_inner.borrow_mut().push(folds.len());
    }));

    session.add_fold(FoldKind::Horizontal);
    session.update_fold_direction(0, FoldDirection::Valley).unwrap();
    session.remove_fold(0).unwrap();

    assert_eq!(*seen.borrow(), vec![1, 1, 0]);
}

#[test]
fn load_preset_replaces_the_sequence() {
    let (mut session, _) = session_with(two_folds(), false);
    session.load_preset("paper-airplane-simple").unwrap();
    assert_eq!(session.folds().len(), 3);

    let err = session.load_preset("nonexistent").unwrap_err();
    assert!(matches!(err, PleatError::Validation(_)));
    assert_eq!(session.folds().len(), 3);
}

#[test]
fn failed_import_leaves_folds_untouched() {
    let (mut session, _) = session_with(two_folds(), false);
    assert!(session.import_folds("{not json").is_err());
    assert_eq!(session.folds().len(), 2);
    assert_eq!(session.folds()[0].kind, FoldKind::Horizontal);
}

#[test]
fn export_feeds_import() {
    let (session, _) = session_with(two_folds(), false);
    let json = session.export_folds("test-pattern").unwrap();

    let (mut other, _) = session_with(Vec::new(), false);
    other.import_folds(&json).unwrap();
    assert_eq!(other.folds().len(), 2);
    assert_eq!(other.folds()[1].kind, FoldKind::Vertical);
    assert_eq!(other.folds()[1].direction, FoldDirection::Valley);
}

#[test]
fn glide_eases_out_toward_folded() {
    let (mut session, _) = session_with(two_folds(), false);
    session.switch_mode(Mode::Play);

    session.animate_to(PlaybackTarget::Folded, 0.0);
    assert!(session.is_animating());

    // Out-cubic at t = 0.5 is 0.875, so progress is 87.5% of 200.
    assert!(session.tick(500.0));
    assert_eq!(session.progress(), 175.0);

    // Final sample lands exactly on the target and retires the glide.
    assert!(!session.tick(1000.0));
    assert!(!session.is_animating());
    assert_eq!(session.progress(), 200.0);
    for fold in session.folds() {
        assert_eq!(fold.current_angle, fold.target_angle);
    }
}

#[test]
fn new_glide_cancels_the_old_one() {
    let (mut session, _) = session_with(two_folds(), false);
    session.switch_mode(Mode::Play);
    session.apply_play_state(200.0);

    session.animate_to(PlaybackTarget::Unfolded, 0.0);
    session.tick(500.0);
    let midway = session.progress();
    assert!(midway > 0.0 && midway < 200.0);

    // Restart toward folded from wherever the first glide got to.
    session.animate_to(PlaybackTarget::Folded, 500.0);
    assert!(!session.tick(1500.0));
    assert_eq!(session.progress(), 200.0);
}

#[test]
fn tick_without_a_glide_is_inert() {
    let (mut session, frames) = session_with(two_folds(), false);
    let before = frames.borrow().len();
    assert!(!session.tick(123.0));
    assert_eq!(frames.borrow().len(), before);
}
