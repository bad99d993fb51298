mod common;

use bevy_ecs::message::Messages;
use common::{build_test_app, published_signal, stored_signal, uid_of};
use wired_signals::ecs::test_helpers::{cancel, confirm, open_dialog_for, tick, tick_n, type_text};
use wired_signals::ecs::{
    AssignmentLog, AssignmentOutcome, ConstantSignal, DialogButtonKind, DialogStack,
    DiscardReason, SignalCommand, UidMap, duplicate_signal_emitter, place_entity,
    spawn_signal_emitter,
};
use wired_signals::model::{Color, SignalValue, parse_signal_code};

#[test]
fn placed_emitter_typed_red_publishes_red() {
    let mut app = build_test_app();
    let emitter = spawn_signal_emitter(app.world_mut(), None);

    place_entity(app.world_mut(), emitter);
    tick(&mut app);
    let dialog = open_dialog_for(&app, emitter).expect("dialog should open on placement");

    type_text(&mut app, dialog, "red");
    confirm(&mut app, dialog);
    tick(&mut app);

    assert!(app.world().resource::<DialogStack>().is_empty());
    assert_eq!(
        stored_signal(&app, emitter),
        Some(SignalValue::Color(Color::Red))
    );

    tick(&mut app);
    assert_eq!(
        published_signal(&app, emitter),
        Some(SignalValue::Color(Color::Red))
    );
}

#[test]
fn invalid_text_keeps_confirm_disabled() {
    let mut app = build_test_app();
    let emitter = spawn_signal_emitter(app.world_mut(), None);
    place_entity(app.world_mut(), emitter);
    tick(&mut app);
    let dialog = open_dialog_for(&app, emitter).unwrap();

    type_text(&mut app, dialog, "xyz");
    tick(&mut app);
    let ok_enabled = app
        .world()
        .resource::<DialogStack>()
        .get(dialog)
        .unwrap()
        .is_button_enabled(DialogButtonKind::Ok);
    assert!(!ok_enabled);

    confirm(&mut app, dialog);
    tick_n(&mut app, 3);

    assert!(app.world().resource::<DialogStack>().get(dialog).is_some());
    assert_eq!(stored_signal(&app, emitter), None);
    assert_eq!(published_signal(&app, emitter), None);
    assert!(app.world().resource::<AssignmentLog>().records.is_empty());
}

#[test]
fn correcting_invalid_text_then_confirming_commits() {
    let mut app = build_test_app();
    let emitter = spawn_signal_emitter(app.world_mut(), None);
    place_entity(app.world_mut(), emitter);
    tick(&mut app);
    let dialog = open_dialog_for(&app, emitter).unwrap();

    type_text(&mut app, dialog, "xyz");
    confirm(&mut app, dialog);
    tick(&mut app);

    type_text(&mut app, dialog, "  CuRuSuWu  ");
    confirm(&mut app, dialog);
    tick(&mut app);

    assert_eq!(stored_signal(&app, emitter), parse_signal_code("CuRuSuWu"));
}

#[test]
fn boolean_codes_commit_booleans() {
    let mut app = build_test_app();
    let on = spawn_signal_emitter(app.world_mut(), None);
    let off = spawn_signal_emitter(app.world_mut(), None);
    place_entity(app.world_mut(), on);
    place_entity(app.world_mut(), off);
    tick(&mut app);

    let on_dialog = open_dialog_for(&app, on).unwrap();
    let off_dialog = open_dialog_for(&app, off).unwrap();
    type_text(&mut app, on_dialog, "true");
    type_text(&mut app, off_dialog, "0");
    confirm(&mut app, on_dialog);
    confirm(&mut app, off_dialog);
    tick_n(&mut app, 2);

    assert_eq!(published_signal(&app, on), Some(SignalValue::TRUE));
    assert_eq!(published_signal(&app, off), Some(SignalValue::FALSE));
}

#[test]
fn target_destroyed_mid_dialog_leaves_others_untouched() {
    let mut app = build_test_app();
    let doomed = spawn_signal_emitter(app.world_mut(), None);
    let bystander = spawn_signal_emitter(app.world_mut(), Some(SignalValue::FALSE));
    let doomed_uid = uid_of(&app, doomed);

    place_entity(app.world_mut(), doomed);
    tick(&mut app);
    let dialog = open_dialog_for(&app, doomed).unwrap();

    app.world_mut()
        .resource_mut::<Messages<SignalCommand>>()
        .write(SignalCommand::despawn(doomed_uid));
    tick(&mut app);
    assert!(app.world().get_entity(doomed).is_err());

    type_text(&mut app, dialog, "1");
    confirm(&mut app, dialog);
    tick_n(&mut app, 2);

    assert!(app.world().resource::<DialogStack>().is_empty());
    assert_eq!(stored_signal(&app, bystander), Some(SignalValue::FALSE));
    assert_eq!(published_signal(&app, bystander), Some(SignalValue::FALSE));
    assert_eq!(
        app.world().resource::<AssignmentLog>().last().map(|r| &r.outcome),
        Some(&AssignmentOutcome::Discarded(DiscardReason::EntityGone))
    );
}

#[test]
fn new_entity_cannot_inherit_stale_dialog() {
    let mut app = build_test_app();
    let doomed = spawn_signal_emitter(app.world_mut(), None);
    let doomed_uid = uid_of(&app, doomed);
    place_entity(app.world_mut(), doomed);
    tick(&mut app);
    let dialog = open_dialog_for(&app, doomed).unwrap();

    app.world_mut()
        .resource_mut::<Messages<SignalCommand>>()
        .write(SignalCommand::despawn(doomed_uid));
    tick(&mut app);

    // Bevy may recycle the entity slot; the uid is never recycled
    let replacement = spawn_signal_emitter(app.world_mut(), None);
    assert_ne!(uid_of(&app, replacement), doomed_uid);

    type_text(&mut app, dialog, "blue");
    confirm(&mut app, dialog);
    tick_n(&mut app, 2);

    assert_eq!(stored_signal(&app, replacement), None);
    assert_eq!(app.world().resource::<UidMap>().find_by_uid(doomed_uid), None);
}

#[test]
fn store_stripped_mid_dialog_is_ignored() {
    let mut app = build_test_app();
    let emitter = spawn_signal_emitter(app.world_mut(), None);
    place_entity(app.world_mut(), emitter);
    tick(&mut app);
    let dialog = open_dialog_for(&app, emitter).unwrap();

    app.world_mut()
        .entity_mut(emitter)
        .remove::<ConstantSignal>();

    type_text(&mut app, dialog, "green");
    confirm(&mut app, dialog);
    tick_n(&mut app, 2);

    assert!(app.world().get_entity(emitter).is_ok());
    assert!(app.world().get::<ConstantSignal>(emitter).is_none());
    assert_eq!(
        app.world().resource::<AssignmentLog>().last().map(|r| &r.outcome),
        Some(&AssignmentOutcome::Discarded(DiscardReason::StoreRemoved))
    );
}

#[test]
fn cancelled_dialog_changes_nothing() {
    let mut app = build_test_app();
    let emitter = spawn_signal_emitter(app.world_mut(), Some(SignalValue::Color(Color::Yellow)));
    place_entity(app.world_mut(), emitter);
    tick(&mut app);
    let dialog = open_dialog_for(&app, emitter).unwrap();

    type_text(&mut app, dialog, "purple");
    cancel(&mut app, dialog);
    tick_n(&mut app, 2);

    assert!(app.world().resource::<DialogStack>().is_empty());
    assert_eq!(
        published_signal(&app, emitter),
        Some(SignalValue::Color(Color::Yellow))
    );
}

#[test]
fn concurrent_dialogs_are_independent() {
    let mut app = build_test_app();
    let a = spawn_signal_emitter(app.world_mut(), None);
    let b = spawn_signal_emitter(app.world_mut(), None);
    place_entity(app.world_mut(), a);
    place_entity(app.world_mut(), b);
    tick(&mut app);
    assert_eq!(app.world().resource::<DialogStack>().len(), 2);

    let dialog_a = open_dialog_for(&app, a).unwrap();
    let dialog_b = open_dialog_for(&app, b).unwrap();
    type_text(&mut app, dialog_b, "cyan");
    confirm(&mut app, dialog_b);
    cancel(&mut app, dialog_a);
    tick_n(&mut app, 2);

    assert_eq!(stored_signal(&app, a), None);
    assert_eq!(stored_signal(&app, b), Some(SignalValue::Color(Color::Cyan)));
}

#[test]
fn pasted_copy_publishes_same_signal() {
    let mut app = build_test_app();
    let source = spawn_signal_emitter(app.world_mut(), parse_signal_code("Sr--Sr--:--Cw--Cw"));
    let copy = duplicate_signal_emitter(app.world_mut(), source).unwrap();
    tick(&mut app);

    let published = published_signal(&app, copy).unwrap();
    assert!(published.shares_payload_with(&stored_signal(&app, source).unwrap()));
}

#[test]
fn publishing_tracks_entity_set_changes() {
    let mut app = build_test_app();
    let first = spawn_signal_emitter(app.world_mut(), Some(SignalValue::TRUE));
    tick(&mut app);
    assert_eq!(published_signal(&app, first), Some(SignalValue::TRUE));

    let late = spawn_signal_emitter(app.world_mut(), Some(SignalValue::Color(Color::White)));
    tick(&mut app);
    assert_eq!(
        published_signal(&app, late),
        Some(SignalValue::Color(Color::White))
    );
}
