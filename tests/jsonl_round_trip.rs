mod common;

use common::{build_test_app, stored_signal, uid_of};
use wired_signals::ecs::test_helpers::tick;
use bevy_ecs::message::Messages;
use wired_signals::ecs::{EntityUid, SignalCommand, UidMap, spawn_signal_emitter};
use wired_signals::flush::{
    flush_constant_signals, read_constant_signals, restore_constant_signals,
};
use wired_signals::model::{Color, SignalValue, parse_signal_code};

fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

#[test]
fn flush_writes_one_line_per_store_in_uid_order() {
    let mut app = build_test_app();
    spawn_signal_emitter(app.world_mut(), Some(SignalValue::TRUE));
    spawn_signal_emitter(app.world_mut(), None);
    spawn_signal_emitter(app.world_mut(), Some(SignalValue::Color(Color::Blue)));
    spawn_signal_emitter(app.world_mut(), parse_signal_code("RuCu----"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save").join("signals.jsonl");
    flush_constant_signals(app.world_mut(), &path).unwrap();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 4);

    let parsed: Vec<serde_json::Value> = lines
        .iter()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let uids: Vec<u64> = parsed.iter().map(|v| v["uid"].as_u64().unwrap()).collect();
    assert_eq!(uids, vec![1, 2, 3, 4]);

    assert_eq!(parsed[0]["signal"]["$"], "boolean");
    assert_eq!(parsed[0]["signal"]["data"], 1);
    assert!(parsed[1]["signal"].is_null());
    assert_eq!(parsed[2]["signal"]["$"], "color");
    assert_eq!(parsed[2]["signal"]["data"], "blue");
    assert_eq!(parsed[3]["signal"]["$"], "shape");
    assert_eq!(parsed[3]["signal"]["data"], "RuCu----");
}

#[test]
fn snapshot_restores_into_fresh_world() {
    let mut source = build_test_app();
    let a = spawn_signal_emitter(source.world_mut(), Some(SignalValue::FALSE));
    let b = spawn_signal_emitter(source.world_mut(), parse_signal_code("WgWgWgWg:SuSuSuSu"));
    let empty = spawn_signal_emitter(source.world_mut(), None);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("signals.jsonl");
    flush_constant_signals(source.world_mut(), &path).unwrap();

    let saved = read_constant_signals(&path).unwrap();
    assert_eq!(saved.len(), 3);

    let mut target = build_test_app();
    let restored = restore_constant_signals(target.world_mut(), saved);
    assert_eq!(restored.len(), 3);

    for (original, restored) in [a, b, empty].into_iter().zip(restored) {
        assert_eq!(uid_of(&target, restored), uid_of(&source, original));
        assert_eq!(stored_signal(&target, restored), stored_signal(&source, original));
        assert_eq!(
            target
                .world()
                .resource::<UidMap>()
                .find_by_uid(uid_of(&source, original)),
            Some(restored)
        );
    }

    // Restored uids are reserved: new emitters continue after them
    let fresh = spawn_signal_emitter(target.world_mut(), None);
    assert_eq!(target.world().get::<EntityUid>(fresh).unwrap().0, 4);

    // Restored emitters publish on the next tick
    tick(&mut target);
    let pins = target
        .world()
        .get::<wired_signals::ecs::WiredPins>(restored_first(&target))
        .unwrap();
    assert_eq!(pins.slots[0].value, Some(SignalValue::FALSE));
}

fn restored_first(app: &bevy_app::App) -> bevy_ecs::entity::Entity {
    app.world().resource::<UidMap>().find_by_uid(1).unwrap()
}

#[test]
fn snapshot_restores_over_stripped_and_vanished_emitters() {
    let mut app = build_test_app();
    let stripped = spawn_signal_emitter(app.world_mut(), Some(SignalValue::TRUE));
    let vanished = spawn_signal_emitter(app.world_mut(), Some(SignalValue::Color(Color::Cyan)));
    let stripped_uid = uid_of(&app, stripped);
    let vanished_uid = uid_of(&app, vanished);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("signals.jsonl");
    flush_constant_signals(app.world_mut(), &path).unwrap();

    app.world_mut()
        .resource_mut::<Messages<SignalCommand>>()
        .write(SignalCommand::remove_store(stripped_uid));
    tick(&mut app);
    assert_eq!(stored_signal(&app, stripped), None);

    // Destroyed behind the map's back
    app.world_mut().entity_mut(vanished).despawn();

    let restored = restore_constant_signals(app.world_mut(), read_constant_signals(&path).unwrap());
    assert_eq!(restored.len(), 2);
    assert_eq!(restored[0], stripped);
    assert_eq!(stored_signal(&app, stripped), Some(SignalValue::TRUE));

    assert_ne!(restored[1], vanished);
    assert_eq!(uid_of(&app, restored[1]), vanished_uid);
    assert_eq!(
        stored_signal(&app, restored[1]),
        Some(SignalValue::Color(Color::Cyan))
    );
    assert_eq!(
        app.world().resource::<UidMap>().find_by_uid(vanished_uid),
        Some(restored[1])
    );
}

#[test]
fn empty_world_flushes_empty_file() {
    let mut app = build_test_app();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("signals.jsonl");

    flush_constant_signals(app.world_mut(), &path).unwrap();

    assert!(read_lines(&path).is_empty());
    assert!(read_constant_signals(&path).unwrap().is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_constant_signals(&dir.path().join("absent.jsonl")).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
