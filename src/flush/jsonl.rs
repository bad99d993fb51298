use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use serde::{Deserialize, Serialize};

use crate::ecs::components::{ConstantSignal, EntityUid};
use crate::ecs::resources::UidMap;
use crate::ecs::spawn::spawn_signal_emitter_with_uid;

/// One line of a signal snapshot: the entity uid plus its saved store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedConstantSignal {
    pub uid: u64,
    #[serde(flatten)]
    pub store: ConstantSignal,
}

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Write every entity carrying both `EntityUid` and `ConstantSignal` to `path`,
/// ordered by uid. Creates the parent directory if needed.
pub fn flush_constant_signals(world: &mut World, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut query = world.query::<(&EntityUid, &ConstantSignal)>();
    let mut saved: Vec<SavedConstantSignal> = query
        .iter(world)
        .map(|(uid, store)| SavedConstantSignal {
            uid: uid.0,
            store: store.clone(),
        })
        .collect();
    saved.sort_by_key(|s| s.uid);

    tracing::debug!(count = saved.len(), path = %path.display(), "flushing constant signals");
    write_jsonl(path, saved.into_iter())
}

/// Read a snapshot written by `flush_constant_signals`. Blank lines are skipped.
pub fn read_constant_signals(path: &Path) -> io::Result<Vec<SavedConstantSignal>> {
    let reader = BufReader::new(File::open(path)?);
    let mut saved = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        saved.push(serde_json::from_str(&line)?);
    }
    Ok(saved)
}

/// Apply saved stores to the world.
///
/// A uid that resolves to a live entity gets the saved store, replacing any
/// store it still has. A uid mapped to a despawned entity is unmapped first,
/// and every unresolved uid gets a fresh emitter. Returns the touched entities
/// in record order.
pub fn restore_constant_signals(world: &mut World, saved: Vec<SavedConstantSignal>) -> Vec<Entity> {
    saved
        .into_iter()
        .map(|record| {
            if let Some(entity) = resolve_for_restore(world, record.uid) {
                world.entity_mut(entity).insert(record.store);
                return entity;
            }
            spawn_signal_emitter_with_uid(world, record.uid, record.store.signal)
        })
        .collect()
}

fn resolve_for_restore(world: &mut World, uid: u64) -> Option<Entity> {
    let entity = world.get_resource::<UidMap>()?.find_by_uid(uid)?;
    if world.get_entity(entity).is_ok() {
        return Some(entity);
    }
    tracing::debug!(uid, "restored uid was mapped to a despawned entity");
    world.resource_mut::<UidMap>().remove_by_uid(uid);
    None
}
