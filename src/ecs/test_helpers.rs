use bevy_app::App;
use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;

use crate::ecs::components::EntityUid;
use crate::ecs::dialog::{DialogButtonKind, DialogContinuation, DialogId, DialogStack};
use crate::ecs::events::{DialogButtonPressed, DialogInputChanged};
use crate::ecs::schedule::SimTick;

/// Run one simulation tick.
pub fn tick(app: &mut App) {
    app.world_mut().run_schedule(SimTick);
}

/// Run `n` simulation ticks.
pub fn tick_n(app: &mut App, n: u32) {
    for _ in 0..n {
        tick(app);
    }
}

/// The open signal dialog targeting `entity`, if any.
pub fn open_dialog_for(app: &App, entity: Entity) -> Option<DialogId> {
    let uid = app.world().get::<EntityUid>(entity)?.0;
    app.world()
        .resource::<DialogStack>()
        .iter()
        .find(|d| d.on_confirm == DialogContinuation::AssignConstantSignal { uid })
        .map(|d| d.id)
}

/// Simulate typing: replace the dialog's input text.
pub fn type_text(app: &mut App, dialog: DialogId, text: &str) {
    app.world_mut()
        .resource_mut::<Messages<DialogInputChanged>>()
        .write(DialogInputChanged {
            dialog,
            text: text.to_string(),
        });
}

/// Simulate pressing "ok".
pub fn confirm(app: &mut App, dialog: DialogId) {
    press(app, dialog, DialogButtonKind::Ok);
}

/// Simulate pressing "cancel".
pub fn cancel(app: &mut App, dialog: DialogId) {
    press(app, dialog, DialogButtonKind::Cancel);
}

fn press(app: &mut App, dialog: DialogId, button: DialogButtonKind) {
    app.world_mut()
        .resource_mut::<Messages<DialogButtonPressed>>()
        .write(DialogButtonPressed { dialog, button });
}
