//! Constant signal system.
//!
//! One tick-driven system (Update phase):
//! 1. `publish_constant_signals` — copy each store's signal into pin slot 0
//!
//! Three chained input systems (Input phase):
//! 2. `query_signal_value` — open a signal dialog for each placed emitter
//! 3. `apply_dialog_input` — mirror host typing into the dialog field
//! 4. `resolve_signal_dialogs` — close dialogs on cancel/ok, queue assignments
//!
//! Confirmed values reach the store through `SignalCommand`s, committed by the
//! applicator in PostUpdate after re-resolving the target uid.

use bevy_app::{App, Plugin};
use bevy_ecs::message::{MessageReader, MessageWriter};
use bevy_ecs::query::With;
use bevy_ecs::resource::Resource;
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::schedule::common_conditions::resource_exists;
use bevy_ecs::system::{Query, Res, ResMut};
use bevy_ecs::world::World;

use crate::ecs::commands::SignalCommand;
use crate::ecs::components::{ConstantSignal, EntityUid, WiredPins};
use crate::ecs::dialog::{
    DialogButtonKind, DialogContinuation, DialogStack, FormInput, ModalDialog,
};
use crate::ecs::events::{DialogButtonPressed, DialogInputChanged, EntityManuallyPlaced};
use crate::ecs::resources::SignalConfig;
use crate::ecs::schedule::{SimPhase, SimTick};
use crate::model::is_valid_signal_code;

/// Id of the text field in the signal dialog.
pub const SIGNAL_INPUT_ID: &str = "signalValue";

/// Present while the constant signal system listens to placement notifications.
#[derive(Resource, Debug, Default)]
pub struct PlacementSubscription;

// ---------------------------------------------------------------------------
// Plugin registration
// ---------------------------------------------------------------------------

pub struct ConstantSignalPlugin;

impl Plugin for ConstantSignalPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PlacementSubscription);
        app.add_systems(
            SimTick,
            (
                query_signal_value.run_if(resource_exists::<PlacementSubscription>),
                apply_dialog_input,
                resolve_signal_dialogs,
            )
                .chain()
                .in_set(SimPhase::Input),
        );
        app.add_systems(SimTick, publish_constant_signals.in_set(SimPhase::Update));
    }
}

/// Stop listening to placements. Dialogs still open can be dismissed, but
/// confirming them no longer assigns anything.
pub fn teardown_constant_signals(world: &mut World) {
    if world.remove_resource::<PlacementSubscription>().is_some() {
        tracing::debug!("constant signal placement subscription removed");
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Write every store's signal, `None` included, into slot 0 of its pins.
///
/// Panics if an emitter has no pin slots.
pub fn publish_constant_signals(mut emitters: Query<(&ConstantSignal, &mut WiredPins)>) {
    for (store, mut pins) in &mut emitters {
        pins.slots[0].value = store.signal.clone();
    }
}

fn query_signal_value(
    mut placed: MessageReader<EntityManuallyPlaced>,
    emitters: Query<&EntityUid, With<ConstantSignal>>,
    stores: Query<(), With<ConstantSignal>>,
    config: Res<SignalConfig>,
    mut dialogs: ResMut<DialogStack>,
) {
    for event in placed.read() {
        // Only the uid survives past this point; the entity may be gone by confirmation
        let Ok(uid) = emitters.get(event.entity) else {
            if stores.contains(event.entity) {
                tracing::warn!(entity = ?event.entity, "placed emitter has no uid");
            }
            continue;
        };

        let input = FormInput::new(SIGNAL_INPUT_ID, is_valid_signal_code)
            .with_placeholder(config.input_placeholder.clone());
        let dialog = ModalDialog::new(
            config.dialog_title.clone(),
            config.dialog_description.clone(),
            input,
            DialogContinuation::AssignConstantSignal { uid: uid.0 },
        );
        let id = dialogs.show(dialog);
        tracing::debug!(uid = uid.0, dialog = id.0, "signal dialog opened");
    }
}

fn apply_dialog_input(
    mut changes: MessageReader<DialogInputChanged>,
    mut dialogs: ResMut<DialogStack>,
) {
    for change in changes.read() {
        if let Some(dialog) = dialogs.get_mut(change.dialog) {
            dialog.input.set_value(change.text.clone());
        }
    }
}

fn resolve_signal_dialogs(
    mut presses: MessageReader<DialogButtonPressed>,
    mut dialogs: ResMut<DialogStack>,
    subscription: Option<Res<PlacementSubscription>>,
    mut commands: MessageWriter<SignalCommand>,
) {
    for press in presses.read() {
        let Some(dialog) = dialogs.get(press.dialog) else {
            continue;
        };
        // A disabled button does nothing; the dialog stays open
        if !dialog.is_button_enabled(press.button) {
            continue;
        }
        let Some(dialog) = dialogs.close(press.dialog) else {
            continue;
        };

        match press.button {
            DialogButtonKind::Cancel => {
                tracing::debug!(dialog = dialog.id.0, "signal dialog cancelled");
            }
            DialogButtonKind::Ok if subscription.is_none() => {
                tracing::debug!(dialog = dialog.id.0, "signal dialog abandoned");
            }
            DialogButtonKind::Ok => match dialog.on_confirm {
                DialogContinuation::AssignConstantSignal { uid } => {
                    commands.write(SignalCommand::assign(uid, dialog.input.value()));
                }
            },
        }
    }
}
