// src/effects/effects_manager.rs
//
// Holds one snapshot per effect and composes them onto a shared canvas.

use log::{debug, error};
use nannou::prelude::Vec2;

use super::params::{Control, ParamValue};
use super::snapshot::{EffectKind, EffectSnapshot};
use crate::draw::DrawCommand;
use crate::error::EffectResult;

/// An edit coming from a control surface.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectCommand {
    Show { kind: EffectKind, show: bool },
    Toggle(EffectKind),
    Seed { kind: EffectKind, seed: i32 },
    Param {
        kind: EffectKind,
        key: String,
        value: ParamValue,
    },
    Replace(EffectSnapshot),
}

pub struct EffectsManager {
    // always one entry per kind, in registration order
    effects: Vec<EffectSnapshot>,
}

impl Default for EffectsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectsManager {
    /// Every effect at its defaults; only the first one is shown.
    pub fn new() -> Self {
        let effects = EffectKind::all()
            .into_iter()
            .map(|kind| {
                let snapshot = kind.default_snapshot();
                snapshot.with_show(kind == EffectKind::ArcLines)
            })
            .collect();
        Self { effects }
    }

    fn index(kind: EffectKind) -> usize {
        EffectKind::all()
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default()
    }

    pub fn get(&self, kind: EffectKind) -> &EffectSnapshot {
        &self.effects[Self::index(kind)]
    }

    pub fn snapshots(&self) -> &[EffectSnapshot] {
        &self.effects
    }

    /// Swap in a complete replacement for the snapshot of the same kind.
    pub fn replace(&mut self, snapshot: EffectSnapshot) -> EffectResult<()> {
        snapshot.validate()?;
        debug!("replacing {} snapshot", snapshot.kind());
        let index = Self::index(snapshot.kind());
        self.effects[index] = snapshot;
        Ok(())
    }

    pub fn toggle(&mut self, kind: EffectKind) {
        let index = Self::index(kind);
        let show = !self.effects[index].show();
        debug!("{} show -> {}", kind, show);
        self.effects[index] = self.effects[index].with_show(show);
    }

    pub fn set_param(&mut self, kind: EffectKind, key: &str, value: ParamValue) -> EffectResult<()> {
        let index = Self::index(kind);
        let next = self.effects[index].with_param(key, value)?;
        debug!("{}.{} = {:?}", kind, key, value);
        self.effects[index] = next;
        Ok(())
    }

    /// Apply one edit. A rejected edit leaves the current snapshot untouched.
    pub fn apply(&mut self, command: EffectCommand) -> EffectResult<()> {
        match command {
            EffectCommand::Show { kind, show } => self.set_param(kind, "show", ParamValue::Bool(show)),
            EffectCommand::Toggle(kind) => {
                self.toggle(kind);
                Ok(())
            }
            EffectCommand::Seed { kind, seed } => self.set_param(kind, "seed", ParamValue::Int(seed as i64)),
            EffectCommand::Param { kind, key, value } => self.set_param(kind, &key, value),
            EffectCommand::Replace(snapshot) => self.replace(snapshot),
        }
    }

    /// Render every effect in registration order onto one command list.
    /// An effect that fails is logged and left out; the rest still draw.
    pub fn render(&self, size: Vec2) -> Vec<DrawCommand> {
        let mut commands = Vec::new();
        for snapshot in &self.effects {
            match snapshot.render(size) {
                Ok(effect_commands) => commands.extend(effect_commands),
                Err(e) => error!("{} failed to render: {}", snapshot.name(), e),
            }
        }
        commands
    }

    pub fn settings(&self, kind: EffectKind) -> Vec<Control> {
        self.get(kind).settings()
    }
}
