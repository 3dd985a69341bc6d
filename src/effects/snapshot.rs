// src/effects/snapshot.rs
//
// One enum over every effect, so the rest of the app can hold, edit and
// render effects without knowing which variant it has.

use nannou::prelude::Vec2;
use std::fmt;
use std::str::FromStr;

use super::effect::Effect;
use super::params::{Control, ParamValue};
use super::{
    ArcLines, Building, CirclePathLines, Coffee, LineBlock, Squares, Sunflower, Tangent, Towers,
};
use crate::draw::DrawCommand;
use crate::error::{EffectError, EffectResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    ArcLines,
    CirclePathLines,
    Building,
    Coffee,
    LineBlock,
    Tangent,
    Towers,
    Sunflower,
    Squares,
}

impl EffectKind {
    /// Every kind, in registration order.
    pub fn all() -> [EffectKind; 9] {
        [
            EffectKind::ArcLines,
            EffectKind::CirclePathLines,
            EffectKind::Building,
            EffectKind::Coffee,
            EffectKind::LineBlock,
            EffectKind::Tangent,
            EffectKind::Towers,
            EffectKind::Sunflower,
            EffectKind::Squares,
        ]
    }

    /// The snake_case name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectKind::ArcLines => "arc_lines",
            EffectKind::CirclePathLines => "circle_path_lines",
            EffectKind::Building => "building",
            EffectKind::Coffee => "coffee",
            EffectKind::LineBlock => "line_block",
            EffectKind::Tangent => "tangent",
            EffectKind::Towers => "towers",
            EffectKind::Sunflower => "sunflower",
            EffectKind::Squares => "squares",
        }
    }

    pub fn default_snapshot(&self) -> EffectSnapshot {
        match self {
            EffectKind::ArcLines => EffectSnapshot::ArcLines(ArcLines::default()),
            EffectKind::CirclePathLines => EffectSnapshot::CirclePathLines(CirclePathLines::default()),
            EffectKind::Building => EffectSnapshot::Building(Building::default()),
            EffectKind::Coffee => EffectSnapshot::Coffee(Coffee::default()),
            EffectKind::LineBlock => EffectSnapshot::LineBlock(LineBlock::default()),
            EffectKind::Tangent => EffectSnapshot::Tangent(Tangent::default()),
            EffectKind::Towers => EffectSnapshot::Towers(Towers::default()),
            EffectKind::Sunflower => EffectSnapshot::Sunflower(Sunflower::default()),
            EffectKind::Squares => EffectSnapshot::Squares(Squares::default()),
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectKind {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EffectKind::all()
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EffectError::UnknownEffect(s.to_string()))
    }
}

/// A complete, immutable parameter set for one effect.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectSnapshot {
    ArcLines(ArcLines),
    CirclePathLines(CirclePathLines),
    Building(Building),
    Coffee(Coffee),
    LineBlock(LineBlock),
    Tangent(Tangent),
    Towers(Towers),
    Sunflower(Sunflower),
    Squares(Squares),
}

// Runs `$body` with `$effect` bound to the wrapped variant.
macro_rules! with_effect {
    ($snapshot:expr, $effect:ident => $body:expr) => {
        match $snapshot {
            EffectSnapshot::ArcLines($effect) => $body,
            EffectSnapshot::CirclePathLines($effect) => $body,
            EffectSnapshot::Building($effect) => $body,
            EffectSnapshot::Coffee($effect) => $body,
            EffectSnapshot::LineBlock($effect) => $body,
            EffectSnapshot::Tangent($effect) => $body,
            EffectSnapshot::Towers($effect) => $body,
            EffectSnapshot::Sunflower($effect) => $body,
            EffectSnapshot::Squares($effect) => $body,
        }
    };
}

// Like `with_effect!`, but rewraps the result in the same variant.
macro_rules! map_effect {
    ($snapshot:expr, $effect:ident => $body:expr) => {
        match $snapshot {
            EffectSnapshot::ArcLines($effect) => EffectSnapshot::ArcLines($body),
            EffectSnapshot::CirclePathLines($effect) => EffectSnapshot::CirclePathLines($body),
            EffectSnapshot::Building($effect) => EffectSnapshot::Building($body),
            EffectSnapshot::Coffee($effect) => EffectSnapshot::Coffee($body),
            EffectSnapshot::LineBlock($effect) => EffectSnapshot::LineBlock($body),
            EffectSnapshot::Tangent($effect) => EffectSnapshot::Tangent($body),
            EffectSnapshot::Towers($effect) => EffectSnapshot::Towers($body),
            EffectSnapshot::Sunflower($effect) => EffectSnapshot::Sunflower($body),
            EffectSnapshot::Squares($effect) => EffectSnapshot::Squares($body),
        }
    };
}

impl EffectSnapshot {
    pub fn kind(&self) -> EffectKind {
        match self {
            EffectSnapshot::ArcLines(_) => EffectKind::ArcLines,
            EffectSnapshot::CirclePathLines(_) => EffectKind::CirclePathLines,
            EffectSnapshot::Building(_) => EffectKind::Building,
            EffectSnapshot::Coffee(_) => EffectKind::Coffee,
            EffectSnapshot::LineBlock(_) => EffectKind::LineBlock,
            EffectSnapshot::Tangent(_) => EffectKind::Tangent,
            EffectSnapshot::Towers(_) => EffectKind::Towers,
            EffectSnapshot::Sunflower(_) => EffectKind::Sunflower,
            EffectSnapshot::Squares(_) => EffectKind::Squares,
        }
    }

    pub fn as_effect(&self) -> &dyn Effect {
        with_effect!(self, effect => effect as &dyn Effect)
    }

    pub fn name(&self) -> &'static str {
        self.as_effect().name()
    }

    pub fn show(&self) -> bool {
        self.as_effect().show()
    }

    pub fn seed(&self) -> i32 {
        self.as_effect().seed()
    }

    pub fn with_show(&self, show: bool) -> Self {
        map_effect!(self, effect => effect.with_show(show))
    }

    pub fn with_param(&self, key: &str, value: ParamValue) -> EffectResult<Self> {
        Ok(map_effect!(self, effect => effect.with_param(key, value)?))
    }

    pub fn validate(&self) -> EffectResult<()> {
        self.as_effect().validate()
    }

    pub fn render(&self, size: Vec2) -> EffectResult<Vec<DrawCommand>> {
        self.as_effect().render(size)
    }

    pub fn settings(&self) -> Vec<Control> {
        self.as_effect().settings()
    }

    /// Parse a complete snapshot of the given kind. Every field is required.
    pub fn from_json(kind: EffectKind, json: &str) -> EffectResult<Self> {
        let snapshot = match kind {
            EffectKind::ArcLines => EffectSnapshot::ArcLines(serde_json::from_str(json)?),
            EffectKind::CirclePathLines => EffectSnapshot::CirclePathLines(serde_json::from_str(json)?),
            EffectKind::Building => EffectSnapshot::Building(serde_json::from_str(json)?),
            EffectKind::Coffee => EffectSnapshot::Coffee(serde_json::from_str(json)?),
            EffectKind::LineBlock => EffectSnapshot::LineBlock(serde_json::from_str(json)?),
            EffectKind::Tangent => EffectSnapshot::Tangent(serde_json::from_str(json)?),
            EffectKind::Towers => EffectSnapshot::Towers(serde_json::from_str(json)?),
            EffectKind::Sunflower => EffectSnapshot::Sunflower(serde_json::from_str(json)?),
            EffectKind::Squares => EffectSnapshot::Squares(serde_json::from_str(json)?),
        };
        Ok(snapshot)
    }

    pub fn to_json(&self) -> EffectResult<String> {
        Ok(with_effect!(self, effect => serde_json::to_string(effect)?))
    }
}
