pub mod effect;
pub mod effects_manager;
pub mod params;
pub mod snapshot;

pub mod arc_lines;
pub mod building;
pub mod circle_path_lines;
pub mod coffee;
pub mod line_block;
pub mod squares;
pub mod sunflower;
pub mod tangent;
pub mod towers;

pub use effect::Effect;
pub use effects_manager::*;
pub use params::{Control, ParamValue};
pub use snapshot::{EffectKind, EffectSnapshot};

pub use arc_lines::ArcLines;
pub use building::Building;
pub use circle_path_lines::CirclePathLines;
pub use coffee::Coffee;
pub use line_block::LineBlock;
pub use squares::Squares;
pub use sunflower::Sunflower;
pub use tangent::Tangent;
pub use towers::Towers;
