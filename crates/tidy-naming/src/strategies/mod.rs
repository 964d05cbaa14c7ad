//! Built-in naming strategies

mod basic;
mod boolean;
mod component;
mod fallback;
mod frame;
mod instance;
mod shape;
mod text;

pub use basic::{BasicShapeStrategy, BASIC_SHAPE_CATEGORIES};
pub use boolean::BooleanOperationStrategy;
pub use component::ComponentStrategy;
pub use fallback::FallbackStrategy;
pub use frame::{FrameKind, FrameNamingStrategy};
pub use instance::{InstanceNamingStrategy, InstanceState};
pub use shape::ShapeNamingStrategy;
pub use text::TextStrategy;
