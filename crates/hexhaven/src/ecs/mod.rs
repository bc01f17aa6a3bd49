//! # Entity/Component Store
//!
//! A deliberately small ECS specialized for a closed component set. The
//! design borrows the shape of archetype ECSes (hecs, bevy_ecs) but skips
//! type erasure entirely: components are a tagged enum, entities carry a
//! fixed-size slot array, and queries are tag-set membership checks.
//!
//! - [`entity`] — monotonic entity ids
//! - [`world`] — central container (entities + component slots + schedule)
//! - [`system`] — system trait and ordered schedule runner

pub mod entity;
pub mod system;
pub mod world;

pub use entity::Entity;
pub use system::{Schedule, System};
pub use world::World;
