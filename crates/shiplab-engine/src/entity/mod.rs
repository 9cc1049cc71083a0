//! Entities of the gameplay scene.
//!
//! Every entity wraps a [`GameObject`] body and is polymorphic over the
//! capability set {update, draw}. The set of variants is closed: [`Entity`]
//! dispatches on its tag. Variants add movement rules but keep the base
//! invariant that an inactive entity neither moves nor draws.

mod guard;
mod object;
mod player;

pub use guard::{ARRIVAL_RADIUS, Guard};
pub use object::{DEFAULT_ID, GameObject};
pub use player::Player;

use crate::render::Canvas;

/// Variant tag of an [`Entity`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EntityKind {
    Prop,
    Player,
    Guard,
}

/// A gameplay entity.
#[derive(Debug, Clone)]
pub enum Entity {
    /// Static scenery or anything driven purely by the base kinematics.
    Prop(GameObject),
    Player(Player),
    Guard(Guard),
}

impl Entity {
    #[inline]
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Prop(_) => EntityKind::Prop,
            Entity::Player(_) => EntityKind::Player,
            Entity::Guard(_) => EntityKind::Guard,
        }
    }

    #[inline]
    pub fn body(&self) -> &GameObject {
        match self {
            Entity::Prop(body) => body,
            Entity::Player(player) => player.body(),
            Entity::Guard(guard) => guard.body(),
        }
    }

    #[inline]
    pub fn body_mut(&mut self) -> &mut GameObject {
        match self {
            Entity::Prop(body) => body,
            Entity::Player(player) => player.body_mut(),
            Entity::Guard(guard) => guard.body_mut(),
        }
    }

    #[inline]
    pub fn id(&self) -> i32 {
        self.body().id()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.body().is_active()
    }

    pub fn update(&mut self, delta: f32) {
        match self {
            Entity::Prop(body) => body.update(delta),
            Entity::Player(player) => player.update(delta),
            Entity::Guard(guard) => guard.update(delta),
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        match self {
            Entity::Prop(body) => body.draw(canvas),
            Entity::Player(player) => player.draw(canvas),
            Entity::Guard(guard) => guard.draw(canvas),
        }
    }

    #[inline]
    pub fn dispose(&mut self) {
        self.body_mut().dispose();
    }

    pub fn as_player(&self) -> Option<&Player> {
        match self {
            Entity::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut Player> {
        match self {
            Entity::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn as_guard(&self) -> Option<&Guard> {
        match self {
            Entity::Guard(guard) => Some(guard),
            _ => None,
        }
    }
}

impl From<GameObject> for Entity {
    fn from(body: GameObject) -> Self {
        Entity::Prop(body)
    }
}

impl From<Player> for Entity {
    fn from(player: Player) -> Self {
        Entity::Player(player)
    }
}

impl From<Guard> for Entity {
    fn from(guard: Guard) -> Self {
        Entity::Guard(guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Texture;
    use crate::coords::Vec2;
    use crate::render::RecordingCanvas;
    use std::rc::Rc;

    fn body() -> GameObject {
        GameObject::alloc(Vec2::ZERO, Some(Rc::new(Texture::new("t", 1, 1)))).unwrap()
    }

    fn all_variants() -> Vec<Entity> {
        vec![
            Entity::from(body()),
            Entity::from(Player::new(body(), 2.0)),
            Entity::from(Guard::new(body(), vec![Vec2::new(3.0, 0.0)], 1.0)),
        ]
    }

    #[test]
    fn kinds_match_variants() {
        let kinds: Vec<_> = all_variants().iter().map(Entity::kind).collect();
        assert_eq!(kinds, [EntityKind::Prop, EntityKind::Player, EntityKind::Guard]);
    }

    #[test]
    fn every_variant_draws_once_when_active() {
        let mut canvas = RecordingCanvas::new();
        canvas.begin();
        for entity in all_variants() {
            entity.draw(&mut canvas);
        }
        canvas.end();
        assert_eq!(canvas.draw_count(), 3);
    }

    #[test]
    fn disposed_variants_are_inert() {
        let mut canvas = RecordingCanvas::new();
        canvas.begin();
        for mut entity in all_variants() {
            entity.body_mut().set_velocity(Vec2::new(1.0, 1.0));
            if let Some(player) = entity.as_player_mut() {
                player.set_steering(Vec2::new(1.0, 0.0));
            }
            entity.dispose();
            entity.update(1.0);
            entity.draw(&mut canvas);
            assert!(!entity.is_active());
            assert_eq!(entity.body().position(), Vec2::ZERO);
        }
        canvas.end();
        assert_eq!(canvas.draw_count(), 0);
    }
}
