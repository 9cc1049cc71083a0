use crate::coords::Vec2;
use crate::render::Canvas;

use super::object::GameObject;

/// Distance at which a guard counts as having reached its waypoint.
pub const ARRIVAL_RADIUS: f32 = 1e-3;

/// A guard walking a closed patrol route.
///
/// Each update points the velocity at the current waypoint, capped so the
/// step never overshoots it, then integrates. Reaching a waypoint advances to
/// the next one, wrapping at the end of the route. A guard with an empty
/// route just drifts with whatever velocity it has.
#[derive(Debug, Clone)]
pub struct Guard {
    body: GameObject,
    route: Vec<Vec2>,
    target: usize,
    speed: f32,
}

impl Guard {
    pub fn new(body: GameObject, route: Vec<Vec2>, speed: f32) -> Self {
        Self {
            body,
            route,
            target: 0,
            speed,
        }
    }

    #[inline]
    pub fn body(&self) -> &GameObject {
        &self.body
    }

    #[inline]
    pub fn body_mut(&mut self) -> &mut GameObject {
        &mut self.body
    }

    #[inline]
    pub fn route(&self) -> &[Vec2] {
        &self.route
    }

    /// Waypoint currently walked toward.
    pub fn target(&self) -> Option<Vec2> {
        self.route.get(self.target).copied()
    }

    pub fn update(&mut self, delta: f32) {
        if !self.body.is_active() {
            return;
        }

        if let Some(goal) = self.target() {
            let mut to_goal = goal - self.body.position();
            if to_goal.length() <= ARRIVAL_RADIUS {
                self.target = (self.target + 1) % self.route.len();
                to_goal = self.route[self.target] - self.body.position();
            }

            let distance = to_goal.length();
            let mut speed = self.speed;
            if delta > 0.0 {
                speed = speed.min(distance / delta);
            }

            let velocity = to_goal.normalized_or_zero() * speed;
            self.body.set_velocity(velocity);
            if velocity != Vec2::ZERO {
                self.body.set_angle(velocity.angle());
            }
        }

        self.body.update(delta);
    }

    #[inline]
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.body.draw(canvas);
    }
}
