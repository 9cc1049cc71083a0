use crate::coords::Vec2;
use crate::render::Canvas;

use super::object::GameObject;

/// The player's ship.
///
/// Input handling lives outside the engine; it feeds a steering intent through
/// [`set_steering`](Player::set_steering). Each update turns the intent into a
/// velocity and faces the ship along its heading while it moves.
#[derive(Debug, Clone)]
pub struct Player {
    body: GameObject,
    steering: Vec2,
    speed: f32,
}

impl Player {
    pub fn new(body: GameObject, speed: f32) -> Self {
        Self {
            body,
            steering: Vec2::ZERO,
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
    pub fn steering(&self) -> Vec2 {
        self.steering
    }

    /// Direction intent. Only the direction matters; magnitude is normalized away.
    #[inline]
    pub fn set_steering(&mut self, steering: Vec2) {
        self.steering = steering;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn update(&mut self, delta: f32) {
        if !self.body.is_active() {
            return;
        }

        let velocity = self.steering.normalized_or_zero() * self.speed;
        self.body.set_velocity(velocity);
        if velocity != Vec2::ZERO {
            self.body.set_angle(velocity.angle());
        }

        self.body.update(delta);
    }

    #[inline]
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.body.draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn player(speed: f32) -> Player {
        Player::new(GameObject::alloc(Vec2::ZERO, None).unwrap(), speed)
    }

    #[test]
    fn no_steering_holds_position() {
        let mut p = player(5.0);
        p.body_mut().set_angle(0.3);
        p.update(1.0);
        assert_eq!(p.body().position(), Vec2::ZERO);
        assert_eq!(p.body().angle(), 0.3);
    }

    #[test]
    fn steering_moves_at_speed() {
        let mut p = player(4.0);
        p.set_steering(Vec2::new(10.0, 0.0));
        assert_eq!(p.steering(), Vec2::new(10.0, 0.0));
        p.update(0.5);
        assert_relative_eq!(p.body().position().x, 2.0);
        assert_relative_eq!(p.body().velocity().length(), 4.0);
    }

    #[test]
    fn faces_heading() {
        let mut p = player(1.0);
        p.set_steering(Vec2::new(0.0, -1.0));
        p.update(0.1);
        assert_relative_eq!(p.body().angle(), -core::f32::consts::FRAC_PI_2);
    }

    #[test]
    fn inactive_player_ignores_steering() {
        let mut p = player(1.0);
        p.body_mut().dispose();
        p.set_steering(Vec2::new(1.0, 1.0));
        p.update(1.0);
        assert_eq!(p.body().position(), Vec2::ZERO);
        assert_eq!(p.body().velocity(), Vec2::ZERO);
    }
}
