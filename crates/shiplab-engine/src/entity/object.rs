use std::rc::Rc;

use crate::assets::TextureHandle;
use crate::coords::Vec2;
use crate::render::{Canvas, SpriteCmd};

/// Id given by [`GameObject::init`]. Owners assign real ids afterwards.
pub const DEFAULT_ID: i32 = 0;

/// A movable, renderable object.
///
/// This is the shared body of every entity in the gameplay scene. It owns the
/// spatial state and implements the base per-frame contract:
///
/// - `update` integrates motion with forward Euler, `position += velocity * delta`
/// - `draw` issues exactly one sprite draw of the renderable
/// - both are no-ops while the object is inactive
///
/// Lifecycle: constructed inactive at the origin, activated by [`init`], and
/// released by [`dispose`]. Dropping also releases the renderable handle.
///
/// [`init`]: GameObject::init
/// [`dispose`]: GameObject::dispose
#[derive(Debug, Clone)]
pub struct GameObject {
    position: Vec2,
    velocity: Vec2,
    /// Scale relative to the renderable's natural extent.
    size: Vec2,
    /// Radians, counter-clockwise about the origin of the object.
    angle: f32,
    active: bool,
    id: i32,
    renderable: Option<TextureHandle>,
}

impl GameObject {
    /// Creates an inactive object at the origin with no renderable.
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: Vec2::ONE,
            angle: 0.0,
            active: false,
            id: DEFAULT_ID,
            renderable: None,
        }
    }

    /// Places the object at `position`, attaches `renderable` and activates it.
    ///
    /// `renderable` may be `None`; the object then updates normally but never
    /// draws. No range checks are made on finite input. Returns `false` when
    /// `position` is not finite, since motion could not be integrated from it;
    /// the object is left untouched in that case.
    pub fn init(&mut self, position: Vec2, renderable: Option<TextureHandle>) -> bool {
        if !position.is_finite() {
            return false;
        }
        self.position = position;
        self.renderable = renderable;
        self.id = DEFAULT_ID;
        self.active = true;
        true
    }

    /// Returns a newly initialized object, or `None` if [`init`](Self::init) fails.
    pub fn alloc(position: Vec2, renderable: Option<TextureHandle>) -> Option<Self> {
        let mut object = Self::new();
        object.init(position, renderable).then_some(object)
    }

    /// Releases the renderable handle and deactivates the object.
    ///
    /// Idempotent, and safe on an object that was never initialized.
    pub fn dispose(&mut self) {
        self.renderable = None;
        self.active = false;
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    #[inline]
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Uniqueness within a collection is the owner's responsibility.
    #[inline]
    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    #[inline]
    pub fn renderable(&self) -> Option<&TextureHandle> {
        self.renderable.as_ref()
    }

    /// Replaces the renderable handle, returning the previous one.
    pub fn set_renderable(&mut self, renderable: Option<TextureHandle>) -> Option<TextureHandle> {
        std::mem::replace(&mut self.renderable, renderable)
    }

    // ── per-frame ─────────────────────────────────────────────────────────

    /// Advances position by one explicit Euler step.
    pub fn update(&mut self, delta: f32) {
        if !self.active {
            return;
        }
        self.position += self.velocity * delta;
    }

    /// Draws the renderable at the current position, angle and size.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if !self.active {
            return;
        }
        let Some(texture) = self.renderable.as_deref() else {
            return;
        };
        canvas.draw(&SpriteCmd {
            texture,
            position: self.position,
            angle: self.angle,
            size: self.size,
        });
    }

    /// True if both objects hold the same renderable allocation.
    pub fn shares_renderable(&self, other: &GameObject) -> bool {
        match (&self.renderable, &other.renderable) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Default for GameObject {
    fn default() -> Self {
        Self::new()
    }
}
