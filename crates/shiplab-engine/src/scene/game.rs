use crate::assets::AssetRegistry;
use crate::coords::Vec2;
use crate::entity::{Entity, GameObject, Guard, Player};
use crate::render::Canvas;

/// A guard placed in the world at gameplay start.
#[derive(Debug, Clone)]
pub struct GuardSpawn {
    pub start: Vec2,
    pub route: Vec<Vec2>,
    pub speed: f32,
}

/// A static prop placed in the world at gameplay start.
#[derive(Debug, Clone)]
pub struct PropSpawn {
    pub texture: String,
    pub position: Vec2,
    pub angle: f32,
}

/// Initial gameplay content.
#[derive(Debug, Clone)]
pub struct WorldConfig {
    pub player_texture: String,
    pub player_start: Vec2,
    pub player_speed: f32,
    pub guard_texture: String,
    pub guards: Vec<GuardSpawn>,
    pub props: Vec<PropSpawn>,
}

impl WorldConfig {
    /// Every texture key the world refers to, without duplicates.
    pub fn asset_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        let guards = (!self.guards.is_empty()).then_some(&self.guard_texture);
        let props = self.props.iter().map(|p| &p.texture);

        for key in std::iter::once(&self.player_texture).chain(guards).chain(props) {
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
        keys
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            player_texture: "ship".to_string(),
            player_start: Vec2::ZERO,
            player_speed: 6.0,
            guard_texture: "guard".to_string(),
            guards: vec![
                GuardSpawn {
                    start: Vec2::new(-10.0, 5.0),
                    route: vec![Vec2::new(10.0, 5.0), Vec2::new(-10.0, 5.0)],
                    speed: 2.0,
                },
                GuardSpawn {
                    start: Vec2::new(8.0, -6.0),
                    route: vec![
                        Vec2::new(8.0, 6.0),
                        Vec2::new(-8.0, 6.0),
                        Vec2::new(-8.0, -6.0),
                        Vec2::new(8.0, -6.0),
                    ],
                    speed: 3.0,
                },
            ],
            props: vec![PropSpawn {
                texture: "crate".to_string(),
                position: Vec2::new(3.0, 2.0),
                angle: 0.0,
            }],
        }
    }
}

/// Gameplay phase: owns the world's entities and runs them every frame.
///
/// Ids are handed out sequentially from 1 and are unique within the scene.
#[derive(Debug, Default)]
pub struct GameScene {
    entities: Vec<Entity>,
    next_id: i32,
    player_id: Option<i32>,
}

impl GameScene {
    /// Builds the world described by `world`, taking renderables from `assets`.
    ///
    /// Missing textures yield entities that move but never draw.
    pub fn new(world: &WorldConfig, assets: &AssetRegistry) -> Self {
        let mut scene = Self {
            entities: Vec::new(),
            next_id: 1,
            player_id: None,
        };

        match GameObject::alloc(world.player_start, assets.get(&world.player_texture)) {
            Some(body) => {
                let id = scene.spawn(Player::new(body, world.player_speed));
                scene.player_id = Some(id);
            }
            None => log::warn!("player could not be placed at {:?}", world.player_start),
        }

        for spawn in &world.guards {
            let Some(body) = GameObject::alloc(spawn.start, assets.get(&world.guard_texture)) else {
                log::warn!("skipping guard at {:?}", spawn.start);
                continue;
            };
            scene.spawn(Guard::new(body, spawn.route.clone(), spawn.speed));
        }

        for spawn in &world.props {
            let texture = assets.get(&spawn.texture);
            let Some(mut body) = GameObject::alloc(spawn.position, texture) else {
                log::warn!("skipping prop '{}' at {:?}", spawn.texture, spawn.position);
                continue;
            };
            body.set_angle(spawn.angle);
            scene.spawn(body);
        }

        log::debug!("game scene built with {} entities", scene.entities.len());
        scene
    }

    /// Adds an entity, assigning it the next free id. Returns that id.
    pub fn spawn(&mut self, entity: impl Into<Entity>) -> i32 {
        let mut entity = entity.into();
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        entity.body_mut().set_id(id);
        self.entities.push(entity);
        id
    }

    /// Disposes and removes the entity with `id`. Returns whether it existed.
    pub fn remove(&mut self, id: i32) -> bool {
        let Some(index) = self.entities.iter().position(|e| e.id() == id) else {
            return false;
        };
        let mut entity = self.entities.remove(index);
        entity.dispose();
        if self.player_id == Some(id) {
            self.player_id = None;
        }
        true
    }

    pub fn get(&self, id: i32) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: i32) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    #[inline]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn player(&self) -> Option<&Player> {
        self.get(self.player_id?)?.as_player()
    }

    pub fn player_mut(&mut self) -> Option<&mut Player> {
        let id = self.player_id?;
        self.get_mut(id)?.as_player_mut()
    }

    pub fn update(&mut self, delta: f32) {
        for entity in &mut self.entities {
            entity.update(delta);
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for entity in &self.entities {
            entity.draw(canvas);
        }
    }

    /// Disposes every entity and empties the scene. Idempotent.
    pub fn dispose(&mut self) {
        for entity in &mut self.entities {
            entity.dispose();
        }
        self.entities.clear();
        self.player_id = None;
    }
}
