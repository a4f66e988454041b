//! Entity store: sole owner of every live entity in the current level.
//!
//! Wraps a hecs `World` and hands out sequential `EntityId`s. Spawn
//! factories live here so every entity gets the same component bundle.

use hecs::{Entity, World};

use skyshield_core::components::*;
use skyshield_core::enums::*;
use skyshield_core::types::{EntityId, Position, Velocity};

/// A structure a rocket can be aimed at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRef {
    pub kind: TargetKind,
    pub id: EntityId,
    pub position: Position,
}

/// Owns the hecs world for one level.
pub struct EntityStore {
    world: World,
    next_id: u32,
    despawn_buffer: Vec<Entity>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            next_id: 0,
            despawn_buffer: Vec::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Split borrow used by cleanup: the world plus the reusable despawn buffer.
    pub(crate) fn world_and_buffer(&mut self) -> (&mut World, &mut Vec<Entity>) {
        (&mut self.world, &mut self.despawn_buffer)
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    // --- Spawn factories ---

    pub fn spawn_rocket(
        &mut self,
        position: Position,
        target: TargetRef,
        speed: f64,
    ) -> EntityId {
        let id = self.allocate_id();
        self.world.spawn((
            id,
            position,
            Rocket {
                target: target.position,
                target_kind: target.kind,
                target_id: target.id,
                speed,
                destroyed: false,
            },
        ));
        id
    }

    pub fn spawn_interceptor(
        &mut self,
        origin: Position,
        target: Position,
        velocity: Velocity,
        battery_id: EntityId,
    ) -> EntityId {
        let id = self.allocate_id();
        self.world.spawn((
            id,
            origin,
            velocity,
            Interceptor {
                origin,
                target,
                battery_id,
                exploded: false,
            },
        ));
        id
    }

    pub fn spawn_explosion(
        &mut self,
        position: Position,
        initial_radius: f64,
        max_radius: f64,
        growth_rate: f64,
        source: BlastSource,
    ) -> EntityId {
        let id = self.allocate_id();
        self.world.spawn((
            id,
            position,
            Explosion {
                radius: initial_radius.min(max_radius),
                max_radius,
                growth_rate,
                phase: ExplosionPhase::Growing,
                source,
            },
        ));
        id
    }

    pub fn spawn_battery(&mut self, position: Position, ammo: u32, max_health: u32) -> EntityId {
        let id = self.allocate_id();
        self.world.spawn((
            id,
            position,
            Battery {
                ammo,
                max_ammo: ammo,
                health: max_health,
                max_health,
                destroyed: false,
            },
        ));
        id
    }

    pub fn spawn_city(&mut self, position: Position) -> EntityId {
        let id = self.allocate_id();
        self.world.spawn((id, position, City::default()));
        id
    }

    // --- Read-mostly queries ---

    /// Every city and battery still standing, ordered by id.
    pub fn live_targets(&self) -> Vec<TargetRef> {
        let mut targets: Vec<TargetRef> = Vec::new();

        for (_entity, (id, pos, city)) in self.world.query::<(&EntityId, &Position, &City)>().iter()
        {
            if !city.destroyed {
                targets.push(TargetRef {
                    kind: TargetKind::City,
                    id: *id,
                    position: *pos,
                });
            }
        }

        for (_entity, (id, pos, battery)) in
            self.world.query::<(&EntityId, &Position, &Battery)>().iter()
        {
            if !battery.destroyed {
                targets.push(TargetRef {
                    kind: TargetKind::Battery,
                    id: *id,
                    position: *pos,
                });
            }
        }

        targets.sort_by_key(|t| t.id);
        targets
    }

    /// Rockets not yet flagged destroyed.
    pub fn live_rocket_count(&self) -> usize {
        self.world
            .query::<&Rocket>()
            .iter()
            .filter(|(_, rocket)| !rocket.destroyed)
            .count()
    }

    pub fn rocket_count(&self) -> usize {
        self.world.query::<&Rocket>().iter().count()
    }

    pub fn interceptor_count(&self) -> usize {
        self.world.query::<&Interceptor>().iter().count()
    }

    pub fn explosion_count(&self) -> usize {
        self.world.query::<&Explosion>().iter().count()
    }

    pub fn city_count(&self) -> usize {
        self.world.query::<&City>().iter().count()
    }

    pub fn cities_standing(&self) -> usize {
        self.world
            .query::<&City>()
            .iter()
            .filter(|(_, city)| !city.destroyed)
            .count()
    }

    /// Look up the hecs handle for an id. Linear scan; only used off the hot path.
    pub fn entity_of(&self, id: EntityId) -> Option<Entity> {
        self.world
            .query::<&EntityId>()
            .iter()
            .find(|(_, eid)| **eid == id)
            .map(|(entity, _)| entity)
    }

    /// Clone of a battery record by id.
    pub fn battery(&self, id: EntityId) -> Option<Battery> {
        let entity = self.entity_of(id)?;
        self.world.get::<&Battery>(entity).ok().map(|b| (*b).clone())
    }

    /// Clone of a city record by id.
    pub fn city(&self, id: EntityId) -> Option<City> {
        let entity = self.entity_of(id)?;
        self.world.get::<&City>(entity).ok().map(|c| *c)
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
