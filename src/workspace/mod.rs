//! Workspace: the registry of parsed entities.
//!
//! Entities live in an arena and are addressed by [`EntityId`] handles.
//! A path index maps reference paths to handles so that symbolic
//! references can be looked up after parsing.
//!
//! ```text
//! Workspace
//! ├── entities: Vec<Entity>                 (registration order)
//! └── by_path: IndexMap<RefPath, Slot>      (path -> handle)
//!       "/Pkg/Swc"           -> Entity(0)
//!       "/Pkg/Swc/Swc_IB"    -> Behavior(0)  (behavior owned by entity 0)
//!       "/Pkg/Swc_Impl"      -> Entity(1)
//! ```
//!
//! Internal behaviors are owned by their component, so the index points a
//! behavior's path at the owning component's slot.

use indexmap::IndexMap;

use crate::base::RefPath;
use crate::model::{ComponentType, InternalBehavior, SwcImplementation};

/// Handle to a registered entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A registered top-level entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    Component(ComponentType),
    Implementation(SwcImplementation),
}

impl Entity {
    pub fn ref_path(&self) -> RefPath {
        match self {
            Entity::Component(c) => c.ref_path(),
            Entity::Implementation(i) => i.ref_path(),
        }
    }

    pub fn as_component(&self) -> Option<&ComponentType> {
        match self {
            Entity::Component(c) => Some(c),
            Entity::Implementation(_) => None,
        }
    }

    pub fn as_component_mut(&mut self) -> Option<&mut ComponentType> {
        match self {
            Entity::Component(c) => Some(c),
            Entity::Implementation(_) => None,
        }
    }

    pub fn as_implementation(&self) -> Option<&SwcImplementation> {
        match self {
            Entity::Implementation(i) => Some(i),
            Entity::Component(_) => None,
        }
    }
}

impl From<ComponentType> for Entity {
    fn from(c: ComponentType) -> Self {
        Entity::Component(c)
    }
}

impl From<SwcImplementation> for Entity {
    fn from(i: SwcImplementation) -> Self {
        Entity::Implementation(i)
    }
}

/// Result of a path lookup.
#[derive(Clone, Copy, Debug)]
pub enum Found<'a> {
    Component(&'a ComponentType),
    Behavior(&'a InternalBehavior),
    Implementation(&'a SwcImplementation),
}

impl<'a> Found<'a> {
    pub fn as_component(self) -> Option<&'a ComponentType> {
        match self {
            Found::Component(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_behavior(self) -> Option<&'a InternalBehavior> {
        match self {
            Found::Behavior(b) => Some(b),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Entity(EntityId),
    Behavior(EntityId),
}

/// Registry of parsed entities, indexed by reference path.
#[derive(Clone, Debug, Default)]
pub struct Workspace {
    entities: Vec<Entity>,
    by_path: IndexMap<RefPath, Slot>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity under its reference path.
    ///
    /// Re-registering a path appends a new entity and points the path at it;
    /// the earlier entity stays reachable through its handle, but its
    /// behavior path no longer resolves.
    pub fn register(&mut self, entity: impl Into<Entity>) -> EntityId {
        let entity = entity.into();
        let id = EntityId(self.entities.len() as u32);
        let path = entity.ref_path();
        if let Some(&Slot::Entity(replaced)) = self.by_path.get(&path) {
            self.unindex_behavior(replaced);
        }
        self.by_path.insert(path, Slot::Entity(id));
        if let Some(behavior) = entity.as_component().and_then(|c| c.behavior.as_ref()) {
            self.by_path.insert(behavior.ref_path(), Slot::Behavior(id));
        }
        self.entities.push(entity);
        id
    }

    fn unindex_behavior(&mut self, owner: EntityId) {
        let Some(behavior_path) = self
            .get(owner)
            .and_then(Entity::as_component)
            .and_then(|c| c.behavior.as_ref())
            .map(InternalBehavior::ref_path)
        else {
            return;
        };
        if self.by_path.get(&behavior_path) == Some(&Slot::Behavior(owner)) {
            self.by_path.shift_remove(&behavior_path);
        }
    }

    /// Look up an entity (or a component-owned behavior) by path.
    pub fn find(&self, path: &str) -> Option<Found<'_>> {
        match *self.by_path.get(path)? {
            Slot::Entity(id) => Some(match self.get(id)? {
                Entity::Component(c) => Found::Component(c),
                Entity::Implementation(i) => Found::Implementation(i),
            }),
            Slot::Behavior(id) => self
                .get(id)?
                .as_component()?
                .behavior
                .as_ref()
                .map(Found::Behavior),
        }
    }

    /// Handle of the entity registered at `path`.
    ///
    /// Behavior paths resolve to their owning component.
    pub fn lookup(&self, path: &str) -> Option<EntityId> {
        match *self.by_path.get(path)? {
            Slot::Entity(id) | Slot::Behavior(id) => Some(id),
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.index())
    }

    /// Mutable access to the component registered at `path`.
    pub fn component_mut(&mut self, path: &str) -> Option<&mut ComponentType> {
        match *self.by_path.get(path)? {
            Slot::Entity(id) => self.get_mut(id)?.as_component_mut(),
            Slot::Behavior(_) => None,
        }
    }

    /// All registered components, in registration order.
    pub fn components(&self) -> impl Iterator<Item = &ComponentType> {
        self.entities.iter().filter_map(Entity::as_component)
    }

    /// All registered implementations, in registration order.
    pub fn implementations(&self) -> impl Iterator<Item = &SwcImplementation> {
        self.entities.iter().filter_map(Entity::as_implementation)
    }

    /// Registered reference paths, in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &RefPath> {
        self.by_path.keys()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
