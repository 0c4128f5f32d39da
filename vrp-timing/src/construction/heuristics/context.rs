#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/context_test.rs"]
mod context_test;

use crate::models::common::Timestamp;
use crate::models::problem::{Actor, Job};
use crate::models::solution::{Activity, Route};
use rustc_hash::FxHasher;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::hash::BuildHasherDefault;
use std::sync::Arc;

/// Contains information about solution: all its routes.
#[derive(Clone, Default)]
pub struct SolutionContext {
    /// List of used routes.
    pub routes: Vec<RouteContext>,
}

/// Specifies insertion context for a candidate move: a job which is about to be inserted into
/// the route using given actor and departure time. It is created per evaluated candidate.
pub struct InsertionContext<'a> {
    /// A route context where insertion happens.
    pub route_ctx: &'a RouteContext,

    /// A job which is about to be inserted.
    pub job: &'a Arc<Job>,

    /// A candidate actor: a vehicle and a driver.
    pub actor: &'a Arc<Actor>,

    /// A candidate departure time from the start location.
    pub departure: Timestamp,
}

impl<'a> InsertionContext<'a> {
    /// Creates insertion context which keeps route's actor and departure.
    pub fn new(route_ctx: &'a RouteContext, job: &'a Arc<Job>) -> Self {
        Self { route_ctx, job, actor: &route_ctx.route().actor, departure: route_ctx.route().departure() }
    }
}

/// Specifies activity context: an insertion of target activity between prev and next ones.
pub struct ActivityContext<'a> {
    /// Activity insertion index: the index of previous activity in the tour.
    pub index: usize,

    /// Previous activity.
    pub prev: &'a Activity,

    /// Target activity.
    pub target: &'a Activity,

    /// Next activity.
    pub next: &'a Activity,
}

/// Provides the way to associate arbitrary data within route or activity.
/// Each route context owns its state, so states of different routes never alias.
#[derive(Clone)]
pub struct RouteState {
    index: HashMap<TypeId, Arc<dyn Any + Send + Sync>, BuildHasherDefault<FxHasher>>,
}

impl Default for RouteState {
    fn default() -> RouteState {
        RouteState { index: HashMap::with_capacity_and_hasher(4, BuildHasherDefault::<FxHasher>::default()) }
    }
}

impl RouteState {
    /// Gets a value associated with the tour using `K` type as a key.
    pub fn get_tour_state_ex<K: 'static, V: Send + Sync + 'static>(&self) -> Option<&V> {
        self.index.get(&TypeId::of::<K>()).and_then(|any| any.downcast_ref::<V>())
    }

    /// Sets the value associated with the tour using `K` type as a key.
    pub fn set_tour_state_ex<K: 'static, V: Send + Sync + 'static>(&mut self, value: V) {
        self.index.insert(TypeId::of::<K>(), Arc::new(value));
    }

    /// Gets value associated with a key converted to a given type.
    pub fn get_activity_state_ex<K: 'static, V: Send + Sync + 'static>(&self, activity_idx: usize) -> Option<&V> {
        self.get_activity_states_ex::<K, V>().and_then(|activity_states| activity_states.get(activity_idx))
    }

    /// Gets values associated with key and activities.
    pub fn get_activity_states_ex<K: 'static, V: Send + Sync + 'static>(&self) -> Option<&Vec<V>> {
        self.index.get(&TypeId::of::<K>()).and_then(|s| s.downcast_ref::<Vec<V>>())
    }

    /// Adds values associated with activities.
    pub fn set_activity_states_ex<K: 'static, V: Send + Sync + 'static>(&mut self, values: Vec<V>) {
        self.index.insert(TypeId::of::<K>(), Arc::new(values));
    }

    /// Removes the value associated with `K` type as a key. Returns true if the value was present.
    pub fn remove_state_ex<K: 'static>(&mut self) -> bool {
        self.index.remove(&TypeId::of::<K>()).is_some()
    }

    /// Clear all states.
    pub fn clear(&mut self) {
        self.index.clear();
    }
}

/// Specifies route context: a route and its state.
#[derive(Clone)]
pub struct RouteContext {
    route: Route,
    state: RouteState,
    cache: RouteCache,
}

#[derive(Clone)]
struct RouteCache {
    is_stale: bool,
}

impl RouteContext {
    /// Creates a new instance of `RouteContext` with an empty route.
    pub fn new(actor: Arc<Actor>) -> Self {
        Self::new_with_state(Route::new(actor), RouteState::default())
    }

    /// Creates a new instance of `RouteContext` with arguments provided.
    pub fn new_with_state(route: Route, state: RouteState) -> Self {
        RouteContext { route, state, cache: RouteCache { is_stale: true } }
    }

    /// Returns a reference to route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Returns a reference to state.
    pub fn state(&self) -> &RouteState {
        &self.state
    }

    /// Unwraps given `RouteContext` as pair of mutable references.
    /// Marks context as stale.
    pub fn as_mut(&mut self) -> (&mut Route, &mut RouteState) {
        self.mark_stale(true);
        (&mut self.route, &mut self.state)
    }

    /// Returns mutable reference to used `Route`.
    /// Marks context as stale.
    pub fn route_mut(&mut self) -> &mut Route {
        self.mark_stale(true);
        &mut self.route
    }

    /// Returns mutable reference to used `RouteState`.
    /// Marks context as stale.
    pub fn state_mut(&mut self) -> &mut RouteState {
        self.mark_stale(true);
        &mut self.state
    }

    /// Returns true if context is stale. Context is marked stale when it is accessed by `mut`
    /// methods: its propagated states cannot be trusted until they are recalculated.
    pub fn is_stale(&self) -> bool {
        self.cache.is_stale
    }

    /// Marks context stale or resets the flag.
    pub(crate) fn mark_stale(&mut self, is_stale: bool) {
        self.cache.is_stale = is_stale;
    }
}

impl Debug for RouteContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteContext")
            .field("route", &self.route)
            .field("is_stale", &self.is_stale())
            .finish_non_exhaustive()
    }
}
