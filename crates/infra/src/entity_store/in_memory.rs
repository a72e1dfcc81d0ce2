use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use roster_core::{Entity, EntityId};

use super::r#trait::{EntityStore, StoreError, StoreResult};

/// In-memory entity store behind one coarse reader-writer lock.
///
/// Reads share the lock; creates and deletes take it exclusively. The guard
/// covers only the map access: `get` clones the record under the shared
/// guard, and logging happens after the guard is released.
///
/// Critical sections are single map operations and cannot leave the map
/// half-updated, so a poisoned lock is recovered rather than propagated.
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    entities: RwLock<HashMap<EntityId, Entity>>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl EntityStore for InMemoryEntityStore {
    fn create(&self, entity: Entity) -> StoreResult<()> {
        let id = entity.id();
        let previous = {
            let mut map = self.entities.write().unwrap_or_else(PoisonError::into_inner);
            map.insert(id, entity)
        };

        if previous.is_some() {
            tracing::debug!(%id, "entity replaced by create");
        }
        Ok(())
    }

    fn get(&self, id: EntityId) -> StoreResult<Entity> {
        let map = self.entities.read().unwrap_or_else(PoisonError::into_inner);
        map.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn delete(&self, id: EntityId) -> StoreResult<()> {
        let removed = {
            let mut map = self.entities.write().unwrap_or_else(PoisonError::into_inner);
            map.remove(&id)
        };

        match removed {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }

    fn len(&self) -> usize {
        self.entities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    fn entity(id: i64, name: &str, age: i64) -> Entity {
        Entity::new(EntityId::new(id), name, age).unwrap()
    }

    #[test]
    fn create_then_get_round_trips() {
        let store = InMemoryEntityStore::new();
        store.create(entity(7, "Alice", 30)).unwrap();

        assert_eq!(store.get(EntityId::new(7)).unwrap(), entity(7, "Alice", 30));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_overwrites_existing_id() {
        let store = InMemoryEntityStore::new();
        store.create(entity(7, "Alice", 30)).unwrap();
        store.create(entity(7, "Bob", 40)).unwrap();

        assert_eq!(store.get(EntityId::new(7)).unwrap(), entity(7, "Bob", 40));
        // Last write wins; no second record.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_on_empty_store_is_not_found() {
        let store = InMemoryEntityStore::new();
        assert!(store.is_empty());
        assert_eq!(
            store.get(EntityId::new(999)),
            Err(StoreError::NotFound(EntityId::new(999)))
        );
    }

    #[test]
    fn delete_twice_yields_success_then_not_found() {
        let store = InMemoryEntityStore::new();
        store.create(entity(3, "Carol", 51)).unwrap();

        assert_eq!(store.delete(EntityId::new(3)), Ok(()));
        assert_eq!(
            store.delete(EntityId::new(3)),
            Err(StoreError::NotFound(EntityId::new(3)))
        );
        assert!(store.get(EntityId::new(3)).is_err());
    }

    #[test]
    fn readers_do_not_block_each_other() {
        let store = InMemoryEntityStore::arc();
        store.create(entity(1, "Dana", 22)).unwrap();

        // Hold a shared guard for the whole test; a concurrent get must still finish.
        let _guard = store.entities.read().unwrap();

        let (tx, rx) = mpsc::channel();
        let reader = {
            let store = store.clone();
            std::thread::spawn(move || {
                let got = store.get(EntityId::new(1));
                let _ = tx.send(got);
            })
        };

        let got = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("get blocked behind another reader");
        assert_eq!(got.unwrap(), entity(1, "Dana", 22));
        reader.join().unwrap();
    }

    #[test]
    fn concurrent_writers_never_expose_a_mixed_entity() {
        let store = InMemoryEntityStore::new();
        let alice = entity(7, "Alice", 30);
        let bob = entity(7, "Bob", 40);

        std::thread::scope(|s| {
            for writer in 0..2 {
                let (store, alice, bob) = (&store, alice.clone(), bob.clone());
                s.spawn(move || {
                    for i in 0..2_000 {
                        match (i + writer) % 3 {
                            0 => store.create(alice.clone()).unwrap(),
                            1 => store.create(bob.clone()).unwrap(),
                            _ => {
                                let _ = store.delete(EntityId::new(7));
                            }
                        }
                    }
                });
            }

            for _ in 0..4 {
                let (store, alice, bob) = (&store, &alice, &bob);
                s.spawn(move || {
                    for _ in 0..2_000 {
                        match store.get(EntityId::new(7)) {
                            Ok(seen) => assert!(
                                seen == *alice || seen == *bob,
                                "torn read: {seen:?}"
                            ),
                            Err(StoreError::NotFound(id)) => assert_eq!(id, EntityId::new(7)),
                        }
                    }
                });
            }
        });
    }

    #[test]
    fn thousand_concurrent_creates_are_all_visible() {
        const TOTAL: i64 = 1_000;
        const WORKERS: i64 = 32;
        let store = InMemoryEntityStore::new();

        std::thread::scope(|s| {
            for w in 0..WORKERS {
                let store = &store;
                s.spawn(move || {
                    for id in (1..=TOTAL).filter(|id| id % WORKERS == w) {
                        store.create(entity(id, &format!("user-{id}"), id)).unwrap();
                    }
                });
            }
        });

        assert_eq!(store.len(), TOTAL as usize);

        let seen = std::thread::scope(|s| {
            let handles = (0..WORKERS)
                .map(|w| {
                    let store = &store;
                    s.spawn(move || {
                        (1..=TOTAL)
                            .filter(|id| id % WORKERS == w)
                            .map(|id| store.get(EntityId::new(id)).unwrap())
                            .collect::<Vec<_>>()
                    })
                })
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });

        let mut ids = seen.iter().map(|e| e.id().get()).collect::<Vec<_>>();
        ids.sort_unstable();
        assert_eq!(ids, (1..=TOTAL).collect::<Vec<_>>());
        for e in &seen {
            assert_eq!(e.name(), format!("user-{}", e.id()));
            assert_eq!(e.age(), e.id().get());
        }
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let store = InMemoryEntityStore::arc();
        store.create(entity(5, "Eve", 33)).unwrap();

        let poisoner = store.clone();
        let joined = std::thread::spawn(move || {
            let _guard = poisoner.entities.write().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(joined.is_err());
        assert!(store.entities.is_poisoned());

        assert_eq!(store.get(EntityId::new(5)).unwrap(), entity(5, "Eve", 33));
        store.delete(EntityId::new(5)).unwrap();
        assert!(store.is_empty());
    }
}
