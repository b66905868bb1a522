//! Per-movie in-flight request guard.
//!
//! A toggle or delete for a movie is refused while another one for the same
//! id has not completed, so overlapping responses cannot race to overwrite
//! the local list.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::types::MovieId;

#[derive(Debug, Clone, Default)]
pub struct InFlight {
    ids: Arc<Mutex<HashSet<MovieId>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `id`, or `None` if a request for it is already running.
    pub fn try_begin(&self, id: &MovieId) -> Option<InFlightGuard> {
        let mut ids = self.ids.lock().unwrap_or_else(|e| e.into_inner());
        if !ids.insert(id.clone()) {
            return None;
        }
        Some(InFlightGuard {
            ids: Arc::clone(&self.ids),
            id: id.clone(),
        })
    }

    pub fn is_busy(&self, id: &MovieId) -> bool {
        self.ids
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(id)
    }
}

/// Releases its id when dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    ids: Arc<Mutex<HashSet<MovieId>>>,
    id: MovieId,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.ids
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_is_refused_until_release() {
        let in_flight = InFlight::new();
        let id = MovieId::Number(1);

        let guard = in_flight.try_begin(&id).unwrap();
        assert!(in_flight.is_busy(&id));
        assert!(in_flight.try_begin(&id).is_none());

        drop(guard);
        assert!(!in_flight.is_busy(&id));
        assert!(in_flight.try_begin(&id).is_some());
    }

    #[test]
    fn different_ids_do_not_block_each_other() {
        let in_flight = InFlight::new();
        let _a = in_flight.try_begin(&MovieId::Number(1)).unwrap();
        assert!(in_flight.try_begin(&MovieId::Text("1".into())).is_some());
        assert!(in_flight.try_begin(&MovieId::Number(2)).is_some());
    }

    #[test]
    fn clones_share_the_same_set() {
        let a = InFlight::new();
        let b = a.clone();
        let _guard = a.try_begin(&MovieId::Number(9)).unwrap();
        assert!(b.try_begin(&MovieId::Number(9)).is_none());
    }
}
