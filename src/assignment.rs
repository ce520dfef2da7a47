//! Assignment board: at most one client per boutique.
//! Starts empty, filled one slot per boutique draw, never cleared for the life of a session.

use crate::client::{Boutique, Client};
use std::collections::HashSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Assignments {
    slots: [Option<Client>; 3],
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `client` in the boutique's slot, replacing any previous occupant.
    pub fn assign(&mut self, boutique: Boutique, client: Client) {
        self.slots[boutique.index()] = Some(client);
    }

    pub fn get(&self, boutique: Boutique) -> Option<&Client> {
        self.slots[boutique.index()].as_ref()
    }

    /// Ids held by every filled slot, across all boutiques.
    pub fn assigned_ids(&self) -> HashSet<String> {
        self.slots.iter().flatten().map(|c| c.id.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Boutique, Option<&Client>)> {
        Boutique::ALL.into_iter().map(|b| (b, self.get(b)))
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}
