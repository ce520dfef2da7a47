//! Draw session: the loaded client list plus the boutique board, passed
//! explicitly instead of living in globals.

use rand::Rng;

use crate::assignment::Assignments;
use crate::client::{Boutique, Client, DrawnClient};
use crate::selector;

#[derive(Debug, Default)]
pub struct Session {
    clients: Vec<Client>,
    assignments: Assignments,
}

impl Session {
    pub fn new(clients: Vec<Client>) -> Self {
        Self {
            clients,
            assignments: Assignments::new(),
        }
    }

    /// Draws are only meaningful once the pool has clients in it.
    pub fn is_ready(&self) -> bool {
        !self.clients.is_empty()
    }

    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    /// Basic draw. Leaves the boutique board alone.
    pub fn draw<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<DrawnClient> {
        selector::select_random(&self.clients, count, rng)
            .into_iter()
            .map(|client| DrawnClient {
                client,
                boutique: None,
            })
            .collect()
    }

    /// Draws a client for `boutique` and seats it there.
    pub fn draw_for<R: Rng + ?Sized>(&mut self, boutique: Boutique, rng: &mut R) -> Option<DrawnClient> {
        let drawn = selector::select_for_boutique(&self.clients, &self.assignments, boutique, rng)?;
        self.assignments.assign(boutique, drawn.client.clone());
        Some(drawn)
    }
}
