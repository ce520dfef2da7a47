//! Selector module.
//! Basic mode: a random handful of distinct clients.
//! Boutique mode: one client per boutique, honoring forced affinities and
//! excluding clients already seated in any boutique.
//! Randomness comes in through `rng` so draws can be seeded in tests.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::assignment::Assignments;
use crate::client::{Boutique, Client, DrawnClient};

/// Which rule produced a boutique pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A client pinned to this boutique, lowest id first.
    Forced,
    /// Random pick among unassigned clients not pinned elsewhere.
    Available,
    /// Pool exhausted, random pick from everyone.
    Overflow,
}

/// Returns `min(count, all.len())` distinct clients in random order. `all` is left untouched.
pub fn select_random<R: Rng + ?Sized>(all: &[Client], count: usize, rng: &mut R) -> Vec<Client> {
    let mut shuffled = all.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

/// Picks the next client for `boutique`. `None` only when `all` is empty.
pub fn select_for_boutique<R: Rng + ?Sized>(
    all: &[Client],
    assignments: &Assignments,
    boutique: Boutique,
    rng: &mut R,
) -> Option<DrawnClient> {
    let (client, outcome) = pick_for_boutique(all, assignments, boutique, rng)?;
    tracing::debug!(
        boutique = %boutique,
        client_id = %client.id,
        ?outcome,
        "boutique draw"
    );
    Some(DrawnClient {
        client,
        boutique: Some(boutique),
    })
}

fn pick_for_boutique<R: Rng + ?Sized>(
    all: &[Client],
    assignments: &Assignments,
    boutique: Boutique,
    rng: &mut R,
) -> Option<(Client, DrawOutcome)> {
    let assigned_ids = assignments.assigned_ids();
    let owner = boutique.owner();

    let forced = all
        .iter()
        .filter(|c| c.forced_boutique() == Some(owner) && !assigned_ids.contains(&c.id))
        .min_by(|a, b| a.id.cmp(&b.id));
    if let Some(client) = forced {
        return Some((client.clone(), DrawOutcome::Forced));
    }

    let available: Vec<Client> = all
        .iter()
        .filter(|c| !assigned_ids.contains(&c.id))
        .filter(|c| c.forced_boutique().is_none_or(|f| f == owner))
        .cloned()
        .collect();
    if let Some(client) = select_random(&available, 1, rng).pop() {
        return Some((client, DrawOutcome::Available));
    }

    all.choose(rng).map(|c| (c.clone(), DrawOutcome::Overflow))
}

// *************** Tests ***************

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn pool(n: usize) -> Vec<Client> {
        (1..=n)
            .map(|i| Client::new(&i.to_string(), &format!("Client {}", i), "", "desc"))
            .collect()
    }

    fn ids(clients: &[Client]) -> HashSet<String> {
        clients.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_select_random_returns_distinct_members() {
        let all = pool(8);
        let mut rng = StdRng::seed_from_u64(7);
        for count in 0..=8 {
            let picked = select_random(&all, count, &mut rng);
            assert_eq!(picked.len(), count);
            let picked_ids = ids(&picked);
            assert_eq!(picked_ids.len(), count, "duplicates in {:?}", picked);
            assert!(picked_ids.is_subset(&ids(&all)));
        }
    }

    #[test]
    fn test_select_random_caps_at_pool_size() {
        let all = pool(3);
        let picked = select_random(&all, 10, &mut StdRng::seed_from_u64(1));
        assert_eq!(picked.len(), 3);
        assert_eq!(ids(&picked), ids(&all));
    }

    #[test]
    fn test_select_random_empty_pool() {
        for n in [0, 1, 3, 100] {
            assert!(select_random(&[], n, &mut StdRng::seed_from_u64(3)).is_empty());
        }
    }

    #[test]
    fn test_select_random_does_not_mutate_input_and_varies() {
        let all = pool(10);
        let before = all.clone();
        let mut rng = rand::thread_rng();
        let orders: HashSet<Vec<String>> = (0..20)
            .map(|_| select_random(&all, 10, &mut rng).into_iter().map(|c| c.id).collect())
            .collect();
        assert_eq!(all, before);
        assert!(orders.len() > 1, "shuffle never changed order");
    }

    #[test]
    fn test_forced_pick_is_lowest_id_and_deterministic() {
        let all = vec![
            Client::new("b", "Bea", "", "").with_forced("Lisa"),
            Client::new("c", "Cyd", "", ""),
            Client::new("a", "Ana", "", "").with_forced("Lisa"),
        ];
        let board = Assignments::new();

        let first = select_for_boutique(&all, &board, Boutique::Lisa, &mut StdRng::seed_from_u64(1));
        let second = select_for_boutique(&all, &board, Boutique::Lisa, &mut StdRng::seed_from_u64(99));
        let first = first.unwrap();
        assert_eq!(first.client.id, "a");
        assert_eq!(first.boutique, Some(Boutique::Lisa));
        assert_eq!(Some(first), second);
    }

    #[test]
    fn test_forced_ids_compare_as_text() {
        let all = vec![
            Client::new("9", "Neuf", "", "").with_forced("Morgane"),
            Client::new("10", "Dix", "", "").with_forced("Morgane"),
        ];
        let drawn = select_for_boutique(&all, &Assignments::new(), Boutique::Morgane, &mut StdRng::seed_from_u64(3));
        assert_eq!(drawn.unwrap().client.id, "10");
    }

    #[test]
    fn test_forced_pick_skips_assigned() {
        let all = vec![
            Client::new("a", "Ana", "", "").with_forced("Lisa"),
            Client::new("b", "Bea", "", "").with_forced("Lisa"),
        ];
        let mut board = Assignments::new();
        board.assign(Boutique::Morgane, all[0].clone());

        let (client, outcome) =
            pick_for_boutique(&all, &board, Boutique::Lisa, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(client.id, "b");
        assert_eq!(outcome, DrawOutcome::Forced);
    }

    #[test]
    fn test_never_returns_assigned_while_candidates_remain() {
        let all = pool(5);
        let mut board = Assignments::new();
        board.assign(Boutique::Lisa, all[0].clone());
        board.assign(Boutique::Mildred, all[3].clone());

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let (client, outcome) =
                pick_for_boutique(&all, &board, Boutique::Morgane, &mut rng).unwrap();
            assert_eq!(outcome, DrawOutcome::Available);
            assert!(client.id != "1" && client.id != "4");
        }
    }

    #[test]
    fn test_client_forced_elsewhere_is_excluded() {
        let all = vec![
            Client::new("1", "Lisa's own", "", "").with_forced("Lisa"),
            Client::new("2", "Free", "", ""),
            Client::new("3", "Mildred's own", "", "").with_forced("Mildred"),
        ];
        let board = Assignments::new();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let drawn = select_for_boutique(&all, &board, Boutique::Morgane, &mut rng).unwrap();
            assert_eq!(drawn.client.id, "2");
        }
    }

    #[test]
    fn test_overflow_when_pool_exhausted() {
        let all = vec![
            Client::new("1", "Ana", "", ""),
            Client::new("2", "Bea", "", "").with_forced("Lisa"),
        ];
        let mut board = Assignments::new();
        board.assign(Boutique::Mildred, all[0].clone());

        // "1" is seated, "2" is pinned to Lisa: nothing left for Morgane.
        let mut rng = StdRng::seed_from_u64(21);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let (client, outcome) =
                pick_for_boutique(&all, &board, Boutique::Morgane, &mut rng).unwrap();
            assert_eq!(outcome, DrawOutcome::Overflow);
            seen.insert(client.id);
        }
        assert_eq!(seen, ids(&all));
    }

    #[test]
    fn test_boutique_draw_on_empty_pool() {
        let board = Assignments::new();
        let drawn = select_for_boutique(&[], &board, Boutique::Lisa, &mut StdRng::seed_from_u64(0));
        assert!(drawn.is_none());
    }
}
