//! Pair selection for pairwise comparison judging
//!
//! Pure functions and data types; all database and locking concerns live in
//! the judging service and coordinator. The scheduler walks the unordered
//! pairs of an event's teams in creation order and picks the first pair the
//! judge has not yet compared that involves the team they are currently
//! viewing.

use std::collections::HashSet;

use uuid::Uuid;

use crate::models::Team;

/// Canonical identity of an unordered team pair
pub type PairKey = (Uuid, Uuid);

/// Canonicalize two team ids so both orientations map to the same key
pub fn pair_key(a: Uuid, b: Uuid) -> PairKey {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The pairs one judge has already compared for one criteria
///
/// Keys are canonicalized, so a grade recorded as (A, B) also marks (B, A)
/// as judged. Loaded once from the grade ledger per judging session and kept
/// current in memory as new votes arrive.
#[derive(Debug, Clone, Default)]
pub struct JudgedSet {
    keys: HashSet<PairKey>,
}

impl JudgedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the (team_one, team_two) id pairs of stored grades
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Uuid, Uuid)>,
    {
        Self {
            keys: pairs.into_iter().map(|(a, b)| pair_key(a, b)).collect(),
        }
    }

    /// Mark a pair as judged, in either orientation
    ///
    /// Returns `false` if the pair was already present.
    pub fn insert(&mut self, a: Uuid, b: Uuid) -> bool {
        self.keys.insert(pair_key(a, b))
    }

    /// Whether this pair has been judged, in either orientation
    pub fn contains(&self, a: Uuid, b: Uuid) -> bool {
        self.keys.contains(&pair_key(a, b))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Pick the next pair for a judge to compare
///
/// `teams` must be in creation order; candidate pairs are walked in that
/// order so every judge sees the same deterministic sequence. A pair is a
/// candidate when it has not been judged and one side is the team the judge
/// is viewing. The returned pair is oriented viewing team first.
///
/// `None` means this judge is finished from where they stand: every pair
/// involving the viewing team is judged, the viewing team is unknown, or the
/// event has fewer than two teams.
pub fn next_unjudged_pair<'a>(
    teams: &'a [Team],
    judged: &JudgedSet,
    viewing: &str,
) -> Option<(&'a Team, &'a Team)> {
    for i in 0..teams.len() {
        for j in (i + 1)..teams.len() {
            let (first, second) = (&teams[i], &teams[j]);
            if judged.contains(first.id, second.id) {
                continue;
            }
            if first.name == viewing {
                return Some((first, second));
            }
            if second.name == viewing {
                return Some((second, first));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_teams(names: &[&str]) -> Vec<Team> {
        let event_id = Uuid::new_v4();
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Team {
                id: Uuid::new_v4(),
                event_id,
                name: name.to_string(),
                members: Vec::new(),
                photo_url: "placeholder".to_string(),
                position: i as i32,
                created_at: Utc::now(),
            })
            .collect()
    }

    #[test]
    fn test_pair_key_ignores_orientation() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(pair_key(a, b), pair_key(b, a));
    }

    #[test]
    fn test_judged_set_detects_reversed_pair() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut judged = JudgedSet::new();

        assert!(judged.insert(a, b));
        assert!(judged.contains(b, a));
        // Re-inserting the reversed orientation is a no-op
        assert!(!judged.insert(b, a));
        assert_eq!(judged.len(), 1);
    }

    #[test]
    fn test_fewer_than_two_teams_is_finished() {
        let judged = JudgedSet::new();

        let none = make_teams(&[]);
        assert!(next_unjudged_pair(&none, &judged, "Alpha").is_none());

        let one = make_teams(&["Alpha"]);
        assert!(next_unjudged_pair(&one, &judged, "Alpha").is_none());
    }

    #[test]
    fn test_unknown_viewing_team_is_finished() {
        let teams = make_teams(&["Alpha", "Beta"]);
        let judged = JudgedSet::new();

        assert!(next_unjudged_pair(&teams, &judged, "Delta").is_none());
    }

    #[test]
    fn test_pair_is_oriented_viewing_team_first() {
        let teams = make_teams(&["Alpha", "Beta"]);
        let judged = JudgedSet::new();

        let (team1, team2) = next_unjudged_pair(&teams, &judged, "Beta").unwrap();
        assert_eq!(team1.name, "Beta");
        assert_eq!(team2.name, "Alpha");
    }

    #[test]
    fn test_judged_pairs_are_skipped() {
        let teams = make_teams(&["Alpha", "Beta", "Gamma"]);
        let mut judged = JudgedSet::new();
        judged.insert(teams[0].id, teams[1].id);

        let (team1, team2) = next_unjudged_pair(&teams, &judged, "Alpha").unwrap();
        assert_eq!(team1.name, "Alpha");
        assert_eq!(team2.name, "Gamma");
    }

    #[test]
    fn test_three_team_walk() {
        // Follow the scheduler the way a judge's screen does: after each
        // vote the previously returned team2 becomes the team being viewed.
        let teams = make_teams(&["Alpha", "Beta", "Gamma"]);
        let mut judged = JudgedSet::new();

        let (t1, t2) = next_unjudged_pair(&teams, &judged, "Alpha").unwrap();
        assert_eq!((t1.name.as_str(), t2.name.as_str()), ("Alpha", "Beta"));
        judged.insert(t1.id, t2.id);

        let (t1, t2) = next_unjudged_pair(&teams, &judged, "Beta").unwrap();
        assert_eq!((t1.name.as_str(), t2.name.as_str()), ("Beta", "Gamma"));
        judged.insert(t1.id, t2.id);

        let (t1, t2) = next_unjudged_pair(&teams, &judged, "Gamma").unwrap();
        assert_eq!((t1.name.as_str(), t2.name.as_str()), ("Gamma", "Alpha"));
        judged.insert(t1.id, t2.id);

        // All three pairs judged: finished from anywhere
        for name in ["Alpha", "Beta", "Gamma"] {
            assert!(next_unjudged_pair(&teams, &judged, name).is_none());
        }
    }

    #[test]
    fn test_walk_covers_every_pair_exactly_once() {
        // Judges vote in arbitrary orientation, so record each pair reversed
        // and confirm nothing repeats and everything gets covered. When a
        // judge runs out of pairs from where they stand they move to another
        // team that still has unjudged pairs.
        let teams = make_teams(&["Alpha", "Beta", "Gamma", "Delta", "Epsilon"]);
        let mut judged = JudgedSet::new();
        let mut seen: Vec<PairKey> = Vec::new();

        let mut viewing = teams[0].name.clone();
        loop {
            match next_unjudged_pair(&teams, &judged, &viewing) {
                Some((t1, t2)) => {
                    let key = pair_key(t1.id, t2.id);
                    assert!(!seen.contains(&key), "pair presented twice");
                    seen.push(key);
                    judged.insert(t2.id, t1.id);
                    viewing = t2.name.clone();
                }
                None => {
                    // Finished from here. Resume from any team that still
                    // has an unjudged pair, or stop when none does.
                    let next = teams.iter().find(|t| {
                        teams
                            .iter()
                            .any(|o| o.id != t.id && !judged.contains(t.id, o.id))
                    });
                    match next {
                        Some(team) => viewing = team.name.clone(),
                        None => break,
                    }
                }
            }
        }

        // C(5, 2) distinct pairs
        assert_eq!(seen.len(), 10);
        assert_eq!(judged.len(), 10);
    }
}
