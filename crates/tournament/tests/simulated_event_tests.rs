//! Simulated tournaments through the store
//!
//! Plays events with seeded random results, saving after every round the
//! way the CLI does, and checks what comes back from disk.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use swiss_core::{Gender, NewPlayer, PlayerRegistry, Score, TimeControl, Tournament, TournamentInfo};
use tournament::{RandomResults, Store};

fn registry(n: u32) -> PlayerRegistry {
    let born = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
    let mut registry = PlayerRegistry::new();
    for rank in 1..=n {
        registry
            .register(NewPlayer::new("Sim", &format!("Player{rank}"), born, Gender::Other, rank))
            .unwrap();
    }
    registry
}

fn event(registry: &PlayerRegistry, rounds: u32) -> Tournament {
    let date = NaiveDate::from_ymd_opt(2024, 9, 14).unwrap();
    let mut info = TournamentInfo::new("Simulated", "Nowhere", date, TimeControl::Blitz);
    info.number_of_rounds = rounds;
    info.number_of_players = registry.len() as u32;
    let mut tournament = Tournament::new(info).unwrap();
    for player in registry.iter() {
        tournament.add_player(registry, player.uid).unwrap();
    }
    tournament
}

/// Rounds start every 90 minutes from 10:00
fn round_clock() -> impl FnMut() -> DateTime<Utc> {
    let mut next = Utc.with_ymd_and_hms(2024, 9, 14, 10, 0, 0).unwrap();
    move || {
        let now = next;
        next += Duration::minutes(45);
        now
    }
}

#[test]
fn test_simulated_event_saved_each_round() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("db.json"));
    let registry = registry(8);
    let mut tournaments = vec![event(&registry, 4)];
    let mut source = RandomResults::new(Some(2024));
    let mut clock = round_clock();

    while !tournaments[0].is_completed() {
        tournaments[0].play_round(&registry, &mut source, &mut clock).unwrap();
        store.save(&registry, &tournaments).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.tournaments[0], tournaments[0]);
    }

    let loaded = store.load().unwrap();
    let finished = &loaded.tournaments[0];
    assert_eq!(finished.active_round(), 4);
    let total: Score = finished.players().iter().map(|e| e.score).sum();
    assert_eq!(total, Score::from_halves(2 * 16));
    let last = finished.rounds().last().unwrap();
    assert_eq!(
        last.ending_time(),
        Some(Utc.with_ymd_and_hms(2024, 9, 14, 15, 15, 0).unwrap())
    );
}

#[test]
fn test_same_seed_same_tournament() {
    let registry = registry(6);
    let mut first = event(&registry, 3);
    let mut second = event(&registry, 3);
    first.run(&registry, &mut RandomResults::new(Some(9)), round_clock()).unwrap();
    second.run(&registry, &mut RandomResults::new(Some(9)), round_clock()).unwrap();

    let pairings = |t: &Tournament| -> Vec<_> {
        t.rounds()
            .iter()
            .flat_map(|r| r.matches().iter().map(|m| (m.player_1(), m.player_2(), m.result())))
            .collect()
    };
    assert_eq!(pairings(&first), pairings(&second));
    assert_eq!(first.players(), second.players());
}
