//! Table orchestration tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use croupier::{
    Game, GameId, GameOptions, GameStore, InvalidPlay, JoinError, MemoryAccounts, MemoryStore,
    Phase, Play, PlayError, PlayKind, PlayerId, StoreError, Table, TableError,
};

fn table(players: &[&str]) -> Table<MemoryAccounts, MemoryStore> {
    let _ = env_logger::builder().is_test(true).try_init();
    let accounts = MemoryAccounts::new();
    for id in players {
        accounts.open(PlayerId::from(*id), 1_000);
    }
    Table::new(accounts, MemoryStore::new(), GameOptions::default(), 2024)
}

/// Bets for everyone and then stands every live hand until the round ends.
fn bet_and_stand(table: &Table<MemoryAccounts, MemoryStore>, id: GameId, bet: i64) -> u64 {
    loop {
        let game = table.game(id).unwrap();
        let Some(active) = game.active_participant() else {
            break;
        };
        let kind = if active.bet() == 0 {
            PlayKind::InitialBet
        } else {
            PlayKind::Stand
        };
        let play = Play::new(active.player_id().clone(), kind, bet);
        if let Some(result) = table.execute_play(id, &play).unwrap() {
            return result.hands.iter().map(|h| h.payout).sum();
        }
    }
    0
}

#[test]
fn create_join_and_play_a_round() {
    let table = table(&["ann", "bob"]);
    let id = table.create_game(PlayerId::from("ann"), "Ann").unwrap();
    table.join_game(id, PlayerId::from("bob"), "Bob").unwrap();

    let game = table.game(id).unwrap();
    assert_eq!(game.participants().len(), 2);
    assert_eq!(game.phase(), Phase::Betting);
    assert_eq!(game.cards_remaining(), 52);

    let paid = bet_and_stand(&table, id, 10);

    let game = table.game(id).unwrap();
    assert!(game.is_concluded());
    let ann = table.accounts().balance(&PlayerId::from("ann")).unwrap();
    let bob = table.accounts().balance(&PlayerId::from("bob")).unwrap();
    assert_eq!(ann + bob, 2_000 - 20 + paid);
}

#[test]
fn rejected_play_keeps_stored_game() {
    let table = table(&["ann", "bob"]);
    let id = table.create_game(PlayerId::from("ann"), "Ann").unwrap();
    table.join_game(id, PlayerId::from("bob"), "Bob").unwrap();
    let before = table.game(id).unwrap();

    let err = table
        .execute_play(id, &Play::new("bob", PlayKind::InitialBet, 10))
        .unwrap_err();
    assert_eq!(err, TableError::Play(PlayError::InvalidPlay(InvalidPlay::NotYourTurn)));
    assert_eq!(table.game(id).unwrap(), before);
}

#[test]
fn unknown_game_is_reported() {
    let table = table(&["ann"]);
    let missing = GameId(99);

    assert_eq!(
        table.game(missing).unwrap_err(),
        TableError::Store(StoreError::NotFound(missing))
    );
    assert_eq!(
        table
            .execute_play(missing, &Play::new("ann", PlayKind::Hit, 0))
            .unwrap_err(),
        TableError::Store(StoreError::NotFound(missing))
    );
}

#[test]
fn no_joining_after_the_deal() {
    let table = table(&["ann", "bob"]);
    let id = table.create_game(PlayerId::from("ann"), "Ann").unwrap();
    table
        .execute_play(id, &Play::new("ann", PlayKind::InitialBet, 10))
        .unwrap();

    assert_eq!(
        table.join_game(id, PlayerId::from("bob"), "Bob").unwrap_err(),
        TableError::Join(JoinError::InProgress)
    );
}

#[test]
fn delete_removes_the_game() {
    let table = table(&["ann"]);
    let id = table.create_game(PlayerId::from("ann"), "Ann").unwrap();
    assert_eq!(table.store().len(), 1);

    table.delete_game(id).unwrap();
    assert!(table.store().is_empty());
    assert!(matches!(
        table.store().find(id),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn games_run_concurrently_and_plays_serialize_per_game() {
    let players = ["p0", "p1", "p2", "p3", "p4", "p5"];
    let table = table(&players);

    let ids: Vec<GameId> = players
        .iter()
        .map(|p| table.create_game(PlayerId::from(*p), *p).unwrap())
        .collect();
    assert_eq!(ids.len(), 6);

    let shared = &table;
    let paid: u64 = thread::scope(|scope| {
        let handles: Vec<_> = ids
            .iter()
            .map(|&id| scope.spawn(move || bet_and_stand(shared, id, 25)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).sum()
    });

    for &id in &ids {
        assert!(table.game(id).unwrap().is_concluded());
    }
    let total: u64 = players
        .iter()
        .map(|p| table.accounts().balance(&PlayerId::from(*p)).unwrap())
        .sum();
    assert_eq!(total, 6_000 - 6 * 25 + paid);

    // Racing the same play on one game: exactly one wins the turn.
    let id = table.create_game(PlayerId::from("p0"), "p0").unwrap();
    let bet = Play::new("p0", PlayKind::InitialBet, 10);
    let accepted = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| table.execute_play(id, &bet).is_ok()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count()
    });
    assert_eq!(accepted, 1);
    assert_eq!(table.game(id).unwrap().participants()[0].bet(), 10);
}

#[test]
fn rename_reaches_every_game_the_player_sits_in() {
    let table = table(&["ann", "bob"]);
    let ann = PlayerId::from("ann");
    let first = table.create_game(ann.clone(), "Ann").unwrap();
    let second = table.create_game(PlayerId::from("bob"), "Bob").unwrap();
    table.join_game(second, ann.clone(), "Ann").unwrap();
    let third = table.create_game(PlayerId::from("bob"), "Bob").unwrap();

    assert_eq!(table.rename_player(&ann, "Annie").unwrap(), 2);

    for id in [first, second] {
        let game = table.game(id).unwrap();
        let seat = game
            .participants()
            .iter()
            .find(|p| *p.player_id() == ann)
            .unwrap();
        assert_eq!(seat.name(), "Annie");
    }
    assert_eq!(table.game(second).unwrap().participants()[0].name(), "Bob");
    assert_eq!(table.game(third).unwrap().participants()[0].name(), "Bob");
    assert_eq!(table.rename_player(&PlayerId::from("cid"), "Cid").unwrap(), 0);
}

/// In-memory store whose saves can be switched to fail.
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_saves: AtomicBool,
}

impl FlakyStore {
    fn set_failing(&self, failing: bool) {
        self.fail_saves.store(failing, Ordering::SeqCst);
    }
}

impl GameStore for FlakyStore {
    fn find(&self, id: GameId) -> Result<Game, StoreError> {
        self.inner.find(id)
    }

    fn save(&self, game: &Game) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Storage("disk full".to_string()));
        }
        self.inner.save(game)
    }

    fn delete(&self, id: GameId) -> Result<(), StoreError> {
        self.inner.delete(id)
    }

    fn ids(&self) -> Result<Vec<GameId>, StoreError> {
        self.inner.ids()
    }
}

#[test]
fn unsaved_plays_move_no_money() {
    let _ = env_logger::builder().is_test(true).try_init();
    let ann = PlayerId::from("ann");
    let accounts = MemoryAccounts::new();
    accounts.open(ann.clone(), 1_000);
    let table = Table::new(accounts, FlakyStore::default(), GameOptions::default(), 7);
    let id = table.create_game(ann.clone(), "Ann").unwrap();
    let balance = || table.accounts().balance(&ann).unwrap();
    let storage_failed =
        |result: Result<_, TableError>| matches!(result, Err(TableError::Store(StoreError::Storage(_))));

    let bet = Play::new("ann", PlayKind::InitialBet, 10);
    table.store().set_failing(true);
    assert!(storage_failed(table.execute_play(id, &bet)));
    assert_eq!(balance(), 1_000);
    assert_eq!(table.game(id).unwrap().phase(), Phase::Betting);

    table.store().set_failing(false);
    assert_eq!(table.execute_play(id, &bet).unwrap(), None);
    assert_eq!(balance(), 990);

    // The concluding stand fails to save: nothing is paid and the hand stays live.
    let stand = Play::new("ann", PlayKind::Stand, 0);
    table.store().set_failing(true);
    assert!(storage_failed(table.execute_play(id, &stand)));
    assert_eq!(balance(), 990);
    assert!(!table.game(id).unwrap().is_concluded());

    table.store().set_failing(false);
    let result = table.execute_play(id, &stand).unwrap().unwrap();
    let paid: u64 = result.hands.iter().map(|h| h.payout).sum();
    assert_eq!(balance(), 990 + paid);
    assert!(table.game(id).unwrap().is_concluded());
}
