use broadside::{
    check_score, place_ship, resolve_attack, AttackResult, Board, Combatant, GameError, HitLog,
    Orientation, ShipId, SunkSet,
};

fn board_with_destroyer_and_submarine() -> Board {
    let mut board = Board::new();
    place_ship(&mut board, ShipId::DESTROYER, Orientation::Horizontal, 0).unwrap();
    place_ship(&mut board, ShipId::SUBMARINE, Orientation::Vertical, 5).unwrap();
    board
}

#[test]
fn test_hit_miss_and_repeat() {
    let mut board = board_with_destroyer_and_submarine();
    let mut hits = HitLog::new();

    assert_eq!(
        resolve_attack(&mut hits, &mut board, 1).unwrap(),
        AttackResult::Hit(ShipId::DESTROYER)
    );
    assert_eq!(resolve_attack(&mut hits, &mut board, 2).unwrap(), AttackResult::Miss);
    assert_eq!(
        resolve_attack(&mut hits, &mut board, 1).unwrap(),
        AttackResult::AlreadyAttacked
    );
    assert_eq!(
        resolve_attack(&mut hits, &mut board, 2).unwrap(),
        AttackResult::AlreadyAttacked
    );

    assert_eq!(hits.as_slice(), &[ShipId::DESTROYER]);
    assert!(board.cell(1).unwrap().is_hit());
    assert!(board.cell(2).unwrap().is_miss());
    assert_eq!(board.attacked_count(), 2);
}

#[test]
fn test_attack_out_of_range() {
    let mut board = Board::new();
    let mut hits = HitLog::new();
    assert_eq!(
        resolve_attack(&mut hits, &mut board, 100).unwrap_err(),
        GameError::IndexOutOfRange(100)
    );
    assert!(hits.is_empty());
}

#[test]
fn test_sink_exactly_at_length() {
    let mut board = board_with_destroyer_and_submarine();
    let mut hits = HitLog::new();
    let mut sunk = SunkSet::new();

    resolve_attack(&mut hits, &mut board, 0).unwrap();
    assert!(check_score(&hits, &mut sunk).is_empty());
    assert!(!sunk.contains(ShipId::DESTROYER));

    resolve_attack(&mut hits, &mut board, 1).unwrap();
    assert_eq!(check_score(&hits, &mut sunk), vec![ShipId::DESTROYER]);
    assert!(sunk.contains(ShipId::DESTROYER));

    // recounting reports nothing new
    assert!(check_score(&hits, &mut sunk).is_empty());
    assert_eq!(sunk.len(), 1);
    assert_eq!(hits.count(ShipId::DESTROYER), 2);
}

#[test]
fn test_repeat_attack_does_not_double_count() {
    let mut board = board_with_destroyer_and_submarine();
    let mut hits = HitLog::new();
    let mut sunk = SunkSet::new();

    for index in [5, 15, 15, 5] {
        resolve_attack(&mut hits, &mut board, index).unwrap();
    }
    assert_eq!(hits.count(ShipId::SUBMARINE), 2);
    assert!(check_score(&hits, &mut sunk).is_empty());

    resolve_attack(&mut hits, &mut board, 25).unwrap();
    assert_eq!(check_score(&hits, &mut sunk), vec![ShipId::SUBMARINE]);
}

#[test]
fn test_sunk_set_completion() {
    let mut sunk = SunkSet::new();
    assert!(sunk.is_empty());
    for ship in ShipId::all() {
        assert!(!sunk.is_complete());
        assert!(sunk.insert(ship));
        assert!(!sunk.insert(ship));
    }
    assert!(sunk.is_complete());
    assert_eq!(sunk.iter().collect::<Vec<_>>(), ShipId::all().collect::<Vec<_>>());
}

#[test]
fn test_combatant_remaining() {
    let mut side = Combatant::new();
    assert_eq!(side.remaining().count(), 5);
    side.sunk.insert(ShipId::CRUISER);
    assert!(side.remaining().all(|s| s != ShipId::CRUISER));
    assert_eq!(side.remaining().count(), 4);
}
