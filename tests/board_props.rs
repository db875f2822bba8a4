use bboard::{AttackResult, Board, BoardError, Orientation, Ship, BOARD_SIZE, STANDARD_FLEET, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const N: usize = BOARD_SIZE as usize;

fn fleet() -> Vec<Ship> {
    STANDARD_FLEET
        .iter()
        .map(|&(name, length)| Ship::new(name, length))
        .collect()
}

fn place_randomly<'s>(board: &mut Board<'s>, fleet: &'s [Ship], rng: &mut SmallRng) {
    for ship in fleet {
        let (r, c, orient) = board.random_placement(rng, ship.length()).unwrap();
        board.place_ship(ship, r, c, orient).unwrap();
    }
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::RowWise), Just(Orientation::ColumnWise)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleet_never_overlaps(seed in any::<u64>()) {
        let ships = fleet();
        let mut board = Board::new();
        let mut rng = SmallRng::seed_from_u64(seed);
        place_randomly(&mut board, &ships, &mut rng);

        prop_assert_eq!(board.ships_remaining(), ships.len());
        prop_assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
        for ship in &ships {
            let covered = board
                .ship_map()
                .iter_set_bits()
                .filter(|&(r, c)| board.ship_at(r, c).is_some_and(|s| std::ptr::eq(s, ship)))
                .count();
            prop_assert_eq!(covered, ship.length());
        }
    }

    #[test]
    fn placement_is_all_or_nothing(
        length in 1usize..=5,
        row in 0..N + 3,
        col in 0..N + 3,
        orient in orientation(),
    ) {
        let blocker = Ship::new("blocker", 3);
        let ship = Ship::new("ship", length);
        let mut board = Board::new();
        board.place_ship(&blocker, 5, 5, Orientation::RowWise).unwrap();
        let before = board.ship_map();

        let fits = match orient {
            Orientation::RowWise => row < N && col + length <= N,
            Orientation::ColumnWise => col < N && row + length <= N,
        };
        match board.place_ship(&ship, row, col, orient) {
            Ok(()) => {
                prop_assert!(fits);
                prop_assert_eq!(board.ships_remaining(), 2);
                prop_assert_eq!(board.ship_map().count_ones(), 3 + length);
            }
            Err(e) => {
                if fits {
                    prop_assert_eq!(e, BoardError::ShipOverlaps);
                } else {
                    prop_assert_eq!(e, BoardError::ShipOutOfBounds);
                }
                prop_assert_eq!(board.ships_remaining(), 1);
                prop_assert_eq!(board.ship_map(), before);
                prop_assert!(!ship.is_placed());
            }
        }
    }

    #[test]
    fn damage_counts_distinct_cells(seed in any::<u64>(), shots in 0usize..300) {
        let ships = fleet();
        let mut board = Board::new();
        let mut rng = SmallRng::seed_from_u64(seed);
        place_randomly(&mut board, &ships, &mut rng);

        let mut sinks = 0;
        for _ in 0..shots {
            let (r, c) = (rng.random_range(0..N), rng.random_range(0..N));
            let occupied = board.ship_at(r, c).is_some();
            let result = board.attack(r, c).unwrap();
            prop_assert_eq!(result.is_hit(), occupied);
            prop_assert!(board.is_attacked(r, c));
            if let AttackResult::Sunk(_) = result {
                sinks += 1;
            }
        }

        let hit_cells = (board.ship_map() & board.attacks()).count_ones();
        let total_damage: usize = ships.iter().map(Ship::damage).sum();
        prop_assert_eq!(total_damage, hit_cells);
        for ship in &ships {
            prop_assert!(ship.damage() <= ship.length());
        }
        let afloat = ships.iter().filter(|s| !s.is_sunk()).count();
        prop_assert_eq!(board.ships_remaining(), afloat);
        prop_assert_eq!(sinks, ships.len() - afloat);
    }

    #[test]
    fn repeat_attack_changes_nothing(seed in any::<u64>(), row in 0..N, col in 0..N) {
        let ships = fleet();
        let mut board = Board::new();
        let mut rng = SmallRng::seed_from_u64(seed);
        place_randomly(&mut board, &ships, &mut rng);

        let first = board.attack(row, col).unwrap();
        let damage: Vec<usize> = ships.iter().map(Ship::damage).collect();
        let remaining = board.ships_remaining();
        let attacks = board.attacks();

        let second = board.attack(row, col).unwrap();
        prop_assert_eq!(second.is_hit(), first.is_hit());
        prop_assert!(!matches!(second, AttackResult::Sunk(_)));
        prop_assert_eq!(ships.iter().map(Ship::damage).collect::<Vec<_>>(), damage);
        prop_assert_eq!(board.ships_remaining(), remaining);
        prop_assert_eq!(board.attacks(), attacks);
    }
}
