//! Property tests over generated games and random play.

use proptest::prelude::*;
use std::io::Write;
use tombs::{
    reachable_from, GameCompletionState, GameState, GenerationConfig, PlayerAction, TombsError,
};

fn action_from(code: u8) -> PlayerAction {
    match code % 6 {
        0 => PlayerAction::Move { dx: 0, dy: -1 },
        1 => PlayerAction::Move { dx: 0, dy: 1 },
        2 => PlayerAction::Move { dx: -1, dy: 0 },
        3 => PlayerAction::Move { dx: 1, dy: 0 },
        4 => PlayerAction::PickUp,
        _ => PlayerAction::UseItem(0),
    }
}

fn check_invariants(game_state: &GameState) -> Result<(), TestCaseError> {
    let (hp, max_hp) = game_state.player_hp();
    prop_assert!((0..=max_hp).contains(&hp));
    prop_assert_eq!(
        game_state.completion_state == GameCompletionState::Dead,
        hp == 0
    );
    prop_assert!(game_state.inventory.len() <= 26);
    prop_assert!(game_state.messages.len() <= game_state.messages.capacity());

    for pos in game_state.fov.visible_positions() {
        prop_assert!(game_state.grid.is_explored(pos));
    }

    let blockers: Vec<_> = game_state
        .entities
        .iter()
        .filter(|entity| entity.blocks)
        .collect();
    for (i, entity) in blockers.iter().enumerate() {
        prop_assert!(!game_state.grid.is_blocked_tile(entity.position));
        for other in &blockers[i + 1..] {
            prop_assert_ne!(entity.position, other.position);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn random_play_keeps_state_consistent(
        seed in any::<u64>(),
        codes in prop::collection::vec(any::<u8>(), 0..120),
    ) {
        let mut game_state = GameState::new(&GenerationConfig::new(seed)).unwrap();
        check_invariants(&game_state)?;

        for code in codes {
            let explored_before: Vec<_> = game_state
                .grid
                .positions()
                .filter(|pos| game_state.grid.is_explored(*pos))
                .collect();

            // UseItem on an empty slot is the only expected error
            if let Err(e) = game_state.handle_action(action_from(code)) {
                prop_assert!(matches!(e, TombsError::InvalidAction(_)));
            }
            check_invariants(&game_state)?;

            for pos in explored_before {
                prop_assert!(game_state.grid.is_explored(pos));
            }
        }
    }

    #[test]
    fn every_floor_tile_reachable_from_spawn(seed in any::<u64>()) {
        let game_state = GameState::new(&GenerationConfig::new(seed)).unwrap();
        let reachable = reachable_from(&game_state.grid, game_state.player_position());
        // every carved tile belongs to a room or a tunnel joined to the spawn
        prop_assert_eq!(reachable.len(), game_state.grid.floor_count());
    }
}

#[test]
fn test_game_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let mut config = GenerationConfig::for_testing(31);
    config.max_monsters_per_room = 0;
    config.max_items_per_room = 0;
    write!(file, "{}", serde_json::to_string_pretty(&config).unwrap()).unwrap();

    let loaded = GenerationConfig::from_json_file(file.path()).unwrap();
    let game_state = GameState::new(&loaded).unwrap();

    assert_eq!(game_state.grid.width, 40);
    assert_eq!(game_state.grid.height, 25);
    assert_eq!(game_state.entities.len(), 1);
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let mut config = GenerationConfig::new(1);
    config.min_room_size = 20;
    write!(file, "{}", serde_json::to_string(&config).unwrap()).unwrap();

    assert!(matches!(
        GenerationConfig::from_json_file(file.path()),
        Err(TombsError::GenerationFailed(_))
    ));
}
