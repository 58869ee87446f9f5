//! Integration test to ensure a game can start from a generated dungeon.

use tombs::{GameCompletionState, GameState, GenerationConfig, Rgb, TombsResult};

#[test]
fn test_basic_startup() -> TombsResult<()> {
    let config = GenerationConfig::new(12345);
    let game_state = GameState::new(&config)?;

    assert_eq!(game_state.turn_number, 0);
    assert_eq!(game_state.completion_state, GameCompletionState::Playing);
    assert_eq!(game_state.rng_seed, 12345);
    assert!(game_state.inventory.is_empty());

    let player_pos = game_state.player_position();
    assert!(!game_state.grid.is_blocked_tile(player_pos));
    assert!(game_state.is_in_fov(player_pos));
    assert!(game_state.grid.is_explored(player_pos));
    assert_eq!(game_state.player_hp(), (30, 30));
    Ok(())
}

#[test]
fn test_welcome_message_is_wrapped() -> TombsResult<()> {
    let game_state = GameState::new(&GenerationConfig::new(1))?;
    let lines: Vec<_> = game_state.messages.iter().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.color == Rgb::RED));
    assert!(lines.iter().all(|line| line.text.chars().count() <= 58));
    let joined = lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(
        joined,
        "Welcome stranger! Prepare to perish in the Tombs of the Ancient Kings."
    );
    Ok(())
}

#[test]
fn test_nothing_blocks_the_spawn() -> TombsResult<()> {
    for seed in 0..20 {
        let game_state = GameState::new(&GenerationConfig::new(seed))?;
        let player_pos = game_state.player_position();
        let others_on_spawn = game_state
            .entities
            .iter()
            .filter(|entity| entity.id != game_state.player_id)
            .filter(|entity| entity.blocks && entity.position == player_pos)
            .count();
        assert_eq!(others_on_spawn, 0, "seed {}", seed);
    }
    Ok(())
}

#[test]
fn test_same_seed_same_start() -> TombsResult<()> {
    let a = GameState::new(&GenerationConfig::new(2024))?;
    let b = GameState::new(&GenerationConfig::new(2024))?;

    assert_eq!(a.grid, b.grid);
    assert_eq!(a.player_position(), b.player_position());
    assert_eq!(a.entities.len(), b.entities.len());
    Ok(())
}
