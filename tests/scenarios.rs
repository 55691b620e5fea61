use hanoi_solitaire::cards::{parse_cards, Card, Rank, RankParseError, Suit};
use hanoi_solitaire::engine::SolitaireEngine;
use hanoi_solitaire::game::HanoiGame;

fn layout(p0: &str, p1: &str, p2: &str) -> HanoiGame {
    HanoiGame::from_layout([
        parse_cards(p0).unwrap(),
        parse_cards(p1).unwrap(),
        parse_cards(p2).unwrap(),
    ])
    .unwrap()
}

fn values(game: &HanoiGame, idx: usize) -> Vec<u8> {
    game.piles()[idx].cards().iter().map(|c| c.value()).collect()
}

#[test]
fn final_ace_completes_the_tower() {
    let mut game = layout("9 8 7 6 5 4 3 2", "A", "");
    assert!(!game.is_game_won());
    assert!(game.make_move(1, 0));
    assert!(game.is_game_won());
    assert_eq!(game.move_count(), 1);
}

#[test]
fn smaller_card_moves_onto_larger() {
    let mut game = layout("5", "9", "");
    assert!(game.is_valid_move(0, 1));
    assert!(game.make_move(0, 1));
    assert!(game.piles()[0].is_empty());
    assert_eq!(values(&game, 1), vec![9, 5]);
}

#[test]
fn larger_card_cannot_cover_smaller() {
    let mut game = layout("9", "A", "");
    let before = game.piles().clone();
    assert!(!game.is_valid_move(0, 1));
    assert!(!game.make_move(0, 1));
    assert_eq!(game.piles(), &before);
    assert_eq!(game.move_count(), 0);
    assert!(game.history().is_empty());
}

#[test]
fn three_moves_then_three_undos_restore_the_deal() {
    let mut game = layout("9 5 A", "8 6 2", "7 4 3");
    let before = game.piles().clone();

    assert!(game.make_move(0, 1)); // A onto 2
    assert!(game.make_move(2, 0)); // 3 onto 5
    assert!(game.make_move(1, 0)); // A onto 3
    assert_eq!(game.move_count(), 3);
    assert_eq!(values(&game, 0), vec![9, 5, 3, 1]);

    assert!(game.undo());
    assert!(game.undo());
    assert!(game.undo());
    assert_eq!(game.piles(), &before);
    assert_eq!(game.move_count(), 0);
    assert!(!game.undo());
}

#[test]
fn card_values_and_invalid_rank() {
    assert_eq!(Card::from_rank_str("A", Suit::Hearts).unwrap().value(), 1);
    assert_eq!(Card::from_rank_str("9", Suit::Clubs).unwrap().value(), 9);
    assert_eq!(
        Card::from_rank_str("10", Suit::Hearts),
        Err(RankParseError::InvalidRank("10".to_string()))
    );
}

#[test]
fn moves_onto_empty_pile_are_always_legal() {
    for rank in Rank::ALL {
        let game =
            HanoiGame::from_layout([vec![Card::new(rank, Suit::Hearts)], Vec::new(), Vec::new()])
                .unwrap();
        assert!(game.is_valid_move(0, 1), "{rank} onto empty pile");
        assert!(game.is_valid_move(0, 2), "{rank} onto empty pile");
    }
}

#[test]
fn out_of_range_and_same_pile_are_invalid() {
    let game = HanoiGame::with_seed(3);
    for i in 0..3 {
        assert!(!game.is_valid_move(i, i));
        assert!(!game.is_valid_move(i, 3));
        assert!(!game.is_valid_move(3, i));
        assert!(!game.is_valid_move(usize::MAX, i));
    }
}

#[test]
fn empty_source_is_invalid() {
    let game = layout("", "5", "");
    assert!(!game.is_valid_move(0, 1));
    assert!(!game.is_valid_move(2, 1));
}

#[test]
fn wrong_order_or_split_tower_is_not_a_win() {
    assert!(!layout("A 2 3 4 5 6 7 8 9", "", "").is_game_won());
    assert!(!layout("5 9 2 7 A 8 3 6 4", "", "").is_game_won());
    assert!(!layout("9 8 7 6 5", "4 3 2 A", "").is_game_won());
    assert!(!layout("9 8 7 6 5", "", "").is_game_won());
    assert!(!layout("", "", "").is_game_won());
    assert!(layout("", "", "9 8 7 6 5 4 3 2 A").is_game_won());
}

fn play<E: SolitaireEngine>(engine: &mut E, moves: &[(usize, usize)]) -> usize {
    moves.iter().filter(|(from, to)| engine.make_move(*from, *to)).count()
}

#[test]
fn engine_trait_drives_a_short_solve() {
    let mut game = layout("9 8 7 6 5 4", "3", "2 A");
    // The first attempt puts 4 on 3 and is refused.
    let applied = play(&mut game, &[(0, 1), (1, 0), (2, 1), (2, 0), (1, 0)]);
    assert_eq!(applied, 4);
    assert!(SolitaireEngine::is_game_won(&game));
    assert_eq!(SolitaireEngine::move_count(&game), 4);
    assert!(SolitaireEngine::undo(&mut game));
    assert!(SolitaireEngine::redo(&mut game));
    assert!(game.is_game_won());
}
