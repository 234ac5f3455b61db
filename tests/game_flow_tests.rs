//! Game Flow Integration Tests
//!
//! Tests for full game flows including:
//! - Turn alternation and ownership
//! - Castling, en passant and promotion through the game controller
//! - Own-king safety
//! - Check and checkmate detection

use chess_rules::{
    Board, CastlingSide, Color, Game, GameStatus, MoveKind, Piece, PieceKind, PromotionChoice,
    RulesError, Square,
};

fn sq(text: &str) -> Square {
    text.parse().expect("test squares are valid")
}

/// Build a game from `(piece, square)` pairs with `turn` to move
fn create_test_game(pieces: &[(Piece, &str)], turn: Color) -> Game {
    let mut board = Board::empty();
    for &(piece, square) in pieces {
        board.place_piece(sq(square), piece);
    }
    Game::from_board(board, turn)
}

fn play_all(game: &mut Game, moves: &[&str]) {
    for mv in moves {
        assert!(game.make_move(mv), "{mv} should be accepted");
    }
}

// ============================================================================
// Turn Tests
// ============================================================================

#[test]
fn test_double_advance_passes_turn_and_sets_target() {
    let mut game = Game::new();

    assert!(game.make_move("e2 e4"));
    assert_eq!(game.current_turn(), Color::Black);
    assert_eq!(game.board().en_passant_target(), Some(sq("e3")));
    assert_eq!(game.board().get_piece(sq("e4")), Some(Piece::pawn(Color::White)));
    assert!(game.board().is_empty(sq("e2")));
}

#[test]
fn test_black_cannot_move_on_whites_turn() {
    let mut game = Game::new();
    let before = game.board().clone();

    assert!(!game.make_move("e7 e5"));
    assert_eq!(game.current_turn(), Color::White, "Turn must stay with White");
    assert_eq!(game.board(), &before, "Board must be untouched");
    assert!(matches!(
        game.try_move(sq("e7"), sq("e5")),
        Err(RulesError::WrongTurn { .. })
    ));
}

#[test]
fn test_malformed_and_empty_moves_are_rejected() {
    let mut game = Game::new();

    assert!(!game.make_move("e2"));
    assert!(!game.make_move("z9 e4"));
    assert!(!game.make_move("e3 e4"), "No piece on e3");
    assert!(!game.make_move("e2 e5"), "Pawns cannot move three squares");
    assert_eq!(game.current_turn(), Color::White);
    assert!(game.history().is_empty());
}

// ============================================================================
// Castling Tests
// ============================================================================

#[test]
fn test_kingside_castling_moves_rook() {
    let mut game = create_test_game(
        &[
            (Piece::king(Color::White), "e1"),
            (Piece::rook(Color::White), "h1"),
            (Piece::king(Color::Black), "e8"),
        ],
        Color::White,
    );

    assert!(game.make_move("e1 g1"));
    let board = game.board();
    assert_eq!(board.get_piece(sq("g1")), Some(Piece::king(Color::White)));
    assert_eq!(board.get_piece(sq("f1")), Some(Piece::rook(Color::White)));
    assert!(board.is_empty(sq("e1")));
    assert!(board.is_empty(sq("h1")));
    assert_eq!(
        game.history().last().map(|record| record.kind),
        Some(MoveKind::Castle(CastlingSide::Kingside))
    );
}

#[test]
fn test_queenside_castling_from_opening() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            "d2 d4", "d7 d5", "b1 c3", "b8 c6", "c1 f4", "c8 f5", "d1 d2", "d8 d7",
        ],
    );

    assert!(game.make_move("e1 c1"));
    assert!(game.make_move("e8 c8"));

    let board = game.board();
    assert_eq!(board.get_piece(sq("c1")), Some(Piece::king(Color::White)));
    assert_eq!(board.get_piece(sq("d1")), Some(Piece::rook(Color::White)));
    assert_eq!(board.get_piece(sq("c8")), Some(Piece::king(Color::Black)));
    assert_eq!(board.get_piece(sq("d8")), Some(Piece::rook(Color::Black)));
    assert!(board.is_empty(sq("a1")));
    assert!(board.is_empty(sq("a8")));
}

#[test]
fn test_castling_rejected_while_in_check() {
    let mut game = create_test_game(
        &[
            (Piece::king(Color::White), "e1"),
            (Piece::rook(Color::White), "h1"),
            (Piece::rook(Color::Black), "e7"),
            (Piece::king(Color::Black), "a8"),
        ],
        Color::White,
    );

    assert!(game.is_in_check(Color::White));
    assert!(!game.make_move("e1 g1"));
    assert_eq!(game.current_turn(), Color::White);
}

#[test]
fn test_castling_rejected_with_piece_between() {
    let mut game = Game::new();
    assert!(!game.make_move("e1 g1"), "Bishop and knight still on f1/g1");
    play_all(&mut game, &["g1 f3", "a7 a6"]);
    assert!(!game.make_move("e1 g1"), "Bishop still on f1");
}

#[test]
fn test_castling_rejected_without_rook() {
    let mut game = create_test_game(
        &[
            (Piece::king(Color::White), "e1"),
            (Piece::knight(Color::White), "h1"),
            (Piece::king(Color::Black), "e8"),
        ],
        Color::White,
    );

    assert!(!game.make_move("e1 g1"));
}

#[test]
fn test_castling_rejected_after_king_has_moved() {
    let mut game = create_test_game(
        &[
            (Piece::king(Color::White), "e1"),
            (Piece::rook(Color::White), "h1"),
            (Piece::king(Color::Black), "a8"),
        ],
        Color::White,
    );
    play_all(&mut game, &["e1 f1", "a8 b8", "f1 e1", "b8 a8"]);

    assert!(!game.make_move("e1 g1"));
}

// ============================================================================
// En Passant Tests
// ============================================================================

#[test]
fn test_en_passant_removes_captured_pawn() {
    let mut game = Game::new();
    play_all(&mut game, &["e2 e4", "a7 a6", "e4 e5", "d7 d5"]);
    assert_eq!(game.board().en_passant_target(), Some(sq("d6")));

    assert!(game.make_move("e5 d6"));

    let board = game.board();
    assert_eq!(board.get_piece(sq("d6")), Some(Piece::pawn(Color::White)));
    assert!(board.is_empty(sq("d5")), "Captured pawn must be removed");
    assert!(board.is_empty(sq("e5")));

    let record = game.history().last().expect("move was recorded");
    assert_eq!(record.kind, MoveKind::EnPassant);
    assert_eq!(record.captured, Some(Piece::pawn(Color::Black)));
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &["e2 e4", "a7 a6", "e4 e5", "d7 d5", "h2 h3", "h7 h6"],
    );

    assert_eq!(game.board().en_passant_target(), None);
    assert!(!game.make_move("e5 d6"));
}

// ============================================================================
// Promotion Tests
// ============================================================================

fn promotion_game() -> Game {
    create_test_game(
        &[
            (Piece::pawn(Color::White), "a7"),
            (Piece::king(Color::White), "e1"),
            (Piece::king(Color::Black), "h6"),
        ],
        Color::White,
    )
}

#[test]
fn test_promotion_with_prompt() {
    let mut game = promotion_game();

    assert!(game.play("a7 a8", &mut PromotionChoice::Knight));

    assert_eq!(game.board().get_piece(sq("a8")), Some(Piece::knight(Color::White)));
    assert_eq!(game.pending_promotion(), None);
    assert_eq!(game.current_turn(), Color::Black);
    assert_eq!(
        game.history().last().and_then(|record| record.promoted_to),
        Some(PieceKind::Knight)
    );
}

#[test]
fn test_promotion_blocks_until_completed() {
    let mut game = promotion_game();

    assert!(game.make_move("a7 a8"));
    assert!(game.pending_promotion().is_some());
    assert!(
        !game.make_move("h6 h5"),
        "No move is accepted while a pawn waits"
    );

    let promoted = game
        .complete_promotion(PromotionChoice::from_response("2"))
        .expect("a promotion is pending");
    assert_eq!(promoted, Piece::rook(Color::White));
    assert!(game.make_move("h6 h5"));
}

#[test]
fn test_unrecognised_promotion_answer_means_queen() {
    let mut game = promotion_game();
    assert!(game.make_move("a7 a8"));

    game.complete_promotion(PromotionChoice::from_response("dragon"))
        .expect("a promotion is pending");
    assert_eq!(game.board().get_piece(sq("a8")), Some(Piece::queen(Color::White)));
}

// ============================================================================
// King Safety Tests
// ============================================================================

#[test]
fn test_pinned_piece_cannot_move() {
    let mut game = create_test_game(
        &[
            (Piece::king(Color::White), "e1"),
            (Piece::bishop(Color::White), "e2"),
            (Piece::rook(Color::Black), "e8"),
            (Piece::king(Color::Black), "a8"),
        ],
        Color::White,
    );

    assert!(matches!(
        game.try_move(sq("e2"), sq("d3")),
        Err(RulesError::LeavesKingInCheck { .. })
    ));
    assert_eq!(game.board().get_piece(sq("e2")), Some(Piece::bishop(Color::White)));
}

#[test]
fn test_king_cannot_step_into_attack() {
    let mut game = create_test_game(
        &[
            (Piece::king(Color::White), "e1"),
            (Piece::rook(Color::Black), "d8"),
            (Piece::king(Color::Black), "a8"),
        ],
        Color::White,
    );

    assert!(!game.make_move("e1 d1"));
    assert!(!game.make_move("e1 d2"));
    assert!(game.make_move("e1 f1"));
}

// ============================================================================
// Check and Checkmate Tests
// ============================================================================

#[test]
fn test_queen_and_king_mate_leaves_board_unchanged() {
    let mut board = Board::empty();
    board.place_piece(sq("e1"), Piece::king(Color::White));
    board.place_piece(sq("e2"), Piece::queen(Color::Black));
    board.place_piece(sq("d3"), Piece::king(Color::Black));
    let before = board.clone();

    assert!(board.is_in_check(Color::White));
    assert!(board.is_checkmate(Color::White));
    assert_eq!(board, before, "Checkmate search must restore every cell");
}

#[test]
fn test_unprotected_queen_is_not_mate() {
    let mut board = Board::empty();
    board.place_piece(sq("e1"), Piece::king(Color::White));
    board.place_piece(sq("e2"), Piece::queen(Color::Black));
    board.place_piece(sq("a8"), Piece::king(Color::Black));

    assert!(board.is_in_check(Color::White));
    assert!(!board.is_checkmate(Color::White), "King takes the queen");
}

#[test]
fn test_scholars_mate() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &["e2 e4", "e7 e5", "f1 c4", "b8 c6", "d1 h5", "g8 f6", "h5 f7"],
    );

    let before = game.board().clone();
    assert_eq!(game.status(), GameStatus::Checkmate);
    assert_eq!(game.board(), &before);
    assert!(!game.is_checkmate(Color::White));
}

#[test]
fn test_check_that_can_be_blocked() {
    let mut game = Game::new();
    play_all(&mut game, &["e2 e4", "f7 f6", "d1 h5"]);

    assert_eq!(game.status(), GameStatus::Check);
    assert!(game.make_move("g7 g6"));
    assert_eq!(game.status(), GameStatus::Ongoing);
}

// ============================================================================
// Snapshot Tests
// ============================================================================

#[test]
fn test_board_json_round_trip() {
    let mut game = Game::new();
    play_all(&mut game, &["e2 e4", "d7 d5", "e4 d5"]);

    let json = serde_json::to_string(game.board()).expect("board serializes");
    let restored: Board = serde_json::from_str(&json).expect("board deserializes");
    assert_eq!(&restored, game.board());
}
