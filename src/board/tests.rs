use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
}

#[test]
fn test_player_numbers() {
    assert_eq!(Player::One.number(), 1);
    assert_eq!(Player::Two.number(), 2);
    assert_eq!(Player::from_number(1), Some(Player::One));
    assert_eq!(Player::from_number(2), Some(Player::Two));
    assert_eq!(Player::from_number(0), None);
    assert_eq!(Player::from_number(3), None);
}

#[test]
fn test_cell_player_roundtrip() {
    assert_eq!(Player::One.cell().player(), Some(Player::One));
    assert_eq!(Player::Two.cell().player(), Some(Player::Two));
    assert_eq!(Cell::Empty.player(), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 28);

    let pos2 = Pos::from_index(28);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
}

#[test]
fn test_pos_step_bounds_row_and_col_independently() {
    // Diagonal off the right edge while the row is still in range
    assert_eq!(Pos::new(3, 7).step(1, 1), None);
    // Diagonal off the bottom edge while the column is still in range
    assert_eq!(Pos::new(7, 3).step(1, -1), None);
    assert_eq!(Pos::new(0, 0).step(-1, 0), None);
    assert_eq!(Pos::new(3, 3).step(1, 1), Some(Pos::new(4, 4)));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(TOTAL_CELLS, 64);
    assert_eq!(DIRECTIONS.len(), 8);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 7).to_index(), 7);
    assert_eq!(Pos::new(7, 0).to_index(), 56);
    assert_eq!(Pos::new(7, 7).to_index(), 63);
}

#[test]
fn test_initial_board() {
    let board = Board::initial();
    assert_eq!(board.get(Pos::new(3, 3)), Cell::Player2);
    assert_eq!(board.get(Pos::new(3, 4)), Cell::Player1);
    assert_eq!(board.get(Pos::new(4, 3)), Cell::Player1);
    assert_eq!(board.get(Pos::new(4, 4)), Cell::Player2);
    assert_eq!(board.disc_count(), 4);
    assert_eq!(board.count(Player::One), 2);
    assert_eq!(board.count(Player::Two), 2);
}

#[test]
fn test_place_replaces_disc() {
    let mut board = Board::new();
    board.place(Pos::new(0, 0), Player::One);
    board.place(Pos::new(0, 0), Player::Two);
    assert_eq!(board.get(Pos::new(0, 0)), Cell::Player2);
    assert_eq!(board.disc_count(), 1);

    board.remove(Pos::new(0, 0));
    assert!(board.is_empty(Pos::new(0, 0)));
}

#[test]
fn test_cells_roundtrip() {
    let board = Board::initial();
    let cells = board.cells();
    assert_eq!(cells[27], Cell::Player2);
    assert_eq!(cells[28], Cell::Player1);
    assert_eq!(Board::from_cells(&cells), board);
}

#[test]
fn test_parse_board() {
    let board: Board = "
        ........
        ........
        ........
        ...21...
        ...12...
        ........
        ........
        ........
    "
    .parse()
    .unwrap();
    assert_eq!(board, Board::initial());
}

#[test]
fn test_parse_board_errors() {
    assert_eq!(
        "..z".parse::<Board>(),
        Err(BoardParseError::InvalidChar('z'))
    );
    assert_eq!(
        "....".parse::<Board>(),
        Err(BoardParseError::WrongCellCount(4))
    );
}

#[test]
fn test_display_round_trips() {
    let mut board = Board::initial();
    board.place(Pos::new(0, 0), Player::One);
    board.place(Pos::new(7, 3), Player::Two);
    for b in [Board::new(), Board::initial(), board] {
        assert_eq!(b.to_string().parse::<Board>().unwrap(), b);
    }
    assert_eq!(
        Board::initial().to_string().lines().nth(3),
        Some(". . . 2 1 . . .")
    );
}

#[test]
fn test_full_board() {
    let mut board = Board::new();
    for idx in 0..TOTAL_CELLS {
        board.place(Pos::from_index(idx), Player::One);
    }
    assert!(board.is_full());
    assert_eq!(board.disc_count(), 64);
}

#[test]
fn test_placed_between() {
    let before = Board::initial();
    let mut after = before;
    after.place(Pos::new(2, 3), Player::One);
    after.place(Pos::new(3, 3), Player::One);
    assert_eq!(before.placed_between(&after), Some(Pos::new(2, 3)));
    assert_eq!(before.placed_between(&before), None);
}

#[test]
fn test_bitboard_iter_row_major() {
    let bb: Bitboard = [Pos::new(7, 7), Pos::new(0, 1), Pos::new(3, 2)]
        .into_iter()
        .collect();
    let order: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(order, vec![Pos::new(0, 1), Pos::new(3, 2), Pos::new(7, 7)]);
    assert_eq!(bb.count(), 3);
}
