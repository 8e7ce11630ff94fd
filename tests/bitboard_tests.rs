use bingo::{BitBoard, BitBoardError, CardBoard};

#[test]
fn test_try_new_sizes() {
    // the card fits in 32 bits
    assert!(CardBoard::try_new().is_ok());

    // Failure when board is too large
    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_row_col_and_index_agree() {
    let mut bb = CardBoard::new();
    assert!(bb.is_empty());

    bb.set(2, 0).unwrap();
    assert!(bb.get_index(10).unwrap());

    bb.set_index(24).unwrap();
    assert!(bb.get(4, 4).unwrap());
    assert_eq!(bb.count_ones(), 2);
}

#[test]
fn test_out_of_bounds() {
    let mut bb = CardBoard::new();
    assert_eq!(
        bb.set_index(25),
        Err(BitBoardError::PositionOutOfBounds { index: 25 })
    );
    assert_eq!(
        bb.get(5, 0),
        Err(BitBoardError::IndexOutOfBounds { row: 5, col: 0 })
    );
}

#[test]
fn test_contains_all_and_iter() {
    let row = CardBoard::from_indices([0, 1, 2, 3, 4]).unwrap();
    let mut marks = CardBoard::from_indices([0, 1, 2, 3, 12]).unwrap();
    assert!(!marks.contains_all(row));
    marks.set_index(4).unwrap();
    assert!(marks.contains_all(row));
    let bits: Vec<_> = marks.iter_set_bits().collect();
    assert_eq!(bits, vec![0, 1, 2, 3, 4, 12]);
    assert_eq!((!row & marks).iter_set_bits().collect::<Vec<_>>(), vec![12]);
}
