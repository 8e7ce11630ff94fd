use bingo::{check_win, completed_lines, LineKind, MarkState, CELL_COUNT, FREE_CELL, LINES};
use proptest::prelude::*;

fn marks_from(positions: &[usize]) -> MarkState {
    let mut marks = MarkState::new();
    for &p in positions {
        marks.mark(p).unwrap();
    }
    marks
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn first_complete_line_reported(positions in proptest::collection::vec(0..CELL_COUNT, 0..20)) {
        let marks = marks_from(&positions);
        let expected = LINES
            .iter()
            .find(|line| line.positions.iter().all(|&p| marks.is_marked(p as usize)))
            .copied();
        prop_assert_eq!(check_win(&marks), expected);
        prop_assert_eq!(completed_lines(&marks).next(), expected);
    }

    #[test]
    fn win_appears_exactly_when_line_completes(line_idx in 0..LINES.len()) {
        let line = LINES[line_idx];
        let mut marks = MarkState::new();
        let open: Vec<usize> = line
            .positions
            .iter()
            .map(|&p| p as usize)
            .filter(|&p| p != FREE_CELL)
            .collect();
        let (last, rest) = open.split_last().unwrap();
        for &p in rest {
            marks.mark(p).unwrap();
            prop_assert_eq!(check_win(&marks), None);
        }
        marks.mark(*last).unwrap();
        prop_assert_eq!(check_win(&marks), Some(line));
    }
}

#[test]
fn top_row_plus_free_cell() {
    let marks = marks_from(&[0, 1, 2, 3, 4]);
    assert_eq!(check_win(&marks).unwrap().kind, LineKind::Row(0));
}

#[test]
fn missing_column_blocks_rows() {
    // every row missing its last cell
    let positions: Vec<usize> = (0..5).flat_map(|r| (0..4).map(move |c| r * 5 + c)).collect();
    let marks = marks_from(&positions);
    assert!(completed_lines(&marks).all(|l| matches!(l.kind, LineKind::Column(c) if c < 4)));
    assert_eq!(check_win(&marks).unwrap().kind, LineKind::Column(0));

    let sparse = marks_from(&[0, 1, 2, 3, 5, 10, 15, 6, 18]);
    assert_eq!(check_win(&sparse), None);
}

#[test]
fn simultaneous_lines_report_first() {
    // position 4 closes row 0 and column 4 together
    let mut marks = marks_from(&[0, 1, 2, 3, 9, 14, 19, 24]);
    assert_eq!(check_win(&marks), None);
    marks.mark(4).unwrap();
    assert_eq!(check_win(&marks).unwrap().kind, LineKind::Row(0));
    let kinds: Vec<LineKind> = completed_lines(&marks).map(|l| l.kind).collect();
    assert_eq!(kinds, vec![LineKind::Row(0), LineKind::Column(4)]);
}
