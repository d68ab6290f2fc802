//! Round-trip and consistency properties over every cell of many board sizes.

use strictly_coords::{
    BoardSize, Coord, CoordErrorKind, CoordFormat, CoordValue, GtpVertex, KGS_COLUMNS, convert,
    from_flat, from_gtp, from_kgs, from_sgf, to_flat, to_gtp, to_kgs, to_sgf,
};

const FORMATS: [CoordFormat; 5] = [
    CoordFormat::Canonical,
    CoordFormat::Flat,
    CoordFormat::Sgf,
    CoordFormat::Kgs,
    CoordFormat::Gtp,
];

fn sizes(max: usize) -> impl Iterator<Item = BoardSize> {
    (1..=max).map(|n| BoardSize::new(n).unwrap())
}

#[test]
fn test_flat_sgf_gtp_round_trip_all_sizes() {
    for size in sizes(BoardSize::MAX) {
        for coord in size.cells() {
            let c = Some(coord);
            assert_eq!(from_flat(to_flat(c, size).unwrap(), size).unwrap(), c);
            assert_eq!(from_sgf(&to_sgf(c, size).unwrap(), size).unwrap(), c);
            assert_eq!(from_gtp(to_gtp(c, size).unwrap(), size).unwrap(), c);
        }
    }
}

#[test]
fn test_kgs_round_trip_up_to_alphabet() {
    for size in sizes(KGS_COLUMNS.len()) {
        for coord in size.cells() {
            let c = Some(coord);
            assert_eq!(from_kgs(&to_kgs(c, size).unwrap(), size).unwrap(), c, "{} on {}", coord, size);
        }
    }
}

#[test]
fn test_pass_fixpoint() {
    for size in sizes(BoardSize::MAX) {
        assert_eq!(from_flat(to_flat(None, size).unwrap(), size).unwrap(), None);
        assert_eq!(from_sgf(&to_sgf(None, size).unwrap(), size).unwrap(), None);
        assert_eq!(from_kgs(&to_kgs(None, size).unwrap(), size).unwrap(), None);
        assert_eq!(from_gtp(to_gtp(None, size).unwrap(), size).unwrap(), None);
    }
}

#[test]
fn test_flat_is_bijective_with_pass_slot() {
    for size in sizes(13) {
        let mut seen = std::collections::HashSet::new();
        for flat in 0..=size.pass_index() {
            assert!(seen.insert(from_flat(flat, size).unwrap()));
        }
        assert_eq!(seen.len(), size.cell_count() + 1);
    }
}

#[test]
fn test_row_inversion_symmetry() {
    for size in sizes(KGS_COLUMNS.len()) {
        let n = size.get();
        for row in 0..n {
            let c = Some(Coord::new(row, 0));
            let kgs = to_kgs(c, size).unwrap();
            assert_eq!(kgs[1..].parse::<usize>().unwrap(), n - row);
            match to_gtp(c, size).unwrap() {
                GtpVertex::Point { col, row: gtp_row } => {
                    assert_eq!(col, 1);
                    assert_eq!(gtp_row, n - row);
                }
                other => panic!("Expected a point, got {}", other),
            }
            assert_eq!(from_kgs(&kgs, size).unwrap(), c);
        }
    }
}

#[test]
fn test_pivot_consistency() {
    let size = BoardSize::new(9).unwrap();
    for coord in size.cells().map(Some).chain(std::iter::once(None)) {
        for from in FORMATS {
            let value = CoordValue::from_canonical(coord, from, size).unwrap();
            for to in FORMATS {
                let direct = CoordValue::from_canonical(value.to_canonical(size).unwrap(), to, size)
                    .unwrap();
                assert_eq!(convert(&value, to, size).unwrap(), direct);
                assert_eq!(convert(&value, to, size).unwrap().to_canonical(size).unwrap(), coord);
            }
        }
    }
}

#[test]
fn test_text_round_trip_through_display() {
    let size = BoardSize::new(9).unwrap();
    for coord in size.cells().map(Some).chain(std::iter::once(None)) {
        for format in FORMATS {
            let value = CoordValue::from_canonical(coord, format, size).unwrap();
            let parsed = CoordValue::parse(&value.to_string(), format).unwrap();
            assert_eq!(parsed, value);
        }
    }
}

#[test]
fn test_out_of_domain_inputs_fail() {
    let size = BoardSize::new(9).unwrap();
    let off_board = CoordValue::Canonical(Some(Coord::new(9, 0)));
    let err = convert(&off_board, CoordFormat::Flat, size).unwrap_err();
    assert!(matches!(err.kind(), CoordErrorKind::OffBoard(_, 9)));

    let err = convert(&CoordValue::Flat(82), CoordFormat::Sgf, size).unwrap_err();
    assert_eq!(err.kind(), &CoordErrorKind::IndexOutOfRange { index: 82, size: 9 });

    assert!(convert(&CoordValue::Kgs("K1".to_string()), CoordFormat::Flat, size).is_err());
    assert!(convert(&CoordValue::Sgf("jj".to_string()), CoordFormat::Flat, size).is_err());
    assert!(convert(&CoordValue::Gtp(GtpVertex::point(10, 1)), CoordFormat::Flat, size).is_err());
}
