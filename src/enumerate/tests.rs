use super::{OperandLists, Partitions, piece_readings, validate_digit_string};
use crate::algebra::Span;
use crate::rational::Rational;

#[test]
fn test_validate_digit_string() {
    assert!(validate_digit_string("123").is_ok());
    assert!(validate_digit_string("").is_ok());
    assert!(validate_digit_string("12a3").is_err());
    assert!(validate_digit_string("1 3").is_err());
    assert!(validate_digit_string("-13").is_err());
}

#[test]
fn test_partition_counts() {
    for (len, expected) in [(0, 1), (1, 1), (2, 2), (3, 4), (4, 8), (5, 16)] {
        assert_eq!(Partitions::new(len).count(), expected, "len {len}");
    }
}

#[test]
fn test_partitions_cover_the_string() {
    for partition in Partitions::new(4) {
        let mut position = 0;
        for &(start, end) in &partition {
            assert_eq!(start, position);
            assert!(end > start);
            position = end;
        }
        assert_eq!(position, 4);
    }
}

#[test]
fn test_empty_string_has_one_empty_partition() {
    let partitions: Vec<_> = Partitions::new(0).collect();
    assert_eq!(partitions, vec![vec![]]);
}

#[test]
fn test_readings_of_plain_piece() {
    let readings = piece_readings("123", 0, 3);
    let texts: Vec<_> = readings.iter().map(|e| e.text().to_string()).collect();
    assert_eq!(texts, ["123", "1.23", "12.3"]);
    for expr in &readings {
        assert_eq!(expr.span(), Span::new(0, 3));
        assert_eq!(expr.ops(), 0);
    }
}

#[test]
fn test_readings_of_zero_piece() {
    let readings = piece_readings("0", 0, 1);
    let texts: Vec<_> = readings.iter().map(|e| e.text().to_string()).collect();
    assert_eq!(texts, ["0"]);
}

#[test]
fn test_leading_zero_piece_reads_as_decimal_only() {
    let readings = piece_readings("07", 0, 2);
    let texts: Vec<_> = readings.iter().map(|e| e.text().to_string()).collect();
    assert_eq!(texts, ["0.7"]);
}

#[test]
fn test_double_zero_never_reads_as_literal_zero_zero() {
    // "00" as one piece reads only as "0.0"; as two pieces, as 0 and 0.
    let mut lists = OperandLists::new("00").unwrap();
    let whole = lists.next().unwrap();
    assert_eq!(whole.len(), 1);
    assert_eq!(whole[0].text(), "0.0");

    let split = lists.next().unwrap();
    let texts: Vec<_> = split.iter().map(|e| e.text().to_string()).collect();
    assert_eq!(texts, ["0", "0"]);
    assert!(lists.next().is_none());
}

#[test]
fn test_operand_lists_for_two_digits() {
    let lists: Vec<Vec<String>> = OperandLists::new("12")
        .unwrap()
        .map(|list| list.iter().map(|e| e.text().to_string()).collect())
        .collect();
    assert_eq!(
        lists,
        vec![
            vec!["12".to_string()],
            vec!["1.2".to_string()],
            vec!["1".to_string(), "2".to_string()],
        ]
    );
}

#[test]
fn test_operand_list_spans_record_digit_ranges() {
    let list = OperandLists::new("12")
        .unwrap()
        .last()
        .unwrap();
    assert_eq!(list[0].span(), Span::new(0, 1));
    assert_eq!(list[1].span(), Span::new(1, 2));
}

#[test]
fn test_empty_input_yields_one_empty_list() {
    let lists: Vec<_> = OperandLists::new("").unwrap().collect();
    assert_eq!(lists.len(), 1);
    assert!(lists[0].is_empty());
}

#[test]
fn test_decimal_reading_values_are_exact() {
    let list = OperandLists::new("25").unwrap().nth(1).unwrap();
    assert_eq!(
        *list[0].value(),
        Rational::new(5.into(), 2.into()).unwrap()
    );
}

#[test]
fn test_enumeration_is_deterministic() {
    let first: Vec<Vec<String>> = OperandLists::new("207")
        .unwrap()
        .map(|list| list.iter().map(|e| e.text().to_string()).collect())
        .collect();
    let second: Vec<Vec<String>> = OperandLists::new("207")
        .unwrap()
        .map(|list| list.iter().map(|e| e.text().to_string()).collect())
        .collect();
    assert_eq!(first, second);
}
