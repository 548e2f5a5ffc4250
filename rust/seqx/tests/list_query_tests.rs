use seqx::{ListQueryExt, Mode, OrdinalIgnoreCase, Result, SearchExt};

fn random_source(max_len: usize, max_value: i32) -> Vec<i32> {
    let len = fastrand::usize(0..=max_len);
    (0..len).map(|_| fastrand::i32(0..max_value)).collect()
}

#[test]
fn test_insert_then_remove_at_is_identity() {
    fastrand::seed(1839471234);
    for _ in 0..500 {
        let source = random_source(20, 10);
        let index = fastrand::usize(0..=source.len()) as isize;
        let value = fastrand::i32(..);
        let round_trip: Vec<i32> = source
            .iter()
            .copied()
            .insert(index, value, Mode::Strict)
            .map(|r| r.unwrap())
            .remove_at(index, Mode::Strict)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(round_trip, source);
    }
}

#[test]
fn test_insert_modes_against_vec() {
    fastrand::seed(99281733);
    for _ in 0..500 {
        let source = random_source(12, 100);
        let len = source.len() as isize;
        let index = fastrand::isize(-3..len + 4);
        let in_range = (0..=len).contains(&index);

        let mut expected = source.clone();
        expected.insert(index.clamp(0, len) as usize, -1);

        let strict: Result<Vec<i32>> = source.iter().copied().insert(index, -1, Mode::Strict).collect();
        if in_range {
            assert_eq!(strict.unwrap(), expected);
        } else {
            assert_eq!(strict.unwrap_err().param_name(), Some("index"));
        }

        let normalized: Vec<i32> = source
            .iter()
            .copied()
            .insert(index, -1, Mode::Normalize)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(normalized, expected);

        let ignored: Vec<i32> = source
            .iter()
            .copied()
            .insert(index, -1, Mode::Ignore)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(ignored, if in_range { expected } else { source.clone() });
    }
}

#[test]
fn test_remove_at_modes_against_vec() {
    fastrand::seed(5521009);
    for _ in 0..500 {
        let source = random_source(12, 100);
        let len = source.len() as isize;
        let index = fastrand::isize(-3..len + 4);
        let in_range = (0..len).contains(&index);

        let strict: Result<Vec<i32>> = source.iter().copied().remove_at(index, Mode::Strict).collect();
        let normalized: Vec<i32> = source
            .iter()
            .copied()
            .remove_at(index, Mode::Normalize)
            .collect::<Result<_>>()
            .unwrap();
        let ignored: Vec<i32> = source
            .iter()
            .copied()
            .remove_at(index, Mode::Ignore)
            .collect::<Result<_>>()
            .unwrap();

        if source.is_empty() {
            assert!(strict.is_err());
            assert!(normalized.is_empty());
            assert!(ignored.is_empty());
            continue;
        }

        let mut expected = source.clone();
        expected.remove(index.clamp(0, len - 1) as usize);
        assert_eq!(normalized, expected);
        if in_range {
            assert_eq!(strict.unwrap(), expected);
            assert_eq!(ignored, expected);
        } else {
            assert_eq!(strict.unwrap_err().param_name(), Some("index"));
            assert_eq!(ignored, source);
        }
    }
}

#[test]
fn test_search_and_remove_all_against_vec() {
    fastrand::seed(417);
    for _ in 0..500 {
        let source = random_source(15, 6);
        let value = fastrand::i32(0..6);

        let first = source.iter().position(|&x| x == value);
        let last = source.iter().rposition(|&x| x == value);
        assert_eq!(source.iter().copied().index_of(&value), first);
        assert_eq!(source.iter().copied().last_index_of(&value), last);

        let kept: Vec<i32> = source.iter().copied().filter(|&x| x != value).collect();
        let removed: Result<Vec<i32>> = source.iter().copied().remove_all(value, Mode::Strict).collect();
        match first {
            Some(_) => assert_eq!(removed.unwrap(), kept),
            None => assert_eq!(removed.unwrap_err().param_name(), Some("remove")),
        }
        let ignored: Vec<i32> = source
            .iter()
            .copied()
            .remove_all(value, Mode::Ignore)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(ignored, kept);
    }
}

#[test]
fn test_single_pass_source() {
    // A producer that can only be walked once.
    let mut produced = 0;
    let source = std::iter::from_fn(move || {
        produced += 1;
        (produced <= 5).then_some(produced - 1)
    });
    let v: Vec<i32> = source
        .insert(2, 5, Mode::Strict)
        .map(|r| r.unwrap())
        .remove_all(3, Mode::Strict)
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(v, vec![0, 1, 5, 2, 4]);
}

#[test]
fn test_string_search_scenarios() {
    let words = vec!["a".to_string(); 5];
    assert_eq!(words.iter().index_of(&&"A".to_string()), None);
    assert_eq!(
        words.iter().index_of_by(&&"A".to_string(), OrdinalIgnoreCase, 0),
        Some(0)
    );
    assert_eq!(
        words.iter().index_of_by(&&"A".to_string(), OrdinalIgnoreCase, 2),
        Some(2)
    );
    assert_eq!(
        words.iter().last_index_of_by(&&"A".to_string(), OrdinalIgnoreCase),
        Some(4)
    );
}
