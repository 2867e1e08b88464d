use core::ops::Bound;
use seqinfo::{Error, Options, Summarize as _, summarize, summarize_iter, summarize_range};

const SEQUENCE: [i32; 12] = [1, 2, 4, 8, 16, 12, 10, 8, 6, 4, 2, 1];

#[test]
fn inner_range() -> Result<(), Error> {
    let s = SEQUENCE.summary_of(1..=3, Options::empty())?;
    assert_eq!(s.count(), 3);
    assert_eq!(s.exact_sum(), Some(14));
    assert_eq!(s.sum(), Some(14.0));
    assert_eq!(s.avg(), Some(4.0 + 2.0 / 3.0));
    assert_eq!(s.min_value(), Some(2));
    assert_eq!(s.max_value(), Some(8));
    assert_eq!(s.min_value_index(), Some(1));
    assert_eq!(s.max_value_index(), Some(3));
    assert_eq!(s.exact_min_delta(), Some(2));
    assert_eq!(s.exact_max_delta(), Some(4));
    assert_eq!(s.exact_sum_delta(), Some(6));
    assert_eq!(s.avg_delta(), Some(3.0));
    assert!(s.is_strictly_ascending());
    assert_eq!(s.median(), Some(4.0));
    Ok(())
}

#[test]
fn tail_range() -> Result<(), Error> {
    let s = summarize_range(&SEQUENCE, 4.., Options::HISTOGRAM)?;
    assert_eq!(s.count(), 8);
    assert_eq!(s.exact_sum(), Some(59));
    assert_eq!(s.avg(), Some(7.375));
    assert_eq!(s.min_value(), Some(1));
    assert_eq!(s.max_value(), Some(16));
    assert_eq!(s.min_value_index(), Some(11));
    assert_eq!(s.max_value_index(), Some(4));
    assert_eq!(s.exact_min_delta(), Some(1));
    assert_eq!(s.exact_max_delta(), Some(4));
    assert_eq!(s.exact_sum_delta(), Some(15));
    assert_eq!(s.avg_delta(), Some(15.0 / 7.0));
    assert!(s.is_strictly_descending());
    assert_eq!(s.median(), Some(7.0));
    assert_eq!(s.mode(), None);
    assert_eq!(s.histogram().map(|h| h.len()), Some(8));
    Ok(())
}

#[test]
fn full_range_matches_whole_sequence() -> Result<(), Error> {
    let whole = summarize(&SEQUENCE, Options::all());
    assert_eq!(SEQUENCE.summary_of(.., Options::all())?, whole);
    assert_eq!(SEQUENCE.summary_of(0..12, Options::all())?, whole);
    assert_eq!(summarize_iter(SEQUENCE, Options::all()), whole);
    assert_eq!(whole.mode(), Some(&[1, 2, 4, 8][..]));
    Ok(())
}

#[test]
fn empty_range() -> Result<(), Error> {
    let s = SEQUENCE.summary_of(5..5, Options::HISTOGRAM)?;
    assert!(s.is_empty());
    assert_eq!(s.min_value_index(), None);
    assert_eq!(s.histogram(), None);
    Ok(())
}

#[test]
fn float_range() -> Result<(), Error> {
    let a = [1.0, 2.0, 4.0, 8.0, 16.0_f32];
    let s = a.summary_of(2..=4, Options::EXACT)?;
    assert_eq!(s.sum(), Some(28.0));
    assert_eq!(s.avg(), Some(28.0 / 3.0));
    assert_eq!(s.min_value_index(), Some(2));
    assert_eq!(s.max_value_index(), Some(4));
    assert_eq!(s.exact_min_delta(), Some(4));
    assert_eq!(s.exact_max_delta(), Some(8));
    assert_eq!(s.exact_sum_delta(), Some(12));
    assert_eq!(s.avg_delta(), Some(6.0));
    assert_eq!(s.median(), Some(8.0));
    Ok(())
}

#[test]
fn iterator_input() {
    let s = summarize_iter((1..=100_u8).map(|x| x % 7), Options::HISTOGRAM);
    assert_eq!(s.count(), 100);
    assert_eq!(s.min_value(), Some(0));
    assert_eq!(s.max_value(), Some(6));
    assert_eq!(s.min_value_index(), Some(6));
    assert_eq!(s.max_value_index(), Some(5));
    assert_eq!(s.mode(), Some(&[1, 2][..]));
    assert!(!s.is_sorted());
}

#[test]
fn out_of_bounds() {
    assert_eq!(
        SEQUENCE.summary_of(3..20, Options::empty()),
        Err(Error::Range { start: 3, end: 20, len: 12 }),
    );
    assert_eq!(
        SEQUENCE.summary_of(..=12, Options::empty()),
        Err(Error::Range { start: 0, end: 13, len: 12 }),
    );
}

#[test]
fn decreasing_range() {
    let (start, end) = (5, 2);
    assert_eq!(
        summarize_range(&SEQUENCE, start..end, Options::empty()),
        Err(Error::Range { start, end, len: 12 }),
    );
}

#[test]
fn bound_overflow() {
    let range = (Bound::Excluded(usize::MAX), Bound::Unbounded);
    assert_eq!(SEQUENCE.summary_of(range, Options::empty()), Err(Error::Bound));
    assert_eq!(SEQUENCE.summary_of(..=usize::MAX, Options::empty()), Err(Error::Bound));
}

#[test]
fn error_messages() {
    let error = Error::Range { start: 3, end: 20, len: 12 };
    assert_eq!(
        error.to_string(),
        "Range 3..20 is out of bounds for a sequence of length 12",
    );
    assert_eq!(Error::Bound.to_string(), "Range bound overflows `usize`");
}
