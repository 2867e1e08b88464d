use crate::Issue;
use std::collections::BTreeSet;

#[test]
fn messages() {
    assert_eq!(Issue::<i64>::Sum.to_string(), "Exact sum calculation overflow");
    assert_eq!(
        Issue::<i64>::Avg.to_string(),
        "Accurate average calculation was not possible",
    );
    assert_eq!(
        Issue::Element(9_223_372_036_854_775_808_u64).to_string(),
        "Element 9223372036854775808 can not be represented exactly as a 64-bit integer",
    );
}

#[test]
fn issues_are_ordered_and_deduplicated() {
    let issues: BTreeSet<_> = [
        Issue::Element(3_u64),
        Issue::Sum,
        Issue::Element(1),
        Issue::Avg,
        Issue::Element(3),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        issues.into_iter().collect::<Vec<_>>(),
        [Issue::Sum, Issue::Avg, Issue::Element(1), Issue::Element(3)],
    );
}

#[test]
fn float_elements_compare_by_total_order() {
    assert_eq!(Issue::Element(f64::NAN), Issue::Element(f64::NAN));
    assert_ne!(Issue::Element(1.0_f32), Issue::Element(2.0));
    assert_eq!(Issue::Element(0.0_f64), Issue::Element(-0.0));
}
