use crate::{CategoryBudget, allocation_shares, axis_ceiling, top_spending, week_of_point};

fn categories() -> Vec<CategoryBudget> {
    vec![
        CategoryBudget::new("Food", 3000.0, 2500.0),
        CategoryBudget::new("Shopping", 1000.0, 4000.0),
        CategoryBudget::new("Home", 0.0, 0.0),
    ]
}

#[test]
fn test_allocation_shares_drop_empty_and_round() {
    let shares = allocation_shares(&categories());

    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].name, "Food");
    assert_eq!(shares[0].percent, 75);
    assert_eq!(shares[1].percent, 25);
}

#[test]
fn test_top_spending_sorted_with_ratios() {
    let bars = top_spending(&categories());

    assert_eq!(bars[0].name, "Shopping");
    assert_eq!(bars[0].ratio, 1.0);
    assert_eq!(bars[1].name, "Food");
    assert_eq!(bars[1].ratio, 0.625);
    assert_eq!(bars[2].ratio, 0.0);
}

#[test]
fn test_top_spending_all_zero_uses_unit_denominator() {
    let bars = top_spending(&[CategoryBudget::new("A", 10.0, 0.0)]);

    assert_eq!(bars[0].ratio, 0.0);
}

#[test]
fn test_week_of_point_buckets_and_clamps() {
    assert_eq!(week_of_point(0, 16, 4), Some(0));
    assert_eq!(week_of_point(5, 16, 4), Some(1));
    assert_eq!(week_of_point(15, 16, 4), Some(3));
    assert_eq!(week_of_point(99, 16, 4), Some(3));
    assert_eq!(week_of_point(0, 0, 4), None);
    assert_eq!(week_of_point(2, 3, 4), Some(2));
}

#[test]
fn test_axis_ceiling() {
    assert_eq!(axis_ceiling(&[]), 500.0);
    assert_eq!(axis_ceiling(&[120.0, 80.0]), 500.0);
    assert_eq!(axis_ceiling(&[120.0, 640.0]), 700.0);
    assert_eq!(axis_ceiling(&[800.0]), 800.0);
}
