use super::{percent_multiplier, round_money};
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_round_money_rounds_half_away_from_zero() -> Result<()> {
    let test_cases = vec![
        ("1.005", "1.01"),
        ("1.004", "1.00"),
        ("-1.005", "-1.01"),
        ("2.675", "2.68"),
        ("0", "0.00"),
        ("100", "100.00"),
        ("12.3", "12.30"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(round_money(Decimal::from_str(input)?).to_string(), expected);
    }

    Ok(())
}

#[test]
fn test_percent_multiplier_converts_discounts() -> Result<()> {
    assert_eq!(percent_multiplier(Decimal::ZERO), Decimal::ONE);
    assert_eq!(percent_multiplier(Decimal::from(25)), Decimal::from_str("0.75")?);
    assert_eq!(percent_multiplier(Decimal::ONE_HUNDRED), Decimal::ZERO);

    Ok(())
}

#[test]
fn test_percent_multiplier_does_not_clamp_out_of_range_discounts() -> Result<()> {
    assert_eq!(percent_multiplier(Decimal::from(150)), Decimal::from_str("-0.5")?);
    assert_eq!(percent_multiplier(Decimal::from(-10)), Decimal::from_str("1.1")?);

    Ok(())
}
