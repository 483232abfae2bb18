use landing_motion::core::{
    CounterDisplayMode, CounterFormatter, NumberLocale, parse_float_prefix, round_half_up,
    to_fixed,
};

#[test]
fn es_uy_groups_from_four_digits() {
    let formatter = CounterFormatter::new(NumberLocale::EsUy);
    let final_text = |target| formatter.format_final(target, CounterDisplayMode::IntegerGrouped);

    assert_eq!(final_text(1_500.0), "1.500");
    assert_eq!(final_text(1_000.0), "1.000");
    assert_eq!(final_text(999.0), "999");
    assert_eq!(final_text(1_234_567.0), "1.234.567");
    assert_eq!(final_text(0.0), "0");
}

#[test]
fn other_locales_follow_their_conventions() {
    let es = CounterFormatter::new(NumberLocale::EsEs);
    let en = CounterFormatter::new(NumberLocale::EnUs);

    assert_eq!(
        es.format_final(1_500.0, CounterDisplayMode::IntegerGrouped),
        "1500"
    );
    assert_eq!(
        es.format_final(15_000.0, CounterDisplayMode::IntegerGrouped),
        "15.000"
    );
    assert_eq!(
        en.format_final(1_500.0, CounterDisplayMode::IntegerGrouped),
        "1,500"
    );
    assert_eq!(NumberLocale::EsUy.tag(), "es-UY");
}

#[test]
fn integer_mode_rounds_half_up() {
    let formatter = CounterFormatter::new(NumberLocale::EsUy);
    let frame = |value| formatter.format_frame(value, 2_000.0, CounterDisplayMode::IntegerGrouped);

    assert_eq!(frame(0.5), "1");
    assert_eq!(frame(2.5), "3");
    assert_eq!(frame(999.5), "1.000");
    assert_eq!(frame(0.49), "0");
}

#[test]
fn decimal_precision_depends_on_target() {
    let formatter = CounterFormatter::new(NumberLocale::EsUy);

    assert_eq!(
        formatter.format_final(0.5, CounterDisplayMode::DecimalFixed),
        "0.50"
    );
    assert_eq!(
        formatter.format_final(4.2, CounterDisplayMode::DecimalFixed),
        "4.2"
    );
    assert_eq!(
        formatter.format_final(1.0, CounterDisplayMode::DecimalFixed),
        "1.0"
    );
    assert_eq!(
        formatter.format_frame(0.123, 0.5, CounterDisplayMode::DecimalFixed),
        "0.12"
    );
    assert_eq!(
        formatter.format_frame(0.0, 4.2, CounterDisplayMode::DecimalFixed),
        "0.0"
    );
}

#[test]
fn to_fixed_matches_browser_rounding() {
    assert_eq!(to_fixed(1.005, 2), "1.00");
    assert_eq!(to_fixed(1.25, 1), "1.3");
    assert_eq!(to_fixed(0.125, 2), "0.13");
}

#[test]
fn parse_float_prefix_reads_leading_number() {
    assert_eq!(parse_float_prefix("1500"), Some(1_500.0));
    assert_eq!(parse_float_prefix("  4.2 "), Some(4.2));
    assert_eq!(parse_float_prefix("98%"), Some(98.0));
    assert_eq!(parse_float_prefix(".5"), Some(0.5));
    assert_eq!(parse_float_prefix("1e3x"), Some(1_000.0));
    assert_eq!(parse_float_prefix("abc"), None);
}

#[test]
fn round_half_up_rounds_towards_positive_infinity_on_ties() {
    assert_eq!(round_half_up(2.5), 3.0);
    assert_eq!(round_half_up(-2.5), -2.0);
    assert_eq!(round_half_up(-0.4), 0.0);
    assert!(round_half_up(-0.4).is_sign_positive());
}
