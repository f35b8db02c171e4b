// ============================================================================
// Property Tests
// Round-trip and rounding laws over every preset alphabet
// ============================================================================

use num_radix::prelude::*;
use proptest::prelude::*;

fn preset() -> impl Strategy<Value = Preset> {
    prop::sample::select(Preset::ALL.to_vec())
}

/// Finite doubles of moderate magnitude, including subnormals and zero
fn moderate_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e15..1.0e15f64,
        -1.0..1.0f64,
        prop::num::f64::NORMAL.prop_filter("moderate", |x| x.abs() < 1.0e15),
        prop::num::f64::SUBNORMAL,
        Just(0.0),
    ]
}

proptest! {
    #[test]
    fn test_integer_round_trip(preset in preset(), n in any::<i128>()) {
        let alphabet = preset.alphabet();
        let encoded = alphabet.encode(n, &FormatSpec::default()).unwrap();
        prop_assert_eq!(alphabet.decode(&encoded).unwrap(), Number::Integer(n));
    }

    #[test]
    fn test_grouped_integer_round_trip(preset in preset(), n in any::<i64>()) {
        let alphabet = preset.alphabet();
        let spec = FormatSpec::default().with_grouping(true);
        let encoded = alphabet.encode(n, &spec).unwrap();
        prop_assert_eq!(alphabet.decode(&encoded).unwrap(), Number::Integer(n as i128));
    }

    #[test]
    fn test_shortest_float_round_trip(preset in preset(), x in moderate_f64()) {
        let alphabet = preset.alphabet();
        let encoded = alphabet.encode(x, &FormatSpec::default()).unwrap();
        let decoded = alphabet.decode(&encoded).unwrap().to_f64();
        prop_assert_eq!(decoded, x, "{}", encoded);
    }

    #[test]
    fn test_scientific_round_trip(preset in preset(), x in moderate_f64()) {
        let alphabet = preset.alphabet();
        let spec = FormatSpec::default().scientific();
        let encoded = alphabet.encode(x, &spec).unwrap();
        let decoded = alphabet.decode(&encoded).unwrap().to_f64();
        prop_assert_eq!(decoded, x, "{}", encoded);
    }

    #[test]
    fn test_fixed_scale_error_bound(
        preset in preset(),
        x in -1.0e6..1.0e6f64,
        scale in 0u32..6,
    ) {
        let alphabet = preset.alphabet();
        let encoded = alphabet.encode(x, &FormatSpec::fixed(scale)).unwrap();
        let decoded = alphabet.decode(&encoded).unwrap().to_f64();

        let half_step = 0.5 * (alphabet.base() as f64).powi(-(scale as i32));
        let tolerance = half_step * (1.0 + 1e-9) + x.abs() * 1e-15 + 1e-300;
        prop_assert!((decoded - x).abs() <= tolerance, "{} -> {}", x, encoded);
    }

    #[test]
    fn test_fixed_scale_is_idempotent(
        preset in preset(),
        x in -1.0e3..1.0e3f64,
        scale in 1u32..5,
    ) {
        let alphabet = preset.alphabet();
        let spec = FormatSpec::fixed(scale);
        let once = alphabet.encode(x, &spec).unwrap();
        let again = alphabet.encode(alphabet.decode(&once).unwrap(), &spec).unwrap();
        prop_assert_eq!(once, again);
    }

    #[test]
    fn test_fixed_scale_digit_count(preset in preset(), x in -1.0e6..1.0e6f64, scale in 1u32..8) {
        let alphabet = preset.alphabet();
        let encoded = alphabet.encode(x, &FormatSpec::fixed(scale)).unwrap();
        let (_, fraction) = encoded.split_once(alphabet.separator()).unwrap();
        let digits = fraction
            .chars()
            .filter(|c| alphabet.lookup_digit(&c.to_string()).is_some())
            .count();
        prop_assert_eq!(digits, scale as usize);
    }

    #[test]
    fn test_wide_whole_float_round_trip(
        preset in preset(),
        x in prop::num::f64::NORMAL.prop_filter("whole", |x| x.abs() >= 9.007_199_254_740_992e15),
    ) {
        let alphabet = preset.alphabet();
        for spec in [FormatSpec::fixed(0), FormatSpec::default()] {
            let encoded = alphabet.encode(x, &spec).unwrap();
            let decoded = alphabet.decode(&encoded).unwrap().to_f64();
            prop_assert_eq!(decoded, x, "{}", encoded);
        }
    }

    #[test]
    fn test_by_base_round_trip(base in 2usize..=62, n in any::<i64>()) {
        let alphabet = RadixAlphabet::by_base(base).unwrap();
        let encoded = alphabet.encode(n, &FormatSpec::default()).unwrap();
        prop_assert_eq!(alphabet.decode(&encoded).unwrap(), Number::Integer(n as i128));
    }
}
