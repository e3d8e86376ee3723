/// Fractional digits needed to print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Format `value` with `places` fractional digits, rounding the exact
/// decimal value of the double with ties away from zero.
///
/// `format!("{:.N}")` breaks exact ties to even (`6.25` -> `6.2`) and
/// `(x * 100.0).round()` rounds an already-perturbed product (`1.505` -> `1.51`).
/// Here `6.25` gives `6.3` and `1.505` gives `1.50`, since the double nearest
/// 1.505 lies just below it.
pub fn to_fixed(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let places = places.min(EXACT_FRACTION_DIGITS - 1);

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(places))
        .collect();
    if frac_part.as_bytes().get(places).is_some_and(|d| *d >= b'5') {
        increment(&mut digits);
    }

    let int_len = digits.len() - places;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (i, d) in digits.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(*d));
    }
    out
}

/// Round to `places` fractional digits the way [`to_fixed`] prints them.
pub fn round_half_up(value: f64, places: usize) -> f64 {
    to_fixed(value, places).parse().unwrap_or(value)
}

fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
