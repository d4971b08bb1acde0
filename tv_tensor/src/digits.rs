//! Numeric helpers behind tensor construction and fingerprinting.

/// Leading nonzero decimal digit of `|value|`, in `1..=9`.
///
/// The digit is read from the shortest decimal form of the value (the same
/// form `Display` prints), so `0.001_f32` yields `1` even though its binary
/// value sits just above or below the decimal one.
/// Zero has no significant digit; it maps to `0`, as do NaN and infinities.
///
/// ```
/// use tv_tensor::first_sig_digit;
///
/// assert_eq!(first_sig_digit(123.4), 1);
/// assert_eq!(first_sig_digit(-0.0072), 7);
/// assert_eq!(first_sig_digit(0.0), 0);
/// ```
pub fn first_sig_digit(value: f32) -> u8 {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }

    let sci = format!("{:e}", value.abs());
    match sci.as_bytes().first().copied() {
        Some(b @ b'1'..=b'9') => b - b'0',
        _ => 0,
    }
}

/// Truncate or pad `data` to exactly `len` elements, padding with `fill`.
pub fn resize_data(mut data: Vec<f32>, len: usize, fill: f32) -> Vec<f32> {
    data.resize(len, fill);
    data
}
