/// Text form of an evaluation result, as it goes back into the expression.
///
/// Integral values have no fractional part and negative zero prints as `0`.
/// `f64`'s `Display` is the shortest round-trip form and never uses an
/// exponent, so the text always lexes back as a number.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
