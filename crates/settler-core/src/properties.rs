/// Interpolate `${env:VAR}` references using the process environment.
///
/// Unset variables expand to an empty string.
pub fn interpolate(input: &str) -> String {
    interpolate_with(input, |key| std::env::var(key).ok())
}

/// Interpolate `${env:VAR}` references, resolving each key with `lookup`.
///
/// An unterminated `${env:` is left as-is.
pub fn interpolate_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("${env:") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len;
        result.push_str(&rest[..start]);
        let key = &rest[start + 6..end];
        result.push_str(&lookup(key).unwrap_or_default());
        rest = &rest[end + 1..];
    }
    result.push_str(rest);
    result
}
