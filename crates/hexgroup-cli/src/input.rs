use anyhow::{Context, Result};

/// Parses one console line into byte values.
///
/// If the line contains a comma anywhere, commas are the separator and each
/// piece is trimmed; otherwise tokens are split on whitespace. Every token
/// is parsed as base-16 (a leading `0x`/`0X` is stripped first), so a
/// decimal-looking token like `10` means 16. An empty line yields an empty
/// sequence; an empty piece between commas is an error.
pub fn parse_byte_line(line: &str) -> Result<Vec<u8>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }

    let tokens: Vec<&str> = if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    };

    let mut bytes = Vec::with_capacity(tokens.len());
    for token in tokens {
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        let byte = u8::from_str_radix(digits, 16)
            .with_context(|| format!("invalid hex byte value: {token:?}"))?;
        bytes.push(byte);
    }
    Ok(bytes)
}
