use anyhow::{Result, bail};

/// Number of byte values a full input sequence carries.
pub const SEQUENCE_LEN: usize = 96;
/// Bytes per rendered group.
pub const GROUP_SIZE: usize = 3;
pub const GROUP_COUNT: usize = SEQUENCE_LEN / GROUP_SIZE;

/// Renders a 96-byte sequence as 32 three-byte groups, each formatted as a
/// 32-bit literal with a zero high byte: `0x00` followed by the group's
/// bytes as uppercase hex pairs, input order preserved.
///
/// The strings are index-aligned with the input triples, so group `k`
/// carries `bytes[3k..3k + 3]`. Fails without producing anything when the
/// input length is not exactly [`SEQUENCE_LEN`].
pub fn render_groups(bytes: &[u8]) -> Result<Vec<String>> {
    if bytes.len() != SEQUENCE_LEN {
        bail!("expected {SEQUENCE_LEN} byte values, got {}", bytes.len());
    }

    let mut groups = Vec::with_capacity(GROUP_COUNT);
    for chunk in bytes.chunks_exact(GROUP_SIZE) {
        groups.push(format!(
            "0x00{:02X}{:02X}{:02X}",
            chunk[0], chunk[1], chunk[2]
        ));
    }
    Ok(groups)
}

/// Fallback sequence used when no input is supplied: `0x00..=0x5F`.
pub fn demo_sequence() -> Vec<u8> {
    (0..SEQUENCE_LEN as u8).collect()
}
