/// Normalizes an account address to lowercase hex.
///
/// Accepts the canonical `0x` + 40 hex digits form, with surrounding
/// whitespace tolerated. Returns `None` for anything else.
pub fn normalize_address(address: &str) -> Option<String> {
    let address = address.trim();
    let hex = address.strip_prefix("0x")?;

    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    Some(address.to_ascii_lowercase())
}

/// Shortens a normalized address for display, e.g. `0x1234…abcd`.
pub fn shorten_address(address: &str) -> String {
    if address.len() < 10 {
        return address.to_string();
    }
    format!("{}…{}", &address[..6], &address[address.len() - 4..])
}
