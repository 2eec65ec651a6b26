//! Byte/symbol adapters for feeding text through the codec.
//!
//! The codec itself only deals in `u16` symbols; these helpers cover the
//! common case of transporting byte payloads over a GF(256) (or larger)
//! code.

/// Widen bytes to codec symbols, one symbol per byte.
pub fn bytes_to_symbols(bytes: &[u8]) -> Vec<u16> {
    bytes.iter().map(|&b| b as u16).collect()
}

/// Narrow symbols back to bytes; `None` if any symbol exceeds a byte.
pub fn symbols_to_bytes(symbols: &[u16]) -> Option<Vec<u8>> {
    symbols
        .iter()
        .map(|&s| u8::try_from(s).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn round_trips_bytes() {
        let symbols = bytes_to_symbols(b"hello \xc3\xa9");
        assert_eq!(symbols.len(), 8);
        assert_eq!(symbols_to_bytes(&symbols).unwrap(), b"hello \xc3\xa9");
    }

    #[test]
    fn wide_symbols_do_not_narrow() {
        assert_eq!(symbols_to_bytes(&[65, 256]), None);
        assert_eq!(symbols_to_bytes(&[]), Some(vec![]));
    }
}
