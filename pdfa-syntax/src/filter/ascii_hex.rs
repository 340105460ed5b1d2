fn is_white_space_character(char: u8) -> bool {
    matches!(char, 0x00 | 0x09 | 0x0a | 0x0c | 0x0d | 0x20)
}

pub(crate) fn decode(data: &[u8]) -> Option<Vec<u8>> {
    let mut cleaned = Vec::with_capacity(data.len());

    // We are lenient and don't require a > in the stream.
    for &byte in data {
        match byte {
            b'>' => break,
            b if b.is_ascii_hexdigit() => cleaned.push(b),
            b if is_white_space_character(b) => {}
            _ => return None,
        }
    }

    Some(
        cleaned
            .chunks(2)
            // In case length is not a multiple of 2, pad with 0.
            .map(|pair| val(pair[0]) << 4 | val(*pair.get(1).unwrap_or(&b'0')))
            .collect(),
    )
}

fn val(c: u8) -> u8 {
    match c {
        b'A'..=b'F' => c - b'A' + 10,
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'0',
    }
}
