//! Text decoding for bundled files

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use std::fs;
use std::io;
use std::path::Path;

/// Read a file and decode it to text.
pub fn read_text_file(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_text(&bytes))
}

/// Decode raw bytes.
///
/// A byte order mark picks the encoding and is stripped. Without one, valid
/// UTF-8 is taken as-is and anything else goes through encoding detection.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text.into_owned();
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}
