use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use summit_logging::summit_debug;

/// How far into the page to look for a `<meta charset>` declaration.
const META_SNIFF_LIMIT: usize = 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode page bytes as {encoding}")]
    DecodeFailure { encoding: String },
}

/// Decode a saved listing page to UTF-8.
///
/// Order: byte order mark, then an early `<meta charset>` declaration, then a
/// `chardetng` guess. Malformed sequences for the chosen encoding are an error.
pub fn decode_page(bytes: &[u8]) -> Result<String, DecodeError> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (sniff_meta_charset(bytes).unwrap_or_else(|| guess(bytes)), bytes),
    };
    summit_debug!("decoding {} page bytes as {}", body.len(), encoding.name());
    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
        .ok_or_else(|| DecodeError::DecodeFailure {
            encoding: encoding.name().to_string(),
        })
}

fn sniff_meta_charset(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(META_SNIFF_LIMIT)];
    let head = String::from_utf8_lossy(head).to_ascii_lowercase();
    let start = head.find("charset=")? + "charset=".len();
    let label: String = head[start..]
        .trim_start_matches(&['"', '\''][..])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(*c, '-' | '_' | ':' | '.'))
        .collect();
    // A declared UTF-16 or replacement label is read as UTF-8.
    Encoding::for_label(label.as_bytes()).map(Encoding::output_encoding)
}

fn guess(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}
