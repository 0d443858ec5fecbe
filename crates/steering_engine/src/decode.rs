use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
    /// Malformed sequences were replaced with U+FFFD.
    pub lossy: bool,
}

/// Decode a response body to UTF-8: BOM -> Content-Type charset -> chardetng guess.
///
/// Never fails; malformed input is replaced and flagged as `lossy`.
pub fn decode_text(bytes: &[u8], content_type: Option<&str>) -> DecodedText {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(encoding) = content_type
        .and_then(charset_param)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return decode_with(bytes, encoding);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    decode_with(bytes, detector.guess(None, true))
}

fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(&['"', '\''][..]))
    })
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> DecodedText {
    let (text, _, had_errors) = encoding.decode(bytes);
    DecodedText {
        text: text.into_owned(),
        encoding_label: encoding.name().to_string(),
        lossy: had_errors,
    }
}

#[cfg(test)]
mod tests {
    use super::{charset_param, decode_text};

    #[test]
    fn charset_is_read_case_insensitively() {
        assert_eq!(charset_param("text/markdown; Charset=\"UTF-8\""), Some("UTF-8"));
        assert_eq!(charset_param("text/plain"), None);
    }

    #[test]
    fn header_charset_wins_over_detection() {
        let decoded = decode_text(b"caf\xe9", Some("text/plain; charset=ISO-8859-1"));
        assert_eq!(decoded.text, "café");
        assert!(!decoded.lossy);
    }

    #[test]
    fn bom_is_stripped() {
        let decoded = decode_text(b"\xEF\xBB\xBF# Title", Some("text/plain"));
        assert_eq!(decoded.text, "# Title");
        assert_eq!(decoded.encoding_label, "UTF-8");
    }

    #[test]
    fn invalid_bytes_are_replaced_not_rejected() {
        let decoded = decode_text(b"smart quote \x92 here", Some("text/plain; charset=utf-8"));
        assert_eq!(decoded.text, "smart quote \u{FFFD} here");
        assert_eq!(decoded.encoding_label, "UTF-8");
        assert!(decoded.lossy);
    }
}
