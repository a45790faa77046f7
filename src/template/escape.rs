// Percent-encoding primitives used by the operator table

/// Characters left untouched by reserved-preserving operators (`+` and `#`)
pub const RESERVED_SAFE: &str = "/!,.;";

/// Escaping policy attached to an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escaping {
    /// Encode everything outside the unreserved set
    All,
    /// Like `All`, but keep [`RESERVED_SAFE`] characters as-is
    Reserved,
}

impl Escaping {
    pub fn safe_chars(self) -> &'static str {
        match self {
            Escaping::All => "",
            Escaping::Reserved => RESERVED_SAFE,
        }
    }

    pub fn apply(self, value: &str) -> String {
        escape(value, self.safe_chars())
    }
}

/// Percent-encode `value`, leaving unreserved characters (`A-Z a-z 0-9 - . _ ~`)
/// and any character found in `safe` unescaped.
///
/// Non-ASCII characters are encoded byte-wise from their UTF-8 form as
/// uppercase `%XX` triplets.
pub fn escape(value: &str, safe: &str) -> String {
    if safe.is_empty() {
        return urlencoding::encode(value).into_owned();
    }

    let mut escaped = String::with_capacity(value.len());
    let mut last = 0;
    for (idx, kept) in value.match_indices(|c: char| safe.contains(c)) {
        escaped.push_str(&urlencoding::encode(&value[last..idx]));
        escaped.push_str(kept);
        last = idx + kept.len();
    }
    escaped.push_str(&urlencoding::encode(&value[last..]));
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_keeps_unreserved() {
        assert_eq!(escape("abcXYZ019-._~", ""), "abcXYZ019-._~");
    }

    #[test]
    fn test_escape_all_encodes_reserved() {
        assert_eq!(escape("/!,.;", ""), "%2F%21%2C.%3B");
        assert_eq!(escape("hello world", ""), "hello%20world");
        assert_eq!(escape("a&b=c?d#e", ""), "a%26b%3Dc%3Fd%23e");
    }

    #[test]
    fn test_escape_uses_uppercase_hex_for_utf8_bytes() {
        assert_eq!(escape("é", ""), "%C3%A9");
        assert_eq!(escape("☃", ""), "%E2%98%83");
    }

    #[test]
    fn test_escape_with_safe_set() {
        assert_eq!(escape("/foo/bar", RESERVED_SAFE), "/foo/bar");
        assert_eq!(escape("a!b,c;d", RESERVED_SAFE), "a!b,c;d");
        assert_eq!(escape("Hello World!", RESERVED_SAFE), "Hello%20World!");
        assert_eq!(escape("a?b", RESERVED_SAFE), "a%3Fb");
    }

    #[test]
    fn test_escape_safe_set_at_edges() {
        assert_eq!(escape("/", RESERVED_SAFE), "/");
        assert_eq!(escape("//x y//", RESERVED_SAFE), "//x%20y//");
        assert_eq!(escape("", RESERVED_SAFE), "");
    }

    #[test]
    fn test_escaping_policy() {
        assert_eq!(Escaping::All.apply("/a b"), "%2Fa%20b");
        assert_eq!(Escaping::Reserved.apply("/a b"), "/a%20b");
        assert_eq!(Escaping::All.safe_chars(), "");
    }
}
