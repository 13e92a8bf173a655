/// Returns the local identity portion of a jid.
///
/// A jid has the shape `localpart[:suffix]@domain`. The local part is the
/// text before `@`, trimmed of any `:` device suffix. A missing separator
/// is not an error: the input is returned unchanged.
pub fn local_part(jid: &str) -> &str {
    let local = match jid.split_once('@') {
        Some((local, _domain)) => local,
        None => jid,
    };
    match local.split_once(':') {
        Some((number, _suffix)) => number,
        None => local,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_part_plain_jid() {
        assert_eq!(local_part("923001234567@s.whatsapp.net"), "923001234567");
    }

    #[test]
    fn test_local_part_with_device_suffix() {
        assert_eq!(local_part("923001234567:12@s.whatsapp.net"), "923001234567");
    }

    #[test]
    fn test_local_part_no_at_sign() {
        assert_eq!(local_part("12345"), "12345");
    }

    #[test]
    fn test_local_part_no_at_sign_with_suffix() {
        assert_eq!(local_part("12345:3"), "12345");
    }

    #[test]
    fn test_local_part_empty_local() {
        assert_eq!(local_part("@s.whatsapp.net"), "");
    }

    #[test]
    fn test_local_part_only_splits_on_first_separator() {
        assert_eq!(local_part("123:4:5@a@b"), "123");
    }

    #[test]
    fn test_local_part_empty() {
        assert_eq!(local_part(""), "");
    }
}
