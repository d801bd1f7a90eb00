/// Character that replaces the hidden part of an email local part.
pub const EMAIL_MASK_CHAR: char = '*';

/// Masks the local part of an email address.
///
/// The first character and everything from the first `@` onward are kept;
/// every character in between becomes [`EMAIL_MASK_CHAR`]. Input without an
/// `@`, or starting with one, is returned unchanged.
///
/// # Example
/// ```
/// use mask_core::mask_email;
///
/// assert_eq!(mask_email("johndoe@example.com"), "j******@example.com");
/// assert_eq!(mask_email("not-an-email"), "not-an-email");
/// ```
pub fn mask_email(input: &str) -> String {
    let Some(at) = input.find('@') else {
        return input.to_string();
    };

    let mut local = input[..at].chars();
    let Some(first) = local.next() else {
        return input.to_string();
    };

    let mut masked = String::with_capacity(input.len());
    masked.push(first);
    masked.extend(local.map(|_| EMAIL_MASK_CHAR));
    masked.push_str(&input[at..]);
    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email_hides_local_part() {
        assert_eq!(mask_email("johndoe@example.com"), "j******@example.com");
    }

    #[test]
    fn test_mask_email_single_character_local_part() {
        assert_eq!(mask_email("a@b.com"), "a@b.com");
    }

    #[test]
    fn test_mask_email_leading_at_is_identity() {
        assert_eq!(mask_email("@example.com"), "@example.com");
    }

    #[test]
    fn test_mask_email_without_at_is_identity() {
        assert_eq!(mask_email("johndoe.example.com"), "johndoe.example.com");
        assert_eq!(mask_email(""), "");
    }

    #[test]
    fn test_mask_email_only_first_at_splits() {
        assert_eq!(mask_email("ab@c@d.org"), "a*@c@d.org");
    }

    #[test]
    fn test_mask_email_multibyte_local_part() {
        assert_eq!(mask_email("élodie@exemple.fr"), "é*****@exemple.fr");
    }
}
