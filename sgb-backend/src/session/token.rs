//! Login token derivation.
//!
//! A token is the lowercase hex MD5 digest of the account email. The same
//! email always yields the same token, so it is guessable by anyone who
//! knows the address. Clients and tests depend on this exact value.

use md5::{Digest, Md5};

pub fn derive_token(email: &str) -> String {
    hex::encode(Md5::digest(email.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(derive_token("student+3@gmail.com"), "2395f07861d7df0503e35ff5e433d82f");
        assert_eq!(derive_token("teacher+3@gmail.com"), "07e74791d927adb57bc6cd448aa7e34f");
    }

    #[test]
    fn test_deterministic_and_case_sensitive() {
        assert_eq!(derive_token("a@b.c"), derive_token("a@b.c"));
        assert_ne!(derive_token("a@b.c"), derive_token("A@b.c"));
        assert_eq!(derive_token("a@b.c").len(), 32);
    }
}
