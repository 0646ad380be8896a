//! Page paths shared by links and redirects. The `web` router mounts the
//! pages at exactly these paths.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const CONTRACTORS: &str = "/contractors";
pub const NEW_ORDER: &str = "/orders/new";

/// Link to a contractor profile, `/profile?username=<encoded>`.
pub fn profile(username: &str) -> String {
    format!("/profile?username={}", encode_component(username))
}

/// Percent-encode everything outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// `href`/`src` values coming from the API are only used when they point at
/// the web, mail, a phone number or inline image data; anything else
/// (`javascript:` and friends) is replaced with `#`.
pub fn safe_url(url: &str) -> &str {
    let lower = url.trim_start().to_ascii_lowercase();
    let allowed = ["http://", "https://", "mailto:", "tel:", "data:image/"];
    if allowed.iter().any(|p| lower.starts_with(p)) || lower.starts_with('/') {
        url
    } else {
        "#"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_link_is_encoded() {
        assert_eq!(profile("ivan"), "/profile?username=ivan");
        assert_eq!(profile("a b&c"), "/profile?username=a%20b%26c");
        assert_eq!(profile("иван"), "/profile?username=%D0%B8%D0%B2%D0%B0%D0%BD");
    }

    #[test]
    fn test_safe_url() {
        assert_eq!(safe_url("https://t.me/ivan"), "https://t.me/ivan");
        assert_eq!(safe_url("data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
        assert_eq!(safe_url("/media/1.png"), "/media/1.png");
        assert_eq!(safe_url("javascript:alert(1)"), "#");
        assert_eq!(safe_url(" JavaScript:alert(1)"), "#");
        assert_eq!(safe_url("data:text/html,<script>"), "#");
    }
}
