use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static USER_PATH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/user/(\d+)").expect("valid user path regex"));

/// Normalizes a Facebook author URL to the canonical profile form
/// `https://www.facebook.com/profile.php?id=<numeric id>`.
///
/// The scraper hands back several URL shapes for the same profile: a
/// `profile.php?id=` link, a group-scoped `/user/<id>/` path, or a vanity URL.
/// Whenever a numeric id can be pulled out, the canonical form is returned so
/// the same author always stores the same contact URL. URLs without an id
/// (and unparsable input) pass through untouched; blank input yields `None`.
pub fn normalize_facebook_url(raw: Option<&str>) -> Option<String> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = match Url::parse(trimmed) {
        Ok(url) => url,
        Err(_) => return Some(trimmed.to_string()),
    };

    if parsed.path().contains("/profile.php") {
        if let Some(id) = query_id(&parsed) {
            return Some(profile_url(&id));
        }
    }

    if let Some(caps) = USER_PATH_REGEX.captures(parsed.path()) {
        return Some(profile_url(&caps[1]));
    }

    if let Some(id) = query_id(&parsed) {
        return Some(profile_url(&id));
    }

    Some(trimmed.to_string())
}

fn query_id(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
}

fn profile_url(id: &str) -> String {
    format!("https://www.facebook.com/profile.php?id={id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_php_links_are_canonicalized() {
        assert_eq!(
            normalize_facebook_url(Some(
                "https://m.facebook.com/profile.php?id=100012345678901&mibextid=xyz"
            )),
            Some("https://www.facebook.com/profile.php?id=100012345678901".to_string())
        );
    }

    #[test]
    fn group_scoped_user_paths_are_canonicalized() {
        assert_eq!(
            normalize_facebook_url(Some(
                "https://www.facebook.com/groups/142026696530246/user/100012345678901/"
            )),
            Some("https://www.facebook.com/profile.php?id=100012345678901".to_string())
        );
    }

    #[test]
    fn bare_id_query_param_is_canonicalized() {
        assert_eq!(
            normalize_facebook_url(Some("https://www.facebook.com/some.page?id=42")),
            Some("https://www.facebook.com/profile.php?id=42".to_string())
        );
    }

    #[test]
    fn vanity_urls_pass_through() {
        assert_eq!(
            normalize_facebook_url(Some("https://www.facebook.com/nguyen.van.a")),
            Some("https://www.facebook.com/nguyen.van.a".to_string())
        );
    }

    #[test]
    fn unparsable_input_passes_through() {
        assert_eq!(
            normalize_facebook_url(Some("not a url")),
            Some("not a url".to_string())
        );
    }

    #[test]
    fn blank_input_yields_none() {
        assert_eq!(normalize_facebook_url(None), None);
        assert_eq!(normalize_facebook_url(Some("")), None);
        assert_eq!(normalize_facebook_url(Some("   ")), None);
    }
}
