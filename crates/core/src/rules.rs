//! Field-level validation and normalization rules for catalog entities.
//!
//! Every free-text value is trimmed before it is stored or compared. An
//! absent or empty-string value is "required"; a value that only becomes
//! empty after trimming is "empty".

use url::Url;

use crate::error::{CoreError, EntityKind};

/// Maximum title length in characters (matches the `VARCHAR(255)` columns).
pub const MAX_TITLE_LENGTH: usize = 255;

/// Validate and trim a title supplied on create.
pub fn require_title(entity: EntityKind, title: Option<&str>) -> Result<String, CoreError> {
    match title {
        None | Some("") => Err(CoreError::TitleRequired { entity }),
        Some(raw) => normalize_title(entity, raw),
    }
}

/// Validate and trim a title supplied on update.
///
/// Unlike [`require_title`], an empty string is reported as empty rather
/// than missing: the field was supplied, it just has no content.
pub fn normalize_title(entity: EntityKind, raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::TitleEmpty { entity });
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::TitleTooLong {
            entity,
            max: MAX_TITLE_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

/// Maximum username length in characters.
pub const MAX_USERNAME_LENGTH: usize = 255;

/// Validate and trim a username supplied on create.
pub fn require_username(username: Option<&str>) -> Result<String, CoreError> {
    match username {
        None | Some("") => Err(CoreError::UsernameRequired),
        Some(raw) => normalize_username(raw),
    }
}

/// Validate and trim a username supplied on update.
pub fn normalize_username(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::UsernameEmpty);
    }
    if trimmed.chars().count() > MAX_USERNAME_LENGTH {
        return Err(CoreError::UsernameTooLong {
            max: MAX_USERNAME_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

/// Trim an optional free-text value, collapsing blank input to `None`.
pub fn trim_or_none(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Returns `true` if `raw` parses as an absolute URL with a host.
pub fn is_valid_content_url(raw: &str) -> bool {
    Url::parse(raw).map(|url| url.has_host()).unwrap_or(false)
}

/// Validate and normalize a lesson content URL.
///
/// An empty string means "no URL" and is accepted; anything else must be an
/// absolute URL. The stored value is trimmed.
pub fn normalize_content_url(raw: Option<&str>) -> Result<Option<String>, CoreError> {
    match raw {
        Some(value) if !value.is_empty() && !is_valid_content_url(value) => {
            Err(CoreError::ContentUrlInvalid)
        }
        other => Ok(trim_or_none(other)),
    }
}

/// Search terms are trimmed; blank terms disable the filter.
pub fn normalize_search_term(term: Option<&str>) -> Option<String> {
    trim_or_none(term)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn missing_title_is_required() {
        assert_matches!(
            require_title(EntityKind::Course, None),
            Err(CoreError::TitleRequired { entity: EntityKind::Course })
        );
        assert_matches!(
            require_title(EntityKind::Lesson, Some("")),
            Err(CoreError::TitleRequired { entity: EntityKind::Lesson })
        );
    }

    #[test]
    fn whitespace_title_is_empty_not_required() {
        for blank in [" ", "   ", "\t", "\n  \t"] {
            assert_matches!(
                require_title(EntityKind::Section, Some(blank)),
                Err(CoreError::TitleEmpty { entity: EntityKind::Section })
            );
        }
    }

    #[test]
    fn update_title_empty_string_is_empty() {
        assert_matches!(
            normalize_title(EntityKind::Course, ""),
            Err(CoreError::TitleEmpty { .. })
        );
    }

    #[test]
    fn title_is_trimmed() {
        assert_eq!(require_title(EntityKind::Course, Some("  X  ")).unwrap(), "X");
    }

    #[test]
    fn title_length_counts_characters() {
        let at_limit = "é".repeat(MAX_TITLE_LENGTH);
        assert!(normalize_title(EntityKind::Course, &at_limit).is_ok());

        let over = "a".repeat(MAX_TITLE_LENGTH + 1);
        assert_matches!(
            normalize_title(EntityKind::Course, &over),
            Err(CoreError::TitleTooLong { max: MAX_TITLE_LENGTH, .. })
        );
    }

    #[test]
    fn username_required_empty_and_length() {
        assert_matches!(require_username(None), Err(CoreError::UsernameRequired));
        assert_matches!(require_username(Some("")), Err(CoreError::UsernameRequired));
        assert_matches!(require_username(Some("  ")), Err(CoreError::UsernameEmpty));
        assert_eq!(require_username(Some(" ada ")).unwrap(), "ada");

        let at_limit = "a".repeat(MAX_USERNAME_LENGTH);
        assert!(normalize_username(&at_limit).is_ok());
        assert_matches!(
            normalize_username(&format!("{at_limit}a")),
            Err(CoreError::UsernameTooLong { max: MAX_USERNAME_LENGTH })
        );
    }

    #[test]
    fn trim_or_none_collapses_blank() {
        assert_eq!(trim_or_none(Some("  notes ")), Some("notes".to_string()));
        assert_eq!(trim_or_none(Some("   ")), None);
        assert_eq!(trim_or_none(Some("")), None);
        assert_eq!(trim_or_none(None), None);
    }

    #[test]
    fn content_url_requires_scheme_and_host() {
        assert!(is_valid_content_url("https://example.com/video.mp4"));
        assert!(is_valid_content_url("http://localhost:8080/a"));
        assert!(!is_valid_content_url("not-a-valid-url"));
        assert!(!is_valid_content_url("/relative/path"));
        assert!(!is_valid_content_url("example.com/video.mp4"));
        assert!(!is_valid_content_url("   "));
    }

    #[test]
    fn content_url_normalization() {
        assert_eq!(normalize_content_url(None).unwrap(), None);
        assert_eq!(normalize_content_url(Some("")).unwrap(), None);
        assert_eq!(
            normalize_content_url(Some("  https://example.com/a ")).unwrap(),
            Some("https://example.com/a".to_string())
        );
        assert_matches!(
            normalize_content_url(Some("not-a-valid-url")),
            Err(CoreError::ContentUrlInvalid)
        );
    }
}
