use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvKey {
    ServerPort,
    TmdbApiKey,
    TmdbBaseUrl,
    OmdbApiKey,
    OmdbBaseUrl,
    OpenAiApiKey,
    OpenAiBaseUrl,
    OpenAiModel,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "PORT",
            EnvKey::TmdbApiKey => "TMDB_API_KEY",
            EnvKey::TmdbBaseUrl => "TMDB_BASE_URL",
            EnvKey::OmdbApiKey => "OMDB_API_KEY",
            EnvKey::OmdbBaseUrl => "OMDB_BASE_URL",
            EnvKey::OpenAiApiKey => "OPENAI_API_KEY",
            EnvKey::OpenAiBaseUrl => "OPENAI_BASE_URL",
            EnvKey::OpenAiModel => "OPENAI_MODEL",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

/// Blank values are treated the same as unset ones.
pub fn get_optional(key: EnvKey) -> Option<String> {
    non_blank(get(key).ok())
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    match value {
        Some(val) => val.parse::<T>().unwrap_or(default),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_absent() {
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" abc ".into())), Some("abc".into()));
    }

    #[test]
    fn unparsable_values_fall_back_to_default() {
        assert_eq!(parse_or::<u16>(Some("not-a-port".into()), 3000), 3000);
        assert_eq!(parse_or::<u16>(Some("8080".into()), 3000), 8080);
        assert_eq!(parse_or::<u16>(None, 3000), 3000);
    }
}
