use crate::init::prompter::SelectChoice;

/// How the user chose to record the GitHub token. Remembered after
/// prompting so the flow can warn about the environment variable; only the
/// resulting token string lands in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSetting {
    Plaintext,
    EnvironmentVariables,
}

pub const DEF_TOKEN_ENV_NAME: &str = "GITHUB_TOKEN";

const PLAINTEXT_KEY: &str = "plaintext";
const ENVIRONMENT_VARIABLES_KEY: &str = "environment_variables";

pub(crate) fn token_mode_choices() -> Vec<SelectChoice> {
    vec![
        SelectChoice::new(
            "plaintext - Not recommended because it is unsafe",
            PLAINTEXT_KEY,
        ),
        SelectChoice::new(
            "environment_variables (recommended) - Save in environment variables",
            ENVIRONMENT_VARIABLES_KEY,
        ),
    ]
}

pub(crate) fn token_mode_from_key(key: &str) -> TokenSetting {
    if key == PLAINTEXT_KEY {
        TokenSetting::Plaintext
    } else {
        TokenSetting::EnvironmentVariables
    }
}

/// Environment-variable tokens are stored as `$` + uppercased name; isubo
/// resolves the variable at publish time.
pub fn format_env_token(name: &str) -> String {
    format!("${}", name.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_token_is_dollar_prefixed_and_uppercased() {
        assert_eq!(format_env_token("github_token"), "$GITHUB_TOKEN");
        assert_eq!(format_env_token("GhToken9"), "$GHTOKEN9");
        assert_eq!(format_env_token("MY_token_2"), "$MY_TOKEN_2");
    }

    #[test]
    fn env_token_matches_the_documented_pattern() {
        let token = format_env_token("some_Mixed_name3");
        let body = token.strip_prefix('$').expect("dollar prefix");
        assert!(!body.is_empty());
        assert!(body
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
    }

    #[test]
    fn token_mode_keys_round_trip() {
        let choices = token_mode_choices();
        assert_eq!(choices.len(), 2);
        assert_eq!(token_mode_from_key(&choices[0].value), TokenSetting::Plaintext);
        assert_eq!(
            token_mode_from_key(&choices[1].value),
            TokenSetting::EnvironmentVariables
        );
    }
}
