use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use super::AuthError;

/// Допуск на расхождение часов, секунд
const CLOCK_LEEWAY_SECS: u64 = 5;

/// Claims of the App Bridge session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTokenClaims {
    /// `https://{shop}/admin`
    pub iss: String,
    /// `https://{shop}`
    pub dest: String,
    /// Client ID приложения
    pub aud: String,
    #[serde(default)]
    pub sub: Option<String>,
    pub exp: usize,
    #[serde(default)]
    pub nbf: Option<usize>,
    #[serde(default)]
    pub iat: Option<usize>,
    #[serde(default)]
    pub sid: Option<String>,
}

impl SessionTokenClaims {
    /// Домен магазина из `dest`
    pub fn shop_domain(&self) -> &str {
        self.dest
            .trim_start_matches("https://")
            .trim_end_matches('/')
    }
}

/// Validate the HS256 signature, `exp`/`nbf` and `aud`
pub fn validate_session_token(
    token: &str,
    api_key: &str,
    api_secret: &str,
) -> Result<SessionTokenClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[api_key]);
    validation.validate_nbf = true;
    validation.leeway = CLOCK_LEEWAY_SECS;

    let token_data = decode::<SessionTokenClaims>(
        token,
        &DecodingKey::from_secret(api_secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}
