use jsonwebtoken::{
    decode, encode, errors::Error as JwtError, errors::ErrorKind, DecodingKey, EncodingKey,
    Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::middleware::auth::AuthenticatedUser;
use crate::types::auth::Role;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub role: Role,
    pub exp: usize,  // Expiration time
    pub iat: usize,  // Issued at
}

pub fn create_jwt_token(user_id: i32, role: Role) -> Result<String, JwtError> {
    let secret = constants::config::get_jwt_secret();

    let now = chrono::Utc::now();
    let exp = (now + chrono::Duration::hours(constants::config::get_jwt_expiry_hours()))
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        role,
        exp,
        iat: now.timestamp() as usize,
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_ref()))
}

pub fn validate_jwt_token(token: &str) -> Result<Claims, JwtError> {
    let secret = constants::config::get_jwt_secret();

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Validates the token and turns its claims into the request's caller.
pub fn verify_jwt_token(token: &str) -> Result<AuthenticatedUser, JwtError> {
    let claims = validate_jwt_token(token)?;
    let id = claims
        .sub
        .parse::<i32>()
        .map_err(|_| JwtError::from(ErrorKind::InvalidSubject))?;

    Ok(AuthenticatedUser {
        id,
        role: claims.role,
    })
}
