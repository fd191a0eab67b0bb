//! [`Command`] for authorizing a user [`Session`].

use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::user::{session, Session},
    Service,
};

use super::Command;

/// [`Command`] for authorizing a user [`Session`] by its access token.
#[derive(Clone, Debug, From)]
pub struct AuthorizeSession {
    /// [`Session`] token to authorize.
    pub token: session::Token,
}

impl<Db> Command<AuthorizeSession> for Service<Db> {
    type Ok = Session;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AuthorizeSession,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AuthorizeSession { token } = cmd;

        let session = jsonwebtoken::decode::<Session>(
            token.as_ref(),
            &self.config.jwt_decoding_key,
            &self.config.jwt_validation,
        )
        .map_err(tracerr::from_and_wrap!(=> E))?
        .claims;

        Ok(session)
    }
}

/// Error of [`AuthorizeSession`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`jsonwebtoken`] decoding error.
    #[display("Failed to decode a JSON Web Token: {_0}")]
    JsonWebTokenDecodeError(jsonwebtoken::errors::Error),
}

#[cfg(test)]
mod spec {
    use jsonwebtoken::{EncodingKey, Header};
    use serde::Serialize;
    use uuid::Uuid;

    use crate::{
        command::Command as _,
        domain::user::{self, session},
        Config, Service,
    };

    use super::AuthorizeSession;

    const SECRET: &[u8] = b"super-secret-jwt-token";

    #[derive(Serialize)]
    struct Claims<'a> {
        sub: Uuid,
        exp: i64,
        aud: &'a str,
        role: &'a str,
    }

    fn service() -> Service<()> {
        Service::new(Config::hs256(SECRET, Some("authenticated")), ())
    }

    fn token(claims: &Claims<'_>, secret: &[u8]) -> session::Token {
        let token = jsonwebtoken::encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap();

        #[expect(unsafe_code, reason = "test")]
        let token = unsafe { session::Token::new_unchecked(token) };
        token
    }

    fn in_an_hour() -> i64 {
        common::DateTime::now().unix_timestamp() + 3600
    }

    #[tokio::test]
    async fn accepts_provider_token() {
        let user_id = Uuid::new_v4();
        let exp = in_an_hour();
        let token = token(
            &Claims {
                sub: user_id,
                exp,
                aud: "authenticated",
                role: "authenticated",
            },
            SECRET,
        );

        let session = service()
            .execute(AuthorizeSession { token })
            .await
            .unwrap();

        assert_eq!(session.user_id, user::Id::from(user_id));
        assert_eq!(session.expires_at.unix_timestamp(), exp);
    }

    #[tokio::test]
    async fn rejects_foreign_signature() {
        let token = token(
            &Claims {
                sub: Uuid::new_v4(),
                exp: in_an_hour(),
                aud: "authenticated",
                role: "authenticated",
            },
            b"another-secret",
        );

        assert!(service().execute(AuthorizeSession { token }).await.is_err());
    }

    #[tokio::test]
    async fn rejects_expired_token() {
        let token = token(
            &Claims {
                sub: Uuid::new_v4(),
                exp: common::DateTime::now().unix_timestamp() - 3600,
                aud: "authenticated",
                role: "authenticated",
            },
            SECRET,
        );

        assert!(service().execute(AuthorizeSession { token }).await.is_err());
    }

    #[tokio::test]
    async fn rejects_foreign_audience() {
        let token = token(
            &Claims {
                sub: Uuid::new_v4(),
                exp: in_an_hour(),
                aud: "anon",
                role: "anon",
            },
            SECRET,
        );

        assert!(service().execute(AuthorizeSession { token }).await.is_err());
    }
}
