//! OAuth session credentials issued by the provider's web authentication flow.

// self
use crate::_prelude::*;

/// Redacted access token wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken(String);
impl AccessToken {
	/// Wraps a new token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for AccessToken {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("AccessToken").field(&"<redacted>").finish()
	}
}
impl Display for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Per-client OAuth session: the stored access token plus the redirect URI used while
/// authorizing.
///
/// The token is populated by a successful code exchange or by
/// [`SessionState::set_access_token`]; private and batched requests read it to decide whether an
/// `oauth_token` parameter is attached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
	access_token: Option<AccessToken>,
	redirect_uri: Option<String>,
}
impl SessionState {
	/// Creates a session seeded with the configured redirect URI.
	pub fn new(redirect_uri: Option<String>) -> Self {
		Self { access_token: None, redirect_uri }
	}

	/// Returns the stored access token, if any.
	pub fn access_token(&self) -> Option<&AccessToken> {
		self.access_token.as_ref()
	}

	/// Stores an access token for subsequent private requests.
	pub fn set_access_token(&mut self, token: AccessToken) {
		self.access_token = Some(token);
	}

	/// Returns the session redirect URI, if any.
	pub fn redirect_uri(&self) -> Option<&str> {
		self.redirect_uri.as_deref()
	}

	/// Replaces the session redirect URI.
	pub fn set_redirect_uri(&mut self, redirect_uri: impl Into<String>) {
		self.redirect_uri = Some(redirect_uri.into());
	}
}

/// Result of a code-for-token exchange whose response body was readable JSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenExchangeOutcome {
	/// Provider issued an access token; it has already been stored on the session.
	Issued(AccessToken),
	/// Provider answered with well-formed JSON that carries no `access_token` field.
	Missing,
}
impl TokenExchangeOutcome {
	/// Returns the issued token, if any.
	pub fn token(&self) -> Option<&AccessToken> {
		match self {
			Self::Issued(token) => Some(token),
			Self::Missing => None,
		}
	}

	/// Checks whether the exchange produced a token.
	pub fn is_issued(&self) -> bool {
		matches!(self, Self::Issued(_))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn token_formatters_redact() {
		let token = AccessToken::new("super-secret");

		assert_eq!(format!("{token:?}"), "AccessToken(\"<redacted>\")");
		assert_eq!(format!("{token}"), "<redacted>");
		assert_eq!(token.expose(), "super-secret");
	}

	#[test]
	fn session_stores_tokens_and_redirects() {
		let mut session = SessionState::new(Some("https://app.example.com/callback".into()));

		assert_eq!(session.access_token(), None);
		assert_eq!(session.redirect_uri(), Some("https://app.example.com/callback"));

		session.set_access_token(AccessToken::new("token-123"));

		assert_eq!(session.access_token().map(AccessToken::expose), Some("token-123"));

		session.set_redirect_uri("https://app.example.com/next");

		assert_eq!(session.redirect_uri(), Some("https://app.example.com/next"));
	}

	#[test]
	fn outcome_accessors_cover_both_variants() {
		let issued = TokenExchangeOutcome::Issued(AccessToken::new("token-123"));

		assert!(issued.is_issued());
		assert_eq!(issued.token().map(AccessToken::expose), Some("token-123"));

		let missing = TokenExchangeOutcome::Missing;

		assert!(!missing.is_issued());
		assert_eq!(missing.token(), None);
	}
}
