//! Request context
//!
//! Minimal view of the session that the access guard needs.

use super::Principal;

/// What the access guard reads from an incoming request's session.
pub trait SessionPrincipal {
    /// Whether the request carries an authenticated principal.
    fn has_principal(&self) -> bool;

    /// Roles held by the principal; empty when anonymous.
    fn roles_of(&self) -> &[String];

    /// Principal username, used for diagnostics only.
    fn username_of(&self) -> Option<&str>;

    /// Identifier of the request being checked, used for diagnostics only.
    fn request_id_of(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub principal: Option<Principal>,
    pub request_id: Option<String>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(principal: Principal) -> Self {
        Self {
            principal: Some(principal),
            request_id: None,
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

impl SessionPrincipal for Option<Principal> {
    fn has_principal(&self) -> bool {
        self.is_some()
    }

    fn roles_of(&self) -> &[String] {
        self.as_ref().map(|p| p.roles.as_slice()).unwrap_or(&[])
    }

    fn username_of(&self) -> Option<&str> {
        self.as_ref().map(|p| p.username.as_str())
    }
}

impl SessionPrincipal for RequestContext {
    fn has_principal(&self) -> bool {
        self.principal.has_principal()
    }

    fn roles_of(&self) -> &[String] {
        self.principal.roles_of()
    }

    fn username_of(&self) -> Option<&str> {
        self.principal.username_of()
    }

    fn request_id_of(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_is_exposed() {
        let ctx = RequestContext::anonymous().with_request_id("req-42");
        assert_eq!(ctx.request_id_of(), Some("req-42"));
        assert_eq!(RequestContext::anonymous().request_id_of(), None);
        assert_eq!(None::<Principal>.request_id_of(), None);
    }

    #[test]
    fn test_authenticated_context_exposes_principal() {
        let ctx = RequestContext::authenticated(Principal::new("bob", vec!["viewer".into()]));
        assert!(ctx.has_principal());
        assert_eq!(ctx.username_of(), Some("bob"));
        assert_eq!(ctx.roles_of(), ["viewer".to_string()]);
    }
}
