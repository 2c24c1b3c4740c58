//! Role-based access guard
//!
//! Admits a request when its session principal holds at least one of the
//! roles the guard was registered with. The guard only decides; rendering the
//! flash message and performing the redirect is left to the HTTP layer via
//! [`GuardDecision::denial`].

use crate::middleware::logging;
use crate::session::SessionPrincipal;

/// Outcome of running a request through an [`AccessGuard`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allowed,
    DeniedUnauthenticated,
    DeniedUnauthorized,
}

/// User-facing text and redirect target for denied requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardMessages {
    pub login_required: String,
    pub unauthorized: String,
    pub redirect_to: String,
}

/// A flash message plus redirect, ready for the HTTP layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    pub message: String,
    pub redirect_to: String,
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allowed)
    }

    /// Renders the denial for this decision, or `None` when allowed.
    pub fn denial(&self, messages: &GuardMessages) -> Option<Denial> {
        let message = match self {
            GuardDecision::Allowed => return None,
            GuardDecision::DeniedUnauthenticated => &messages.login_required,
            GuardDecision::DeniedUnauthorized => &messages.unauthorized,
        };

        Some(Denial {
            message: message.clone(),
            redirect_to: messages.redirect_to.clone(),
        })
    }
}

/// Guard bound to a fixed list of permitted roles at route registration.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    permitted_roles: Vec<String>,
}

impl AccessGuard {
    pub fn new<I, S>(permitted_roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            permitted_roles: permitted_roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Decides whether the request may continue.
    ///
    /// An empty permitted list admits nobody.
    pub fn check<C: SessionPrincipal + ?Sized>(&self, ctx: &C) -> GuardDecision {
        if !ctx.has_principal() {
            logging::log_access_denied(
                GuardDecision::DeniedUnauthenticated,
                None,
                ctx.request_id_of(),
            );
            return GuardDecision::DeniedUnauthenticated;
        }

        let roles = ctx.roles_of();
        let granted = self
            .permitted_roles
            .iter()
            .any(|permitted| roles.contains(permitted));

        if granted {
            GuardDecision::Allowed
        } else {
            logging::log_access_denied(
                GuardDecision::DeniedUnauthorized,
                ctx.username_of(),
                ctx.request_id_of(),
            );
            GuardDecision::DeniedUnauthorized
        }
    }

    /// Consumes the guard into a gate function for route registration.
    pub fn into_gate<C>(self) -> impl Fn(&C) -> GuardDecision + Send + Sync + 'static
    where
        C: SessionPrincipal + ?Sized,
    {
        move |ctx: &C| self.check(ctx)
    }
}

/// Builds a guard admitting principals holding any of `permitted_roles`.
pub fn authorize<I, S>(permitted_roles: I) -> AccessGuard
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    AccessGuard::new(permitted_roles)
}
