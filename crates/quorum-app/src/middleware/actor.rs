use std::str::FromStr;

use salvo::Depot;

use quorum_core::constants::{ACTING_EMAIL_HEADER, ACTING_ROLE_HEADER};
use quorum_core::types::Role;
use quorum_service::auth::{Actor, DepotActor, depot_keys};

/// ## Summary
/// Resolves the acting user from the identity-collaborator headers and stores
/// it in the depot. Requests without a parsable role are recorded as
/// anonymous; handlers that require an actor reject those themselves.
///
/// ## Side Effects
/// Inserts a `DepotActor` into the depot under the acting-user key.
#[salvo::async_trait]
impl salvo::Handler for ActorMiddleware {
    #[tracing::instrument(skip(self, req, depot, _res, _ctrl), fields(
        method = %req.method(),
        path = %req.uri().path()
    ))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        let role = req
            .header::<String>(ACTING_ROLE_HEADER)
            .and_then(|raw| Role::from_str(&raw).ok());
        let email = req.header::<String>(ACTING_EMAIL_HEADER);

        match (role, email) {
            (Some(role), Some(email)) if !email.trim().is_empty() => {
                tracing::debug!(actor_role = %role, actor_email = %email, "Acting user resolved");
                depot.insert(
                    depot_keys::ACTING_USER,
                    DepotActor::Actor(Actor { role, email }),
                );
            }
            _ => {
                tracing::trace!("No acting user on request");
                depot.insert(depot_keys::ACTING_USER, DepotActor::Anonymous);
            }
        }
    }
}

/// ## Summary
/// Middleware handler resolving the acting user.
/// Use this as a hoop on routes whose handlers need an authenticated actor.
pub struct ActorMiddleware;
