use super::prelude::*;
use crate::authorization::user::authorize_role;

pub fn authorize_actor(actor: &Actor, min_required_role: Role) -> Result<()> {
    authorize_role(actor, min_required_role).map_err(|_| Error::Forbidden)
}
