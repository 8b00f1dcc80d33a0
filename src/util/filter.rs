use crate::session::Auth;

/// Per-entity access gate, checked against a local snapshot.
pub trait Filter {
    /// whether `auth` may see the entity at all
    fn readable(&self, auth: &Auth) -> bool;
    /// whether `auth` may mutate or delete the entity
    fn writable(&self, auth: &Auth) -> bool;
}
