//! Authorization decisions for registry mutations.
//!
//! Pure functions over explicit caller / owner / certifier / status values so
//! they can be evaluated without touching storage.

use cosmwasm_std::Addr;
use registry_shared::IssuerStatus;

/// True iff the caller is the certifier or the owner.
pub fn is_owner_or_certifier(caller: &Addr, owner: &Addr, certifier: &Addr) -> bool {
    caller == certifier || caller == owner
}

/// Whether `caller` may move an issuer (or one of its bindings) from
/// `current` to `requested`.
///
/// The certifier may perform any transition. The owner may only move between
/// non-conflict states: once an issuer is `InConflict` only the certifier can
/// release it, and only the certifier can put it there.
pub fn status_transition_allowed(
    caller: &Addr,
    owner: &Addr,
    certifier: &Addr,
    current: IssuerStatus,
    requested: IssuerStatus,
) -> bool {
    if caller == certifier {
        return true;
    }

    caller == owner
        && current != IssuerStatus::InConflict
        && requested != IssuerStatus::InConflict
}
