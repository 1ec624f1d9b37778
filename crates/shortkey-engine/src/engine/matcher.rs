use super::{Modifiers, Platform};

/// Check whether the modifiers held down satisfy a shortcut's declared set.
///
/// An empty `required` set is a wildcard. Otherwise every required modifier,
/// canonicalized for `platform`, must be held; extra held modifiers are fine.
/// `observed` is the physical state as the key event adapter reports it, which
/// is already in platform form (it only ever reports the primary modifier), so
/// it is compared as is: a Meta press on Linux is not a Ctrl press.
pub fn modifiers_match(required: Modifiers, observed: Modifiers, platform: Platform) -> bool {
    if required.is_empty() {
        return true;
    }
    observed.contains(required.normalize(platform))
}
