use crate::models::category::Category;
use crate::models::event::Event;
use crate::models::identity::IdentityContext;

/// Decide whose event this is from the viewer's point of view.
///
/// Rules apply in order: shared flag, owned by the viewer, owned by the known
/// partner. Anything else falls back to [`Category::Mine`], which is how the
/// calendar has always treated rows from a former partner.
pub fn classify(event: &Event, identity: &IdentityContext) -> Category {
    if event.is_shared {
        return Category::Shared;
    }

    if identity.is_current_user(&event.owner_id) {
        return Category::Mine;
    }

    if identity.is_partner(&event.owner_id) {
        return Category::Partner;
    }

    Category::Mine
}
