//! Plain-text event summaries for the system share sheet or the clipboard.

use crate::models::event::Event;
use crate::models::identity::IdentityContext;
use crate::models::settings::Language;

/// Multi-line summary of `event`: title, when, whose, then optional location
/// and description lines.
pub fn share_text(event: &Event, language: Language) -> String {
    let date = match language {
        Language::It => event.date.format("%d/%m/%Y").to_string(),
        Language::En => event.date.format("%Y-%m-%d").to_string(),
    };

    let when = match (event.time, language) {
        (None, Language::It) => format!("Tutto il giorno - {}", date),
        (None, Language::En) => format!("All day - {}", date),
        (Some(time), _) => format!("{} {}", date, time.format("%H:%M")),
    };

    let kind = match (event.is_shared, language) {
        (true, Language::It) => "Evento di coppia",
        (false, Language::It) => "Evento personale",
        (true, Language::En) => "Couple event",
        (false, Language::En) => "Personal event",
    };

    let title = if event.title.trim().is_empty() {
        match language {
            Language::It => "Evento",
            Language::En => "Event",
        }
    } else {
        event.title.trim()
    };

    let mut lines = vec![format!("📅 {}", title), when, kind.to_string()];
    if let Some(location) = event.location.as_deref().filter(|l| !l.trim().is_empty()) {
        lines.push(format!("📍 {}", location.trim()));
    }
    if let Some(description) = event.description.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(format!("📝 {}", description.trim()));
    }
    lines.join("\n")
}

/// Who created the event, as shown on its detail page.
pub fn creator_label(event: &Event, identity: &IdentityContext, language: Language) -> &'static str {
    let mine = identity.is_current_user(&event.owner_id);
    match (mine, language) {
        (true, Language::It) => "Creato da te",
        (false, Language::It) => "Creato dal partner",
        (true, Language::En) => "Created by you",
        (false, Language::En) => "Created by your partner",
    }
}
