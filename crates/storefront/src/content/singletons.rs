//! The About and Contact sections.
//!
//! Each is a singleton: reads return it only while enabled, and the first
//! update creates it from defaults if it does not exist yet. Later updates
//! always edit that same record.

use chrono::Utc;

use super::ContentStore;
use crate::models::{AboutContent, AboutPatch, ContactContent, ContactPatch, Patch, Record};

impl ContentStore {
    /// The About section, if present and enabled.
    #[must_use]
    pub fn about(&self) -> Option<AboutContent> {
        self.about.as_ref().filter(|a| a.is_enabled()).cloned()
    }

    /// Merge `patch` onto the About section, creating it first if needed.
    pub fn update_about(&mut self, patch: AboutPatch) -> AboutContent {
        let now = Utc::now();
        let about = self.about.get_or_insert_with(|| {
            tracing::info!("About section created");
            AboutContent::blank(now)
        });
        patch.apply_to(about);
        about.touch(now);

        tracing::info!(id = %about.id, enabled = about.enabled, "About section updated");
        about.clone()
    }

    /// The contact details, if present and enabled.
    #[must_use]
    pub fn contact(&self) -> Option<ContactContent> {
        self.contact.as_ref().filter(|c| c.is_enabled()).cloned()
    }

    /// Merge `patch` onto the contact details, creating them first if needed.
    pub fn update_contact(&mut self, patch: ContactPatch) -> ContactContent {
        let now = Utc::now();
        let contact = self.contact.get_or_insert_with(|| {
            tracing::info!("Contact details created");
            ContactContent::blank(now)
        });
        patch.apply_to(contact);
        contact.touch(now);

        tracing::info!(id = %contact.id, enabled = contact.enabled, "Contact details updated");
        contact.clone()
    }
}
