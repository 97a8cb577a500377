//! Per-variant edit sessions.
//!
//! An [`EditSession`] owns the live working copy of one variant: a plain-text
//! buffer and its structured XML buffer. Every mutation is an explicit
//! [`Transition`] naming which side is authoritative; the other side is
//! always re-derived through the codec in the same step, which is what makes
//! the consistency invariant mechanically checkable.

use dms_codec::{CodecError, ModuleIdentity, decode, encode};
use dms_model::{DataModule, InfoVariant, ModuleKey, ModulePatch};

use crate::VariantPair;

/// A state transition of an edit session. Exactly one side of the buffer
/// pair is the source of truth for each transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Re-read both buffers from the seeded record.
    Seed,
    /// The text panel was edited; the structured form is regenerated.
    EditText(String),
    /// The XML panel was edited; the text is re-derived (tolerantly).
    EditStructured(String),
}

/// Live buffers for one variant of the selected data module.
///
/// The buffers are a working copy, distinct from the persisted record until
/// an explicit save; they are replaced only by a new [`Transition::Seed`]
/// when the underlying record identity changes.
#[derive(Debug, Clone)]
pub struct EditSession {
    record: DataModule,
    text: String,
    structured: String,
}

impl EditSession {
    /// Seed a session from a stored record.
    ///
    /// Text seeds from `content`; the structured buffer takes the persisted
    /// `xml_content` when present and non-empty, otherwise it is generated
    /// from the text. Seeding twice from the same record is idempotent.
    pub fn seed(record: &DataModule) -> Result<Self, CodecError> {
        let mut session = Self {
            record: record.clone(),
            text: String::new(),
            structured: String::new(),
        };
        session.apply(Transition::Seed)?;
        Ok(session)
    }

    pub fn key(&self) -> ModuleKey {
        self.record.key()
    }

    pub fn record(&self) -> &DataModule {
        &self.record
    }

    /// The plain-text buffer.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The structured XML buffer.
    pub fn structured(&self) -> &str {
        &self.structured
    }

    /// Apply a transition, keeping both buffers consistent.
    pub fn apply(&mut self, transition: Transition) -> Result<(), CodecError> {
        match transition {
            Transition::Seed => {
                self.text = self.record.content.clone();
                self.structured = if self.record.xml_content.is_empty() {
                    encode(Some(&ModuleIdentity::from(&self.record)), &self.text)?
                } else {
                    self.record.xml_content.clone()
                };
                tracing::debug!(key = %self.key(), "seeded edit session");
            }
            Transition::EditText(text) => {
                self.structured = encode(Some(&ModuleIdentity::from(&self.record)), &text)?;
                self.text = text;
                tracing::debug!(key = %self.key(), "text edit, structured regenerated");
            }
            Transition::EditStructured(structured) => {
                self.text = decode(&structured);
                self.structured = structured;
                tracing::debug!(key = %self.key(), "structured edit, text re-derived");
            }
        }
        Ok(())
    }

    /// The save payload for this variant's current buffers.
    ///
    /// Saving sends the working copy to the persistence gateway; it never
    /// mutates the session, so unsaved edits survive a failed save.
    pub fn save_patch(&self) -> ModulePatch {
        ModulePatch {
            content: Some(self.text.clone()),
            xml_content: Some(self.structured.clone()),
        }
    }
}

/// The edit sessions of the currently selected data module, one per variant.
#[derive(Debug, Clone, Default)]
pub struct VariantSessions {
    verbatim: Option<EditSession>,
    simplified: Option<EditSession>,
}

impl VariantSessions {
    /// Seed sessions for every resolved variant of the selection.
    pub fn seed_from(pair: &VariantPair<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            verbatim: pair.verbatim.map(EditSession::seed).transpose()?,
            simplified: pair.simplified.map(EditSession::seed).transpose()?,
        })
    }

    pub fn session(&self, variant: InfoVariant) -> Option<&EditSession> {
        match variant {
            InfoVariant::Verbatim => self.verbatim.as_ref(),
            InfoVariant::Simplified => self.simplified.as_ref(),
        }
    }

    pub fn session_mut(&mut self, variant: InfoVariant) -> Option<&mut EditSession> {
        match variant {
            InfoVariant::Verbatim => self.verbatim.as_mut(),
            InfoVariant::Simplified => self.simplified.as_mut(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.verbatim.is_none() && self.simplified.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dms_model::{DmType, Dmc};

    fn record(content: &str, xml_content: &str) -> DataModule {
        let mut module = DataModule::new(
            Dmc::new("DMC-DMS-00-000-00-00-00-00-00-000-A-A-00-00").expect("valid dmc"),
            InfoVariant::Verbatim,
            "Fuel system description",
            DmType::Desc,
        );
        module.content = content.to_string();
        module.xml_content = xml_content.to_string();
        module
    }

    #[test]
    fn seed_generates_structured_form_when_none_is_stored() {
        let session = EditSession::seed(&record("Drain the fuel.", "")).expect("seed");
        assert_eq!(session.text(), "Drain the fuel.");
        assert_eq!(decode(session.structured()), "Drain the fuel.");
    }

    #[test]
    fn seed_prefers_stored_xml_content_when_present() {
        let stored = "<dataModule><content><![CDATA[stored]]></content></dataModule>";
        let session = EditSession::seed(&record("text body", stored)).expect("seed");
        assert_eq!(session.text(), "text body");
        assert_eq!(session.structured(), stored);
    }

    #[test]
    fn seeding_twice_is_idempotent() {
        let record = record("Drain the fuel.", "");
        let first = EditSession::seed(&record).expect("seed");
        let mut second = EditSession::seed(&record).expect("seed");
        second.apply(Transition::Seed).expect("reseed");
        assert_eq!(first.text(), second.text());
        assert_eq!(first.structured(), second.structured());
    }

    #[test]
    fn text_edit_makes_text_authoritative() {
        let mut session = EditSession::seed(&record("old", "")).expect("seed");
        session
            .apply(Transition::EditText("Engine check OK".to_string()))
            .expect("edit text");
        assert_eq!(session.text(), "Engine check OK");
        assert_eq!(decode(session.structured()), "Engine check OK");
    }

    #[test]
    fn structured_edit_makes_structured_authoritative() {
        let mut session = EditSession::seed(&record("old", "")).expect("seed");
        let edited = "<dataModule><content><![CDATA[hand edited]]></content></dataModule>";
        session
            .apply(Transition::EditStructured(edited.to_string()))
            .expect("edit structured");
        assert_eq!(session.structured(), edited);
        assert_eq!(session.text(), "hand edited");
    }

    #[test]
    fn invalid_structured_edit_degrades_text_to_empty() {
        let mut session = EditSession::seed(&record("old", "")).expect("seed");
        session
            .apply(Transition::EditStructured("<broken".to_string()))
            .expect("edit structured");
        assert_eq!(session.structured(), "<broken");
        assert_eq!(session.text(), "");
    }

    #[test]
    fn save_patch_carries_both_buffers() {
        let mut session = EditSession::seed(&record("", "")).expect("seed");
        session
            .apply(Transition::EditText("body".to_string()))
            .expect("edit text");
        let patch = session.save_patch();
        assert_eq!(patch.content.as_deref(), Some("body"));
        assert_eq!(patch.xml_content.as_deref(), Some(session.structured()));
    }
}
