//! Editable state of the case upload form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Gender;

pub const MAX_PATIENT_AGE: u8 = 130;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("patient age '{0}' is not a whole number")]
    InvalidAge(String),
    #[error("patient age {0} is above {MAX_PATIENT_AGE}")]
    AgeOutOfRange(u32),
    #[error("clinical presentation is required")]
    MissingPresentation,
    #[error("final diagnosis is required")]
    MissingDiagnosis,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDraft {
    pub patient_age: String,
    pub patient_gender: Option<Gender>,
    pub clinical_presentation: String,
    pub imaging_findings: String,
    pub differential_diagnoses: Vec<String>,
    pub final_diagnosis: String,
    pub discussion: String,
    pub tags: Vec<String>,
}

/// A draft that passed publish validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSubmission {
    pub patient_age: Option<u8>,
    pub patient_gender: Option<Gender>,
    pub clinical_presentation: String,
    pub imaging_findings: String,
    pub differential_diagnoses: Vec<String>,
    pub final_diagnosis: String,
    pub discussion: String,
    pub tags: Vec<String>,
}

fn push_unique(list: &mut Vec<String>, text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() || list.iter().any(|existing| existing == text) {
        return false;
    }
    list.push(text.to_string());
    true
}

fn remove_at(list: &mut Vec<String>, index: usize) -> Option<String> {
    (index < list.len()).then(|| list.remove(index))
}

impl CaseDraft {
    pub fn add_differential(&mut self, text: &str) -> bool {
        push_unique(&mut self.differential_diagnoses, text)
    }

    pub fn remove_differential(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.differential_diagnoses, index)
    }

    pub fn add_tag(&mut self, text: &str) -> bool {
        push_unique(&mut self.tags, text)
    }

    pub fn remove_tag(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.tags, index)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Validates the draft for "Publish Case".
    pub fn submission(&self) -> Result<CaseSubmission, DraftError> {
        let patient_age = parse_age(&self.patient_age)?;
        if self.clinical_presentation.trim().is_empty() {
            return Err(DraftError::MissingPresentation);
        }
        if self.final_diagnosis.trim().is_empty() {
            return Err(DraftError::MissingDiagnosis);
        }

        Ok(CaseSubmission {
            patient_age,
            patient_gender: self.patient_gender,
            clinical_presentation: self.clinical_presentation.trim().to_string(),
            imaging_findings: self.imaging_findings.trim().to_string(),
            differential_diagnoses: self.differential_diagnoses.clone(),
            final_diagnosis: self.final_diagnosis.trim().to_string(),
            discussion: self.discussion.trim().to_string(),
            tags: self.tags.clone(),
        })
    }
}

fn parse_age(raw: &str) -> Result<Option<u8>, DraftError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let age = raw
        .parse::<u32>()
        .map_err(|_| DraftError::InvalidAge(raw.to_string()))?;
    if age > u32::from(MAX_PATIENT_AGE) {
        return Err(DraftError::AgeOutOfRange(age));
    }
    Ok(Some(age as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn publishable() -> CaseDraft {
        CaseDraft {
            patient_age: "45".to_string(),
            clinical_presentation: "Acute chest pain".to_string(),
            final_diagnosis: "Aortic dissection".to_string(),
            ..CaseDraft::default()
        }
    }

    #[test]
    fn trims_and_rejects_blank_or_duplicate_entries() {
        let mut draft = CaseDraft::default();
        assert!(draft.add_tag("  Chest CT "));
        assert!(!draft.add_tag("Chest CT"));
        assert!(!draft.add_tag("   "));
        assert!(draft.add_tag("Pediatric"));
        assert_eq!(draft.tags, vec!["Chest CT", "Pediatric"]);

        assert!(draft.add_differential("Pulmonary embolism"));
        assert!(!draft.add_differential(" Pulmonary embolism"));
        assert_eq!(draft.differential_diagnoses.len(), 1);
    }

    #[test]
    fn removes_by_index_and_ignores_out_of_range() {
        let mut draft = CaseDraft::default();
        draft.add_tag("a");
        draft.add_tag("b");
        assert_eq!(draft.remove_tag(5), None);
        assert_eq!(draft.remove_tag(0).as_deref(), Some("a"));
        assert_eq!(draft.tags, vec!["b"]);
        assert_eq!(draft.remove_differential(0), None);
    }

    #[test]
    fn publish_requires_presentation_and_diagnosis() {
        let mut draft = publishable();
        draft.final_diagnosis = "  ".to_string();
        assert_eq!(draft.submission(), Err(DraftError::MissingDiagnosis));

        draft = publishable();
        draft.clinical_presentation.clear();
        assert_eq!(draft.submission(), Err(DraftError::MissingPresentation));

        let submission = publishable().submission().expect("valid draft");
        assert_eq!(submission.patient_age, Some(45));
    }

    #[test]
    fn age_is_optional_but_must_be_sane() {
        let mut draft = publishable();
        draft.patient_age.clear();
        assert_eq!(draft.submission().expect("no age").patient_age, None);

        draft.patient_age = "forty".to_string();
        assert_eq!(
            draft.submission(),
            Err(DraftError::InvalidAge("forty".to_string()))
        );

        draft.patient_age = "200".to_string();
        assert_eq!(draft.submission(), Err(DraftError::AgeOutOfRange(200)));
    }

    #[test]
    fn clear_resets_everything() {
        let mut draft = publishable();
        draft.add_tag("x");
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
    }
}
