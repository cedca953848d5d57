use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{CaseId, Gender};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseAuthor {
    pub name: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub age: u8,
    pub gender: Gender,
}

/// A published case as shown in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: CaseId,
    pub author: CaseAuthor,
    pub patient: PatientInfo,
    pub clinical_presentation: String,
    pub image_count: usize,
    pub imaging_findings: String,
    pub differential_diagnosis: Vec<String>,
    pub final_diagnosis: String,
    pub discussion: String,
    pub tags: Vec<String>,
    pub likes: u32,
    pub comments: u32,
    pub created_at: DateTime<Utc>,
    pub is_liked: bool,
    pub is_saved: bool,
}

impl CaseStudy {
    pub fn displayed_likes(&self) -> u32 {
        self.likes + u32::from(self.is_liked)
    }
}

/// Compact case entry listed on the profile's saved/posted tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCase {
    pub id: CaseId,
    pub title: String,
    pub patient_age: u8,
    pub patient_gender: Gender,
    pub tags: Vec<String>,
    pub likes: Option<u32>,
    pub comments: Option<u32>,
}

/// Coarse "N units ago" label used on case cards.
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    if elapsed < Duration::minutes(1) {
        return "just now".to_string();
    }

    let (amount, unit) = if elapsed < Duration::hours(1) {
        (elapsed.num_minutes(), "minute")
    } else if elapsed < Duration::days(1) {
        (elapsed.num_hours(), "hour")
    } else {
        (elapsed.num_days(), "day")
    };
    let plural = if amount == 1 { "" } else { "s" };
    format!("{amount} {unit}{plural} ago")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Demo feed content; timestamps are anchored to `now` so ages stay stable.
pub fn sample_feed(now: DateTime<Utc>) -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            id: CaseId(1),
            author: CaseAuthor {
                name: "Dr. Sarah Chen".to_string(),
                title: "Interventional Radiologist".to_string(),
            },
            patient: PatientInfo {
                age: 45,
                gender: Gender::Female,
            },
            clinical_presentation: "A 45-year-old female presents with acute onset of severe chest pain radiating to the back. Patient has a history of hypertension and smoking. Vital signs show elevated blood pressure and tachycardia.".to_string(),
            image_count: 2,
            imaging_findings: "CT angiography of the chest demonstrates a Stanford Type B aortic dissection extending from the left subclavian artery to the level of the celiac axis. The false lumen shows delayed enhancement with contrast. No evidence of branch vessel involvement.".to_string(),
            differential_diagnosis: strings(&[
                "Aortic dissection (Type A vs Type B)",
                "Pulmonary embolism",
                "Acute coronary syndrome",
                "Aortic intramural hematoma",
            ]),
            final_diagnosis: "Stanford Type B Aortic Dissection".to_string(),
            discussion: "Aortic dissection is a life-threatening condition requiring immediate recognition and management. Type B dissections typically originate distal to the left subclavian artery and can be managed conservatively if uncomplicated. Key imaging features include the presence of an intimal flap separating true and false lumens, with the false lumen often showing delayed enhancement.".to_string(),
            tags: strings(&["Cardiovascular", "Emergency", "CT Angiography", "Aortic Dissection"]),
            likes: 24,
            comments: 8,
            created_at: now - Duration::hours(2),
            is_liked: false,
            is_saved: false,
        },
        CaseStudy {
            id: CaseId(2),
            author: CaseAuthor {
                name: "Dr. Michael Rodriguez".to_string(),
                title: "Pediatric Radiologist".to_string(),
            },
            patient: PatientInfo {
                age: 8,
                gender: Gender::Male,
            },
            clinical_presentation: "An 8-year-old boy presents with persistent cough and fever for 3 weeks, not responding to antibiotic therapy. Parents report night sweats and weight loss. No known sick contacts.".to_string(),
            image_count: 1,
            imaging_findings: "Chest X-ray shows a large mediastinal mass with bilateral hilar lymphadenopathy. CT chest reveals a heterogeneous anterior mediastinal mass measuring 8 cm in largest dimension with areas of necrosis. No pleural effusion.".to_string(),
            differential_diagnosis: strings(&[
                "Lymphoblastic lymphoma",
                "Hodgkin lymphoma",
                "Thymoma (rare in children)",
                "Teratoma",
            ]),
            final_diagnosis: "T-cell Lymphoblastic Lymphoma".to_string(),
            discussion: "Anterior mediastinal masses in children have a limited differential diagnosis. T-cell lymphoblastic lymphoma is the most common cause of anterior mediastinal masses in this age group. The key is to recognize the urgency of this presentation as these patients can develop superior vena cava syndrome or airway compression.".to_string(),
            tags: strings(&["Pediatric", "Lymphoma", "Chest X-ray", "Mediastinal Mass"]),
            likes: 18,
            comments: 12,
            created_at: now - Duration::hours(5),
            is_liked: true,
            is_saved: true,
        },
    ]
}

pub fn sample_saved_cases() -> Vec<ProfileCase> {
    vec![
        ProfileCase {
            id: CaseId(101),
            title: "Acute MI with ST Elevation".to_string(),
            patient_age: 45,
            patient_gender: Gender::Male,
            tags: strings(&["Cardiology", "Emergency", "ECG"]),
            likes: None,
            comments: None,
        },
        ProfileCase {
            id: CaseId(102),
            title: "Pneumothorax in Young Adult".to_string(),
            patient_age: 22,
            patient_gender: Gender::Female,
            tags: strings(&["Chest X-ray", "Emergency", "Respiratory"]),
            likes: None,
            comments: None,
        },
    ]
}

pub fn sample_posted_cases() -> Vec<ProfileCase> {
    vec![
        ProfileCase {
            id: CaseId(103),
            title: "Complex Spinal Fracture".to_string(),
            patient_age: 35,
            patient_gender: Gender::Male,
            tags: strings(&["Spine", "Trauma", "CT"]),
            likes: Some(24),
            comments: Some(12),
        },
        ProfileCase {
            id: CaseId(104),
            title: "Pediatric Brain Tumor".to_string(),
            patient_age: 8,
            patient_gender: Gender::Female,
            tags: strings(&["Pediatric", "Neurology", "MRI"]),
            likes: Some(18),
            comments: Some(8),
        },
    ]
}
