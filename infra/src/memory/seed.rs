//! Demo patients and record history.

use chrono::{NaiveDate, TimeZone, Utc};

use mp_core::domain::entities::medical_record::{DocumentType, MedicalRecord, Uploader};
use mp_core::domain::entities::patient::PatientProfile;

pub const JOHN_DOE_ID: &str = "user-1001";
pub const JANE_SMITH_ID: &str = "user-1002";

pub fn demo_patients() -> Vec<PatientProfile> {
    let mut patients = Vec::with_capacity(2);

    if let Some(dob) = NaiveDate::from_ymd_opt(1985, 7, 22) {
        patients.push(
            PatientProfile::new(JOHN_DOE_ID, "patient123", "John Doe", dob, "+1-555-123-4567")
                .with_emergency_contact("Jane Doe (+1-555-987-6543)"),
        );
    }
    if let Some(dob) = NaiveDate::from_ymd_opt(1992, 3, 15) {
        patients.push(PatientProfile::new(
            JANE_SMITH_ID,
            "jane.smith",
            "Jane Smith",
            dob,
            "jane.s@email.com",
        ));
    }

    patients
}

struct SeedRecord {
    id: &'static str,
    user_id: &'static str,
    record_type: DocumentType,
    date: (i32, u32, u32),
    doctor_name: &'static str,
    hospital_name: &'static str,
    notes: Option<&'static str>,
    document_url: Option<&'static str>,
    uploaded_by: Uploader,
    uploaded: (i32, u32, u32),
}

const DEMO_RECORDS: &[SeedRecord] = &[
    SeedRecord {
        id: "rec1",
        user_id: JOHN_DOE_ID,
        record_type: DocumentType::LabReport,
        date: (2024, 5, 15),
        doctor_name: "Dr. Anya Sharma",
        hospital_name: "City Clinic",
        notes: None,
        document_url: Some("#"),
        uploaded_by: Uploader::Hospital,
        uploaded: (2024, 5, 16),
    },
    SeedRecord {
        id: "rec2",
        user_id: JOHN_DOE_ID,
        record_type: DocumentType::Prescription,
        date: (2024, 5, 1),
        doctor_name: "Dr. Ben Carter",
        hospital_name: "General Hospital",
        notes: None,
        document_url: Some("#"),
        uploaded_by: Uploader::Patient,
        uploaded: (2024, 5, 2),
    },
    SeedRecord {
        id: "rec3",
        user_id: JOHN_DOE_ID,
        record_type: DocumentType::Scan,
        date: (2024, 4, 20),
        doctor_name: "Dr. Chloe Davis",
        hospital_name: "Metro Imaging",
        notes: None,
        document_url: Some("#"),
        uploaded_by: Uploader::Hospital,
        uploaded: (2024, 4, 21),
    },
    SeedRecord {
        id: "admin_note1",
        user_id: JOHN_DOE_ID,
        record_type: DocumentType::Note,
        date: (2024, 4, 1),
        doctor_name: "Dr. Ben Carter",
        hospital_name: "General Hospital",
        notes: Some("Patient reported mild side effects to medication."),
        document_url: None,
        uploaded_by: Uploader::Hospital,
        uploaded: (2024, 4, 1),
    },
    SeedRecord {
        id: "rec4",
        user_id: JOHN_DOE_ID,
        record_type: DocumentType::Vaccination,
        date: (2023, 11, 5),
        doctor_name: "Nurse Eva Green",
        hospital_name: "Community Health",
        notes: None,
        document_url: Some("#"),
        uploaded_by: Uploader::Patient,
        uploaded: (2023, 11, 6),
    },
    SeedRecord {
        id: "rec5",
        user_id: JOHN_DOE_ID,
        record_type: DocumentType::LabReport,
        date: (2023, 9, 10),
        doctor_name: "Dr. Anya Sharma",
        hospital_name: "City Clinic",
        notes: None,
        document_url: Some("#"),
        uploaded_by: Uploader::Hospital,
        uploaded: (2023, 9, 11),
    },
    SeedRecord {
        id: "rec10",
        user_id: JANE_SMITH_ID,
        record_type: DocumentType::Prescription,
        date: (2024, 6, 1),
        doctor_name: "Dr. Ken Adams",
        hospital_name: "Downtown Medical",
        notes: None,
        document_url: Some("#"),
        uploaded_by: Uploader::Patient,
        uploaded: (2024, 6, 2),
    },
];

pub fn demo_records() -> Vec<MedicalRecord> {
    DEMO_RECORDS.iter().filter_map(SeedRecord::build).collect()
}

impl SeedRecord {
    fn build(&self) -> Option<MedicalRecord> {
        let date = NaiveDate::from_ymd_opt(self.date.0, self.date.1, self.date.2)?;
        let uploaded = NaiveDate::from_ymd_opt(self.uploaded.0, self.uploaded.1, self.uploaded.2)?
            .and_hms_opt(9, 0, 0)?;

        Some(MedicalRecord {
            id: self.id.to_string(),
            user_id: self.user_id.to_string(),
            record_type: self.record_type,
            date,
            doctor_name: self.doctor_name.to_string(),
            hospital_name: self.hospital_name.to_string(),
            notes: self.notes.map(str::to_string),
            document_url: self.document_url.map(str::to_string),
            uploaded_by: self.uploaded_by,
            upload_timestamp: Utc.from_utc_datetime(&uploaded),
        })
    }
}
