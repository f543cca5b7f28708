use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::enums::ProtocolTier;
use crate::models::{MedicationEntry, Prescription};

pub fn insert_prescription(
    conn: &Connection,
    prescription: &Prescription,
) -> Result<(), DatabaseError> {
    let medications = serde_json::to_string(&prescription.medications)?;
    conn.execute(
        "INSERT INTO prescriptions (id, patient_id, condition_id, tier, medications,
                                    instructions, prescribed_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            prescription.id.to_string(),
            prescription.patient_id.to_string(),
            prescription.condition_id,
            prescription.tier.as_str(),
            medications,
            prescription.instructions,
            prescription.prescribed_at.to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn list_prescriptions_for_patient(
    conn: &Connection,
    patient_id: &Uuid,
) -> Result<Vec<Prescription>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, condition_id, tier, medications, instructions, prescribed_at
         FROM prescriptions WHERE patient_id = ?1 ORDER BY prescribed_at DESC",
    )?;

    let rows = stmt.query_map([patient_id.to_string()], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, String>(5)?,
            row.get::<_, String>(6)?,
        ))
    })?;

    let mut prescriptions = Vec::new();
    for row in rows {
        let (id, patient_id, condition_id, tier, medications, instructions, prescribed_at) = row?;
        let medications: Vec<MedicationEntry> = serde_json::from_str(&medications)?;
        prescriptions.push(Prescription {
            id: Uuid::parse_str(&id)
                .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
            patient_id: Uuid::parse_str(&patient_id)
                .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
            condition_id,
            tier: ProtocolTier::from_str(&tier)?,
            medications,
            instructions,
            prescribed_at: DateTime::parse_from_rfc3339(&prescribed_at)
                .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?
                .with_timezone(&Utc),
        });
    }
    Ok(prescriptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::patient::insert_patient;
    use crate::db::sqlite::open_memory_database;
    use crate::models::Patient;

    fn sample_prescription(patient_id: Uuid) -> Prescription {
        Prescription {
            id: Uuid::new_v4(),
            patient_id,
            condition_id: "C002".into(),
            tier: ProtocolTier::Standard,
            medications: vec![
                MedicationEntry {
                    name: "Amoxicillin".into(),
                    dosage: "500mg".into(),
                    frequency: "TDS".into(),
                    duration: "5 days".into(),
                },
                MedicationEntry::named("Panadol"),
            ],
            instructions: "Complete the antibiotic course.".into(),
            prescribed_at: Utc::now(),
        }
    }

    #[test]
    fn insert_and_list_round_trip() {
        let conn = open_memory_database().unwrap();
        let patient = Patient::new("Ayesha Khan", "0300-1234567");
        insert_patient(&conn, &patient).unwrap();

        let prescription = sample_prescription(patient.id);
        insert_prescription(&conn, &prescription).unwrap();

        let loaded = list_prescriptions_for_patient(&conn, &patient.id).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].condition_id, "C002");
        assert_eq!(loaded[0].tier, ProtocolTier::Standard);
        assert_eq!(loaded[0].medications.len(), 2);
        assert_eq!(loaded[0].medications[0].name, "Amoxicillin");
    }

    #[test]
    fn list_for_other_patient_is_empty() {
        let conn = open_memory_database().unwrap();
        let patient = Patient::new("Ayesha Khan", "0300-1234567");
        insert_patient(&conn, &patient).unwrap();
        insert_prescription(&conn, &sample_prescription(patient.id)).unwrap();

        let other = list_prescriptions_for_patient(&conn, &Uuid::new_v4()).unwrap();
        assert!(other.is_empty());
    }

    #[test]
    fn foreign_key_requires_existing_patient() {
        let conn = open_memory_database().unwrap();
        let orphan = sample_prescription(Uuid::new_v4());
        assert!(insert_prescription(&conn, &orphan).is_err());
    }
}
