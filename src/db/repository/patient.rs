use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::Patient;

pub fn insert_patient(conn: &Connection, patient: &Patient) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO patients (id, name, mobile_number, date_of_birth, gender, address,
                               medical_alerts, medical_history, current_medications,
                               registration_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            patient.id.to_string(),
            patient.name,
            patient.mobile_number,
            patient.date_of_birth.map(|d| d.to_string()),
            patient.gender,
            patient.address,
            patient.medical_alerts,
            patient.medical_history,
            patient.current_medications,
            patient.registration_date.to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn update_patient(conn: &Connection, patient: &Patient) -> Result<(), DatabaseError> {
    let changed = conn.execute(
        "UPDATE patients SET name = ?2, mobile_number = ?3, date_of_birth = ?4,
                gender = ?5, address = ?6, medical_alerts = ?7, medical_history = ?8,
                current_medications = ?9
         WHERE id = ?1",
        params![
            patient.id.to_string(),
            patient.name,
            patient.mobile_number,
            patient.date_of_birth.map(|d| d.to_string()),
            patient.gender,
            patient.address,
            patient.medical_alerts,
            patient.medical_history,
            patient.current_medications,
        ],
    )?;
    if changed == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "patient".into(),
            id: patient.id.to_string(),
        });
    }
    Ok(())
}

pub fn get_patient(conn: &Connection, id: &Uuid) -> Result<Patient, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, mobile_number, date_of_birth, gender, address,
                medical_alerts, medical_history, current_medications, registration_date
         FROM patients WHERE id = ?1",
    )?;
    match stmt.query_row([id.to_string()], row_to_parts) {
        Ok(parts) => parts_to_patient(parts),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(DatabaseError::NotFound {
            entity_type: "patient".into(),
            id: id.to_string(),
        }),
        Err(e) => Err(DatabaseError::from(e)),
    }
}

pub fn list_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, mobile_number, date_of_birth, gender, address,
                medical_alerts, medical_history, current_medications, registration_date
         FROM patients ORDER BY name",
    )?;

    let rows = stmt.query_map([], row_to_parts)?;

    let mut patients = Vec::new();
    for row in rows {
        patients.push(parts_to_patient(row?)?);
    }
    Ok(patients)
}

type PatientParts = (
    String,
    String,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    String,
    String,
    String,
    String,
);

fn row_to_parts(row: &Row<'_>) -> rusqlite::Result<PatientParts> {
    Ok((
        row.get::<_, String>(0)?,
        row.get::<_, String>(1)?,
        row.get::<_, String>(2)?,
        row.get::<_, Option<String>>(3)?,
        row.get::<_, Option<String>>(4)?,
        row.get::<_, Option<String>>(5)?,
        row.get::<_, String>(6)?,
        row.get::<_, String>(7)?,
        row.get::<_, String>(8)?,
        row.get::<_, String>(9)?,
    ))
}

fn parts_to_patient(parts: PatientParts) -> Result<Patient, DatabaseError> {
    let (
        id,
        name,
        mobile_number,
        date_of_birth,
        gender,
        address,
        medical_alerts,
        medical_history,
        current_medications,
        registration_date,
    ) = parts;

    Ok(Patient {
        id: Uuid::parse_str(&id).map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        name,
        mobile_number,
        date_of_birth: date_of_birth
            .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok()),
        gender,
        address,
        medical_alerts,
        medical_history,
        current_medications,
        registration_date: DateTime::parse_from_rfc3339(&registration_date)
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?
            .with_timezone(&Utc),
    })
}
