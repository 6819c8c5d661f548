#![allow(dead_code)]

use directory_core::{ConsultationMode, Doctor, DoctorId};

pub fn doctor(
    id: i64,
    name: &str,
    specialties: &[&str],
    experience: u64,
    fee: u64,
    modes: &[ConsultationMode],
) -> Doctor {
    Doctor {
        id: DoctorId::Number(id),
        name: name.to_string(),
        specialties: specialties.iter().map(|s| s.to_string()).collect(),
        experience,
        consultation_fee: fee,
        consultation_modes: modes.to_vec(),
        clinic: None,
        location: None,
        image: None,
    }
}

pub fn sample_doctors() -> Vec<Doctor> {
    use ConsultationMode::{InClinic, VideoConsult};
    vec![
        doctor(1, "Dr. Asha Rao", &["Cardiologist"], 10, 500, &[VideoConsult]),
        doctor(2, "Dr. Vikram Nair", &["Dentist", "Orthodontist"], 4, 300, &[InClinic]),
        doctor(3, "Dr. Meera Iyer", &["Cardiologist"], 15, 500, &[VideoConsult, InClinic]),
        doctor(4, "Dr. Karan Mehta", &["General Physician"], 10, 200, &[]),
        doctor(5, "Dr. Ravi Shah", &["Dentist"], 22, 800, &[InClinic]),
    ]
}

pub fn ids(doctors: &[Doctor]) -> Vec<DoctorId> {
    doctors.iter().map(|d| d.id.clone()).collect()
}

pub fn numeric_ids(values: &[i64]) -> Vec<DoctorId> {
    values.iter().map(|v| DoctorId::Number(*v)).collect()
}
