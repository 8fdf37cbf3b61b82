//! Mock data loaded at the start of every session.

use crate::entities::{Event, EventKind, Grade, Subject, User};
use chrono::NaiveDate;

pub fn user() -> User {
    User {
        name: "Byron David Martinez".to_string(),
        handle: "@bydavid".to_string(),
        avatar: "https://i.pravatar.cc/150?u=byron".to_string(),
        password: "123".to_string(),
    }
}

pub fn subjects() -> Vec<Subject> {
    vec![
        Subject {
            id: 1,
            name: "Desarrollo de aplicaciones móviles".to_string(),
            teacher: "Juan Perez Gonzales".to_string(),
            start_time: "10:00".to_string(),
            end_time: "12:00".to_string(),
            group: "GT1".to_string(),
            color: "red".to_string(),
            notes: "Lorem ipsum dolor sit amet, consectetur adipiscing elit.".to_string(),
            grades: vec![
                Grade {
                    id: 1,
                    name: "Evaluacion 1".to_string(),
                    score: Some(9.0),
                },
                Grade {
                    id: 2,
                    name: "Evaluacion 2".to_string(),
                    score: None,
                },
            ],
        },
        Subject {
            id: 2,
            name: "Testing y Calidad de Software".to_string(),
            teacher: "Maria Rodriguez".to_string(),
            start_time: "13:00".to_string(),
            end_time: "15:00".to_string(),
            group: "GT2".to_string(),
            color: "green".to_string(),
            notes: "Traer laptop para pruebas.".to_string(),
            grades: Vec::new(),
        },
        Subject {
            id: 3,
            name: "Redes".to_string(),
            teacher: "Carlos Lopez".to_string(),
            start_time: "08:00".to_string(),
            end_time: "10:00".to_string(),
            group: "GT1".to_string(),
            color: "yellow".to_string(),
            notes: String::new(),
            grades: Vec::new(),
        },
    ]
}

/// Seeded events, both scheduled on `today` so the Home screen has content.
pub fn events(today: NaiveDate) -> Vec<Event> {
    vec![
        Event {
            id: 1,
            subject_id: Some(1),
            title: "Tutoría".to_string(),
            kind: EventKind::Class,
            date: Some(today),
            start_time: "10:00 a.m.".to_string(),
            end_time: "12:00 p.m.".to_string(),
            notes: "Revisión de avances del proyecto final.".to_string(),
            completed: false,
            attendance: Some(false),
            grade: None,
        },
        Event {
            id: 2,
            subject_id: Some(2),
            title: "Entrega de laboratorio 2".to_string(),
            kind: EventKind::Assignment,
            date: Some(today),
            start_time: "10:00 a.m.".to_string(),
            end_time: "12:00 p.m.".to_string(),
            notes: "Entrega en formato PDF en el portal.".to_string(),
            completed: false,
            attendance: None,
            grade: None,
        },
    ]
}
