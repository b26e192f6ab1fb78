//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplicating catalog literals.

#![doc(hidden)]

use crate::types::{
    Catalog, Department, ResourceKind, Semester, StudyResource, Subject, VideoLecture,
};

/// Create a department with no description.
pub fn make_department(
    id: &str,
    name: &str,
    subjects: Vec<Subject>,
    videos: Vec<VideoLecture>,
) -> Department {
    Department {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        subjects,
        videos,
    }
}

/// Create a subject with no description, link, or resources.
pub fn make_subject(id: &str, title: &str, semester: Semester) -> Subject {
    Subject {
        id: id.to_string(),
        title: title.to_string(),
        semester,
        description: String::new(),
        link: None,
        resources: vec![],
    }
}

/// Create a video lecture not attached to any subject.
pub fn make_video(id: &str, title: &str, instructor: &str, semester: Semester) -> VideoLecture {
    VideoLecture {
        id: id.to_string(),
        title: title.to_string(),
        instructor: instructor.to_string(),
        duration: "45:00".to_string(),
        semester,
        subject_id: None,
    }
}

/// Create a PDF resource.
pub fn make_resource(id: &str, title: &str, kind: ResourceKind) -> StudyResource {
    StudyResource {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        url: format!("https://files.example.org/{}.pdf", id),
    }
}

/// The minimal catalog: one department, one subject, one video.
///
/// `"math"` hits only the subject; `"ce"` hits only the department
/// description ("science").
pub fn sample_catalog() -> Catalog {
    let mut maths = make_subject("ce_1002", "Mathematics I", Semester::First);
    maths.resources = vec![make_resource(
        "ce_1002_notes",
        "Mathematics I Notes",
        ResourceKind::Notes,
    )];

    let mut dept = make_department(
        "ce",
        "Computer Engineering",
        vec![maths],
        vec![make_video(
            "ce_v1",
            "React JS Crash Course",
            "Traversy Media",
            Semester::Fourth,
        )],
    );
    dept.description = "Programming, networks and computer science".to_string();

    Catalog::new(vec![dept])
}

/// A richer two-department catalog for navigation tests.
pub fn campus_catalog() -> Catalog {
    let mut maths = make_subject("ce_1002", "Mathematics I", Semester::First);
    maths.resources = vec![
        make_resource("ce_1002_notes", "Mathematics I Notes", ResourceKind::Notes),
        make_resource("ce_1002_paper", "Mathematics I Paper 2023", ResourceKind::Paper),
    ];
    let mut ds = make_subject("ce_3001", "Data Structures", Semester::Third);
    ds.resources = vec![make_resource(
        "ce_3001_syllabus",
        "Data Structures Syllabus",
        ResourceKind::Syllabus,
    )];
    let mut lists = make_video("ce_v2", "Linked Lists Explained", "A. Rao", Semester::Third);
    lists.subject_id = Some("ce_3001".to_string());

    let mut ce = make_department(
        "ce",
        "Computer Engineering",
        vec![
            maths,
            make_subject("ce_1003", "Basic Electronics", Semester::First),
            ds,
            make_subject("ce_3002", "Database Management", Semester::Third),
        ],
        vec![
            make_video("ce_v1", "React JS Crash Course", "Traversy Media", Semester::Fourth),
            lists,
        ],
    );
    ce.description = "Programming, networks and computer science".to_string();

    let mut thermo_video = make_video("me_v1", "Thermodynamics Basics", "K. Iyer", Semester::Third);
    thermo_video.subject_id = Some("me_3001".to_string());
    let mut me = make_department(
        "me",
        "Mechanical Engineering",
        vec![
            make_subject("me_1001", "Engineering Drawing", Semester::First),
            make_subject("me_3001", "Thermodynamics", Semester::Third),
        ],
        vec![thermo_video],
    );
    me.description = "Machines, manufacturing and thermal systems".to_string();

    Catalog::new(vec![ce, me])
}
