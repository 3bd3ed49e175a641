//! 存储层集成测试，使用内存 SQLite

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};

use rust_tracker_next::errors::TrackerError;
use rust_tracker_next::models::assignments::requests::CreateAssignmentRequest;
use rust_tracker_next::models::courses::requests::{CourseListQuery, CreateCourseRequest};
use rust_tracker_next::models::lecturers::requests::CreateLecturerRequest;
use rust_tracker_next::models::reports::requests::SortOrder;
use rust_tracker_next::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use rust_tracker_next::models::submissions::requests::{
    CreateSubmissionRequest, SubmissionListQuery,
};
use rust_tracker_next::storage::sea_orm_storage::SeaOrmStorage;
use rust_tracker_next::storage::Storage;

async fn setup_storage() -> SeaOrmStorage {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    // 内存库只允许一个连接，否则各连接各自为库
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    SeaOrmStorage::new_with_connection(db)
}

fn student(name: &str) -> CreateStudentRequest {
    CreateStudentRequest {
        name: name.to_string(),
        student_number: None,
        email: None,
        photo_path: None,
    }
}

fn student_with_number(name: &str, number: &str) -> CreateStudentRequest {
    CreateStudentRequest {
        name: name.to_string(),
        student_number: Some(number.to_string()),
        email: None,
        photo_path: None,
    }
}

async fn seed_course(storage: &dyn Storage) -> i64 {
    let lecturer = storage
        .create_lecturer(CreateLecturerRequest {
            name: "Dr. Tan".to_string(),
            email: None,
        })
        .await
        .expect("create lecturer");
    let course = storage
        .create_course(CreateCourseRequest {
            course_code: "CS101".to_string(),
            course_name: "Databases".to_string(),
            semester: 1,
            lecturer_id: lecturer.id,
        })
        .await
        .expect("create course");
    course.id
}

async fn seed_assignment(storage: &dyn Storage, course_id: i64, due_at: i64) -> i64 {
    storage
        .create_assignment(CreateAssignmentRequest {
            course_id,
            title: "Homework".to_string(),
            description: None,
            due_at,
            max_score: None,
        })
        .await
        .expect("create assignment")
        .id
}

async fn seed_submission(
    storage: &dyn Storage,
    assignment_id: i64,
    student_id: i64,
    submitted_at: i64,
    score: Option<i32>,
) -> i64 {
    storage
        .create_submission(CreateSubmissionRequest {
            assignment_id,
            student_id,
            submitted_at: Some(submitted_at),
            file_path: "uploads/hw.pdf".to_string(),
            score,
            remark: None,
        })
        .await
        .expect("create submission")
        .id
}

fn no_filter() -> SubmissionListQuery {
    SubmissionListQuery {
        assignment_id: None,
        student_id: None,
        course_id: None,
    }
}

#[tokio::test]
async fn student_numbers_are_assigned_sequentially() {
    let storage = setup_storage().await;

    let first = storage.create_student(student("Alice")).await.unwrap();
    let second = storage.create_student(student("Bob")).await.unwrap();
    let third = storage.create_student(student("Cara")).await.unwrap();

    assert_eq!(first.student_number, "001");
    assert_eq!(second.student_number, "002");
    assert_eq!(third.student_number, "003");
}

#[tokio::test]
async fn student_numbers_widen_past_three_digits() {
    let storage = setup_storage().await;

    let last_three_digit = storage
        .create_student(student_with_number("Alice", "999"))
        .await
        .unwrap();
    assert_eq!(last_three_digit.student_number, "999");

    // "1000" 在字符串序下小于 "999"，必须按数值序取最大
    let bob = storage.create_student(student("Bob")).await.unwrap();
    assert_eq!(bob.student_number, "1000");
    let cara = storage.create_student(student("Cara")).await.unwrap();
    assert_eq!(cara.student_number, "1001");
}

#[tokio::test]
async fn explicit_student_number_is_honored() {
    let storage = setup_storage().await;

    let alice = storage
        .create_student(student_with_number("Alice", "042"))
        .await
        .unwrap();
    assert_eq!(alice.student_number, "042");

    // 自动分配接着数值最大学号继续
    let bob = storage.create_student(student("Bob")).await.unwrap();
    assert_eq!(bob.student_number, "043");
}

#[tokio::test]
async fn duplicate_student_number_is_a_constraint_violation() {
    let storage = setup_storage().await;

    storage
        .create_student(student_with_number("Alice", "042"))
        .await
        .unwrap();
    let clash = storage
        .create_student(student_with_number("Bob", "042"))
        .await;
    assert!(matches!(clash, Err(TrackerError::ConstraintViolation(_))));
}

#[tokio::test]
async fn student_update_and_delete_round_trip() {
    let storage = setup_storage().await;
    let created = storage.create_student(student("Alice")).await.unwrap();

    let updated = storage
        .update_student(
            created.id,
            UpdateStudentRequest {
                name: Some("Alice Wong".to_string()),
                email: Some("alice@example.com".to_string()),
                photo_path: None,
            },
        )
        .await
        .unwrap()
        .expect("student exists");
    assert_eq!(updated.name, "Alice Wong");
    assert_eq!(updated.email.as_deref(), Some("alice@example.com"));
    // 学号不因更新而变化
    assert_eq!(updated.student_number, created.student_number);

    assert!(storage.delete_student(created.id).await.unwrap());
    assert!(storage.get_student(created.id).await.unwrap().is_none());
    // 再次删除返回 false
    assert!(!storage.delete_student(created.id).await.unwrap());
}

#[tokio::test]
async fn deleting_lecturer_cascades_to_courses_assignments_submissions() {
    let storage = setup_storage().await;

    let lecturer = storage
        .create_lecturer(CreateLecturerRequest {
            name: "Dr. Tan".to_string(),
            email: None,
        })
        .await
        .unwrap();
    let course = storage
        .create_course(CreateCourseRequest {
            course_code: "CS101".to_string(),
            course_name: "Databases".to_string(),
            semester: 1,
            lecturer_id: lecturer.id,
        })
        .await
        .unwrap();
    let assignment_id = seed_assignment(&storage, course.id, 1_700_000_000).await;
    let alice = storage.create_student(student("Alice")).await.unwrap();
    seed_submission(&storage, assignment_id, alice.id, 1_699_999_000, Some(90)).await;

    assert!(storage.delete_lecturer(lecturer.id).await.unwrap());

    let counts = storage.entity_counts().await.unwrap();
    assert_eq!(counts.lecturers, 0);
    assert_eq!(counts.courses, 0);
    assert_eq!(counts.assignments, 0);
    assert_eq!(counts.submissions, 0);
    // 学生不受讲师级联影响
    assert_eq!(counts.students, 1);
}

#[tokio::test]
async fn deleting_student_cascades_to_submissions_only() {
    let storage = setup_storage().await;
    let course_id = seed_course(&storage).await;
    let assignment_id = seed_assignment(&storage, course_id, 1_700_000_000).await;
    let alice = storage.create_student(student("Alice")).await.unwrap();
    seed_submission(&storage, assignment_id, alice.id, 1_699_999_000, Some(80)).await;

    assert!(storage.delete_student(alice.id).await.unwrap());

    let counts = storage.entity_counts().await.unwrap();
    assert_eq!(counts.students, 0);
    assert_eq!(counts.submissions, 0);
    assert_eq!(counts.assignments, 1);
}

#[tokio::test]
async fn invalid_references_are_rejected() {
    let storage = setup_storage().await;

    let result = storage
        .create_course(CreateCourseRequest {
            course_code: "CS999".to_string(),
            course_name: "Ghost Course".to_string(),
            semester: 1,
            lecturer_id: 12345,
        })
        .await;
    assert!(result.is_err());

    let course_id = seed_course(&storage).await;
    let assignment_id = seed_assignment(&storage, course_id, 1_700_000_000).await;
    let orphan = storage
        .create_submission(CreateSubmissionRequest {
            assignment_id,
            student_id: 98765,
            submitted_at: Some(1_699_999_000),
            file_path: "uploads/x.pdf".to_string(),
            score: None,
            remark: None,
        })
        .await;
    assert!(orphan.is_err());
}

#[tokio::test]
async fn canned_query_average_score() {
    let storage = setup_storage().await;
    let course_id = seed_course(&storage).await;
    let assignment_id = seed_assignment(&storage, course_id, 1_700_000_000).await;

    for (name, score) in [("Alice", 80), ("Bob", 90), ("Cara", 100)] {
        let s = storage.create_student(student(name)).await.unwrap();
        seed_submission(&storage, assignment_id, s.id, 1_699_999_000, Some(score)).await;
    }

    let result = storage
        .run_canned_query(1)
        .await
        .unwrap()
        .expect("query 1 exists");
    assert_eq!(result.columns, vec!["avg_score"]);
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0][0], serde_json::json!(90.0));
}

#[tokio::test]
async fn unknown_canned_query_returns_none() {
    let storage = setup_storage().await;
    assert!(storage.run_canned_query(999).await.unwrap().is_none());
    assert!(storage.run_canned_query(0).await.unwrap().is_none());
}

#[tokio::test]
async fn sorted_submissions_follow_requested_order() {
    let storage = setup_storage().await;
    let course_id = seed_course(&storage).await;
    let assignment_id = seed_assignment(&storage, course_id, 1_700_000_000).await;

    for (name, score) in [("Alice", 70), ("Bob", 95), ("Cara", 85)] {
        let s = storage.create_student(student(name)).await.unwrap();
        seed_submission(&storage, assignment_id, s.id, 1_699_999_000, Some(score)).await;
    }

    let desc = storage
        .sorted_submissions_by_score(SortOrder::Desc)
        .await
        .unwrap();
    let desc_scores: Vec<i32> = desc
        .iter()
        .filter_map(|r| r.submission.score)
        .collect();
    assert_eq!(desc_scores, vec![95, 85, 70]);

    let asc = storage
        .sorted_submissions_by_score(SortOrder::Asc)
        .await
        .unwrap();
    let asc_scores: Vec<i32> = asc.iter().filter_map(|r| r.submission.score).collect();
    assert_eq!(asc_scores, vec![70, 85, 95]);
}

#[tokio::test]
async fn top_and_bottom_submissions_are_truncated() {
    let storage = setup_storage().await;
    let course_id = seed_course(&storage).await;
    let assignment_id = seed_assignment(&storage, course_id, 1_700_000_000).await;

    for i in 0..12 {
        let s = storage
            .create_student(student(&format!("Student {i}")))
            .await
            .unwrap();
        seed_submission(&storage, assignment_id, s.id, 1_699_999_000, Some(50 + i)).await;
    }

    let top = storage.top_submissions_by_score(10).await.unwrap();
    assert_eq!(top.len(), 10);
    assert_eq!(top[0].submission.score, Some(61));

    let bottom = storage.bottom_submissions_by_score(10).await.unwrap();
    assert_eq!(bottom.len(), 10);
    assert_eq!(bottom[0].submission.score, Some(50));
}

#[tokio::test]
async fn missing_students_are_the_set_difference() {
    let storage = setup_storage().await;
    let course_id = seed_course(&storage).await;
    let assignment_id = seed_assignment(&storage, course_id, 1_700_000_000).await;

    let mut ids = Vec::new();
    for i in 0..5 {
        let s = storage
            .create_student(student(&format!("Student {i}")))
            .await
            .unwrap();
        ids.push(s.id);
    }
    // 前三名学生提交
    for id in &ids[..3] {
        seed_submission(&storage, assignment_id, *id, 1_699_999_000, None).await;
    }

    let missing = storage
        .missing_students_for_assignment(assignment_id)
        .await
        .unwrap();
    assert_eq!(missing.len(), 2);
    let missing_ids: Vec<i64> = missing.iter().map(|s| s.id).collect();
    assert_eq!(missing_ids, ids[3..].to_vec());

    let submitted = storage
        .list_submissions_for_assignment(assignment_id)
        .await
        .unwrap();
    assert_eq!(submitted.len(), 3);
}

#[tokio::test]
async fn average_score_ignores_ungraded_submissions() {
    let storage = setup_storage().await;
    let course_id = seed_course(&storage).await;
    let assignment_id = seed_assignment(&storage, course_id, 1_700_000_000).await;

    let (average, count) = storage.average_score().await.unwrap();
    assert_eq!(average, None);
    assert_eq!(count, 0);

    let alice = storage.create_student(student("Alice")).await.unwrap();
    let bob = storage.create_student(student("Bob")).await.unwrap();
    seed_submission(&storage, assignment_id, alice.id, 1_699_999_000, Some(60)).await;
    seed_submission(&storage, assignment_id, bob.id, 1_699_999_000, None).await;

    let (average, count) = storage.average_score().await.unwrap();
    assert_eq!(average, Some(60.0));
    assert_eq!(count, 1);
}

#[tokio::test]
async fn submission_counts_include_zero_rows() {
    let storage = setup_storage().await;
    let course_id = seed_course(&storage).await;
    let graded = seed_assignment(&storage, course_id, 1_700_000_000).await;
    let empty = seed_assignment(&storage, course_id, 1_800_000_000).await;

    let alice = storage.create_student(student("Alice")).await.unwrap();
    let _bob = storage.create_student(student("Bob")).await.unwrap();
    seed_submission(&storage, graded, alice.id, 1_699_999_000, None).await;

    let per_student = storage.submission_count_per_student().await.unwrap();
    assert_eq!(per_student.len(), 2);
    assert_eq!(per_student[0].submission_count, 1);
    assert_eq!(per_student[1].submission_count, 0);

    let per_assignment = storage.submission_count_per_assignment().await.unwrap();
    assert_eq!(per_assignment.len(), 2);
    let empty_row = per_assignment
        .iter()
        .find(|row| row.assignment_id == empty)
        .expect("empty assignment listed");
    assert_eq!(empty_row.submission_count, 0);

    let without = storage.assignments_without_submissions().await.unwrap();
    assert_eq!(without.len(), 1);
    assert_eq!(without[0].0.id, empty);
}

#[tokio::test]
async fn submission_records_can_be_filtered_by_course() {
    let storage = setup_storage().await;

    let lecturer = storage
        .create_lecturer(CreateLecturerRequest {
            name: "Dr. Tan".to_string(),
            email: None,
        })
        .await
        .unwrap();
    let mut assignment_ids = Vec::new();
    for code in ["CS101", "CS202"] {
        let course = storage
            .create_course(CreateCourseRequest {
                course_code: code.to_string(),
                course_name: format!("Course {code}"),
                semester: 1,
                lecturer_id: lecturer.id,
            })
            .await
            .unwrap();
        assignment_ids.push(seed_assignment(&storage, course.id, 1_700_000_000).await);
    }

    let alice = storage.create_student(student("Alice")).await.unwrap();
    for assignment_id in &assignment_ids {
        seed_submission(&storage, *assignment_id, alice.id, 1_699_999_000, None).await;
    }

    let all = storage.list_submission_records(no_filter()).await.unwrap();
    assert_eq!(all.len(), 2);

    let courses = storage
        .list_courses(CourseListQuery {
            semester: None,
            lecturer_id: None,
        })
        .await
        .unwrap();
    let cs101 = courses.iter().find(|c| c.course_code == "CS101").unwrap();
    let filtered = storage
        .list_submission_records(SubmissionListQuery {
            assignment_id: None,
            student_id: None,
            course_id: Some(cs101.id),
        })
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].course_code, "CS101");
}

#[tokio::test]
async fn transcript_records_carry_course_context() {
    let storage = setup_storage().await;
    let course_id = seed_course(&storage).await;
    let due_at = 1_700_000_000;
    let assignment_id = seed_assignment(&storage, course_id, due_at).await;
    let alice = storage.create_student(student("Alice")).await.unwrap();
    // 迟交
    seed_submission(&storage, assignment_id, alice.id, due_at + 3600, Some(75)).await;

    let records = storage
        .list_transcript_records(Some(alice.id), None)
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.student_number, "001");
    assert_eq!(record.course_code, "CS101");
    assert_eq!(record.assignment_title, "Homework");
    assert_eq!(record.max_score, 100);
    assert!(record.submission.submitted_at > record.due_at);

    let all = storage.list_transcript_records(None, None).await.unwrap();
    assert_eq!(all.len(), 1);
    let other_course = storage
        .list_transcript_records(None, Some(course_id + 1))
        .await
        .unwrap();
    assert!(other_course.is_empty());
}

#[tokio::test]
async fn canned_late_and_on_time_queries_split_submissions() {
    let storage = setup_storage().await;
    let course_id = seed_course(&storage).await;
    let due_at = 1_700_000_000;
    let assignment_id = seed_assignment(&storage, course_id, due_at).await;

    let alice = storage.create_student(student("Alice")).await.unwrap();
    let bob = storage.create_student(student("Bob")).await.unwrap();
    seed_submission(&storage, assignment_id, alice.id, due_at - 10, None).await;
    seed_submission(&storage, assignment_id, bob.id, due_at + 10, None).await;

    let late = storage.run_canned_query(11).await.unwrap().unwrap();
    assert_eq!(late.rows.len(), 1);
    assert_eq!(late.rows[0][0], serde_json::json!("Bob"));

    let on_time = storage.run_canned_query(12).await.unwrap().unwrap();
    assert_eq!(on_time.rows.len(), 1);
    assert_eq!(on_time.rows[0][0], serde_json::json!("Alice"));
}

#[tokio::test]
async fn ungraded_submissions_sort_after_graded_ones() {
    let storage = setup_storage().await;
    let course_id = seed_course(&storage).await;
    let assignment_id = seed_assignment(&storage, course_id, 1_700_000_000).await;

    let alice = storage.create_student(student("Alice")).await.unwrap();
    let bob = storage.create_student(student("Bob")).await.unwrap();
    seed_submission(&storage, assignment_id, alice.id, 1_699_999_000, Some(80)).await;
    seed_submission(&storage, assignment_id, bob.id, 1_699_999_000, None).await;

    let asc = storage
        .sorted_submissions_by_score(SortOrder::Asc)
        .await
        .unwrap();
    assert_eq!(asc.len(), 2);
    assert_eq!(asc[0].submission.score, Some(80));
    assert_eq!(asc[1].submission.score, None);

    let desc = storage
        .sorted_submissions_by_score(SortOrder::Desc)
        .await
        .unwrap();
    assert_eq!(desc[0].submission.score, Some(80));
    assert_eq!(desc[1].submission.score, None);
}

#[tokio::test]
async fn course_assignments_are_listed_by_due_date() {
    let storage = setup_storage().await;
    let course_id = seed_course(&storage).await;
    let later = seed_assignment(&storage, course_id, 1_800_000_000).await;
    let earlier = seed_assignment(&storage, course_id, 1_700_000_000).await;

    let records = storage.list_assignments(Some(course_id)).await.unwrap();
    let ids: Vec<i64> = records.iter().map(|r| r.assignment.id).collect();
    assert_eq!(ids, vec![earlier, later]);

    // 其它课程不混入
    assert!(storage
        .list_assignments(Some(course_id + 1))
        .await
        .unwrap()
        .is_empty());
}
