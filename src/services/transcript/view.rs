use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TranscriptService;
use crate::models::dashboard::responses::{
    CourseTranscriptResponse, TranscriptEntry, TranscriptListResponse, TranscriptResponse,
};
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::TranscriptRecord;

fn record_to_entry(record: TranscriptRecord) -> TranscriptEntry {
    TranscriptEntry {
        student_number: record.student_number,
        student_name: record.student_name,
        course_code: record.course_code,
        course_name: record.course_name,
        assignment_title: record.assignment_title,
        max_score: record.max_score,
        submitted_at: record.submission.submitted_at,
        score: record.submission.score,
        status: SubmissionStatus::derive(record.submission.submitted_at, Some(record.due_at)),
    }
}

fn transcript_error(context: &str, e: impl std::fmt::Display) -> HttpResponse {
    error!("{}: {}", context, e);
    ApiResponse::<serde_json::Value>::error(
        ErrorCode::InternalServerError,
        "Failed to build transcript",
    )
    .internal_server_error()
}

pub async fn get_full_transcript(
    service: &TranscriptService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.list_transcript_records(None, None).await {
        Ok(records) => {
            let entries: Vec<TranscriptEntry> =
                records.into_iter().map(record_to_entry).collect();
            let total = entries.len() as u64;
            Ok(ApiResponse::success(TranscriptListResponse { entries, total }).json())
        }
        Err(e) => Ok(transcript_error("Failed to list transcript records", e)),
    }
}

pub async fn get_course_transcript(
    service: &TranscriptService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::CourseNotFound,
                "Course not found",
            )
            .not_found());
        }
        Err(e) => return Ok(transcript_error("Failed to get course", e)),
    };

    match storage.list_transcript_records(None, Some(course_id)).await {
        Ok(records) => {
            let entries: Vec<TranscriptEntry> =
                records.into_iter().map(record_to_entry).collect();
            let total = entries.len() as u64;
            Ok(ApiResponse::success(CourseTranscriptResponse {
                course,
                entries,
                total,
            })
            .json())
        }
        Err(e) => Ok(transcript_error(
            "Failed to list transcript records for course",
            e,
        )),
    }
}

pub async fn get_student_transcript(
    service: &TranscriptService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage.get_student(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(ApiResponse::<serde_json::Value>::error(
                ErrorCode::StudentNotFound,
                "Student not found",
            )
            .not_found());
        }
        Err(e) => return Ok(transcript_error("Failed to get student", e)),
    };

    let records = match storage.list_transcript_records(Some(student_id), None).await {
        Ok(records) => records,
        Err(e) => {
            return Ok(transcript_error(
                "Failed to list transcript records for student",
                e,
            ));
        }
    };

    // 平均分只统计已评分提交
    let scores: Vec<i32> = records
        .iter()
        .filter_map(|record| record.submission.score)
        .collect();
    let average_score = if scores.is_empty() {
        None
    } else {
        Some(scores.iter().map(|s| *s as f64).sum::<f64>() / scores.len() as f64)
    };

    let entries = records.into_iter().map(record_to_entry).collect();

    Ok(ApiResponse::success(TranscriptResponse {
        student,
        entries,
        average_score,
    })
    .json())
}
