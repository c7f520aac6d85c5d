/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use transcribe::error::ProvideErrorMetadata;
use transcribe::operation::start_transcription_job::StartTranscriptionJobError;
use transcribe::protocol_serde::shape_start_transcription_job::de_start_transcription_job_error;
use transcribe::protocol_serde::shape_update_vocabulary::de_update_vocabulary_error;

#[test]
fn conflict_exception_is_classified() {
    let body = br#"{
        "__type": "com.amazonaws.transcribe#ConflictException",
        "Message": "A transcription job with that name already exists"
    }"#;
    let err = de_start_transcription_job_error(body).unwrap_err();
    assert!(err.is_conflict_exception());
    assert_eq!(Some("ConflictException"), err.code());
    match err {
        StartTranscriptionJobError::ConflictException(e) => {
            assert_eq!(
                Some("A transcription job with that name already exists"),
                e.message()
            );
        }
        other => panic!("expected ConflictException, got {:?}", other),
    }
}

#[test]
fn bare_error_codes_are_classified_too() {
    let body = br#"{ "__type": "LimitExceededException", "Message": "Too many requests" }"#;
    let err = de_start_transcription_job_error(body).unwrap_err();
    assert!(err.is_limit_exceeded_exception());
}

#[test]
fn error_codes_with_a_trailing_url_are_sanitized() {
    let body = br#"{
        "__type": "BadRequestException:http://internal.amazon.com/coral/com.amazonaws.transcribe/",
        "Message": "The requested job name contains invalid characters"
    }"#;
    let err = de_start_transcription_job_error(body).unwrap_err();
    assert!(err.is_bad_request_exception());
    assert_eq!(Some("BadRequestException"), err.meta().code());
}

#[test]
fn not_found_is_modeled_on_update_operations() {
    let body = br#"{
        "__type": "com.amazonaws.transcribe#NotFoundException",
        "Message": "We can't find the requested resource."
    }"#;
    let err = de_update_vocabulary_error(body).unwrap_err();
    assert!(err.is_not_found_exception());
}

#[test]
fn unknown_codes_keep_their_metadata_on_the_unhandled_variant() {
    let body = br#"{ "__type": "ServiceUnavailableException", "message": "try again" }"#;
    let err = de_start_transcription_job_error(body).unwrap_err();
    assert!(!err.is_bad_request_exception());
    assert!(!err.is_conflict_exception());
    assert_eq!(Some("ServiceUnavailableException"), err.code());
    assert_eq!(Some("try again"), err.message());
}

#[test]
fn a_body_without_a_code_is_unhandled() {
    let err = de_start_transcription_job_error(b"{}").unwrap_err();
    assert_eq!(None, err.code());
}

#[test]
fn operation_errors_convert_into_the_service_error() {
    let body = br#"{ "__type": "InternalFailureException", "Message": "internal error" }"#;
    let err = de_start_transcription_job_error(body).unwrap_err();
    let service_err = transcribe::Error::from(err);
    assert!(matches!(
        service_err,
        transcribe::Error::InternalFailureException(_)
    ));
    assert_eq!(Some("internal error"), service_err.message());
}
