/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::DateTime;
use transcribe::protocol_serde::shape_delete_transcription_job::de_delete_transcription_job_response;
use transcribe::protocol_serde::shape_get_transcription_job::de_get_transcription_job_response;
use transcribe::protocol_serde::shape_get_vocabulary::de_get_vocabulary_response;
use transcribe::protocol_serde::shape_list_transcription_jobs::de_list_transcription_jobs_response;

#[test]
fn get_transcription_job_response_parses_the_nested_job() {
    let body = br#"{
        "TranscriptionJob": {
            "TranscriptionJobName": "interview-2020-04",
            "TranscriptionJobStatus": "COMPLETED",
            "LanguageCode": "en-US",
            "MediaSampleRateHertz": 16000,
            "MediaFormat": "wav",
            "Media": { "MediaFileUri": "https://s3.us-east-1.amazonaws.com/examplebucket/interview.wav" },
            "Transcript": {
                "TranscriptFileUri": "https://s3.us-east-1.amazonaws.com/examplebucket/interview.json",
                "RedactedTranscriptFileUri": "https://s3.us-east-1.amazonaws.com/examplebucket/redacted-interview.json"
            },
            "CreationTime": 1586784000,
            "StartTime": 1586784005,
            "CompletionTime": 1586784930,
            "Settings": {
                "ShowSpeakerLabels": true,
                "MaxSpeakerLabels": 2,
                "VocabularyFilterMethod": "mask"
            },
            "JobExecutionSettings": {
                "AllowDeferredExecution": false,
                "DataAccessRoleArn": "arn:aws:iam::111122223333:role/TranscribeBatch"
            },
            "ContentRedaction": {
                "RedactionType": "PII",
                "RedactionOutput": "redacted_and_unredacted"
            }
        }
    }"#;
    let output = de_get_transcription_job_response(body).unwrap();
    let job = output.transcription_job().unwrap();
    assert_eq!(Some("interview-2020-04"), job.transcription_job_name());
    assert_eq!("COMPLETED", job.transcription_job_status().unwrap().as_str());
    assert_eq!("en-US", job.language_code().unwrap().as_str());
    assert_eq!(Some(16000), job.media_sample_rate_hertz());
    assert_eq!(
        Some("https://s3.us-east-1.amazonaws.com/examplebucket/interview.wav"),
        job.media().unwrap().media_file_uri()
    );
    assert_eq!(Some(&DateTime::from_secs(1586784000)), job.creation_time());
    assert_eq!(Some(&DateTime::from_secs(1586784930)), job.completion_time());
    let settings = job.settings().unwrap();
    assert_eq!(Some(true), settings.show_speaker_labels());
    assert_eq!(Some(2), settings.max_speaker_labels());
    assert_eq!("mask", settings.vocabulary_filter_method().unwrap().as_str());
    let redaction = job.content_redaction().unwrap();
    assert_eq!("PII", redaction.redaction_type().as_str());
    assert_eq!(
        "redacted_and_unredacted",
        redaction.redaction_output().as_str()
    );
    assert!(job.failure_reason().is_none());
}

#[test]
fn null_members_are_left_unset() {
    let body = br#"{
        "TranscriptionJob": {
            "TranscriptionJobName": "queued-job",
            "TranscriptionJobStatus": "QUEUED",
            "Transcript": null,
            "Settings": null,
            "FailureReason": null
        }
    }"#;
    let output = de_get_transcription_job_response(body).unwrap();
    let job = output.transcription_job().unwrap();
    assert_eq!(Some("queued-job"), job.transcription_job_name());
    assert!(job.transcript().is_none());
    assert!(job.settings().is_none());
    assert!(job.failure_reason().is_none());
}

#[test]
fn unknown_keys_and_enum_values_survive_decoding() {
    let body = br#"{
        "TranscriptionJob": {
            "TranscriptionJobName": "future-job",
            "TranscriptionJobStatus": "ARCHIVED",
            "BrandNewSetting": { "Nested": [1, 2, 3] }
        },
        "TopLevelAddition": "ignored"
    }"#;
    let output = de_get_transcription_job_response(body).unwrap();
    let job = output.transcription_job().unwrap();
    // An unrecognized status is preserved verbatim rather than collapsed.
    assert_eq!("ARCHIVED", job.transcription_job_status().unwrap().as_str());
}

#[test]
fn redaction_settings_missing_a_required_member_decode_leniently() {
    let body = br#"{
        "TranscriptionJob": {
            "TranscriptionJobName": "redacted-job",
            "ContentRedaction": { "RedactionType": "PII" }
        }
    }"#;
    let output = de_get_transcription_job_response(body).unwrap();
    let redaction = output
        .transcription_job()
        .unwrap()
        .content_redaction()
        .unwrap();
    assert_eq!("PII", redaction.redaction_type().as_str());
    assert_eq!("no value was set", redaction.redaction_output().as_str());
}

#[test]
fn list_transcription_jobs_parses_summaries() {
    let body = br#"{
        "Status": "COMPLETED",
        "NextToken": "BBBB",
        "TranscriptionJobSummaries": [
            {
                "TranscriptionJobName": "job-one",
                "CreationTime": 1586784000,
                "LanguageCode": "fr-FR",
                "TranscriptionJobStatus": "COMPLETED",
                "OutputLocationType": "SERVICE_BUCKET"
            },
            {
                "TranscriptionJobName": "job-two",
                "TranscriptionJobStatus": "FAILED",
                "FailureReason": "Invalid sample rate for audio file"
            }
        ]
    }"#;
    let output = de_list_transcription_jobs_response(body).unwrap();
    assert_eq!("COMPLETED", output.status().unwrap().as_str());
    assert_eq!(Some("BBBB"), output.next_token());
    let summaries = output.transcription_job_summaries();
    assert_eq!(2, summaries.len());
    assert_eq!(Some("job-one"), summaries[0].transcription_job_name());
    assert_eq!(
        "SERVICE_BUCKET",
        summaries[0].output_location_type().unwrap().as_str()
    );
    assert_eq!(
        Some("Invalid sample rate for audio file"),
        summaries[1].failure_reason()
    );
}

#[test]
fn get_vocabulary_response_parses_scalar_members() {
    let body = br#"{
        "VocabularyName": "street-names",
        "LanguageCode": "en-GB",
        "VocabularyState": "READY",
        "LastModifiedTime": 1586784000,
        "DownloadUri": "https://s3.us-east-1.amazonaws.com/examplebucket/vocab.txt"
    }"#;
    let output = de_get_vocabulary_response(body).unwrap();
    assert_eq!(Some("street-names"), output.vocabulary_name());
    assert_eq!("READY", output.vocabulary_state().unwrap().as_str());
    assert_eq!(
        Some(&DateTime::from_secs(1586784000)),
        output.last_modified_time()
    );
    assert!(output.failure_reason().is_none());
}

#[test]
fn delete_transcription_job_accepts_an_empty_body() {
    de_delete_transcription_job_response(b"").unwrap();
    de_delete_transcription_job_response(b"{}").unwrap();
}
