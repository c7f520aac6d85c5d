/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_protocol_test::{assert_ok, validate_body, MediaType};
use transcribe::operation::create_vocabulary::CreateVocabularyInput;
use transcribe::operation::list_transcription_jobs::ListTranscriptionJobsInput;
use transcribe::operation::start_transcription_job::StartTranscriptionJobInput;
use transcribe::protocol_serde::shape_create_vocabulary::ser_create_vocabulary_input;
use transcribe::protocol_serde::shape_list_transcription_jobs::ser_list_transcription_jobs_input;
use transcribe::protocol_serde::shape_start_transcription_job::ser_start_transcription_job_input;
use transcribe::types::{
    ContentRedaction, JobExecutionSettings, LanguageCode, Media, MediaFormat, RedactionOutput, RedactionType, Settings,
    TranscriptionJobStatus, VocabularyFilterMethod,
};

#[test]
fn start_transcription_job_serializes_the_full_request() {
    let input = StartTranscriptionJobInput::builder()
        .transcription_job_name("interview-2020-04")
        .language_code(LanguageCode::EnUs)
        .media_sample_rate_hertz(16000)
        .media_format(MediaFormat::Wav)
        .media(
            Media::builder()
                .media_file_uri("https://s3.us-east-1.amazonaws.com/examplebucket/interview.wav")
                .build(),
        )
        .output_bucket_name("examplebucket-transcripts")
        .output_encryption_kms_key_id("alias/ExampleAlias")
        .settings(
            Settings::builder()
                .vocabulary_name("medical-terms")
                .show_speaker_labels(true)
                .max_speaker_labels(2)
                .vocabulary_filter_name("profanity")
                .vocabulary_filter_method(VocabularyFilterMethod::Mask)
                .build(),
        )
        .job_execution_settings(
            JobExecutionSettings::builder()
                .allow_deferred_execution(true)
                .data_access_role_arn("arn:aws:iam::111122223333:role/TranscribeBatch")
                .build(),
        )
        .content_redaction(
            ContentRedaction::builder()
                .redaction_type(RedactionType::Pii)
                .redaction_output(RedactionOutput::RedactedAndUnredacted)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    let body = ser_start_transcription_job_input(&input).unwrap();
    assert_ok(validate_body(
        body.bytes().unwrap(),
        r#"{
            "TranscriptionJobName": "interview-2020-04",
            "LanguageCode": "en-US",
            "MediaSampleRateHertz": 16000,
            "MediaFormat": "wav",
            "Media": { "MediaFileUri": "https://s3.us-east-1.amazonaws.com/examplebucket/interview.wav" },
            "OutputBucketName": "examplebucket-transcripts",
            "OutputEncryptionKMSKeyId": "alias/ExampleAlias",
            "Settings": {
                "VocabularyName": "medical-terms",
                "ShowSpeakerLabels": true,
                "MaxSpeakerLabels": 2,
                "VocabularyFilterName": "profanity",
                "VocabularyFilterMethod": "mask"
            },
            "JobExecutionSettings": {
                "AllowDeferredExecution": true,
                "DataAccessRoleArn": "arn:aws:iam::111122223333:role/TranscribeBatch"
            },
            "ContentRedaction": {
                "RedactionType": "PII",
                "RedactionOutput": "redacted_and_unredacted"
            }
        }"#,
        MediaType::from("application/json"),
    ));
}

#[test]
fn create_vocabulary_serializes_phrase_lists_in_order() {
    let input = CreateVocabularyInput::builder()
        .vocabulary_name("street-names")
        .language_code(LanguageCode::EnGb)
        .phrases("Los-Angeles")
        .phrases("Eiffel-Tower")
        .build()
        .unwrap();
    let body = ser_create_vocabulary_input(&input).unwrap();
    let body = std::str::from_utf8(body.bytes().unwrap()).unwrap();
    assert_eq!(
        r#"{"VocabularyName":"street-names","LanguageCode":"en-GB","Phrases":["Los-Angeles","Eiffel-Tower"]}"#,
        body
    );
}

#[test]
fn list_requests_omit_unset_members() {
    let input = ListTranscriptionJobsInput::builder()
        .status(TranscriptionJobStatus::Queued)
        .build()
        .unwrap();
    let body = ser_list_transcription_jobs_input(&input).unwrap();
    assert_eq!(br#"{"Status":"QUEUED"}"#, body.bytes().unwrap());
}

#[test]
fn an_empty_request_serializes_to_an_empty_document() {
    let input = ListTranscriptionJobsInput::builder().build().unwrap();
    let body = ser_list_transcription_jobs_input(&input).unwrap();
    assert_eq!(b"{}", body.bytes().unwrap());
}

#[test]
fn content_redaction_enforces_its_required_members() {
    let err = ContentRedaction::builder()
        .redaction_type(RedactionType::Pii)
        .build()
        .unwrap_err();
    assert!(format!("{}", err).contains("redaction_output"));
}
