/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use proptest::proptest;
use std::str::FromStr;
use transcribe::types::{
    LanguageCode, MediaFormat, OutputLocationType, RedactionOutput, RedactionType, Specialty, TranscriptionJobStatus,
    Type, VocabularyFilterMethod, VocabularyState,
};

#[test]
fn every_published_value_round_trips() {
    fn check<T>(values: &[&str])
    where
        T: for<'a> From<&'a str> + AsRef<str>,
    {
        for value in values {
            assert_eq!(*value, T::from(*value).as_ref());
        }
    }
    check::<LanguageCode>(LanguageCode::values());
    check::<MediaFormat>(MediaFormat::values());
    check::<OutputLocationType>(OutputLocationType::values());
    check::<RedactionOutput>(RedactionOutput::values());
    check::<RedactionType>(RedactionType::values());
    check::<Specialty>(Specialty::values());
    check::<TranscriptionJobStatus>(TranscriptionJobStatus::values());
    check::<Type>(Type::values());
    check::<VocabularyFilterMethod>(VocabularyFilterMethod::values());
    check::<VocabularyState>(VocabularyState::values());
}

#[test]
fn the_published_value_sets_match_the_service() {
    assert_eq!(31, LanguageCode::values().len());
    assert!(LanguageCode::values().contains(&"en-US"));
    assert!(LanguageCode::values().contains(&"zh-CN"));
    assert_eq!(&["flac", "mp3", "mp4", "wav"], MediaFormat::values());
    assert_eq!(
        &["COMPLETED", "FAILED", "IN_PROGRESS", "QUEUED"],
        TranscriptionJobStatus::values()
    );
    assert_eq!(&["FAILED", "PENDING", "READY"], VocabularyState::values());
    assert_eq!(&["PII"], RedactionType::values());
}

#[test]
fn known_values_parse_to_their_variants() {
    assert_eq!(LanguageCode::EnUs, LanguageCode::from("en-US"));
    assert_eq!(MediaFormat::Flac, MediaFormat::from_str("flac").unwrap());
    assert_eq!(
        TranscriptionJobStatus::InProgress,
        TranscriptionJobStatus::from("IN_PROGRESS")
    );
    assert_eq!(Type::Dictation, Type::from("DICTATION"));
}

#[test]
fn try_parse_rejects_values_the_service_does_not_publish() {
    assert!(LanguageCode::try_parse("en-US").is_ok());
    assert!(LanguageCode::try_parse("xx-XX").is_err());
    assert!(TranscriptionJobStatus::try_parse("CANCELLED").is_err());
}

proptest! {
    // Forward compatibility: a wire value the generator has never seen decodes
    // without failing and re-encodes byte-for-byte.
    #[test]
    fn arbitrary_wire_values_are_preserved(value in "[A-Za-z][A-Za-z0-9_-]{0,24}") {
        assert_eq!(value, TranscriptionJobStatus::from(value.as_str()).as_str());
        assert_eq!(value, LanguageCode::from(value.as_str()).as_str());
        assert_eq!(value, LanguageCode::from_str(value.as_str()).unwrap().as_str());
    }
}
