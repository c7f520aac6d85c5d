/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use mediatailor::error::ProvideErrorMetadata;
use mediatailor::protocol_serde::shape_delete_playback_configuration::de_delete_playback_configuration_response;
use mediatailor::protocol_serde::shape_get_playback_configuration::de_get_playback_configuration_response;
use mediatailor::protocol_serde::shape_list_playback_configurations::de_list_playback_configurations_response;
use mediatailor::protocol_serde::shape_tag_resource::de_tag_resource_error;

#[test]
fn get_playback_configuration_response_round_trips_the_model() {
    let body = br#"{
        "AdDecisionServerUrl": "https://ads.example.com/vast",
        "AvailSuppression": { "Mode": "OFF" },
        "CdnConfiguration": { "AdSegmentUrlPrefix": "https://cdn.example.com/ads" },
        "DashConfiguration": {
            "ManifestEndpointPrefix": "https://mediatailor.example.com/v1/dash/",
            "MpdLocation": "EMT_DEFAULT",
            "OriginManifestType": "MULTI_PERIOD"
        },
        "HlsConfiguration": { "ManifestEndpointPrefix": "https://mediatailor.example.com/v1/master/" },
        "Name": "prod-config",
        "PersonalizationThresholdSeconds": 8,
        "PlaybackConfigurationArn": "arn:aws:mediatailor:us-east-1:111122223333:playbackConfiguration/prod-config",
        "Tags": { "stage": "prod", "team": "video" }
    }"#;
    let output = de_get_playback_configuration_response(body).unwrap();
    assert_eq!(Some("prod-config"), output.name());
    assert_eq!(Some(8), output.personalization_threshold_seconds());
    assert_eq!(
        "OFF",
        output.avail_suppression().unwrap().mode().unwrap().as_str()
    );
    let dash = output.dash_configuration().unwrap();
    assert_eq!(
        "MULTI_PERIOD",
        dash.origin_manifest_type().unwrap().as_str()
    );
    assert_eq!(Some("EMT_DEFAULT"), dash.mpd_location());
    let tags = output.tags().unwrap();
    assert_eq!(Some(&"prod".to_string()), tags.get("stage"));
    assert_eq!(2, tags.len());
    assert!(output.live_pre_roll_configuration().is_none());
    assert!(output.slate_ad_url().is_none());
}

#[test]
fn unknown_response_keys_are_skipped() {
    let body = br#"{
        "Name": "prod-config",
        "SomeFutureSetting": { "Nested": [1, 2, {"deep": true}] },
        "AnotherNewField": "value"
    }"#;
    let output = de_get_playback_configuration_response(body).unwrap();
    assert_eq!(Some("prod-config"), output.name());
}

#[test]
fn unrecognized_enum_values_keep_the_wire_string() {
    let body = br#"{ "DashConfiguration": { "OriginManifestType": "TRIPLE_PERIOD" } }"#;
    let output = de_get_playback_configuration_response(body).unwrap();
    assert_eq!(
        "TRIPLE_PERIOD",
        output
            .dash_configuration()
            .unwrap()
            .origin_manifest_type()
            .unwrap()
            .as_str()
    );
}

#[test]
fn list_playback_configurations_response_parses_items_and_token() {
    let body = br#"{
        "Items": [
            { "Name": "config-a", "VideoContentSourceUrl": "https://origin.example.com/a" },
            { "Name": "config-b" }
        ],
        "NextToken": "AAAA"
    }"#;
    let output = de_list_playback_configurations_response(body).unwrap();
    assert_eq!(2, output.items().len());
    assert_eq!(Some("config-a"), output.items()[0].name());
    assert_eq!(Some("config-b"), output.items()[1].name());
    assert_eq!(Some("AAAA"), output.next_token());
}

#[test]
fn delete_playback_configuration_accepts_an_empty_body() {
    de_delete_playback_configuration_response(b"").unwrap();
    de_delete_playback_configuration_response(b"{}").unwrap();
}

#[test]
fn tag_resource_error_maps_bad_request() {
    let body = br#"{
        "__type": "com.amazonaws.mediatailor#BadRequestException",
        "Message": "Tag keys must not start with aws:"
    }"#;
    let err = de_tag_resource_error(body).unwrap_err();
    assert!(err.is_bad_request_exception());
    assert_eq!(Some("BadRequestException"), err.meta().code());
    match err {
        mediatailor::operation::tag_resource::TagResourceError::BadRequestException(e) => {
            assert_eq!(Some("Tag keys must not start with aws:"), e.message());
        }
        other => panic!("expected BadRequestException, got {:?}", other),
    }
}

#[test]
fn unknown_error_codes_fall_through_to_unhandled() {
    let body = br#"{ "__type": "ThrottlingException", "message": "slow down" }"#;
    let err = de_tag_resource_error(body).unwrap_err();
    assert!(!err.is_bad_request_exception());
    assert_eq!(Some("ThrottlingException"), err.code());
    assert_eq!(Some("slow down"), err.message());
}
