/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_protocol_test::{assert_ok, validate_body, MediaType};
use mediatailor::operation::put_playback_configuration::PutPlaybackConfigurationInput;
use mediatailor::operation::tag_resource::TagResourceInput;
use mediatailor::protocol_serde::shape_put_playback_configuration::ser_put_playback_configuration_input;
use mediatailor::protocol_serde::shape_tag_resource::ser_tag_resource_input;
use mediatailor::types::{AvailSuppression, CdnConfiguration, DashConfigurationForPut, LivePreRollConfiguration, Mode, OriginManifestType};

#[test]
fn put_playback_configuration_serializes_every_assigned_field() {
    let input = PutPlaybackConfigurationInput::builder()
        .ad_decision_server_url("https://ads.example.com/vast")
        .avail_suppression(
            AvailSuppression::builder()
                .mode(Mode::BehindLiveEdge)
                .value("00:00:30")
                .build(),
        )
        .cdn_configuration(
            CdnConfiguration::builder()
                .ad_segment_url_prefix("https://cdn.example.com/ads")
                .content_segment_url_prefix("https://cdn.example.com/content")
                .build(),
        )
        .dash_configuration(
            DashConfigurationForPut::builder()
                .mpd_location("DISABLED")
                .origin_manifest_type(OriginManifestType::SinglePeriod)
                .build(),
        )
        .live_pre_roll_configuration(
            LivePreRollConfiguration::builder()
                .ad_decision_server_url("https://ads.example.com/preroll")
                .max_duration_seconds(30)
                .build(),
        )
        .name("prod-config")
        .personalization_threshold_seconds(8)
        .slate_ad_url("https://example.com/slate.mp4")
        .tags("stage", "prod")
        .transcode_profile_name("custom-profile")
        .video_content_source_url("https://origin.example.com/master")
        .build()
        .unwrap();

    let body = ser_put_playback_configuration_input(&input).unwrap();
    assert_ok(validate_body(
        body.bytes().unwrap(),
        r#"{
            "AdDecisionServerUrl": "https://ads.example.com/vast",
            "AvailSuppression": { "Mode": "BEHIND_LIVE_EDGE", "Value": "00:00:30" },
            "CdnConfiguration": {
                "AdSegmentUrlPrefix": "https://cdn.example.com/ads",
                "ContentSegmentUrlPrefix": "https://cdn.example.com/content"
            },
            "DashConfiguration": { "MpdLocation": "DISABLED", "OriginManifestType": "SINGLE_PERIOD" },
            "LivePreRollConfiguration": {
                "AdDecisionServerUrl": "https://ads.example.com/preroll",
                "MaxDurationSeconds": 30
            },
            "Name": "prod-config",
            "PersonalizationThresholdSeconds": 8,
            "SlateAdUrl": "https://example.com/slate.mp4",
            "Tags": { "stage": "prod" },
            "TranscodeProfileName": "custom-profile",
            "VideoContentSourceUrl": "https://origin.example.com/master"
        }"#,
        MediaType::from("application/json"),
    ));
}

#[test]
fn unset_fields_are_omitted_from_the_body() {
    let input = PutPlaybackConfigurationInput::builder()
        .name("minimal")
        .build()
        .unwrap();
    let body = ser_put_playback_configuration_input(&input).unwrap();
    let body = std::str::from_utf8(body.bytes().unwrap()).unwrap();
    assert_eq!(r#"{"Name":"minimal"}"#, body);
}

#[test]
fn empty_input_serializes_to_an_empty_document() {
    let input = PutPlaybackConfigurationInput::builder().build().unwrap();
    let body = ser_put_playback_configuration_input(&input).unwrap();
    assert_eq!(b"{}", body.bytes().unwrap());
}

#[test]
fn tag_resource_body_carries_tags_but_not_the_resource_arn() {
    let input = TagResourceInput::builder()
        .resource_arn("arn:aws:mediatailor:us-east-1:111122223333:playbackConfiguration/prod-config")
        .tags("team", "video")
        .build()
        .unwrap();
    let body = ser_tag_resource_input(&input).unwrap();
    let body = std::str::from_utf8(body.bytes().unwrap()).unwrap();
    assert_ok(validate_body(
        body,
        r#"{ "Tags": { "team": "video" } }"#,
        MediaType::from("application/json"),
    ));
    // The ARN binds to the request URI, not the body.
    assert!(!body.contains("ResourceArn"));
}
