/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use mediatailor::types::{Mode, OriginManifestType, TagsModel};
use proptest::proptest;
use std::str::FromStr;

#[test]
fn known_enum_values_round_trip() {
    for value in Mode::values() {
        assert_eq!(*value, Mode::from(*value).as_str());
    }
    for value in OriginManifestType::values() {
        assert_eq!(*value, OriginManifestType::from(*value).as_str());
    }
    assert_eq!(&["BEHIND_LIVE_EDGE", "OFF"], Mode::values());
    assert_eq!(
        &["MULTI_PERIOD", "SINGLE_PERIOD"],
        OriginManifestType::values()
    );
}

#[test]
fn try_parse_rejects_unrecognized_values() {
    assert_eq!(Mode::Off, Mode::try_parse("OFF").unwrap());
    let err = Mode::try_parse("ON").unwrap_err();
    assert_eq!("unknown enum variant: 'ON'", format!("{}", err));
}

#[test]
fn from_str_is_infallible() {
    assert_eq!(Mode::BehindLiveEdge, Mode::from_str("BEHIND_LIVE_EDGE").unwrap());
    assert_eq!("ANYTHING", Mode::from_str("ANYTHING").unwrap().as_str());
}

proptest! {
    // Decoding never loses the wire string, recognized or not.
    #[test]
    fn enum_decode_preserves_arbitrary_wire_values(value in "[A-Z_]{1,20}") {
        assert_eq!(value, Mode::from(value.as_str()).as_str());
        assert_eq!(value, OriginManifestType::from(value.as_str()).as_str());
    }
}

#[test]
fn tags_model_requires_tags() {
    let err = TagsModel::builder().build().unwrap_err();
    assert!(format!("{}", err).contains("tags"));

    let model = TagsModel::builder().tags("team", "video").build().unwrap();
    assert_eq!(Some(&"video".to_string()), model.tags().get("team"));
}
