use serde_json::json;

use super::*;

fn parse(value: Value) -> Result<MediaTrackConstraints> {
    parse_track_constraints(&value)?.ok_or(Error::ErrConstraintsNotObject)
}

#[test]
fn test_boolean_and_scalar_track_requests() -> Result<()> {
    let unconstrained = parse_track_constraints(&json!(true))?;
    assert!(unconstrained.is_some_and(|c| c.is_unconstrained()));

    assert_eq!(parse_track_constraints(&json!(false))?, None);
    assert_eq!(parse_track_constraints(&Value::Null)?, None);
    assert_eq!(parse_track_constraints(&json!(42))?, None);

    Ok(())
}

#[test]
fn test_naked_values_in_basic_are_ideal() -> Result<()> {
    let c = parse(json!({
        "width": 1280,
        "frameRate": 29.97,
        "facingMode": "user",
        "deviceId": ["cam0", "cam1"],
        "echoCancellation": false
    }))?;

    let basic = c.basic();
    assert_eq!(basic.width.ideal(), Some(1280));
    assert!(!basic.width.has_exact());
    assert_eq!(basic.frame_rate.ideal(), Some(29.97));
    assert_eq!(basic.facing_mode.ideal(), ["user".to_owned()]);
    assert_eq!(basic.device_id.ideal().len(), 2);
    assert_eq!(basic.echo_cancellation.ideal(), Some(false));
    assert!(c.advanced().is_empty());

    Ok(())
}

#[test]
fn test_naked_values_in_advanced_are_exact() -> Result<()> {
    let c = parse(json!({
        "advanced": [
            {"width": 1920, "facingMode": "environment"},
            {"autoGainControl": true, "aspectRatio": 1.5}
        ]
    }))?;

    assert!(!c.basic().is_constrained());
    assert_eq!(c.advanced().len(), 2);

    let first = &c.advanced()[0];
    assert_eq!(first.width.exact(), Some(1920));
    assert_eq!(first.facing_mode.exact(), ["environment".to_owned()]);
    assert!(!first.auto_gain_control.is_constrained());

    // every element starts from a fresh set
    let second = &c.advanced()[1];
    assert!(!second.width.is_constrained());
    assert_eq!(second.auto_gain_control.exact(), Some(true));
    assert_eq!(second.aspect_ratio.exact(), Some(1.5));

    Ok(())
}

#[test]
fn test_dictionary_values() -> Result<()> {
    let c = parse(json!({
        "width": {"min": 640, "max": 1920, "ideal": 1280},
        "height": {"exact": 720.9},
        "frameRate": {"min": 15, "ideal": 30},
        "groupId": {"ideal": "g0", "exact": ["g0", "g1"]},
        "noiseSuppression": {"exact": true, "ideal": false}
    }))?;

    let basic = c.basic();
    assert_eq!(basic.width.min(), Some(640));
    assert_eq!(basic.width.max(), Some(1920));
    assert_eq!(basic.width.ideal(), Some(1280));
    assert_eq!(basic.height.exact(), Some(720));
    assert_eq!(basic.frame_rate.min(), Some(15.0));
    assert_eq!(basic.frame_rate.ideal(), Some(30.0));
    assert_eq!(basic.group_id.ideal(), ["g0".to_owned()]);
    assert_eq!(basic.group_id.exact(), ["g0".to_owned(), "g1".to_owned()]);
    assert_eq!(basic.noise_suppression.exact(), Some(true));
    assert_eq!(basic.noise_suppression.ideal(), Some(false));

    Ok(())
}

#[test]
fn test_unsupported_unknown_and_mistyped_values_are_ignored() -> Result<()> {
    let c = parse(json!({
        "sampleRate": 48000,
        "resizeMode": "none",
        "unknownThing": 1,
        "width": "wide",
        "height": [1, 2],
        "echoCancellation": "yes",
        "deviceId": ["ok", 3]
    }))?;

    assert!(!c.basic().is_constrained());

    Ok(())
}

#[test]
fn test_integer_values_truncate_and_saturate() -> Result<()> {
    let c = parse(json!({"width": 1279.9, "height": 1e12, "channelCount": -3.7}))?;
    assert_eq!(c.basic().width.ideal(), Some(1279));
    assert_eq!(c.basic().height.ideal(), Some(i32::MAX));
    // channelCount is unsupported and dropped
    assert!(!c.basic().channel_count.is_constrained());

    Ok(())
}

#[test]
fn test_string_validation() {
    let long = "x".repeat(MAX_CONSTRAINT_STRING_LENGTH + 1);
    assert_eq!(
        parse(json!({"deviceId": long})),
        Err(Error::ErrConstraintStringTooLong)
    );

    let ok = "x".repeat(MAX_CONSTRAINT_STRING_LENGTH);
    assert!(parse(json!({"deviceId": ok})).is_ok());

    let many: Vec<String> = (0..=MAX_CONSTRAINT_STRING_SEQ_LENGTH)
        .map(|i| format!("cam{i}"))
        .collect();
    assert_eq!(
        parse(json!({"deviceId": {"exact": many}})),
        Err(Error::ErrConstraintStringSeqTooLong)
    );
}

#[test]
fn test_malformed_advanced() {
    assert_eq!(
        parse(json!({"advanced": {"width": 1}})),
        Err(Error::ErrAdvancedNotArray)
    );
    assert_eq!(
        parse(json!({"advanced": [{"width": 1}, 2]})),
        Err(Error::ErrAdvancedElementNotObject)
    );
}

#[test]
fn test_from_json_str() -> Result<()> {
    let c = MediaTrackConstraints::from_json_str(
        r#"{"width": {"ideal": 1280}, "advanced": [{"frameRate": 60}]}"#,
    )?;
    assert_eq!(c.basic().width.ideal(), Some(1280));
    assert_eq!(c.advanced()[0].frame_rate.exact(), Some(60.0));

    assert!(MediaTrackConstraints::from_json_str("true")?.is_unconstrained());
    assert_eq!(
        MediaTrackConstraints::from_json_str("null"),
        Err(Error::ErrConstraintsNotObject)
    );
    assert!(matches!(
        MediaTrackConstraints::from_json_str("{"),
        Err(Error::ParseJson(_))
    ));

    Ok(())
}
