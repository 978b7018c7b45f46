use pretty_assertions::assert_eq;

use super::*;

#[test]
fn named_color_serializes_by_name() {
	let json = serde_json::to_string(&NamedTextColor::DarkPurple.color()).unwrap();
	assert_eq!(json, r#""dark_purple""#);
}

#[test]
fn rgb_color_serializes_as_hex() {
	let json = serde_json::to_string(&TextColor::from_u32(0x123456)).unwrap();
	assert_eq!(json, r##""#123456""##);
}

#[test]
fn deserialize_either_form() {
	let named: TextColor = serde_json::from_str(r#""gold""#).unwrap();
	assert_eq!(named, NamedTextColor::Gold.color());
	let hex: TextColor = serde_json::from_str(r##""#00ff00""##).unwrap();
	assert_eq!(hex, TextColor::from_rgb(0, 255, 0));
	assert!(serde_json::from_str::<TextColor>(r#""not a color""#).is_err());
}
