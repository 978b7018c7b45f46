use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[test]
fn from_u32() {
	assert_eq!(TextColor::from_u32(0x000000), TextColor::from_rgb(0, 0, 0));
	assert_eq!(TextColor::from_u32(0xFF0000), TextColor::from_rgb(255, 0, 0));
	assert_eq!(TextColor::from_u32(0x00FF00), TextColor::from_rgb(0, 255, 0));
	assert_eq!(TextColor::from_u32(0x0000FF), TextColor::from_rgb(0, 0, 255));
	assert_eq!(TextColor::from_u32(0xFFFFFF), TextColor::from_rgb(255, 255, 255));
}

#[test]
fn from_u32_discards_high_bits() {
	assert_eq!(TextColor::from_u32(0xAB12_3456).value(), 0x12_3456);
}

#[test]
fn channels() {
	let color = TextColor::from_u32(0x12_34_56);
	assert_eq!((color.red(), color.green(), color.blue()), (0x12, 0x34, 0x56));
}

#[rstest]
#[case(0.0, 0.0, 0.0, 0x000000)]
#[case(1.0, 1.0, 1.0, 0xFFFFFF)]
#[case(1.0, 0.0, 0.0, 0xFF0000)]
#[case(0.5, 0.5, 0.5, 0x7F7F7F)]
fn from_rgb_f32(#[case] r: f32, #[case] g: f32, #[case] b: f32, #[case] expected: u32) {
	assert_eq!(TextColor::from_rgb_f32(r, g, b).unwrap().value(), expected);
}

#[rstest]
#[case(1.5, 0.0, 0.0, "red")]
#[case(0.0, -0.1, 0.0, "green")]
#[case(0.0, 0.0, f32::NAN, "blue")]
fn from_rgb_f32_rejects_out_of_range(
	#[case] r: f32,
	#[case] g: f32,
	#[case] b: f32,
	#[case] channel: &str,
) {
	match TextColor::from_rgb_f32(r, g, b) {
		Err(Error::ChannelOutOfRange { channel: got, .. }) => assert_eq!(got, channel),
		other => panic!("expected out of range error, got {other:?}"),
	}
}

#[test]
fn from_rgb_like() {
	assert_eq!(TextColor::from_rgb_like(&(1, 2, 3)), TextColor::from_u32(0x010203));
	assert_eq!(
		TextColor::from_rgb_like(&NamedTextColor::Gold),
		NamedTextColor::Gold.color()
	);
}

#[rstest]
#[case(0.0, 1.0, 1.0, 0xFF0000)]
#[case(0.5, 1.0, 1.0, 0x00FFFF)]
#[case(1.0, 1.0, 1.0, 0xFF0000)]
#[case(0.3, 0.0, 1.0, 0xFFFFFF)]
#[case(0.7, 0.0, 0.0, 0x000000)]
fn from_hsv(#[case] h: f32, #[case] s: f32, #[case] v: f32, #[case] expected: u32) {
	let hsv = Hsv::new(h, s, v).unwrap();
	assert_eq!(TextColor::from_hsv(&hsv).unwrap().value(), expected);
}

#[test]
fn from_hsv_green_sector() {
	let green = TextColor::from_hsv(&Hsv::new(1.0 / 3.0, 1.0, 1.0).unwrap()).unwrap();
	assert_eq!(green, TextColor::from_rgb(0, 255, 0));
}

#[test]
fn hsv_rejects_out_of_range() {
	assert_eq!(
		Hsv::new(0.5, 2.0, 0.5),
		Err(Error::ChannelOutOfRange {
			channel: "saturation",
			value: 2.0
		})
	);
}

#[test]
fn custom_hsv_like_is_validated() {
	struct Loose;
	impl HsvLike for Loose {
		fn h(&self) -> f32 {
			1.2
		}
		fn s(&self) -> f32 {
			1.0
		}
		fn v(&self) -> f32 {
			1.0
		}
	}
	assert!(matches!(
		TextColor::from_hsv(&Loose),
		Err(Error::ChannelOutOfRange { channel: "hue", .. })
	));
}

#[test]
fn hsv_from_rgb() {
	assert_eq!(Hsv::from_rgb(0, 0, 0), Hsv::new(0.0, 0.0, 0.0).unwrap());
	assert_eq!(Hsv::from_rgb(255, 0, 0), Hsv::new(0.0, 1.0, 1.0).unwrap());
	assert_eq!(Hsv::from_rgb(0, 0, 255).h(), 240.0 / 360.0);
}

#[test]
fn hex() {
	assert_eq!(TextColor::from_hex_str("#ff5555").unwrap(), NamedTextColor::Red.color());
	assert_eq!(TextColor::from_hex_str("#FF5555").unwrap(), NamedTextColor::Red.color());
	assert_eq!(TextColor::from_u32(0x0A0B0C).as_hex_string(), "#0a0b0c");
	assert_eq!(TextColor::from_u32(0x0A0B0C).to_string(), "#0a0b0c");
}

#[rstest]
#[case("ff5555")]
#[case("#ff555")]
#[case("#ff55555")]
#[case("#gg5555")]
#[case("#+f5555")]
fn hex_rejects_malformed(#[case] input: &str) {
	assert_eq!(
		TextColor::from_hex_str(input),
		Err(Error::InvalidHex(input.to_owned()))
	);
}

#[test]
fn from_str() {
	assert_eq!("dark_aqua".parse::<TextColor>().unwrap(), TextColor::from_u32(0x00AAAA));
	assert_eq!("#123456".parse::<TextColor>().unwrap(), TextColor::from_u32(0x123456));
	assert_eq!(
		"mauve".parse::<TextColor>(),
		Err(Error::UnknownColor("mauve".to_owned()))
	);
}

#[test]
fn named_round_trip() {
	for named in NamedTextColor::iter() {
		assert_eq!(named.color().named(), Some(named));
		assert_eq!(named.name().parse::<NamedTextColor>().unwrap(), named);
	}
	assert_eq!(NamedTextColor::LightPurple.to_string(), "light_purple");
	assert_eq!(TextColor::from_u32(0x123456).named(), None);
}

#[rstest]
#[case(0xFE5656, NamedTextColor::Red)]
#[case(0x0000A0, NamedTextColor::DarkBlue)]
#[case(0xFEFEFE, NamedTextColor::White)]
#[case(0x010101, NamedTextColor::Black)]
#[case(0xFFFF55, NamedTextColor::Yellow)]
fn nearest_to(#[case] value: u32, #[case] expected: NamedTextColor) {
	assert_eq!(NamedTextColor::nearest_to(TextColor::from_u32(value)), expected);
}

proptest! {
	#[test]
	fn rgb_matches_packed(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
		let packed = (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
		prop_assert_eq!(TextColor::from_rgb(r, g, b), TextColor::from_u32(packed));
	}

	#[test]
	fn hex_string_parses_back(value in 0u32..=0xFF_FFFF) {
		let color = TextColor::from_u32(value);
		prop_assert_eq!(color.as_hex_string().parse::<TextColor>().unwrap(), color);
	}
}

#[cfg(feature = "serde")]
#[path = "serde_tests.rs"]
mod serde_tests;
