use adventure::color::NamedTextColor;
use adventure::style::TextDecoration;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[test]
fn str_component() {
	assert_eq!("hello".component(), Component::text("hello"));
	assert_eq!(String::from("owned").component(), Component::text("owned"));
	assert_eq!("".component(), Component::empty());
}

#[test]
fn styled_forms_equal_plain_component_with_style() {
	let style = Style::from(NamedTextColor::Aqua);
	assert_eq!(
		"hi".component_styled(style),
		Component::text("hi").with_style(style)
	);

	let configured = "hi".component_with(|b| {
		b.color(NamedTextColor::Aqua.color()).italic(true);
	});
	let expected = Style::empty().edit(|b| {
		b.color(NamedTextColor::Aqua.color()).italic(true);
	});
	assert_eq!(configured, Component::text("hi").with_style(expected));
}

#[test]
fn text_component_runs_configuration() {
	let built = text_component(|b| {
		b.content("Level ")
			.decoration(TextDecoration::Bold, true)
			.append("7".component());
	});
	assert_eq!(built.content(), "Level ");
	assert!(built.style().has_decoration(TextDecoration::Bold));
	assert_eq!(built.plain_text(), "Level 7");
}

#[test]
fn text_component_without_configuration_is_empty() {
	assert_eq!(text_component(|_| {}), Component::empty());
}

#[test]
fn plus_renders_concatenation() {
	let greeting = "Hello".component().plus(" world");
	assert_eq!(greeting.plain_text(), "Hello world");
	assert_eq!(greeting.content(), "Hello");
	assert_eq!(greeting.children(), &[Component::text(" world")]);
}

#[test]
fn plus_leaves_receiver_untouched() {
	let base = "a".component();
	let _ = base.plus("b").plus(String::from("c"));
	assert_eq!(base, Component::text("a"));
}

#[test]
fn plus_accepts_builders() {
	let mut builder = Component::builder();
	builder.content("!");
	let shout = "hey".component().plus(&builder);
	assert_eq!(shout.plain_text(), "hey!");
}

#[rstest]
#[case(vec![], "", 0)]
#[case(vec!["solo"], "solo", 1)]
#[case(vec!["a", "b"], "a, b", 3)]
#[case(vec!["a", "b", "c"], "a, b, c", 5)]
fn join_with_separator(
	#[case] items: Vec<&str>,
	#[case] plain: &str,
	#[case] children: usize,
) {
	let joined = items.join_to_text_with(", ");
	assert_eq!(joined.plain_text(), plain);
	assert_eq!(joined.children().len(), children);
	assert_eq!(joined.content(), "");
	assert!(joined.style().is_empty());
}

#[test]
fn join_nothing_is_empty() {
	assert_eq!(Vec::<Component>::new().join_to_text(), Component::empty());
}

#[test]
fn join_children_are_interleaving() {
	let sep = "|".component_styled(NamedTextColor::DarkGray);
	let joined = ["x", "y"].join_to_text_with(&sep);
	assert_eq!(
		joined.children(),
		&[Component::text("x"), sep.clone(), Component::text("y")]
	);
}

#[test]
fn join_borrowed_components() {
	let parts = vec!["one".component(), "two".component()];
	let joined = parts.iter().join_to_text();
	assert_eq!(joined.plain_text(), "onetwo");
	assert_eq!(parts.len(), 2);
}

proptest! {
	#[test]
	fn component_preserves_text(s in ".*") {
		prop_assert_eq!(s.component().plain_text(), s);
	}

	#[test]
	fn plus_adds_last_child(a in ".*", b in ".*") {
		let left = a.component();
		let right = b.component();
		let joined = left.plus(&right);
		prop_assert_eq!(joined.children().last(), Some(&right));
		prop_assert_eq!(left, Component::text(a.as_str()));
	}

	#[test]
	fn join_matches_repeated_plus(items in proptest::collection::vec("[a-z]{0,4}", 2..6), sep in "[ ,;]{0,2}") {
		let joined = items.iter().join_to_text_with(sep.as_str());
		let mut concatenated = items[0].component();
		for item in &items[1..] {
			concatenated = concatenated.plus(sep.as_str()).plus(item);
		}
		prop_assert_eq!(joined.plain_text(), concatenated.plain_text());
		prop_assert_eq!(joined.children().len(), items.len() * 2 - 1);
	}
}
