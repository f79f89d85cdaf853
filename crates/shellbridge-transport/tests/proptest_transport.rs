//! Property-based tests for the wire codec and script generation
//!
//! Tests that every message variant round-trips losslessly through the
//! compact codec, and that the generated receive script always embeds
//! a literal that decodes back to the original message.

use proptest::prelude::*;
use shellbridge_core::{Message, Platform};
use shellbridge_transport::{JsonCodec, receive_script_for_slot};

// Strategy: either enumerated platform
fn arb_platform() -> impl Strategy<Value = Platform> {
    prop_oneof![Just(Platform::Ios), Just(Platform::Android)]
}

// Strategy: any of the five message variants with arbitrary fields
fn arb_message() -> impl Strategy<Value = Message> {
    prop_oneof![
        Just(Message::Share),
        arb_platform().prop_map(|value| Message::Platform { value }),
        Just(Message::PlatformQuery),
        (any::<u32>(), any::<bool>()).prop_map(|(index, is_main_image)| Message::Lightbox {
            index,
            is_main_image,
        }),
        ".*".prop_map(|value| Message::ShareIcon { value }),
    ]
}

// Strategy: plausible global slot identifiers
fn arb_slot() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,40}"
}

proptest! {
    /// Property: compact encoding round-trips every variant losslessly
    #[test]
    fn proptest_message_roundtrip(message in arb_message()) {
        let codec = JsonCodec::new();

        let encoded = codec
            .encode(&message)
            .expect("Encoding should succeed for valid messages");
        let recovered: Message = codec
            .decode(&encoded)
            .expect("Decoding should succeed for encoded messages");

        prop_assert_eq!(recovered, message);
    }

    /// Property: pretty encoding decodes to the same value as compact
    #[test]
    fn proptest_pretty_decodes_equal(message in arb_message()) {
        let pretty = JsonCodec::pretty()
            .encode(&message)
            .expect("Pretty encoding should succeed");

        let recovered: Message = JsonCodec::new()
            .decode(&pretty)
            .expect("Pretty output should still decode");

        prop_assert_eq!(recovered, message);
    }

    /// Property: the script's embedded literal decodes to the original
    /// message for any variant and any slot name
    #[test]
    fn proptest_script_embeds_decodable_literal(
        message in arb_message(),
        slot in arb_slot()
    ) {
        let script = receive_script_for_slot(&message, &slot)
            .expect("Script generation should succeed");

        let call_prefix = format!("window.{slot}(");
        let line = script
            .lines()
            .find(|line| line.contains(&call_prefix))
            .expect("Script should contain the call line");
        let start = line.find(&call_prefix).expect("prefix located") + call_prefix.len();
        let end = line.rfind(')').expect("Call line should close the call");

        let recovered: Message = JsonCodec::new()
            .decode(&line[start..end])
            .expect("Embedded literal should decode");

        prop_assert_eq!(recovered, message);
    }
}

#[test]
fn test_script_is_self_contained_statement() {
    let message = Message::ShareIcon {
        value: "icon".to_string(),
    };
    let script = receive_script_for_slot(&message, "__slot").expect("Should build script");

    // One try block, one catch block, balanced braces
    assert_eq!(script.matches("try").count(), 1);
    assert_eq!(script.matches("catch").count(), 1);
    assert_eq!(script.matches('{').count(), script.matches('}').count());
}
