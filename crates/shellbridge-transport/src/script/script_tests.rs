#![allow(non_snake_case)]

use super::*;
use shellbridge_core::Platform;

fn embedded_json(script: &str, slot: &str) -> String {
    let call_prefix = format!("window.{slot}(");
    let line = script
        .lines()
        .find(|line| line.contains(&call_prefix))
        .expect("script should contain the call line");
    let start = line.find(&call_prefix).unwrap() + call_prefix.len();
    let end = line.rfind(')').expect("call line should close the call");
    line[start..end].to_string()
}

#[test]
fn receive_script___default_slot___targets_well_known_global() {
    let script = receive_script(&Message::Share).unwrap();

    assert!(script.contains(&format!("window.{DEFAULT_RECEIVE_SLOT}(")));
}

#[test]
fn receive_script___embedded_literal___is_the_wire_form() {
    let message = Message::Lightbox {
        index: 2,
        is_main_image: true,
    };

    let script = receive_script(&message).unwrap();
    let literal = embedded_json(&script, DEFAULT_RECEIVE_SLOT);

    assert_eq!(literal, r#"{"kind":"Lightbox","index":2,"isMainImage":true}"#);
}

#[test]
fn receive_script___embedded_literal___parses_back_to_equal_message() {
    let message = Message::Platform {
        value: Platform::Ios,
    };

    let script = receive_script(&message).unwrap();
    let literal = embedded_json(&script, DEFAULT_RECEIVE_SLOT);
    let recovered: Message = JsonCodec::new().decode(&literal).unwrap();

    assert_eq!(recovered, message);
}

#[test]
fn receive_script___call___is_inside_guarded_block() {
    let script = receive_script(&Message::PlatformQuery).unwrap();

    let try_pos = script.find("try").unwrap();
    let call_pos = script.find("window.").unwrap();
    let catch_pos = script.find("catch").unwrap();

    assert!(try_pos < call_pos);
    assert!(call_pos < catch_pos);
    assert!(script.contains("console.error"));
}

#[test]
fn receive_script_for_slot___custom_slot___is_used_in_call_and_diagnostic() {
    let script = receive_script_for_slot(&Message::Share, "__customReceive").unwrap();

    assert!(script.contains("window.__customReceive("));
    assert!(script.contains("__customReceive not initiated"));
    assert!(!script.contains(DEFAULT_RECEIVE_SLOT));
}
