//! Demo screens driven through the test harness.

use easyedit::demo;
use easyedit::widgets::{ContentCleared, FieldMessage, MaxLengthAlert, Screen};
use easyedit::{Point, Rect, Widget};
use easyedit_test::Harness;

fn harness(screen: Screen) -> Harness<Screen> {
    let mut harness = Harness::new(screen).viewport(360.0, 640.0);
    harness.mount();
    harness
}

fn row(harness: &Harness<Screen>, id: &str) -> Rect {
    harness.widget().get(id).map(Widget::bounds).unwrap_or_default()
}

fn focus_row(harness: &mut Harness<Screen>, id: &str) {
    let bounds = row(harness, id);
    harness.tap(Point::new(bounds.x + 5.0, bounds.center().y));
}

fn alerts(harness: &Harness<Screen>) -> Vec<&MaxLengthAlert> {
    harness
        .messages_of::<FieldMessage>()
        .into_iter()
        .filter_map(FieldMessage::downcast_ref::<MaxLengthAlert>)
        .collect()
}

#[test]
fn main_screen_limits_et_max() {
    let mut harness = harness(demo::main_screen().unwrap());
    focus_row(&mut harness, "etMax");
    for c in "this is far too long".chars() {
        harness.send(easyedit::Event::TextInput {
            text: c.to_string(),
        });
    }
    assert_eq!(harness.widget().get("etMax").unwrap().value(), "this is fa");
    let alerts = alerts(&harness);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].text, "Input is too long");
}

#[test]
fn main_screen_clear_button() {
    let mut harness = harness(demo::main_screen().unwrap());
    focus_row(&mut harness, "etClear");
    harness.send(easyedit::Event::TextInput {
        text: "abc".to_string(),
    });
    let bounds = row(&harness, "etClear");
    harness.tap(Point::new(bounds.right() - 10.0, bounds.center().y));
    assert!(harness.widget().get("etClear").unwrap().is_empty());
    let cleared: Vec<&FieldMessage> = harness
        .messages_of::<FieldMessage>()
        .into_iter()
        .filter(|m| m.downcast_ref::<ContentCleared>().is_some())
        .collect();
    assert_eq!(cleared.len(), 1);
    assert_eq!(cleared[0].field.as_deref(), Some("etClear"));
}

#[test]
fn sample_screen_counted_alert_and_pin() {
    let mut harness = harness(demo::sample_screen().unwrap());
    focus_row(&mut harness, "etMax");
    for c in "12345678".chars() {
        harness.send(easyedit::Event::TextInput {
            text: c.to_string(),
        });
    }
    assert_eq!(alerts(&harness)[0].text, "At most 6 characters");

    focus_row(&mut harness, "etPin");
    for c in "12345678".chars() {
        harness.send(easyedit::Event::TextInput {
            text: c.to_string(),
        });
    }
    let pin = harness.widget().get("etPin").unwrap();
    assert_eq!(pin.value(), "123456");
    assert_eq!(pin.display_text(), "••••••");
}

#[test]
fn sample_screen_custom_icons() {
    let mut harness = harness(demo::sample_screen().unwrap());
    assert_eq!(
        harness.widget().get("etCustomPwd").unwrap().trailing_icon(),
        Some("ic_close")
    );
    let bounds = row(&harness, "etCustomPwd");
    harness.tap(Point::new(bounds.right() - 5.0, bounds.center().y));
    assert_eq!(
        harness.widget().get("etCustomPwd").unwrap().trailing_icon(),
        Some("ic_open")
    );
}

#[test]
fn sample_screen_unmount_releases_all() {
    let mut harness = harness(demo::sample_screen().unwrap());
    harness.unmount();
    assert!(harness
        .widget()
        .fields()
        .iter()
        .all(|field| field.listeners().registered() == 0));
}
