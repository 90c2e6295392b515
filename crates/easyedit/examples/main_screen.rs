//! Main demo screen: a limited field, a clearable field and a password field.
//!
//! Run with: `RUST_LOG=debug cargo run --example main_screen`

use easyedit::demo;
use easyedit::widgets::{ContentCleared, FieldMessage, MaxLengthAlert, VisibilityToggled};
use easyedit::{Constraints, Event, MouseButton, Point, RecordingCanvas, Rect, Size, Widget};
use tracing_subscriber::EnvFilter;

fn tap(screen: &mut easyedit::widgets::Screen, position: Point) -> Option<FieldMessage> {
    screen.event(&Event::MouseDown {
        position,
        button: MouseButton::Left,
    });
    screen
        .event(&Event::MouseUp {
            position,
            button: MouseButton::Left,
        })
        .and_then(|message| message.downcast::<FieldMessage>().ok())
        .map(|message| *message)
}

fn type_text(screen: &mut easyedit::widgets::Screen, text: &str) -> Vec<FieldMessage> {
    text.chars()
        .filter_map(|c| {
            screen.event(&Event::TextInput {
                text: c.to_string(),
            })
        })
        .filter_map(|message| message.downcast::<FieldMessage>().ok())
        .map(|message| *message)
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== EasyEdit Main Screen ===\n");

    let mut screen = demo::main_screen().expect("bundled layout");
    screen.lifecycle(easyedit::LifecyclePhase::Attached);
    let size = screen.measure(Constraints::loose(Size::new(360.0, 640.0)));
    screen.layout(Rect::new(0.0, 0.0, 360.0, size.height));

    let rows: Vec<Rect> = screen.fields().iter().map(Widget::bounds).collect();

    // Limited field
    tap(&mut screen, rows[0].center());
    for message in type_text(&mut screen, "this is far too long") {
        if let Some(alert) = message.downcast_ref::<MaxLengthAlert>() {
            println!("[{}] alert: {}", message.field.as_deref().unwrap_or("?"), alert.text);
        }
    }
    println!("etMax   = {:?}", screen.fields()[0].value());

    // Clearable field
    tap(&mut screen, Point::new(10.0, rows[1].center().y));
    type_text(&mut screen, "clear me");
    println!("etClear = {:?} icon={:?}", screen.fields()[1].value(), screen.fields()[1].trailing_icon());
    let trailing = Point::new(rows[1].right() - 10.0, rows[1].center().y);
    if tap(&mut screen, trailing).is_some_and(|m| m.downcast_ref::<ContentCleared>().is_some()) {
        println!("etClear cleared, icon={:?}", screen.fields()[1].trailing_icon());
    }

    // Password field
    tap(&mut screen, Point::new(10.0, rows[2].center().y));
    type_text(&mut screen, "hunter2");
    println!("etPwd   = {:?}", screen.fields()[2].display_text());
    let trailing = Point::new(rows[2].right() - 10.0, rows[2].center().y);
    if let Some(toggled) = tap(&mut screen, trailing)
        .as_ref()
        .and_then(|m| m.downcast_ref::<VisibilityToggled>())
    {
        println!("etPwd visible={} -> {:?}", toggled.visible, screen.fields()[2].display_text());
    }

    let mut canvas = RecordingCanvas::new();
    screen.paint(&mut canvas);
    println!("\nPainted {} draw commands", canvas.command_count());
    println!("Texts: {:?}", canvas.texts());
    println!("Icons: {:?}", canvas.icons());

    screen.lifecycle(easyedit::LifecyclePhase::Detached);
}
