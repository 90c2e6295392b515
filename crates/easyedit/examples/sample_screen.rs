//! Sample screen: every listener, custom icons and a numeric PIN.
//!
//! Run with: `RUST_LOG=debug cargo run --example sample_screen`

use easyedit::demo;
use easyedit::widgets::Screen;
use easyedit::{Constraints, Event, Key, Point, RecordingCanvas, Rect, Size, TouchId, Widget};
use tracing_subscriber::EnvFilter;

fn touch(screen: &mut Screen, position: Point) {
    let id = TouchId(0);
    screen.event(&Event::TouchStart { id, position });
    screen.event(&Event::TouchEnd { id, position });
}

fn type_text(screen: &mut Screen, text: &str) {
    for c in text.chars() {
        screen.event(&Event::TextInput {
            text: c.to_string(),
        });
    }
}

fn row(screen: &Screen, id: &str) -> Rect {
    screen.get(id).map(Widget::bounds).unwrap_or_default()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    println!("=== EasyEdit Sample Screen ===\n");

    let mut screen = demo::sample_screen().expect("bundled layout");
    screen.lifecycle(easyedit::LifecyclePhase::Attached);
    let size = screen.measure(Constraints::loose(Size::new(360.0, 640.0)));
    screen.layout(Rect::new(0.0, 0.0, 360.0, size.height));

    // Counted alert
    let target = row(&screen, "etMax").center();
    touch(&mut screen, target);
    type_text(&mut screen, "12345678");

    // Empty transitions, then the custom clear icon
    let bounds = row(&screen, "etEmpty");
    touch(&mut screen, Point::new(bounds.x + 10.0, bounds.center().y));
    type_text(&mut screen, "ab");
    screen.event(&Event::KeyDown { key: Key::Backspace });
    screen.event(&Event::KeyDown { key: Key::Backspace });
    type_text(&mut screen, "again");
    touch(&mut screen, Point::new(bounds.right() - 20.0, bounds.center().y));

    // Before/content listeners and min length
    let bounds = row(&screen, "etWatcher");
    touch(&mut screen, Point::new(bounds.x + 10.0, bounds.center().y));
    type_text(&mut screen, "hi");
    if let Some(field) = screen.get("etWatcher") {
        println!("etWatcher below min length: {}", field.is_below_min_length());
    }

    // Custom toggle icons
    let bounds = row(&screen, "etCustomPwd");
    touch(&mut screen, Point::new(bounds.x + 10.0, bounds.center().y));
    type_text(&mut screen, "secret");
    touch(&mut screen, Point::new(bounds.right() - 5.0, bounds.center().y));

    // PIN
    let bounds = row(&screen, "etPin");
    touch(&mut screen, Point::new(bounds.x + 10.0, bounds.center().y));
    type_text(&mut screen, "12345678");

    for field in screen.fields() {
        println!(
            "{:<12} {:<12} icon={:?}",
            field.test_id().unwrap_or("?"),
            field.display_text(),
            field.trailing_icon()
        );
    }

    let mut canvas = RecordingCanvas::new();
    screen.paint(&mut canvas);
    println!("\nPainted {} draw commands", canvas.command_count());

    screen.lifecycle(easyedit::LifecyclePhase::Detached);
}
