//! Walks one dialog through a wide and a narrow layout pass and a few clicks.

use matdialogs::prelude::*;
use matdialogs::ImageRes;
use matdialogs_ui_graphics::Point;

struct PrintFocus;

impl FocusOwner for PrintFocus {
    fn clear_focus(&mut self) {
        println!("  focus cleared");
    }
}

fn print_layout(node: &mut DialogButtonsNode, max_width: f32) {
    let layout = node
        .measure(Constraints::loose(max_width, f32::INFINITY))
        .clone();
    println!(
        "width {max_width}: {:?}, {}x{}",
        layout.mode, layout.result.size.width, layout.result.size.height
    );
    for placement in &layout.result.placements {
        let label = node
            .button(placement.node_id)
            .map(|button| match button.label() {
                Some(text) => format!("{:?} \"{text}\"", button.role()),
                None => format!("{:?}", button.role()),
            })
            .unwrap_or_default();
        println!(
            "  {label:<28} at ({}, {}) size {}x{}",
            placement.x, placement.y, placement.width, placement.height
        );
    }
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== matdialogs button bar ===");
    println!("Run with RUST_LOG=debug to see layout and click decisions.");
    println!();

    let env = DialogEnvironment::default();
    let mut dialog = MaterialDialog::new();
    dialog.show();

    let mut node = DialogButtons(&env, &mut dialog, DialogButtonsSpec::default(), |scope| {
        scope.positive_gate("terms_accepted", false);
        scope.positive_callback(|| println!("  positive callback: saving form"));
        scope.accessibility_button(ImageRes(1), None, || println!("  accessibility clicked"));
        scope.negative_button("Cancel", None, false, || println!("  cancel clicked"));
        scope.button("Learn more", None, || println!("  learn more clicked"));
        scope.positive_button("Accept", None, false, || println!("  accept clicked"));
    });

    print_layout(&mut node, 480.0);
    print_layout(&mut node, 240.0);
    println!();

    let accept = node
        .buttons()
        .iter()
        .find(|button| button.role() == ButtonRole::Positive)
        .map(|button| button.id());
    let Some(accept) = accept else {
        log::error!("no positive button declared");
        return;
    };

    println!("click Accept while terms are not accepted:");
    let fired = node.click(accept, &mut dialog, &mut PrintFocus);
    println!("  fired: {fired}, showing: {}", dialog.is_showing());

    println!("click the accessibility icon:");
    let icon_origin = node
        .buttons()
        .iter()
        .find(|button| button.role() == ButtonRole::Accessibility)
        .and_then(|button| button.position());
    if let Some(origin) = icon_origin {
        let hit = Point::new(origin.x + 1.0, origin.y + 1.0);
        node.click_at(hit, &mut dialog, &mut PrintFocus);
    }

    println!("accept the terms and click Accept:");
    dialog.actions_mut().set_gate("terms_accepted", true);
    let fired = node.click(accept, &mut dialog, &mut PrintFocus);
    println!("  fired: {fired}, showing: {}", dialog.is_showing());
}
