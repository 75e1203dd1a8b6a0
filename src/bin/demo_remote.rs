// Demo driver for the home remote
//
// Presentation collaborator: wires the demo scene, replays a press
// sequence against it and prints the notification transcript.

use home_remote::messaging::channels::{NotificationConsumer, create_notification_channel};
use home_remote::messaging::notification::NotificationLevel;
use home_remote::scene::{Scene, SceneBuilder};
use ringbuf::traits::Consumer;

const DEMO_SCENE: &str = r#"{
  "devices": [
    { "name": "living_room_light", "kind": "light", "location": "Living Room" },
    { "name": "bedroom_light", "kind": "light", "location": "Bedroom" },
    { "name": "living_room_fan", "kind": "fan", "location": "Living Room" }
  ],
  "bindings": [
    { "slot": 0,
      "on": { "action": "light_on", "device": "living_room_light" },
      "off": { "action": "light_off", "device": "living_room_light" } },
    { "slot": 1,
      "on": { "action": "light_on", "device": "bedroom_light" },
      "off": { "action": "light_off", "device": "bedroom_light" } },
    { "slot": 2,
      "on": { "action": "fan_high", "device": "living_room_fan" },
      "off": { "action": "fan_off", "device": "living_room_fan" } }
  ]
}"#;

fn main() {
    if let Err(error) = run() {
        eprintln!("demo failed: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Home Remote Demo ===\n");

    let (tx, mut rx) = create_notification_channel(128);
    let Scene {
        mut state,
        mut remote,
        ..
    } = SceneBuilder::new().load_from_str(DEMO_SCENE, tx)?;

    println!("--- Pressing buttons ---");
    remote.press_on(0, &mut state)?;
    remote.press_off(0, &mut state)?;
    remote.press_on(1, &mut state)?;
    remote.press_on(2, &mut state)?;
    drain_transcript(&mut rx);

    println!("\n--- Undoing ---");
    for _ in 0..5 {
        match remote.press_undo(&mut state)? {
            Some(description) => println!("undid: {description}"),
            None => println!("history is empty"),
        }
        drain_transcript(&mut rx);
    }

    Ok(())
}

fn drain_transcript(consumer: &mut NotificationConsumer) {
    while let Some(notification) = consumer.try_pop() {
        match notification.level {
            NotificationLevel::Info => println!("  {}", notification.message),
            NotificationLevel::Warning => println!("  ! {}", notification.message),
            NotificationLevel::Error => println!("  !! {}", notification.message),
        }
    }
}
