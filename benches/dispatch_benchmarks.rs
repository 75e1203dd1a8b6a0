use criterion::{Criterion, black_box, criterion_group, criterion_main};
use home_remote::command::commands::FanSpeedCommand;
use home_remote::command::manager::RemoteControl;
use home_remote::command::state::HomeState;
use home_remote::command::trait_def::shared;
use home_remote::messaging::channels::create_notification_channel;
use home_remote::scene::{SceneBuilder, SceneSpec};

const BENCH_SCENE: &str = r#"{
  "devices": [
    { "name": "light", "kind": "light", "location": "Living Room" },
    { "name": "fan", "kind": "fan", "location": "Living Room" }
  ],
  "bindings": [
    { "slot": 0,
      "on": { "action": "light_on", "device": "light" },
      "off": { "action": "light_off", "device": "light" } },
    { "slot": 2,
      "on": { "action": "fan_high", "device": "fan" },
      "off": { "action": "fan_off", "device": "fan" } }
  ]
}"#;

/// Benchmark a full press cycle (execute + history push)
fn bench_press_dispatch(c: &mut Criterion) {
    c.bench_function("press_on_off_cycle", |b| {
        let (tx, _rx) = create_notification_channel(64);
        let mut state = HomeState::new(tx);
        let fan = state.add_fan("Living Room");

        let mut remote = RemoteControl::new();
        remote
            .bind(
                2,
                shared(FanSpeedCommand::high(fan)),
                shared(FanSpeedCommand::off(fan)),
            )
            .unwrap();

        b.iter(|| {
            remote.press_on(2, &mut state).unwrap();
            remote.press_off(2, &mut state).unwrap();
            black_box(state.fan_level(fan).unwrap());
        });
    });
}

/// Benchmark press followed by undo (execute + pop + snapshot replay)
fn bench_undo_dispatch(c: &mut Criterion) {
    c.bench_function("press_undo_cycle", |b| {
        let (tx, _rx) = create_notification_channel(64);
        let mut state = HomeState::new(tx);
        let fan = state.add_fan("Living Room");

        let mut remote = RemoteControl::new();
        remote
            .bind(
                2,
                shared(FanSpeedCommand::high(fan)),
                shared(FanSpeedCommand::off(fan)),
            )
            .unwrap();

        b.iter(|| {
            remote.press_on(2, &mut state).unwrap();
            black_box(remote.press_undo(&mut state).unwrap());
        });
    });
}

/// Benchmark scene validation and wiring
fn bench_scene_build(c: &mut Criterion) {
    let spec: SceneSpec = serde_json::from_str(BENCH_SCENE).unwrap();
    let builder = SceneBuilder::new();

    c.bench_function("scene_build", |b| {
        b.iter(|| {
            let (tx, _rx) = create_notification_channel(64);
            black_box(builder.build(&spec, tx).unwrap());
        });
    });
}

criterion_group!(
    benches,
    bench_press_dispatch,
    bench_undo_dispatch,
    bench_scene_build
);
criterion_main!(benches);
