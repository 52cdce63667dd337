mod common;

use common::FakePlatform;
use dpiz::MonitorResolver;

fn office_setup() -> FakePlatform {
    FakePlatform::new()
        .with_monitor(r"MONITOR\LGD047A\{4d36e96e-e325-11ce-bfc1-08002be10318}\0001")
        .with_monitor(r"MONITOR\DEL40B6\{4d36e96e-e325-11ce-bfc1-08002be10318}\0002")
        .with_keys(&[
            "DEL40B6HX4KM38C0F1L_05_07E2_8E^4A8E5B2E0E0F7C9D7B0B1B7A8B6A4C3F",
            "LGD047A0_00_07E0_2F^C6B0E9A1B7A8B6A4C3F2D1E0F9A8B7C6",
        ])
}

#[test]
fn test_list_matches_every_monitor() {
    let _ = env_logger::builder().is_test(true).try_init();

    let resolver = MonitorResolver::new(office_setup());
    let monitors = resolver.monitors();
    println!("Matched monitors: {:#?}", monitors);

    let names: Vec<_> = monitors.iter().map(|m| m.monitor_name.as_str()).collect();
    assert_eq!(names, ["LGD047A", "DEL40B6"], "Adapter order is kept");

    for monitor in &monitors {
        assert!(
            monitor.registry_key.starts_with(&monitor.monitor_name),
            "{} should prefix {}",
            monitor.monitor_name,
            monitor.registry_key
        );
    }
    assert_eq!(monitors[0].adapter.name, r"\\.\DISPLAY1");
    assert_eq!(monitors[1].adapter.name, r"\\.\DISPLAY2");
}

#[test]
fn test_matching_registry_key() {
    let platform = FakePlatform::new()
        .with_monitor(r"MonitorID\LGD047A\{GUID}")
        .with_keys(&["LGD047A123", "DEL040B456"]);
    let resolver = MonitorResolver::new(platform);

    let monitor = resolver.get_monitor("LGD047A").expect("monitor is matched");
    assert_eq!(monitor.monitor_name, "LGD047A");
    assert_eq!(monitor.registry_key, "LGD047A123");
    assert_eq!(monitor.monitor.id, r"MonitorID\LGD047A\{GUID}");
}

#[test]
fn test_first_enumerated_key_wins() {
    let platform = FakePlatform::new()
        .with_monitor(r"MONITOR\LGD047A\{GUID}")
        .with_keys(&["DEL040B456", "LGD047A_second", "LGD047A_first"]);
    let resolver = MonitorResolver::new(platform);

    let monitors = resolver.monitors();
    assert_eq!(monitors.len(), 1);
    assert_eq!(monitors[0].registry_key, "LGD047A_second");
}

#[test]
fn test_unparsable_and_unmatched_monitors_are_dropped() {
    let platform = FakePlatform::new()
        .with_monitor("MONITOR")
        .with_monitor(r"MONITOR\LGD047A")
        .with_empty_adapter()
        .with_monitor(r"MONITOR\SAM0F00\{GUID}")
        .with_monitor(r"MONITOR\DEL40B6\{GUID}")
        .with_keys(&["DEL40B6_key", "LGD047A_key"]);
    let resolver = MonitorResolver::new(platform);

    let adapters = resolver.enumerate_adapters();
    assert_eq!(adapters.len(), 4, "The adapter without a monitor is skipped");

    let monitors = resolver.monitors();
    assert_eq!(monitors.len(), 1);
    assert_eq!(monitors[0].monitor_name, "DEL40B6");
    assert_eq!(monitors[0].adapter.name, r"\\.\DISPLAY5");
}

#[test]
fn test_limit_caps_the_result() {
    let resolver = MonitorResolver::new(office_setup());

    assert_eq!(resolver.list_monitors(0).len(), 0);
    assert_eq!(resolver.list_monitors(1).len(), 1);
    assert_eq!(resolver.list_monitors(1)[0].monitor_name, "LGD047A");
    assert_eq!(resolver.list_monitors(10).len(), 2, "Never more than adapters");
}

#[test]
fn test_missing_registry_path_yields_no_monitors() {
    let platform = FakePlatform::new().with_monitor(r"MONITOR\LGD047A\{GUID}");
    let resolver = MonitorResolver::new(platform);

    assert!(resolver.enumerate_registry_keys().is_empty());
    assert!(resolver.monitors().is_empty());
    assert!(resolver.get_monitor("LGD047A").is_none());
}

#[test]
fn test_get_monitor_agrees_with_list() {
    let resolver = MonitorResolver::new(office_setup());

    for listed in resolver.monitors() {
        let found = resolver
            .get_monitor(&listed.monitor_name)
            .expect("listed monitor can be looked up");
        assert_eq!(found, listed);
    }

    assert!(resolver.get_monitor("lgd047a").is_none(), "Lookup is case sensitive");
    assert!(resolver.get_monitor("LGD047").is_none(), "Lookup is exact");
}

#[test]
fn test_enumeration_restarts_on_every_call() {
    let resolver = MonitorResolver::new(office_setup());

    let first = resolver.monitors();
    let second = resolver.monitors();
    assert_eq!(first, second);
}
