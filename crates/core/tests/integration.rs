//! Integration tests cho bốn pattern demo

use std::rc::Rc;

use patterns_core::command::{CommandRegistry, NoCommand};
use patterns_core::observer::{CurrentKpis, ForecastKpis, KpiSnapshot, Kpis};
use patterns_core::singleton::{MonoStateLogger, ProvidedLogger, SingletonProvider};
use patterns_core::strategy::{Order, Shipper, ShippingCost};
use patterns_core::CoreError;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_command_dispatch_never_fails() {
    let registry = CommandRegistry::with_defaults();

    for name in ["CreateOrder", "UpdateQuantity", "ShipOrder", "Refund", "", "shiporder"] {
        let command = registry.parse(&args(&[name, "7"]));
        let mut out = Vec::new();
        command.execute(&mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        if registry.lookup(name).is_some() {
            assert_eq!(command.name(), name);
            assert!(output.ends_with("Updated qty from 5 to 7\n"));
        } else {
            assert_eq!(command.name(), NoCommand::NAME);
            assert_eq!(output, format!("No command named {}\n", name));
        }
    }
}

#[test]
fn test_kpi_scenario() {
    let kpis = Kpis::new();
    let current = Rc::new(CurrentKpis::new());
    let forecast = Rc::new(ForecastKpis::new());

    {
        let _current = kpis.subscribe(current.clone());
        let _forecast = kpis.subscribe(forecast.clone());

        kpis.set_kpis(25, 10, 5);
        kpis.set_kpis(250, 110, 50);
        kpis.set_kpis(22, 32, 63);
    }
    kpis.set_kpis(150, 110, 120);

    let last_in_scope = KpiSnapshot::new(22, 32, 63);
    assert_eq!(current.state(), last_in_scope);
    assert_eq!(forecast.state(), last_in_scope);
    assert_eq!(current.updates(), 3);
    assert_eq!(forecast.updates(), 3);
    assert_eq!(kpis.snapshot(), KpiSnapshot::new(150, 110, 120));
    assert_eq!(kpis.open_tickets(), 150);
    assert_eq!(kpis.closed_tickets(), 110);
    assert_eq!(kpis.new_tickets(), 120);
}

#[test]
fn test_double_attach_single_detach() {
    let kpis = Kpis::new();
    let a = Rc::new(CurrentKpis::new());
    let b = Rc::new(ForecastKpis::new());

    kpis.attach(a.clone());
    kpis.attach(a.clone());
    kpis.attach(b.clone());
    kpis.detach(&a);
    kpis.detach(&b);
    kpis.attach(a.clone());
    kpis.detach(&b);

    kpis.set_kpis(1, 2, 3);
    assert_eq!(a.state(), KpiSnapshot::new(1, 2, 3));
    assert_eq!(b.state(), KpiSnapshot::UNSET);
}

#[test]
fn test_log_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round_trip.log");
    let messages = [
        "first record",
        "second  record with  spaces",
        "trailing space ",
        "unicode: xin chào",
        "",
    ];

    let provider = SingletonProvider::new();
    let logger = ProvidedLogger::from_provider(&provider, &path).unwrap();
    for message in messages {
        logger.write_log(message).unwrap();
    }
    logger.close_log().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), messages.len());

    for (line, expected) in lines.iter().zip(messages) {
        let (_, message) = patterns_utils::parse_record(line).unwrap();
        assert_eq!(message, expected);
    }
}

#[test]
fn test_multi_line_message_stays_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multi_line.log");
    let messages = ["first\nsecond", "third", "windows\r\nline", "C:\\temp\\new"];

    let provider = SingletonProvider::new();
    let logger = ProvidedLogger::from_provider(&provider, &path).unwrap();
    for message in messages {
        logger.write_log(message).unwrap();
    }
    logger.close_log().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), messages.len());

    for (line, expected) in lines.iter().zip(messages) {
        let (_, message) = patterns_utils::parse_record(line).unwrap();
        assert_eq!(message, expected);
    }
}

#[test]
fn test_write_after_close_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let logger = MonoStateLogger::new(dir.path().join("closed.log")).unwrap();
    logger.close_log().unwrap();

    assert!(matches!(logger.write_log("late"), Err(CoreError::LogNotOpen)));
    assert!(matches!(logger.close_log(), Err(CoreError::LogNotOpen)));
}

#[test]
fn test_shipping_costs() {
    let expected = [(Shipper::FedEx, 3.00), (Shipper::Postal, 4.00), (Shipper::Ups, 5.00)];

    for (shipper, cost) in expected {
        let calculator = ShippingCost::for_shipper(shipper);
        assert_eq!(calculator.shipping_cost(&Order::default()), cost);
        assert_eq!(calculator.shipping_cost(&Order::new("anything")), cost);
    }
}
