//! Registry and bridge behavior tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use gaugelink_core::gauge::{Gauge, MetricValueAdapter};
use gaugelink_core::metric::{Metric, MetricValue, SharedMetric};
use gaugelink_core::GaugeLinkError;
use gaugelink_report::{register_client_metrics, GaugeRegistry};

fn metric(value: MetricValue) -> Arc<dyn Metric> {
    Arc::new(SharedMetric::new(value))
}

fn gauge_over(value: MetricValue) -> Arc<dyn Gauge> {
    Arc::new(MetricValueAdapter::new(metric(value)))
}

#[test]
fn register_and_read() {
    let reg = GaugeRegistry::new();
    reg.register("records_lag_max", gauge_over(MetricValue::Double(12.5)))
        .unwrap();

    assert_eq!(reg.len(), 1);
    assert_eq!(reg.read("records_lag_max"), Some(12.5));
    assert_eq!(reg.read("missing"), None);
}

#[test]
fn empty_name_rejected() {
    let reg = GaugeRegistry::new();
    let err = reg
        .register("", gauge_over(MetricValue::Double(1.0)))
        .expect_err("must fail");
    assert!(matches!(err, GaugeLinkError::InvalidArgument(_)));
}

#[test]
fn duplicate_name_rejected() {
    let reg = GaugeRegistry::new();
    reg.register("g", gauge_over(MetricValue::Double(1.0)))
        .unwrap();
    let err = reg
        .register("g", gauge_over(MetricValue::Double(2.0)))
        .expect_err("must fail");
    assert!(matches!(err, GaugeLinkError::AlreadyRegistered(_)));
    // First registration wins.
    assert_eq!(reg.read("g"), Some(1.0));
}

#[test]
fn deregister_tears_down() {
    let reg = GaugeRegistry::new();
    reg.register("g", gauge_over(MetricValue::Double(1.0)))
        .unwrap();
    assert!(reg.deregister("g"));
    assert!(!reg.deregister("g"));
    assert!(reg.is_empty());
}

#[test]
fn render_is_sorted_and_prometheus_shaped() {
    let reg = GaugeRegistry::new();
    reg.register("zeta", gauge_over(MetricValue::Double(2.0)))
        .unwrap();
    reg.register("alpha", gauge_over(MetricValue::Double(1.5)))
        .unwrap();
    reg.register("mid", gauge_over(MetricValue::Text("n/a".into())))
        .unwrap();

    let out = reg.render();
    let expected = "\
# TYPE alpha gauge
alpha 1.5
# TYPE mid gauge
mid 0
# TYPE zeta gauge
zeta 2
";
    assert_eq!(out, expected);
}

#[test]
fn render_reflects_live_values() {
    let reg = GaugeRegistry::new();
    let m = Arc::new(SharedMetric::new(MetricValue::Double(1.0)));
    reg.register(
        "live",
        Arc::new(MetricValueAdapter::new(m.clone() as Arc<dyn Metric>)),
    )
    .unwrap();

    assert!(reg.render().contains("live 1"));
    m.set(MetricValue::Double(3.5));
    assert!(reg.render().contains("live 3.5"));
}

#[test]
fn bridge_registers_batch() {
    let reg = GaugeRegistry::new();
    let batch = vec![
        ("bytes_consumed_rate".to_string(), metric(MetricValue::Double(9.75))),
        ("assigned_partitions".to_string(), metric(MetricValue::Int(3))),
    ];

    let n = register_client_metrics(&reg, batch).unwrap();
    assert_eq!(n, 2);
    assert_eq!(reg.read("bytes_consumed_rate"), Some(9.75));
    // Integer-shaped client metric reads through the coercion fallback.
    assert_eq!(reg.read("assigned_partitions"), Some(0.0));
}

#[test]
fn bridge_skips_duplicates() {
    let reg = GaugeRegistry::new();
    reg.register("dup", gauge_over(MetricValue::Double(1.0)))
        .unwrap();

    let batch = vec![
        ("dup".to_string(), metric(MetricValue::Double(5.0))),
        ("fresh".to_string(), metric(MetricValue::Double(6.0))),
    ];
    let n = register_client_metrics(&reg, batch).unwrap();
    assert_eq!(n, 1);
    assert_eq!(reg.read("dup"), Some(1.0));
    assert_eq!(reg.read("fresh"), Some(6.0));
}

#[test]
fn bridge_fails_on_empty_name() {
    let reg = GaugeRegistry::new();
    let batch = vec![("".to_string(), metric(MetricValue::Double(1.0)))];
    let err = register_client_metrics(&reg, batch).expect_err("must fail");
    assert!(matches!(err, GaugeLinkError::InvalidArgument(_)));
}

#[test]
fn bridge_keeps_entries_registered_before_failure() {
    let reg = GaugeRegistry::new();
    let batch = vec![
        ("early".to_string(), metric(MetricValue::Double(4.0))),
        ("".to_string(), metric(MetricValue::Double(1.0))),
        ("never".to_string(), metric(MetricValue::Double(2.0))),
    ];

    let err = register_client_metrics(&reg, batch).expect_err("must fail");
    assert!(matches!(err, GaugeLinkError::InvalidArgument(_)));
    // Fail-fast: the entry before the bad name stays, the one after is
    // never reached.
    assert_eq!(reg.read("early"), Some(4.0));
    assert_eq!(reg.read("never"), None);
    assert_eq!(reg.len(), 1);
}
