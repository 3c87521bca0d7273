//! Impact metrics attached to a project.
//!
//! In the data resource `impact` is a JSON object such as
//! `{ "users": "1,200+", "latency": "120ms" }`. Display order is document
//! order, so it is kept as a list rather than a hash map.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::stack::capitalize;

/// One metric: raw key plus display value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImpactMetric {
    pub key: String,
    pub value: String,
}

impl ImpactMetric {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Friendly label for this metric's key.
    pub fn label(&self) -> String {
        metric_label(&self.key)
    }
}

/// Ordered impact metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Impact(Vec<ImpactMetric>);

impl Impact {
    pub fn new(metrics: Vec<ImpactMetric>) -> Self {
        Self(metrics)
    }

    pub fn metrics(&self) -> &[ImpactMetric] {
        &self.0
    }

    pub fn first(&self) -> Option<&ImpactMetric> {
        self.0.first()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Map a metric key to its friendly label.
///
/// Unknown keys are shown with their first letter capitalized.
pub fn metric_label(key: &str) -> String {
    let label = match key {
        "kpi" => "Key Performance Indicator",
        "users" => "Active Users",
        "performance" => "Performance",
        "conversion" => "Conversion Rate",
        "productivity" => "Productivity Gain",
        "collaboration" => "Daily Interactions",
        "latency" => "Response Time",
        "reliability" => "Uptime",
        "transactions" => "Transactions Processed",
        "compliance" => "Compliance Rate",
        "efficiency" => "Efficiency Improvement",
        "satisfaction" => "User Rating",
        other => return capitalize(other),
    };
    label.to_string()
}

impl Serialize for Impact {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for metric in &self.0 {
            map.serialize_entry(&metric.key, &metric.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Impact {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ImpactVisitor)
    }
}

struct ImpactVisitor;

impl<'de> Visitor<'de> for ImpactVisitor {
    type Value = Impact;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of metric keys to display values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Impact, A::Error> {
        let mut metrics = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, MetricValue>()? {
            metrics.push(ImpactMetric { key, value: value.0 });
        }
        Ok(Impact(metrics))
    }
}

/// Metric values are usually strings ("99.9%") but plain numbers are common too.
struct MetricValue(String);

impl<'de> Deserialize<'de> for MetricValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(MetricValue(s)),
            serde_json::Value::Number(n) => Ok(MetricValue(n.to_string())),
            serde_json::Value::Bool(b) => Ok(MetricValue(b.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "unsupported impact value: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_document_order() {
        let impact: Impact =
            serde_json::from_str(r#"{"users": "1,200+", "latency": "120ms", "kpi": 3}"#).unwrap();
        let keys: Vec<_> = impact.metrics().iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, ["users", "latency", "kpi"]);
        assert_eq!(impact.metrics()[2].value, "3");
        assert_eq!(impact.first().unwrap().value, "1,200+");
    }

    #[test]
    fn labels_fall_back_to_capitalized_key() {
        assert_eq!(metric_label("reliability"), "Uptime");
        assert_eq!(metric_label("satisfaction"), "User Rating");
        assert_eq!(metric_label("downloads"), "Downloads");
    }

    #[test]
    fn rejects_nested_values() {
        let res = serde_json::from_str::<Impact>(r#"{"users": {"n": 1}}"#);
        assert!(res.is_err());
    }

    #[test]
    fn serializes_as_object() {
        let impact = Impact::new(vec![ImpactMetric::new("users", "10k")]);
        assert_eq!(serde_json::to_string(&impact).unwrap(), r#"{"users":"10k"}"#);
    }
}
