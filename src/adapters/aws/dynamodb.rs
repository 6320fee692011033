use crate::domain::jobs::JobRecord;
use crate::error::PortError;
use crate::ports::repository::JobRecordRepository;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_json::{Map, Number, Value};
use std::collections::HashMap;

/// DynamoAdapter implements JobRecordRepository for AWS DynamoDB.
#[derive(Clone)]
pub struct DynamoAdapter {
    client: Client,
    table_name: String,
}

impl DynamoAdapter {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl JobRecordRepository for DynamoAdapter {
    async fn get_job_record(&self, guid: &str) -> Result<Option<JobRecord>, PortError> {
        let resp = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("guid", AttributeValue::S(guid.to_string()))
            .send()
            .await?;

        match resp.item {
            Some(item) => Ok(Some(serde_json::from_value(item_to_json(&item))?)),
            None => Ok(None),
        }
    }
}

/// Convert a DynamoDB item into a JSON object so it can go through the
/// record's serde schema.
pub fn item_to_json(item: &HashMap<String, AttributeValue>) -> Value {
    Value::Object(
        item.iter()
            .map(|(key, value)| (key.clone(), attribute_to_json(value)))
            .collect::<Map<String, Value>>(),
    )
}

fn attribute_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => number_to_json(n),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(list) => Value::Array(list.iter().map(attribute_to_json).collect()),
        AttributeValue::M(map) => item_to_json(map),
        AttributeValue::Ss(set) => Value::Array(set.iter().cloned().map(Value::String).collect()),
        AttributeValue::Ns(set) => Value::Array(set.iter().map(|n| number_to_json(n)).collect()),
        // Binary attributes are never written by the pipeline.
        _ => Value::Null,
    }
}

fn number_to_json(n: &str) -> Value {
    if let Ok(int) = n.parse::<i64>() {
        return Value::Number(int.into());
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(n.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> AttributeValue {
        AttributeValue::S(value.to_string())
    }

    #[test]
    fn test_item_converts_to_job_record() {
        let item = HashMap::from([
            ("guid".to_string(), s("clip.mp4")),
            ("frameCapture".to_string(), AttributeValue::Bool(true)),
            ("landscape_720p".to_string(), s("vod_Landscape_720p")),
            ("srcMediainfo".to_string(), s("{\"video\":[{\"width\":1280,\"height\":720}]}")),
            ("encodingProfile".to_string(), AttributeValue::N("720".to_string())),
            ("jobTemplate".to_string(), AttributeValue::Null(true)),
        ]);

        let record: JobRecord = serde_json::from_value(item_to_json(&item)).unwrap();
        assert_eq!(record.guid, "clip.mp4");
        assert!(record.frame_capture);
        assert_eq!(record.templates.landscape_720p.as_deref(), Some("vod_Landscape_720p"));
        assert_eq!(record.job_template, None);
        assert_eq!(
            record.encoding_profile,
            Some(crate::domain::tier::ResolutionTier::P720)
        );
    }

    #[test]
    fn test_nested_attributes() {
        let nested = HashMap::from([("height".to_string(), AttributeValue::N("1.5".to_string()))]);
        let value = attribute_to_json(&AttributeValue::L(vec![
            AttributeValue::M(nested),
            AttributeValue::Ss(vec!["a".to_string()]),
        ]));

        assert_eq!(value[0]["height"], 1.5);
        assert_eq!(value[1][0], "a");
    }

    #[test]
    fn test_number_conversion() {
        assert_eq!(number_to_json("42"), Value::from(42));
        assert_eq!(number_to_json("-3"), Value::from(-3));
        assert_eq!(number_to_json("1.333"), Value::from(1.333));
        assert_eq!(number_to_json("nope"), Value::from("nope"));
    }
}
