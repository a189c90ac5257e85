use crate::{
    error::Result,
    instance::ProblemInstance,
};
use serde::{Deserialize, Serialize};
use serde_json::{to_string, to_value, Map, Value};

/// Wire format for an instance: parallel value and weight arrays plus a capacity.
///
/// Numbers are signed so that negative input reaches validation instead of
/// failing to parse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InstanceData {
    pub values: Vec<i64>,
    pub weights: Vec<i64>,
    pub capacity: i64,
}

impl From<&ProblemInstance> for InstanceData {
    fn from(instance: &ProblemInstance) -> Self {
        Self {
            values: instance.items.iter().map(|item| item.value as i64).collect(),
            weights: instance.items.iter().map(|item| item.weight as i64).collect(),
            capacity: instance.capacity as i64,
        }
    }
}

impl TryFrom<InstanceData> for ProblemInstance {
    type Error = crate::error::KnapsackError;

    fn try_from(data: InstanceData) -> Result<Self> {
        ProblemInstance::from_signed(&data.values, &data.weights, data.capacity)
    }
}

pub fn dejsonify<'a, T>(json_str: &'a str) -> serde_json::Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str::<T>(json_str)
}

/// Serializes with object keys sorted, so output is stable across runs.
pub fn jsonify<T>(obj: &T) -> String
where
    T: Serialize,
{
    to_string(&jsonify_internal(
        &to_value(obj).expect("to_value failed on serializable object"),
    ))
    .expect("to_string failed on serializable object")
}

fn jsonify_internal(json_value: &Value) -> Value {
    match json_value {
        Value::Object(obj) => {
            let mut sorted_map = Map::new();
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort();
            for key in keys {
                if let Some(value) = obj.get(key) {
                    sorted_map.insert(key.clone(), jsonify_internal(value));
                }
            }
            Value::Object(sorted_map)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(jsonify_internal).collect()),
        _ => json_value.clone(),
    }
}

pub fn seed_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}
