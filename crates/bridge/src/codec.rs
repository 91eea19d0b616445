//! Explicit encode/decode between endpoint records and their JSON form.
//!
//! Several fields (addresses, MACs, port bindings, transport ports) have a
//! canonical *string* wire form distinct from their in-memory type, and
//! absent optionals must be omitted entirely rather than emitted as zero
//! values, so the codec goes through a generic string-keyed map instead of
//! derive-based serialization. Every decode failure is an explicit
//! [`CodecError`] carrying the field name and, for parse failures, the raw
//! string.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::endpoint::{BridgeEndpoint, ContainerConfig, EndpointConfig};
use crate::error::CodecError;

/// Encode an endpoint record into its string-keyed map form.
///
/// `id` and `srcName` are always present; `addr`, `addrv6`, `macAddress`
/// and `portMapping` are emitted only when set; `config` and
/// `containerConfiguration` are always present as keys, with JSON `null`
/// standing for an absent sub-configuration.
pub fn encode_endpoint(ep: &BridgeEndpoint) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("id".to_string(), Value::String(ep.id().to_string()));
    map.insert("srcName".to_string(), Value::String(ep.src_name.clone()));
    if let Some(addr) = &ep.addr {
        map.insert("addr".to_string(), Value::String(addr.to_string()));
    }
    if let Some(addrv6) = &ep.addrv6 {
        map.insert("addrv6".to_string(), Value::String(addrv6.to_string()));
    }
    if let Some(mac) = &ep.mac_address {
        map.insert("macAddress".to_string(), Value::String(mac.to_string()));
    }
    map.insert(
        "config".to_string(),
        match &ep.config {
            Some(config) => Value::Object(encode_config(config)),
            None => Value::Null,
        },
    );
    map.insert(
        "containerConfiguration".to_string(),
        match &ep.container_config {
            Some(config) => Value::Object(encode_container_config(config)),
            None => Value::Null,
        },
    );
    if !ep.port_mapping.is_empty() {
        map.insert("portMapping".to_string(), string_array(&ep.port_mapping));
    }
    map
}

/// Serialize an endpoint record to raw store bytes.
pub fn endpoint_to_bytes(ep: &BridgeEndpoint) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(&Value::Object(encode_endpoint(ep)))?)
}

/// Decode a string-keyed map into `ep`.
///
/// The record is only mutated after every field has decoded; a failure
/// leaves `ep` untouched. The network binding of `ep` is preserved.
pub fn decode_endpoint(ep: &mut BridgeEndpoint, map: &Map<String, Value>) -> Result<(), CodecError> {
    let id = require_str(map, "id")?.to_string();
    let src_name = require_str(map, "srcName")?.to_string();
    let addr = parse_optional(map, "addr")?;
    let addrv6 = parse_optional(map, "addrv6")?;
    let mac_address = parse_optional(map, "macAddress")?;
    let config = match map.get("config") {
        None | Some(Value::Null) => None,
        Some(Value::Object(sub)) => Some(decode_config(sub)?),
        Some(_) => return Err(CodecError::MalformedRecord("config")),
    };
    let container_config = match map.get("containerConfiguration") {
        None | Some(Value::Null) => None,
        Some(Value::Object(sub)) => Some(decode_container_config(sub)?),
        Some(_) => return Err(CodecError::MalformedRecord("containerConfiguration")),
    };
    let port_mapping = parse_list(map, "portMapping")?;

    ep.set_id(id);
    ep.src_name = src_name;
    ep.addr = addr;
    ep.addrv6 = addrv6;
    ep.mac_address = mac_address;
    ep.config = config;
    ep.container_config = container_config;
    ep.port_mapping = port_mapping;
    Ok(())
}

/// Decode raw store bytes into `ep`.
pub fn endpoint_from_bytes(ep: &mut BridgeEndpoint, bytes: &[u8]) -> Result<(), CodecError> {
    let value: Value = serde_json::from_slice(bytes)?;
    let map = value
        .as_object()
        .ok_or(CodecError::MalformedRecord("record"))?;
    decode_endpoint(ep, map)
}

/// Encode an endpoint configuration; every field is emitted only when
/// set/non-empty.
pub fn encode_config(config: &EndpointConfig) -> Map<String, Value> {
    let mut map = Map::new();
    if let Some(mac) = &config.mac_address {
        map.insert("MacAddress".to_string(), Value::String(mac.to_string()));
    }
    if !config.port_bindings.is_empty() {
        map.insert("PortBindings".to_string(), string_array(&config.port_bindings));
    }
    if !config.exposed_ports.is_empty() {
        map.insert("ExposedPorts".to_string(), string_array(&config.exposed_ports));
    }
    map
}

pub fn decode_config(map: &Map<String, Value>) -> Result<EndpointConfig, CodecError> {
    Ok(EndpointConfig {
        mac_address: parse_optional(map, "MacAddress")?,
        port_bindings: parse_list(map, "PortBindings")?,
        exposed_ports: parse_list(map, "ExposedPorts")?,
    })
}

/// Encode a container configuration; both lists are always present,
/// possibly empty.
pub fn encode_container_config(config: &ContainerConfig) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(
        "ParentEndpoints".to_string(),
        string_array(&config.parent_endpoints),
    );
    map.insert(
        "ChildEndpoints".to_string(),
        string_array(&config.child_endpoints),
    );
    map
}

pub fn decode_container_config(map: &Map<String, Value>) -> Result<ContainerConfig, CodecError> {
    Ok(ContainerConfig {
        parent_endpoints: require_string_list(map, "ParentEndpoints")?,
        child_endpoints: require_string_list(map, "ChildEndpoints")?,
    })
}

fn string_array<T: ToString>(items: &[T]) -> Value {
    Value::Array(items.iter().map(|i| Value::String(i.to_string())).collect())
}

fn require_str<'a>(map: &'a Map<String, Value>, field: &'static str) -> Result<&'a str, CodecError> {
    map.get(field)
        .and_then(Value::as_str)
        .ok_or(CodecError::MalformedRecord(field))
}

/// Parse `field` through its `FromStr` form if the key is present.
///
/// A present key must be a string (`MalformedRecord` otherwise); a string
/// that does not parse is a `FieldDecode` naming the field and raw value.
fn parse_optional<T>(map: &Map<String, Value>, field: &'static str) -> Result<Option<T>, CodecError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(value) = map.get(field) else {
        return Ok(None);
    };
    let raw = value.as_str().ok_or(CodecError::MalformedRecord(field))?;
    raw.parse::<T>()
        .map(Some)
        .map_err(|err| CodecError::FieldDecode {
            field,
            value: raw.to_string(),
            source: Box::new(err),
        })
}

/// Parse an optional array of canonical strings; an absent key is an empty
/// list.
fn parse_list<T>(map: &Map<String, Value>, field: &'static str) -> Result<Vec<T>, CodecError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(value) = map.get(field) else {
        return Ok(Vec::new());
    };
    let items = value.as_array().ok_or(CodecError::MalformedRecord(field))?;
    let mut parsed = Vec::with_capacity(items.len());
    for item in items {
        let raw = item.as_str().ok_or(CodecError::MalformedRecord(field))?;
        parsed.push(raw.parse::<T>().map_err(|err| CodecError::FieldDecode {
            field,
            value: raw.to_string(),
            source: Box::new(err),
        })?);
    }
    Ok(parsed)
}

fn require_string_list(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<String>, CodecError> {
    let items = map
        .get(field)
        .and_then(Value::as_array)
        .ok_or(CodecError::MalformedRecord(field))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or(CodecError::MalformedRecord(field))
        })
        .collect()
}
