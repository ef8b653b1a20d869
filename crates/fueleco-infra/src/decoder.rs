//! JSON record decoder and encoder
//!
//! Records are read field by field rather than through `Deserialize` so a bad
//! record is reported by field name and position. Decoding is all-or-nothing:
//! the first invalid record fails the whole input.

use std::io::Read;

use serde_json::{Map, Value};

use fueleco_types::{DecodeError, Result, Vehicle, VehicleId};

pub const FIELD_YEAR: &str = "Year";
pub const FIELD_MANUFACTURER: &str = "Manufacturer";
pub const FIELD_MODEL: &str = "Model";
pub const FIELD_TRIM: &str = "Trim";
pub const FIELD_CONFIGURATION: &str = "Configuration (trans, eng size, cyl)";
pub const FIELD_CITY_MPG: &str = "City MPG";
pub const FIELD_HIGHWAY_MPG: &str = "Highway MPG";
pub const FIELD_COMBINED_MPG: &str = "Combined MPG";
pub const FIELD_ANNUAL_FUEL_COST: &str = "Annual Fuel Cost";
pub const FIELD_GHG_RATING: &str = "GHG Rating";
pub const FIELD_NOTES: &str = "Notes";

/// Decode a parsed JSON array into vehicle records
pub fn decode(raw: &Value) -> std::result::Result<Vec<Vehicle>, DecodeError> {
    let records = raw.as_array().ok_or_else(|| {
        DecodeError::MalformedInput("expected a JSON array of vehicle records".to_string())
    })?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| decode_record(record, index))
        .collect()
}

/// Decode vehicle records from JSON text
pub fn decode_str(input: &str) -> std::result::Result<Vec<Vehicle>, DecodeError> {
    let raw: Value =
        serde_json::from_str(input).map_err(|e| DecodeError::MalformedInput(e.to_string()))?;
    decode(&raw)
}

/// Decode vehicle records from a reader
///
/// Read failures surface as `SourceUnavailable`, bad JSON as `MalformedInput`.
pub fn decode_reader<R: Read>(reader: R) -> std::result::Result<Vec<Vehicle>, DecodeError> {
    let raw: Value = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            DecodeError::SourceUnavailable(e.to_string())
        } else {
            DecodeError::MalformedInput(e.to_string())
        }
    })?;
    decode(&raw)
}

fn decode_record(record: &Value, index: usize) -> std::result::Result<Vehicle, DecodeError> {
    let fields = record.as_object().ok_or_else(|| {
        DecodeError::MalformedInput(format!("record {} is not a JSON object", index))
    })?;

    Ok(Vehicle {
        id: VehicleId::new(),
        year: required_int(fields, FIELD_YEAR, index)?,
        manufacturer: required_string(fields, FIELD_MANUFACTURER, index)?,
        model: required_string(fields, FIELD_MODEL, index)?,
        trim: required_string(fields, FIELD_TRIM, index)?,
        configuration: required_string(fields, FIELD_CONFIGURATION, index)?,
        city_mpg: required_int(fields, FIELD_CITY_MPG, index)?,
        highway_mpg: required_int(fields, FIELD_HIGHWAY_MPG, index)?,
        combined_mpg: required_int(fields, FIELD_COMBINED_MPG, index)?,
        annual_fuel_cost: required_string(fields, FIELD_ANNUAL_FUEL_COST, index)?,
        ghg_rating: required_int(fields, FIELD_GHG_RATING, index)?,
        notes: optional_string(fields, FIELD_NOTES, index)?,
    })
}

fn required_int<T: TryFrom<i64>>(
    fields: &Map<String, Value>,
    field: &str,
    index: usize,
) -> std::result::Result<T, DecodeError> {
    fields
        .get(field)
        .and_then(Value::as_i64)
        .and_then(|n| T::try_from(n).ok())
        .ok_or_else(|| DecodeError::missing_field(field, index))
}

fn required_string(
    fields: &Map<String, Value>,
    field: &str,
    index: usize,
) -> std::result::Result<String, DecodeError> {
    fields
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| DecodeError::missing_field(field, index))
}

fn optional_string(
    fields: &Map<String, Value>,
    field: &str,
    index: usize,
) -> std::result::Result<Option<String>, DecodeError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DecodeError::missing_field(field, index)),
    }
}

/// Re-serialize records with the dataset's field names
pub fn encode(vehicles: &[Vehicle]) -> Result<Value> {
    Ok(serde_json::to_value(vehicles)?)
}

/// Re-serialize records as pretty-printed JSON text
pub fn encode_string(vehicles: &[Vehicle]) -> Result<String> {
    Ok(serde_json::to_string_pretty(vehicles)?)
}
