// File: src/interpreter/native_functions/convert.rs
//
// Unit conversion. The table is closed: metre/kilometre, metre/mile,
// kilogram/pound, Celsius/Fahrenheit, Celsius/Kelvin. Unknown pairs
// produce null.

use crate::interpreter::Value;

const METRES_PER_MILE: f64 = 1609.344;
const POUNDS_PER_KILOGRAM: f64 = 2.20462;

pub(crate) fn handle(name: &str, args: &[Value]) -> Option<Value> {
    if name != "system.convert" {
        return None;
    }
    if args.len() < 3 {
        return Some(Value::Null);
    }
    let n = args[0].as_number();
    let (Value::Str(from), Value::Str(to)) = (&args[1], &args[2]) else {
        return Some(Value::Null);
    };
    let converted = match (from.as_str(), to.as_str()) {
        ("m", "km") => n / 1000.0,
        ("km", "m") => n * 1000.0,
        ("m", "mi") => n / METRES_PER_MILE,
        ("mi", "m") => n * METRES_PER_MILE,
        ("kg", "lb") => n * POUNDS_PER_KILOGRAM,
        ("lb", "kg") => n / POUNDS_PER_KILOGRAM,
        ("C", "F") => n * 9.0 / 5.0 + 32.0,
        ("F", "C") => (n - 32.0) * 5.0 / 9.0,
        ("C", "K") => n + 273.15,
        ("K", "C") => n - 273.15,
        _ => return Some(Value::Null),
    };
    Some(Value::Number(converted))
}
