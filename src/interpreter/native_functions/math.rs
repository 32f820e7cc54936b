// File: src/interpreter/native_functions/math.rs
//
// Math builtins. Non-number arguments coerce to 0; a missing argument
// falls through to null like any unmatched builtin invocation.

use crate::interpreter::Value;

pub(crate) fn handle(name: &str, args: &[Value]) -> Option<Value> {
    let result = match name {
        "system.sin" | "system.cos" | "system.tan" | "system.asin" | "system.acos"
        | "system.atan" | "system.log" | "system.ln" | "system.exp" | "system.sqrt" => {
            let Some(arg) = args.first() else {
                return Some(Value::Null);
            };
            let x = arg.as_number();
            let value = match name {
                "system.sin" => x.sin(),
                "system.cos" => x.cos(),
                "system.tan" => x.tan(),
                "system.asin" => x.asin(),
                "system.acos" => x.acos(),
                "system.atan" => x.atan(),
                "system.log" => x.log10(),
                "system.ln" => x.ln(),
                "system.exp" => x.exp(),
                _ => x.sqrt(),
            };
            Value::Number(value)
        }
        "system.pow" => {
            if args.len() < 2 {
                return Some(Value::Null);
            }
            Value::Number(args[0].as_number().powf(args[1].as_number()))
        }
        _ => return None,
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(value: Option<Value>) -> f64 {
        match value {
            Some(Value::Number(n)) => n,
            other => panic!("expected number, got {:?}", other),
        }
    }

    #[test]
    fn trigonometry_and_roots() {
        assert!((number(handle("system.sin", &[Value::Number(0.0)]))).abs() < 1e-12);
        assert!((number(handle("system.cos", &[Value::Number(0.0)])) - 1.0).abs() < 1e-12);
        assert_eq!(number(handle("system.sqrt", &[Value::Number(9.0)])), 3.0);
        assert_eq!(number(handle("system.pow", &[Value::Number(2.0), Value::Number(8.0)])), 256.0);
    }

    #[test]
    fn log_is_base_ten_and_ln_is_natural() {
        assert!((number(handle("system.log", &[Value::Number(1000.0)])) - 3.0).abs() < 1e-12);
        assert!(
            (number(handle("system.ln", &[Value::Number(std::f64::consts::E)])) - 1.0).abs()
                < 1e-12
        );
    }

    #[test]
    fn non_numbers_coerce_to_zero() {
        assert_eq!(number(handle("system.exp", &[Value::Str("x".into())])), 1.0);
        assert_eq!(number(handle("system.sin", &[Value::Null])), 0.0);
    }

    #[test]
    fn missing_arguments_yield_null() {
        assert!(matches!(handle("system.sqrt", &[]), Some(Value::Null)));
        assert!(matches!(handle("system.pow", &[Value::Number(2.0)]), Some(Value::Null)));
    }

    #[test]
    fn unrelated_names_are_not_handled() {
        assert!(handle("system.print", &[]).is_none());
    }
}
