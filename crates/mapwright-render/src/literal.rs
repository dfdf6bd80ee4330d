//! Streaming JavaScript object-literal writer.
//!
//! Builds the `jQuery('#id').googleMap({ ... });` initialization call one
//! key at a time. Values are serialized through [`JsLiteral`]; `f64` goes
//! through `ryu-js` so the output matches JS `Number#toString()` exactly and
//! never depends on the process locale. Keys appear in append order.

use std::fmt::Write as _;

/// Serializes a value as a JavaScript literal.
pub trait JsLiteral {
    fn emit(&self, out: &mut String, ryu: &mut ryu_js::Buffer);
}

impl JsLiteral for bool {
    fn emit(&self, out: &mut String, _ryu: &mut ryu_js::Buffer) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl JsLiteral for f64 {
    fn emit(&self, out: &mut String, ryu: &mut ryu_js::Buffer) {
        let mut v = *self;
        if !v.is_finite() {
            out.push_str("0");
            return;
        }
        if v == -0.0 {
            v = 0.0;
        }
        out.push_str(ryu.format_finite(v));
    }
}

macro_rules! js_literal_integer {
    ($($ty:ty),+) => {
        $(impl JsLiteral for $ty {
            fn emit(&self, out: &mut String, _ryu: &mut ryu_js::Buffer) {
                let _ = write!(out, "{self}");
            }
        })+
    };
}

js_literal_integer!(i32, i64, u8, u32, u64, usize);

impl JsLiteral for &str {
    fn emit(&self, out: &mut String, _ryu: &mut ryu_js::Buffer) {
        emit_quoted(out, self);
    }
}

impl JsLiteral for String {
    fn emit(&self, out: &mut String, _ryu: &mut ryu_js::Buffer) {
        emit_quoted(out, self);
    }
}

/// Single-quoted JS string. Escapes quote/backslash/control characters and
/// the `</` sequence so the literal stays safe inside an inline `<script>`.
fn emit_quoted(out: &mut String, s: &str) {
    out.push('\'');
    let mut prev = '\0';
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '/' if prev == '<' => out.push_str("\\/"),
            _ => out.push(c),
        }
        prev = c;
    }
    out.push('\'');
}

/// Streaming writer producing one initialization call.
///
/// Nested objects and collections share the writer; a stack of
/// "entry already written" flags tracks where commas are due, so output
/// order is exactly the call order.
pub struct ObjectLiteralWriter<'a> {
    out: &'a mut String,
    ryu: ryu_js::Buffer,
    comma: Vec<bool>,
}

impl<'a> ObjectLiteralWriter<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Self {
            out,
            ryu: ryu_js::Buffer::new(),
            comma: Vec::new(),
        }
    }

    /// Opens `jQuery('#<id>').<function>({`.
    pub fn begin_call(&mut self, id: &str, function: &str) {
        self.out.push_str("jQuery('#");
        self.out.push_str(id);
        self.out.push_str("').");
        self.out.push_str(function);
        self.out.push_str("({");
        self.comma.push(false);
    }

    /// Closes the call opened by [`Self::begin_call`] with `});`.
    pub fn end_call(&mut self) {
        self.comma.pop();
        self.out.push_str("});");
    }

    fn key(&mut self, key: &str) {
        if let Some(written) = self.comma.last_mut() {
            if *written {
                self.out.push_str(", ");
            }
            *written = true;
        }
        self.out.push_str(key);
        self.out.push_str(": ");
    }

    /// Always emits `key: value`.
    pub fn append<V: JsLiteral>(&mut self, key: &str, value: V) {
        self.key(key);
        value.emit(self.out, &mut self.ryu);
    }

    /// Emits `key: value` only when `value` differs from `default`.
    pub fn append_unless<V: JsLiteral + PartialEq>(&mut self, key: &str, value: V, default: V) {
        if value != default {
            self.append(key, value);
        }
    }

    /// Emits `key: value` only for `Some`.
    pub fn append_opt<V: JsLiteral>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.append(key, value);
        }
    }

    /// Emits the value verbatim. Used for client event handlers, which are
    /// function references rather than strings.
    pub fn append_raw(&mut self, key: &str, js: &str) {
        self.key(key);
        self.out.push_str(js);
    }

    /// Generic fallback for values with no typed emission. JSON is valid JS
    /// here; serialization failures degrade to `null` rather than aborting
    /// the render.
    pub fn append_json(&mut self, key: &str, value: &serde_json::Value) {
        self.key(key);
        match serde_json::to_string(value) {
            Ok(json) => self.out.push_str(&json),
            Err(_) => self.out.push_str("null"),
        }
    }

    /// Emits `key: { ... }` with the nested entries written by `f`.
    pub fn object(&mut self, key: &str, f: impl FnOnce(&mut Self)) {
        self.key(key);
        self.out.push('{');
        self.comma.push(false);
        f(self);
        self.comma.pop();
        self.out.push('}');
    }

    /// Emits `key: [{ ... }, ...]`, one object literal per item.
    pub fn collection<T>(&mut self, key: &str, items: &[T], mut f: impl FnMut(&mut Self, &T)) {
        self.key(key);
        self.out.push('[');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.out.push('{');
            self.comma.push(false);
            f(self, item);
            self.comma.pop();
            self.out.push('}');
        }
        self.out.push(']');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write(f: impl FnOnce(&mut ObjectLiteralWriter)) -> String {
        let mut out = String::new();
        let mut w = ObjectLiteralWriter::new(&mut out);
        w.begin_call("map1", "googleMap");
        f(&mut w);
        w.end_call();
        out
    }

    #[test]
    fn empty_call_shape() {
        assert_eq!(write(|_| {}), "jQuery('#map1').googleMap({});");
    }

    #[test]
    fn entries_keep_append_order() {
        let out = write(|w| {
            w.append("B", 2);
            w.append("A", 1);
            w.append("C", 3);
        });
        assert_eq!(out, "jQuery('#map1').googleMap({B: 2, A: 1, C: 3});");
    }

    #[test]
    fn append_unless_elides_defaults_by_value() {
        let out = write(|w| {
            w.append_unless("Kept", true, false);
            w.append_unless("Elided", true, true);
            w.append_unless("AlsoElided", 0, 0);
        });
        assert_eq!(out, "jQuery('#map1').googleMap({Kept: true});");
    }

    #[test]
    fn floats_use_js_number_formatting() {
        let out = write(|w| {
            w.append("Latitude", 23.5);
            w.append("Longitude", -82.0);
            w.append("Whole", 10.0);
            w.append("NegZero", -0.0);
            w.append("Bad", f64::NAN);
        });
        assert_eq!(
            out,
            "jQuery('#map1').googleMap({Latitude: 23.5, Longitude: -82, Whole: 10, NegZero: 0, Bad: 0});"
        );
    }

    #[test]
    fn strings_are_single_quoted_and_escaped() {
        let out = write(|w| {
            w.append("Title", "it's <b>here</b>\n");
        });
        assert_eq!(
            out,
            r"jQuery('#map1').googleMap({Title: 'it\'s <b>here<\/b>\n'});"
        );
    }

    #[test]
    fn nested_objects_and_collections() {
        let out = write(|w| {
            w.append("A", 1);
            w.object("Options", |w| {
                w.append("X", true);
                w.append("Y", 2);
            });
            w.collection("Items", &[10, 20], |w, item| {
                w.append("V", *item);
            });
        });
        assert_eq!(
            out,
            "jQuery('#map1').googleMap({A: 1, Options: {X: true, Y: 2}, Items: [{V: 10}, {V: 20}]});"
        );
    }

    #[test]
    fn empty_nested_object_is_braces() {
        let out = write(|w| w.object("Options", |_| {}));
        assert_eq!(out, "jQuery('#map1').googleMap({Options: {}});");
    }

    #[test]
    fn raw_values_are_not_quoted() {
        let out = write(|w| w.append_raw("OnMapClick", "handleClick"));
        assert_eq!(out, "jQuery('#map1').googleMap({OnMapClick: handleClick});");
    }

    #[test]
    fn json_fallback_serializes_arbitrary_values() {
        let out = write(|w| {
            w.append_json("Extra", &json!({"a": [1, 2], "b": "x"}));
        });
        assert_eq!(
            out,
            r#"jQuery('#map1').googleMap({Extra: {"a":[1,2],"b":"x"}});"#
        );
    }
}
