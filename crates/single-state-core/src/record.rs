//! Records: state values that know how to take a partial update.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::Serialize;
use serde_json::{Map, Value};

/// A state value with named fields.
///
/// `merge` is a shallow merge: every field present in `partial` replaces the
/// current field wholesale (nested records are not merged), every other field
/// is kept.
///
/// Structs implement this with a companion partial type:
///
/// ```
/// use serde::Serialize;
/// use single_state_core::Record;
///
/// #[derive(Clone, Serialize)]
/// struct Form {
///     note: String,
///     value: i32,
/// }
///
/// #[derive(Default)]
/// struct FormPatch {
///     note: Option<String>,
///     value: Option<i32>,
/// }
///
/// impl Record for Form {
///     type Partial = FormPatch;
///
///     fn merge(&self, p: FormPatch) -> Self {
///         Form {
///             note: p.note.unwrap_or_else(|| self.note.clone()),
///             value: p.value.unwrap_or(self.value),
///         }
///     }
/// }
/// ```
pub trait Record: Clone + Serialize + 'static {
    type Partial: 'static;

    fn merge(&self, partial: Self::Partial) -> Self;
}

impl Record for Map<String, Value> {
    type Partial = Map<String, Value>;

    fn merge(&self, partial: Map<String, Value>) -> Self {
        let mut out = self.clone();
        for (k, v) in partial {
            out.insert(k, v);
        }
        out
    }
}

/// Non-object values carry no fields: merging onto one yields the partial's
/// fields alone, and a non-object partial contributes nothing.
impl Record for Value {
    type Partial = Value;

    fn merge(&self, partial: Value) -> Self {
        let base = match self {
            Value::Object(m) => m.clone(),
            _ => Map::new(),
        };
        match partial {
            Value::Object(p) => Value::Object(base.merge(p)),
            _ => Value::Object(base),
        }
    }
}

impl<V> Record for BTreeMap<String, V>
where
    V: Clone + Serialize + 'static,
{
    type Partial = BTreeMap<String, V>;

    fn merge(&self, partial: BTreeMap<String, V>) -> Self {
        let mut out = self.clone();
        out.extend(partial);
        out
    }
}

impl<V, S> Record for HashMap<String, V, S>
where
    V: Clone + Serialize + 'static,
    S: BuildHasher + Clone + 'static,
{
    type Partial = HashMap<String, V, S>;

    fn merge(&self, partial: HashMap<String, V, S>) -> Self {
        let mut out = self.clone();
        out.extend(partial);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn value_merge_overrides_and_keeps() {
        let s0 = json!({"note": "", "value": 0, "nested": {"a": 1, "b": 2}});
        let next = s0.merge(json!({"note": "hi", "nested": {"a": 9}}));
        assert_eq!(next, json!({"note": "hi", "value": 0, "nested": {"a": 9}}));
    }

    #[test]
    fn value_merge_keeps_field_order() {
        let s0 = json!({"b": 1, "a": 2});
        let next = s0.merge(json!({"c": 3, "b": 4}));
        let keys: Vec<&String> = next.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn value_merge_with_non_objects() {
        assert_eq!(json!(5).merge(json!({"a": 1})), json!({"a": 1}));
        assert_eq!(json!({"a": 1}).merge(json!(null)), json!({"a": 1}));
        assert_eq!(json!("x").merge(json!(2)), json!({}));
    }

    #[test]
    fn map_merges() {
        let mut s0 = BTreeMap::new();
        s0.insert("x".to_string(), 1);
        s0.insert("y".to_string(), 2);
        let mut p = BTreeMap::new();
        p.insert("y".to_string(), 20);
        let next = s0.merge(p);
        assert_eq!(next.get("x"), Some(&1));
        assert_eq!(next.get("y"), Some(&20));

        let h0: HashMap<String, bool> = [("on".to_string(), false)].into_iter().collect();
        let h1 = h0.merge([("on".to_string(), true)].into_iter().collect());
        assert_eq!(h1.get("on"), Some(&true));
    }
}
