//! Structural differences between two JSON values.
//!
//! The comparison itself is a capability ([`Differ`]); [`StructuralDiffer`]
//! is the default. Reports only consume the [`DiffEntry`] shape, so any
//! other comparison routine can be plugged in.

use std::fmt;

use serde_json::{Map, Value};
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => f.write_str(k),
            PathSegment::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(k: &str) -> Self {
        PathSegment::Key(k.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(i: usize) -> Self {
        PathSegment::Index(i)
    }
}

/// Location of a difference, outermost field first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffPath(pub SmallVec<[PathSegment; 4]>);

impl DiffPath {
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    pub fn child(&self, seg: impl Into<PathSegment>) -> Self {
        let mut p = self.clone();
        p.0.push(seg.into());
        p
    }

    /// Field names joined with `.`; the root path renders empty.
    pub fn dotted(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for DiffPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for DiffPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// An element that exists on only one side of an array comparison.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayItem {
    Added(Value),
    Removed(Value),
}

impl ArrayItem {
    pub fn value(&self) -> &Value {
        match self {
            ArrayItem::Added(v) | ArrayItem::Removed(v) => v,
        }
    }

    /// `+` for an added element, `-` for a removed one.
    pub fn marker(&self) -> &'static str {
        match self {
            ArrayItem::Added(_) => "+",
            ArrayItem::Removed(_) => "-",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiffKind {
    Changed,
    Added,
    Deleted,
    ArrayChanged,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DiffEntry {
    Changed {
        path: DiffPath,
        previous: Value,
        next: Value,
    },
    Added {
        path: DiffPath,
        next: Value,
    },
    Deleted {
        path: DiffPath,
        previous: Value,
    },
    ArrayChanged {
        path: DiffPath,
        index: usize,
        item: ArrayItem,
    },
}

impl DiffEntry {
    pub fn kind(&self) -> DiffKind {
        match self {
            DiffEntry::Changed { .. } => DiffKind::Changed,
            DiffEntry::Added { .. } => DiffKind::Added,
            DiffEntry::Deleted { .. } => DiffKind::Deleted,
            DiffEntry::ArrayChanged { .. } => DiffKind::ArrayChanged,
        }
    }

    pub fn path(&self) -> &DiffPath {
        match self {
            DiffEntry::Changed { path, .. }
            | DiffEntry::Added { path, .. }
            | DiffEntry::Deleted { path, .. }
            | DiffEntry::ArrayChanged { path, .. } => path,
        }
    }
}

/// Computes the ordered list of differences from `previous` to `next`.
/// Structurally equal inputs must produce an empty list.
pub trait Differ {
    fn diff(&self, previous: &Value, next: &Value) -> Vec<DiffEntry>;
}

impl<F> Differ for F
where
    F: Fn(&Value, &Value) -> Vec<DiffEntry>,
{
    fn diff(&self, previous: &Value, next: &Value) -> Vec<DiffEntry> {
        self(previous, next)
    }
}

/// Recursive field-by-field comparison.
///
/// Ordering: keys of `previous` in their order (recursing, or `Deleted`),
/// then keys only present in `next` (`Added`). Arrays of unequal length
/// report the surplus indices first, highest index first, then recurse into
/// the shared prefix from the back. Values of different JSON types are
/// reported as a single `Changed`. Numbers compare by value, so `1` and
/// `1.0` are equal.
#[derive(Clone, Copy, Debug, Default)]
pub struct StructuralDiffer;

impl Differ for StructuralDiffer {
    fn diff(&self, previous: &Value, next: &Value) -> Vec<DiffEntry> {
        let mut out = Vec::new();
        walk(previous, next, &DiffPath::root(), &mut out);
        out
    }
}

fn walk(lhs: &Value, rhs: &Value, path: &DiffPath, out: &mut Vec<DiffEntry>) {
    match (lhs, rhs) {
        (Value::Object(l), Value::Object(r)) => walk_object(l, r, path, out),
        (Value::Array(l), Value::Array(r)) => walk_array(l, r, path, out),
        // `1` and `1.0` are the same number; integers compare exactly.
        (Value::Number(l), Value::Number(r))
            if (l.is_f64() || r.is_f64()) && l.as_f64() == r.as_f64() => {}
        _ if lhs == rhs => {}
        _ => out.push(DiffEntry::Changed {
            path: path.clone(),
            previous: lhs.clone(),
            next: rhs.clone(),
        }),
    }
}

fn walk_object(
    l: &Map<String, Value>,
    r: &Map<String, Value>,
    path: &DiffPath,
    out: &mut Vec<DiffEntry>,
) {
    for (k, lv) in l {
        let child = path.child(k.as_str());
        match r.get(k) {
            Some(rv) => walk(lv, rv, &child, out),
            None => out.push(DiffEntry::Deleted {
                path: child,
                previous: lv.clone(),
            }),
        }
    }
    for (k, rv) in r {
        if !l.contains_key(k) {
            out.push(DiffEntry::Added {
                path: path.child(k.as_str()),
                next: rv.clone(),
            });
        }
    }
}

fn walk_array(l: &[Value], r: &[Value], path: &DiffPath, out: &mut Vec<DiffEntry>) {
    for index in (r.len()..l.len()).rev() {
        out.push(DiffEntry::ArrayChanged {
            path: path.clone(),
            index,
            item: ArrayItem::Removed(l[index].clone()),
        });
    }
    for index in (l.len()..r.len()).rev() {
        out.push(DiffEntry::ArrayChanged {
            path: path.clone(),
            index,
            item: ArrayItem::Added(r[index].clone()),
        });
    }
    let shared = l.len().min(r.len());
    for index in (0..shared).rev() {
        walk(&l[index], &r[index], &path.child(index), out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(segs: &[&str]) -> DiffPath {
        segs.iter().copied().collect()
    }

    #[test]
    fn equal_values_have_no_entries() {
        let v = json!({"a": [1, {"b": null}], "c": "x"});
        assert!(StructuralDiffer.diff(&v, &v.clone()).is_empty());
    }

    #[test]
    fn object_keys_report_in_previous_then_next_order() {
        let prev = json!({"keep": 1, "gone": true, "edit": "a"});
        let next = json!({"edit": "b", "keep": 1, "fresh": [1]});

        let entries = StructuralDiffer.diff(&prev, &next);
        assert_eq!(
            entries,
            vec![
                DiffEntry::Deleted {
                    path: path(&["gone"]),
                    previous: json!(true),
                },
                DiffEntry::Changed {
                    path: path(&["edit"]),
                    previous: json!("a"),
                    next: json!("b"),
                },
                DiffEntry::Added {
                    path: path(&["fresh"]),
                    next: json!([1]),
                },
            ]
        );
    }

    #[test]
    fn nested_objects_extend_the_path() {
        let prev = json!({"user": {"name": "Ann", "age": 30}});
        let next = json!({"user": {"name": "Ann", "age": 31}});

        let entries = StructuralDiffer.diff(&prev, &next);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path().dotted(), "user.age");
        assert_eq!(entries[0].kind(), DiffKind::Changed);
    }

    #[test]
    fn type_mismatch_is_one_change() {
        let prev = json!({"v": {"deep": 1}});
        let next = json!({"v": 5});

        let entries = StructuralDiffer.diff(&prev, &next);
        assert_eq!(
            entries,
            vec![DiffEntry::Changed {
                path: path(&["v"]),
                previous: json!({"deep": 1}),
                next: json!(5),
            }]
        );
    }

    #[test]
    fn integer_and_float_spellings_are_equal() {
        let prev = json!({"v": 1, "list": [2, 3.5]});
        let next = json!({"v": 1.0, "list": [2.0, 3.5]});
        assert!(StructuralDiffer.diff(&prev, &next).is_empty());

        let entries = StructuralDiffer.diff(&json!({"v": 1}), &json!({"v": 1.5}));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind(), DiffKind::Changed);
    }

    #[test]
    fn array_growth_reports_surplus_from_the_back() {
        let prev = json!({"items": ["a"]});
        let next = json!({"items": ["a", "b", "c"]});

        let entries = StructuralDiffer.diff(&prev, &next);
        let indices: Vec<usize> = entries
            .iter()
            .filter_map(|e| match e {
                DiffEntry::ArrayChanged { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(indices, vec![2, 1]);
        assert_eq!(
            entries[0],
            DiffEntry::ArrayChanged {
                path: path(&["items"]),
                index: 2,
                item: ArrayItem::Added(json!("c")),
            }
        );
    }

    #[test]
    fn array_shrink_then_shared_prefix_changes() {
        let prev = json!([1, 2, 3]);
        let next = json!([9, 2]);

        let entries = StructuralDiffer.diff(&prev, &next);
        assert_eq!(
            entries,
            vec![
                DiffEntry::ArrayChanged {
                    path: DiffPath::root(),
                    index: 2,
                    item: ArrayItem::Removed(json!(3)),
                },
                DiffEntry::Changed {
                    path: DiffPath::root().child(0usize),
                    previous: json!(1),
                    next: json!(9),
                },
            ]
        );
    }

    #[test]
    fn closures_are_differs() {
        let never = |_: &Value, _: &Value| Vec::<DiffEntry>::new();
        assert!(never.diff(&json!(1), &json!(2)).is_empty());
    }
}
