use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{Parcelable, StarterEnum};

/// One stored representation for each value kind a [`Bundle`] can hold.
///
/// Parcelable values are stored as their parcel bytes, serializable values as
/// a [`serde_json::Value`], enums as their variant name. Everything else is
/// stored natively.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Str(String),
    BoolArray(Vec<bool>),
    CharArray(Vec<char>),
    I8Array(Vec<i8>),
    I16Array(Vec<i16>),
    I32Array(Vec<i32>),
    I64Array(Vec<i64>),
    F32Array(Vec<f32>),
    F64Array(Vec<f64>),
    StrArray(Vec<String>),
    Parcel(Vec<u8>),
    ParcelArray(Vec<Vec<u8>>),
    Json(serde_json::Value),
    EnumName(String),
}

/// The key-value container arguments travel through.
///
/// Keys are strings, values are [`Value`]s. Entries are kept in a
/// [`BTreeMap`] so iteration order, equality and debug output are
/// deterministic. Every `put_*` takes the value by ownership and every
/// `get_*` returns `None` when the key is absent, holds a different kind, or
/// the stored bytes fail to decode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bundle {
    entries: BTreeMap<String, Value>,
}

macro_rules! typed_entry {
    ($put:ident, $get:ident, $variant:ident, $ty:ty) => {
        pub fn $put(&mut self, key: &str, value: $ty) {
            self.entries.insert(key.to_owned(), Value::$variant(value));
        }
        pub fn $get(&self, key: &str) -> Option<$ty> {
            match self.entries.get(key) {
                Some(Value::$variant(value)) => Some(value.clone()),
                _ => None,
            }
        }
    };
}

impl Bundle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    typed_entry!(put_bool, get_bool, Bool, bool);
    typed_entry!(put_char, get_char, Char, char);
    typed_entry!(put_i8, get_i8, I8, i8);
    typed_entry!(put_i16, get_i16, I16, i16);
    typed_entry!(put_i32, get_i32, I32, i32);
    typed_entry!(put_i64, get_i64, I64, i64);
    typed_entry!(put_f32, get_f32, F32, f32);
    typed_entry!(put_f64, get_f64, F64, f64);
    typed_entry!(put_str, get_str, Str, String);
    typed_entry!(put_bool_array, get_bool_array, BoolArray, Vec<bool>);
    typed_entry!(put_char_array, get_char_array, CharArray, Vec<char>);
    typed_entry!(put_i8_array, get_i8_array, I8Array, Vec<i8>);
    typed_entry!(put_i16_array, get_i16_array, I16Array, Vec<i16>);
    typed_entry!(put_i32_array, get_i32_array, I32Array, Vec<i32>);
    typed_entry!(put_i64_array, get_i64_array, I64Array, Vec<i64>);
    typed_entry!(put_f32_array, get_f32_array, F32Array, Vec<f32>);
    typed_entry!(put_f64_array, get_f64_array, F64Array, Vec<f64>);
    typed_entry!(put_str_array, get_str_array, StrArray, Vec<String>);

    pub fn put_parcelable<T: Parcelable>(&mut self, key: &str, value: T) {
        self.entries
            .insert(key.to_owned(), Value::Parcel(value.to_parcel()));
    }

    pub fn get_parcelable<T: Parcelable>(&self, key: &str) -> Option<T> {
        match self.entries.get(key) {
            Some(Value::Parcel(bytes)) => T::from_parcel(bytes).ok(),
            _ => None,
        }
    }

    pub fn put_parcelable_array<T: Parcelable>(&mut self, key: &str, values: Vec<T>) {
        let parcels = values.iter().map(Parcelable::to_parcel).collect();
        self.entries
            .insert(key.to_owned(), Value::ParcelArray(parcels));
    }

    /// `None` if any element of the stored array fails to decode.
    pub fn get_parcelable_array<T: Parcelable>(&self, key: &str) -> Option<Vec<T>> {
        match self.entries.get(key) {
            Some(Value::ParcelArray(parcels)) => parcels
                .iter()
                .map(|bytes| T::from_parcel(bytes).ok())
                .collect(),
            _ => None,
        }
    }

    /// Values that can not be represented as JSON (for example maps with
    /// non-string keys) are silently not stored, leaving the key absent.
    pub fn put_serializable<T: Serialize>(&mut self, key: &str, value: T) {
        if let Ok(value) = serde_json::to_value(value) {
            self.entries.insert(key.to_owned(), Value::Json(value));
        }
    }

    pub fn get_serializable<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.entries.get(key) {
            Some(Value::Json(value)) => serde_json::from_value(value.clone()).ok(),
            _ => None,
        }
    }

    pub fn put_enum<T: StarterEnum>(&mut self, key: &str, value: T) {
        self.entries
            .insert(key.to_owned(), Value::EnumName(value.variant_name().to_owned()));
    }

    pub fn get_enum<T: StarterEnum>(&self, key: &str) -> Option<T> {
        match self.entries.get(key) {
            Some(Value::EnumName(name)) => T::from_variant_name(name),
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Moves every entry of `other` into `self`. On key collision the entry
    /// from `other` wins.
    pub fn merge(&mut self, other: Bundle) {
        self.entries.extend(other.entries);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParcelError;

    #[derive(Debug, PartialEq, Eq, Clone)]
    struct Point {
        x: i32,
        y: i32,
    }

    impl Parcelable for Point {
        fn to_parcel(&self) -> Vec<u8> {
            let mut out = Vec::with_capacity(8);
            out.extend_from_slice(&self.x.to_be_bytes());
            out.extend_from_slice(&self.y.to_be_bytes());
            out
        }
        fn from_parcel(parcel: &[u8]) -> Result<Self, ParcelError> {
            if parcel.len() < 8 {
                return Err(ParcelError::Length {
                    provided: parcel.len(),
                    expected: 8,
                });
            }
            let mut word = [0u8; 4];
            word.copy_from_slice(&parcel[0..4]);
            let x = i32::from_be_bytes(word);
            word.copy_from_slice(&parcel[4..8]);
            let y = i32::from_be_bytes(word);
            Ok(Point { x, y })
        }
    }

    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    enum Direction {
        North,
        South,
    }

    impl StarterEnum for Direction {
        fn variant_name(&self) -> &'static str {
            match self {
                Direction::North => "North",
                Direction::South => "South",
            }
        }
        fn from_variant_name(name: &str) -> Option<Self> {
            match name {
                "North" => Some(Direction::North),
                "South" => Some(Direction::South),
                _ => None,
            }
        }
    }

    #[test]
    fn scalar_entries_round_trip() {
        let mut bundle = Bundle::new();
        bundle.put_bool("a", true);
        bundle.put_char("b", 'z');
        bundle.put_i8("c", -4);
        bundle.put_i64("d", i64::MAX);
        bundle.put_f64("e", 2.5);
        bundle.put_str("f", "hello".to_owned());
        assert_eq!(bundle.get_bool("a"), Some(true));
        assert_eq!(bundle.get_char("b"), Some('z'));
        assert_eq!(bundle.get_i8("c"), Some(-4));
        assert_eq!(bundle.get_i64("d"), Some(i64::MAX));
        assert_eq!(bundle.get_f64("e"), Some(2.5));
        assert_eq!(bundle.get_str("f"), Some("hello".to_owned()));
    }

    #[test]
    fn absent_or_mismatched_kind_reads_none() {
        let mut bundle = Bundle::new();
        bundle.put_i32("n", 7);
        assert_eq!(bundle.get_i32("missing"), None);
        assert_eq!(bundle.get_str("n"), None);
    }

    #[test]
    fn empty_array_round_trips() {
        let mut bundle = Bundle::new();
        bundle.put_i32_array("empty", Vec::new());
        assert_eq!(bundle.get_i32_array("empty"), Some(Vec::new()));
        assert!(bundle.contains("empty"));
    }

    #[test]
    fn parcelable_round_trips() {
        let mut bundle = Bundle::new();
        let point = Point { x: -1, y: 99 };
        bundle.put_parcelable("p", point.clone());
        assert_eq!(bundle.get_parcelable::<Point>("p"), Some(point));
    }

    #[test]
    fn parcelable_array_round_trips() {
        let mut bundle = Bundle::new();
        let points = vec![Point { x: 0, y: 0 }, Point { x: 3, y: -3 }];
        bundle.put_parcelable_array("ps", points.clone());
        assert_eq!(bundle.get_parcelable_array::<Point>("ps"), Some(points));
    }

    #[test]
    fn serializable_round_trips() {
        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
        struct Profile {
            name: String,
            age: u8,
        }
        let mut bundle = Bundle::new();
        bundle.put_serializable(
            "profile",
            Profile {
                name: "kai".to_owned(),
                age: 30,
            },
        );
        assert_eq!(
            bundle.get_serializable::<Profile>("profile"),
            Some(Profile {
                name: "kai".to_owned(),
                age: 30,
            })
        );
    }

    #[test]
    fn enum_stored_by_name() {
        let mut bundle = Bundle::new();
        bundle.put_enum("d", Direction::South);
        assert_eq!(bundle.get_enum::<Direction>("d"), Some(Direction::South));
        // an unknown name reads back as nothing rather than a wrong constant
        bundle.put_str("d2", "West".to_owned());
        assert_eq!(bundle.get_enum::<Direction>("d2"), None);
    }

    #[test]
    fn keys_iterate_in_sorted_order() {
        let mut bundle = Bundle::new();
        bundle.put_i32("b", 2);
        bundle.put_i32("a", 1);
        bundle.put_i32("c", 3);
        let keys: Vec<&str> = bundle.keys().collect();
        assert_eq!(keys, ["a", "b", "c"]);
        bundle.remove("b");
        let keys: Vec<&str> = bundle.keys().collect();
        assert_eq!(keys, ["a", "c"]);
    }

    #[test]
    fn merge_overwrites_on_collision() {
        let mut base = Bundle::new();
        base.put_i32("x", 1);
        base.put_i32("y", 2);
        let mut incoming = Bundle::new();
        incoming.put_i32("y", 20);
        incoming.put_i32("z", 30);
        base.merge(incoming);
        assert_eq!(base.get_i32("x"), Some(1));
        assert_eq!(base.get_i32("y"), Some(20));
        assert_eq!(base.get_i32("z"), Some(30));
        assert_eq!(base.len(), 3);
    }
}
