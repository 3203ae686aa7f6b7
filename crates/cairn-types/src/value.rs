use crate::key::Key;
use crate::public_key::PublicKey;

/// Typed value used for runtime arguments and stored contract state.
///
/// `Map` preserves insertion order; the on-chain representation is unordered
/// by key.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(borsh::BorshSerialize, borsh::BorshDeserialize)]
pub enum Value {
    Unit,
    Bool(bool),
    U32(u32),
    U64(u64),
    U128(u128),
    String(String),
    Bytes(#[cfg_attr(feature = "serde", serde(with = "crate::serialization::hex_bytes"))] Vec<u8>),
    Key(Key),
    PublicKey(PublicKey),
    Option(Option<Box<Value>>),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Build a string→string map value from ordered entries.
    pub fn string_map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (Value::String(k.into()), Value::String(v.into())))
                .collect(),
        )
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::U64(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_u128(&self) -> Option<u128> {
        match self {
            Value::U128(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_key(&self) -> Option<&Key> {
        match self {
            Value::Key(k) => Some(k),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::U64(n)
    }
}

impl From<Key> for Value {
    fn from(k: Key) -> Self {
        Value::Key(k)
    }
}

impl From<PublicKey> for Value {
    fn from(k: PublicKey) -> Self {
        Value::PublicKey(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::Digest;
    use crate::key::ContractHash;

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::from("abc").as_string(), Some("abc"));
        assert_eq!(Value::from(7u64).as_u64(), Some(7));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::Unit.as_string(), None);
        assert_eq!(Value::from("abc").as_u64(), None);
    }

    #[test]
    fn test_string_map_preserves_order() {
        let value = Value::string_map([("b", "2"), ("a", "1")]);
        let entries = value.as_map().unwrap();
        assert_eq!(entries[0].0.as_string(), Some("b"));
        assert_eq!(entries[1].0.as_string(), Some("a"));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_value_serde_roundtrip() {
        let value = Value::List(vec![
            Value::Unit,
            Value::Bool(true),
            Value::U128(1u128 << 100),
            Value::Bytes(vec![0xde, 0xad]),
            Value::Key(Key::Hash(ContractHash::new(Digest::compute(b"c")))),
            Value::Option(Some(Box::new(Value::from("inner")))),
            Value::string_map([("k", "v")]),
        ]);

        let json = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, back);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_value_bytes_serialize_as_hex() {
        let json = serde_json::to_string(&Value::Bytes(vec![0xde, 0xad, 0xbe, 0xef])).unwrap();
        assert_eq!(json, r#"{"Bytes":"deadbeef"}"#);
    }

    #[test]
    fn test_value_borsh_roundtrip() {
        let value = Value::Map(vec![
            (Value::from("a"), Value::from(1u64)),
            (Value::from("b"), Value::Bytes(vec![1, 2, 3])),
        ]);

        let encoded = borsh::to_vec(&value).unwrap();
        let back: Value = borsh::from_slice(&encoded).unwrap();
        assert_eq!(value, back);
    }
}
