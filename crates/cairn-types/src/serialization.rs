//! Serialization implementations for cairn-types
//!
//! String-shaped serde representations for the scalar types, raw-byte borsh
//! representations for everything that feeds canonical hashing, and the hex
//! helper used for embedded byte buffers.

use crate::*;

/// Serde helper for `Vec<u8>` fields carried as hex strings on the wire.
#[cfg(feature = "serde")]
pub mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        hex::decode(&s).map_err(serde::de::Error::custom)
    }
}

// Serde implementations
#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    // Digest
    impl Serialize for Digest {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.to_hex().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Digest {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Digest::from_str(&s).map_err(serde::de::Error::custom)
        }
    }

    // AccountHash
    impl Serialize for AccountHash {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.to_string().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for AccountHash {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            AccountHash::from_str(&s).map_err(serde::de::Error::custom)
        }
    }

    // ContractHash
    impl Serialize for ContractHash {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.to_string().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for ContractHash {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            ContractHash::from_str(&s).map_err(serde::de::Error::custom)
        }
    }

    // Key
    impl Serialize for Key {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.to_formatted_string().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Key {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Key::from_formatted_string(&s).map_err(serde::de::Error::custom)
        }
    }

    // PublicKey
    impl Serialize for PublicKey {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.to_hex().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for PublicKey {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            PublicKey::from_hex(&s).map_err(serde::de::Error::custom)
        }
    }

    // Signature
    impl Serialize for Signature {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.to_hex().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Signature {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Signature::from_hex(&s).map_err(serde::de::Error::custom)
        }
    }

    // Motes - decimal string
    impl Serialize for Motes {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.to_string().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Motes {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Motes::from_str(&s).map_err(serde::de::Error::custom)
        }
    }
}

// Borsh implementations
mod borsh_impls {
    use super::*;
    use borsh::{BorshDeserialize, BorshSerialize};

    // Digest - raw bytes
    impl BorshSerialize for Digest {
        fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
            writer.write_all(self.as_bytes())
        }
    }

    impl BorshDeserialize for Digest {
        fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
            let mut bytes = [0u8; 32];
            reader.read_exact(&mut bytes)?;
            Ok(Digest::from_bytes(bytes))
        }
    }

    // AccountHash - raw bytes
    impl BorshSerialize for AccountHash {
        fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
            writer.write_all(self.as_bytes())
        }
    }

    impl BorshDeserialize for AccountHash {
        fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
            let mut bytes = [0u8; 32];
            reader.read_exact(&mut bytes)?;
            Ok(AccountHash::from_bytes(bytes))
        }
    }

    // ContractHash - raw bytes
    impl BorshSerialize for ContractHash {
        fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
            writer.write_all(self.as_bytes())
        }
    }

    impl BorshDeserialize for ContractHash {
        fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
            let mut bytes = [0u8; 32];
            reader.read_exact(&mut bytes)?;
            Ok(ContractHash::new(Digest::from_bytes(bytes)))
        }
    }

    // PublicKey - algorithm tag then raw key bytes
    impl BorshSerialize for PublicKey {
        fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
            writer.write_all(&[self.algorithm().tag()])?;
            writer.write_all(self.as_bytes())
        }
    }

    impl BorshDeserialize for PublicKey {
        fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
            let mut tag = [0u8; 1];
            reader.read_exact(&mut tag)?;
            match Algorithm::from_tag(tag[0]) {
                Ok(Algorithm::Ed25519) => {
                    let mut bytes = [0u8; 32];
                    reader.read_exact(&mut bytes)?;
                    Ok(PublicKey::Ed25519(bytes))
                }
                Ok(Algorithm::Secp256k1) => {
                    let mut bytes = [0u8; 33];
                    reader.read_exact(&mut bytes)?;
                    Ok(PublicKey::Secp256k1(bytes))
                }
                Err(e) => Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    e.to_string(),
                )),
            }
        }
    }

    // Motes - u128
    impl BorshSerialize for Motes {
        fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
            BorshSerialize::serialize(&self.value(), writer)
        }
    }

    impl BorshDeserialize for Motes {
        fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
            Ok(Motes::new(u128::deserialize_reader(reader)?))
        }
    }
}
