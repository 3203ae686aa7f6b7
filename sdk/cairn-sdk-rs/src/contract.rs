//! Contract interaction helpers.
//!
//! Every operation is a stateless free function over an explicit
//! [`NodeClient`] handle. Network-facing operations make no retries; the
//! first node failure propagates to the caller.

use cairn_crypto::KeyPair;
use cairn_types::{
    Approval, ContractHash, Deploy, DeployHash, DeployParams, Digest, ExecutableItem, Key, Motes,
    PublicKey, Recipient, RuntimeArgs, Signature, StoredValue, TimeDiff, Value,
};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

use crate::client::NodeClient;
use crate::errors::{Result, SdkError};
use crate::types::{ContractCallParams, ContractHandle};

/// Time-to-live applied to installation deploys.
const INSTALL_TTL: TimeDiff = TimeDiff::from_secs(1800);

/// Resolve a recipient to an on-chain key.
///
/// A public key resolves to its account hash; an already-resolved key passes
/// through unchanged, so the operation is idempotent on the `Key` variant.
pub fn recipient_address(recipient: &Recipient) -> Key {
    match recipient {
        Recipient::PublicKey(public_key) => Key::Account(public_key.to_account_hash()),
        Recipient::Key(key) => *key,
    }
}

/// Convert a string map into a typed map value, preserving iteration order.
pub fn string_map_to_value(map: &BTreeMap<String, String>) -> Value {
    Value::string_map(map.iter().map(|(k, v)| (k.clone(), v.clone())))
}

/// Convert typed map entries back into a string map.
///
/// Duplicate keys overwrite earlier entries; entries whose key or value is
/// not a string are skipped.
pub fn value_map_to_strings(entries: &[(Value, Value)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .filter_map(|(key, value)| Some((key.as_string()?.to_string(), value.as_string()?.to_string())))
        .collect()
}

/// Install a WASM module as a new contract.
///
/// Builds a ModuleBytes deploy around the file contents, signs it with the
/// given key pair and submits it. Fails with
/// [`SdkError::InstallationFailed`] when the node yields no deploy hash;
/// resubmission policy is the caller's.
pub async fn install_contract<C: NodeClient>(
    client: &C,
    chain_name: &str,
    keypair: &KeyPair,
    args: RuntimeArgs,
    payment_amount: Motes,
    wasm_path: &Path,
) -> Result<DeployHash> {
    let module_bytes = tokio::fs::read(wasm_path).await?;
    debug!(
        "installing {} ({} bytes) on {}",
        wasm_path.display(),
        module_bytes.len(),
        chain_name
    );

    let params = DeployParams::new(keypair.public_key(), chain_name, INSTALL_TTL, Vec::new());
    let session = ExecutableItem::ModuleBytes { module_bytes, args };
    let payment = ExecutableItem::standard_payment(payment_amount);

    let mut deploy = Deploy::make(params, session, payment)?;
    keypair.sign_deploy(&mut deploy);

    let deploy_hash = client
        .put_deploy(&deploy)
        .await?
        .ok_or(SdkError::InstallationFailed)?;

    info!("contract installation deploy {}", deploy_hash);
    Ok(deploy_hash)
}

/// Resolve an installed contract into a [`ContractHandle`].
///
/// Fetches the current state root, then the contract metadata at that root.
/// The named keys are filtered to `wanted_keys` and re-keyed under
/// camel-cased names. The two reads are not transactional; the state root
/// can advance between them.
pub async fn contract_handle<C: NodeClient>(
    client: &C,
    contract_hash: ContractHash,
    wanted_keys: &[&str],
) -> Result<ContractHandle> {
    let state_root = client.state_root_hash().await?;
    let stored = client
        .query_state(&state_root, &Key::Hash(contract_hash), &[])
        .await?;

    let contract = match stored {
        StoredValue::Contract(contract) => contract,
        _ => {
            return Err(SdkError::Contract(format!(
                "no contract stored under {}",
                contract_hash
            )))
        }
    };

    let named_keys = contract
        .named_keys
        .into_iter()
        .filter(|named_key| wanted_keys.contains(&named_key.name.as_str()))
        .fold(BTreeMap::new(), |mut acc, named_key| {
            acc.insert(camel_case(&named_key.name), named_key.key);
            acc
        });

    Ok(ContractHandle {
        contract_package_hash: contract.contract_package_hash,
        named_keys,
    })
}

/// Read a single stored value under a contract by key path.
///
/// Fails with [`SdkError::InvalidStoredValue`] when the queried location
/// holds a contract or account entity instead of a typed value.
pub async fn contract_simple_getter<C: NodeClient>(
    client: &C,
    contract_hash: ContractHash,
    path: &[String],
) -> Result<Value> {
    let state_root = client.state_root_hash().await?;
    let stored = client
        .query_state(&state_root, &Key::Hash(contract_hash), path)
        .await?;

    match stored {
        StoredValue::Value(value) => Ok(value),
        _ => Err(SdkError::InvalidStoredValue),
    }
}

/// Call an entry point on an installed contract, signing with the session
/// key and submitting in one step.
pub async fn call_contract<C: NodeClient>(
    client: &C,
    keypair: &KeyPair,
    params: ContractCallParams,
) -> Result<DeployHash> {
    let entry_point = params.entry_point.clone();
    let mut deploy = build_call_deploy(keypair.public_key(), params)?;
    keypair.sign_deploy(&mut deploy);

    let deploy_hash = client
        .put_deploy(&deploy)
        .await?
        .ok_or_else(|| SdkError::Rpc("node returned no deploy hash".to_string()))?;

    info!("contract call '{}' deploy {}", entry_point, deploy_hash);
    Ok(deploy_hash)
}

/// Build the same deploy as [`call_contract`] without signing it.
///
/// For offline and multi-party flows: no private key material is needed and
/// no network call is made. Complete the deploy with
/// [`append_signature_and_send`].
pub fn make_unsigned_call(account: PublicKey, params: ContractCallParams) -> Result<Deploy> {
    build_call_deploy(account, params)
}

/// Append an externally produced signature to a deploy and submit it.
///
/// The raw signature bytes are decoded per the signer's declared algorithm;
/// an Ed25519 key selects the Ed25519 encoding, any other key the Secp256k1
/// encoding. Returns the approved deploy together with its hash.
pub async fn append_signature_and_send<C: NodeClient>(
    client: &C,
    signer: PublicKey,
    mut deploy: Deploy,
    signature_bytes: &[u8],
) -> Result<(Deploy, DeployHash)> {
    let signature = Signature::from_raw_bytes(signer.algorithm(), signature_bytes)?;
    deploy.push_approval(Approval { signer, signature });

    let deploy_hash = client
        .put_deploy(&deploy)
        .await?
        .ok_or_else(|| SdkError::Rpc("node returned no deploy hash".to_string()))?;

    Ok((deploy, deploy_hash))
}

/// Shared construction for signed and unsigned contract calls.
fn build_call_deploy(account: PublicKey, params: ContractCallParams) -> Result<Deploy> {
    let dependencies = decode_dependencies(&params.dependencies)?;

    let deploy_params = DeployParams::new(account, params.chain_name, params.ttl, dependencies);
    let session = ExecutableItem::StoredContractByHash {
        hash: params.contract_hash,
        entry_point: params.entry_point,
        args: params.args,
    };
    let payment = ExecutableItem::standard_payment(params.payment_amount);

    Ok(Deploy::make(deploy_params, session, payment)?)
}

/// Decode hex-encoded dependency deploy hashes.
fn decode_dependencies(dependencies: &[String]) -> Result<Vec<Digest>> {
    dependencies
        .iter()
        .map(|dependency| Ok(Digest::from_str(dependency)?))
        .collect()
}

/// Normalize a named-key identifier to camelCase.
fn camel_case(name: &str) -> String {
    let mut parts = name
        .split(|c| c == '_' || c == '-')
        .filter(|part| !part.is_empty());

    let mut result = String::with_capacity(name.len());
    if let Some(first) = parts.next() {
        result.push_str(first);
    }
    for part in parts {
        let mut chars = part.chars();
        if let Some(c) = chars.next() {
            result.extend(c.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_types::AccountHash;
    use proptest::prelude::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("counter_value"), "counterValue");
        assert_eq!(camel_case("total-supply"), "totalSupply");
        assert_eq!(camel_case("owner"), "owner");
        assert_eq!(camel_case("a_b_c"), "aBC");
        assert_eq!(camel_case("double__underscore"), "doubleUnderscore");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn test_recipient_address_resolves_public_key() {
        let public_key = PublicKey::Ed25519([42u8; 32]);
        let key = recipient_address(&Recipient::PublicKey(public_key));
        assert_eq!(key, Key::Account(public_key.to_account_hash()));
    }

    #[test]
    fn test_recipient_address_idempotent_on_key() {
        let account = AccountHash::from_bytes([7u8; 32]);
        let key = recipient_address(&Recipient::Key(Key::Account(account)));
        assert_eq!(key, Key::Account(account));

        // A second wrap denotes the same account hash.
        let again = recipient_address(&Recipient::Key(key));
        assert_eq!(again, key);
    }

    #[test]
    fn test_string_map_to_value_preserves_entries() {
        let mut map = BTreeMap::new();
        map.insert("name".to_string(), "token".to_string());
        map.insert("symbol".to_string(), "TKN".to_string());

        let value = string_map_to_value(&map);
        let entries = value.as_map().unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_value_map_to_strings_last_write_wins() {
        let entries = vec![
            (Value::from("k"), Value::from("first")),
            (Value::from("k"), Value::from("second")),
        ];
        let map = value_map_to_strings(&entries);
        assert_eq!(map.get("k").map(String::as_str), Some("second"));
    }

    #[test]
    fn test_value_map_to_strings_skips_non_strings() {
        let entries = vec![
            (Value::from("a"), Value::from("1")),
            (Value::from("b"), Value::U64(2)),
            (Value::U64(3), Value::from("3")),
        ];
        let map = value_map_to_strings(&entries);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_decode_dependencies() {
        let digest = Digest::compute(b"dep");
        let decoded = decode_dependencies(&[digest.to_hex()]).unwrap();
        assert_eq!(decoded, vec![digest]);

        assert!(decode_dependencies(&["not-hex".to_string()]).is_err());
        assert!(decode_dependencies(&["abcd".to_string()]).is_err());
    }

    proptest! {
        #[test]
        fn prop_string_map_roundtrip(map in proptest::collection::btree_map(".{0,12}", ".{0,12}", 0..16)) {
            let value = string_map_to_value(&map);
            let entries = value.as_map().unwrap();
            let back = value_map_to_strings(entries);
            prop_assert_eq!(back, map);
        }
    }
}
