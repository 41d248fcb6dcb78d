// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret-backed proxy credential lookup.

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::{Api, Client};
use tracing::{debug, instrument};

use crate::constants::secret_keys;
use crate::error::{Result, ScoutError};

/// Read a proxy `(user, password)` pair from a Secret.
///
/// The value is returned as a decoded UTF-8 string; the kube client
/// decodes the base64 representation automatically.
#[instrument(skip(client))]
pub async fn read_proxy_credentials(
    client: &Client,
    name: &str,
    namespace: &str,
) -> Result<(String, String)> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);
    let secret = secrets.get(name).await?;

    let data = secret
        .data
        .as_ref()
        .ok_or_else(|| ScoutError::SecretNoData {
            name: name.to_string(),
        })?;

    let user = secret_value(data, name, secret_keys::USER)?;
    let password = secret_value(data, name, secret_keys::PASSWORD)?;
    debug!("Resolved proxy credentials from secret {}/{}", namespace, name);

    Ok((user, password))
}

fn secret_value(data: &BTreeMap<String, ByteString>, name: &str, key: &str) -> Result<String> {
    let bytes = data.get(key).ok_or_else(|| ScoutError::SecretKeyMissing {
        name: name.to_string(),
        key: key.to_string(),
    })?;

    String::from_utf8(bytes.0.clone()).map_err(|_| ScoutError::SecretInvalidUtf8 {
        name: name.to_string(),
        key: key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{secret_json, MockService};

    #[tokio::test]
    async fn test_read_proxy_credentials() {
        let mock = MockService::new().on_get(
            "/api/v1/namespaces/operator/secrets/proxy-creds",
            200,
            &secret_json(
                "proxy-creds",
                "operator",
                &[("user", "alice"), ("password", "secret")],
            ),
        );

        let (user, password) =
            read_proxy_credentials(&mock.into_client(), "proxy-creds", "operator")
                .await
                .unwrap();

        assert_eq!(user, "alice");
        assert_eq!(password, "secret");
    }

    #[tokio::test]
    async fn test_read_proxy_credentials_missing_secret() {
        let mock = MockService::new();

        let err = read_proxy_credentials(&mock.into_client(), "proxy-creds", "operator")
            .await
            .unwrap_err();

        assert!(matches!(err, ScoutError::Kube(_)));
    }

    #[tokio::test]
    async fn test_read_proxy_credentials_missing_key() {
        let mock = MockService::new().on_get(
            "/api/v1/namespaces/operator/secrets/proxy-creds",
            200,
            &secret_json("proxy-creds", "operator", &[("user", "alice")]),
        );

        let err = read_proxy_credentials(&mock.into_client(), "proxy-creds", "operator")
            .await
            .unwrap_err();

        assert!(matches!(err, ScoutError::SecretKeyMissing { .. }));
    }
}
