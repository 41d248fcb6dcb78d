// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment pod-template inspection helpers.

use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{EnvVar, EnvVarSource};

/// Look up the literal value of an env var on the first container of a
/// Deployment's pod template.
pub fn deployment_env(deployment: &Deployment, name: &str) -> Option<String> {
    deployment_env_entry(deployment, name).and_then(|e| e.value.clone())
}

/// Look up the `valueFrom` source of an env var on the first container.
pub fn deployment_env_var_source(deployment: &Deployment, name: &str) -> Option<EnvVarSource> {
    deployment_env_entry(deployment, name).and_then(|e| e.value_from.clone())
}

fn deployment_env_entry<'a>(deployment: &'a Deployment, name: &str) -> Option<&'a EnvVar> {
    deployment
        .spec
        .as_ref()?
        .template
        .spec
        .as_ref()?
        .containers
        .first()?
        .env
        .as_ref()?
        .iter()
        .find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::apps::v1::DeploymentSpec;
    use k8s_openapi::api::core::v1::{
        Container, EnvVarSource, ObjectFieldSelector, PodSpec, PodTemplateSpec,
    };

    fn make_deployment(env: Vec<EnvVar>) -> Deployment {
        Deployment {
            spec: Some(DeploymentSpec {
                template: PodTemplateSpec {
                    spec: Some(PodSpec {
                        containers: vec![Container {
                            name: "server".to_string(),
                            env: Some(env),
                            ..Default::default()
                        }],
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_deployment_env_found() {
        let deployment = make_deployment(vec![
            EnvVar {
                name: "HTTP_PROXY".to_string(),
                value: Some("http://proxy.local:8080".to_string()),
                ..Default::default()
            },
            EnvVar {
                name: "NO_PROXY".to_string(),
                value: Some("localhost".to_string()),
                ..Default::default()
            },
        ]);

        assert_eq!(
            deployment_env(&deployment, "HTTP_PROXY").as_deref(),
            Some("http://proxy.local:8080")
        );
    }

    #[test]
    fn test_deployment_env_missing() {
        let deployment = make_deployment(vec![]);
        assert_eq!(deployment_env(&deployment, "HTTP_PROXY"), None);
    }

    #[test]
    fn test_deployment_env_no_containers() {
        let deployment = Deployment::default();
        assert_eq!(deployment_env(&deployment, "HTTP_PROXY"), None);
    }

    #[test]
    fn test_deployment_env_var_source() {
        let deployment = make_deployment(vec![EnvVar {
            name: "POD_NAMESPACE".to_string(),
            value_from: Some(EnvVarSource {
                field_ref: Some(ObjectFieldSelector {
                    field_path: "metadata.namespace".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }]);

        let source = deployment_env_var_source(&deployment, "POD_NAMESPACE").unwrap();
        assert_eq!(
            source.field_ref.unwrap().field_path,
            "metadata.namespace"
        );
    }
}
