//! Scripted end-to-end scenario against a running neogate server.
//!
//! Drives every endpoint once: health, node create/read/update, a
//! relationship, a custom query, then cleanup with a delete-then-404
//! check.

use anyhow::{bail, ensure, Context, Result};
use serde_json::json;

use neogate_core::Properties;

use crate::api::ApiClient;

fn props(pairs: &[(&str, serde_json::Value)]) -> Properties {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

pub async fn run_scenario(client: &ApiClient) -> Result<()> {
    // 1. Health check.
    let health = client.health().await.context("health check failed")?;
    ensure!(
        health.database_connection,
        "server reports no database connection"
    );
    tracing::info!(status = %health.status, "Health check passed");

    // 2. Person node.
    let person = client
        .create_node(
            "Person",
            &props(&[
                ("name", json!("Alice Smith")),
                ("age", json!(32)),
                ("occupation", json!("Software Engineer")),
            ]),
        )
        .await
        .context("creating Person node")?;
    tracing::info!(id = person.id, "Created Person node");

    // 3. Company node.
    let company = client
        .create_node(
            "Company",
            &props(&[
                ("name", json!("Tech Innovations Inc")),
                ("industry", json!("Software")),
                ("founded", json!(2010)),
            ]),
        )
        .await
        .context("creating Company node")?;
    tracing::info!(id = company.id, "Created Company node");

    // 4. Relationship between them.
    let rel = client
        .create_relationship(
            person.id,
            company.id,
            "WORKS_AT",
            &props(&[
                ("role", json!("Senior Developer")),
                ("since", json!(2018)),
                ("salary", json!(120000)),
            ]),
        )
        .await
        .context("creating WORKS_AT relationship")?;
    let Some(rel) = rel else {
        bail!("relationship create returned an empty body for two live nodes");
    };
    ensure!(rel.rel_type == "WORKS_AT", "unexpected relationship type");
    ensure!(
        rel.properties.get("role") == Some(&json!("Senior Developer")),
        "relationship properties did not round-trip"
    );
    ensure!(
        rel.properties.contains_key("created_at"),
        "relationship is missing created_at"
    );
    tracing::info!(id = rel.id, "Created relationship");

    // 5. Read the person back.
    let fetched = client.get_node(person.id).await.context("getting person")?;
    ensure!(
        fetched.properties.get("name") == Some(&json!("Alice Smith")),
        "fetched person does not match created person"
    );
    let created_at = fetched
        .properties
        .get("created_at")
        .and_then(|v| v.as_str())
        .context("person is missing created_at")?
        .to_string();

    // 6. Update the person; the merge keeps untouched fields.
    let updated = client
        .update_node(
            person.id,
            &props(&[
                ("age", json!(33)),
                ("skills", json!(["Python", "Neo4j", "Docker"])),
            ]),
        )
        .await
        .context("updating person")?;
    ensure!(updated.properties.get("age") == Some(&json!(33)), "age not updated");
    ensure!(
        updated.properties.get("name") == Some(&json!("Alice Smith")),
        "update dropped an untouched field"
    );
    let updated_at = updated
        .properties
        .get("updated_at")
        .and_then(|v| v.as_str())
        .context("person is missing updated_at")?;
    ensure!(
        updated_at >= created_at.as_str(),
        "updated_at is older than created_at"
    );
    tracing::info!(id = person.id, "Updated person");

    // 7. Match the relationship with a custom read query.
    let rows = client
        .run_cypher(
            "MATCH (p:Person)-[r:WORKS_AT]->(c:Company)
             WHERE id(p) = $person_id
             RETURN p, r, c",
            &props(&[("person_id", json!(person.id))]),
            None,
        )
        .await
        .context("running custom query")?;
    ensure!(!rows.is_empty(), "custom query found no relationship");
    tracing::info!(rows = rows.len(), "Custom query returned rows");

    // 8. Cleanup: delete both nodes and verify the person is gone.
    client
        .delete_node(person.id)
        .await
        .context("deleting person")?;
    client
        .delete_node(company.id)
        .await
        .context("deleting company")?;
    ensure!(
        client.try_get_node(person.id).await?.is_none(),
        "person still present after delete"
    );
    tracing::info!("Cleanup complete");

    Ok(())
}
