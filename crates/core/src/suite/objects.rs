use async_trait::async_trait;
use tracing::info;

use crate::error::HarnessError;
use crate::fixture::Fixture;
use crate::models::{DeleteResponse, GenericObject, NewObject};
use crate::scenario::{Group, Scenario};
use crate::services::ObjectsApi;

fn laptop(price: f64) -> NewObject {
    NewObject::new("Apple MacBook Pro 16")
        .with("year", 2019)
        .with("price", price)
        .with("CPU model", "Intel Core i9")
        .with("Hard disk size", "1 TB")
}

/// A created object must be served back under its id.
async fn expect_retrievable(
    objects: &ObjectsApi,
    id: &str,
    name: &str,
) -> Result<(), HarnessError> {
    let response = objects.get(id).await?;
    response
        .expect_status(200)?
        .expect_field("id", id)?
        .expect_field("name", name)?;
    Ok(())
}

pub struct ListObjects;

#[async_trait]
impl Scenario for ListObjects {
    fn name(&self) -> &'static str {
        "objects_list"
    }

    fn group(&self) -> Group {
        Group::Objects
    }

    fn description(&self) -> &'static str {
        "GET /objects returns a non-empty list"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let response = fixture.objects().list().await?;
        response.expect_status(200)?.expect_non_empty("")?;
        Ok(())
    }
}

pub struct GetObjectById;

#[async_trait]
impl Scenario for GetObjectById {
    fn name(&self) -> &'static str {
        "objects_get_by_id"
    }

    fn group(&self) -> Group {
        Group::Objects
    }

    fn description(&self) -> &'static str {
        "GET /objects/1 returns the seeded Pixel 6 Pro"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let response = fixture.objects().get("1").await?;
        response
            .expect_status(200)?
            .expect_field("id", "1")?
            .expect_field("name", "Google Pixel 6 Pro")?
            .expect_field("data.color", "Cloudy White")?
            .expect_field("data.capacity", "128 GB")?;
        Ok(())
    }
}

pub struct CreateObject;

#[async_trait]
impl Scenario for CreateObject {
    fn name(&self) -> &'static str {
        "objects_create"
    }

    fn group(&self) -> Group {
        Group::Objects
    }

    fn description(&self) -> &'static str {
        "POST /objects returns a server-assigned id that GET serves back"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let objects = fixture.objects();
        let payload = laptop(1849.99);
        let response = objects.create(&payload).await?;
        response.expect_status(200)?.expect_non_empty("id")?;
        let created: GenericObject = response.json()?;
        info!(id = %created.id, "Created object");

        expect_retrievable(&objects, &created.id, &payload.name).await
    }
}

pub struct UpdateObject;

#[async_trait]
impl Scenario for UpdateObject {
    fn name(&self) -> &'static str {
        "objects_update"
    }

    fn group(&self) -> Group {
        Group::Objects
    }

    fn description(&self) -> &'static str {
        "PUT /objects/{id} replaces a freshly created object"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let objects = fixture.objects();
        let original = laptop(1849.99);
        let id = objects.create_id(&original).await?;
        expect_retrievable(&objects, &id, &original.name).await?;

        let replacement = laptop(2049.99).with("color", "silver");
        let response = objects.update(&id, &replacement).await?;
        response
            .expect_status(200)?
            .expect_field("id", id.as_str())?
            .expect_field("data.price", 2049.99)?
            .expect_field("data.color", "silver")?;
        Ok(())
    }
}

pub struct DeleteObject;

#[async_trait]
impl Scenario for DeleteObject {
    fn name(&self) -> &'static str {
        "objects_delete"
    }

    fn group(&self) -> Group {
        Group::Objects
    }

    fn description(&self) -> &'static str {
        "DELETE /objects/{id} confirms the deletion by id"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let objects = fixture.objects();
        let id = objects.create_id(&laptop(1849.99)).await?;

        let response = objects.delete(&id).await?;
        response.expect_status(200)?;
        let deleted: DeleteResponse = response.json()?;
        let expected = format!("Object with id = {id} has been deleted.");
        if deleted.message != expected {
            return Err(HarnessError::assertion(format!(
                "Expected message '{expected}', found '{}'",
                deleted.message
            )));
        }
        Ok(())
    }
}

pub struct ObjectFieldsByPath;

#[async_trait]
impl Scenario for ObjectFieldsByPath {
    fn name(&self) -> &'static str {
        "objects_fields_by_path"
    }

    fn group(&self) -> Group {
        Group::Objects
    }

    fn description(&self) -> &'static str {
        "Fields of /objects/1 can be extracted by dotted path"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let response = fixture.objects().get("1").await?;
        response.expect_status(200)?;

        let name = response.path_str("name")?;
        let capacity = response.path_str("data.capacity")?;
        info!(name = %name, capacity = %capacity, "Extracted fields");

        if name != "Google Pixel 6 Pro" || capacity != "128 GB" {
            return Err(HarnessError::assertion(format!(
                "Unexpected fields: name={name}, capacity={capacity}"
            )));
        }
        Ok(())
    }
}
