use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::error::HarnessError;
use crate::fixture::Fixture;
use crate::models::{Book, Order, OrderResponse, Token};
use crate::scenario::{Group, Scenario};
use crate::schema::BodySchema;

// Well above the handful of books the service carries
const UNKNOWN_BOOK_ID: u32 = 9999;

pub struct BooksSchema;

#[async_trait]
impl Scenario for BooksSchema {
    fn name(&self) -> &'static str {
        "books_schema"
    }

    fn group(&self) -> Group {
        Group::Books
    }

    fn description(&self) -> &'static str {
        "GET /books matches the books schema within the time limit"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let schema = BodySchema::books()?;
        let response = fixture.books().list_books().await?;
        response
            .expect_status(200)?
            .expect_schema(&schema)?
            .expect_within(fixture.config().response_time_limit())?;
        Ok(())
    }
}

pub struct GetBookById;

#[async_trait]
impl Scenario for GetBookById {
    fn name(&self) -> &'static str {
        "books_get_by_id"
    }

    fn group(&self) -> Group {
        Group::Books
    }

    fn description(&self) -> &'static str {
        "GET /books/1 returns the book, an unknown id returns 404"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let books = fixture.books();

        let found = books.get_book(1).await?;
        let book: Book = found.expect_status(200)?.json()?;
        if book.id != 1 {
            return Err(HarnessError::assertion(format!(
                "Expected book 1, found book {}",
                book.id
            )));
        }

        books.get_book(UNKNOWN_BOOK_ID).await?.expect_status(404)?;
        Ok(())
    }
}

pub struct ListOrders;

#[async_trait]
impl Scenario for ListOrders {
    fn name(&self) -> &'static str {
        "orders_list"
    }

    fn group(&self) -> Group {
        Group::Books
    }

    fn description(&self) -> &'static str {
        "GET /orders with a valid token returns 200"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let token = fixture.token().await?;
        fixture.books().list_orders(&token).await?.expect_status(200)?;
        Ok(())
    }
}

pub struct OrderWithInvalidToken;

#[async_trait]
impl Scenario for OrderWithInvalidToken {
    fn name(&self) -> &'static str {
        "orders_invalid_token"
    }

    fn group(&self) -> Group {
        Group::Books
    }

    fn description(&self) -> &'static str {
        "POST /orders with a bogus token returns 401"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let order = Order::new(1, fixture.generator().customer_name());
        fixture
            .books()
            .submit_order(&Token::new("invalid-token"), &order)
            .await?
            .expect_status(401)?;
        Ok(())
    }
}

pub struct OrderWithEmptyBody;

#[async_trait]
impl Scenario for OrderWithEmptyBody {
    fn name(&self) -> &'static str {
        "orders_empty_body"
    }

    fn group(&self) -> Group {
        Group::Books
    }

    fn description(&self) -> &'static str {
        "POST /orders with a valid token and an empty body returns 400"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let token = fixture.token().await?;
        fixture
            .books()
            .submit_order(&token, &json!({}))
            .await?
            .expect_status(400)?;
        Ok(())
    }
}

pub struct SubmitOrder;

#[async_trait]
impl Scenario for SubmitOrder {
    fn name(&self) -> &'static str {
        "orders_submit"
    }

    fn group(&self) -> Group {
        Group::Books
    }

    fn description(&self) -> &'static str {
        "POST /orders with a valid token creates an order"
    }

    async fn run(&self, fixture: &Fixture) -> Result<(), HarnessError> {
        let token = fixture.token().await?;
        let order = Order::new(1, fixture.generator().customer_name());

        let response = fixture.books().submit_order(&token, &order).await?;
        response.expect_status(201)?.expect_non_empty("orderId")?;
        let created: OrderResponse = response.json()?;
        if !created.created {
            return Err(HarnessError::assertion("Order was not marked as created"));
        }
        info!(order_id = %created.order_id, "Submitted order");
        Ok(())
    }
}
