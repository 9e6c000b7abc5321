use chrono::{DateTime, Utc};
use inquiry_models::contact::ContactInquiry;
use inquiry_persistence_contracts::{contact::ContactRepository, Database, Transaction};
use inquiry_persistence_postgres::contact::PostgresContactRepository;
use pretty_assertions::assert_eq;
use uuid::Uuid;

mod common;

const REPO: PostgresContactRepository = PostgresContactRepository;

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn create_and_get() {
    let db = common::setup().await;
    let inquiry = inquiry(Some("ACME"), Some("genai"));

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &inquiry).await.unwrap();
    txn.commit().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    assert_eq!(REPO.get(&mut txn, inquiry.id).await.unwrap(), Some(inquiry));
    assert_eq!(
        REPO.get(&mut txn, Uuid::from_u128(2).into()).await.unwrap(),
        None
    );
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn optional_columns() {
    let db = common::setup().await;
    let inquiry = inquiry(None, None);

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &inquiry).await.unwrap();
    let result = REPO.get(&mut txn, inquiry.id).await.unwrap().unwrap();

    assert_eq!(result.company, None);
    assert_eq!(result.interest_label(), "Not specified");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database"]
async fn rollback() {
    let db = common::setup().await;
    let inquiry = inquiry(None, None);

    let mut txn = db.begin_transaction().await.unwrap();
    REPO.create(&mut txn, &inquiry).await.unwrap();
    txn.rollback().await.unwrap();

    let mut txn = db.begin_transaction().await.unwrap();
    assert_eq!(REPO.get(&mut txn, inquiry.id).await.unwrap(), None);
}

fn inquiry(company: Option<&str>, interest: Option<&str>) -> ContactInquiry {
    ContactInquiry {
        id: Uuid::from_u128(1).into(),
        name: "Jane Doe".to_owned().try_into().unwrap(),
        email: "jane@example.com".parse().unwrap(),
        company: company.map(|x| x.to_owned().try_into().unwrap()),
        interest: interest.map(|x| x.to_owned().try_into().unwrap()),
        message: "Interested in data engineering services"
            .to_owned()
            .try_into().unwrap(),
        created_at: DateTime::<Utc>::from_timestamp(1_732_104_000, 0).unwrap(),
    }
}
