use bb8_postgres::tokio_postgres::Row;
use inquiry_models::contact::{ContactInquiry, ContactInquiryId};
use inquiry_persistence_contracts::contact::ContactRepository;
use uuid::Uuid;

use crate::{arg_indices, columns, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresContactRepository;

columns!(contact_inquiry as "ci": "id", "name", "email", "company", "interest", "message", "created_at");

impl ContactRepository<PostgresTransaction> for PostgresContactRepository {
    async fn get(
        &self,
        txn: &mut PostgresTransaction,
        id: ContactInquiryId,
    ) -> anyhow::Result<Option<ContactInquiry>> {
        txn.txn()?
            .query_opt(
                &format!("select {CONTACT_INQUIRY_COLS} from contact_inquiry ci where id=$1"),
                &[&*id],
            )
            .await?
            .map(|row| decode_contact_inquiry(&row))
            .transpose()
    }

    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        inquiry: &ContactInquiry,
    ) -> anyhow::Result<()> {
        txn.txn()?
            .execute(
                &format!(
                    "insert into contact_inquiry ({CONTACT_INQUIRY_COL_NAMES}) values ({})",
                    arg_indices(1..=CONTACT_INQUIRY_CNT)
                ),
                &[
                    &*inquiry.id,
                    &*inquiry.name,
                    &inquiry.email.as_str(),
                    &inquiry.company.as_deref(),
                    &inquiry.interest.as_deref(),
                    &*inquiry.message,
                    &inquiry.created_at,
                ],
            )
            .await?;
        Ok(())
    }
}

fn decode_contact_inquiry(row: &Row) -> anyhow::Result<ContactInquiry> {
    Ok(ContactInquiry {
        id: row.get::<_, Uuid>(0).into(),
        name: row.get::<_, String>(1).try_into()?,
        email: row.get::<_, String>(2).parse()?,
        company: row
            .get::<_, Option<String>>(3)
            .map(TryInto::try_into)
            .transpose()?,
        interest: row
            .get::<_, Option<String>>(4)
            .map(TryInto::try_into)
            .transpose()?,
        message: row.get::<_, String>(5).try_into()?,
        created_at: row.get(6),
    })
}
