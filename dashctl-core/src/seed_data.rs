//! Static seed dataset.
//!
//! The canonical dataset loaded by the seeder: one login user, six
//! customers, thirteen invoices and twelve months of revenue. Every record
//! carries a fixed key so that re-seeding skips rows that already exist.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use uuid::{uuid, Uuid};

use crate::model::InvoiceStatus;
use crate::validation::ValidationError;

/// Longest month code the revenue table accepts (`VARCHAR(4)`)
pub const MAX_MONTH_LEN: usize = 4;

/// Login user. `password` is plaintext here and hashed before storage.
#[derive(Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct CustomerRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

#[derive(Debug, Clone)]
pub struct InvoiceRecord {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// Amount in cents
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct RevenueRecord {
    /// Short month code, e.g. "Jan"
    pub month: String,
    pub revenue: i32,
}

/// Complete dataset handed to the seeder
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub users: Vec<UserRecord>,
    pub customers: Vec<CustomerRecord>,
    pub invoices: Vec<InvoiceRecord>,
    pub revenue: Vec<RevenueRecord>,
}

impl SeedData {
    /// The canonical placeholder dataset.
    pub fn placeholder() -> Self {
        let customers = vec![
            customer(
                uuid!("d6e15727-9fe1-4961-8c5b-ea44a9bd81aa"),
                "Evil Rabbit",
                "evil@rabbit.com",
                "/customers/evil-rabbit.png",
            ),
            customer(
                uuid!("3958dc9e-712f-4377-85e9-fec4b6a6442a"),
                "Delba de Oliveira",
                "delba@oliveira.com",
                "/customers/delba-de-oliveira.png",
            ),
            customer(
                uuid!("3958dc9e-742f-4377-85e9-fec4b6a6442a"),
                "Lee Robinson",
                "lee@robinson.com",
                "/customers/lee-robinson.png",
            ),
            customer(
                uuid!("76d65c26-f784-44a2-ac19-586678f7c2f2"),
                "Michael Novotny",
                "michael@novotny.com",
                "/customers/michael-novotny.png",
            ),
            customer(
                uuid!("cc27c14a-0acf-4f4a-a6c9-d45682c144b9"),
                "Amy Burns",
                "amy@burns.com",
                "/customers/amy-burns.png",
            ),
            customer(
                uuid!("13d07535-c59e-4157-a011-f8d2ef4e0cbb"),
                "Balazs Orban",
                "balazs@orban.com",
                "/customers/balazs-orban.png",
            ),
        ];

        use InvoiceStatus::{Paid, Pending};
        let c = |i: usize| customers[i].id;
        let invoices = vec![
            invoice(uuid!("80c1390b-1f57-46ca-9e2d-462eb49b39f3"), c(0), 15795, Pending, "2022-12-06"),
            invoice(uuid!("934e8d31-4f45-4877-9e52-5669c3cd8d79"), c(1), 20348, Pending, "2022-11-14"),
            invoice(uuid!("519049c0-3ba6-40c4-9b73-aa09d357cfa5"), c(4), 3040, Paid, "2022-10-29"),
            invoice(uuid!("23e081d1-c516-4499-8328-1db94f3137c2"), c(3), 44800, Paid, "2023-09-10"),
            invoice(uuid!("2348bb52-8418-43e8-a477-0544b6781b23"), c(5), 34577, Pending, "2023-08-05"),
            invoice(uuid!("76dcce39-3fc7-4db8-ad49-2afebc6a175a"), c(2), 54246, Pending, "2023-07-16"),
            invoice(uuid!("6f384aa4-b1fe-466a-a360-52216204ec39"), c(0), 666, Pending, "2023-06-27"),
            invoice(uuid!("bc25f0e2-9147-41ef-b7f5-89bfb0cc3196"), c(3), 32545, Paid, "2023-06-09"),
            invoice(uuid!("782dc46e-2956-40ff-9e28-a9aa9588581a"), c(4), 1250, Paid, "2023-06-17"),
            invoice(uuid!("2c998ca9-5a59-4457-9995-cdbbad3ea83e"), c(5), 8546, Paid, "2023-06-07"),
            invoice(uuid!("c4c4b65a-30e2-4373-9135-807a575f77d9"), c(1), 500, Paid, "2023-08-19"),
            invoice(uuid!("b3c91245-b517-4a03-8faa-bad077a5bbfb"), c(5), 8945, Paid, "2023-06-03"),
            invoice(uuid!("31eb62ca-e55d-4d71-be28-5cfe9f403b2c"), c(2), 1000, Paid, "2022-06-05"),
        ];

        let revenue = [
            ("Jan", 2000),
            ("Feb", 1800),
            ("Mar", 2200),
            ("Apr", 2500),
            ("May", 2300),
            ("Jun", 3200),
            ("Jul", 3500),
            ("Aug", 3700),
            ("Sep", 2500),
            ("Oct", 2800),
            ("Nov", 3000),
            ("Dec", 4800),
        ]
        .into_iter()
        .map(|(month, revenue)| RevenueRecord {
            month: month.to_owned(),
            revenue,
        })
        .collect();

        Self {
            users: vec![UserRecord {
                id: uuid!("410544b2-4001-4271-9855-fec4b6a6442a"),
                name: "User".to_owned(),
                email: "user@nextmail.com".to_owned(),
                password: "123456".to_owned(),
            }],
            customers,
            invoices,
            revenue,
        }
    }

    /// Check the dataset's own invariants before it reaches the store.
    ///
    /// # Rules
    /// - ids unique per table, user emails unique, revenue months unique
    /// - every invoice references a customer in this dataset
    /// - invoice amounts are non-negative
    /// - month codes are 1..=4 characters
    pub fn validate(&self) -> Result<(), ValidationError> {
        unique(self.users.iter().map(|u| u.id.to_string()), "user id")?;
        unique(self.users.iter().map(|u| u.email.clone()), "user email")?;
        for user in &self.users {
            if user.password.is_empty() {
                return Err(ValidationError::Empty { field: "user password" });
            }
        }

        unique(self.customers.iter().map(|c| c.id.to_string()), "customer id")?;
        let customer_ids: HashSet<Uuid> = self.customers.iter().map(|c| c.id).collect();

        unique(self.invoices.iter().map(|i| i.id.to_string()), "invoice id")?;
        for invoice in &self.invoices {
            if !customer_ids.contains(&invoice.customer_id) {
                return Err(ValidationError::UnknownReference {
                    field: "customer_id",
                    value: invoice.customer_id.to_string(),
                });
            }
            if invoice.amount < 0 {
                return Err(ValidationError::Negative {
                    field: "invoice amount",
                    value: i64::from(invoice.amount),
                });
            }
        }

        unique(self.revenue.iter().map(|r| r.month.clone()), "revenue month")?;
        for row in &self.revenue {
            if row.month.is_empty() {
                return Err(ValidationError::Empty { field: "revenue month" });
            }
            if row.month.chars().count() > MAX_MONTH_LEN {
                return Err(ValidationError::TooLong {
                    field: "revenue month",
                    max: MAX_MONTH_LEN,
                });
            }
        }

        Ok(())
    }
}

fn customer(id: Uuid, name: &str, email: &str, image_url: &str) -> CustomerRecord {
    CustomerRecord {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        image_url: image_url.to_owned(),
    }
}

fn invoice(
    id: Uuid,
    customer_id: Uuid,
    amount: i32,
    status: InvoiceStatus,
    date: &str,
) -> InvoiceRecord {
    InvoiceRecord {
        id,
        customer_id,
        amount,
        status,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("invalid seed date"),
    }
}

fn unique(
    values: impl Iterator<Item = String>,
    field: &'static str,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value.clone()) {
            return Err(ValidationError::Duplicate { field, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_valid() {
        let data = SeedData::placeholder();
        data.validate().unwrap();

        assert_eq!(data.users.len(), 1);
        assert_eq!(data.customers.len(), 6);
        assert_eq!(data.invoices.len(), 13);
        assert_eq!(data.revenue.len(), 12);
    }

    #[test]
    fn placeholder_amounts_are_cents() {
        let data = SeedData::placeholder();
        let paid: i64 = data
            .invoices
            .iter()
            .filter(|i| i.status == InvoiceStatus::Paid)
            .map(|i| i64::from(i.amount))
            .sum();
        let pending: i64 = data
            .invoices
            .iter()
            .filter(|i| i.status == InvoiceStatus::Pending)
            .map(|i| i64::from(i.amount))
            .sum();

        assert_eq!(paid, 100_626);
        assert_eq!(pending, 125_632);
    }

    #[test]
    fn rejects_dangling_customer() {
        let mut data = SeedData::placeholder();
        data.invoices[0].customer_id = Uuid::nil();

        let err = data.validate().unwrap_err();
        assert!(matches!(err, ValidationError::UnknownReference { field: "customer_id", .. }));
    }

    #[test]
    fn rejects_negative_amount() {
        let mut data = SeedData::placeholder();
        data.invoices[3].amount = -1;

        let err = data.validate().unwrap_err();
        assert!(matches!(err, ValidationError::Negative { value: -1, .. }));
    }

    #[test]
    fn rejects_long_month() {
        let mut data = SeedData::placeholder();
        data.revenue[0].month = "January".to_owned();

        let err = data.validate().unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 4, .. }));
    }

    #[test]
    fn rejects_duplicate_email() {
        let mut data = SeedData::placeholder();
        let mut second = data.users[0].clone();
        second.id = Uuid::new_v4();
        data.users.push(second);

        let err = data.validate().unwrap_err();
        assert!(matches!(err, ValidationError::Duplicate { field: "user email", .. }));
    }

    #[test]
    fn debug_redacts_password() {
        let data = SeedData::placeholder();
        let debug = format!("{:?}", data.users[0]);
        assert!(!debug.contains("123456"));
        assert!(debug.contains("<redacted>"));
    }
}
