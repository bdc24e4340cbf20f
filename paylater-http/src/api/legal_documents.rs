//! Legal document retrieval.

use std::sync::Arc;

use http::{HeaderMap, Method};

use super::populate_uri;
use crate::auth::Credentials;
use crate::communicator::Communicator;
use crate::connection::{Connection, HttpConnection};
use crate::error::PayLaterError;
use crate::marshaller::{JsonMarshaller, Marshaller};

/// Operations that fetch legal documents for a purchase.
#[derive(Debug)]
pub struct LegalDocumentsApi<C = HttpConnection, M = JsonMarshaller> {
    communicator: Arc<Communicator<C, M>>,
}

impl<C, M> LegalDocumentsApi<C, M>
where
    C: Connection,
    M: Marshaller,
{
    /// Creates the API surface over a shared communicator.
    pub fn new(communicator: Arc<Communicator<C, M>>) -> Self {
        Self { communicator }
    }

    /// Generates the terms-and-conditions document for a purchase, as HTML.
    ///
    /// # Errors
    ///
    /// Any [`PayLaterError`] kind raised by the exchange.
    pub async fn terms_and_conditions(
        &self,
        purchase_id: &str,
        credentials: &Credentials,
    ) -> Result<String, PayLaterError> {
        let uri = populate_uri(
            "/purchase/legaldocuments/termsandconditions/{purchaseId}",
            &[("purchaseId", purchase_id)],
        );
        let mut headers = HeaderMap::new();
        credentials.apply(&mut headers);
        self.communicator
            .execute_text::<()>(Method::GET, &uri, headers, None)
            .await
    }
}
